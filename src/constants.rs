//! Resolver Constants
//!
//! Centralized defaults for culture resolution and persistence.

/// Query-string parameter carrying an explicit culture request.
/// The value may be a numeric culture id or a culture code.
pub const CULTURE_PARAM: &str = "cuid";

/// File name of the TOML-backed culture store
pub const STORE_FILE_NAME: &str = "culture.toml";

/// Culture id served by `culture_id()` before resolution has produced
/// an active culture (the built-in catalog's generic English entry)
pub const DEFAULT_FALLBACK_CULTURE_ID: u32 = 69;

/// Language code forced when system-language detection is inconclusive
pub const DEFAULT_MISSING_LANGUAGE: &str = "en";

/// Brand configuration fetch timeout
pub const BRAND_FETCH_TIMEOUT_SECS: u64 = 5;
