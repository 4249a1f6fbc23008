//! Culture Service Library
//!
//! This crate resolves and persists a user's active locale ("culture") for a
//! front-end application. A culture is selected from a static catalog based
//! on a URL query parameter, a persisted store value, a brand-specific
//! configuration, and the system-detected default language. Once resolved,
//! the active culture's numeric id, code, text direction, and font override
//! are available through getters on [`resolver::CultureResolver`].

rust_i18n::i18n!("locales", fallback = "en");

pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod helpers;
pub mod resolver;
pub mod services;
