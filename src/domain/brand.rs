//! Brand - Tenant Configuration
//!
//! A brand is a site-specific configuration object. The resolver only cares
//! about whether the brand suppresses the language selector; payloads may
//! carry more fields, which are ignored.

use serde::{Deserialize, Serialize};

/// Site-specific brand configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    /// When set, the language selector is hidden and the persisted
    /// language preference is neither read nor initialized
    #[serde(default)]
    pub hide_lang_dropdown: bool,
}
