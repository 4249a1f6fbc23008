//! Translation Service
//!
//! Abstraction over the translation backend, plus the rust-i18n
//! implementation used in production. The backend owns language detection
//! and the asynchronous activation of a language's translation resources.

use crate::error::{Error, Result};
use crate::helpers::primary_language_tag;
use ahash::AHashSet;
use futures::future::BoxFuture;
use std::sync::RwLock;

/// Contract for the translation backend
pub trait TranslationProvider: Send + Sync {
    /// Register the culture codes the backend may activate (the catalog's
    /// code index keys)
    fn register_cultures(&self, codes: &[String]);

    /// Best-guess system language code; `missing` is forced when detection
    /// fails or produces an unregistered code
    fn detect_language(&self, missing: &str) -> String;

    /// Asynchronously activate a language, resolving when its translation
    /// resources are ready
    fn activate(&self, code: &str) -> BoxFuture<'static, Result<()>>;
}

/// rust-i18n backed translation provider.
///
/// Translations are compiled from `locales/` at build time;
/// activation switches the process-wide locale.
#[derive(Debug, Default)]
pub struct I18nTranslator {
    registered: RwLock<AHashSet<String>>,
}

impl I18nTranslator {
    /// Create a translator with no registered cultures
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a key in the currently active language
    pub fn translate(&self, key: &str) -> String {
        rust_i18n::t!(key).to_string()
    }

    fn is_registered(&self, code: &str) -> bool {
        self.registered
            .read()
            .expect("registered set poisoned")
            .contains(code)
    }
}

impl TranslationProvider for I18nTranslator {
    fn register_cultures(&self, codes: &[String]) {
        let mut registered = self.registered.write().expect("registered set poisoned");
        registered.clear();
        registered.extend(codes.iter().cloned());
    }

    fn detect_language(&self, missing: &str) -> String {
        let raw = locale_config::Locale::current().to_string();
        let tag = primary_language_tag(&raw).to_lowercase();

        if !tag.is_empty() && self.is_registered(&tag) {
            tracing::debug!(detected = %tag, "System language detected");
            tag
        } else {
            tracing::debug!(raw = %raw, fallback = %missing, "System language not usable");
            missing.to_string()
        }
    }

    fn activate(&self, code: &str) -> BoxFuture<'static, Result<()>> {
        let code = code.to_string();
        let registered = self.is_registered(&code);
        let compiled = rust_i18n::available_locales!().iter().any(|l| *l == code);

        Box::pin(async move {
            if !registered {
                return Err(Error::ActivationFailed {
                    code,
                    reason: "code is not registered with the backend".to_string(),
                });
            }
            if !compiled {
                return Err(Error::ActivationFailed {
                    code,
                    reason: "no translations compiled for this code".to_string(),
                });
            }

            rust_i18n::set_locale(&code);
            tracing::info!(code = %code, "Translation language activated");
            Ok(())
        })
    }
}
