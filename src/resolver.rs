//! Culture Resolver
//!
//! Owns the culture catalog and the active-culture state, and orchestrates
//! the collaborators in [`crate::services`]. Resolution precedence: an
//! explicit `cuid` query parameter beats the resolved default language,
//! which beats nothing.
//!
//! ## Data flow
//!
//! ```text
//! query param ──┐
//! system lang ──┼─▶ initialize() ─▶ tentative culture
//! brand config ─┤                        │
//! stored pref ──┘                        ▼
//!                              re-resolve + activate ─▶ Ready event
//! ```

use crate::constants::{
    BRAND_FETCH_TIMEOUT_SECS, CULTURE_PARAM, DEFAULT_FALLBACK_CULTURE_ID, DEFAULT_MISSING_LANGUAGE,
};
use crate::domain::{CultureCatalog, CultureChoice, CultureRecord, TextDirection};
use crate::error::{Error, Result};
use crate::eventing::{CultureEvent, EventBus, SubscriptionId};
use crate::services::{BrandProvider, CultureStore, PageLocation, TranslationProvider};
use crossbeam_channel::Receiver;
use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Tunables for culture resolution
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Culture id reported by `culture_id()` before resolution has
    /// produced an active culture
    pub fallback_culture_id: u32,
    /// Language forced when system-language detection is inconclusive
    pub missing_language: String,
    /// How long the brand lookup may run before initialization falls back
    /// to the tentative culture
    pub brand_fetch_timeout_ms: u64,
}

impl ResolverConfig {
    /// Brand lookup deadline as a [`Duration`]
    pub fn brand_fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.brand_fetch_timeout_ms)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fallback_culture_id: DEFAULT_FALLBACK_CULTURE_ID,
            missing_language: DEFAULT_MISSING_LANGUAGE.to_string(),
            brand_fetch_timeout_ms: BRAND_FETCH_TIMEOUT_SECS * 1000,
        }
    }
}

/// Mutable resolver state; the resolver's own methods are the only writer
#[derive(Debug, Default)]
struct ResolverState {
    /// The active culture, unset until resolution produces one
    current: Option<Arc<CultureRecord>>,
    /// The language last used as resolution fallback
    default_lang: String,
}

/// Resolves and persists the application's active culture.
///
/// Constructed once at application startup and shared by handle; there is
/// no ambient global instance.
pub struct CultureResolver {
    catalog: CultureCatalog,
    config: ResolverConfig,
    translator: Arc<dyn TranslationProvider>,
    store: Arc<dyn CultureStore>,
    brands: Arc<dyn BrandProvider>,
    location: Arc<dyn PageLocation>,
    events: EventBus,
    state: Mutex<ResolverState>,
    /// Monotonic counter deciding which in-flight activation may commit
    activation_seq: AtomicU64,
}

impl CultureResolver {
    /// Wire a resolver from its catalog, config, and collaborators
    pub fn new(
        catalog: CultureCatalog,
        config: ResolverConfig,
        translator: Arc<dyn TranslationProvider>,
        store: Arc<dyn CultureStore>,
        brands: Arc<dyn BrandProvider>,
        location: Arc<dyn PageLocation>,
    ) -> Self {
        Self {
            catalog,
            config,
            translator,
            store,
            brands,
            location,
            events: EventBus::new(),
            state: Mutex::new(ResolverState::default()),
            activation_seq: AtomicU64::new(0),
        }
    }

    // ==================== Initialization ====================

    /// Resolve the startup culture. Runs once.
    ///
    /// A tentative culture is derived from the `cuid` query parameter and
    /// the detected system language, then refined once the brand lookup
    /// settles: brands that keep the language selector pull the persisted
    /// preference into play (initializing it on first visit), and the final
    /// culture is activated. When the brand lookup fails or times out the
    /// resolver stays on the tentative culture: getters keep working, but
    /// the store is untouched and no `Ready` event fires. That degraded
    /// mode is accepted, not an error.
    pub async fn initialize(&self) -> Result<()> {
        let request = self.location.query_param(CULTURE_PARAM);
        let current_dir = self.location.current_dir();

        self.translator.register_cultures(&self.catalog.codes());

        let mut default_lang = self
            .translator
            .detect_language(&self.config.missing_language);

        let tentative = self.resolve(request.as_deref(), &default_lang);
        {
            let mut state = self.state();
            state.default_lang = default_lang.clone();
            state.current = tentative.clone();
        }
        debug!(
            culture = ?tentative.as_ref().map(|c| c.code.as_str()),
            "Tentative culture set"
        );

        let fetch = self.brands.fetch_brand(&current_dir);
        let brand = match tokio::time::timeout(self.config.brand_fetch_timeout(), fetch).await {
            Ok(Ok(brand)) => brand,
            Ok(Err(e)) => {
                warn!(error = %e, dir = %current_dir, "Brand lookup failed; keeping tentative culture");
                return Ok(());
            }
            Err(_) => {
                warn!(
                    dir = %current_dir,
                    timeout_ms = self.config.brand_fetch_timeout_ms,
                    "Brand lookup timed out; keeping tentative culture"
                );
                return Ok(());
            }
        };

        if let Some(brand) = &brand {
            if !brand.hide_lang_dropdown {
                // The store acts as cache-or-initialize for the default
                // language: a saved preference wins, a missing one is
                // seeded with the detected language.
                match self.store.get() {
                    Some(saved) => default_lang = saved,
                    None => {
                        if let Err(e) = self.store.set(&default_lang) {
                            error!(error = %e, "Failed to initialize culture store");
                        }
                    }
                }
            }
        }

        let resolved = self.resolve(request.as_deref(), &default_lang);
        {
            let mut state = self.state();
            state.default_lang = default_lang.clone();
            state.current = resolved.clone();
        }

        let Some(resolved) = resolved else {
            warn!(default_lang = %default_lang, "No catalog entry for resolved language");
            return Ok(());
        };

        // Activation is deferred one scheduling tick so subscribers created
        // alongside the resolver are mounted before Ready fires.
        tokio::task::yield_now().await;
        info!(code = %resolved.code, id = resolved.culture_id, "Activating resolved culture");
        self.set_culture(&resolved.code).await?;
        Ok(())
    }

    /// Precedence: explicit culture request, then default language.
    fn resolve(&self, request: Option<&str>, default_lang: &str) -> Option<Arc<CultureRecord>> {
        request
            .and_then(|req| self.catalog.resolve_request(req))
            .or_else(|| self.catalog.by_code(default_lang))
    }

    // ==================== Mutation ====================

    /// Switch to the culture registered for `code`.
    ///
    /// The in-memory culture changes before activation completes, so
    /// getters observe the new culture immediately (optimistic update).
    /// On successful activation the code is persisted and a `Ready` event
    /// is broadcast, unless a newer `set_culture` call was initiated in
    /// the meantime, in which case this completion is discarded
    /// (last-writer-wins by initiation order). On activation failure the
    /// previous culture is restored and nothing is persisted or emitted.
    pub async fn set_culture(&self, code: &str) -> Result<Arc<CultureRecord>> {
        let record = self
            .catalog
            .by_code(code)
            .ok_or_else(|| Error::UnknownCultureCode {
                code: code.to_string(),
            })?;

        // Claim a sequence number; only the latest-initiated call commits.
        let seq = self.activation_seq.fetch_add(1, Ordering::SeqCst) + 1;

        let previous = {
            let mut state = self.state();
            state.current.replace(record.clone())
        };

        match self.translator.activate(&record.code).await {
            Ok(()) => {
                if self.is_latest(seq) {
                    if let Err(e) = self.store.set(&record.code) {
                        // Persistence is best-effort; the activation stands.
                        error!(error = %e, code = %record.code, "Failed to persist culture");
                    }
                    self.events.broadcast(CultureEvent::ready(record.clone()));
                } else {
                    debug!(code = %record.code, "Stale activation discarded");
                }
                Ok(record)
            }
            Err(e) => {
                if self.is_latest(seq) {
                    self.state().current = previous;
                }
                warn!(error = %e, code = %record.code, "Culture activation failed");
                Err(e)
            }
        }
    }

    fn is_latest(&self, seq: u64) -> bool {
        self.activation_seq.load(Ordering::SeqCst) == seq
    }

    // ==================== Listing ====================

    /// All catalog cultures minus `exclude`, as defensive copies sorted
    /// ascending by display name, each flagged `selected` when its code
    /// matches the resolver's default language.
    pub fn cultures(&self, exclude: &[u32]) -> Vec<CultureChoice> {
        let default_lang = self.state().default_lang.clone();

        let mut choices: Vec<CultureChoice> = self
            .catalog
            .records()
            .filter(|record| !exclude.contains(&record.culture_id))
            .map(|record| CultureChoice {
                selected: record.code == default_lang,
                culture: (**record).clone(),
            })
            .collect();

        choices.sort_by(|a, b| a.culture.name.cmp(&b.culture.name));
        choices
    }

    // ==================== Getters ====================

    /// Code of the active culture; `None` before resolution
    pub fn culture_code(&self) -> Option<String> {
        self.state().current.as_ref().map(|c| c.code.clone())
    }

    /// Font override of the active culture; `None` when the culture is
    /// unset or carries no override
    pub fn custom_font(&self) -> Option<String> {
        self.state()
            .current
            .as_ref()
            .and_then(|c| c.custom_font.clone())
    }

    /// Id of the active culture, or the configured fallback id before
    /// resolution
    pub fn culture_id(&self) -> u32 {
        self.state()
            .current
            .as_ref()
            .map(|c| c.culture_id)
            .unwrap_or(self.config.fallback_culture_id)
    }

    /// Text direction of the active culture; `None` before resolution
    pub fn text_direction(&self) -> Option<TextDirection> {
        self.state().current.as_ref().map(|c| c.text_direction)
    }

    /// `"ltr"` / `"rtl"` form of the active text direction
    pub fn short_text_direction(&self) -> Option<&'static str> {
        self.text_direction().map(TextDirection::short_code)
    }

    /// The language last used as resolution fallback
    pub fn default_lang(&self) -> String {
        self.state().default_lang.clone()
    }

    /// The active culture record
    pub fn current_culture(&self) -> Option<Arc<CultureRecord>> {
        self.state().current.clone()
    }

    // ==================== Events ====================

    /// Register an observer for culture events
    pub fn subscribe(&self) -> (SubscriptionId, Receiver<CultureEvent>) {
        self.events.subscribe()
    }

    /// Remove a previously registered observer
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.events.unsubscribe(id)
    }

    fn state(&self) -> MutexGuard<'_, ResolverState> {
        self.state.lock().expect("resolver state poisoned")
    }
}

impl std::fmt::Debug for CultureResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CultureResolver")
            .field("catalog_len", &self.catalog.len())
            .field("current", &self.culture_code())
            .field("default_lang", &self.default_lang())
            .finish()
    }
}
