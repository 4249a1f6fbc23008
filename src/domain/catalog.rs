//! Culture Catalog
//!
//! Lookup indices over the static culture list, built once at construction.

use crate::domain::culture::{CultureRecord, builtin_cultures};
use ahash::AHashMap;
use serde::Serialize;
use std::sync::Arc;

/// Immutable lookup indices over a culture list
#[derive(Debug, Clone)]
pub struct CultureCatalog {
    /// Index by unique culture id
    by_id: AHashMap<u32, Arc<CultureRecord>>,
    /// Index by language code; the last record registered for a code wins
    by_code: AHashMap<String, Arc<CultureRecord>>,
}

impl CultureCatalog {
    /// Build both indices from a record list.
    ///
    /// Construction is a pure function of the input: building twice from the
    /// same list yields identical indices.
    pub fn from_records(records: Vec<CultureRecord>) -> Self {
        let mut by_id = AHashMap::with_capacity(records.len());
        let mut by_code = AHashMap::with_capacity(records.len());

        for record in records {
            let record = Arc::new(record);
            by_id.insert(record.culture_id, record.clone());
            by_code.insert(record.code.clone(), record);
        }

        Self { by_id, by_code }
    }

    /// The built-in culture catalog
    pub fn builtin() -> Self {
        Self::from_records(builtin_cultures())
    }

    /// Look up a record by its unique id
    pub fn by_id(&self, culture_id: u32) -> Option<Arc<CultureRecord>> {
        self.by_id.get(&culture_id).cloned()
    }

    /// Look up a record by language code
    pub fn by_code(&self, code: &str) -> Option<Arc<CultureRecord>> {
        self.by_code.get(code).cloned()
    }

    /// Resolve an explicit culture request from a query parameter.
    ///
    /// Legacy callers may pass either a numeric culture id or a language
    /// code, so both interpretations are attempted: first as a code, then as
    /// an id. The code attempt runs first so that the request lands on the
    /// same record a code lookup would produce.
    pub fn resolve_request(&self, request: &str) -> Option<Arc<CultureRecord>> {
        self.by_code(request)
            .or_else(|| request.parse::<u32>().ok().and_then(|id| self.by_id(id)))
    }

    /// All distinct records, keyed by id (duplicate codes stay distinct)
    pub fn records(&self) -> impl Iterator<Item = &Arc<CultureRecord>> {
        self.by_id.values()
    }

    /// All codes present in the code index
    pub fn codes(&self) -> Vec<String> {
        self.by_code.keys().cloned().collect()
    }

    /// Number of distinct cultures
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl Default for CultureCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// A catalog record annotated for a language-selection listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CultureChoice {
    /// Defensive copy of the catalog record
    #[serde(flatten)]
    pub culture: CultureRecord,
    /// Whether this record's code matches the resolver's default language
    pub selected: bool,
}
