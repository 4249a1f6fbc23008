//! CultureEvent - Resolver Event Enum
//!
//! Events emitted by the resolver to its subscribers.

use crate::domain::CultureRecord;
use chrono::{DateTime, Local};
use std::sync::Arc;

/// Events emitted after culture transitions
#[derive(Debug, Clone)]
pub enum CultureEvent {
    /// A culture finished activating: the translation backend switched
    /// languages and the persisted preference was updated
    Ready {
        /// The newly active culture
        culture: Arc<CultureRecord>,
        /// When activation completed
        timestamp: DateTime<Local>,
    },
}

impl CultureEvent {
    /// Create a ready event with the current timestamp
    pub fn ready(culture: Arc<CultureRecord>) -> Self {
        Self::Ready {
            culture,
            timestamp: Local::now(),
        }
    }

    /// The culture this event refers to
    pub fn culture(&self) -> &Arc<CultureRecord> {
        match self {
            Self::Ready { culture, .. } => culture,
        }
    }
}
