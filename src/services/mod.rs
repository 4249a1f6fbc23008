//! Service Layer
//!
//! The service layer provides abstraction over the resolver's external
//! collaborators (translation backend, persistent store, brand lookup,
//! page location) and ships a concrete implementation of each.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      CultureResolver                          │
//! │  ┌──────────────┐ ┌──────────────┐ ┌─────────┐ ┌──────────┐ │
//! │  │ Translation  │ │    Brand     │ │ Culture │ │   Page   │ │
//! │  │   Provider   │ │   Provider   │ │  Store  │ │ Location │ │
//! │  └──────────────┘ └──────────────┘ └─────────┘ └──────────┘ │
//! └──────────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼ CultureEvent
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       Subscribers                             │
//! │              (language dropdown, layout, ...)                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```

mod brand;
mod location;
mod store;
mod translate;

pub use brand::*;
pub use location::*;
pub use store::*;
pub use translate::*;
