//! # Vita Infrastructure
//!
//! Concrete implementations of the ports defined in `vita-core`.
//!
//! ## Feature Flags
//!
//! - `seed` (default) - Sample data set loadable through `InMemoryStore::seeded`

pub mod store;

pub use store::InMemoryStore;
