//! # Vita Core
//!
//! The domain layer of the Vita service.
//! This crate contains the entities, the geo-distance utility and the
//! matching, search and scoring rules, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod geo;
pub mod matching;
pub mod ports;
pub mod search;

pub use error::RepoError;
pub use geo::Coordinates;
