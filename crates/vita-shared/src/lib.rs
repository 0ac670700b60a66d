//! # Vita Shared
//!
//! Wire types shared by the API server and its clients: request bodies,
//! query strings and the error envelope.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
