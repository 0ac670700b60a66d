//! The in-memory entity store.

mod memory;
mod table;

#[cfg(feature = "seed")]
mod seed;

pub use memory::InMemoryStore;

#[cfg(test)]
mod tests;
