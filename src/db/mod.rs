//! Persistence layer

pub mod store;

pub use store::{ResultStore, UpsertOutcome};
