//! formforge-store — form and response repositories.
//!
//! Implements the `FormStore` trait with an in-memory store for tests
//! and embedding, and a single-file JSON store for the CLI.

pub mod config;
pub mod json;
pub mod memory;

pub use config::{load_config, load_config_from, FormforgeConfig};
pub use formforge_core::error::StoreError;
pub use json::JsonStore;
pub use memory::MemoryStore;
