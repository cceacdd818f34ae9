//! Shared types and models for the FarmTracker application
//!
//! This crate contains the crop reference data, growth stage resolution and
//! the canned plant assistant, shared between the backend and the browser
//! module (via WASM).

pub mod assistant;
pub mod growth;
pub mod models;
pub mod types;
pub mod validation;

pub use growth::*;
pub use models::*;
pub use types::*;
pub use validation::*;
