//! HTTP request handlers

pub mod assistant;
pub mod crop;
pub mod health;
pub mod profile;

pub use assistant::*;
pub use crop::*;
pub use health::*;
pub use profile::*;
