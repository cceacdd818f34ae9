//! Domain models for the FarmTracker application

mod chat;
mod crop;
mod dashboard;
mod growth;
mod profile;
mod timeline;

pub use chat::*;
pub use crop::*;
pub use dashboard::*;
pub use growth::*;
pub use profile::*;
pub use timeline::*;
