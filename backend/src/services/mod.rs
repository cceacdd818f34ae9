//! Business logic services for the FarmTracker server

pub mod assistant;
pub mod dashboard;
pub mod profile;

pub use assistant::AssistantService;
pub use dashboard::DashboardService;
pub use profile::{ProfileService, ProfileStore};
