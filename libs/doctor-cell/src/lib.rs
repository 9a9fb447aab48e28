pub mod handlers;
pub mod router;
pub mod models;
pub mod services;

// Re-export all models and services for external use
pub use models::*;
pub use services::*;

pub use services::directory::{find_by_id, first_with_specialty, query};
