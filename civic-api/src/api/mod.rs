//! HTTP API handlers for civic-api

pub mod health;
pub mod representatives;

pub use health::health_routes;
pub use representatives::{get_representatives, representative_routes};
