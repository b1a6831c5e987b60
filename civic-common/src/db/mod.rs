//! Database schema, models and queries

pub mod init;
pub mod models;
pub mod queries;
pub mod seed;

pub use init::*;
pub use models::*;
pub use queries::*;
pub use seed::*;
