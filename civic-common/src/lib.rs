//! # Civic Tracker Common Library
//!
//! Shared code for the civic tracker binaries:
//! - Database schema, typed records and queries
//! - Title formatting for the lookup response
//! - Configuration loading
//! - Build identification
//! - Common error type

pub mod build_info;
pub mod config;
pub mod db;
pub mod error;
pub mod title;

pub use error::{Error, Result};
pub use title::format_title;
