//! Core utilities shared across the application
//!
//! - `http`: HTTP client construction and ESPN cookie headers
//! - `password`: account password hashing

pub mod http;
pub mod password;

// Re-export commonly used items for convenience
pub use http::{build_client, league_cookie_headers};
pub use password::{hash_password, verify_password};
