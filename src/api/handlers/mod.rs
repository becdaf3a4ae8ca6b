//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod compare;
pub mod health;

pub use compare::compare_handler;
pub use health::health_handler;
