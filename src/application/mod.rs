//! Application layer services implementing the comparison workflow.
//!
//! Services consume domain traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::comparison_service::ComparisonService`] - Parse, count, align and chart two uploads

pub mod services;
