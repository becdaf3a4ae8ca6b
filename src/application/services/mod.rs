//! Business logic services for the application layer.

pub mod comparison_service;

pub use comparison_service::{ComparisonReport, ComparisonService, ShapePolicy};
