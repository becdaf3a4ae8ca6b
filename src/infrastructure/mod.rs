//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations backed by third-party libraries.
//!
//! # Modules
//!
//! - [`charts`] - Bar chart rendering with plotters

pub mod charts;
