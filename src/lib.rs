//! # Resource Tally
//!
//! A small web service that compares two infrastructure resource inventories
//! and draws one bar chart per inventory on a shared set of resource types.
//!
//! ## Accepted Inputs
//!
//! Each upload is JSON in one of two shapes:
//!
//! ```json
//! [{ "type": "azurerm_subnet", "count": 5 }]
//! ```
//!
//! ```json
//! { "resources": [{ "type": "azurerm_subnet" }, { "type": "azurerm_subnet" }] }
//! ```
//!
//! The list form is pre-aggregated (a repeated type replaces the earlier
//! count); the object form is counted by occurrence.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Datasets, counting strategies, label alignment
//! - **Application Layer** ([`application`]) - The comparison workflow
//! - **Infrastructure Layer** ([`infrastructure`]) - Chart drawing with plotters
//! - **API Layer** ([`api`]) - JSON endpoint, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Upload form and result page
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! # then open http://localhost:3000/
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ComparisonReport, ComparisonService, ShapePolicy};
    pub use crate::domain::chart::{ChartRenderer, EncodedChart};
    pub use crate::domain::entities::{AllLabels, RawDataset, ResourceCount};
    pub use crate::error::AppError;
    pub use crate::infrastructure::charts::{ChartDimensions, SvgBarChartRenderer};
    pub use crate::state::AppState;
}
