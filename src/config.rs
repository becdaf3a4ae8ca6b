//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"
//! export LOG_FORMAT="json"
//! export MAX_UPLOAD_BYTES="1048576"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `MAX_UPLOAD_BYTES` - Request body limit for uploads (default: 4 MiB)
//! - `CHART_WIDTH` / `CHART_HEIGHT` - Chart size in pixels (default: 500x400)
//! - `STRICT_SHAPES` - Require object-form `file1` and list-form `file2` (default: false)

use anyhow::Result;
use std::env;

use crate::application::services::ShapePolicy;
use crate::infrastructure::charts::ChartDimensions;

const MIN_UPLOAD_BYTES: usize = 1024;
const MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;
const CHART_SIDE_RANGE: std::ops::RangeInclusive<u32> = 100..=4000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Upper bound for a whole upload request, both files included.
    pub max_upload_bytes: usize,
    pub chart_width: u32,
    pub chart_height: u32,
    /// When true, `file1` must be object-form and `file2` list-form.
    pub strict_shapes: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let max_upload_bytes = env::var("MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(4 * 1024 * 1024);

        let defaults = ChartDimensions::default();

        let chart_width = env::var("CHART_WIDTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.width);

        let chart_height = env::var("CHART_HEIGHT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.height);

        let strict_shapes = env::var("STRICT_SHAPES")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            max_upload_bytes,
            chart_width,
            chart_height,
            strict_shapes,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `max_upload_bytes` is outside 1 KiB..=64 MiB
    /// - a chart side is outside 100..=4000 pixels
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !(MIN_UPLOAD_BYTES..=MAX_UPLOAD_BYTES).contains(&self.max_upload_bytes) {
            anyhow::bail!(
                "MAX_UPLOAD_BYTES must be between {} and {}, got {}",
                MIN_UPLOAD_BYTES,
                MAX_UPLOAD_BYTES,
                self.max_upload_bytes
            );
        }

        for (name, value) in [
            ("CHART_WIDTH", self.chart_width),
            ("CHART_HEIGHT", self.chart_height),
        ] {
            if !CHART_SIDE_RANGE.contains(&value) {
                anyhow::bail!(
                    "{} must be between {} and {}, got {}",
                    name,
                    CHART_SIDE_RANGE.start(),
                    CHART_SIDE_RANGE.end(),
                    value
                );
            }
        }

        Ok(())
    }

    pub fn chart_dimensions(&self) -> ChartDimensions {
        ChartDimensions {
            width: self.chart_width,
            height: self.chart_height,
        }
    }

    pub fn shape_policy(&self) -> ShapePolicy {
        if self.strict_shapes {
            ShapePolicy::Strict
        } else {
            ShapePolicy::Detect
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Max upload size: {} bytes", self.max_upload_bytes);
        tracing::info!("  Chart size: {}x{}", self.chart_width, self.chart_height);
        tracing::info!("  Shape policy: {:?}", self.shape_policy());
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
