//! Utility functions for request handling.
//!
//! - [`upload`] - Multipart extraction of the two dataset uploads

pub mod upload;
