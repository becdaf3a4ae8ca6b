//! HTML template rendering handlers for the web pages.

mod index;
mod result;

pub use index::index_handler;
pub use result::{CountRow, ResultTemplate, result_handler};
