//! Downloadable report documents.
//!
//! This module provides:
//! - Greedy word wrap to a fixed line width
//! - Pagination onto A4 pages
//! - PDF rendering into memory
//! - Safe download file names

pub mod error;
pub mod filename;
pub mod layout;
pub mod pdf;
pub mod wrap;

#[cfg(test)]
mod wrap_props;

pub use error::DocumentError;
pub use filename::download_filename;
pub use layout::{Page, PageLayout, paginate};
pub use pdf::{ReportDocument, render_pdf, to_latin1};
pub use wrap::{PAGE_LINE_WIDTH, wrap_text};
