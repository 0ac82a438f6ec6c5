//! Error types for the salary_slip crate.

use thiserror::Error;

/// Failures surfaced by [`crate::slip::render`].
///
/// Composing the page layout itself cannot fail; missing and malformed record
/// fields degrade to documented defaults instead of erroring.  The only
/// failure path left is serializing the finished document through the PDF
/// backend.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The PDF backend rejected the document while writing it out.
    #[error("failed to serialize the PDF document: {0}")]
    Pdf(#[from] printpdf::Error),
}
