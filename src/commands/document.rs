//! Document Metadata Command Wrappers
//!
//! Lookups for the method catalogue and the About pages. The backend
//! resolves a `Document` reference into titles, markdown bodies, and
//! citation strings.

use serde::Serialize;

use super::{run, run_with, CommandError};
use crate::models::{Document, DocumentImplementations};

#[derive(Serialize)]
struct DocArgs<'a> {
    doc: &'a Document,
}

/// The full method catalogue, grouped by source document.
pub async fn all_implementations() -> Result<Vec<DocumentImplementations>, CommandError> {
    run("all_implementations").await
}

pub async fn document_title(doc: &Document) -> Result<String, CommandError> {
    run_with("document_title", &DocArgs { doc }).await
}

/// Short human-readable reference, e.g. "BR 187 | Chapter 1".
pub async fn friendly_reference(doc: &Document) -> Result<String, CommandError> {
    run_with("friendly_reference", &DocArgs { doc }).await
}

/// Full Harvard-style citation for the source document.
pub async fn harvard_reference(doc: &Document) -> Result<String, CommandError> {
    run_with("harvard_reference", &DocArgs { doc }).await
}

/// Markdown description of the source document.
pub async fn about_document(doc: &Document) -> Result<String, CommandError> {
    run_with("about_document", &DocArgs { doc }).await
}

/// Markdown description of the method itself.
pub async fn about_method(doc: &Document) -> Result<String, CommandError> {
    run_with("about_method", &DocArgs { doc }).await
}

/// Markdown statement of the method's range of applicability.
pub async fn method_limitations(doc: &Document) -> Result<String, CommandError> {
    run_with("method_limitations", &DocArgs { doc }).await
}
