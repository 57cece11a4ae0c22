//! Domain models for field-level document masking.
//!
//! This module contains the data model shared by the masking engine and the
//! request/response boundary: field locations on a page raster, masking
//! rules, and the structures reported back to the caller.

pub mod quad;
pub mod report;
pub mod request;
pub mod rule;

pub use quad::{BoundingQuad, Rect};
pub use report::{MaskingDetail, MaskingMetadata, MaskingReport, MaskingResponse};
pub use request::{DocumentType, ExtractedField, MaskingRequest};
pub use rule::{MaskMode, MaskingConfig, MaskingRule};

/// Counts the alphanumeric characters of a value.
///
/// Masking passes skip everything else (spaces, punctuation), so rule
/// validation has to budget against this count rather than the raw length.
pub fn alnum_count(value: &str) -> usize {
    value.chars().filter(|c| c.is_alphanumeric()).count()
}
