//! Inbound request schema: extracted fields and the masking request.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::quad::BoundingQuad;
use super::rule::MaskingRule;

/// A field located by the upstream extraction collaborator.
///
/// The field name is the lookup key rules are matched against; the
/// confidence score is carried for the caller but unused by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedField {
    pub field: String,
    pub value: String,
    pub confidence: f32,
    #[serde(rename = "boundingBoxes")]
    pub bounding_quad: BoundingQuad,
}

/// Supported document categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "AADHAR")]
    Aadhar,
    #[serde(rename = "PANCARD")]
    Pancard,
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aadhar => write!(f, "AADHAR"),
            Self::Pancard => write!(f, "PANCARD"),
        }
    }
}

/// The full masking request as received from the caller.
///
/// `document_password` belongs to the upstream rasterization collaborator
/// (password-protected PDFs are authenticated there, not here).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskingRequest {
    pub document_id: String,
    pub input_file_uri: String,
    #[serde(default)]
    pub document_password: Option<String>,
    pub document_type: DocumentType,
    pub extracted_fields: Vec<ExtractedField>,
    pub masking_rules: Vec<MaskingRule>,
}
