//! Outbound reporting: per-field masking details and the response schema.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::request::{DocumentType, ExtractedField};
use super::rule::{MaskMode, MaskingRule};

/// Record of one successfully applied masking rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskingDetail {
    pub original_value: String,
    pub masked_value: String,
    pub mask_type: MaskMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_first: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_last: Option<usize>,
    pub mask_char: char,
}

/// Aggregate metadata over all applied rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskingMetadata {
    pub masking_method: String,
    pub fields_processed: usize,
    pub document_type: String,
    pub masking_details: BTreeMap<String, MaskingDetail>,
}

/// The full response returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskingResponse {
    pub masked_file_uri: String,
    pub masked_fields: Vec<String>,
    pub metadata: MaskingMetadata,
}

/// Ordered accumulator the orchestrator fills while applying rules.
///
/// `masked_fields` records every rule application in caller order (a field
/// targeted by two rules appears twice); `details` keeps one entry per
/// field name, the last applied rule winning.
#[derive(Debug, Clone, Default)]
pub struct MaskingReport {
    pub masked_fields: Vec<String>,
    pub details: BTreeMap<String, MaskingDetail>,
}

impl MaskingReport {
    /// Records one applied rule.
    pub fn record(&mut self, rule: &MaskingRule, field: &ExtractedField, masked_value: String) {
        let config = &rule.masking_config;
        self.masked_fields.push(rule.field.clone());
        self.details.insert(
            rule.field.clone(),
            MaskingDetail {
                original_value: field.value.clone(),
                masked_value,
                mask_type: rule.mode,
                show_first: (config.mask_first > 0).then_some(config.mask_first),
                show_last: (config.mask_last > 0).then_some(config.mask_last),
                mask_char: config.mask_char,
            },
        );
    }

    /// Number of rule applications, the `fieldsProcessed` figure.
    pub fn fields_processed(&self) -> usize {
        self.masked_fields.len()
    }

    /// Consumes the report into the wire-format metadata block.
    pub fn into_metadata(self, document_type: DocumentType) -> MaskingMetadata {
        MaskingMetadata {
            masking_method: "black_box".to_string(),
            fields_processed: self.masked_fields.len(),
            document_type: document_type.to_string(),
            masking_details: self.details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BoundingQuad, MaskingConfig};

    fn field() -> ExtractedField {
        ExtractedField {
            field: "aadhar_number".to_string(),
            value: "1234 5678 9012".to_string(),
            confidence: 0.9,
            bounding_quad: BoundingQuad::new([0, 0], [100, 0], [100, 20], [0, 20]),
        }
    }

    fn rule(first: usize, last: usize) -> MaskingRule {
        MaskingRule {
            field: "aadhar_number".to_string(),
            mode: MaskMode::Partial,
            masking_config: MaskingConfig {
                mask_first: first,
                mask_last: last,
                mask_char: 'X',
            },
        }
    }

    #[test]
    fn test_record_keeps_order_and_last_detail_wins() {
        let mut report = MaskingReport::default();
        report.record(&rule(4, 0), &field(), "XXXX 5678 9012".to_string());
        report.record(&rule(0, 4), &field(), "1234 5678 XXXX".to_string());

        assert_eq!(report.fields_processed(), 2);
        assert_eq!(report.masked_fields, vec!["aadhar_number", "aadhar_number"]);
        let detail = &report.details["aadhar_number"];
        assert_eq!(detail.masked_value, "1234 5678 XXXX");
        assert_eq!(detail.show_first, None);
        assert_eq!(detail.show_last, Some(4));
    }

    #[test]
    fn test_metadata_serialization_shape() {
        let mut report = MaskingReport::default();
        report.record(&rule(4, 0), &field(), "XXXX 5678 9012".to_string());
        let metadata = report.into_metadata(DocumentType::Aadhar);

        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json["maskingMethod"], "black_box");
        assert_eq!(json["fieldsProcessed"], 1);
        assert_eq!(json["documentType"], "AADHAR");
        let detail = &json["maskingDetails"]["aadhar_number"];
        assert_eq!(detail["maskType"], "PARTIAL");
        assert_eq!(detail["showFirst"], 4);
        // showLast was zero and must be omitted from the wire format
        assert!(detail.get("showLast").is_none());
    }
}
