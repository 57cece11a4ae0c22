//! The field masking engine.
//!
//! This module composes the three core pieces — masked-value computation,
//! quad narrowing, and patch rendering — across all extracted fields,
//! masking rules, and page images.

pub mod geometry;
pub mod overlay;
pub mod value;

pub use geometry::narrow_quad;
pub use overlay::OverlayRenderer;
pub use value::{logical_mask, visual_mask};

use std::collections::HashMap;

use image::RgbImage;
use log::{debug, warn};

use crate::domain::{BoundingQuad, ExtractedField, MaskMode, MaskingReport, MaskingRule};
use crate::error::MaskResult;

/// Orchestrates masking across fields, rules, and page images.
///
/// Rules are applied sequentially in caller order; when two rules touch
/// overlapping regions, the later rule's patch wins, so rule order is a
/// hard sequential dependency.
pub struct MaskingService {
    renderer: OverlayRenderer,
}

impl MaskingService {
    /// Creates a service around the given renderer.
    pub fn new(renderer: OverlayRenderer) -> Self {
        Self { renderer }
    }

    /// Creates a service using a font discovered in system directories.
    pub fn with_system_font() -> MaskResult<Self> {
        Ok(Self::new(OverlayRenderer::discover()?))
    }

    /// Applies every rule to the matching fields, mutating `pages` in place.
    ///
    /// A rule referencing an unknown field is skipped with a warning, not
    /// an error. An invalid rule fails the whole request: a partially
    /// redacted document must never be returned as if it were complete.
    pub fn apply(
        &self,
        fields: &[ExtractedField],
        rules: &[MaskingRule],
        pages: &mut [RgbImage],
    ) -> MaskResult<MaskingReport> {
        let by_name: HashMap<&str, &ExtractedField> =
            fields.iter().map(|f| (f.field.as_str(), f)).collect();

        let mut report = MaskingReport::default();
        for rule in rules {
            let Some(field) = by_name.get(rule.field.as_str()) else {
                warn!("rule references unknown field '{}', skipping", rule.field);
                continue;
            };
            rule.validate(&field.value)?;

            let masked_value = logical_mask(&field.value, &rule.masking_config, rule.mode);
            let (quad, overlay_text) = self.plan_overlay(rule, field);

            // The same quad is reused for every supplied page image.
            for page in pages.iter_mut() {
                self.renderer.render(page, &quad, &overlay_text);
            }
            debug!(
                "masked field '{}' ({:?}) across {} page(s)",
                rule.field,
                rule.mode,
                pages.len()
            );

            report.record(rule, field, masked_value);
        }
        Ok(report)
    }

    /// Picks the patch region and the replacement text for one rule.
    ///
    /// FULL covers the whole quad with the fully masked value. PARTIAL
    /// narrows the quad to the single masked side and draws the
    /// single-sided visual mask, which may differ from the logical masked
    /// value when both counts are set.
    fn plan_overlay(&self, rule: &MaskingRule, field: &ExtractedField) -> (BoundingQuad, String) {
        match rule.mode {
            MaskMode::Full => {
                let text = logical_mask(&field.value, &rule.masking_config, MaskMode::Full);
                (field.bounding_quad.clone(), text)
            }
            MaskMode::Partial => {
                if !field.bounding_quad.is_axis_aligned() {
                    warn!(
                        "field '{}' has a skewed bounding quad; narrowing assumes horizontal text",
                        field.field
                    );
                }
                let total_len = field.value.chars().count();
                let quad = narrow_quad(&field.bounding_quad, &rule.masking_config, total_len);
                (quad, visual_mask(&field.value, &rule.masking_config))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MaskingConfig;

    fn field(name: &str, value: &str) -> ExtractedField {
        ExtractedField {
            field: name.to_string(),
            value: value.to_string(),
            confidence: 0.95,
            bounding_quad: BoundingQuad::new([0, 0], [100, 0], [100, 20], [0, 20]),
        }
    }

    fn partial_rule(name: &str, first: usize, last: usize) -> MaskingRule {
        MaskingRule {
            field: name.to_string(),
            mode: MaskMode::Partial,
            masking_config: MaskingConfig {
                mask_first: first,
                mask_last: last,
                mask_char: 'X',
            },
        }
    }

    // Rendering needs a font, so these tests gate on discovery.
    fn service() -> Option<MaskingService> {
        MaskingService::with_system_font().ok()
    }

    #[test]
    fn test_unknown_field_skipped_silently() {
        let Some(service) = service() else { return };
        let fields = vec![field("aadhar_number", "1234 5678 9012")];
        let rules = vec![partial_rule("ssn", 4, 0)];

        let report = service.apply(&fields, &rules, &mut []).unwrap();
        assert!(report.masked_fields.is_empty());
        assert!(report.details.is_empty());
    }

    #[test]
    fn test_invalid_rule_fails_request() {
        let Some(service) = service() else { return };
        let fields = vec![field("aadhar_number", "1234 5678 9012")];
        let rules = vec![partial_rule("aadhar_number", 0, 0)];

        assert!(service.apply(&fields, &rules, &mut []).is_err());
    }

    #[test]
    fn test_report_in_rule_order() {
        let Some(service) = service() else { return };
        let fields = vec![field("b", "5678"), field("a", "1234")];
        let rules = vec![partial_rule("a", 2, 0), partial_rule("b", 2, 0)];

        let report = service.apply(&fields, &rules, &mut []).unwrap();
        assert_eq!(report.masked_fields, vec!["a", "b"]);
        assert_eq!(report.details["a"].masked_value, "XX34");
    }
}
