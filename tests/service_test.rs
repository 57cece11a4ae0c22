//! Tests for the masking orchestrator.
//!
//! The service owns a renderer, so every test gates on system-font
//! discovery; pixel-level behavior is asserted only where pages are
//! actually supplied.

use docmask::{
    BoundingQuad, DocumentType, ExtractedField, MaskError, MaskMode, MaskingConfig,
    MaskingRule, MaskingService,
};
use image::{Rgb, RgbImage};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

fn field(name: &str, value: &str, quad: BoundingQuad) -> ExtractedField {
    ExtractedField {
        field: name.to_string(),
        value: value.to_string(),
        confidence: 0.97,
        bounding_quad: quad,
    }
}

fn rule(name: &str, mode: MaskMode, first: usize, last: usize) -> MaskingRule {
    MaskingRule {
        field: name.to_string(),
        mode,
        masking_config: MaskingConfig {
            mask_first: first,
            mask_last: last,
            mask_char: 'X',
        },
    }
}

fn default_quad() -> BoundingQuad {
    BoundingQuad::new([20, 20], [220, 20], [220, 60], [20, 60])
}

#[test]
fn test_unknown_field_is_skipped() {
    let Ok(service) = MaskingService::with_system_font() else {
        return;
    };
    let fields = vec![field("aadhar_number", "1234 5678 9012", default_quad())];
    let rules = vec![
        rule("ssn", MaskMode::Partial, 4, 0),
        rule("aadhar_number", MaskMode::Partial, 4, 0),
    ];

    let report = service.apply(&fields, &rules, &mut []).unwrap();
    assert_eq!(report.masked_fields, vec!["aadhar_number"]);
    assert!(!report.details.contains_key("ssn"));
}

#[test]
fn test_masked_fields_follow_rule_order() {
    let Ok(service) = MaskingService::with_system_font() else {
        return;
    };
    let fields = vec![
        field("pan_number", "ABCDE1234F", default_quad()),
        field("aadhar_number", "1234 5678 9012", default_quad()),
    ];
    let rules = vec![
        rule("aadhar_number", MaskMode::Partial, 0, 4),
        rule("pan_number", MaskMode::Full, 0, 0),
    ];

    let report = service.apply(&fields, &rules, &mut []).unwrap();
    assert_eq!(report.masked_fields, vec!["aadhar_number", "pan_number"]);
    assert_eq!(
        report.details["aadhar_number"].masked_value,
        "1234 5678 XXXX"
    );
    assert_eq!(report.details["pan_number"].masked_value, "XXXXXXXXXX");
}

#[test]
fn test_duplicate_rules_last_detail_wins() {
    let Ok(service) = MaskingService::with_system_font() else {
        return;
    };
    let fields = vec![field("aadhar_number", "1234 5678 9012", default_quad())];
    let rules = vec![
        rule("aadhar_number", MaskMode::Partial, 4, 0),
        rule("aadhar_number", MaskMode::Partial, 0, 4),
    ];

    let report = service.apply(&fields, &rules, &mut []).unwrap();
    // Both applications are counted; the detail map keeps the last.
    assert_eq!(report.fields_processed(), 2);
    assert_eq!(
        report.details["aadhar_number"].masked_value,
        "1234 5678 XXXX"
    );
    assert_eq!(report.details["aadhar_number"].show_last, Some(4));
}

#[test]
fn test_partial_rule_with_zero_counts_is_rejected() {
    let Ok(service) = MaskingService::with_system_font() else {
        return;
    };
    let fields = vec![field("aadhar_number", "1234 5678 9012", default_quad())];
    let rules = vec![rule("aadhar_number", MaskMode::Partial, 0, 0)];

    let err = service.apply(&fields, &rules, &mut []).unwrap_err();
    assert!(matches!(err, MaskError::InvalidConfig { .. }));
}

#[test]
fn test_partial_patch_covers_only_masked_side() {
    let Ok(service) = MaskingService::with_system_font() else {
        return;
    };
    let background = Rgb([0, 120, 0]);
    let mut pages = vec![RgbImage::from_pixel(300, 100, background)];
    // Width 200, eight characters, mask_first 4: patch covers x in [20, 120].
    let fields = vec![field("id", "12345678", default_quad())];
    let rules = vec![rule("id", MaskMode::Partial, 4, 0)];

    service
        .apply(&fields, &rules, &mut pages)
        .unwrap();

    let page = &pages[0];
    // Left half of the field is patched...
    assert_ne!(*page.get_pixel(30, 40), background);
    // ...the right half keeps its original pixels.
    assert_eq!(*page.get_pixel(210, 40), background);
    assert_eq!(*page.get_pixel(280, 90), background);
}

#[test]
fn test_full_patch_applied_to_every_page() {
    let Ok(service) = MaskingService::with_system_font() else {
        return;
    };
    let background = Rgb([0, 0, 0]);
    let mut pages = vec![
        RgbImage::from_pixel(300, 100, background),
        RgbImage::from_pixel(300, 100, background),
    ];
    let fields = vec![field("id", "ABCD", default_quad())];
    let rules = vec![rule("id", MaskMode::Full, 0, 0)];

    service
        .apply(&fields, &rules, &mut pages)
        .unwrap();

    for page in &pages {
        assert_eq!(*page.get_pixel(22, 22), WHITE);
        assert_eq!(*page.get_pixel(218, 58), WHITE);
    }
}

#[test]
fn test_report_metadata_shape() {
    let Ok(service) = MaskingService::with_system_font() else {
        return;
    };
    let fields = vec![field("pan_number", "ABCDE1234F", default_quad())];
    let rules = vec![rule("pan_number", MaskMode::Full, 0, 0)];

    let report = service.apply(&fields, &rules, &mut []).unwrap();
    let metadata = report.into_metadata(DocumentType::Pancard);
    assert_eq!(metadata.masking_method, "black_box");
    assert_eq!(metadata.fields_processed, 1);
    assert_eq!(metadata.document_type, "PANCARD");
    assert_eq!(metadata.masking_details.len(), 1);
}
