//! Quadrilateral narrowing for partial masking.
//!
//! Narrows a field's bounding quad to the horizontal span covering the
//! masked character prefix or suffix, assuming a left-to-right,
//! horizontally laid-out field. Only x-coordinates move.

use crate::domain::{BoundingQuad, MaskingConfig};

/// Narrows `quad` to the side of the field covered by the masked span.
///
/// With `mask_first > 0` the quad shrinks to its leftmost
/// `mask_first / total_len` fraction; otherwise `mask_last` narrows it
/// symmetrically from the right. `mask_first` takes precedence when both
/// are set, so the visual patch is always single-sided.
///
/// `total_len` is the field value's character count. Callers must not
/// invoke this with both counts zero; rule validation guards that.
pub fn narrow_quad(quad: &BoundingQuad, config: &MaskingConfig, total_len: usize) -> BoundingQuad {
    debug_assert!(config.mask_first > 0 || config.mask_last > 0);
    debug_assert!(total_len > 0);

    let mut narrowed = quad.clone();
    if config.mask_first > 0 {
        let ratio = ratio(config.mask_first, total_len);
        narrowed.p1[0] = quad.p0[0] + scaled(quad.p1[0] - quad.p0[0], ratio);
        narrowed.p2[0] = quad.p3[0] + scaled(quad.p2[0] - quad.p3[0], ratio);
    } else if config.mask_last > 0 {
        let ratio = ratio(config.mask_last, total_len);
        narrowed.p0[0] = quad.p1[0] - scaled(quad.p1[0] - quad.p0[0], ratio);
        narrowed.p3[0] = quad.p2[0] - scaled(quad.p2[0] - quad.p3[0], ratio);
    }
    narrowed
}

/// Masked-span fraction, clamped so the narrowed quad never leaves the
/// original x-range.
fn ratio(count: usize, total_len: usize) -> f64 {
    (count as f64 / total_len as f64).min(1.0)
}

fn scaled(span: i32, ratio: f64) -> i32 {
    (f64::from(span) * ratio).round() as i32
}
