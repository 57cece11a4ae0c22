//! Masked-value computation.
//!
//! Two deliberately separate policies live here:
//!
//! - [`logical_mask`] produces the textual masked value reported back to the
//!   caller. In PARTIAL mode it applies both the leading and the trailing
//!   pass, which are independent of each other.
//! - [`visual_mask`] produces the replacement string drawn onto the page
//!   raster. It is single-sided: `mask_first` takes precedence and only one
//!   side's characters are replaced, matching the one-sided geometric patch.
//!
//! Both scan alphanumeric characters only; separators and punctuation are
//! skipped without counting and pass through unchanged.

use crate::domain::{MaskMode, MaskingConfig};

/// Computes the logical masked value for a field.
///
/// FULL mode replaces every alphanumeric character with the mask character.
/// PARTIAL mode masks the first `mask_first` and the last `mask_last`
/// alphanumeric characters; overlapping spans are replaced once with the
/// same result. Total over any input; an empty value stays empty.
pub fn logical_mask(value: &str, config: &MaskingConfig, mode: MaskMode) -> String {
    match mode {
        MaskMode::Full => value
            .chars()
            .map(|c| if c.is_alphanumeric() { config.mask_char } else { c })
            .collect(),
        MaskMode::Partial => {
            let mut chars: Vec<char> = value.chars().collect();
            if config.mask_first > 0 {
                mask_pass(chars.iter_mut(), config.mask_char, config.mask_first);
            }
            if config.mask_last > 0 {
                mask_pass(chars.iter_mut().rev(), config.mask_char, config.mask_last);
            }
            chars.into_iter().collect()
        }
    }
}

/// Computes the single-sided replacement text drawn over the patch.
///
/// `mask_first` wins when both counts are set; the caller guards the
/// both-zero case via rule validation.
pub fn visual_mask(value: &str, config: &MaskingConfig) -> String {
    let mut chars: Vec<char> = value.chars().collect();
    if config.mask_first > 0 {
        mask_pass(chars.iter_mut(), config.mask_char, config.mask_first);
    } else if config.mask_last > 0 {
        mask_pass(chars.iter_mut().rev(), config.mask_char, config.mask_last);
    }
    chars.into_iter().collect()
}

/// Replaces the first `count` alphanumeric characters yielded by `chars`.
fn mask_pass<'a, I>(chars: I, mask_char: char, count: usize)
where
    I: Iterator<Item = &'a mut char>,
{
    let mut replaced = 0;
    for c in chars {
        if replaced == count {
            break;
        }
        if c.is_alphanumeric() {
            *c = mask_char;
            replaced += 1;
        }
    }
}
