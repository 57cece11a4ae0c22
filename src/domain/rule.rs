//! Masking rules and their validation.

use serde::{Deserialize, Serialize};

use super::alnum_count;
use crate::error::{MaskError, MaskResult};

/// How a field's value is masked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaskMode {
    /// Only a prefix and/or suffix span of alphanumeric characters is masked.
    Partial,
    /// All alphanumeric characters are masked; other characters preserved.
    Full,
}

impl MaskMode {
    /// Wire-format name of this mode (`"PARTIAL"` / `"FULL"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Partial => "PARTIAL",
            Self::Full => "FULL",
        }
    }
}

/// Counts and replacement character governing a masking rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskingConfig {
    /// Leading alphanumeric characters to mask (scanning left-to-right).
    pub mask_first: usize,
    /// Trailing alphanumeric characters to mask (scanning right-to-left).
    pub mask_last: usize,
    /// Single replacement character.
    pub mask_char: char,
}

/// A rule binding a masking configuration to a named extracted field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskingRule {
    /// Name of the extracted field this rule targets.
    pub field: String,
    #[serde(rename = "type")]
    pub mode: MaskMode,
    pub masking_config: MaskingConfig,
}

impl MaskingRule {
    /// Validates this rule against the value it will be applied to.
    ///
    /// Rejects PARTIAL rules whose counts are both zero (the geometric
    /// narrowing has no defined result for them) and counts whose sum
    /// exceeds the number of alphanumeric characters in the value.
    pub fn validate(&self, value: &str) -> MaskResult<()> {
        if self.mode == MaskMode::Full {
            return Ok(());
        }

        let config = &self.masking_config;
        if config.mask_first == 0 && config.mask_last == 0 {
            return Err(MaskError::InvalidConfig {
                field: self.field.clone(),
                reason: "PARTIAL rule with maskFirst and maskLast both zero".to_string(),
            });
        }

        let available = alnum_count(value);
        if config.mask_first + config.mask_last > available {
            return Err(MaskError::InvalidConfig {
                field: self.field.clone(),
                reason: format!(
                    "maskFirst ({}) + maskLast ({}) exceeds the {} alphanumeric character(s) of the value",
                    config.mask_first, config.mask_last, available
                ),
            });
        }

        Ok(())
    }
}
