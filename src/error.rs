//! Error types for the document masking library.
//!
//! This module provides a comprehensive error handling strategy with proper
//! error categorization and context preservation.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type alias for masking operations.
pub type MaskResult<T> = Result<T, MaskError>;

/// Comprehensive error type for all masking operations.
///
/// This enum categorizes errors by their source and provides rich context
/// for debugging and error recovery.
#[derive(Debug)]
pub enum MaskError {
    /// Error occurred while reading or writing files
    Io { path: PathBuf, source: io::Error },

    /// A page raster could not be decoded.
    ///
    /// Fatal for the whole document: emitting a partially redacted output
    /// is worse than failing the request.
    ImageUnreadable {
        path: PathBuf,
        source: image::ImageError,
    },

    /// A mutated page raster could not be encoded or written back.
    ImageWrite {
        path: PathBuf,
        source: image::ImageError,
    },

    /// No usable font could be loaded for drawing replacement text
    FontUnavailable { reason: String },

    /// A masking rule is inconsistent with the field value it targets
    InvalidConfig { field: String, reason: String },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "IO error for path '{}': {}", path.display(), source)
            }
            Self::ImageUnreadable { path, source } => {
                write!(f, "Image '{}' not readable: {}", path.display(), source)
            }
            Self::ImageWrite { path, source } => {
                write!(
                    f,
                    "Failed to write masked image '{}': {}",
                    path.display(),
                    source
                )
            }
            Self::FontUnavailable { reason } => {
                write!(f, "Font unavailable: {}", reason)
            }
            Self::InvalidConfig { field, reason } => {
                write!(f, "Invalid masking config for field '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for MaskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::ImageUnreadable { source, .. } | Self::ImageWrite { source, .. } => Some(source),
            _ => None,
        }
    }
}

// Conversion implementations for common error types
impl From<ab_glyph::InvalidFont> for MaskError {
    fn from(err: ab_glyph::InvalidFont) -> Self {
        Self::FontUnavailable {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MaskError::InvalidConfig {
            field: "pan_number".to_string(),
            reason: "maskFirst and maskLast are both zero".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid masking config for field 'pan_number': maskFirst and maskLast are both zero"
        );
    }

    #[test]
    fn test_font_error_display() {
        let err = MaskError::FontUnavailable {
            reason: "no candidate directories".to_string(),
        };
        assert!(err.to_string().contains("Font unavailable"));
    }
}
