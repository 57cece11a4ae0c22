//! Field-level document image redaction.
//!
//! This library redacts personally identifiable fields (national-ID
//! numbers and the like) on document page rasters. Fields arrive
//! pre-extracted with bounding quadrilaterals; the engine draws an opaque
//! patch over each targeted field and centers a partially- or fully-masked
//! replacement string on top of it.
//!
//! # Features
//!
//! - **Logical masking**: FULL or PARTIAL replacement of alphanumeric
//!   characters, with separators preserved
//! - **Geometric narrowing**: PARTIAL patches shrink to the masked
//!   character span of the field's bounding quad
//! - **Patch rendering**: opaque white fill with centered, anti-aliased
//!   replacement text, scaled to the patch width
//! - **All-or-nothing**: an unreadable page or an invalid rule fails the
//!   whole document, never a partially redacted output
//!
//! # Architecture
//!
//! - [`domain`]: data model — quads, rules, request/response schemas
//! - [`masking`]: the engine — value computation, narrowing, rendering,
//!   and the orchestrating [`MaskingService`]
//! - [`document`]: URI classification and page raster I/O
//! - [`error`]: comprehensive error handling
//!
//! # Quick Start
//!
//! ```
//! use docmask::{logical_mask, MaskMode, MaskingConfig};
//!
//! let config = MaskingConfig {
//!     mask_first: 4,
//!     mask_last: 0,
//!     mask_char: 'X',
//! };
//! let masked = logical_mask("1234 5678 9012", &config, MaskMode::Partial);
//! assert_eq!(masked, "XXXX 5678 9012");
//! ```
//!
//! # Masking a document
//!
//! ```no_run
//! use docmask::{MaskingService, PageSet};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let (fields, rules) = (vec![], vec![]);
//! let service = MaskingService::with_system_font()?;
//! let mut pages = PageSet::load(&["page_1.png", "page_2.png"])?;
//!
//! let report = service.apply(&fields, &rules, pages.images_mut())?;
//! pages.write_masked(std::path::Path::new("masked"))?;
//! println!("masked {} field(s)", report.fields_processed());
//! # Ok(())
//! # }
//! ```

// Public API
pub mod document;
pub mod domain;
pub mod error;
pub mod masking;

// Re-exports for convenient access
pub use document::{is_pdf, local_path, masked_file_name, parent_dir, PageSet};
pub use domain::{
    BoundingQuad, DocumentType, ExtractedField, MaskMode, MaskingConfig, MaskingDetail,
    MaskingMetadata, MaskingReport, MaskingRequest, MaskingResponse, MaskingRule, Rect,
};
pub use error::{MaskError, MaskResult};
pub use masking::{
    logical_mask, narrow_quad, overlay::find_system_font, visual_mask, MaskingService,
    OverlayRenderer,
};
