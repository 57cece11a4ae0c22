//! Document-handling glue around the masking engine.
//!
//! The engine itself only sees decoded page rasters; this module covers the
//! edges: classifying the input URI, deriving where the masked output
//! logically lives, and loading/saving page images.

pub mod pages;
pub mod uri;

pub use pages::PageSet;
pub use uri::{is_pdf, local_path, masked_file_name, parent_dir};
