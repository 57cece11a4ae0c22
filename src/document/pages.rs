//! Loading and saving page rasters.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;
use log::info;

use crate::error::{MaskError, MaskResult};

use super::uri::masked_file_name;

/// The decoded page rasters of one document, in page order.
///
/// Pages arrive pre-rendered by the upstream rasterization collaborator;
/// the engine assumes readable 3-channel images, so everything is decoded
/// to RGB up front. Any unreadable page fails the whole document.
#[derive(Debug)]
pub struct PageSet {
    paths: Vec<PathBuf>,
    images: Vec<RgbImage>,
}

impl PageSet {
    /// Decodes every page image, failing fast on the first unreadable one.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> MaskResult<Self> {
        let mut images = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            let image = image::open(path)
                .map_err(|source| MaskError::ImageUnreadable {
                    path: path.to_path_buf(),
                    source,
                })?
                .to_rgb8();
            images.push(image);
        }
        Ok(Self {
            paths: paths.iter().map(|p| p.as_ref().to_path_buf()).collect(),
            images,
        })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Mutable view of the page rasters, for in-place masking.
    pub fn images_mut(&mut self) -> &mut [RgbImage] {
        &mut self.images
    }

    /// Writes every (mutated) page as a PNG under `out_dir`.
    ///
    /// Each page gets a fresh `masked_*` name derived from its source path.
    /// Returns the written paths in page order.
    pub fn write_masked(&self, out_dir: &Path) -> MaskResult<Vec<PathBuf>> {
        fs::create_dir_all(out_dir).map_err(|source| MaskError::Io {
            path: out_dir.to_path_buf(),
            source,
        })?;

        let mut written = Vec::with_capacity(self.images.len());
        for (path, image) in self.paths.iter().zip(&self.images) {
            let out_path = out_dir.join(masked_file_name(path));
            image.save(&out_path).map_err(|source| MaskError::ImageWrite {
                path: out_path.clone(),
                source,
            })?;
            info!("wrote masked page {}", out_path.display());
            written.push(out_path);
        }
        Ok(written)
    }
}
