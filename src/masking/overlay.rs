//! Redaction patch and replacement-text rendering.
//!
//! Draws an opaque white patch over a field's bounding quad, completely
//! occluding the original pixel content, then centers the replacement text
//! in black over the patch. Font sizing follows the original heuristic:
//! the scale grows for short strings in wide boxes and shrinks for long
//! strings, with a floor to keep text legible.

use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_polygon_mut, draw_text_mut, text_size};
use imageproc::point::Point;
use log::{debug, warn};
use once_cell::sync::Lazy;

use crate::domain::{BoundingQuad, Rect};
use crate::error::{MaskError, MaskResult};

const PATCH_FILL: Rgb<u8> = Rgb([255, 255, 255]);
const TEXT_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Pixel height of the font at scale 1.0.
const BASE_GLYPH_PX: f32 = 22.0;
/// Nominal pixel width budgeted per replacement character.
const WIDTH_PER_CHAR: f32 = 40.0;
/// Floor below which replacement text becomes illegible.
const MIN_FONT_SCALE: f32 = 1.1;

static FONT_DIRS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    let mut dirs = vec![
        PathBuf::from("/usr/share/fonts"),
        PathBuf::from("/usr/local/share/fonts"),
        PathBuf::from("/System/Library/Fonts"),
        PathBuf::from("C:\\Windows\\Fonts"),
    ];
    if let Some(home) = std::env::var_os("HOME") {
        dirs.push(PathBuf::from(home).join(".fonts"));
    }
    dirs
});

/// Renders redaction patches with centered replacement text.
pub struct OverlayRenderer {
    font: FontVec,
}

impl OverlayRenderer {
    /// Creates a renderer around an already-loaded font.
    pub fn new(font: FontVec) -> Self {
        Self { font }
    }

    /// Loads the font from a TTF/OTF file.
    pub fn from_font_file(path: &Path) -> MaskResult<Self> {
        let data = fs::read(path).map_err(|source| MaskError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let font = FontVec::try_from_vec(data)?;
        Ok(Self::new(font))
    }

    /// Loads the first usable font found in the standard system directories.
    pub fn discover() -> MaskResult<Self> {
        let path = find_system_font().ok_or_else(|| MaskError::FontUnavailable {
            reason: "no TTF/OTF font found in system font directories".to_string(),
        })?;
        debug!("using system font {}", path.display());
        Self::from_font_file(&path)
    }

    /// Draws the redaction patch for `quad` and centers `text` over it.
    ///
    /// The patch is solid opaque white; the text is anti-aliased black.
    /// Degenerate quads (zero-width or zero-height) are skipped: there is
    /// no visible content to cover.
    pub fn render(&self, image: &mut RgbImage, quad: &BoundingQuad, text: &str) {
        let rect = quad.bounding_rect();
        if rect.width <= 0 || rect.height <= 0 {
            warn!("skipping degenerate bounding quad {:?}", quad);
            return;
        }

        fill_patch(image, quad);
        if text.is_empty() {
            return;
        }

        let scale = font_scale(rect.width, text.chars().count());
        let thickness = stroke_thickness(scale);
        let px = PxScale::from(scale * BASE_GLYPH_PX);

        let (text_w, text_h) = text_size(px, &self.font, text);
        let text_x = rect.x + (rect.width - text_w as i32) / 2;
        // Vertically centered; draw_text_mut anchors at the glyph top,
        // so the baseline form y + (h + th)/2 becomes y + (h - th)/2.
        let text_y = rect.y + (rect.height - text_h as i32) / 2;

        // Emulate stroke thickness with repeated one-pixel-offset passes.
        for dx in 0..thickness {
            draw_text_mut(image, TEXT_COLOR, text_x + dx, text_y, px, &self.font, text);
        }
    }
}

/// Fills the quad with the opaque patch color.
///
/// A quad whose first and last corners coincide cannot be drawn as a
/// polygon; its axis-aligned bounding rectangle is filled instead, which
/// only ever over-covers.
pub fn fill_patch(image: &mut RgbImage, quad: &BoundingQuad) {
    let points: Vec<Point<i32>> = quad
        .points()
        .iter()
        .map(|p| Point::new(p[0], p[1]))
        .collect();

    if points.first() == points.last() {
        fill_bounding_rect(image, quad.bounding_rect());
        return;
    }
    draw_polygon_mut(image, &points, PATCH_FILL);
}

fn fill_bounding_rect(image: &mut RgbImage, rect: Rect) {
    if rect.width <= 0 || rect.height <= 0 {
        return;
    }
    let patch = imageproc::rect::Rect::at(rect.x, rect.y)
        .of_size(rect.width as u32, rect.height as u32);
    draw_filled_rect_mut(image, patch, PATCH_FILL);
}

/// Font scale heuristic: `max(1.1, width / (len × 40))`.
fn font_scale(rect_width: i32, text_len: usize) -> f32 {
    if text_len == 0 {
        return MIN_FONT_SCALE;
    }
    (rect_width as f32 / (text_len as f32 * WIDTH_PER_CHAR)).max(MIN_FONT_SCALE)
}

/// Stroke thickness heuristic: `max(1, floor(scale × 2))`.
fn stroke_thickness(scale: f32) -> i32 {
    ((scale * 2.0) as i32).max(1)
}

/// Searches the standard system font directories for a TTF/OTF file.
pub fn find_system_font() -> Option<PathBuf> {
    FONT_DIRS.iter().find_map(|dir| first_font_in(dir, 4))
}

fn first_font_in(dir: &Path, depth: usize) -> Option<PathBuf> {
    if depth == 0 {
        return None;
    }
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    entries.sort();

    for path in &entries {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        if matches!(ext.as_deref(), Some("ttf") | Some("otf")) {
            return Some(path.clone());
        }
    }
    entries
        .iter()
        .filter(|p| p.is_dir())
        .find_map(|p| first_font_in(p, depth - 1))
}
