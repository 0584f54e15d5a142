// src/core/preview.rs

use crate::core::models::SelectedFile;
use std::sync::Arc;
use tracing::{debug, warn};

/// Largest thumbnail edge in pixels. Two pixel rows share one terminal cell.
pub const THUMBNAIL_EDGE: u32 = 48;

/// A downscaled RGB copy of an image, small enough to paint with half blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub(crate) pixels: Vec<[u8; 3]>,
}

impl Thumbnail {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }
}

/// Scoped reference to the bytes of the selected image.
///
/// Acquired when an image is selected and released on drop, which happens when
/// the selection changes, the widget resets, or the widget goes away.
#[derive(Debug)]
pub struct PreviewHandle {
    name: String,
    // Pins the bytes for as long as the preview is on screen.
    _source: Arc<[u8]>,
    thumbnail: Option<Thumbnail>,
}

impl PreviewHandle {
    /// Returns `None` for files that do not declare an image media type.
    pub fn acquire(file: &SelectedFile) -> Option<Self> {
        if !file.is_image() {
            return None;
        }
        let thumbnail = decode_thumbnail(&file.bytes, THUMBNAIL_EDGE);
        if thumbnail.is_none() {
            warn!(file = %file.name, "Image preview could not be decoded.");
        }
        debug!(file = %file.name, bytes = file.len(), "Preview acquired.");
        Some(Self {
            name: file.name.clone(),
            _source: Arc::clone(&file.bytes),
            thumbnail,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn thumbnail(&self) -> Option<&Thumbnail> {
        self.thumbnail.as_ref()
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        debug!(file = %self.name, "Preview released.");
    }
}

fn decode_thumbnail(bytes: &[u8], edge: u32) -> Option<Thumbnail> {
    let image = image::load_from_memory(bytes).ok()?;
    // `thumbnail` fits to the box in both directions, so small images skip it.
    let rgb = if image.width() > edge || image.height() > edge {
        image.thumbnail(edge, edge).to_rgb8()
    } else {
        image.to_rgb8()
    };
    let (width, height) = rgb.dimensions();
    let pixels = rgb.pixels().map(|p| p.0).collect();
    Some(Thumbnail { width, height, pixels })
}
