// SPDX-License-Identifier: MPL-2.0
//! In-memory images: decoding from fetched bytes (PNG, JPEG, GIF, SVG, etc.),
//! downsampling to a target bound, and aspect-preserving fit geometry.

use crate::error::{Error, Result};
use iced::widget::image;
use iced::Size;
use image_rs::imageops::{self, FilterType};
use image_rs::{GenericImageView, RgbaImage};
use resvg::usvg;
use std::sync::Arc;
use tiny_skia;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Decoded RGBA bytes, kept for downsampling.
    /// Stored in Arc to avoid expensive cloning.
    rgba_bytes: Arc<Vec<u8>>,
}

/// Maximum logical size a downsampled image must fit into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DownsampleBound {
    /// Fit inside both dimensions.
    Both { max_width: f32, max_height: f32 },
    /// Fit the width; the height follows the image's aspect ratio.
    Width(f32),
    /// Fit the height; the width follows the image's aspect ratio.
    Height(f32),
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    ///
    /// The pixels are stored in an Arc for shared ownership, and a copy is
    /// made for the Handle.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    /// Returns a reference to the decoded RGBA bytes.
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Returns whether the image has no pixels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Size in bytes of the decoded pixels.
    #[must_use]
    pub fn byte_size(&self) -> usize {
        self.rgba_bytes.len()
    }

    /// Width divided by height, or 1.0 for an empty image.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.is_empty() {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Height that preserves the aspect ratio at the given width.
    #[must_use]
    pub fn fit_height(&self, width: f32) -> f32 {
        width / self.aspect_ratio()
    }

    /// Width that preserves the aspect ratio at the given height.
    #[must_use]
    pub fn fit_width(&self, height: f32) -> f32 {
        height * self.aspect_ratio()
    }

    /// Largest size with the image's aspect ratio that fits in the bound.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn fitted_size(&self, max_width: f32, max_height: f32) -> Size {
        if self.is_empty() {
            return Size::new(0.0, 0.0);
        }
        let scale = (max_width / self.width as f32).min(max_height / self.height as f32);
        Size::new(self.width as f32 * scale, self.height as f32 * scale)
    }

    /// Produces a copy of this image no larger than `bound`, where the bound is
    /// given in logical pixels and `scale` converts it to physical pixels.
    ///
    /// Returns `None` for an empty image or an invalid bound (non-finite or not
    /// positive). Images that already fit are returned as-is; this never
    /// upsamples.
    #[must_use]
    pub fn downsample(&self, bound: DownsampleBound, scale: f32) -> Option<Self> {
        let (width, height) = self.pixel_bounds(bound, scale)?;
        if width >= self.width && height >= self.height {
            return Some(self.clone());
        }
        let (width, height) = (width.min(self.width), height.min(self.height));

        let source = RgbaImage::from_raw(self.width, self.height, self.rgba_bytes.to_vec())?;
        let resized = imageops::resize(&source, width, height, FilterType::Triangle);
        Some(Self::from_rgba(width, height, resized.into_vec()))
    }

    fn pixel_bounds(&self, bound: DownsampleBound, scale: f32) -> Option<(u32, u32)> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if self.is_empty() || !valid(scale) {
            return None;
        }

        let size = match bound {
            DownsampleBound::Both {
                max_width,
                max_height,
            } if valid(max_width) && valid(max_height) => {
                self.fitted_size(max_width * scale, max_height * scale)
            }
            DownsampleBound::Width(width) if valid(width) => {
                Size::new(width * scale, self.fit_height(width * scale))
            }
            DownsampleBound::Height(height) if valid(height) => {
                Size::new(self.fit_width(height * scale), height * scale)
            }
            _ => return None,
        };

        Some((to_pixels(size.width), to_pixels(size.height)))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_pixels(value: f32) -> u32 {
    // `as` saturates, so huge bounds clamp to u32::MAX
    value.round().max(1.0) as u32
}

impl PartialEq for ImageData {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && (Arc::ptr_eq(&self.rgba_bytes, &other.rgba_bytes)
                || self.rgba_bytes == other.rgba_bytes)
    }
}

/// Decodes fetched bytes into an image.
///
/// Supports common raster formats (PNG, JPEG, GIF, etc.) as well as SVG.
/// SVG documents are rasterized at their intrinsic size using resvg.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the format is unknown, the data is corrupt, or
/// an SVG has zero dimensions.
pub fn decode(bytes: &[u8]) -> Result<ImageData> {
    if looks_like_svg(bytes) {
        return decode_svg(bytes);
    }

    let img = image_rs::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

fn decode_svg(bytes: &[u8]) -> Result<ImageData> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| Error::Decode(e.to_string()))?;

    let pixmap_size = tree.size().to_int_size();
    let width = pixmap_size.width();
    let height = pixmap_size.height();
    if width == 0 || height == 0 {
        return Err(Error::Decode("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Decode("Failed to allocate SVG pixmap".into()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha; Iced expects straight RGBA
    let pixels = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();

    Ok(ImageData::from_rgba(width, height, pixels))
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(1024)];
    let start = head
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(head.len());
    let head = head[start..].strip_prefix(b"\xEF\xBB\xBF").unwrap_or(&head[start..]);

    head.starts_with(b"<svg")
        || (head.starts_with(b"<?xml") && head.windows(4).any(|window| window == b"<svg"))
}
