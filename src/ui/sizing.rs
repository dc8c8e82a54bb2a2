// SPDX-License-Identifier: MPL-2.0
//! Sizing configuration shared by sized and remote image views.
//!
//! [`SizingSpec`] is a small `Copy` value. Every modifier returns a new value
//! with one field changed and leaves the original untouched, so specs can be
//! built fluently and shared between views.

use crate::config;
use iced::{ContentFit, Size};

/// How an image is scaled into an aspect-constrained box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentMode {
    /// Scale to fit entirely inside the frame.
    #[default]
    Fit,
    /// Scale to cover the whole box, cropping what leaves the frame.
    Fill,
}

impl ContentMode {
    /// The Iced content fit implementing this mode.
    #[must_use]
    pub fn content_fit(self) -> ContentFit {
        match self {
            ContentMode::Fit => ContentFit::Contain,
            ContentMode::Fill => ContentFit::Cover,
        }
    }
}

/// Aspect ratio of the box an image is drawn into. The view's frame is
/// unaffected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aspect {
    /// Width divided by height. `None` keeps the image's own ratio.
    pub ratio: Option<f32>,
    pub mode: ContentMode,
}

impl Aspect {
    /// Content box of the requested ratio for `frame`, falling back to
    /// `natural_ratio` when no valid ratio was given.
    ///
    /// `Fit` yields the largest size of that ratio inside `frame`; `Fill`
    /// yields the smallest size of that ratio covering it.
    #[must_use]
    pub fn constrain(&self, frame: Size, natural_ratio: f32) -> Size {
        let ratio = self
            .ratio
            .filter(|r| r.is_finite() && *r > 0.0)
            .unwrap_or(natural_ratio);
        if frame.height <= 0.0 || !ratio.is_finite() || ratio <= 0.0 {
            return frame;
        }

        let wider_than_ratio = frame.width / frame.height > ratio;
        let match_height = match self.mode {
            ContentMode::Fit => wider_than_ratio,
            ContentMode::Fill => !wider_than_ratio,
        };

        if match_height {
            Size::new(frame.height * ratio, frame.height)
        } else {
            Size::new(frame.width, frame.width / ratio)
        }
    }
}

/// Target geometry of an image view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingSpec {
    pub width: Option<f32>,
    pub height: Option<f32>,
    /// Use exactly `width` x `height` as the frame and crop the image into it.
    pub squared: bool,
    pub aspect: Option<Aspect>,
    /// Let the image scale to its frame instead of drawing at natural size.
    pub resizable: bool,
    /// Physical pixels per logical pixel, used to size the downsampled image.
    pub scale_factor: f32,
}

impl Default for SizingSpec {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            squared: false,
            aspect: None,
            resizable: false,
            scale_factor: config::DEFAULT_SCALE_FACTOR,
        }
    }
}

impl SizingSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets both target dimensions; `None` leaves a dimension unconstrained.
    #[must_use]
    pub fn frame(self, width: impl Into<Option<f32>>, height: impl Into<Option<f32>>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
            ..self
        }
    }

    #[must_use]
    pub fn width(self, width: f32) -> Self {
        Self {
            width: Some(width),
            ..self
        }
    }

    #[must_use]
    pub fn height(self, height: f32) -> Self {
        Self {
            height: Some(height),
            ..self
        }
    }

    #[must_use]
    pub fn squared(self) -> Self {
        Self {
            squared: true,
            ..self
        }
    }

    #[must_use]
    pub fn resizable(self) -> Self {
        Self {
            resizable: true,
            ..self
        }
    }

    #[must_use]
    pub fn aspect(self, ratio: impl Into<Option<f32>>, mode: ContentMode) -> Self {
        Self {
            aspect: Some(Aspect {
                ratio: ratio.into(),
                mode,
            }),
            ..self
        }
    }

    #[must_use]
    pub fn scale_factor(self, scale_factor: f32) -> Self {
        Self {
            scale_factor,
            ..self
        }
    }

    /// How the image is drawn inside its frame.
    ///
    /// Non-resizable images keep their natural size but are scaled down when
    /// the bitmap is denser than the frame (`scale_factor` above 1). Resizable
    /// ones follow the aspect mode, cover a squared frame, or stretch to the
    /// frame, which already has the image's ratio.
    #[must_use]
    pub fn content_fit(&self) -> ContentFit {
        if !self.resizable {
            return ContentFit::ScaleDown;
        }
        match self.aspect {
            Some(aspect) => aspect.mode.content_fit(),
            None if self.squared => ContentFit::Cover,
            None => ContentFit::Fill,
        }
    }
}
