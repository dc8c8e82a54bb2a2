// SPDX-License-Identifier: MPL-2.0
//! Sized image view: draws a downsampled in-memory image at a target size, or
//! a placeholder when there is nothing to draw.
//!
//! Resolution is a pure function of the image and the [`SizingSpec`]
//! ([`resolve`]), evaluated on every render; [`SizedImage`] turns the result
//! into Iced widgets.
//!
//! # Usage
//!
//! ```ignore
//! SizedImage::new(Some(image_data))
//!     .frame(120.0, 80.0)
//!     .resizable()
//!     .placeholder(text("No image"))
//!     .view()
//! ```

use crate::media::{DownsampleBound, ImageData};
use crate::ui::sizing::{ContentMode, SizingSpec};
use iced::widget::{Container, Image, Space};
use iced::{ContentFit, Element, Length, Size};

/// What a sized image view draws.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendition {
    /// A downsampled image in a fixed frame.
    Image {
        image: ImageData,
        /// Outer box of the view.
        frame: Size,
        /// Box the image is drawn into, centered in `frame`. Equals `frame`
        /// unless an aspect ratio is requested.
        content: Size,
        content_fit: ContentFit,
        /// Crop drawing to the frame.
        clip: bool,
    },
    /// The placeholder, sized to whichever target dimensions were given.
    Placeholder {
        width: Option<f32>,
        height: Option<f32>,
    },
}

/// Decides how `image` is drawn under `sizing`.
///
/// Rules, first match wins:
/// 1. no image: placeholder;
/// 2. width and height: image fitted into the bound, or exactly the bound
///    when squared;
/// 3. width only: height follows the image's aspect ratio;
/// 4. height only: width follows the image's aspect ratio;
/// 5. otherwise, or when downsampling fails: placeholder.
///
/// The frame never depends on the aspect request. An aspect ratio only
/// shapes the content box inside it, and `Fill` clips to the frame.
#[must_use]
pub fn resolve(image: Option<&ImageData>, sizing: &SizingSpec) -> Rendition {
    let placeholder = Rendition::Placeholder {
        width: sizing.width,
        height: sizing.height,
    };
    let Some(image) = image else {
        return placeholder;
    };
    let scale = sizing.scale_factor;

    let fitted = match (sizing.width, sizing.height) {
        (Some(width), Some(height)) => image
            .downsample(
                DownsampleBound::Both {
                    max_width: width,
                    max_height: height,
                },
                scale,
            )
            .map(|small| {
                let frame = if sizing.squared {
                    Size::new(width, height)
                } else {
                    image.fitted_size(width, height)
                };
                (small, frame)
            }),
        (Some(width), None) => image
            .downsample(DownsampleBound::Width(width), scale)
            .map(|small| (small, Size::new(width, image.fit_height(width)))),
        (None, Some(height)) => image
            .downsample(DownsampleBound::Height(height), scale)
            .map(|small| (small, Size::new(image.fit_width(height), height))),
        (None, None) => None,
    };
    let Some((small, frame)) = fitted else {
        return placeholder;
    };

    let squared = sizing.squared && sizing.width.is_some() && sizing.height.is_some();
    let (content, clip) = match sizing.aspect {
        Some(aspect) => (
            aspect.constrain(frame, image.aspect_ratio()),
            squared || aspect.mode == ContentMode::Fill,
        ),
        None => (frame, squared),
    };

    Rendition::Image {
        image: small,
        frame,
        content,
        content_fit: sizing.content_fit(),
        clip,
    }
}

/// Builds the widget tree for a resolved rendition.
pub fn render<'a, Message: 'a>(
    rendition: Rendition,
    placeholder: Option<Element<'a, Message>>,
) -> Element<'a, Message> {
    match rendition {
        Rendition::Image {
            image,
            frame,
            content,
            content_fit,
            clip,
        } => {
            let widget = Image::new(image.handle)
                .width(Length::Fixed(content.width))
                .height(Length::Fixed(content.height))
                .content_fit(content_fit);

            if clip || content != frame {
                Container::new(widget)
                    .center_x(Length::Fixed(frame.width))
                    .center_y(Length::Fixed(frame.height))
                    .clip(clip)
                    .into()
            } else {
                widget.into()
            }
        }
        Rendition::Placeholder { width, height } => sized_placeholder(width, height, placeholder),
    }
}

/// Length of a placeholder dimension: fixed when usable, otherwise shrink to
/// the content.
fn placeholder_length(dimension: Option<f32>) -> Length {
    dimension
        .filter(|value| value.is_finite() && *value > 0.0)
        .map_or(Length::Shrink, Length::Fixed)
}

/// Wraps `content` (or empty space) in a box of the given dimensions; a
/// missing or unusable dimension shrinks to the content.
pub fn sized_placeholder<'a, Message: 'a>(
    width: Option<f32>,
    height: Option<f32>,
    content: Option<Element<'a, Message>>,
) -> Element<'a, Message> {
    let width = placeholder_length(width);
    let height = placeholder_length(height);

    match content {
        Some(content) => Container::new(content).width(width).height(height).into(),
        None => Space::new().width(width).height(height).into(),
    }
}

/// Widget builder for an optional in-memory image drawn at a target size.
pub struct SizedImage<'a, Message> {
    image: Option<ImageData>,
    sizing: SizingSpec,
    placeholder: Option<Element<'a, Message>>,
}

impl<'a, Message: 'a> SizedImage<'a, Message> {
    pub fn new(image: Option<ImageData>) -> Self {
        Self {
            image,
            sizing: SizingSpec::default(),
            placeholder: None,
        }
    }

    /// Replaces the whole sizing spec.
    pub fn sizing(mut self, sizing: SizingSpec) -> Self {
        self.sizing = sizing;
        self
    }

    pub fn frame(mut self, width: impl Into<Option<f32>>, height: impl Into<Option<f32>>) -> Self {
        self.sizing = self.sizing.frame(width, height);
        self
    }

    pub fn squared(mut self) -> Self {
        self.sizing = self.sizing.squared();
        self
    }

    pub fn resizable(mut self) -> Self {
        self.sizing = self.sizing.resizable();
        self
    }

    pub fn aspect(mut self, ratio: impl Into<Option<f32>>, mode: ContentMode) -> Self {
        self.sizing = self.sizing.aspect(ratio, mode);
        self
    }

    pub fn scale_factor(mut self, scale_factor: f32) -> Self {
        self.sizing = self.sizing.scale_factor(scale_factor);
        self
    }

    /// Sets the element shown when there is no image to draw.
    pub fn placeholder(mut self, placeholder: impl Into<Element<'a, Message>>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Resolves the current configuration without building widgets.
    #[must_use]
    pub fn rendition(&self) -> Rendition {
        resolve(self.image.as_ref(), &self.sizing)
    }

    pub fn view(self) -> Element<'a, Message> {
        let rendition = self.rendition();
        render(rendition, self.placeholder)
    }
}

impl<'a, Message: 'a> From<SizedImage<'a, Message>> for Element<'a, Message> {
    fn from(sized: SizedImage<'a, Message>) -> Self {
        sized.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_image;

    fn frame_of(rendition: &Rendition) -> Size {
        match rendition {
            Rendition::Image { frame, .. } => *frame,
            other => panic!("expected image rendition, got {other:?}"),
        }
    }

    #[test]
    fn missing_image_renders_sized_placeholder() {
        let spec = SizingSpec::new().frame(40.0, 30.0);
        assert_eq!(
            resolve(None, &spec),
            Rendition::Placeholder {
                width: Some(40.0),
                height: Some(30.0)
            }
        );
        assert_eq!(
            resolve(None, &SizingSpec::new()),
            Rendition::Placeholder {
                width: None,
                height: None
            }
        );
    }

    #[test]
    fn both_dimensions_use_fitted_frame() {
        let image = sample_image(200, 100);
        let rendition = resolve(Some(&image), &SizingSpec::new().frame(50.0, 50.0));

        assert_eq!(frame_of(&rendition), Size::new(50.0, 25.0));
        match rendition {
            Rendition::Image { image, clip, .. } => {
                assert_eq!((image.width, image.height), (50, 25));
                assert!(!clip);
            }
            Rendition::Placeholder { .. } => unreachable!(),
        }
    }

    #[test]
    fn squared_uses_master_dimensions_and_clips() {
        let image = sample_image(200, 100);
        let spec = SizingSpec::new().frame(50.0, 50.0).squared().resizable();

        match resolve(Some(&image), &spec) {
            Rendition::Image {
                frame,
                clip,
                content_fit,
                ..
            } => {
                assert_eq!(frame, Size::new(50.0, 50.0));
                assert!(clip);
                assert_eq!(content_fit, ContentFit::Cover);
            }
            other => panic!("expected image rendition, got {other:?}"),
        }
    }

    #[test]
    fn squared_is_ignored_without_both_dimensions() {
        let image = sample_image(200, 100);
        let spec = SizingSpec::new().width(100.0).squared();
        assert_eq!(
            frame_of(&resolve(Some(&image), &spec)),
            Size::new(100.0, 50.0)
        );
    }

    #[test]
    fn single_dimension_follows_aspect_ratio() {
        let image = sample_image(200, 100);

        let by_width = resolve(Some(&image), &SizingSpec::new().width(80.0));
        assert_eq!(frame_of(&by_width), Size::new(80.0, 40.0));

        let by_height = resolve(Some(&image), &SizingSpec::new().height(30.0));
        assert_eq!(frame_of(&by_height), Size::new(60.0, 30.0));
    }

    #[test]
    fn no_dimensions_renders_placeholder() {
        let image = sample_image(200, 100);
        assert_eq!(
            resolve(Some(&image), &SizingSpec::new()),
            Rendition::Placeholder {
                width: None,
                height: None
            }
        );
    }

    #[test]
    fn failed_downsample_renders_placeholder() {
        let image = sample_image(200, 100);
        let empty = ImageData::from_rgba(0, 0, Vec::new());

        for (image, spec) in [
            (&image, SizingSpec::new().frame(0.0, 10.0)),
            (&image, SizingSpec::new().width(f32::NAN)),
            (&image, SizingSpec::new().height(-1.0)),
            (&empty, SizingSpec::new().frame(10.0, 10.0)),
        ] {
            assert!(
                matches!(resolve(Some(image), &spec), Rendition::Placeholder { .. }),
                "expected placeholder for {spec:?}"
            );
        }
    }

    #[test]
    fn unusable_placeholder_dimensions_shrink() {
        assert_eq!(placeholder_length(Some(40.0)), Length::Fixed(40.0));
        assert_eq!(placeholder_length(None), Length::Shrink);
        assert_eq!(placeholder_length(Some(f32::NAN)), Length::Shrink);
        assert_eq!(placeholder_length(Some(-1.0)), Length::Shrink);
        assert_eq!(placeholder_length(Some(0.0)), Length::Shrink);
    }

    #[test]
    fn aspect_keeps_fitted_frame() {
        let image = sample_image(200, 100);
        let bound = SizingSpec::new().frame(100.0, 100.0).resizable();
        let fitted = image.fitted_size(100.0, 100.0);

        match resolve(Some(&image), &bound.aspect(0.5, ContentMode::Fill)) {
            Rendition::Image {
                frame,
                content,
                content_fit,
                clip,
                ..
            } => {
                assert_eq!(frame, fitted);
                // 100x50 covered by a 1:2 box, cropped to the frame
                assert_eq!(content, Size::new(100.0, 200.0));
                assert_eq!(content_fit, ContentFit::Cover);
                assert!(clip);
            }
            other => panic!("expected image rendition, got {other:?}"),
        }

        match resolve(Some(&image), &bound.aspect(0.5, ContentMode::Fit)) {
            Rendition::Image {
                frame,
                content,
                content_fit,
                clip,
                ..
            } => {
                assert_eq!(frame, fitted);
                assert_eq!(content, Size::new(25.0, 50.0));
                assert_eq!(content_fit, ContentFit::Contain);
                assert!(!clip);
            }
            other => panic!("expected image rendition, got {other:?}"),
        }
    }

    #[test]
    fn aspect_keeps_squared_frame() {
        let image = sample_image(200, 100);
        let spec = SizingSpec::new()
            .frame(60.0, 60.0)
            .squared()
            .resizable()
            .aspect(None, ContentMode::Fit);

        match resolve(Some(&image), &spec) {
            Rendition::Image { frame, clip, .. } => {
                assert_eq!(frame, Size::new(60.0, 60.0));
                assert!(clip);
            }
            other => panic!("expected image rendition, got {other:?}"),
        }
    }

    #[test]
    fn scale_factor_sizes_pixels_not_frame() {
        let image = sample_image(400, 200);
        let spec = SizingSpec::new().width(100.0).scale_factor(2.0);

        match resolve(Some(&image), &spec) {
            Rendition::Image {
                image,
                frame,
                content_fit,
                ..
            } => {
                assert_eq!((image.width, image.height), (200, 100));
                assert_eq!(frame, Size::new(100.0, 50.0));
                // The denser bitmap is scaled down to the frame, not cropped
                assert_eq!(content_fit, ContentFit::ScaleDown);
            }
            other => panic!("expected image rendition, got {other:?}"),
        }
    }

    #[test]
    fn builder_matches_resolve() {
        let image = sample_image(200, 100);
        let sized: SizedImage<'_, ()> = SizedImage::new(Some(image.clone())).frame(50.0, 50.0);
        assert_eq!(
            sized.rendition(),
            resolve(Some(&image), &SizingSpec::new().frame(50.0, 50.0))
        );

        let _element: Element<'_, ()> = sized.placeholder(Space::new()).into();
    }
}
