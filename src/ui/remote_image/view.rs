// SPDX-License-Identifier: MPL-2.0
//! View configuration of a remote image.
//!
//! # Usage
//!
//! ```ignore
//! RemoteImage::new()
//!     .frame(160.0, 160.0)
//!     .squared()
//!     .resizable()
//!     .on_error(|message| text(message.to_owned()).into())
//!     .view(&self.avatar)
//! ```

use crate::error::Error;
use crate::ui::design_tokens::{palette, sizing};
use crate::ui::remote_image::{LoadState, State};
use crate::ui::sized_image::{self, Rendition};
use crate::ui::sizing::{ContentMode, SizingSpec};
use crate::ui::widgets::animated_spinner::AnimatedSpinner;
use iced::widget::Text;
use iced::Element;
use std::rc::Rc;

type ViewFn<'a, Message> = Rc<dyn Fn() -> Element<'a, Message> + 'a>;
type ErrorViewFn<'a, Message> = Rc<dyn Fn(&str) -> Element<'a, Message> + 'a>;

/// Which branch of the view tree a remote image shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Presentation<'s> {
    /// The sized image (or its placeholder) for an idle state.
    Image(Rendition),
    Loading,
    Error(&'s Error),
}

/// Immutable view configuration: sizing plus optional placeholder, loading
/// and error views.
///
/// Modifiers consume the value and return a new one with a single field
/// changed. Clones share the view closures.
pub struct RemoteImage<'a, Message> {
    sizing: SizingSpec,
    placeholder: Option<ViewFn<'a, Message>>,
    on_loading: Option<ViewFn<'a, Message>>,
    on_error: Option<ErrorViewFn<'a, Message>>,
}

impl<Message> Clone for RemoteImage<'_, Message> {
    fn clone(&self) -> Self {
        Self {
            sizing: self.sizing,
            placeholder: self.placeholder.clone(),
            on_loading: self.on_loading.clone(),
            on_error: self.on_error.clone(),
        }
    }
}

impl<Message> Default for RemoteImage<'_, Message> {
    fn default() -> Self {
        Self {
            sizing: SizingSpec::default(),
            placeholder: None,
            on_loading: None,
            on_error: None,
        }
    }
}

impl<'a, Message: 'a> RemoteImage<'a, Message> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn sizing_spec(&self) -> &SizingSpec {
        &self.sizing
    }

    /// Replaces the whole sizing spec.
    #[must_use]
    pub fn sizing(self, sizing: SizingSpec) -> Self {
        Self { sizing, ..self }
    }

    #[must_use]
    pub fn squared(self) -> Self {
        let sizing = self.sizing.squared();
        self.sizing(sizing)
    }

    #[must_use]
    pub fn resizable(self) -> Self {
        let sizing = self.sizing.resizable();
        self.sizing(sizing)
    }

    #[must_use]
    pub fn aspect(self, ratio: impl Into<Option<f32>>, mode: ContentMode) -> Self {
        let sizing = self.sizing.aspect(ratio, mode);
        self.sizing(sizing)
    }

    #[must_use]
    pub fn frame(self, width: impl Into<Option<f32>>, height: impl Into<Option<f32>>) -> Self {
        let sizing = self.sizing.frame(width, height);
        self.sizing(sizing)
    }

    #[must_use]
    pub fn width(self, width: f32) -> Self {
        let sizing = self.sizing.width(width);
        self.sizing(sizing)
    }

    #[must_use]
    pub fn height(self, height: f32) -> Self {
        let sizing = self.sizing.height(height);
        self.sizing(sizing)
    }

    #[must_use]
    pub fn scale_factor(self, scale_factor: f32) -> Self {
        let sizing = self.sizing.scale_factor(scale_factor);
        self.sizing(sizing)
    }

    /// Shown when there is no image to draw, and for errors when no error
    /// view is set.
    #[must_use]
    pub fn placeholder(self, view: impl Fn() -> Element<'a, Message> + 'a) -> Self {
        Self {
            placeholder: Some(Rc::new(view)),
            ..self
        }
    }

    /// Shown while loading instead of the default spinner.
    #[must_use]
    pub fn on_loading(self, view: impl Fn() -> Element<'a, Message> + 'a) -> Self {
        Self {
            on_loading: Some(Rc::new(view)),
            ..self
        }
    }

    /// Shown when loading failed; receives the error message.
    #[must_use]
    pub fn on_error(self, view: impl Fn(&str) -> Element<'a, Message> + 'a) -> Self {
        Self {
            on_error: Some(Rc::new(view)),
            ..self
        }
    }

    /// Edge of the default spinner: the standard size, shrunk to fit the
    /// requested frame.
    fn spinner_size(&self) -> f32 {
        [self.sizing.width, self.sizing.height]
            .into_iter()
            .flatten()
            .filter(|edge| edge.is_finite() && *edge > 0.0)
            .fold(sizing::ICON_XL, f32::min)
    }

    /// Decides which branch to show for `state`.
    #[must_use]
    pub fn present<'s>(&self, state: &'s State) -> Presentation<'s> {
        match state.load_state() {
            LoadState::Idle(image) => {
                Presentation::Image(sized_image::resolve(image.as_ref(), &self.sizing))
            }
            LoadState::Loading => Presentation::Loading,
            LoadState::Error(err) => Presentation::Error(err),
        }
    }

    pub fn view(&self, state: &State) -> Element<'a, Message> {
        match self.present(state) {
            Presentation::Image(rendition) => {
                let placeholder = match rendition {
                    Rendition::Placeholder { .. } => self.placeholder.as_ref().map(|view| view()),
                    Rendition::Image { .. } => None,
                };
                sized_image::render(rendition, placeholder)
            }
            Presentation::Loading => match &self.on_loading {
                Some(view) => view(),
                None => AnimatedSpinner::new(palette::PRIMARY_500, state.spinner_rotation())
                    .with_size(self.spinner_size())
                    .into_element(),
            },
            Presentation::Error(err) => {
                let message = err.to_string();
                if let Some(view) = &self.on_error {
                    view(&message)
                } else if let Some(view) = &self.placeholder {
                    sized_image::sized_placeholder(
                        self.sizing.width,
                        self.sizing.height,
                        Some(view()),
                    )
                } else {
                    Text::new(message).into()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ImageLoader;
    use crate::test_utils::{png_bytes, sample_image, url, MapCache, StubFetcher};
    use crate::ui::remote_image::Message as LoadMessage;
    use iced::widget::Space;
    use std::cell::RefCell;
    use std::sync::Arc;

    const IMAGE_URL: &str = "https://example.com/bird.png";

    fn loading_state() -> State {
        let loader = ImageLoader::new(
            Arc::new(MapCache::default()),
            Arc::new(StubFetcher::ok(png_bytes(1, 1))),
        );
        let mut state = State::new(IMAGE_URL);
        let _ = state.mount(&loader);
        state
    }

    #[test]
    fn modifiers_are_idempotent() {
        let once = RemoteImage::<()>::new().squared().resizable();
        let twice = RemoteImage::<()>::new()
            .squared()
            .squared()
            .resizable()
            .resizable();
        assert_eq!(once.sizing_spec(), twice.sizing_spec());
    }

    #[test]
    fn modifiers_combine_fields() {
        let config = RemoteImage::<()>::new()
            .frame(100.0, 50.0)
            .squared()
            .aspect(2.0, ContentMode::Fill);
        let spec = config.sizing_spec();

        assert_eq!((spec.width, spec.height), (Some(100.0), Some(50.0)));
        assert!(spec.squared);
        assert_eq!(spec.aspect.map(|a| a.mode), Some(ContentMode::Fill));
    }

    #[test]
    fn idle_presents_sized_image() {
        let image = sample_image(200, 100);
        let state = State::with_image(None, image.clone());
        let config = RemoteImage::<()>::new().frame(50.0, 50.0);

        assert_eq!(
            config.present(&state),
            Presentation::Image(sized_image::resolve(Some(&image), config.sizing_spec()))
        );
    }

    #[test]
    fn idle_without_image_presents_placeholder() {
        let state = State::new(IMAGE_URL);
        let config = RemoteImage::<()>::new().width(40.0);

        assert_eq!(
            config.present(&state),
            Presentation::Image(Rendition::Placeholder {
                width: Some(40.0),
                height: None
            })
        );
    }

    #[test]
    fn loading_uses_custom_view() {
        let state = loading_state();
        let called = Rc::new(RefCell::new(false));
        let flag = called.clone();
        let config = RemoteImage::<()>::new().on_loading(move || {
            *flag.borrow_mut() = true;
            Space::new().into()
        });

        assert_eq!(config.present(&state), Presentation::Loading);
        let _ = config.view(&state);
        assert!(*called.borrow());
    }

    #[test]
    fn loading_defaults_to_spinner() {
        let state = loading_state();
        let _element: Element<'_, ()> = RemoteImage::new().view(&state);
    }

    #[test]
    fn spinner_fits_small_frames() {
        assert_eq!(RemoteImage::<()>::new().spinner_size(), sizing::ICON_XL);
        assert_eq!(
            RemoteImage::<()>::new().frame(120.0, 20.0).spinner_size(),
            20.0
        );
        assert_eq!(
            RemoteImage::<()>::new().width(f32::NAN).spinner_size(),
            sizing::ICON_XL
        );
    }

    #[test]
    fn error_view_receives_message() {
        let mut state = loading_state();
        state.update(LoadMessage::Loaded {
            generation: state.generation(),
            result: Err(Error::Transport("timeout".into())),
        });

        let received = Rc::new(RefCell::new(None));
        let sink = received.clone();
        let config = RemoteImage::<()>::new()
            .placeholder(|| Space::new().into())
            .on_error(move |message| {
                *sink.borrow_mut() = Some(message.to_string());
                Space::new().into()
            });

        let _ = config.view(&state);
        assert_eq!(received.borrow().as_deref(), Some("timeout"));
    }

    #[test]
    fn error_falls_back_to_placeholder() {
        let mut state = State::default();
        let _ = state.mount(&ImageLoader::new(
            Arc::new(MapCache::default()),
            Arc::new(StubFetcher::ok(Vec::new())),
        ));
        assert_eq!(
            RemoteImage::<()>::new().present(&state),
            Presentation::Error(&Error::InvalidUrl)
        );

        let called = Rc::new(RefCell::new(false));
        let flag = called.clone();
        let config = RemoteImage::<()>::new().placeholder(move || {
            *flag.borrow_mut() = true;
            Space::new().into()
        });

        let _ = config.view(&state);
        assert!(*called.borrow());
    }

    #[test]
    fn cached_image_presents_without_loading() {
        let image = sample_image(10, 10);
        let loader = ImageLoader::new(
            Arc::new(MapCache::with(&url(IMAGE_URL), image.clone())),
            Arc::new(StubFetcher::failing("unused")),
        );
        let mut state = State::new(IMAGE_URL);
        let _ = state.mount(&loader);

        let config = RemoteImage::<()>::new().width(10.0);
        assert_eq!(
            config.present(&state),
            Presentation::Image(sized_image::resolve(Some(&image), config.sizing_spec()))
        );
    }
}
