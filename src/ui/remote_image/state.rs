// SPDX-License-Identifier: MPL-2.0
//! Load state machine of a remote image view.
//!
//! The host application owns one [`State`] per remote image, calls
//! [`State::mount`] when the view appears, routes [`Message`]s back through
//! [`State::update`], and calls [`State::unmount`] when the view goes away.

use crate::error::Error;
use crate::media::{ImageData, ImageLoader};
use crate::ui::remote_image::ImageSource;
use crate::ui::widgets::animated_spinner;
use futures_util::future::AbortHandle;
use iced::{Subscription, Task};
use std::future::Future;
use std::time::Duration;

/// Interval between spinner frames while loading (~60 FPS).
const SPINNER_TICK: Duration = Duration::from_millis(16);

/// Progress of one remote image.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// Nothing in progress. Holds the image once one has been resolved.
    Idle(Option<ImageData>),
    /// A load is running.
    Loading,
    /// The last load failed. Terminal until the next mount.
    Error(Error),
}

impl Default for LoadState {
    fn default() -> Self {
        LoadState::Idle(None)
    }
}

impl LoadState {
    /// Returns the resolved image, if any.
    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        match self {
            LoadState::Idle(image) => image.as_ref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Returns the error of a failed load.
    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        match self {
            LoadState::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// Messages for the remote image state.
#[derive(Debug, Clone)]
pub enum Message {
    /// A network load finished. `generation` identifies the mount it belongs to.
    Loaded {
        generation: u64,
        result: crate::error::Result<ImageData>,
    },
    /// Animate the loading spinner.
    SpinnerTick,
}

/// Per-view state of a remote image.
#[derive(Debug, Default)]
pub struct State {
    source: Option<ImageSource>,
    load: LoadState,
    /// Incremented whenever a load starts or is abandoned; stale results are
    /// dropped by comparing against it.
    generation: u64,
    in_flight: Option<AbortHandle>,
    spinner_rotation: f32,
}

impl State {
    /// Creates a state for the given source. Nothing is loaded until mount.
    #[must_use]
    pub fn new(source: impl Into<ImageSource>) -> Self {
        let mut state = Self::default();
        state.source = Some(source.into());
        state
    }

    /// Creates a state that already holds a resolved image.
    #[must_use]
    pub fn with_image(source: Option<ImageSource>, image: ImageData) -> Self {
        let mut state = Self::default();
        state.source = source;
        state.load = LoadState::Idle(Some(image));
        state
    }

    #[must_use]
    pub fn source(&self) -> Option<&ImageSource> {
        self.source.as_ref()
    }

    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        self.load.image()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.load.is_loading()
    }

    /// Generation of the most recent load. [`Message::Loaded`] carrying any
    /// other value is ignored.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current spinner rotation angle in radians.
    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Starts loading the image.
    ///
    /// Does nothing when an image is already resolved or a fetch is in
    /// flight. Otherwise resolves the source, answers from the cache when it
    /// can, and falls back to a single abortable network fetch whose result
    /// arrives as [`Message::Loaded`].
    pub fn mount(&mut self, loader: &ImageLoader) -> Task<Message> {
        match self.begin_load(loader) {
            Some(load) => Task::perform(load, std::convert::identity),
            None => Task::none(),
        }
    }

    /// State transitions of [`mount`](Self::mount). Returns the network load
    /// to run, if one was started.
    fn begin_load(
        &mut self,
        loader: &ImageLoader,
    ) -> Option<impl Future<Output = Message> + Send + 'static> {
        match self.load {
            LoadState::Idle(Some(_)) => return None,
            LoadState::Loading if self.in_flight.is_some() => return None,
            _ => {}
        }

        self.load = LoadState::Loading;

        let url = match self
            .source
            .as_ref()
            .ok_or(Error::InvalidUrl)
            .and_then(ImageSource::resolve)
        {
            Ok(url) => url,
            Err(err) => {
                log::debug!("Not loading image from {:?}: {err}", self.source);
                self.load = LoadState::Error(err);
                return None;
            }
        };

        if let Some(image) = loader.cached(&url) {
            self.load = LoadState::Idle(Some(image));
            return None;
        }

        self.generation += 1;
        let generation = self.generation;
        let (handle, load) = loader.load_abortable(url);
        self.in_flight = Some(handle);

        Some(async move {
            Message::Loaded {
                generation,
                result: load.await,
            }
        })
    }

    /// Applies a message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Loaded { generation, result } => {
                if generation != self.generation || !self.load.is_loading() {
                    log::debug!("Dropping stale image load (generation {generation})");
                    return;
                }
                self.in_flight = None;
                self.spinner_rotation = 0.0;
                self.load = match result {
                    Ok(image) => LoadState::Idle(Some(image)),
                    Err(err) => LoadState::Error(err),
                };
            }
            Message::SpinnerTick => {
                if self.load.is_loading() {
                    self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
                }
            }
        }
    }

    /// Aborts any fetch in flight. An interrupted load returns to idle so the
    /// next mount starts over; resolved images and errors are kept.
    pub fn unmount(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        self.generation += 1;
        self.spinner_rotation = 0.0;
        if self.load.is_loading() {
            self.load = LoadState::Idle(None);
        }
    }

    /// Points the view at another source, discarding the current image.
    pub fn set_source(&mut self, source: Option<ImageSource>) {
        self.unmount();
        self.source = source;
        self.load = LoadState::Idle(None);
    }

    /// Spinner ticks while loading.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.load.is_loading() {
            iced::time::every(SPINNER_TICK).map(|_| Message::SpinnerTick)
        } else {
            Subscription::none()
        }
    }
}

impl Drop for State {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
