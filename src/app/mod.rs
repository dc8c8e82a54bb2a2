// SPDX-License-Identifier: MPL-2.0
//! Demo gallery: one remote image tile per URL given on the command line.
//!
//! All tiles share a single [`ImageLoader`], so repeated URLs are answered
//! from its cache after the first load completes.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::media::ImageLoader;
use crate::ui::remote_image;
use crate::ui::sizing::SizingSpec;
use iced::{window, Element, Subscription, Task};
use std::fmt;

pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;

/// One gallery entry.
pub struct Tile {
    url: String,
    state: remote_image::State,
}

/// Root Iced application state of the gallery.
pub struct App {
    loader: ImageLoader,
    sizing: SizingSpec,
    tiles: Vec<Tile>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("tiles", &self.tiles.len())
            .field("sizing", &self.sizing)
            .finish()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a `Fn` boot closure
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Creates the tiles and mounts each of them.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut app = App {
            loader: flags.loader,
            sizing: flags.sizing,
            tiles: flags
                .urls
                .into_iter()
                .map(|url| Tile {
                    state: remote_image::State::new(url.as_str()),
                    url,
                })
                .collect(),
        };

        let tasks: Vec<_> = (0..app.tiles.len())
            .map(|index| app.mount(index))
            .collect();

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        format!("Remote images ({})", self.tiles.len())
    }

    fn mount(&mut self, index: usize) -> Task<Message> {
        let Some(tile) = self.tiles.get_mut(index) else {
            return Task::none();
        };
        tile.state
            .mount(&self.loader)
            .map(move |message| Message::Image(index, message))
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Image(index, message) => {
                if let Some(tile) = self.tiles.get_mut(index) {
                    tile.state.update(message);
                }
                Task::none()
            }
            Message::Spinner(message) => {
                for tile in &mut self.tiles {
                    tile.state.update(message.clone());
                }
                Task::none()
            }
            Message::Reload(index) => {
                if let Some(tile) = self.tiles.get_mut(index) {
                    log::info!("Reloading {}", tile.url);
                    let source = tile.state.source().cloned();
                    tile.state.set_source(source);
                }
                self.mount(index)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(&self.tiles, &self.sizing)
    }

    /// One spinner clock for the whole gallery, running while any tile loads.
    fn subscription(&self) -> Subscription<Message> {
        self.tiles
            .iter()
            .find(|tile| tile.state.is_loading())
            .map_or_else(Subscription::none, |tile| {
                tile.state.subscription().map(Message::Spinner)
            })
    }
}
