// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the gallery.

use crate::media::ImageLoader;
use crate::ui::remote_image;
use crate::ui::sizing::SizingSpec;

/// Launch options gathered by `main.rs`.
#[derive(Debug, Clone)]
pub struct Flags {
    /// Image URLs to show, one tile each.
    pub urls: Vec<String>,
    /// Sizing applied to every tile.
    pub sizing: SizingSpec,
    pub loader: ImageLoader,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A message for the tile at the given index.
    Image(usize, remote_image::Message),
    /// A spinner frame, forwarded to every tile.
    Spinner(remote_image::Message),
    /// Drops the tile's image and loads it again.
    Reload(usize),
}
