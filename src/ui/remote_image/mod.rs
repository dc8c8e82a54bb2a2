// SPDX-License-Identifier: MPL-2.0
//! Remote image view: a source URL, a load state machine driven by the host
//! application, and a view configuration that renders each state.
//!
//! The host keeps one [`State`] per image, forwards [`Message`]s to it, and
//! draws it through a [`RemoteImage`].

mod source;
mod state;
mod view;

pub use source::ImageSource;
pub use state::{LoadState, Message, State};
pub use view::{Presentation, RemoteImage};
