// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: the
//! host application owns the state and routes messages back into it.
//!
//! - [`sizing`] - Sizing requests (frame, squared, aspect, resizable)
//! - [`sized_image`] - Static image view that resolves a sizing request
//! - [`remote_image`] - Image view backed by a network load
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod remote_image;
pub mod sized_image;
pub mod sizing;
pub mod widgets;
