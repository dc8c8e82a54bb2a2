// SPDX-License-Identifier: MPL-2.0
//! `iced_remote_image` provides image views for the Iced GUI framework.
//!
//! - [`ui::sized_image::SizedImage`] draws an already decoded image inside a
//!   requested frame, honoring squared, aspect ratio and resizable requests,
//!   and downsamples large images to the pixels actually displayed.
//! - [`ui::remote_image`] loads an image from a URL through a shared cache
//!   and an HTTP fetcher, showing a spinner while loading and an error view
//!   when loading fails.
//!
//! The `iced_remote_image` binary is a small gallery built on both.

#![doc(html_root_url = "https://docs.rs/iced_remote_image/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
