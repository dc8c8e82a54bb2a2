// SPDX-License-Identifier: MPL-2.0
//! Image data and the collaborators behind remote image views: decoding and
//! downsampling, the shared cache, the network fetcher and the loader that
//! ties them together.

pub mod cache;
pub mod fetch;
pub mod image;
pub mod loader;

pub use cache::{CacheConfig, CacheStats, ImageCache, LruImageCache};
pub use fetch::{HttpFetcher, ImageFetcher};
pub use image::{decode, DownsampleBound, ImageData};
pub use loader::ImageLoader;
