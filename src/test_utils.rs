// SPDX-License-Identifier: MPL-2.0
//! Test helpers: encoded sample images and in-memory doubles for the cache and
//! fetcher seams.

use crate::error::{Error, Result};
use crate::media::{ImageCache, ImageData, ImageFetcher};
use futures_util::future::BoxFuture;
use image_rs::{ImageFormat, Rgba, RgbaImage};
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use url::Url;

/// Encodes a solid red PNG of the given size.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("failed to encode png");
    bytes
}

/// Creates an opaque black image of the given size.
pub fn sample_image(width: u32, height: u32) -> ImageData {
    let mut pixels = vec![0u8; (width * height * 4) as usize];
    pixels.chunks_exact_mut(4).for_each(|pixel| pixel[3] = 255);
    ImageData::from_rgba(width, height, pixels)
}

pub fn url(raw: &str) -> Url {
    Url::parse(raw).expect("test url")
}

/// Fetcher that answers every request with the same canned result and counts
/// how often it was asked.
pub struct StubFetcher {
    response: Result<Vec<u8>>,
    calls: AtomicUsize,
}

impl StubFetcher {
    pub fn ok(bytes: Vec<u8>) -> Self {
        Self {
            response: Ok(bytes),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(Error::Transport(message.to_string())),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ImageFetcher for StubFetcher {
    fn fetch(&self, _url: &Url) -> BoxFuture<'static, Result<Vec<u8>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}

/// Fetcher whose requests never complete.
pub struct PendingFetcher;

impl ImageFetcher for PendingFetcher {
    fn fetch(&self, _url: &Url) -> BoxFuture<'static, Result<Vec<u8>>> {
        Box::pin(futures_util::future::pending())
    }
}

/// Unbounded map-backed cache.
#[derive(Default)]
pub struct MapCache {
    images: Mutex<HashMap<Url, ImageData>>,
}

impl MapCache {
    pub fn with(url: &Url, image: ImageData) -> Self {
        let cache = Self::default();
        cache.store(url, &image);
        cache
    }

    pub fn len(&self) -> usize {
        self.images.lock().expect("cache lock").len()
    }
}

impl ImageCache for MapCache {
    fn lookup(&self, url: &Url) -> Option<ImageData> {
        self.images.lock().expect("cache lock").get(url).cloned()
    }

    fn store(&self, url: &Url, image: &ImageData) {
        self.images
            .lock()
            .expect("cache lock")
            .insert(url.clone(), image.clone());
    }
}
