// SPDX-License-Identifier: MPL-2.0
//! Shared image cache keyed by URL.
//!
//! Remote image views only look images up through the [`ImageCache`] trait;
//! the loader stores what it fetched when write-back is enabled.
//!
//! # Design
//!
//! - **LRU eviction**: Least recently used images are evicted first
//! - **Memory-bounded**: Total cache size limited by configurable byte limit
//! - **URL-keyed**: Images indexed by their resolved URL
//! - **Shared**: Interior mutability so one cache serves many views

use crate::config::{self, Config};
use crate::media::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};
use url::Url;

/// Lookup/store interface used by the loader.
pub trait ImageCache: Send + Sync {
    /// Returns the cached image for `url`, if any.
    fn lookup(&self, url: &Url) -> Option<ImageData>;

    /// Stores `image` under `url`. Implementations may decline to keep it.
    fn store(&self, url: &Url, image: &ImageData);
}

/// Configuration for the LRU cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum cache size in bytes.
    pub max_bytes: usize,

    /// Maximum number of images to cache.
    pub max_images: usize,

    /// Whether caching is enabled.
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_bytes: config::DEFAULT_CACHE_BYTES,
            max_images: config::DEFAULT_CACHE_IMAGES,
            enabled: true,
        }
    }
}

impl CacheConfig {
    /// Creates a new cache configuration with clamped limits.
    #[must_use]
    pub fn new(max_bytes: usize, max_images: usize) -> Self {
        Self {
            max_bytes: max_bytes.clamp(config::MIN_CACHE_BYTES, config::MAX_CACHE_BYTES),
            max_images: max_images.clamp(config::MIN_CACHE_IMAGES, config::MAX_CACHE_IMAGES),
            enabled: true,
        }
    }

    /// Creates a disabled cache configuration.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }
}

impl From<&Config> for CacheConfig {
    fn from(config: &Config) -> Self {
        Self {
            enabled: config.cache_enabled,
            ..Self::new(config.cache_max_bytes, config.cache_max_images)
        }
    }
}

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of images currently in cache.
    pub image_count: usize,

    /// Total bytes currently used by cached images.
    pub total_bytes: usize,

    /// Number of cache hits (image found).
    pub hits: u64,

    /// Number of cache misses (image not found).
    pub misses: u64,

    /// Number of images evicted due to limits.
    pub evictions: u64,

    /// Number of images inserted.
    pub insertions: u64,
}

impl CacheStats {
    /// Returns the cache hit rate as a percentage (0.0 - 100.0).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

struct Inner {
    cache: LruCache<Url, ImageData>,
    current_bytes: usize,
    stats: CacheStats,
}

/// Memory-bounded LRU implementation of [`ImageCache`].
pub struct LruImageCache {
    inner: Mutex<Inner>,
    config: CacheConfig,
}

impl LruImageCache {
    /// Creates a new cache with the given configuration.
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_images).unwrap_or(NonZeroUsize::MIN);

        Self {
            inner: Mutex::new(Inner {
                cache: LruCache::new(capacity),
                current_bytes: 0,
                stats: CacheStats::default(),
            }),
            config,
        }
    }

    /// Creates a new cache with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(CacheConfig::default())
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // The inner state stays consistent across a panic in another holder.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts an image into the cache.
    ///
    /// Returns `true` if the image was inserted, `false` if caching is disabled
    /// or the image is too large.
    pub fn insert(&self, url: Url, image: ImageData) -> bool {
        if !self.config.enabled {
            return false;
        }

        let image_size = image.byte_size();

        // Don't cache images larger than half the cache size
        if image_size > self.config.max_bytes / 2 {
            return false;
        }

        let mut inner = self.lock();

        // Replace any existing entry for this URL
        if let Some(existing) = inner.cache.pop(&url) {
            inner.current_bytes = inner.current_bytes.saturating_sub(existing.byte_size());
        }

        // Evict images until we have room
        while inner.current_bytes + image_size > self.config.max_bytes && !inner.cache.is_empty()
        {
            if let Some((_, evicted)) = inner.cache.pop_lru() {
                inner.current_bytes = inner.current_bytes.saturating_sub(evicted.byte_size());
                inner.stats.evictions += 1;
            }
        }

        // The entry count limit evicts through `push`
        if let Some((evicted_url, evicted)) = inner.cache.push(url.clone(), image) {
            if evicted_url != url {
                inner.current_bytes = inner.current_bytes.saturating_sub(evicted.byte_size());
                inner.stats.evictions += 1;
            }
        }

        inner.current_bytes += image_size;
        inner.stats.insertions += 1;
        inner.stats.image_count = inner.cache.len();
        inner.stats.total_bytes = inner.current_bytes;

        true
    }

    /// Gets an image from the cache by URL, updating LRU order on access.
    pub fn get(&self, url: &Url) -> Option<ImageData> {
        if !self.config.enabled {
            return None;
        }

        let mut inner = self.lock();
        let found = inner.cache.get(url).cloned();
        if found.is_some() {
            inner.stats.hits += 1;
        } else {
            inner.stats.misses += 1;
        }
        found
    }

    /// Checks if an image is cached for the given URL without updating LRU order.
    #[must_use]
    pub fn contains(&self, url: &Url) -> bool {
        self.config.enabled && self.lock().cache.contains(url)
    }

    /// Clears all cached images.
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.cache.clear();
        inner.current_bytes = 0;
        inner.stats.image_count = 0;
        inner.stats.total_bytes = 0;
    }

    /// Returns the current cache statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.lock().stats
    }

    /// Returns the current number of cached images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().cache.len()
    }

    /// Returns whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().cache.is_empty()
    }

    /// Returns the current memory usage in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.lock().current_bytes
    }

    /// Returns the cache configuration.
    #[must_use]
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }
}

impl ImageCache for LruImageCache {
    fn lookup(&self, url: &Url) -> Option<ImageData> {
        self.get(url)
    }

    fn store(&self, url: &Url, image: &ImageData) {
        if !self.insert(url.clone(), image.clone()) {
            log::debug!("Not caching {url}: cache disabled or image too large");
        }
    }
}

impl std::fmt::Debug for LruImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("LruImageCache")
            .field("enabled", &self.config.enabled)
            .field("image_count", &inner.cache.len())
            .field("memory_usage", &inner.current_bytes)
            .field("max_bytes", &self.config.max_bytes)
            .field("max_images", &self.config.max_images)
            .field("stats", &inner.stats)
            .finish()
    }
}
