// SPDX-License-Identifier: MPL-2.0
//! Remote image loading: cache lookup, abortable network fetch and decoding.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::media::{decode, HttpFetcher, ImageCache, ImageData, ImageFetcher, LruImageCache};
use futures_util::future::{AbortHandle, Abortable};
use std::future::Future;
use std::sync::Arc;
use url::Url;

/// Shared entry point for loading remote images.
///
/// Cheap to clone; clones share the same cache and fetcher.
#[derive(Clone)]
pub struct ImageLoader {
    cache: Arc<dyn ImageCache>,
    fetcher: Arc<dyn ImageFetcher>,
    write_back: bool,
}

impl ImageLoader {
    /// Creates a loader over the given collaborators, with write-back enabled.
    #[must_use]
    pub fn new(cache: Arc<dyn ImageCache>, fetcher: Arc<dyn ImageFetcher>) -> Self {
        Self {
            cache,
            fetcher,
            write_back: true,
        }
    }

    /// Builds an LRU cache and an HTTP fetcher from `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = LruImageCache::new(config.into());
        let fetcher = HttpFetcher::new(config)?;
        Ok(Self::new(Arc::new(cache), Arc::new(fetcher)).write_back(config.write_back))
    }

    /// Sets whether images fetched from the network are stored in the cache.
    #[must_use]
    pub fn write_back(mut self, enabled: bool) -> Self {
        self.write_back = enabled;
        self
    }

    /// Looks `url` up in the shared cache.
    pub fn cached(&self, url: &Url) -> Option<ImageData> {
        let hit = self.cache.lookup(url);
        log::debug!(
            "Cache {} for {url}",
            if hit.is_some() { "hit" } else { "miss" }
        );
        hit
    }

    /// Fetches and decodes `url`, bypassing the cache lookup.
    ///
    /// The fetcher is asked for the bytes when this is called; the returned
    /// future drives that request. Decoding runs on the blocking thread pool.
    pub fn load(&self, url: Url) -> impl Future<Output = Result<ImageData>> + Send + 'static {
        log::debug!("Fetching {url}");
        let request = self.fetcher.fetch(&url);
        let cache = Arc::clone(&self.cache);
        let write_back = self.write_back;

        async move {
            let bytes = request
                .await
                .inspect_err(|err| log::warn!("Fetching {url} failed: {err}"))?;

            let image = tokio::task::spawn_blocking(move || decode(&bytes))
                .await
                .unwrap_or_else(|e| Err(Error::Decode(format!("Decode task failed: {e}"))))
                .inspect_err(|err| log::warn!("Decoding {url} failed: {err}"))?;

            if write_back {
                cache.store(&url, &image);
            }
            Ok(image)
        }
    }

    /// Same as [`load`](Self::load), paired with a handle that aborts it.
    ///
    /// An aborted load resolves to [`Error::Cancelled`].
    pub fn load_abortable(
        &self,
        url: Url,
    ) -> (
        AbortHandle,
        impl Future<Output = Result<ImageData>> + Send + 'static,
    ) {
        let (handle, registration) = AbortHandle::new_pair();
        let load = Abortable::new(self.load(url), registration);
        (handle, async move {
            load.await.unwrap_or(Err(Error::Cancelled))
        })
    }
}

impl std::fmt::Debug for ImageLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageLoader")
            .field("write_back", &self.write_back)
            .finish_non_exhaustive()
    }
}
