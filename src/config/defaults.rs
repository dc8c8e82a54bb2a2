// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Cache**: Memory bounds of the shared image cache
//! - **Network**: Request timeout, redirects and user agent
//! - **Display**: Logical-to-pixel scale used when downsampling

// ==========================================================================
// Cache Defaults
// ==========================================================================

/// Default cache size in bytes (64 MB of decoded RGBA).
pub const DEFAULT_CACHE_BYTES: usize = 64 * 1024 * 1024;

/// Minimum cache size in bytes (8 MB).
pub const MIN_CACHE_BYTES: usize = 8 * 1024 * 1024;

/// Maximum cache size in bytes (512 MB).
pub const MAX_CACHE_BYTES: usize = 512 * 1024 * 1024;

/// Default maximum number of cached images.
pub const DEFAULT_CACHE_IMAGES: usize = 64;

/// Minimum number of cached images.
pub const MIN_CACHE_IMAGES: usize = 4;

/// Maximum number of cached images.
pub const MAX_CACHE_IMAGES: usize = 1024;

// ==========================================================================
// Network Defaults
// ==========================================================================

/// Default request timeout (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Default number of redirects followed before giving up.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// User agent sent with every image request.
pub const DEFAULT_USER_AGENT: &str = concat!("IcedRemoteImage/", env!("CARGO_PKG_VERSION"));

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default display scale factor (1 logical pixel = 1 physical pixel).
pub const DEFAULT_SCALE_FACTOR: f32 = 1.0;

/// Minimum display scale factor.
pub const MIN_SCALE_FACTOR: f32 = 0.5;

/// Maximum display scale factor.
pub const MAX_SCALE_FACTOR: f32 = 4.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_CACHE_BYTES > 0);
    assert!(MAX_CACHE_BYTES >= MIN_CACHE_BYTES);
    assert!(DEFAULT_CACHE_BYTES >= MIN_CACHE_BYTES);
    assert!(DEFAULT_CACHE_BYTES <= MAX_CACHE_BYTES);

    assert!(MIN_CACHE_IMAGES > 0);
    assert!(MAX_CACHE_IMAGES >= MIN_CACHE_IMAGES);
    assert!(DEFAULT_CACHE_IMAGES >= MIN_CACHE_IMAGES);
    assert!(DEFAULT_CACHE_IMAGES <= MAX_CACHE_IMAGES);

    assert!(MIN_REQUEST_TIMEOUT_SECS > 0);
    assert!(MAX_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);

    assert!(MIN_SCALE_FACTOR > 0.0);
    assert!(MAX_SCALE_FACTOR > MIN_SCALE_FACTOR);
    assert!(DEFAULT_SCALE_FACTOR >= MIN_SCALE_FACTOR);
    assert!(DEFAULT_SCALE_FACTOR <= MAX_SCALE_FACTOR);
};
