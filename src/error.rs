// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors produced while configuring, fetching or decoding images.
///
/// Load errors are carried inside Iced messages, so every variant is `Clone`
/// and stores its source as a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The image source is absent, unparsable, or not an `http(s)` URL.
    InvalidUrl,

    /// The network fetch failed. The message is passed through verbatim.
    Transport(String),

    /// The fetched bytes could not be decoded into an image.
    Decode(String),

    /// The load was aborted before it completed.
    Cancelled,

    Io(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidUrl => write!(f, "Invalid Image URL"),
            Error::Transport(e) => write!(f, "{}", e),
            Error::Decode(e) => write!(f, "Unable to decode image: {}", e),
            Error::Cancelled => write!(f, "Image load cancelled"),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(_: url::ParseError) -> Self {
        Error::InvalidUrl
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
