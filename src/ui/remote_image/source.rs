// SPDX-License-Identifier: MPL-2.0
//! Where a remote image comes from.

use crate::error::{Error, Result};
use url::Url;

/// A remote image request, given as text or as an already parsed URL.
///
/// Text is only parsed when the image is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Text(String),
    Url(Url),
}

impl ImageSource {
    /// Resolves the source to an `http` or `https` URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] for unparsable text or any other scheme.
    pub fn resolve(&self) -> Result<Url> {
        let url = match self {
            ImageSource::Text(raw) => Url::parse(raw.trim())?,
            ImageSource::Url(url) => url.clone(),
        };

        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(Error::InvalidUrl),
        }
    }
}

impl From<&str> for ImageSource {
    fn from(raw: &str) -> Self {
        ImageSource::Text(raw.to_string())
    }
}

impl From<String> for ImageSource {
    fn from(raw: String) -> Self {
        ImageSource::Text(raw)
    }
}

impl From<Url> for ImageSource {
    fn from(url: Url) -> Self {
        ImageSource::Url(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_source_resolves_lazily() {
        let source = ImageSource::from("  https://example.com/a.png ");
        assert_eq!(
            source.resolve().unwrap().as_str(),
            "https://example.com/a.png"
        );
    }

    #[test]
    fn malformed_text_is_invalid() {
        assert_eq!(
            ImageSource::from("not a url").resolve(),
            Err(Error::InvalidUrl)
        );
        assert_eq!(ImageSource::from("").resolve(), Err(Error::InvalidUrl));
    }

    #[test]
    fn non_http_schemes_are_invalid() {
        let url = Url::parse("file:///tmp/a.png").unwrap();
        assert_eq!(ImageSource::from(url).resolve(), Err(Error::InvalidUrl));
    }
}
