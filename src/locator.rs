use core::fmt;
use std::str::FromStr;

use http::Uri;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UrlError {
    #[error("`{raw}` is not a valid URL: {reason}")]
    Invalid { raw: String, reason: String },
    #[error("`{0}` is not an absolute URL (scheme and host required)")]
    NotAbsolute(String),
}

/// An absolute URL such as `https://swapi.co/api/planets/1/`.
///
/// `http::Uri` normalizes what it parses (an empty path becomes `/`), so the text the
/// URL was read from is kept alongside it and is what gets written back and compared.
#[derive(Debug, Clone)]
pub struct ResourceUrl {
    raw: String,
    uri: Uri,
}

impl ResourceUrl {
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }
}

impl FromStr for ResourceUrl {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uri: Uri = s.parse().map_err(|e: http::uri::InvalidUri| UrlError::Invalid {
            raw: s.to_owned(),
            reason: e.to_string(),
        })?;
        if uri.scheme().is_none() || uri.host().map_or(true, str::is_empty) {
            return Err(UrlError::NotAbsolute(s.to_owned()));
        }
        Ok(Self {
            raw: s.to_owned(),
            uri,
        })
    }
}

impl fmt::Display for ResourceUrl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

// Byte equality on the original text.
impl PartialEq for ResourceUrl {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for ResourceUrl {}
