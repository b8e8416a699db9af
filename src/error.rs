use std::{
    error,
    fmt::{self, Display},
};

use crate::config::Key;

#[derive(Debug)]
pub enum Error {
    Configuration(Key),
    Extraction(ExtractionFailure, String),
    Network(reqwest::Error),
    Unsupported(UnsupportedError, String),
    Url(url::ParseError),

    // Catch-all for int parsing errors and the like.
    Other(String, Box<dyn error::Error + 'static>),
}

/// The element a parse step required but could not find.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ExtractionFailure {
    Metadata,
    Title,
    Thumbnail,
    PageCount,
    Cover,
    Listing,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum UnsupportedError {
    /// The document parsed, but declares zero pages. Usually the site served a
    /// challenge page; a full browser fetch may succeed where we did not.
    EmptyPages,
    Route,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Configuration(key) => write!(f, "Configuration not provided: {:?}", key),
            Error::Extraction(kind, url) => match kind {
                ExtractionFailure::Metadata => {
                    write!(f, "Unable to extract gallery metadata at {}", url)
                }
                ExtractionFailure::Title => write!(f, "Unable to extract title at {}", url),
                ExtractionFailure::Thumbnail => {
                    write!(f, "Unable to extract thumbnail at {}", url)
                }
                ExtractionFailure::PageCount => {
                    write!(f, "Unable to extract page count at {}", url)
                }
                ExtractionFailure::Cover => write!(f, "Unable to extract cover image at {}", url),
                ExtractionFailure::Listing => {
                    write!(f, "Unable to extract listing entry at {}", url)
                }
            },

            Error::Network(e) => write!(f, "Network error: {}", e),
            Error::Unsupported(UnsupportedError::EmptyPages, url) => {
                write!(f, "Error: Empty pages (try a browser) at {}", url)
            }
            Error::Unsupported(UnsupportedError::Route, url) => {
                write!(f, "Unsupported link: {}", url)
            }
            Error::Url(_) => f.write_str("Bad url"),

            Error::Other(message, _) => f.write_str(message),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Configuration(_) => None,
            Error::Extraction(..) => None,
            Error::Network(e) => Some(e),
            Error::Unsupported(..) => None,
            Error::Url(e) => Some(e),

            Error::Other(_, e) => Some(e.as_ref()),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Network(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::Url(e)
    }
}
