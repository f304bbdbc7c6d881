use thiserror::Error;

/// A boxed error produced by a [`Transport`](crate::Transport) implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// All errors that can occur when using the webmedia client.
#[derive(Error, Debug)]
pub enum WebMediaError {
    /// The configured base URL could not be parsed.
    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The configured base URL has no hierarchical path (e.g. `mailto:`).
    #[error("base URL {0:?} cannot carry an endpoint path")]
    BaseUrlCannotBeABase(String),

    /// The configured base URL uses a scheme other than `http` or `https`.
    #[error("unsupported base URL scheme {0:?}")]
    UnsupportedScheme(String),

    /// The underlying reqwest client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    /// The request could not be sent or no response was received.
    #[error("request failed: {0}")]
    Transport(#[source] BoxError),

    /// The response body was not valid JSON or did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl WebMediaError {
    /// Wrap any error raised while sending a request.
    pub fn transport(err: impl Into<BoxError>) -> Self {
        WebMediaError::Transport(err.into())
    }

    /// `true` for failures raised before a response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, WebMediaError::Transport(_))
    }

    /// `true` when a response arrived but its body could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, WebMediaError::Decode(_))
    }
}

/// A convenience alias for `Result<T, WebMediaError>`.
pub type Result<T> = std::result::Result<T, WebMediaError>;
