use thiserror::Error;

/// Core ledger error type
#[derive(Error, Debug)]
pub enum Error {
    /// Xmsg lifecycle or validation error
    #[error("Xmsg error: {0}")]
    Xmsg(#[from] crate::xmsg::XmsgError),

    /// Generic error with message
    #[error("Generic error: {0}")]
    Generic(String),
}

impl Error {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            // A rejected record stays rejected under the same block inputs.
            Error::Xmsg(_) => false,
            Error::Generic(_) => false,
        }
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Generic(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Generic(s)
    }
}
