use std::fmt;

/// Errors from the document store and asset resolver.
#[derive(Debug)]
pub enum FirebaseError {
    /// Missing project id or bucket, or an unusable base URL. Not retryable.
    Config(String),
    /// Network-level failure. Retryable.
    Network(String),
    /// The service returned an error response.
    Api { status: u16, message: String },
    /// Failed to parse the service's response. Not retryable.
    Parse(String),
}

impl fmt::Display for FirebaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FirebaseError::Config(msg) => write!(f, "firebase config error: {msg}"),
            FirebaseError::Network(msg) => write!(f, "firebase network error: {msg}"),
            FirebaseError::Api { status, message } => {
                write!(f, "firebase API error (HTTP {status}): {message}")
            }
            FirebaseError::Parse(msg) => write!(f, "firebase parse error: {msg}"),
        }
    }
}

impl std::error::Error for FirebaseError {}
