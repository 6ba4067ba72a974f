use std::{error, fmt, io, sync::Arc};

use druid::Data;

#[derive(Clone, Debug, Data, Eq, PartialEq)]
pub enum Error {
    /// Transport-level failure, the server was never (fully) reached.
    Network(Arc<str>),
    /// The server answered with a non-success status code.
    Http(u16),
    /// The response body did not match the expected shape.
    Decode(Arc<str>),
}

impl Error {
    pub fn network(err: impl fmt::Display) -> Self {
        Self::Network(err.to_string().into())
    }

    pub fn decode(err: impl fmt::Display) -> Self {
        Self::Decode(err.to_string().into())
    }
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Network(err) => write!(f, "network error: {}", err),
            Self::Http(status) => write!(f, "server returned HTTP {}", status),
            Self::Decode(err) => write!(f, "malformed response: {}", err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::network(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(err)
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(code) => Self::Http(code),
            other => Self::network(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_http_status() {
        assert_eq!(Error::Http(404).to_string(), "server returned HTTP 404");
        assert_eq!(Error::Http(500).to_string(), "server returned HTTP 500");
    }

    #[test]
    fn display_carries_underlying_message() {
        let err = Error::network("connection refused");
        assert_eq!(err.to_string(), "network error: connection refused");
    }

    #[test]
    fn json_errors_classify_as_decode() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        assert!(matches!(Error::from(err), Error::Decode(_)));
    }

    #[test]
    fn io_errors_classify_as_network() {
        let err = io::Error::new(io::ErrorKind::ConnectionReset, "reset");
        assert!(matches!(Error::from(err), Error::Network(_)));
    }
}
