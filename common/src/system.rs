//! Capabilities the lookup pipeline needs from the outside world.
//!
//! Production implementations live in `ouilookup-core`; tests substitute
//! canned ones.

use thiserror::Error;

use crate::network::encoding::DecodeError;

/// Status and body of an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// The request never produced a response: refused connection, DNS
/// failure, timeout or an unreadable body.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("request to {url} failed: {reason}")]
pub struct TransportError {
    pub url: String,
    pub reason: String,
}

impl TransportError {
    pub fn new(url: &str, reason: impl ToString) -> Self {
        Self {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// A minimal blocking HTTP GET.
pub trait HttpGet {
    /// Fetches `url`. Any response that arrives is `Ok` with its status
    /// kept as-is, including 4xx and 5xx.
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// Produces the raw bytes of the host's neighbor table dump.
pub trait NeighborTableSource {
    fn dump(&self) -> Result<Vec<u8>, TableError>;
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{command}` exited with {status}: {stderr}")]
    Exit {
        command: String,
        status: String,
        stderr: String,
    },
    #[error("decoding error: {0}")]
    Decode(#[from] DecodeError),
}
