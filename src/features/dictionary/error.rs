//! Lookup failure taxonomy

use serde::Serialize;
use thiserror::Error;

/// Discriminant for [`LookupError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Transport,
    Read,
    Decode,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Transport => write!(f, "transport"),
            ErrorKind::Read => write!(f, "read"),
            ErrorKind::Decode => write!(f, "decode"),
        }
    }
}

/// Why a dictionary lookup failed. None of these are retried.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The request never produced a response (connect, DNS, timeout).
    #[error("/define making a request got an error")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// Headers arrived but the body could not be read to the end.
    #[error("/define couldn't read the raw response data from Urban Dictionary")]
    Read {
        #[source]
        source: reqwest::Error,
        status: u16,
    },

    /// The body was not the JSON shape we expect.
    #[error("/define couldn't unmarshal the response JSON from Urban Dictionary")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
        status: u16,
    },
}

impl LookupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::Transport { .. } => ErrorKind::Transport,
            LookupError::Read { .. } => ErrorKind::Read,
            LookupError::Decode { .. } => ErrorKind::Decode,
        }
    }

    /// HTTP status of the response, when one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            LookupError::Transport { source } => source.status().map(|s| s.as_u16()),
            LookupError::Read { status, .. } | LookupError::Decode { status, .. } => Some(*status),
        }
    }

    /// Raw response body, only kept for decode failures
    pub fn body(&self) -> Option<&str> {
        match self {
            LookupError::Decode { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Text of the underlying cause
    pub fn detail(&self) -> String {
        match self {
            LookupError::Transport { source } | LookupError::Read { source, .. } => {
                source.to_string()
            }
            LookupError::Decode { source, .. } => source.to_string(),
        }
    }
}
