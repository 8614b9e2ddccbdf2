use log::warn;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;

/// Structured fault payload extracted from an error response body.
///
/// OpenStack services nest this under a per-service envelope key
/// (`computeFault`, `error`, ...); `code` is backfilled from the HTTP
/// status when the envelope omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ApiFault {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl fmt::Display for ApiFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "code={}", self.code)
        } else {
            write!(f, "code={}, message={}", self.code, self.message)
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(String),
    #[error("incomplete request: {0}")]
    Builder(String),
    #[error("unexpected http status: {0}")]
    Status(u16),
    #[error("api fault: {0}")]
    Api(ApiFault),
}

pub(crate) const MAX_ERROR_BODY_BYTES: usize = 64 * 1024;

pub(crate) const CONFIG_ERROR_REDIRECT_WITH_AUTH: &str =
    "config error: auth_token requires disable_redirect(true) so the token never follows a redirect";

pub(crate) fn read_body_with_limit(
    resp: &mut reqwest::blocking::Response,
    limit: usize,
) -> Result<Vec<u8>, Error> {
    let mut body = Vec::new();
    resp.by_ref().take(limit as u64).read_to_end(&mut body)?;
    Ok(body)
}

/// Maps a non-2xx response body to a typed error.
///
/// A parseable fault envelope becomes `Error::Api`; anything else becomes
/// `Error::Status` carrying the raw status code.
pub(crate) fn parse_fault_from_body(status: StatusCode, body: &[u8]) -> Error {
    let value = match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(value) => value,
        Err(_) => {
            if !body.is_empty() {
                warn!(
                    "discarding unparseable error body ({} bytes) for status {}",
                    body.len(),
                    status
                );
            }
            return Error::Status(status.as_u16());
        }
    };
    let Some(map) = value.as_object() else {
        return Error::Status(status.as_u16());
    };
    // Per-service envelope first ({"computeFault": {...}}), then an
    // unwrapped top-level fault.
    for candidate in map.values().chain(std::iter::once(&value)) {
        if !candidate
            .get("message")
            .map_or(false, serde_json::Value::is_string)
        {
            continue;
        }
        if let Ok(mut fault) = serde_json::from_value::<ApiFault>(candidate.clone()) {
            if fault.code == 0 {
                fault.code = i32::from(status.as_u16());
            }
            return Error::Api(fault);
        }
    }
    Error::Status(status.as_u16())
}
