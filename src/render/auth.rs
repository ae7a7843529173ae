//! Authorization header decoding.
//!
//! Credentials are only displayed, never checked. A bearer token's payload
//! segment is shown claim by claim; a basic credential is shown with the
//! password redacted.
//!
//! Both schemes decode with the URL-safe alphabet and reject padding. That is
//! the historical behavior of this tool. Standard base64 basic credentials
//! that happen to need padding (or contain `+`/`/`) decode as errors and the
//! section is skipped.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde_json::{Map, Value};

const BEARER_PREFIX: &str = "bearer ";
const BASIC_PREFIX: &str = "basic ";

/// Appended to the basic-auth line.
pub const REDACTION: &str = "<redacted for viewing pleasure>";
pub const PASSWORD_WARNING: &str = "Do not store this output! Password is out in the open!";

/// A decoded `Authorization` header.
#[derive(Debug, Clone, PartialEq)]
pub enum Credentials {
    /// Claims from the token's payload segment.
    Bearer(Map<String, Value>),
    /// The user name part of a basic credential.
    Basic { username: String },
}

impl Credentials {
    /// Decode the first `Authorization` header in `headers`.
    ///
    /// Returns `None` when the header is missing, empty, not UTF-8, uses
    /// another scheme, or fails to decode.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
        Self::parse(value)
    }

    pub fn parse(value: &str) -> Option<Self> {
        if value.is_empty() {
            return None;
        }

        if let Some(token) = strip_prefix_ignore_case(value, BEARER_PREFIX) {
            return decode_bearer(token).map(Credentials::Bearer);
        }
        if let Some(encoded) = strip_prefix_ignore_case(value, BASIC_PREFIX) {
            return decode_basic(encoded).map(|username| Credentials::Basic { username });
        }
        None
    }

    /// Banner line for the verbose profile.
    pub fn banner(&self) -> &'static str {
        match self {
            Credentials::Bearer(_) => "=== JWT Token ===",
            Credentials::Basic { .. } => "=== Basic Auth ===",
        }
    }

    /// Write the detail lines for these credentials.
    ///
    /// Claims come out sorted by key. String claims are shown bare, every
    /// other value as compact JSON (`iat: 1516239022`, `roles: ["a"]`).
    pub fn write_lines(&self, out: &mut Vec<u8>) {
        match self {
            Credentials::Bearer(claims) => {
                for (key, value) in claims {
                    out.extend_from_slice(key.as_bytes());
                    out.extend_from_slice(b": ");
                    out.extend_from_slice(display_value(value).as_bytes());
                    out.push(b'\n');
                }
            }
            Credentials::Basic { username } => {
                out.extend_from_slice(username.as_bytes());
                out.push(b':');
                out.extend_from_slice(REDACTION.as_bytes());
                out.extend_from_slice(PASSWORD_WARNING.as_bytes());
                out.push(b'\n');
            }
        }
    }
}

/// `str::get` returns `None` for short values and non-char-boundary cuts,
/// so neither can panic here.
fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    let head = value.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        value.get(prefix.len()..)
    } else {
        None
    }
}

fn decode_bearer(token: &str) -> Option<Map<String, Value>> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    match serde_json::from_slice(&bytes).ok()? {
        Value::Object(claims) => Some(claims),
        _ => None,
    }
}

fn decode_basic(encoded: &str) -> Option<String> {
    let bytes = URL_SAFE_NO_PAD.decode(encoded).ok()?;
    let decoded = String::from_utf8_lossy(&bytes);
    let username = decoded.split(':').next().unwrap_or_default();
    Some(username.to_string())
}

/// Strings without their JSON quotes, everything else as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
