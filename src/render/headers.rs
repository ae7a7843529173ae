//! Header section rendering.

use axum::http::HeaderMap;

/// Write one `Key: value` line per header value.
///
/// Keys come out in the map's iteration order, which is not a stable
/// contract. Each stored (key, value) pair is emitted exactly once.
pub fn write_headers(out: &mut Vec<u8>, headers: &HeaderMap) {
    for name in headers.keys() {
        let key = canonical_key(name.as_str());
        for value in headers.get_all(name) {
            out.extend_from_slice(key.as_bytes());
            out.extend_from_slice(b": ");
            out.extend_from_slice(value.as_bytes());
            out.push(b'\n');
        }
    }
}

/// Canonical MIME form of a header name: `x-forwarded-for` → `X-Forwarded-For`.
///
/// Names containing anything other than token characters are returned as-is.
pub fn canonical_key(name: &str) -> String {
    if !name.bytes().all(is_token_byte) {
        return name.to_string();
    }

    let mut upper = true;
    name.chars()
        .map(|c| {
            let mapped = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            mapped
        })
        .collect()
}

fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}
