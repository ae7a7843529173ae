//! Cookie extraction and rendering.

use axum::http::{header::COOKIE, HeaderMap};
use cookie::Cookie;

/// Attributes that are bare flags: `HttpOnly`, never `HttpOnly=x`.
const FLAG_ATTRIBUTES: [&str; 3] = ["httponly", "secure", "partitioned"];

/// Attributes that always carry `=value`.
const VALUE_ATTRIBUTES: [&str; 5] = ["domain", "path", "max-age", "expires", "samesite"];

/// Parse every cookie carried in `Cookie` headers.
///
/// Segments that fail to parse are skipped.
pub fn request_cookies(headers: &HeaderMap) -> Vec<Cookie<'static>> {
    headers
        .get_all(COOKIE)
        .iter()
        .flat_map(|value| group_segments(&String::from_utf8_lossy(value.as_bytes())))
        .filter_map(|group| Cookie::parse(group).ok())
        .collect()
}

/// A cookie segment plus the attributes attached to it so far.
#[derive(Default)]
struct Group {
    text: String,
    attributes: Vec<String>,
}

/// Split a header value on `;`, attaching attribute segments to the cookie before them.
///
/// A segment only counts as an attribute when it is well-formed for that
/// attribute and the cookie does not have it yet. Anything else is a cookie
/// of its own, so `a=1; secure=yes` is two cookies and `a=1; path=/x; path=y`
/// ends with a cookie named `path`.
fn group_segments(value: &str) -> Vec<String> {
    let mut groups: Vec<Group> = Vec::new();
    for segment in value.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        if let (Some(current), Some(name)) = (groups.last_mut(), attribute_name(segment)) {
            if !current.attributes.contains(&name) {
                current.text.push_str("; ");
                current.text.push_str(segment);
                current.attributes.push(name);
                continue;
            }
        }
        groups.push(Group {
            text: segment.to_string(),
            ..Group::default()
        });
    }
    groups.into_iter().map(|g| g.text).collect()
}

/// Lowercased attribute name if `segment` is a well-formed cookie attribute.
fn attribute_name(segment: &str) -> Option<String> {
    let (name, value) = match segment.split_once('=') {
        Some((name, value)) => (name.trim().to_ascii_lowercase(), Some(value.trim())),
        None => (segment.to_ascii_lowercase(), None),
    };

    let well_formed = match value {
        None => FLAG_ATTRIBUTES.contains(&name.as_str()),
        Some(v) if name == "max-age" => v.parse::<i64>().is_ok(),
        Some(_) => VALUE_ATTRIBUTES.contains(&name.as_str()),
    };
    well_formed.then_some(name)
}

/// Write `<domain>/<path>[ [<max-age>]][ http-only][ secure]: <value>`.
pub fn write_cookie(out: &mut Vec<u8>, cookie: &Cookie<'_>) {
    let mut line = format!(
        "{}/{}",
        cookie.domain().unwrap_or_default(),
        cookie.path().unwrap_or_default()
    );

    if let Some(age) = cookie.max_age().map(|d| d.whole_seconds()).filter(|s| *s > 0) {
        line.push_str(&format!(" [{age}]"));
    }
    if cookie.http_only().unwrap_or(false) {
        line.push_str(" http-only");
    }
    if cookie.secure().unwrap_or(false) {
        line.push_str(" secure");
    }

    line.push_str(": ");
    line.push_str(cookie.value());
    line.push('\n');
    out.extend_from_slice(line.as_bytes());
}
