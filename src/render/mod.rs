//! Request dump rendering.
//!
//! # Data Flow
//! ```text
//! Request<Bytes>
//!     → general line (method + URL as received)
//!     → headers.rs (one line per header value)
//!     → auth.rs (bearer claims / basic user, verbose profile only)
//!     → cookies.rs (one line per request cookie)
//!     → body bytes, verbatim, between delimiters
//! ```
//!
//! # Design Decisions
//! - Pure function of the request: no state, no I/O, never fails
//! - Output is bytes, so non-UTF-8 bodies pass through untouched
//! - One renderer for both profiles; the profile only toggles banners
//!   and the authentication section

pub mod auth;
pub mod cookies;
pub mod headers;

use axum::body::Bytes;
use axum::http::{Request, Version};

use crate::config::Profile;
pub use auth::Credentials;

/// Opens the body section in the verbose profile.
pub const BODY_START: &str = "----- Body -----";
/// Closes the body section; also opens it in the minimal profile.
pub const BODY_END: &str = "----------------";

/// Renders request dumps for one profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    profile: Profile,
}

impl Renderer {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }

    /// Render the full dump of `request`.
    pub fn render(&self, request: &Request<Bytes>) -> Vec<u8> {
        let verbose = self.profile.is_verbose();
        let headers = request.headers();
        let mut out = Vec::with_capacity(512 + request.body().len());

        if verbose {
            out.extend_from_slice(b"=== General ===\n");
        }
        out.extend_from_slice(format!("{} {}\n", request.method(), request_target(request)).as_bytes());

        if verbose {
            out.extend_from_slice(b"\n=== Headers ===\n");
        }
        headers::write_headers(&mut out, headers);

        if verbose {
            if let Some(credentials) = Credentials::from_headers(headers) {
                out.push(b'\n');
                out.extend_from_slice(credentials.banner().as_bytes());
                out.push(b'\n');
                credentials.write_lines(&mut out);
            }
            out.extend_from_slice(b"\n=== Cookies ===\n");
        }
        for cookie in cookies::request_cookies(headers) {
            cookies::write_cookie(&mut out, &cookie);
        }

        if verbose {
            out.extend_from_slice(format!("\n{BODY_START}\n").as_bytes());
        } else {
            out.extend_from_slice(format!("{BODY_END}\n").as_bytes());
        }
        out.extend_from_slice(request.body());
        out.extend_from_slice(format!("\n{BODY_END}\n").as_bytes());

        out
    }
}

/// The URL as the client wrote it.
///
/// HTTP/2 has no request line: hyper rebuilds an absolute `Uri` from the
/// `:scheme`, `:authority` and `:path` pseudo-headers, so only `:path` is
/// shown. HTTP/1 keeps the full target, which keeps absolute-form proxy
/// requests intact.
fn request_target<B>(request: &Request<B>) -> String {
    let uri = request.uri();
    match (request.version(), uri.path_and_query()) {
        (Version::HTTP_2, Some(path)) => path.to_string(),
        _ => uri.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine as _;
    use std::collections::HashSet;

    fn request(method: &str, uri: &str, headers: &[(&str, &str)], body: &[u8]) -> Request<Bytes> {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(Bytes::copy_from_slice(body)).unwrap()
    }

    fn render(profile: Profile, request: &Request<Bytes>) -> String {
        String::from_utf8(Renderer::new(profile).render(request)).unwrap()
    }

    /// Text between the opening delimiter and the final closing delimiter.
    fn body_of<'a>(text: &'a str, open: &str) -> &'a str {
        let start = text.find(open).unwrap() + open.len();
        let end = text.rfind(&format!("\n{BODY_END}\n")).unwrap();
        &text[start..end]
    }

    #[test]
    fn verbose_layout() {
        let req = request("GET", "/foo?a=1", &[("x-test", "1")], b"hello");
        let text = render(Profile::Verbose, &req);
        assert_eq!(
            text,
            "=== General ===\nGET /foo?a=1\n\n=== Headers ===\nX-Test: 1\n\n=== Cookies ===\n\n----- Body -----\nhello\n----------------\n"
        );
    }

    #[test]
    fn minimal_layout() {
        let req = request("POST", "/submit", &[("x-test", "1")], b"hello");
        let text = render(Profile::Minimal, &req);
        assert_eq!(
            text,
            "POST /submit\nX-Test: 1\n----------------\nhello\n----------------\n"
        );
    }

    #[test]
    fn general_line_is_verbatim() {
        let req = request("PATCH", "/a%20b/../c?x=%2F&y", &[], b"");
        let text = render(Profile::Minimal, &req);
        assert_eq!(text.lines().next(), Some("PATCH /a%20b/../c?x=%2F&y"));
    }

    #[test]
    fn absolute_form_kept_for_http1() {
        let req = request("GET", "http://upstream.test:8080/p?q=1", &[], b"");
        let text = render(Profile::Minimal, &req);
        assert_eq!(text.lines().next(), Some("GET http://upstream.test:8080/p?q=1"));
    }

    #[test]
    fn http2_shows_path_not_pseudo_headers() {
        let req = Request::builder()
            .method("GET")
            .version(Version::HTTP_2)
            .uri("http://127.0.0.1:8080/h2?q=1")
            .body(Bytes::new())
            .unwrap();
        let text = render(Profile::Verbose, &req);
        assert_eq!(text.lines().nth(1), Some("GET /h2?q=1"));
    }

    #[test]
    fn scenario_header_and_cookie() {
        let req = request(
            "GET",
            "/foo",
            &[("X-Test", "1"), ("Cookie", "name=abc; Max-Age=60; HttpOnly")],
            b"",
        );
        let text = render(Profile::Verbose, &req);
        assert!(text.contains("GET /foo\n"));
        assert!(text.lines().any(|l| l == "X-Test: 1"));

        let cookie_line = text
            .lines()
            .find(|l| l.ends_with(": abc"))
            .expect("cookie line");
        assert!(cookie_line.contains("[60]"));
        assert!(cookie_line.contains("http-only"));
        assert!(!cookie_line.contains("secure"));
    }

    #[test]
    fn header_pairs_appear_once() {
        let req = request(
            "GET",
            "/",
            &[("accept", "a"), ("accept", "b"), ("x-one", "1"), ("x-two", "2")],
            b"",
        );
        let text = render(Profile::Minimal, &req);
        let lines: Vec<&str> = text.lines().skip(1).take(4).collect();
        let set: HashSet<&str> = lines.iter().copied().collect();
        assert_eq!(set.len(), 4);
        assert_eq!(
            set,
            HashSet::from(["Accept: a", "Accept: b", "X-One: 1", "X-Two: 2"])
        );
    }

    #[test]
    fn bearer_section_in_verbose_only() {
        let payload = URL_SAFE_NO_PAD.encode(r#"{"sub":"42","admin":true}"#);
        let auth = format!("Bearer h.{payload}.s");
        let req = request("GET", "/", &[("authorization", auth.as_str())], b"");

        let verbose = render(Profile::Verbose, &req);
        assert!(verbose.contains("\n=== JWT Token ===\nadmin: true\nsub: 42\n"));

        let minimal = render(Profile::Minimal, &req);
        assert!(!minimal.contains("sub: 42"));
        assert!(!minimal.contains("==="));
    }

    #[test]
    fn basic_section_redacts_password() {
        let auth = format!("Basic {}", URL_SAFE_NO_PAD.encode("user:hunter2"));
        let req = request("GET", "/", &[("authorization", auth.as_str())], b"");
        let text = render(Profile::Verbose, &req);
        assert!(text.contains(
            "\n=== Basic Auth ===\nuser:<redacted for viewing pleasure>Do not store this output! Password is out in the open!\n"
        ));
        assert!(!text.contains("hunter2"));
    }

    #[test]
    fn malformed_bearer_renders_no_section() {
        let req = request("GET", "/", &[("authorization", "Bearer not-a-token")], b"");
        let text = render(Profile::Verbose, &req);
        assert!(!text.contains("=== JWT Token ==="));
        assert!(text.contains("Authorization: Bearer not-a-token\n"));
    }

    #[test]
    fn no_authorization_means_no_auth_section() {
        let req = request("GET", "/", &[("x-test", "1")], b"");
        let text = render(Profile::Verbose, &req);
        assert!(!text.contains("=== JWT Token ==="));
        assert!(!text.contains("=== Basic Auth ==="));
    }

    #[test]
    fn empty_body_is_empty_between_delimiters() {
        let req = request("GET", "/", &[], b"");
        assert_eq!(body_of(&render(Profile::Verbose, &req), "----- Body -----\n"), "");
        assert_eq!(body_of(&render(Profile::Minimal, &req), "----------------\n"), "");
    }

    #[test]
    fn body_containing_delimiters_is_untouched() {
        let body = "line one\n----------------\n----- Body -----\nend";
        let req = request("PUT", "/", &[], body.as_bytes());
        assert_eq!(body_of(&render(Profile::Verbose, &req), "----- Body -----\n"), body);
        assert_eq!(body_of(&render(Profile::Minimal, &req), "----------------\n"), body);
    }

    #[test]
    fn binary_body_is_copied_byte_for_byte() {
        let body: Vec<u8> = (0..=255u8).collect();
        let req = request("POST", "/", &[], &body);
        let out = Renderer::new(Profile::Verbose).render(&req);
        let suffix = format!("\n{BODY_END}\n");
        assert!(out.ends_with(suffix.as_bytes()));
        assert!(out.windows(body.len()).any(|w| w == body.as_slice()));
    }

    #[test]
    fn empty_cookie_section_keeps_banner() {
        let req = request("GET", "/", &[], b"");
        let text = render(Profile::Verbose, &req);
        assert!(text.contains("\n=== Cookies ===\n\n----- Body -----\n"));
    }
}
