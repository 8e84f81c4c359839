use http::header::COOKIE;
use http::HeaderMap;

use crate::lookup::find;

/// Find `name` across every `Cookie` line in `headers`.
///
/// HTTP/2 allows the cookie string to arrive split over several header
/// lines; they are scanned in insertion order and the first match wins.
/// A line that does not convert to UTF-8 is skipped.
pub fn find_in_headers<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    for raw in headers.get_all(COOKIE) {
        let Ok(line) = raw.to_str() else {
            tracing::debug!("skipping cookie header with non-ascii bytes");
            continue;
        };
        if let Some(value) = find(line, name) {
            return Some(value);
        }
    }
    None
}
