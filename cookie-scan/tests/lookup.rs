use cookie_scan::{find, find_in_headers, lookup};
use http::header::COOKIE;
use http::{HeaderMap, HeaderValue};

#[test]
fn lookup_through_public_api() {
    let h = "csrftoken=Qm9va2luZw; sessionid=xyz; theme=dark";
    assert_eq!(lookup(h, "csrftoken"), "Qm9va2luZw");
    assert_eq!(lookup(h, "theme"), "dark");
    assert_eq!(lookup(h, "missing"), "");
    assert_eq!(find(h, "missing"), None);
}

#[test]
fn header_map_feeds_the_scan() {
    let mut map = HeaderMap::new();
    map.append(COOKIE, HeaderValue::from_str("sessionid=xyz").unwrap());
    map.append(COOKIE, HeaderValue::from_str("csrftoken=Qm9va2luZw").unwrap());
    assert_eq!(find_in_headers(&map, "csrftoken"), Some("Qm9va2luZw"));
    assert_eq!(find_in_headers(&map, "sessionid"), Some("xyz"));
    assert_eq!(find_in_headers(&map, "theme"), None);
}

#[test]
fn values_come_back_unchanged() {
    // raw stored text, no percent-decoding and no trimming
    assert_eq!(lookup("next=%2Fschedule%2F", "next"), "%2Fschedule%2F");
    assert_eq!(lookup("pair=k=v", "pair"), "k=v");
}
