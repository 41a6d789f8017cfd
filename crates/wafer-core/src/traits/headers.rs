// SPDX-FileCopyrightText: 2026 Wafer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Header lookup abstraction over inbound requests.

use std::collections::HashMap;

/// A bag of inbound request headers.
///
/// Lookups are case-insensitive, as HTTP header names are. A header that is
/// present but not valid UTF-8 is treated as absent.
pub trait HeaderSource {
    fn header(&self, name: &str) -> Option<&str>;
}

impl HeaderSource for http::HeaderMap {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|v| v.to_str().ok())
    }
}

impl<B> HeaderSource for http::Request<B> {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers().header(name)
    }
}

impl HeaderSource for HashMap<String, String> {
    fn header(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl HeaderSource for [(&str, &str)] {
    fn header(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }
}

impl<T: HeaderSource + ?Sized> HeaderSource for &T {
    fn header(&self, name: &str) -> Option<&str> {
        (**self).header(name)
    }
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;

    use super::*;

    #[test]
    fn header_map_lookup_is_case_insensitive() {
        let mut headers = http::HeaderMap::new();
        headers.insert("x-wx-code", HeaderValue::from_static("abc"));
        assert_eq!(headers.header("X-WX-Code"), Some("abc"));
        assert_eq!(headers.header("X-WX-IV"), None);
    }

    #[test]
    fn non_utf8_header_is_absent() {
        let mut headers = http::HeaderMap::new();
        headers.insert("x-wx-iv", HeaderValue::from_bytes(&[0xff, 0xfe]).unwrap());
        assert_eq!(headers.header("X-WX-IV"), None);
    }

    #[test]
    fn request_delegates_to_its_headers() {
        let request = http::Request::builder()
            .header("X-WX-Id", "sid")
            .body(())
            .unwrap();
        assert_eq!(request.header("x-wx-id"), Some("sid"));
    }

    #[test]
    fn hash_map_and_slice_sources() {
        let map = HashMap::from([("X-WX-Skey".to_string(), "k".to_string())]);
        assert_eq!(map.header("x-wx-skey"), Some("k"));

        let pairs: &[(&str, &str)] = &[("X-WX-Id", "i")];
        assert_eq!(pairs.header("X-WX-ID"), Some("i"));
        assert_eq!(pairs.header("X-WX-Skey"), None);
    }
}
