//! Header list helpers: Basic auth, name filtering, cookie extraction.
//!
//! # Design
//! Every function here is total. Filtering never fails: an empty name or an
//! input that is not a header list simply yields no matches. Results borrow
//! from the input and keep its order, since repeated headers such as
//! `Set-Cookie` are independent entries.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Deserialize;

use crate::types::{BasicAuth, Header};

pub const AUTHORIZATION: &str = "Authorization";
pub const SET_COOKIE: &str = "Set-Cookie";

/// Build an `Authorization: Basic ...` header. Missing credentials are
/// treated as empty strings, so this always succeeds.
pub fn basic_auth_header(username: Option<&str>, password: Option<&str>) -> Header {
    let credentials = format!("{}:{}", username.unwrap_or(""), password.unwrap_or(""));
    Header {
        name: AUTHORIZATION.to_string(),
        value: format!("Basic {}", STANDARD.encode(credentials.as_bytes())),
    }
}

impl BasicAuth {
    pub fn to_header(&self) -> Header {
        basic_auth_header(self.username.as_deref(), self.password.as_deref())
    }
}

/// Every header whose name matches `name` case-insensitively, in input order.
pub fn filter_headers<'a>(headers: &'a [Header], name: &str) -> Vec<&'a Header> {
    if name.is_empty() {
        return Vec::new();
    }
    let target = name.to_lowercase();
    headers
        .iter()
        .filter(|h| h.name.to_lowercase() == target)
        .collect()
}

/// Like [`filter_headers`], for header lists that arrive as untyped JSON.
///
/// Anything other than an array of `{"name", "value"}` records yields an
/// empty result.
pub fn filter_headers_json(value: &serde_json::Value, name: &str) -> Vec<Header> {
    if !value.is_array() {
        return Vec::new();
    }
    let headers = match Vec::<Header>::deserialize(value) {
        Ok(headers) => headers,
        Err(e) => {
            tracing::trace!(error = %e, "header list is not name/value records");
            return Vec::new();
        }
    };
    filter_headers(&headers, name).into_iter().cloned().collect()
}

pub fn has_auth_header(headers: &[Header]) -> bool {
    !filter_headers(headers, AUTHORIZATION).is_empty()
}

pub fn get_set_cookie_headers(headers: &[Header]) -> Vec<&Header> {
    filter_headers(headers, SET_COOKIE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use serde_json::json;

    fn decode_basic(header: &Header) -> String {
        let encoded = header.value.strip_prefix("Basic ").unwrap();
        String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap()
    }

    #[test]
    fn basic_auth_known_value() {
        let header = basic_auth_header(Some("Aladdin"), Some("open sesame"));
        assert_eq!(header.name, "Authorization");
        assert_eq!(header.value, "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
    }

    #[test]
    fn basic_auth_decodes_to_user_colon_password() {
        let cases = [
            (Some("user"), Some("pass"), "user:pass"),
            (Some("user@domain"), Some("p@ss:word!"), "user@domain:p@ss:word!"),
            (Some("ünïcode"), Some("пароль"), "ünïcode:пароль"),
            (Some(""), Some(""), ":"),
        ];
        for (user, pass, expected) in cases {
            assert_eq!(decode_basic(&basic_auth_header(user, pass)), expected);
        }
    }

    #[test]
    fn basic_auth_missing_credentials_are_empty() {
        assert_eq!(basic_auth_header(None, None).value, "Basic Og==");
        assert_eq!(decode_basic(&basic_auth_header(Some("bob"), None)), "bob:");
        assert_eq!(decode_basic(&basic_auth_header(None, Some("pw"))), ":pw");
    }

    #[test]
    fn basic_auth_from_credentials_struct() {
        let auth = BasicAuth {
            username: Some("user".to_string()),
            password: None,
        };
        assert_eq!(decode_basic(&auth.to_header()), "user:");
    }

    #[test]
    fn filter_is_case_insensitive_and_keeps_order() {
        let headers = vec![
            Header::new("X-Trace", "1"),
            Header::new("accept", "a"),
            Header::new("x-trace", "2"),
            Header::new("X-TRACE", "3"),
        ];
        let values: Vec<&str> = filter_headers(&headers, "x-Trace")
            .iter()
            .map(|h| h.value.as_str())
            .collect();
        assert_eq!(values, vec!["1", "2", "3"]);
        assert_eq!(headers.len(), 4);
    }

    #[test]
    fn filter_with_empty_name_is_empty() {
        let headers = vec![Header::new("", "blank")];
        assert!(filter_headers(&headers, "").is_empty());
    }

    #[test]
    fn filter_json_soft_fails_on_non_lists() {
        assert!(filter_headers_json(&json!(null), "accept").is_empty());
        assert!(filter_headers_json(&json!("accept"), "accept").is_empty());
        assert!(filter_headers_json(&json!({"name": "accept", "value": "x"}), "accept").is_empty());
        assert!(filter_headers_json(&json!([1, 2, 3]), "accept").is_empty());
    }

    #[test]
    fn filter_json_matches_header_records() {
        let value = json!([
            {"name": "Accept", "value": "text/html"},
            {"name": "Cookie", "value": "a=1"},
            {"name": "ACCEPT", "value": "*/*"},
        ]);
        let matched = filter_headers_json(&value, "accept");
        assert_eq!(
            matched,
            vec![Header::new("Accept", "text/html"), Header::new("ACCEPT", "*/*")]
        );
        assert!(filter_headers_json(&value, "").is_empty());
    }

    #[test]
    fn has_auth_header_detects_any_case() {
        assert!(has_auth_header(&[Header::new("Authorization", "x")]));
        assert!(has_auth_header(&[Header::new("authorization", "x")]));
        assert!(!has_auth_header(&[]));
        assert!(!has_auth_header(&[Header::new("Proxy-Authorization", "x")]));
    }

    #[test]
    fn set_cookie_headers_keep_all_entries_in_order() {
        let headers = vec![
            Header::new("Set-Cookie", "session=abc"),
            Header::new("Content-Type", "text/html"),
            Header::new("set-cookie", "theme=dark"),
        ];
        let cookies = get_set_cookie_headers(&headers);
        assert_eq!(cookies.len(), 2);
        assert_eq!(cookies[0].value, "session=abc");
        assert_eq!(cookies[1].value, "theme=dark");
    }
}
