use super::*;
use crate::net::error::ErrorKind;

// =============================================================
// URL construction
// =============================================================

#[test]
fn join_url_concatenates_base_and_endpoint() {
    assert_eq!(
        join_url("http://localhost:8000/api", "/fundraisers/"),
        "http://localhost:8000/api/fundraisers/"
    );
}

// =============================================================
// Header merging
// =============================================================

#[test]
fn headers_default_to_json_content_type() {
    let headers = build_headers(None, &[]);
    assert_eq!(
        headers,
        vec![("Content-Type".to_owned(), "application/json".to_owned())]
    );
}

#[test]
fn present_token_adds_authorization_header() {
    let headers = build_headers(Some("abc123"), &[]);
    assert!(headers.contains(&("Authorization".to_owned(), "Token abc123".to_owned())));
}

#[test]
fn absent_token_adds_no_authorization_header() {
    let headers = build_headers(None, &[]);
    assert!(headers.iter().all(|(name, _)| name != "Authorization"));
}

#[test]
fn caller_headers_override_defaults_without_removing_them() {
    let extra = vec![
        ("content-type".to_owned(), "text/plain".to_owned()),
        ("X-Request-Id".to_owned(), "r-1".to_owned()),
    ];
    let headers = build_headers(Some("abc123"), &extra);
    assert_eq!(
        headers
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .count(),
        1
    );
    assert!(headers.contains(&("Content-Type".to_owned(), "text/plain".to_owned())));
    assert!(headers.contains(&("Authorization".to_owned(), "Token abc123".to_owned())));
    assert!(headers.contains(&("X-Request-Id".to_owned(), "r-1".to_owned())));
}

// =============================================================
// Error normalization
// =============================================================

#[test]
fn error_body_detail_field_becomes_message() {
    let err = normalize_error_body(404, r#"{"detail":"Not found"}"#);
    assert_eq!(err.message, "Not found");
    assert_eq!(err.status, Some(404));
    assert_eq!(err.kind, ErrorKind::Client);
}

#[test]
fn error_body_message_field_is_a_fallback() {
    let err = normalize_error_body(400, r#"{"message":"Bad input"}"#);
    assert_eq!(err.message, "Bad input");
}

#[test]
fn unparseable_error_body_gets_generic_message() {
    let err = normalize_error_body(500, "<html>oops</html>");
    assert_eq!(err.message, "Request failed with status 500");
    assert_eq!(err.kind, ErrorKind::Server);
}

#[test]
fn error_message_is_never_empty() {
    let err = normalize_error_body(400, r#"{"detail":""}"#);
    assert!(!err.message.is_empty());
}

// =============================================================
// Success parsing
// =============================================================

#[test]
fn no_content_yields_none_without_parsing() {
    let parsed: Option<crate::net::types::Fundraiser> =
        parse_success_body(204, "this is not json").expect("204 is success");
    assert!(parsed.is_none());
}

#[test]
fn success_body_parses_into_typed_value() {
    let parsed: Option<crate::net::types::Pledge> =
        parse_success_body(201, r#"{"id": 5, "amount": 12.5}"#).expect("parse");
    let pledge = parsed.expect("body present");
    assert_eq!(pledge.id, 5);
    assert_eq!(pledge.amount, 12.5);
}

#[test]
fn mismatched_shape_is_an_error() {
    let result: Result<Option<crate::net::types::Fundraiser>, _> =
        parse_success_body(200, r#"{"unexpected":true}"#);
    assert_eq!(result.expect_err("shape mismatch").kind, ErrorKind::Transport);
}

// =============================================================
// Method
// =============================================================

#[test]
fn method_names_match_http_verbs() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
    assert_eq!(Method::Put.as_str(), "PUT");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}
