use super::*;

// =============================================================
// Response parsing
// =============================================================

#[test]
fn token_response_parses_with_identity_fields() {
    let parsed: TokenResponse = serde_json::from_str(
        r#"{"token":"abc123","user_id":7,"email":"lee@example.com"}"#,
    )
    .expect("token response");
    assert_eq!(parsed.token, "abc123");
    assert_eq!(parsed.user_id, Some(7));
    assert_eq!(parsed.email.as_deref(), Some("lee@example.com"));
}

#[test]
fn token_response_parses_with_token_only() {
    let parsed: TokenResponse =
        serde_json::from_str(r#"{"token":"abc123"}"#).expect("token response");
    assert_eq!(parsed.token, "abc123");
    assert!(parsed.user_id.is_none());
    assert!(parsed.email.is_none());
}

#[test]
fn token_response_without_token_is_rejected() {
    let result: Result<TokenResponse, _> = serde_json::from_str(r#"{"user_id":7}"#);
    assert!(result.is_err());
}

#[test]
fn fundraiser_parses_full_detail_shape() {
    let parsed: Fundraiser = serde_json::from_str(
        r#"{
            "id": 3,
            "title": "Community garden",
            "description": "Raised beds for the block",
            "goal": 500.0,
            "image": "https://example.com/garden.jpg",
            "is_open": true,
            "date_created": "2026-03-01T12:00:00Z",
            "owner": 7,
            "owner_username": "lee",
            "pledges": [
                {"id": 1, "amount": 25.0, "comment": "Good luck!", "anonymous": false,
                 "supporter": 9, "supporter_username": "sam", "fundraiser": 3}
            ]
        }"#,
    )
    .expect("fundraiser");
    assert_eq!(parsed.id, 3);
    assert_eq!(parsed.owner, Some(7));
    assert_eq!(parsed.pledges.len(), 1);
    assert_eq!(parsed.pledges[0].supporter_username.as_deref(), Some("sam"));
}

#[test]
fn fundraiser_list_shape_defaults_optional_fields() {
    let parsed: Fundraiser = serde_json::from_str(
        r#"{"id": 4, "title": "T", "description": "D", "goal": 10.0, "is_open": false}"#,
    )
    .expect("fundraiser");
    assert!(parsed.image.is_none());
    assert!(parsed.owner.is_none());
    assert!(parsed.pledges.is_empty());
}

#[test]
fn fundraiser_missing_required_field_is_rejected() {
    let result: Result<Fundraiser, _> =
        serde_json::from_str(r#"{"id": 4, "title": "T", "goal": 10.0, "is_open": false}"#);
    assert!(result.is_err());
}

#[test]
fn pledge_defaults_anonymous_to_false() {
    let parsed: Pledge = serde_json::from_str(r#"{"id": 1, "amount": 5.5}"#).expect("pledge");
    assert!(!parsed.anonymous);
    assert!(parsed.comment.is_none());
}

// =============================================================
// Request serialization
// =============================================================

#[test]
fn new_fundraiser_omits_absent_image() {
    let body = serde_json::to_value(NewFundraiser {
        title: "T".to_owned(),
        description: "D".to_owned(),
        goal: 100.0,
        image: None,
        is_open: true,
    })
    .expect("serialize");
    assert!(body.get("image").is_none());
    assert_eq!(body.get("goal").and_then(serde_json::Value::as_f64), Some(100.0));
}

#[test]
fn new_pledge_omits_absent_supporter() {
    let body = serde_json::to_value(NewPledge {
        amount: 20.0,
        comment: String::new(),
        anonymous: true,
        fundraiser: 3,
        supporter: None,
    })
    .expect("serialize");
    assert!(body.get("supporter").is_none());
    assert_eq!(body.get("fundraiser").and_then(serde_json::Value::as_i64), Some(3));
}
