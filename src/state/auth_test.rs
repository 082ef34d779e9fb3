use super::*;

// =============================================================
// Session
// =============================================================

#[test]
fn default_session_is_not_authenticated() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert!(session.token.is_none());
}

#[test]
fn session_with_token_is_authenticated() {
    let session = Session::authenticated("abc123".to_owned(), None, None);
    assert!(session.is_authenticated());
    assert_eq!(session.token.as_deref(), Some("abc123"));
}

#[test]
fn user_id_num_parses_the_stored_string() {
    let session = Session::authenticated("abc123".to_owned(), Some("7".to_owned()), None);
    assert_eq!(session.user_id_num(), Some(7));
}

#[test]
fn user_id_num_rejects_non_numeric_values() {
    let session = Session::authenticated("abc123".to_owned(), Some("me".to_owned()), None);
    assert!(session.user_id_num().is_none());
}

// =============================================================
// AuthState transitions
// =============================================================

#[test]
fn log_in_replaces_the_session_wholesale() {
    let mut state = AuthState::default();
    state.log_in(Session::authenticated(
        "abc123".to_owned(),
        Some("7".to_owned()),
        Some("lee@example.com".to_owned()),
    ));
    assert!(state.session.is_authenticated());
    assert_eq!(state.session.user_id.as_deref(), Some("7"));

    state.log_in(Session::authenticated("xyz".to_owned(), None, None));
    assert_eq!(state.session.token.as_deref(), Some("xyz"));
    assert!(state.session.user_id.is_none());
    assert!(state.session.email.is_none());
}

#[test]
fn log_out_resets_all_fields() {
    let mut state = AuthState::default();
    state.log_in(Session::authenticated(
        "abc123".to_owned(),
        Some("7".to_owned()),
        Some("lee@example.com".to_owned()),
    ));
    state.log_out();
    assert_eq!(state.session, Session::default());
    assert!(!state.session.is_authenticated());
}

// =============================================================
// Token store (server stubs)
// =============================================================

#[test]
fn token_store_reads_absent_outside_the_browser() {
    assert!(token_store::token().is_none());
    assert_eq!(token_store::load(), Session::default());
}
