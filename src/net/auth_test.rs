use super::*;

// =============================================================
// Endpoint builders
// =============================================================

#[test]
fn session_endpoint_appends_user_path() {
    assert_eq!(
        session_endpoint("https://auth.example.com"),
        "https://auth.example.com/auth/v1/user"
    );
}

#[test]
fn password_grant_endpoint_sets_grant_type() {
    assert_eq!(
        password_grant_endpoint("https://auth.example.com"),
        "https://auth.example.com/auth/v1/token?grant_type=password"
    );
}

#[test]
fn signup_and_logout_endpoints() {
    assert_eq!(signup_endpoint("https://a.example"), "https://a.example/auth/v1/signup");
    assert_eq!(logout_endpoint("https://a.example"), "https://a.example/auth/v1/logout");
}

// =============================================================
// Provider error extraction
// =============================================================

#[test]
fn provider_error_message_prefers_error_description() {
    let body = r#"{"error_description":"Invalid login credentials"}"#;
    assert_eq!(provider_error_message(400, body), "Invalid login credentials");
}

#[test]
fn provider_error_message_falls_back_to_msg_field() {
    let body = r#"{"msg":"User already registered"}"#;
    assert_eq!(provider_error_message(422, body), "User already registered");
}

#[test]
fn provider_error_message_falls_back_to_message_field() {
    let body = r#"{"message":"Password should be at least 8 characters"}"#;
    assert_eq!(
        provider_error_message(422, body),
        "Password should be at least 8 characters"
    );
}

#[test]
fn provider_error_message_skips_blank_candidates() {
    let body = r#"{"error_description":"  ","msg":"Signups disabled"}"#;
    assert_eq!(provider_error_message(403, body), "Signups disabled");
}

#[test]
fn provider_error_message_generic_on_unparseable_body() {
    assert_eq!(provider_error_message(500, "<html>oops</html>"), "request failed: 500");
    assert_eq!(provider_error_message(502, ""), "request failed: 502");
}

// =============================================================
// Signup payload
// =============================================================

#[test]
fn signup_payload_nests_full_name_in_metadata() {
    let payload = signup_payload("a@b.com", "Abc12345!", "Ada Lovelace");
    assert_eq!(payload["email"], "a@b.com");
    assert_eq!(payload["password"], "Abc12345!");
    assert_eq!(payload["data"]["full_name"], "Ada Lovelace");
}
