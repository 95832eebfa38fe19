use super::*;

#[test]
fn build_config_accepts_both_values() {
    let config = build_config(Some("https://auth.example.com"), Some("anon-key")).unwrap();
    assert_eq!(config.base_url, "https://auth.example.com");
    assert_eq!(config.anon_key, "anon-key");
}

#[test]
fn build_config_strips_trailing_slash() {
    let config = build_config(Some("https://auth.example.com/"), Some("k")).unwrap();
    assert_eq!(config.base_url, "https://auth.example.com");
}

#[test]
fn build_config_rejects_missing_url() {
    assert!(build_config(None, Some("anon-key")).is_err());
}

#[test]
fn build_config_rejects_missing_key() {
    assert!(build_config(Some("https://auth.example.com"), None).is_err());
}

#[test]
fn build_config_rejects_blank_values() {
    assert!(build_config(Some("   "), Some("anon-key")).is_err());
    assert!(build_config(Some("https://auth.example.com"), Some("")).is_err());
}
