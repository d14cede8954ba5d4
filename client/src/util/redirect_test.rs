use super::*;

#[test]
fn appends_encoded_next_for_relative_path() {
    assert_eq!(
        marketing_auth_url("https://example.com/", "auth", Some("/insights")),
        "https://example.com/auth?next=%2Finsights"
    );
}

#[test]
fn no_next_returns_base_auth_url() {
    assert_eq!(marketing_auth_url("https://example.com/", "auth", None), "https://example.com/auth");
}

#[test]
fn absolute_next_is_ignored() {
    assert_eq!(
        marketing_auth_url("https://example.com/", "auth", Some("https://evil.example/x")),
        "https://example.com/auth"
    );
}

#[test]
fn protocol_relative_next_is_ignored() {
    assert_eq!(
        marketing_auth_url("https://example.com", "/auth", Some("//evil.example/x")),
        "https://example.com/auth"
    );
}

#[test]
fn empty_next_is_ignored() {
    assert_eq!(marketing_auth_url("https://example.com", "/auth", Some("")), "https://example.com/auth");
}

#[test]
fn root_path_is_encoded() {
    assert_eq!(
        marketing_auth_url("http://localhost:3000", "/auth", Some("/")),
        "http://localhost:3000/auth?next=%2F"
    );
}

#[test]
fn query_and_spaces_in_next_are_encoded() {
    assert_eq!(
        marketing_auth_url("https://example.com", "/auth", Some("/datasets?tab=my files")),
        "https://example.com/auth?next=%2Fdatasets%3Ftab%3Dmy%20files"
    );
}

#[test]
fn auth_path_with_query_uses_ampersand() {
    assert_eq!(
        marketing_auth_url("https://example.com", "/auth?mode=login", Some("/settings")),
        "https://example.com/auth?mode=login&next=%2Fsettings"
    );
}

#[test]
fn repeated_slashes_are_collapsed_at_the_join() {
    assert_eq!(marketing_auth_url("https://example.com///", "///auth", None), "https://example.com/auth");
}
