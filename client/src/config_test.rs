use super::*;

fn lookup_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_owned())
    }
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = DashboardConfig::default();
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.marketing_url, DEFAULT_MARKETING_URL);
    assert_eq!(cfg.auth_path, DEFAULT_AUTH_PATH);
}

#[test]
fn overrides_are_normalised() {
    let cfg = DashboardConfig::from_lookup(lookup_from(&[
        (API_BASE_URL_VAR, "https://api.example.com/v1///"),
        (MARKETING_URL_VAR, "https://example.com/"),
        (AUTH_PATH_VAR, "//login"),
    ]));
    assert_eq!(cfg.api_base_url, "https://api.example.com/v1");
    assert_eq!(cfg.marketing_url, "https://example.com");
    assert_eq!(cfg.auth_path, "/login");
}

#[test]
fn empty_values_fall_back_to_defaults() {
    let cfg = DashboardConfig::from_lookup(lookup_from(&[
        (API_BASE_URL_VAR, ""),
        (MARKETING_URL_VAR, "   "),
        (AUTH_PATH_VAR, ""),
    ]));
    assert_eq!(cfg, DashboardConfig::default());
}

#[test]
fn auth_path_without_leading_slash_gains_one() {
    let cfg = DashboardConfig::from_lookup(lookup_from(&[(AUTH_PATH_VAR, "auth")]));
    assert_eq!(cfg.auth_path, "/auth");
}

#[test]
fn normalise_path_of_only_slashes_is_root() {
    assert_eq!(normalise_path("///"), "/");
    assert_eq!(normalise_path(""), "/");
}

#[test]
fn auth_url_carries_next_path() {
    let cfg = DashboardConfig::default();
    assert_eq!(cfg.auth_url(Some("/insights")), "http://localhost:3000/auth?next=%2Finsights");
    assert_eq!(cfg.auth_url(None), "http://localhost:3000/auth");
}
