use super::*;

#[test]
fn normalize_base_url_defaults_when_missing() {
    assert_eq!(normalize_base_url(None), DEFAULT_API_URL);
}

#[test]
fn normalize_base_url_defaults_when_blank() {
    assert_eq!(normalize_base_url(Some("   ")), DEFAULT_API_URL);
}

#[test]
fn normalize_base_url_trims_trailing_slashes() {
    assert_eq!(normalize_base_url(Some("https://api.example.test//")), "https://api.example.test");
}

#[test]
fn api_base_url_uses_default_outside_browser() {
    assert_eq!(api_base_url(), DEFAULT_API_URL);
}
