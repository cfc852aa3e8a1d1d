use super::*;

#[test]
fn from_vars_defaults_when_unset() {
    let cfg = HostConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg, HostConfig { port: DEFAULT_PORT, api_url: DEFAULT_API_URL.to_owned() });
}

#[test]
fn from_vars_treats_blank_as_unset() {
    let cfg = HostConfig::from_vars(Some(" "), Some("")).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
}

#[test]
fn from_vars_parses_overrides() {
    let cfg = HostConfig::from_vars(Some("8080"), Some("https://trips.example.test/api/")).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_url, "https://trips.example.test/api");
}

#[test]
fn from_vars_rejects_invalid_port() {
    assert_eq!(
        HostConfig::from_vars(Some("eighty"), None),
        Err(ConfigError::InvalidPort("eighty".to_owned()))
    );
    assert_eq!(
        HostConfig::from_vars(Some("70000"), None),
        Err(ConfigError::InvalidPort("70000".to_owned()))
    );
}

#[test]
fn from_vars_rejects_non_http_api_url() {
    assert_eq!(
        HostConfig::from_vars(None, Some("localhost:3333")),
        Err(ConfigError::InvalidApiUrl("localhost:3333".to_owned()))
    );
}
