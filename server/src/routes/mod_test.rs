use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn host_routes_builds_without_leptos_config() {
    let _router: Router = host_routes();
}
