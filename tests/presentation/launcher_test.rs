use std::net::SocketAddr;

use docu_chat::infrastructure::di::create_application_container_with;
use docu_chat::presentation::config::{
    DEFAULT_PROFILE, Settings, TEST_PROFILE, load_unsafe_settings, merge_settings,
};
use docu_chat::presentation::create_app;
use docu_chat::testing::MockInjector;
use serde_json::json;

#[test]
fn given_injected_port_when_creating_app_then_app_uses_it() {
    let mut injector = MockInjector::new();
    injector
        .bind_settings(json!({"server": {"port": 8080}}))
        .unwrap();

    let app = create_app(injector.container()).unwrap();

    assert_eq!(app.port(), 8080);
    assert_eq!(app.address(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
}

#[test]
fn given_explicit_settings_when_creating_app_then_app_shares_bound_instance() {
    let base =
        load_unsafe_settings(&[DEFAULT_PROFILE.to_string(), TEST_PROFILE.to_string()]).unwrap();
    let settings =
        Settings::from_merged(merge_settings(&[base, json!({"server": {"port": 8123}})])).unwrap();
    let container = create_application_container_with(settings);

    let app = create_app(&container).unwrap();

    let bound = container.get::<Settings>().unwrap();
    assert!(std::sync::Arc::ptr_eq(app.settings(), &bound));
    assert_eq!(app.port(), 8123);
}

#[test]
fn given_assembled_app_when_rebinding_settings_then_fails() {
    let mut injector = MockInjector::new();
    create_app(injector.container()).unwrap();

    let result = injector.bind_settings(json!({"server": {"port": 9999}}));

    assert!(result.is_err());
}
