use docu_chat::presentation::config::Environment;
use serde_json::json;

#[test]
fn given_known_names_when_converting_then_maps_to_environment() {
    assert_eq!(Environment::try_from("local".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("Test".to_string()), Ok(Environment::Test));
    assert_eq!(Environment::try_from("production".to_string()), Ok(Environment::Prod));
}

#[test]
fn given_unknown_name_when_converting_then_fails() {
    assert!(Environment::try_from("staging".to_string()).is_err());
}

#[test]
fn given_environment_when_serialized_then_uses_short_name() {
    assert_eq!(serde_json::to_value(Environment::Prod).unwrap(), json!("prod"));
    let parsed: Environment = serde_json::from_value(json!("production")).unwrap();
    assert_eq!(parsed, Environment::Prod);
}
