use std::sync::Arc;

use docu_chat::application::ports::{Embedder, LlmClient, TextSplitter, VectorStore};
use docu_chat::application::services::{ChatService, IngestService};
use docu_chat::domain::Message;
use docu_chat::infrastructure::di::{BindError, Container, ResolutionError, Scope};
use docu_chat::presentation::config::{Environment, Settings, SettingsError};
use docu_chat::infrastructure::observability::{GlobalHandler, set_global_handler};
use docu_chat::testing::{BindSettingsError, LlmClientStandIn, LogCapture, MockInjector};
use serde_json::json;

struct Clock(u64);

#[test]
fn given_new_injector_when_resolving_settings_then_uses_test_profile() {
    let injector = MockInjector::new();

    let settings = injector.get::<Settings>().unwrap();

    assert_eq!(settings.server.env_name, Environment::Test);
    assert_eq!(settings.server.port, 8000);
}

#[test]
fn given_settings_override_when_binding_then_resolved_settings_reflect_it() {
    let mut injector = MockInjector::new();

    let bound = injector
        .bind_settings(json!({"server": {"port": 9999}}))
        .unwrap();

    let resolved = injector.get::<Settings>().unwrap();
    assert_eq!(resolved.server.port, 9999);
    assert!(Arc::ptr_eq(&bound, &resolved));
    assert_eq!(resolved.server.env_name, Environment::Test);
}

#[test]
fn given_invalid_override_when_binding_settings_then_returns_settings_error() {
    let mut injector = MockInjector::new();

    let result = injector.bind_settings(json!({"rag": {"chunk_overlap": 10_000}}));

    assert!(matches!(
        result,
        Err(BindSettingsError::Settings(SettingsError::Invalid { .. }))
    ));
}

#[test]
fn given_resolved_settings_when_binding_settings_then_returns_bind_error() {
    let mut injector = MockInjector::new();
    injector.get::<Settings>().unwrap();

    let result = injector.bind_settings(json!({"server": {"port": 9999}}));

    assert!(matches!(
        result,
        Err(BindSettingsError::Bind(BindError::AlreadyResolved { .. }))
    ));
}

#[test]
fn given_mock_when_binding_then_same_instance_is_returned_and_resolved() {
    let mut injector = MockInjector::new();
    let mock: Arc<dyn LlmClient> = Arc::new(LlmClientStandIn::answering("hi"));

    let bound = injector.bind_mock(Arc::clone(&mock)).unwrap();

    assert!(Arc::ptr_eq(&bound, &mock));
    assert!(Arc::ptr_eq(&injector.get::<dyn LlmClient>().unwrap(), &mock));
}

#[test]
fn given_unrelated_type_when_binding_mock_then_it_becomes_resolvable() {
    let mut injector = MockInjector::new();
    injector.bind_mock(Arc::new(Clock(42))).unwrap();

    assert_eq!(injector.get::<Clock>().unwrap().0, 42);
}

#[test]
fn given_transient_factory_when_binding_with_scope_then_each_get_builds_anew() {
    let mut injector = MockInjector::new();
    injector
        .bind_mock_with_scope(|_: &Container| Ok(Arc::new(Clock(1))), Scope::Transient)
        .unwrap();

    let first = injector.get::<Clock>().unwrap();
    let second = injector.get::<Clock>().unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn given_unbound_type_when_resolving_then_returns_unbound() {
    let injector = MockInjector::new();

    assert!(matches!(
        injector.get::<Clock>(),
        Err(ResolutionError::Unbound { .. })
    ));
}

#[test]
fn given_stand_ins_when_bound_then_services_are_built_from_them() {
    let mut injector = MockInjector::new();
    let llm = injector.bind_stand_in::<dyn LlmClient>().unwrap();
    let embedder = injector.bind_stand_in::<dyn Embedder>().unwrap();
    let store = injector.bind_stand_in::<dyn VectorStore>().unwrap();
    let splitter = injector.bind_stand_in::<dyn TextSplitter>().unwrap();

    assert!(injector.get::<ChatService>().is_ok());
    assert!(injector.get::<IngestService>().is_ok());
    assert!(!llm.calls.was_called("complete"));
    assert!(embedder.calls.calls().is_empty());
    assert!(store.calls.calls().is_empty());
    assert!(splitter.calls.calls().is_empty());
}

#[test]
fn given_stand_in_when_bound_then_get_returns_the_same_double() {
    let mut injector = MockInjector::new();

    let double = injector.bind_stand_in::<dyn LlmClient>().unwrap();
    let resolved = injector.get::<dyn LlmClient>().unwrap();

    assert_eq!(
        Arc::as_ptr(&double) as *const (),
        Arc::as_ptr(&resolved) as *const ()
    );
    assert!(Arc::ptr_eq(
        &resolved,
        &injector.get::<dyn LlmClient>().unwrap()
    ));
}

#[tokio::test]
async fn given_simple_handler_when_chatting_then_completion_is_logged() {
    set_global_handler(GlobalHandler::Simple).unwrap();
    let mut injector = MockInjector::new();
    injector.bind_stand_in::<dyn LlmClient>().unwrap();
    let service = injector.get::<ChatService>().unwrap();
    let capture = LogCapture::new();
    let _guard = capture.install();

    service
        .chat(&[Message::user("token=hunter2 what is rust")], false)
        .await
        .unwrap();

    assert!(capture.contains("LLM completion"));
    assert!(capture.contains("token=[REDACTED]"));
    assert!(!capture.contains("hunter2"));
}

#[tokio::test]
async fn given_stand_ins_when_ingesting_through_service_then_calls_are_recorded() {
    let mut injector = MockInjector::new();
    let store = injector.bind_stand_in::<dyn VectorStore>().unwrap();
    let splitter = injector.bind_stand_in::<dyn TextSplitter>().unwrap();
    let service = injector.get::<IngestService>().unwrap();

    service
        .ingest_text("doc.txt".to_string(), "stand-in text")
        .await
        .unwrap();

    assert_eq!(splitter.calls.count("split"), 1);
    assert_eq!(store.calls.count("upsert"), 1);
}

#[tokio::test]
async fn given_llm_stand_in_when_chatting_then_prompt_reaches_it() {
    let mut injector = MockInjector::new();
    let llm = injector.bind_stand_in::<dyn LlmClient>().unwrap();
    let service = injector.get::<ChatService>().unwrap();

    let response = service.chat(&[Message::user("ping")], false).await.unwrap();

    assert_eq!(response.answer, "");
    assert_eq!(llm.calls.calls_to("complete")[0].args[0], "ping");
}

#[test]
fn given_separate_injectors_when_binding_then_they_do_not_share_state() {
    let mut first = MockInjector::new();
    let second = MockInjector::new();
    first.bind_mock(Arc::new(Clock(7))).unwrap();

    assert!(first.get::<Clock>().is_ok());
    assert!(second.get::<Clock>().is_err());
}
