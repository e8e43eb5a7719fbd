use docu_chat::infrastructure::observability::{
    DEFAULT_GLOBAL_HANDLER, GlobalHandler, ObservabilityError, global_handler,
    set_global_handler, set_global_handler_from_str,
};

#[test]
fn given_known_mode_when_parsing_then_returns_handler() {
    assert_eq!(
        " Simple ".parse::<GlobalHandler>().unwrap(),
        GlobalHandler::Simple
    );
    assert_eq!(GlobalHandler::Simple.to_string(), DEFAULT_GLOBAL_HANDLER);
    assert_eq!(
        "VERBOSE".parse::<GlobalHandler>().unwrap(),
        GlobalHandler::Verbose
    );
}

#[test]
fn given_unknown_mode_when_setting_from_str_then_fails_without_installing() {
    let result = set_global_handler_from_str("chatty");

    assert!(matches!(result, Err(ObservabilityError::UnknownMode(mode)) if mode == "chatty"));
}

#[test]
fn given_simple_mode_when_set_twice_then_both_calls_succeed() {
    set_global_handler_from_str(DEFAULT_GLOBAL_HANDLER).unwrap();
    set_global_handler(GlobalHandler::Simple).unwrap();

    assert_eq!(global_handler(), Some(GlobalHandler::Simple));
}

#[test]
fn given_simple_mode_installed_when_setting_verbose_then_reports_already_set() {
    set_global_handler(GlobalHandler::Simple).unwrap();

    let result = set_global_handler(GlobalHandler::Verbose);

    assert!(matches!(
        result,
        Err(ObservabilityError::AlreadySet {
            current: GlobalHandler::Simple,
            requested: GlobalHandler::Verbose,
        })
    ));
    assert_eq!(global_handler(), Some(GlobalHandler::Simple));
}
