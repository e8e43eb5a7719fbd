use docu_chat::domain::MessageRole;

#[test]
fn given_mixed_case_role_when_parsing_then_matches() {
    assert_eq!("User".parse::<MessageRole>(), Ok(MessageRole::User));
    assert_eq!("ASSISTANT".parse::<MessageRole>(), Ok(MessageRole::Assistant));
    assert_eq!("system".parse::<MessageRole>(), Ok(MessageRole::System));
}

#[test]
fn given_unknown_role_when_parsing_then_fails() {
    assert!("robot".parse::<MessageRole>().is_err());
}

#[test]
fn given_role_when_displayed_then_lowercase() {
    assert_eq!(MessageRole::Assistant.to_string(), "assistant");
}
