use docu_chat::application::ports::LlmClient;
use docu_chat::infrastructure::llm::MockLlmClient;

#[tokio::test]
async fn given_no_context_when_completing_then_echoes_prompt() {
    let answer = MockLlmClient.complete("Hi there", "").await.unwrap();

    assert_eq!(answer, "Mock answer to: Hi there");
}

#[tokio::test]
async fn given_context_when_completing_then_mentions_context_size() {
    let answer = MockLlmClient.complete("Hi", "abcde").await.unwrap();

    assert_eq!(answer, "Mock answer to: Hi (using 5 characters of context)");
}
