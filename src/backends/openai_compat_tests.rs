use super::OpenAiCompat;
use crate::error::EvalError;
use crate::generation::{GenerationParams, GenerationProvider};

#[tokio::test]
async fn returns_the_first_choice_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/completions")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body(r#"{"choices": [{"text": " the answer is 18"}]}"#)
        .create_async()
        .await;

    let provider = OpenAiCompat::with_client(
        reqwest::Client::new(),
        server.url(),
        "test-model",
        None,
        None,
    );
    let text = provider
        .generate("How many?", &GenerationParams::default())
        .await
        .expect("generate");

    assert_eq!(text, " the answer is 18");
    mock.assert_async().await;
}

#[tokio::test]
async fn greedy_request_omits_top_p_and_zeroes_temperature() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/completions")
        // Exact body match: greedy requests must not carry top_p.
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "model": "test-model",
            "prompt": "Q",
            "max_tokens": 64,
            "temperature": 0.0,
        })))
        .with_status(200)
        .with_body(r#"{"choices": [{"text": "4"}]}"#)
        .create_async()
        .await;

    let provider = OpenAiCompat::with_client(
        reqwest::Client::new(),
        server.url(),
        "test-model",
        None,
        None,
    );
    let params = GenerationParams::default().max_new_tokens(64);
    provider.generate("Q", &params).await.expect("generate");
    mock.assert_async().await;
}

#[tokio::test]
async fn sampling_request_forwards_temperature_and_top_p() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/completions")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "temperature": 0.7,
            "top_p": 0.9,
        })))
        .with_status(200)
        .with_body(r#"{"choices": [{"text": "4"}]}"#)
        .create_async()
        .await;

    let provider = OpenAiCompat::with_client(
        reqwest::Client::new(),
        server.url(),
        "test-model",
        None,
        None,
    );
    let params = GenerationParams::default().do_sample(true);
    provider.generate("Q", &params).await.expect("generate");
    mock.assert_async().await;
}

#[tokio::test]
async fn bearer_token_is_sent_when_configured() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/completions")
        .match_header("authorization", "Bearer sk-test")
        .with_status(200)
        .with_body(r#"{"choices": [{"text": "4"}]}"#)
        .create_async()
        .await;

    let provider = OpenAiCompat::with_client(
        reqwest::Client::new(),
        server.url(),
        "test-model",
        Some("sk-test".to_string()),
        None,
    );
    provider
        .generate("Q", &GenerationParams::default())
        .await
        .expect("generate");
    mock.assert_async().await;
}

#[tokio::test]
async fn server_error_is_a_provider_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/completions")
        .with_status(500)
        .with_body("backend exploded")
        .create_async()
        .await;

    let provider = OpenAiCompat::with_client(
        reqwest::Client::new(),
        server.url(),
        "test-model",
        None,
        None,
    );
    let err = provider
        .generate("Q", &GenerationParams::default())
        .await
        .unwrap_err();

    match err {
        EvalError::Provider(message) => {
            assert!(message.contains("500"));
            assert!(message.contains("backend exploded"));
        }
        other => panic!("expected Provider error, got {other}"),
    }
}

#[tokio::test]
async fn empty_choices_is_a_format_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/completions")
        .with_status(200)
        .with_body(r#"{"choices": []}"#)
        .create_async()
        .await;

    let provider = OpenAiCompat::with_client(
        reqwest::Client::new(),
        server.url(),
        "test-model",
        None,
        None,
    );
    let err = provider
        .generate("Q", &GenerationParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, EvalError::ResponseFormat { .. }));
}
