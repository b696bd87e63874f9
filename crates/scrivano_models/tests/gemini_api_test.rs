// Integration tests that exercise the real Gemini API.
//
// These tests require GEMINI_API_KEY and are gated behind the `api` marker
// feature so ordinary test runs stay offline.

use scrivano_core::{GenerateRequest, Message};
use scrivano_interface::ScrivanoDriver;
use scrivano_models::GeminiClient;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)] // Requires GEMINI_API_KEY
async fn test_basic_generation() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let client = GeminiClient::new()?;
    assert_eq!(client.provider_name(), "gemini");

    let request = GenerateRequest::builder()
        .messages(vec![Message::user("Reply with the single word: ciao")])
        .max_tokens(Some(16))
        .temperature(Some(0.0))
        .build()?;

    let response = client.generate(&request).await?;
    assert!(!response.text.is_empty());
    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)] // Requires GEMINI_API_KEY
async fn test_system_instruction_is_honored() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let client = GeminiClient::new()?;

    let request = GenerateRequest::builder()
        .messages(vec![
            Message::system("You only ever answer in uppercase letters."),
            Message::user("say hello"),
        ])
        .max_tokens(Some(32))
        .temperature(Some(0.0))
        .model(Some("gemini-2.5-flash".to_string()))
        .build()?;

    let response = client.generate(&request).await?;
    assert!(!response.text.is_empty());
    Ok(())
}
