//! AI guide narration client and service.
//!
//! [`GuideClient`] is a thin HTTP client for a remote chat-completion endpoint;
//! [`GuideService`] builds the per-language prompt, applies the caller-side
//! timeout, and extracts the narration text. Failures are re-wrapped into the
//! small user-readable [`GuideError`] taxonomy before they reach a controller.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::timeout;

use crate::{model::guide::GuideLanguage, server::error::guide::GuideError};

static CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// Transport-level timeout applied to every chat-completion request.
const CLIENT_TIMEOUT: Duration = Duration::from_secs(60);
/// Caller-side timeout for one narration attempt.
const NARRATION_TIMEOUT: Duration = Duration::from_secs(30);
/// Pause before the single retry after a timed-out attempt.
const RETRY_BACKOFF: Duration = Duration::from_millis(500);

#[derive(Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Deserialize)]
pub struct ChatChoiceMessage {
    pub content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// HTTP client for the chat-completion endpoint backing the voice guide.
#[derive(Clone)]
pub struct GuideClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GuideClient {
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(CLIENT_TIMEOUT).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }

    /// Sends one chat-completion request and classifies failures.
    pub async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatCompletion, GuideError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature: 0.7,
            max_tokens: 800,
        };

        let response = self
            .http
            .post(format!("{}{}", self.base_url, CHAT_COMPLETIONS_PATH))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(GuideError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .map(|detail| detail.message);

            return Err(GuideError::from_status(status, message));
        }

        response
            .json::<ChatCompletion>()
            .await
            .map_err(GuideError::from_transport)
    }
}

/// Service producing narration text for an attraction in a requested language.
pub struct GuideService<'a> {
    client: &'a GuideClient,
    narration_timeout: Duration,
    retry_backoff: Duration,
}

impl<'a> GuideService<'a> {
    pub fn new(client: &'a GuideClient) -> Self {
        Self::with_timeouts(client, NARRATION_TIMEOUT, RETRY_BACKOFF)
    }

    /// Builds a service with explicit caller-side timeout and retry backoff.
    pub fn with_timeouts(
        client: &'a GuideClient,
        narration_timeout: Duration,
        retry_backoff: Duration,
    ) -> Self {
        Self {
            client,
            narration_timeout,
            retry_backoff,
        }
    }

    /// Requests a narration, retrying exactly once after a short backoff when
    /// the first attempt timed out. Non-timeout failures are not retried.
    pub async fn narrate(
        &self,
        attraction_name: &str,
        language: GuideLanguage,
    ) -> Result<String, GuideError> {
        match self.attempt(attraction_name, language).await {
            Err(GuideError::Timeout) => {
                tracing::warn!(
                    "Narration request for {} timed out, retrying once",
                    attraction_name
                );
                tokio::time::sleep(self.retry_backoff).await;
                self.attempt(attraction_name, language).await
            }
            result => result,
        }
    }

    async fn attempt(
        &self,
        attraction_name: &str,
        language: GuideLanguage,
    ) -> Result<String, GuideError> {
        let messages = vec![ChatMessage {
            role: "user",
            content: narration_prompt(attraction_name, language),
        }];

        let completion = timeout(self.narration_timeout, self.client.chat_completion(messages))
            .await
            .map_err(|_| GuideError::Timeout)??;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(GuideError::NoContent)
    }
}

fn narration_prompt(name: &str, language: GuideLanguage) -> String {
    match language {
        GuideLanguage::Zh => format!(
            "请以导游的口吻，用中文为景点「{name}」写一段约200字的讲解词，介绍它的历史背景和游览亮点。"
        ),
        GuideLanguage::En => format!(
            "You are a tour guide. Write a spoken-style narration of about 150 words in English \
            for the attraction \"{name}\", covering its history and highlights."
        ),
        GuideLanguage::Ja => format!(
            "あなたは観光ガイドです。観光スポット「{name}」について、歴史と見どころを紹介する約200字の日本語のガイド文を書いてください。"
        ),
        GuideLanguage::Ko => format!(
            "당신은 관광 가이드입니다. 명소 \"{name}\"의 역사와 볼거리를 소개하는 약 200자의 한국어 해설문을 작성해 주세요."
        ),
        GuideLanguage::Fr => format!(
            "Vous êtes guide touristique. Rédigez en français une narration d'environ 150 mots \
            pour le site « {name} », présentant son histoire et ses points forts."
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::Write,
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        },
        time::Duration,
    };

    use crate::{
        model::guide::GuideLanguage,
        server::{error::guide::GuideError, service::guide::GuideService, util::test::setup::test_setup},
    };

    fn completion_body(content: &str) -> String {
        serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        })
        .to_string()
    }

    /// Expect the narration text extracted from choices[0].message.content
    #[tokio::test]
    async fn narrate_success() {
        let mut test = test_setup().await;

        let mock = test
            .server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion_body("西湖是杭州最著名的景点。"))
            .expect(1)
            .create();

        let service = GuideService::new(&test.state.guide_client);
        let narration = service.narrate("西湖", GuideLanguage::Zh).await.unwrap();

        assert_eq!(narration, "西湖是杭州最著名的景点。");
        mock.assert();
    }

    /// Expect a missing content field to surface as NoContent
    #[tokio::test]
    async fn narrate_no_content() {
        let mut test = test_setup().await;

        let _mock = test
            .server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices": []}"#)
            .create();

        let service = GuideService::new(&test.state.guide_client);
        let result = service.narrate("西湖", GuideLanguage::En).await;

        assert!(matches!(result, Err(GuideError::NoContent)));
    }

    /// Expect 401 to classify as an invalid API key
    #[tokio::test]
    async fn narrate_invalid_api_key() {
        let mut test = test_setup().await;

        let _mock = test
            .server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_body(r#"{"error": {"message": "Invalid token"}}"#)
            .create();

        let service = GuideService::new(&test.state.guide_client);
        let result = service.narrate("West Lake", GuideLanguage::En).await;

        assert!(matches!(result, Err(GuideError::InvalidApiKey)));
    }

    /// Expect 429 to classify as rate limited
    #[tokio::test]
    async fn narrate_rate_limited() {
        let mut test = test_setup().await;

        let _mock = test
            .server
            .mock("POST", "/chat/completions")
            .with_status(429)
            .create();

        let service = GuideService::new(&test.state.guide_client);
        let result = service.narrate("West Lake", GuideLanguage::En).await;

        assert!(matches!(result, Err(GuideError::RateLimited)));
    }

    /// Expect 503 to classify as unavailable, not a generic server error
    #[tokio::test]
    async fn narrate_unavailable() {
        let mut test = test_setup().await;

        let _mock = test
            .server
            .mock("POST", "/chat/completions")
            .with_status(503)
            .create();

        let service = GuideService::new(&test.state.guide_client);
        let result = service.narrate("West Lake", GuideLanguage::Fr).await;

        assert!(matches!(result, Err(GuideError::Unavailable)));
    }

    /// Expect other 5xx statuses to classify as a server error
    #[tokio::test]
    async fn narrate_server_error() {
        let mut test = test_setup().await;

        let _mock = test
            .server
            .mock("POST", "/chat/completions")
            .with_status(500)
            .create();

        let service = GuideService::new(&test.state.guide_client);
        let result = service.narrate("West Lake", GuideLanguage::Ko).await;

        assert!(matches!(result, Err(GuideError::ServerError)));
    }

    /// Expect one retry after the first attempt exceeds the caller-side
    /// timeout, with the second attempt's narration returned
    #[tokio::test]
    async fn narrate_retries_once_after_timeout() {
        let mut test = test_setup().await;

        // The first request stalls past the caller timeout, the second
        // responds immediately.
        let requests = Arc::new(AtomicUsize::new(0));
        let requests_seen = requests.clone();
        let body = completion_body("西湖是杭州最著名的景点。");

        let mock = test
            .server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_chunked_body(move |writer| {
                if requests_seen.fetch_add(1, Ordering::SeqCst) == 0 {
                    std::thread::sleep(Duration::from_millis(200));
                }
                writer.write_all(body.as_bytes())
            })
            .expect(2)
            .create();

        let service = GuideService::with_timeouts(
            &test.state.guide_client,
            Duration::from_millis(50),
            Duration::from_millis(300),
        );
        let narration = service.narrate("西湖", GuideLanguage::Zh).await.unwrap();

        assert_eq!(narration, "西湖是杭州最著名的景点。");
        assert_eq!(requests.load(Ordering::SeqCst), 2);
        mock.assert();
    }

    /// Expect Timeout to surface after both the attempt and its single retry
    /// exceed the caller-side timeout
    #[tokio::test]
    async fn narrate_times_out_after_single_retry() {
        let mut test = test_setup().await;

        let requests = Arc::new(AtomicUsize::new(0));
        let requests_seen = requests.clone();
        let body = completion_body("西湖是杭州最著名的景点。");

        let _mock = test
            .server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_chunked_body(move |writer| {
                requests_seen.fetch_add(1, Ordering::SeqCst);
                std::thread::sleep(Duration::from_millis(200));
                writer.write_all(body.as_bytes())
            })
            .create();

        let service = GuideService::with_timeouts(
            &test.state.guide_client,
            Duration::from_millis(50),
            Duration::from_millis(300),
        );
        let result = service.narrate("西湖", GuideLanguage::Zh).await;

        assert!(matches!(result, Err(GuideError::Timeout)));
        assert_eq!(requests.load(Ordering::SeqCst), 2);
    }

    /// Expect the error body's message to be carried by the generic category
    #[tokio::test]
    async fn narrate_generic_error_carries_message() {
        let mut test = test_setup().await;

        let _mock = test
            .server
            .mock("POST", "/chat/completions")
            .with_status(404)
            .with_body(r#"{"error": {"message": "Unknown model"}}"#)
            .create();

        let service = GuideService::new(&test.state.guide_client);
        let result = service.narrate("West Lake", GuideLanguage::Ja).await;

        match result {
            Err(GuideError::Api(message)) => assert_eq!(message, "Unknown model"),
            other => panic!("expected generic API error, got {:?}", other.err()),
        }
    }
}
