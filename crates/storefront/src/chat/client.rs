//! Chat completion client for OpenAI-compatible providers.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::instrument;
use url::Url;

use crate::config::ChatConfig;

use super::error::{ApiErrorResponse, ChatError};
use super::prompt::system_prompt;
use super::types::{CompletionRequest, CompletionResponse, Message};

/// Chat completion client.
///
/// Holds the fixed system prompt and sends one completion per call.
#[derive(Clone)]
pub struct ChatClient {
    inner: Arc<ChatClientInner>,
}

struct ChatClientInner {
    client: reqwest::Client,
    endpoint: Url,
    model: String,
    system_prompt: String,
}

impl ChatClient {
    /// Create a new chat client.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::Config` if the token is not a valid header value or
    /// the endpoint URL cannot be formed, and `ChatError::Http` if the HTTP
    /// client cannot be built.
    pub fn new(config: &ChatConfig) -> Result<Self, ChatError> {
        let mut auth = HeaderValue::from_str(&format!(
            "Bearer {}",
            config.api_token.expose_secret()
        ))
        .map_err(|_| ChatError::Config("token contains invalid header characters".to_string()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(ChatClientInner {
                client,
                endpoint: completions_endpoint(&config.base_url)?,
                model: config.model.clone(),
                system_prompt: system_prompt(),
            }),
        })
    }

    /// Send one user message and return the assistant's trimmed reply.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the provider answers with a
    /// non-success status, or the body holds no completion text.
    #[instrument(skip(self, message), fields(model = %self.inner.model, message_len = message.len()))]
    pub async fn reply(&self, message: &str) -> Result<String, ChatError> {
        let request = CompletionRequest {
            model: &self.inner.model,
            messages: vec![
                Message::system(self.inner.system_prompt.as_str()),
                Message::user(message),
            ],
        };

        let response = self
            .inner
            .client
            .post(self.inner.endpoint.clone())
            .json(&request)
            .send()
            .await?;

        let completion = Self::handle_response(response).await?;
        tracing::debug!(
            completion_id = completion.id.as_deref().unwrap_or_default(),
            choices = completion.choices.len(),
            "Completion received"
        );

        completion
            .first_text()
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .ok_or(ChatError::EmptyCompletion)
    }

    /// Handle a provider response.
    async fn handle_response(response: reqwest::Response) -> Result<CompletionResponse, ChatError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body)
                .map_err(|e| ChatError::Parse(format!("Failed to parse completion: {e}")))
        } else {
            Err(Self::handle_error_status(status, response).await)
        }
    }

    /// Handle an error status code.
    async fn handle_error_status(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ChatError {
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return ChatError::RateLimited(retry_after);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return ChatError::Unauthorized("Invalid HF_TOKEN".to_string());
        }

        match response.text().await {
            Ok(body) => ChatError::Api {
                status: status.as_u16(),
                message: ApiErrorResponse::message_from(&body),
            },
            Err(e) => ChatError::Http(e),
        }
    }
}

/// `{base_url}/chat/completions`, tolerating a trailing slash on the base.
fn completions_endpoint(base_url: &Url) -> Result<Url, ChatError> {
    let base = base_url.as_str().trim_end_matches('/');
    Url::parse(&format!("{base}/chat/completions"))
        .map_err(|e| ChatError::Config(format!("invalid completions endpoint: {e}")))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{
        Json, Router,
        http::{HeaderMap as AxumHeaderMap, StatusCode},
        routing::post,
    };
    use secrecy::SecretString;
    use serde_json::{Value, json};

    use super::*;

    fn config(base_url: &str) -> ChatConfig {
        ChatConfig {
            api_token: SecretString::from("hf_test_token"),
            base_url: Url::parse(base_url).expect("url"),
            model: "test-model".to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    /// Serve `router` on an ephemeral port and return its base URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("mock server");
        });
        format!("http://{addr}/v1")
    }

    /// Mock provider that echoes the request back inside the reply.
    async fn echo_completion(headers: AxumHeaderMap, Json(body): Json<Value>) -> Json<Value> {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let echoed = json!({
            "auth": auth,
            "model": body["model"],
            "roles": [body["messages"][0]["role"], body["messages"][1]["role"]],
            "user": body["messages"][1]["content"],
            "system_has_inventory": body["messages"][0]["content"]
                .as_str()
                .is_some_and(|s| s.contains("Chaqueta Negra")),
        });
        Json(json!({
            "id": "chatcmpl-test",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": format!("  {echoed}  ") },
                "finish_reason": "stop"
            }]
        }))
    }

    #[test]
    fn test_completions_endpoint() {
        let base = Url::parse("https://router.huggingface.co/v1").expect("url");
        assert_eq!(
            completions_endpoint(&base).expect("endpoint").as_str(),
            "https://router.huggingface.co/v1/chat/completions"
        );

        let base = Url::parse("http://localhost:9000/v1/").expect("url");
        assert_eq!(
            completions_endpoint(&base).expect("endpoint").as_str(),
            "http://localhost:9000/v1/chat/completions"
        );
    }

    #[test]
    fn test_invalid_token_is_config_error() {
        let mut config = config("http://localhost/v1");
        config.api_token = SecretString::from("bad\ntoken");
        assert!(matches!(ChatClient::new(&config), Err(ChatError::Config(_))));
    }

    #[tokio::test]
    async fn test_reply_sends_persona_and_message() {
        let base = serve(Router::new().route("/v1/chat/completions", post(echo_completion))).await;
        let client = ChatClient::new(&config(&base)).expect("client");

        let reply = client.reply("¿Tienen chaquetas?").await.expect("reply");
        let echoed: Value = serde_json::from_str(&reply).expect("trimmed json reply");

        assert_eq!(echoed["auth"], "Bearer hf_test_token");
        assert_eq!(echoed["model"], "test-model");
        assert_eq!(echoed["roles"], json!(["system", "user"]));
        assert_eq!(echoed["user"], "¿Tienen chaquetas?");
        assert_eq!(echoed["system_has_inventory"], true);
    }

    #[tokio::test]
    async fn test_provider_error_status() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async {
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({ "error": { "message": "model overloaded", "type": "server_error" } })),
                )
            }),
        );
        let client = ChatClient::new(&config(&serve(router).await)).expect("client");

        let err = client.reply("hola").await.expect_err("error status");
        assert!(matches!(
            err,
            ChatError::Api { status: 503, ref message } if message == "model overloaded"
        ));
    }

    #[tokio::test]
    async fn test_provider_unauthorized() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { StatusCode::UNAUTHORIZED }),
        );
        let client = ChatClient::new(&config(&serve(router).await)).expect("client");

        let err = client.reply("hola").await.expect_err("unauthorized");
        assert!(matches!(err, ChatError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_provider_rate_limited() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { (StatusCode::TOO_MANY_REQUESTS, [("retry-after", "12")], "slow down") }),
        );
        let client = ChatClient::new(&config(&serve(router).await)).expect("client");

        let err = client.reply("hola").await.expect_err("rate limited");
        assert!(matches!(err, ChatError::RateLimited(12)));
    }

    #[tokio::test]
    async fn test_no_choices_is_empty_completion() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { Json(json!({ "id": "x", "choices": [] })) }),
        );
        let client = ChatClient::new(&config(&serve(router).await)).expect("client");

        let err = client.reply("hola").await.expect_err("empty");
        assert!(matches!(err, ChatError::EmptyCompletion));
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { "<html>gateway</html>" }),
        );
        let client = ChatClient::new(&config(&serve(router).await)).expect("client");

        let err = client.reply("hola").await.expect_err("parse");
        assert!(matches!(err, ChatError::Parse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_http_error() {
        let client = ChatClient::new(&config("http://127.0.0.1:1/v1")).expect("client");
        let err = client.reply("hola").await.expect_err("connect");
        assert!(matches!(err, ChatError::Http(_)));
    }

    #[test]
    fn test_chat_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<ChatClient>();
    }
}
