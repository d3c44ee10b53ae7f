//! OpenAI Assistants client - Implementation of AssistantThreads over the
//! Assistants v2 REST API.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::openai_provider::OpenAIConfig;
use crate::ports::{
    AssistantThreads, MessageRole, RunId, RunState, RunStatus, ThreadError, ThreadId,
    ThreadMessage,
};

const ASSISTANTS_BETA_HEADER: (&str, &str) = ("OpenAI-Beta", "assistants=v2");

/// HTTP client for threads, messages and runs.
pub struct OpenAIAssistantsClient {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIAssistantsClient {
    pub fn new(config: OpenAIConfig) -> Result<Self, ThreadError> {
        let client = config
            .http_client()
            .map_err(|e| ThreadError::Network(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .bearer_auth(self.config.api_key())
            .header(ASSISTANTS_BETA_HEADER.0, ASSISTANTS_BETA_HEADER.1)
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ThreadError> {
        let request = self.authorized(self.client.post(self.url(path))).json(body);
        Self::read(request).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ThreadError> {
        let request = self.authorized(self.client.get(self.url(path)));
        Self::read(request).await
    }

    async fn read<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ThreadError> {
        let response = request
            .send()
            .await
            .map_err(|e| ThreadError::Network(e.to_string()))?;
        let response = Self::handle_response_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| ThreadError::Parse(format!("Failed to parse response: {}", e)))
    }

    async fn handle_response_status(response: Response) -> Result<Response, ThreadError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        match status.as_u16() {
            401 | 403 => Err(ThreadError::AuthenticationFailed),
            429 => Err(ThreadError::RateLimited),
            code => Err(ThreadError::Api {
                status: code,
                message,
            }),
        }
    }
}

#[async_trait]
impl AssistantThreads for OpenAIAssistantsClient {
    async fn create_thread(&self) -> Result<ThreadId, ThreadError> {
        let created: Created = self.post("/threads", &serde_json::json!({})).await?;
        Ok(ThreadId::new(created.id))
    }

    async fn post_message(&self, thread: &ThreadId, content: &str) -> Result<(), ThreadError> {
        let body = NewMessage {
            role: "user",
            content,
        };
        let _: Created = self
            .post(&format!("/threads/{}/messages", thread), &body)
            .await?;
        Ok(())
    }

    async fn start_run(&self, thread: &ThreadId, assistant_id: &str) -> Result<RunId, ThreadError> {
        let created: Created = self
            .post(
                &format!("/threads/{}/runs", thread),
                &NewRun { assistant_id },
            )
            .await?;
        Ok(RunId::new(created.id))
    }

    async fn run_status(&self, thread: &ThreadId, run: &RunId) -> Result<RunState, ThreadError> {
        let run: RunObject = self
            .get(&format!("/threads/{}/runs/{}", thread, run))
            .await?;
        Ok(RunState {
            status: run.status,
            last_error: run.last_error.map(|e| e.message),
        })
    }

    async fn list_messages(&self, thread: &ThreadId) -> Result<Vec<ThreadMessage>, ThreadError> {
        let list: MessageList = self
            .get(&format!("/threads/{}/messages", thread))
            .await?;
        Ok(list.data.into_iter().map(ThreadMessage::from).collect())
    }
}

// ----- Assistants API Types -----

#[derive(Debug, Deserialize)]
struct Created {
    id: String,
}

#[derive(Debug, Serialize)]
struct NewMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct NewRun<'a> {
    assistant_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct RunObject {
    status: RunStatus,
    last_error: Option<RunError>,
}

#[derive(Debug, Deserialize)]
struct RunError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct MessageList {
    data: Vec<MessageObject>,
}

#[derive(Debug, Deserialize)]
struct MessageObject {
    role: MessageRole,
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: TextValue },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    value: String,
}

impl From<MessageObject> for ThreadMessage {
    fn from(message: MessageObject) -> Self {
        let text = match message.content.into_iter().next() {
            Some(ContentPart::Text { text }) => Some(text.value),
            _ => None,
        };
        ThreadMessage {
            role: message.role,
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Path,
        http::{HeaderMap, StatusCode},
        routing::{get, post},
        Json, Router,
    };
    use serde_json::{json, Value};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client(base: &str) -> OpenAIAssistantsClient {
        OpenAIAssistantsClient::new(OpenAIConfig::new("test-key").with_base_url(base)).unwrap()
    }

    fn fake_assistants_api() -> Router {
        Router::new()
            .route(
                "/threads",
                post(|headers: HeaderMap| async move {
                    if headers.get("OpenAI-Beta").and_then(|v| v.to_str().ok())
                        != Some("assistants=v2")
                    {
                        return (StatusCode::BAD_REQUEST, Json(json!({"error": "beta header"})));
                    }
                    (StatusCode::OK, Json(json!({"id": "thread_1", "object": "thread"})))
                }),
            )
            .route(
                "/threads/:thread/messages",
                post(|Path(thread): Path<String>, Json(body): Json<Value>| async move {
                    assert_eq!(thread, "thread_1");
                    assert_eq!(body["role"], "user");
                    Json(json!({"id": "msg_1"}))
                })
                .get(|| async {
                    Json(json!({
                        "data": [
                            {"role": "assistant", "content": [{"type": "text", "text": {"value": "[{\"id\":1}]", "annotations": []}}]},
                            {"role": "assistant", "content": [{"type": "image_file", "image_file": {"file_id": "f"}}]},
                            {"role": "user", "content": [{"type": "text", "text": {"value": "Crie", "annotations": []}}]}
                        ]
                    }))
                }),
            )
            .route(
                "/threads/:thread/runs",
                post(|Json(body): Json<Value>| async move {
                    assert_eq!(body["assistant_id"], "asst_1");
                    Json(json!({"id": "run_1", "status": "queued"}))
                }),
            )
            .route(
                "/threads/:thread/runs/:run",
                get(|| async {
                    Json(json!({
                        "id": "run_1",
                        "status": "failed",
                        "last_error": {"code": "server_error", "message": "boom"}
                    }))
                }),
            )
    }

    #[tokio::test]
    async fn drives_thread_run_protocol() {
        let base = serve(fake_assistants_api()).await;
        let client = client(&base);

        let thread = client.create_thread().await.unwrap();
        assert_eq!(thread.as_str(), "thread_1");

        client.post_message(&thread, "Crie um roteiro").await.unwrap();

        let run = client.start_run(&thread, "asst_1").await.unwrap();
        assert_eq!(run.as_str(), "run_1");

        let state = client.run_status(&thread, &run).await.unwrap();
        assert_eq!(state, RunState::failed("boom"));

        let messages = client.list_messages(&thread).await.unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0], ThreadMessage::assistant("[{\"id\":1}]"));
        assert_eq!(messages[1].text, None);
        assert_eq!(messages[2].role, MessageRole::User);
    }

    #[tokio::test]
    async fn maps_error_statuses() {
        let router = Router::new()
            .route("/a/threads", post(|| async { StatusCode::UNAUTHORIZED }))
            .route("/b/threads", post(|| async { StatusCode::TOO_MANY_REQUESTS }))
            .route(
                "/c/threads",
                post(|| async { (StatusCode::NOT_FOUND, "no such assistant") }),
            );
        let base = serve(router).await;

        assert_eq!(
            client(&format!("{}/a", base)).create_thread().await.unwrap_err(),
            ThreadError::AuthenticationFailed
        );
        assert_eq!(
            client(&format!("{}/b", base)).create_thread().await.unwrap_err(),
            ThreadError::RateLimited
        );
        assert_eq!(
            client(&format!("{}/c", base)).create_thread().await.unwrap_err(),
            ThreadError::Api {
                status: 404,
                message: "no such assistant".to_string()
            }
        );
    }
}
