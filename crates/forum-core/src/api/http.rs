use futures::future::{BoxFuture, FutureExt};
use reqwest::{RequestBuilder, Url};
use serde::Deserialize;

use super::{ApiError, CreateOutcome, ForumApi};
use crate::config::ForumConfig;
use crate::constants::{paths, THREAD_CREATED_STATUS};
use crate::models::{Message, Thread};

#[derive(Debug, Deserialize)]
struct ThreadsResponse {
    #[serde(default)]
    threads: Option<Vec<Thread>>,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    messages: Option<Vec<Message>>,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: String,
}

/// Forum API client over HTTP/JSON
#[derive(Clone)]
pub struct HttpForumApi {
    base: Url,
    client: reqwest::Client,
}

impl HttpForumApi {
    pub fn new(base: Url) -> Self {
        Self {
            base,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &ForumConfig) -> Self {
        Self::new(config.api_base.clone())
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Send the request and return the body of a 2xx response.
async fn success_body(request: RequestBuilder) -> Result<String, ApiError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}

impl ForumApi for HttpForumApi {
    fn list_threads(&self) -> BoxFuture<'static, Result<Vec<Thread>, ApiError>> {
        let request = self
            .endpoint(&[paths::THREADS])
            .map(|url| self.client.get(url));
        fetch_threads(request).boxed()
    }

    fn list_messages(&self, thread_id: &str) -> BoxFuture<'static, Result<Vec<Message>, ApiError>> {
        let [prefix, route] = paths::THREAD_MESSAGES;
        let request = self
            .endpoint(&[prefix, route, thread_id])
            .map(|url| self.client.get(url));
        fetch_messages(request).boxed()
    }

    fn create_thread(&self, thread_id: &str) -> BoxFuture<'static, Result<CreateOutcome, ApiError>> {
        let [prefix, route] = paths::CREATE_THREAD;
        let request = self
            .endpoint(&[prefix, route, thread_id])
            .map(|url| self.client.post(url));
        send_create(request).boxed()
    }

    fn delete_thread(&self, thread_id: &str) -> BoxFuture<'static, Result<(), ApiError>> {
        let request = self
            .endpoint(&[paths::DELETE_THREAD, thread_id])
            .map(|url| self.client.delete(url));
        send_delete(request).boxed()
    }
}

async fn fetch_threads(request: Result<RequestBuilder, ApiError>) -> Result<Vec<Thread>, ApiError> {
    let body = success_body(request?).await?;
    let parsed: ThreadsResponse = serde_json::from_str(&body)?;
    Ok(parsed.threads.unwrap_or_default())
}

async fn fetch_messages(
    request: Result<RequestBuilder, ApiError>,
) -> Result<Vec<Message>, ApiError> {
    let body = success_body(request?).await?;
    let parsed: MessagesResponse = serde_json::from_str(&body)?;
    Ok(parsed.messages.unwrap_or_default())
}

async fn send_create(
    request: Result<RequestBuilder, ApiError>,
) -> Result<CreateOutcome, ApiError> {
    let response = request?.send().await?;
    let status = response.status();
    let body = response.text().await?;

    // A status message is honoured whatever the HTTP code says.
    match serde_json::from_str::<StatusResponse>(&body) {
        Ok(parsed) if parsed.status == THREAD_CREATED_STATUS => Ok(CreateOutcome::Created),
        Ok(parsed) => Ok(CreateOutcome::Rejected(parsed.status)),
        Err(_) if !status.is_success() => Err(ApiError::Status {
            status: status.as_u16(),
            body,
        }),
        Err(e) => Err(ApiError::Decode(e)),
    }
}

async fn send_delete(request: Result<RequestBuilder, ApiError>) -> Result<(), ApiError> {
    request?.send().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{spawn_server, FakeBackend};
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;

    #[test]
    fn test_endpoint_joins_and_encodes_segments() {
        let api = HttpForumApi::new(Url::parse("http://localhost:8000").unwrap());
        let url = api
            .endpoint(&["debug", "thread-messages", "2024 YR4/b"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/debug/thread-messages/2024%20YR4%2Fb"
        );

        let nested = HttpForumApi::new(Url::parse("https://example.com/api").unwrap());
        assert_eq!(
            nested.endpoint(&["threads"]).unwrap().as_str(),
            "https://example.com/api/threads"
        );
    }

    #[tokio::test]
    async fn test_list_threads_decodes_payload() {
        let backend = FakeBackend::new();
        backend.add_thread("Bennu", "2025-01-01T08:00:00+00:00");
        backend.add_thread("Apophis", "2025-01-02T08:00:00");
        let api = HttpForumApi::new(spawn_server(backend.router()).await);

        let threads = api.list_threads().await.unwrap();
        let names: Vec<&str> = threads.iter().map(Thread::id).collect();
        assert_eq!(names, vec!["Bennu", "Apophis"]);
        assert_eq!(backend.hits(), vec!["GET /threads"]);
    }

    #[tokio::test]
    async fn test_missing_or_null_arrays_are_empty() {
        let router = Router::new()
            .route("/threads", get(|| async { "{}" }))
            .route(
                "/debug/thread-messages/:id",
                get(|| async { r#"{"messages": null}"# }),
            );
        let api = HttpForumApi::new(spawn_server(router).await);

        assert!(api.list_threads().await.unwrap().is_empty());
        assert!(api.list_messages("Eros").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_messages_uses_encoded_thread_id() {
        let backend = FakeBackend::new();
        backend.add_thread("2024 YR4", "2025-01-01T08:00:00+00:00");
        backend.add_message("2024 YR4", "CosmicWatchBot", "Tracking started", "2025-01-01T08:01:00");
        let api = HttpForumApi::new(spawn_server(backend.router()).await);

        let messages = api.list_messages("2024 YR4").await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].message, "Tracking started");
        assert_eq!(backend.hits(), vec!["GET /debug/thread-messages/2024 YR4"]);
    }

    #[tokio::test]
    async fn test_error_status_and_malformed_body() {
        let router = Router::new()
            .route(
                "/threads",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            )
            .route(
                "/debug/thread-messages/:id",
                get(|| async { r#"{"messages": [42]}"# }),
            );
        let api = HttpForumApi::new(spawn_server(router).await);

        match api.list_threads().await {
            Err(ApiError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected status error, got {:?}", other),
        }
        assert!(matches!(
            api.list_messages("Eros").await,
            Err(ApiError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_create_thread_outcomes() {
        let backend = FakeBackend::new();
        backend.add_thread("Apophis", "2025-01-01T08:00:00+00:00");
        let api = HttpForumApi::new(spawn_server(backend.router()).await);

        assert_eq!(
            api.create_thread("Bennu").await.unwrap(),
            CreateOutcome::Created
        );
        assert_eq!(
            api.create_thread("Apophis").await.unwrap(),
            CreateOutcome::Rejected("thread already exists".to_string())
        );
        assert!(backend.has_thread("Bennu"));
    }

    #[tokio::test]
    async fn test_delete_does_not_inspect_status() {
        let backend = FakeBackend::new();
        let api = HttpForumApi::new(spawn_server(backend.router()).await);

        // The fake answers 404 for unknown threads; delete still resolves Ok.
        api.delete_thread("Ghost").await.unwrap();
        assert_eq!(backend.hits(), vec!["DELETE /thread/Ghost"]);
    }

    #[tokio::test]
    async fn test_transport_failure() {
        // Bind then drop a listener so the port is very likely closed.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = HttpForumApi::new(Url::parse(&format!("http://{addr}")).unwrap());
        assert!(matches!(
            api.list_threads().await,
            Err(ApiError::Transport(_))
        ));
        assert!(matches!(
            api.delete_thread("Apophis").await,
            Err(ApiError::Transport(_))
        ));
    }
}
