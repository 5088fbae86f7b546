//! Remote forum API: the operations the controller consumes.

mod http;

pub use http::HttpForumApi;

use futures::future::BoxFuture;

use crate::models::{Message, Thread};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result of asking the backend to open a thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    /// The backend answered with some other status message
    Rejected(String),
}

/// The four forum operations. Futures are `'static` so they can be spawned.
pub trait ForumApi: Send + Sync {
    fn list_threads(&self) -> BoxFuture<'static, Result<Vec<Thread>, ApiError>>;

    fn list_messages(&self, thread_id: &str) -> BoxFuture<'static, Result<Vec<Message>, ApiError>>;

    fn create_thread(&self, thread_id: &str) -> BoxFuture<'static, Result<CreateOutcome, ApiError>>;

    /// Resolves once the server answered; the response status is not inspected.
    fn delete_thread(&self, thread_id: &str) -> BoxFuture<'static, Result<(), ApiError>>;
}
