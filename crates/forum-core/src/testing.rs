//! Test doubles shared by the unit tests in this crate.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use futures::future::{BoxFuture, FutureExt};
use parking_lot::Mutex;
use reqwest::Url;
use serde_json::{json, Value};

use crate::api::{ApiError, CreateOutcome, ForumApi};
use crate::config::ForumConfig;
use crate::controller::{
    Confirmer, ForumController, ForumSurface, MessageEntry, Notice, ThreadRow,
};
use crate::models::timestamp::parse_timestamp;
use crate::models::{Message, Thread};

pub fn thread(name: &str, created_at: &str) -> Thread {
    Thread {
        asteroid_name: name.to_string(),
        created_at: parse_timestamp(created_at),
    }
}

pub fn message(username: &str, body: &str, created_at: &str) -> Message {
    Message {
        username: username.to_string(),
        message: body.to_string(),
        created_at: parse_timestamp(created_at),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    ListThreads,
    ListMessages(String),
    CreateThread(String),
    DeleteThread(String),
}

#[derive(Default)]
struct MockState {
    threads: Vec<Thread>,
    fail_threads: bool,
    messages: HashMap<String, Vec<Message>>,
    message_delays: HashMap<String, Duration>,
    fail_messages: bool,
    /// `None` simulates an unreachable server
    create_status: Option<String>,
    fail_delete: bool,
    calls: Vec<ApiCall>,
}

/// Scripted in-memory API that records every call
#[derive(Default)]
pub struct MockApi {
    state: Mutex<MockState>,
}

fn offline() -> ApiError {
    ApiError::Status {
        status: 503,
        body: "network unreachable".to_string(),
    }
}

impl MockApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_threads(&self, threads: Vec<Thread>) {
        self.state.lock().threads = threads;
    }

    pub fn fail_threads(&self, fail: bool) {
        self.state.lock().fail_threads = fail;
    }

    pub fn set_messages(&self, thread_id: &str, messages: Vec<Message>) {
        self.state
            .lock()
            .messages
            .insert(thread_id.to_string(), messages);
    }

    pub fn set_message_delay(&self, thread_id: &str, delay: Duration) {
        self.state
            .lock()
            .message_delays
            .insert(thread_id.to_string(), delay);
    }

    pub fn fail_messages(&self, fail: bool) {
        self.state.lock().fail_messages = fail;
    }

    pub fn set_create_status(&self, status: Option<&str>) {
        self.state.lock().create_status = status.map(str::to_string);
    }

    pub fn fail_delete(&self, fail: bool) {
        self.state.lock().fail_delete = fail;
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.state.lock().calls.clone()
    }

    pub fn list_thread_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| **call == ApiCall::ListThreads)
            .count()
    }

    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }
}

impl ForumApi for MockApi {
    fn list_threads(&self) -> BoxFuture<'static, Result<Vec<Thread>, ApiError>> {
        let mut state = self.state.lock();
        state.calls.push(ApiCall::ListThreads);
        let result = if state.fail_threads {
            Err(offline())
        } else {
            Ok(state.threads.clone())
        };
        async move { result }.boxed()
    }

    fn list_messages(&self, thread_id: &str) -> BoxFuture<'static, Result<Vec<Message>, ApiError>> {
        let mut state = self.state.lock();
        state.calls.push(ApiCall::ListMessages(thread_id.to_string()));
        let delay = state.message_delays.get(thread_id).copied();
        let result = if state.fail_messages {
            Err(offline())
        } else {
            Ok(state.messages.get(thread_id).cloned().unwrap_or_default())
        };
        async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            result
        }
        .boxed()
    }

    fn create_thread(&self, thread_id: &str) -> BoxFuture<'static, Result<CreateOutcome, ApiError>> {
        let mut state = self.state.lock();
        state.calls.push(ApiCall::CreateThread(thread_id.to_string()));
        let result = match state.create_status.clone() {
            Some(status) if status == "thread created" => Ok(CreateOutcome::Created),
            Some(status) => Ok(CreateOutcome::Rejected(status)),
            None => Err(offline()),
        };
        async move { result }.boxed()
    }

    fn delete_thread(&self, thread_id: &str) -> BoxFuture<'static, Result<(), ApiError>> {
        let mut state = self.state.lock();
        state.calls.push(ApiCall::DeleteThread(thread_id.to_string()));
        let result = if state.fail_delete { Err(offline()) } else { Ok(()) };
        async move { result }.boxed()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ThreadPane {
    #[default]
    Untouched,
    Empty,
    Rows(Vec<ThreadRow>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MessagePane {
    #[default]
    Untouched,
    Loading,
    Empty,
    Cleared,
    Entries(Vec<MessageEntry>),
}

/// Surface that keeps the latest state of every element
#[derive(Debug)]
pub struct RecordingSurface {
    pub visible: bool,
    pub threads: ThreadPane,
    pub title: Option<String>,
    pub delete_visible: bool,
    pub messages: MessagePane,
    /// What `is_scrolled_to_bottom` reports; tests flip it to simulate reading history
    pub at_bottom: bool,
    pub scroll_to_bottom_calls: usize,
    pub notices: Vec<Notice>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            visible: false,
            threads: ThreadPane::Untouched,
            title: None,
            delete_visible: false,
            messages: MessagePane::Untouched,
            at_bottom: true,
            scroll_to_bottom_calls: 0,
            notices: Vec::new(),
        }
    }
}

impl RecordingSurface {
    pub fn thread_ids(&self) -> Vec<String> {
        match &self.threads {
            ThreadPane::Rows(rows) => rows.iter().map(|row| row.thread_id.clone()).collect(),
            _ => Vec::new(),
        }
    }

    pub fn message_bodies(&self) -> Vec<String> {
        match &self.messages {
            MessagePane::Entries(entries) => entries.iter().map(|e| e.body.clone()).collect(),
            _ => Vec::new(),
        }
    }
}

impl ForumSurface for RecordingSurface {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn render_threads(&mut self, rows: Vec<ThreadRow>) {
        self.threads = ThreadPane::Rows(rows);
    }

    fn render_threads_empty(&mut self) {
        self.threads = ThreadPane::Empty;
    }

    fn set_active_title(&mut self, thread_id: Option<&str>) {
        self.title = thread_id.map(str::to_string);
    }

    fn set_delete_visible(&mut self, visible: bool) {
        self.delete_visible = visible;
    }

    fn show_messages_loading(&mut self) {
        self.messages = MessagePane::Loading;
    }

    fn render_messages(&mut self, entries: Vec<MessageEntry>) {
        self.messages = MessagePane::Entries(entries);
    }

    fn render_messages_empty(&mut self) {
        self.messages = MessagePane::Empty;
    }

    fn clear_messages(&mut self) {
        self.messages = MessagePane::Cleared;
    }

    fn is_scrolled_to_bottom(&self) -> bool {
        self.at_bottom
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_to_bottom_calls += 1;
        self.at_bottom = true;
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

/// Confirmer with a canned answer that remembers its prompts
pub struct FixedConfirmer {
    answer: bool,
    /// How long the user "thinks" before answering
    delay: Duration,
    prompts: Mutex<Vec<String>>,
}

impl FixedConfirmer {
    pub fn new(answer: bool) -> Arc<Self> {
        Self::after(answer, Duration::ZERO)
    }

    pub fn after(answer: bool, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            answer,
            delay,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

impl Confirmer for FixedConfirmer {
    fn confirm(&self, prompt: String) -> BoxFuture<'static, bool> {
        self.prompts.lock().push(prompt);
        let answer = self.answer;
        let delay = self.delay;
        async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            answer
        }
        .boxed()
    }
}

pub fn mock_controller(
    api: Arc<MockApi>,
    confirmer: Arc<FixedConfirmer>,
) -> ForumController<RecordingSurface> {
    ForumController::new(
        ForumConfig::default(),
        api,
        confirmer,
        RecordingSurface::default(),
    )
}

#[derive(Default)]
struct BackendState {
    threads: Vec<(String, String)>,
    messages: HashMap<String, Vec<Value>>,
    hits: Vec<String>,
}

/// In-process HTTP backend speaking the forum API
#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<BackendState>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_thread(&self, name: &str, created_at: &str) {
        self.state
            .lock()
            .threads
            .push((name.to_string(), created_at.to_string()));
    }

    pub fn add_message(&self, thread: &str, username: &str, body: &str, created_at: &str) {
        self.state
            .lock()
            .messages
            .entry(thread.to_string())
            .or_default()
            .push(json!({
                "username": username,
                "message": body,
                "created_at": created_at,
            }));
    }

    pub fn has_thread(&self, name: &str) -> bool {
        self.state.lock().threads.iter().any(|(n, _)| n == name)
    }

    pub fn hits(&self) -> Vec<String> {
        self.state.lock().hits.clone()
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/threads", get(backend_list_threads))
            .route("/debug/thread-messages/:id", get(backend_list_messages))
            .route("/debug/create-thread/:id", post(backend_create_thread))
            .route("/thread/:id", delete(backend_delete_thread))
            .with_state(self.clone())
    }
}

async fn backend_list_threads(State(backend): State<FakeBackend>) -> Json<Value> {
    let mut state = backend.state.lock();
    state.hits.push("GET /threads".to_string());
    let threads: Vec<Value> = state
        .threads
        .iter()
        .map(|(name, created_at)| json!({ "asteroid_name": name, "created_at": created_at }))
        .collect();
    Json(json!({ "threads": threads }))
}

async fn backend_list_messages(
    Path(id): Path<String>,
    State(backend): State<FakeBackend>,
) -> Json<Value> {
    let mut state = backend.state.lock();
    state.hits.push(format!("GET /debug/thread-messages/{}", id));
    let messages = state.messages.get(&id).cloned().unwrap_or_default();
    Json(json!({ "messages": messages }))
}

async fn backend_create_thread(
    Path(id): Path<String>,
    State(backend): State<FakeBackend>,
) -> Json<Value> {
    let mut state = backend.state.lock();
    state.hits.push(format!("POST /debug/create-thread/{}", id));
    if state.threads.iter().any(|(name, _)| *name == id) {
        return Json(json!({ "status": "thread already exists" }));
    }
    state
        .threads
        .push((id, "2025-06-01T00:00:00+00:00".to_string()));
    Json(json!({ "status": "thread created" }))
}

async fn backend_delete_thread(
    Path(id): Path<String>,
    State(backend): State<FakeBackend>,
) -> (StatusCode, Json<Value>) {
    let mut state = backend.state.lock();
    state.hits.push(format!("DELETE /thread/{}", id));
    let before = state.threads.len();
    state.threads.retain(|(name, _)| *name != id);
    state.messages.remove(&id);
    if state.threads.len() == before {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "Thread not found" })),
        );
    }
    (StatusCode::OK, Json(json!({ "status": "thread deleted" })))
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_server(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Url::parse(&format!("http://{}", addr)).unwrap()
}
