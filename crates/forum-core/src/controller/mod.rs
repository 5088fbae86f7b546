//! The forum widget controller.
//!
//! Owns the selection and the poll timer, issues every fetch, and pushes the
//! results into a [`ForumSurface`]. Network work runs on spawned tasks whose
//! results come back as [`ForumEvent`]s; all state changes happen in
//! [`ForumController::handle_event`] on the caller's task.

mod surface;

pub use surface::{Confirmer, ForumSurface, MessageEntry, Notice, NoticeLevel, ThreadRow};

use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::api::{ApiError, CreateOutcome, ForumApi};
use crate::config::ForumConfig;
use crate::models::{sort_newest_first, Message, Thread};

/// Tag attached to a message fetch at issue time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRequest {
    pub thread_id: String,
    /// Selection epoch when the request was issued
    pub epoch: u64,
    pub seq: u64,
    pub show_loading: bool,
}

#[derive(Debug)]
pub enum ForumEvent {
    PollTick {
        generation: u64,
    },
    ThreadsLoaded {
        seq: u64,
        result: Result<Vec<Thread>, ApiError>,
    },
    MessagesLoaded {
        request: MessageRequest,
        result: Result<Vec<Message>, ApiError>,
    },
    ThreadCreated {
        thread_id: String,
        result: Result<CreateOutcome, ApiError>,
    },
    DeleteDeclined {
        thread_id: String,
    },
    ThreadDeleted {
        thread_id: String,
        /// Selection epoch when the delete was confirmed for
        epoch: u64,
        result: Result<(), ApiError>,
    },
}

pub struct ForumController<S> {
    config: ForumConfig,
    api: Arc<dyn ForumApi>,
    confirmer: Arc<dyn Confirmer>,
    surface: S,

    active_thread: Option<String>,
    /// Bumped whenever the selected thread changes or is cleared
    selection_epoch: u64,
    message_seq: u64,
    applied_message_seq: u64,
    list_seq: u64,
    applied_list_seq: u64,

    open: bool,
    poll_handle: Option<JoinHandle<()>>,
    poll_generation: u64,

    /// Spawned requests whose event has not been handled yet
    in_flight: usize,
    events_tx: UnboundedSender<ForumEvent>,
    events_rx: UnboundedReceiver<ForumEvent>,
}

impl<S: ForumSurface> ForumController<S> {
    pub fn new(
        config: ForumConfig,
        api: Arc<dyn ForumApi>,
        confirmer: Arc<dyn Confirmer>,
        surface: S,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            config,
            api,
            confirmer,
            surface,
            active_thread: None,
            selection_epoch: 0,
            message_seq: 0,
            applied_message_seq: 0,
            list_seq: 0,
            applied_list_seq: 0,
            open: false,
            poll_handle: None,
            poll_generation: 0,
            in_flight: 0,
            events_tx,
            events_rx,
        }
    }

    pub fn config(&self) -> &ForumConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn active_thread(&self) -> Option<&str> {
        self.active_thread.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_polling(&self) -> bool {
        self.poll_handle.is_some()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Show the forum, refresh now, and (re)start the poll timer.
    pub fn open(&mut self) {
        info!("Opening forum");
        self.open = true;
        self.surface.set_visible(true);
        self.refresh();

        if let Some(handle) = self.poll_handle.take() {
            handle.abort();
        }
        self.poll_generation += 1;
        self.poll_handle = Some(self.spawn_poll(self.poll_generation));
    }

    /// Hide the forum and stop polling. The selection is kept.
    pub fn close(&mut self) {
        if self.open {
            info!("Closing forum");
        }
        self.open = false;
        self.surface.set_visible(false);

        if let Some(handle) = self.poll_handle.take() {
            handle.abort();
        }
    }

    pub fn refresh(&mut self) {
        self.list_seq += 1;
        let seq = self.list_seq;
        let fetch = self.api.list_threads();
        self.spawn_request(async move {
            ForumEvent::ThreadsLoaded {
                seq,
                result: fetch.await,
            }
        });
    }

    /// Select `thread_id` and fetch its messages.
    ///
    /// `show_loading` is true for user-initiated loads; background reloads
    /// keep the previous content until the new data arrives.
    pub fn load_thread(&mut self, thread_id: &str, show_loading: bool) {
        if self.active_thread.as_deref() != Some(thread_id) {
            self.selection_epoch += 1;
            self.active_thread = Some(thread_id.to_string());
        }

        self.surface.set_active_title(Some(thread_id));
        self.surface.set_delete_visible(true);
        if show_loading {
            self.surface.show_messages_loading();
        }

        self.message_seq += 1;
        let request = MessageRequest {
            thread_id: thread_id.to_string(),
            epoch: self.selection_epoch,
            seq: self.message_seq,
            show_loading,
        };
        let fetch = self.api.list_messages(thread_id);
        self.spawn_request(async move {
            ForumEvent::MessagesLoaded {
                request,
                result: fetch.await,
            }
        });
    }

    pub fn create_thread(&mut self, thread_id: &str) {
        info!("Requesting thread creation for {}", thread_id);
        let thread_id = thread_id.to_string();
        let create = self.api.create_thread(&thread_id);
        self.spawn_request(async move {
            ForumEvent::ThreadCreated {
                result: create.await,
                thread_id,
            }
        });
    }

    /// Ask for confirmation, then delete the selected thread. No-op without a selection.
    pub fn delete_thread(&mut self) {
        let Some(thread_id) = self.active_thread.clone() else {
            return;
        };

        let epoch = self.selection_epoch;
        let prompt = format!("CONFIRM DELETION\n\nPurge all records for {}?", thread_id);
        let confirmation = self.confirmer.confirm(prompt);
        let api = Arc::clone(&self.api);
        self.spawn_request(async move {
            if !confirmation.await {
                return ForumEvent::DeleteDeclined { thread_id };
            }
            let result = api.delete_thread(&thread_id).await;
            ForumEvent::ThreadDeleted {
                thread_id,
                epoch,
                result,
            }
        });
    }

    /// Wait for the next completed request or poll tick.
    pub async fn next_event(&mut self) -> Option<ForumEvent> {
        self.events_rx.recv().await
    }

    /// Apply every event that is already queued, without waiting.
    pub fn drain_ready(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Drive events until no spawned request is outstanding.
    pub async fn run_until_idle(&mut self) {
        while self.in_flight > 0 {
            match self.next_event().await {
                Some(event) => self.handle_event(event),
                None => break,
            }
        }
    }

    pub fn handle_event(&mut self, event: ForumEvent) {
        if !matches!(event, ForumEvent::PollTick { .. }) {
            self.in_flight = self.in_flight.saturating_sub(1);
        }

        match event {
            ForumEvent::PollTick { generation } => self.on_poll_tick(generation),
            ForumEvent::ThreadsLoaded { seq, result } => self.on_threads_loaded(seq, result),
            ForumEvent::MessagesLoaded { request, result } => {
                self.on_messages_loaded(request, result)
            }
            ForumEvent::ThreadCreated { thread_id, result } => {
                self.on_thread_created(&thread_id, result)
            }
            ForumEvent::DeleteDeclined { thread_id } => {
                debug!("Deletion of {} declined", thread_id);
            }
            ForumEvent::ThreadDeleted {
                thread_id,
                epoch,
                result,
            } => self.on_thread_deleted(&thread_id, epoch, result),
        }
    }

    fn on_poll_tick(&mut self, generation: u64) {
        // Ticks queued before close() or a restart in open() are dropped.
        if self.poll_handle.is_none() || generation != self.poll_generation {
            debug!("Ignoring stale poll tick (generation {})", generation);
            return;
        }
        debug!("Poll tick");
        self.refresh();
    }

    fn on_threads_loaded(&mut self, seq: u64, result: Result<Vec<Thread>, ApiError>) {
        let mut threads = match result {
            Ok(threads) => threads,
            Err(e) => {
                warn!("Forum refresh failed: {}", e);
                return;
            }
        };

        if seq < self.applied_list_seq {
            debug!("Discarding out-of-order thread list (seq {})", seq);
            return;
        }
        self.applied_list_seq = seq;

        if threads.is_empty() {
            self.surface.render_threads_empty();
            return;
        }

        sort_newest_first(&mut threads);
        let active = self.active_thread.as_deref();
        let rows = threads
            .into_iter()
            .map(|thread| ThreadRow {
                active: active == Some(thread.id()),
                thread_id: thread.asteroid_name,
                created_at: thread.created_at,
            })
            .collect();
        self.surface.render_threads(rows);

        if let Some(thread_id) = self.active_thread.clone() {
            self.load_thread(&thread_id, false);
        }
    }

    fn on_messages_loaded(&mut self, request: MessageRequest, result: Result<Vec<Message>, ApiError>) {
        let still_selected = self.active_thread.as_deref() == Some(request.thread_id.as_str())
            && request.epoch == self.selection_epoch;
        if !still_selected {
            debug!(
                "Discarding messages for {}: selection changed",
                request.thread_id
            );
            return;
        }
        if request.seq < self.applied_message_seq {
            debug!(
                "Discarding out-of-order messages for {} (seq {})",
                request.thread_id, request.seq
            );
            return;
        }

        let messages = match result {
            Ok(messages) => messages,
            Err(e) => {
                warn!("Failed to load messages for {}: {}", request.thread_id, e);
                return;
            }
        };
        self.applied_message_seq = request.seq;

        if messages.is_empty() {
            self.surface.render_messages_empty();
            return;
        }

        let was_at_bottom = self.surface.is_scrolled_to_bottom();
        self.surface
            .render_messages(messages.into_iter().map(MessageEntry::from).collect());
        if request.show_loading || was_at_bottom {
            self.surface.scroll_to_bottom();
        }
    }

    fn on_thread_created(&mut self, thread_id: &str, result: Result<CreateOutcome, ApiError>) {
        match result {
            Ok(CreateOutcome::Created) => {
                info!("Thread {} created", thread_id);
                self.surface
                    .notify(Notice::success(format!("Secure channel opened: {}", thread_id)));
                self.open();
            }
            Ok(CreateOutcome::Rejected(status)) => {
                info!("Thread {} not created: {}", thread_id, status);
                self.surface.notify(Notice::warning(status));
            }
            Err(e) => {
                warn!("Create thread {} failed: {}", thread_id, e);
                self.surface.notify(Notice::error("Connection failed"));
            }
        }
    }

    fn on_thread_deleted(&mut self, thread_id: &str, epoch: u64, result: Result<(), ApiError>) {
        match result {
            Ok(()) => info!("Delete requested for {}", thread_id),
            Err(e) => {
                warn!("Delete thread {} failed: {}", thread_id, e);
                self.surface.notify(Notice::error("Delete failed"));
            }
        }

        // Cleared whatever the outcome; the response status is not inspected.
        // A selection made while the request was in flight is left alone.
        let still_selected = self.active_thread.as_deref() == Some(thread_id)
            && epoch == self.selection_epoch;
        if still_selected {
            self.clear_selection();
        } else {
            debug!("Keeping selection made during deletion of {}", thread_id);
        }
        self.refresh();
    }

    fn clear_selection(&mut self) {
        self.active_thread = None;
        self.selection_epoch += 1;
        self.surface.set_active_title(None);
        self.surface.clear_messages();
        self.surface.set_delete_visible(false);
    }

    fn spawn_request<F>(&mut self, task: F)
    where
        F: Future<Output = ForumEvent> + Send + 'static,
    {
        self.in_flight += 1;
        let events_tx = self.events_tx.clone();
        tokio::spawn(async move {
            let _ = events_tx.send(task.await);
        });
    }

    fn spawn_poll(&self, generation: u64) -> JoinHandle<()> {
        let events_tx = self.events_tx.clone();
        let period = self.config.poll_interval;
        tokio::spawn(async move {
            let mut ticks = tokio::time::interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                if events_tx.send(ForumEvent::PollTick { generation }).is_err() {
                    break;
                }
            }
        })
    }
}

impl<S> Drop for ForumController<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.poll_handle.take() {
            handle.abort();
        }
    }
}
