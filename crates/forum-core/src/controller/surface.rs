//! Seams between the controller and whatever displays it.

use chrono::{DateTime, Utc};
use futures::future::BoxFuture;

use crate::models::{Author, Message};

/// One row of the thread list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadRow {
    pub thread_id: String,
    pub created_at: Option<DateTime<Utc>>,
    /// Row matches the selected thread at render time
    pub active: bool,
}

/// One rendered message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEntry {
    pub author: Author,
    pub body: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Message> for MessageEntry {
    fn from(message: Message) -> Self {
        Self {
            author: message.author(),
            body: message.message,
            created_at: message.created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A user-facing notification raised by a user-initiated action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// Presentation surface driven by the controller.
///
/// Every method replaces what it names; nothing is merged with earlier
/// content. Implementations hold no behavior of their own.
pub trait ForumSurface {
    fn set_visible(&mut self, visible: bool);

    fn render_threads(&mut self, rows: Vec<ThreadRow>);

    fn render_threads_empty(&mut self);

    /// `None` resets to the "nothing selected" title.
    fn set_active_title(&mut self, thread_id: Option<&str>);

    fn set_delete_visible(&mut self, visible: bool);

    fn show_messages_loading(&mut self);

    fn render_messages(&mut self, entries: Vec<MessageEntry>);

    fn render_messages_empty(&mut self);

    fn clear_messages(&mut self);

    fn is_scrolled_to_bottom(&self) -> bool;

    fn scroll_to_bottom(&mut self);

    fn notify(&mut self, notice: Notice);
}

/// Interactive yes/no prompt for destructive actions
pub trait Confirmer: Send + Sync {
    fn confirm(&self, prompt: String) -> BoxFuture<'static, bool>;
}
