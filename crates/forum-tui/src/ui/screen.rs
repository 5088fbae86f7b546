//! Terminal state of the forum modal, driven by the controller.

use forum_core::controller::{ForumSurface, MessageEntry, Notice, ThreadRow};

use crate::ui::notifications::{Notification, NotificationQueue};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ThreadListContent {
    /// No list has arrived yet
    #[default]
    Initializing,
    Empty,
    Rows(Vec<ThreadRow>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MessageContent {
    #[default]
    WaitingForSelection,
    Loading,
    Empty,
    /// Blank pane after the selected thread was deleted
    Cleared,
    Entries(Vec<MessageEntry>),
}

#[derive(Debug, Default)]
pub struct ForumScreen {
    pub visible: bool,
    pub threads: ThreadListContent,
    /// Keyboard cursor into the thread rows
    pub cursor: usize,
    pub title: Option<String>,
    pub delete_visible: bool,
    pub messages: MessageContent,
    pub notifications: NotificationQueue,
    /// First visible line of the message pane; `usize::MAX` pins it to the bottom
    scroll_top: usize,
    /// Largest useful `scroll_top`, measured at the last draw
    max_scroll: usize,
}

impl ForumScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[ThreadRow] {
        match &self.threads {
            ThreadListContent::Rows(rows) => rows,
            _ => &[],
        }
    }

    pub fn cursor_thread(&self) -> Option<&str> {
        self.rows()
            .get(self.cursor)
            .map(|row| row.thread_id.as_str())
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let last = self.rows().len().saturating_sub(1);
        self.cursor = (self.cursor + 1).min(last);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_top = self.scroll_offset().saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_top = self.scroll_offset().saturating_add(lines).min(self.max_scroll);
    }

    /// Scroll offset clamped to the content measured at the last draw
    pub fn scroll_offset(&self) -> usize {
        self.scroll_top.min(self.max_scroll)
    }

    /// Record the scroll range after laying out the message pane.
    pub fn set_max_scroll(&mut self, max_scroll: usize) {
        self.max_scroll = max_scroll;
    }
}

impl ForumSurface for ForumScreen {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn render_threads(&mut self, rows: Vec<ThreadRow>) {
        // Keep the cursor on the same thread when the list reorders.
        let previous = self.cursor_thread().map(str::to_string);
        let cursor = previous
            .and_then(|id| rows.iter().position(|row| row.thread_id == id))
            .or_else(|| rows.iter().position(|row| row.active))
            .unwrap_or(self.cursor);
        self.cursor = cursor.min(rows.len().saturating_sub(1));
        self.threads = ThreadListContent::Rows(rows);
    }

    fn render_threads_empty(&mut self) {
        self.cursor = 0;
        self.threads = ThreadListContent::Empty;
    }

    fn set_active_title(&mut self, thread_id: Option<&str>) {
        self.title = thread_id.map(str::to_string);
    }

    fn set_delete_visible(&mut self, visible: bool) {
        self.delete_visible = visible;
    }

    fn show_messages_loading(&mut self) {
        self.messages = MessageContent::Loading;
        self.scroll_top = 0;
        self.max_scroll = 0;
    }

    fn render_messages(&mut self, entries: Vec<MessageEntry>) {
        self.messages = MessageContent::Entries(entries);
    }

    fn render_messages_empty(&mut self) {
        self.messages = MessageContent::Empty;
    }

    fn clear_messages(&mut self) {
        self.messages = MessageContent::Cleared;
        self.scroll_top = 0;
        self.max_scroll = 0;
    }

    fn is_scrolled_to_bottom(&self) -> bool {
        self.scroll_top >= self.max_scroll
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_top = usize::MAX;
    }

    fn notify(&mut self, notice: Notice) {
        self.notifications.push(Notification::from(notice));
    }
}
