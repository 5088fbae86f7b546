use forum_core::controller::{ForumSurface, Notice};
use forum_core::ForumController;

use crate::ui::confirm::ConfirmRequest;
use crate::ui::screen::ForumScreen;

/// Which pane of the forum modal receives arrow keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Threads,
    Messages,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Threads => Focus::Messages,
            Focus::Messages => Focus::Threads,
        }
    }
}

/// Dialog layered over everything else
#[derive(Debug, Default)]
pub enum ModalState {
    #[default]
    None,
    Confirm(ConfirmRequest),
    NewThread { input: String },
}

impl ModalState {
    pub fn is_none(&self) -> bool {
        matches!(self, ModalState::None)
    }
}

pub struct App {
    pub running: bool,
    /// First Ctrl+C seen; a second one quits
    pub pending_quit: bool,
    pub focus: Focus,
    pub modal_state: ModalState,
    pub controller: ForumController<ForumScreen>,
}

impl App {
    pub fn new(controller: ForumController<ForumScreen>) -> Self {
        Self {
            running: true,
            pending_quit: false,
            focus: Focus::default(),
            modal_state: ModalState::None,
            controller,
        }
    }

    pub fn screen(&self) -> &ForumScreen {
        self.controller.surface()
    }

    pub fn screen_mut(&mut self) -> &mut ForumScreen {
        self.controller.surface_mut()
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn tick(&mut self) {
        self.screen_mut().notifications.tick();
    }

    pub fn notify(&mut self, notice: Notice) {
        self.screen_mut().notify(notice);
    }

    /// Show a confirmation dialog. A dialog already on screen is declined.
    pub fn show_confirm(&mut self, request: ConfirmRequest) {
        if let ModalState::Confirm(previous) =
            std::mem::replace(&mut self.modal_state, ModalState::Confirm(request))
        {
            previous.answer(false);
        }
    }

    pub fn answer_confirm(&mut self, confirmed: bool) {
        if let ModalState::Confirm(request) = std::mem::take(&mut self.modal_state) {
            request.answer(confirmed);
        }
    }

    pub fn open_new_thread_prompt(&mut self) {
        // Leave a pending confirmation in place.
        if self.modal_state.is_none() {
            self.modal_state = ModalState::NewThread {
                input: String::new(),
            };
        }
    }

    pub fn submit_new_thread(&mut self) {
        let ModalState::NewThread { input } = std::mem::take(&mut self.modal_state) else {
            return;
        };
        let name = input.trim();
        if name.is_empty() {
            self.notify(Notice::warning("Thread name required"));
            return;
        }
        self.controller.create_thread(name);
    }

    /// Open the thread under the cursor.
    pub fn open_cursor_thread(&mut self) {
        if let Some(thread_id) = self.screen().cursor_thread().map(str::to_string) {
            self.controller.load_thread(&thread_id, true);
        }
    }
}
