use crossterm::event::{KeyCode, KeyEvent};

use crate::ui::layout::PAGE_SCROLL_LINES;
use crate::ui::{App, Focus, ModalState};

pub(crate) fn handle_key(app: &mut App, key: KeyEvent) {
    match app.modal_state {
        ModalState::Confirm(_) => handle_confirm_key(app, key),
        ModalState::NewThread { .. } => handle_new_thread_key(app, key),
        ModalState::None => {
            if app.controller.is_open() {
                handle_forum_key(app, key)
            } else {
                handle_backdrop_key(app, key)
            }
        }
    }
}

fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.answer_confirm(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.answer_confirm(false),
        _ => {}
    }
}

fn handle_new_thread_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.modal_state = ModalState::None,
        KeyCode::Enter => app.submit_new_thread(),
        KeyCode::Backspace => {
            if let ModalState::NewThread { input } = &mut app.modal_state {
                input.pop();
            }
        }
        KeyCode::Char(c) => {
            if let ModalState::NewThread { input } = &mut app.modal_state {
                input.push(c);
            }
        }
        _ => {}
    }
}

fn handle_backdrop_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('o') => app.controller.open(),
        KeyCode::Char('n') => app.open_new_thread_prompt(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

fn handle_forum_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.controller.close(),
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('r') => app.controller.refresh(),
        KeyCode::Char('d') => app.controller.delete_thread(),
        KeyCode::Char('n') => app.open_new_thread_prompt(),
        KeyCode::Tab | KeyCode::BackTab => app.focus = app.focus.toggle(),
        KeyCode::Enter if app.focus == Focus::Threads => app.open_cursor_thread(),
        KeyCode::Up | KeyCode::Char('k') => match app.focus {
            Focus::Threads => app.screen_mut().cursor_up(),
            Focus::Messages => app.screen_mut().scroll_up(1),
        },
        KeyCode::Down | KeyCode::Char('j') => match app.focus {
            Focus::Threads => app.screen_mut().cursor_down(),
            Focus::Messages => app.screen_mut().scroll_down(1),
        },
        KeyCode::PageUp => app.screen_mut().scroll_up(PAGE_SCROLL_LINES),
        KeyCode::PageDown => app.screen_mut().scroll_down(PAGE_SCROLL_LINES),
        _ => {}
    }
}
