use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::ui;
use crate::ui::components::render_statusbar;
use crate::ui::layout;
use crate::ui::views;
use crate::ui::{App, ModalState};

pub(crate) fn render(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(ui::theme::BG_APP));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(layout::STATUSBAR_HEIGHT),
    ])
    .split(f.area());
    let main_area = chunks[0];

    views::render_backdrop(f, main_area);
    if app.screen().visible {
        views::render_forum(f, app, main_area);
    }

    match &app.modal_state {
        ModalState::None => {}
        ModalState::Confirm(request) => views::render_confirm_dialog(f, main_area, &request.prompt),
        ModalState::NewThread { input } => views::render_new_thread_prompt(f, main_area, input),
    }

    let endpoint = app.controller.config().api_base.to_string();
    render_statusbar(
        f,
        chunks[1],
        app.screen().notifications.current(),
        app.pending_quit,
        &endpoint,
        app.controller.is_polling(),
    );
}
