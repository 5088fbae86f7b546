use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::components::{modal_area, render_modal_background, render_modal_overlay, ModalSize};
use crate::ui::layout;
use crate::ui::theme;
use crate::ui::views::{render_message_pane, render_thread_list};
use crate::ui::{App, Focus};

const BACKDROP_TITLE: &str = "COSMIC WATCH";
const BACKDROP_HINT: &str = "o open · n new thread · q quit";

/// Screen shown behind the forum modal
pub fn render_backdrop(f: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Percentage(45),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(area);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(BACKDROP_TITLE, theme::pane_header())))
            .centered(),
        chunks[1],
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(BACKDROP_HINT, theme::text_muted()))).centered(),
        chunks[2],
    );
}

/// The forum modal: thread list on the left, messages on the right
pub fn render_forum(f: &mut Frame, app: &mut App, area: Rect) {
    render_modal_overlay(f, area);
    let popup_area = modal_area(
        area,
        &ModalSize {
            max_width: layout::FORUM_MODAL_WIDTH,
            height_percent: layout::FORUM_MODAL_HEIGHT_PERCENT,
        },
    );
    render_modal_background(f, popup_area);

    let inner = Rect::new(
        popup_area.x,
        popup_area.y + 1,
        popup_area.width,
        popup_area.height.saturating_sub(1),
    );
    let panes = Layout::horizontal([
        Constraint::Length(layout::THREAD_PANE_WIDTH),
        Constraint::Min(0),
    ])
    .split(inner);

    let focus = app.focus;
    render_thread_list(f, app.screen(), focus == Focus::Threads, panes[0]);
    render_message_pane(f, app.screen_mut(), focus == Focus::Messages, panes[1]);
}
