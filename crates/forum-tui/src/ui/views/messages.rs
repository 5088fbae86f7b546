use forum_core::controller::MessageEntry;
use forum_core::models::Author;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::format::{message_time, truncate_with_ellipsis};
use crate::ui::layout;
use crate::ui::screen::{ForumScreen, MessageContent};
use crate::ui::theme;

const NO_SELECTION_TITLE: &str = "SELECT TARGET";
const DELETE_HINT: &str = "d DELETE SIGNAL";
const CLOSE_HINT: &str = "esc close";
const WAITING: &str = "WAITING FOR SELECTION";
const LOADING: &str = "DECRYPTING...";
const NO_MESSAGES: &str = "NO CHATTER DETECTED";
const READ_ONLY_FOOTER: &str = "READ ONLY: REPLY VIA ENCRYPTED TELEGRAM CHANNEL.";

pub fn pane_title(screen: &ForumScreen) -> String {
    match &screen.title {
        Some(thread_id) => format!("TARGET: {}", thread_id),
        None => NO_SELECTION_TITLE.to_string(),
    }
}

/// Header, scrollable message list and the read-only footer
pub fn render_message_pane(f: &mut Frame, screen: &mut ForumScreen, focused: bool, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(layout::PANE_HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(layout::FOOTER_HEIGHT),
    ])
    .split(area);
    let header_area = layout::with_content_padding(chunks[0]);
    let body_area = layout::with_content_padding(chunks[1]);
    let footer_area = layout::with_content_padding(chunks[2]);

    let mut hints = Vec::new();
    if screen.delete_visible {
        hints.push(Span::styled(DELETE_HINT, theme::delete_hint()));
        hints.push(Span::raw("  "));
    }
    hints.push(Span::styled(CLOSE_HINT, theme::text_dim()));
    let hints_width: usize = hints.iter().map(|span| span.content.width()).sum();

    let title_style = if focused {
        theme::pane_header()
    } else {
        theme::modal_title()
    };
    let title = truncate_with_ellipsis(
        &pane_title(screen),
        (header_area.width as usize).saturating_sub(hints_width + 1),
    );
    let spacing = (header_area.width as usize).saturating_sub(title.width() + hints_width);
    let mut header = vec![Span::styled(title, title_style), Span::raw(" ".repeat(spacing))];
    header.extend(hints);
    f.render_widget(Paragraph::new(Line::from(header)), header_area);

    let paragraph = Paragraph::new(message_lines(&screen.messages)).wrap(Wrap { trim: false });
    let total_lines = paragraph.line_count(body_area.width);
    screen.set_max_scroll(total_lines.saturating_sub(body_area.height as usize));
    let scroll = screen.scroll_offset().min(u16::MAX as usize) as u16;
    f.render_widget(paragraph.scroll((scroll, 0)), body_area);

    f.render_widget(
        Paragraph::new(Span::styled(READ_ONLY_FOOTER, theme::text_dim())),
        footer_area,
    );
}

fn author_label(author: &Author) -> String {
    match author {
        Author::System => format!("🤖 {}", author.display_name()),
        Author::Human(name) => format!("👤 {}", name),
    }
}

fn entry_lines(entry: &MessageEntry) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(author_label(&entry.author), theme::author_style(&entry.author)),
        Span::raw("  "),
        Span::styled(message_time(entry.created_at.as_ref()), theme::text_dim()),
    ])];
    lines.extend(
        entry
            .body
            .lines()
            .map(|text| Line::from(Span::styled(text.to_string(), theme::text_primary()))),
    );
    lines
}

/// Lines for the message pane, before wrapping
pub fn message_lines(content: &MessageContent) -> Vec<Line<'static>> {
    let placeholder = |text: &'static str| vec![Line::from(Span::styled(text, theme::placeholder()))];
    match content {
        MessageContent::WaitingForSelection => placeholder(WAITING),
        MessageContent::Loading => placeholder(LOADING),
        MessageContent::Empty => placeholder(NO_MESSAGES),
        MessageContent::Cleared => Vec::new(),
        MessageContent::Entries(entries) => {
            let mut lines = Vec::new();
            for (idx, entry) in entries.iter().enumerate() {
                if idx > 0 {
                    lines.push(Line::default());
                }
                lines.extend(entry_lines(entry));
            }
            lines
        }
    }
}
