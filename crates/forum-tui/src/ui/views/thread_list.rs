use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::format::{thread_time, truncate_with_ellipsis};
use crate::ui::layout;
use crate::ui::screen::{ForumScreen, ThreadListContent};
use crate::ui::theme;

const HEADER: &str = "/// TRANSMISSIONS";
const SYNC_HINT: &str = "r sync";
const INITIALIZING: &str = "INITIALIZING UPLINK...";
const NO_THREADS: &str = "NO ACTIVE SIGNALS";
/// "HH:MM" plus a separating space
const TIME_COLUMN_WIDTH: usize = 6;

pub fn render_thread_list(f: &mut Frame, screen: &ForumScreen, focused: bool, area: Rect) {
    let border_style = if focused {
        theme::border_focused()
    } else {
        theme::border_inactive()
    };
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(border_style)
        .style(Style::default().bg(theme::BG_SIDEBAR));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(layout::PANE_HEADER_HEIGHT),
        Constraint::Min(0),
    ])
    .split(inner);
    let header_area = layout::with_content_padding(chunks[0]);
    let list_area = layout::with_content_padding(chunks[1]);

    let spacing = (header_area.width as usize).saturating_sub(HEADER.width() + SYNC_HINT.width());
    let header = Line::from(vec![
        Span::styled(HEADER, theme::pane_header()),
        Span::raw(" ".repeat(spacing)),
        Span::styled(SYNC_HINT, theme::text_dim()),
    ]);
    f.render_widget(Paragraph::new(header), header_area);

    // Keep the cursor row on screen.
    let visible = list_area.height as usize;
    let offset = screen.cursor.saturating_sub(visible.saturating_sub(1));
    let lines = thread_lines(screen, list_area.width as usize);
    f.render_widget(
        Paragraph::new(lines).scroll((offset.min(u16::MAX as usize) as u16, 0)),
        list_area,
    );
}

/// One line per thread, or the placeholder for the current list state
pub fn thread_lines(screen: &ForumScreen, width: usize) -> Vec<Line<'static>> {
    let rows = match &screen.threads {
        ThreadListContent::Initializing => {
            return vec![Line::from(Span::styled(INITIALIZING, theme::placeholder()))]
        }
        ThreadListContent::Empty => {
            return vec![Line::from(Span::styled(NO_THREADS, theme::placeholder()))]
        }
        ThreadListContent::Rows(rows) => rows,
    };

    let name_width = width.saturating_sub(TIME_COLUMN_WIDTH);
    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            let name = truncate_with_ellipsis(&format!("#{}", row.thread_id), name_width);
            let spacing = width.saturating_sub(name.width() + TIME_COLUMN_WIDTH - 1);
            let name_style = if row.active {
                theme::thread_active()
            } else {
                theme::text_primary()
            };
            let line = Line::from(vec![
                Span::styled(name, name_style),
                Span::raw(" ".repeat(spacing)),
                Span::styled(thread_time(row.created_at.as_ref()), theme::text_muted()),
            ]);
            if idx == screen.cursor {
                line.style(theme::thread_cursor())
            } else {
                line
            }
        })
        .collect()
}
