use crate::ui::layout;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Configuration for modal sizing
pub struct ModalSize {
    /// Maximum width in columns (capped by terminal width - 4)
    pub max_width: u16,
    /// Height as a fraction of terminal height (0.0 - 1.0)
    pub height_percent: f32,
}

/// Calculate centered modal area
pub fn modal_area(terminal_area: Rect, size: &ModalSize) -> Rect {
    let popup_width = size.max_width.min(terminal_area.width.saturating_sub(4));
    let popup_height = (terminal_area.height as f32 * size.height_percent) as u16;
    let popup_x = terminal_area.x + (terminal_area.width.saturating_sub(popup_width)) / 2;
    let popup_y = terminal_area.y + (terminal_area.height.saturating_sub(popup_height)) / 2;
    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

/// Dims existing cells so the modal stands out while the backdrop stays readable
struct DimOverlay;

impl Widget for DimOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_style(
                        Style::default()
                            .add_modifier(Modifier::DIM)
                            .bg(theme::BG_MODAL_OVERLAY),
                    );
                }
            }
        }
    }
}

pub fn render_modal_overlay(f: &mut Frame, terminal_area: Rect) {
    f.render_widget(DimOverlay, terminal_area);
}

/// Clear the area and fill it with the modal background
pub fn render_modal_background(f: &mut Frame, area: Rect) {
    f.render_widget(Clear, area);
    let bg_block = Block::default().style(Style::default().bg(theme::BG_MODAL));
    f.render_widget(bg_block, area);
}

/// Render a header with `title` on the left and `hint` on the right.
/// Returns the remaining area below the header.
pub fn render_modal_header(f: &mut Frame, area: Rect, title: &str, hint: &str) -> Rect {
    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(area);
    let header_area = layout::with_modal_padding(chunks[0]);

    let spacing = (header_area.width as usize).saturating_sub(title.width() + hint.width());
    let header_line = Line::from(vec![
        Span::styled(title.to_string(), theme::modal_title()),
        Span::raw(" ".repeat(spacing)),
        Span::styled(hint.to_string(), theme::modal_hint()),
    ]);
    f.render_widget(Paragraph::new(header_line), header_area);

    chunks[1]
}

/// A modal item with text and optional shortcut
pub struct ModalItem {
    pub text: String,
    pub shortcut: Option<String>,
}

impl ModalItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shortcut: None,
        }
    }

    pub fn with_shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }
}

fn render_modal_item(f: &mut Frame, area: Rect, item: &ModalItem) {
    let shortcut = item.shortcut.as_deref().unwrap_or("");
    let spacing = (area.width as usize).saturating_sub(item.text.width() + shortcut.width());
    let line = Line::from(vec![
        Span::styled(item.text.clone(), theme::modal_item()),
        Span::raw(" ".repeat(spacing)),
        Span::styled(shortcut.to_string(), theme::modal_item_shortcut()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Render one item per line, stopping at the bottom of `area`
pub fn render_modal_items(f: &mut Frame, area: Rect, items: &[ModalItem]) {
    let content_area = layout::with_modal_padding(area);

    for (idx, item) in items.iter().enumerate() {
        if idx as u16 >= content_area.height {
            break;
        }
        let item_area = Rect::new(
            content_area.x,
            content_area.y + idx as u16,
            content_area.width,
            1,
        );
        render_modal_item(f, item_area, item);
    }
}
