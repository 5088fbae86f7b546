//! Confirmation dialog and new thread prompt

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::ui::components::{
    modal_area, render_modal_background, render_modal_header, render_modal_items,
    render_modal_overlay, ModalItem, ModalSize,
};
use crate::ui::layout;
use crate::ui::theme;

/// Render the prompt of a pending confirmation.
///
/// The first line of `prompt` becomes the title, the rest the body.
pub fn render_confirm_dialog(f: &mut Frame, area: Rect, prompt: &str) {
    let (title, body) = prompt.split_once('\n').unwrap_or((prompt, ""));

    render_modal_overlay(f, area);
    let popup_area = modal_area(
        area,
        &ModalSize {
            max_width: 56,
            height_percent: 0.3,
        },
    );
    render_modal_background(f, popup_area);

    let inner = Rect::new(
        popup_area.x,
        popup_area.y + 1,
        popup_area.width,
        popup_area.height.saturating_sub(2),
    );
    let content = render_modal_header(f, inner, title, "");

    let body_area = layout::with_modal_padding(Rect::new(
        content.x,
        content.y,
        content.width,
        content.height.saturating_sub(3),
    ));
    f.render_widget(
        Paragraph::new(body.trim()).style(theme::modal_warning()).wrap(Wrap { trim: true }),
        body_area,
    );

    let actions_area = Rect::new(
        content.x,
        content.y + content.height.saturating_sub(2),
        content.width,
        2,
    );
    let items = vec![
        ModalItem::new("Confirm").with_shortcut("y / Enter"),
        ModalItem::new("Cancel").with_shortcut("n / Esc"),
    ];
    render_modal_items(f, actions_area, &items);
}

/// Render the single-line input for a new thread name
pub fn render_new_thread_prompt(f: &mut Frame, area: Rect, input: &str) {
    render_modal_overlay(f, area);
    let popup_area = modal_area(
        area,
        &ModalSize {
            max_width: 50,
            height_percent: 0.2,
        },
    );
    render_modal_background(f, popup_area);

    let inner = Rect::new(
        popup_area.x,
        popup_area.y + 1,
        popup_area.width,
        popup_area.height.saturating_sub(2),
    );
    let content = render_modal_header(f, inner, "OPEN NEW CHANNEL", "Enter create · Esc cancel");
    let input_area = layout::with_modal_padding(Rect::new(content.x, content.y, content.width, 1));

    let line = if input.is_empty() {
        Line::from(Span::styled("Asteroid name...", theme::input_placeholder()))
    } else {
        Line::from(vec![
            Span::styled(input.to_string(), theme::input_active()),
            Span::styled("▏", theme::input_active()),
        ])
    };
    f.render_widget(
        Paragraph::new(line).style(theme::input_active()),
        input_area,
    );
}
