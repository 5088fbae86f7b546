// Global status bar displayed at the very bottom of the app
// Shows the current notification on the left and connection details on the right

use forum_core::controller::NoticeLevel;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::format::truncate_with_ellipsis;
use crate::ui::notifications::Notification;
use crate::ui::theme;

const QUIT_HINT: &str = "Press Ctrl+C again to quit";

fn level_icon(level: NoticeLevel) -> (&'static str, Color) {
    match level {
        NoticeLevel::Info => ("\u{2139}", theme::ACCENT_PRIMARY),    // ℹ
        NoticeLevel::Success => ("\u{2713}", theme::ACCENT_SUCCESS), // ✓
        NoticeLevel::Warning => ("\u{26A0}", theme::ACCENT_WARNING), // ⚠
        NoticeLevel::Error => ("\u{2717}", theme::ACCENT_ERROR),     // ✗
    }
}

/// Render the status bar.
///
/// The left column shows the quit warning while a Ctrl+C is pending,
/// otherwise the current notification. The right column shows the API base
/// in green while polling and in muted grey otherwise.
pub fn render_statusbar(
    f: &mut Frame,
    area: Rect,
    current_notification: Option<&Notification>,
    pending_quit: bool,
    endpoint: &str,
    polling: bool,
) {
    let endpoint_label = format!(" {} ", endpoint);
    let endpoint_width = (endpoint_label.width() as u16).min(area.width / 2);
    let chunks =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(endpoint_width)]).split(area);
    let notification_area = chunks[0];
    let endpoint_area = chunks[1];
    let available = notification_area.width as usize;

    let line = if pending_quit {
        Line::from(Span::styled(
            format!(" {}", truncate_with_ellipsis(QUIT_HINT, available.saturating_sub(1))),
            theme::delete_hint(),
        ))
    } else if let Some(notification) = current_notification {
        let (icon, color) = level_icon(notification.level);
        let icon_width = icon.width() + 2;
        let message =
            truncate_with_ellipsis(&notification.message, available.saturating_sub(icon_width));
        Line::from(vec![
            Span::styled(format!(" {} ", icon), Style::default().fg(color)),
            Span::styled(message, Style::default().fg(color)),
        ])
    } else {
        Line::default()
    };
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme::BG_SIDEBAR)),
        notification_area,
    );

    let endpoint_color = if polling {
        theme::ACCENT_SUCCESS
    } else {
        theme::TEXT_MUTED
    };
    let endpoint_text = truncate_with_ellipsis(&endpoint_label, endpoint_area.width as usize);
    f.render_widget(
        Paragraph::new(endpoint_text)
            .style(Style::default().fg(endpoint_color).bg(theme::BG_SIDEBAR)),
        endpoint_area,
    );
}
