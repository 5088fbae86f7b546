// Centralized theme for the forum screen
// All colors and styles are defined here - edit this file to change the look

use forum_core::models::Author;
use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// App background - pure black for contrast
pub const BG_APP: Color = Color::Rgb(0, 0, 0);

/// Selected row background
pub const BG_SELECTED: Color = Color::Rgb(32, 32, 32);

/// Thread pane and status bar background
pub const BG_SIDEBAR: Color = Color::Rgb(12, 12, 12);

/// Input field background
pub const BG_INPUT: Color = Color::Rgb(18, 18, 18);

/// Modal background
pub const BG_MODAL: Color = Color::Rgb(24, 24, 24);

/// Dims whatever is behind an open modal
pub const BG_MODAL_OVERLAY: Color = Color::Rgb(10, 10, 12);

// -----------------------------------------------------------------------------
// Text Colors
// -----------------------------------------------------------------------------

pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);

pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);

/// Hints, placeholders
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

// -----------------------------------------------------------------------------
// Accent Colors
// -----------------------------------------------------------------------------

/// Interactive elements, focus, system authors
pub const ACCENT_PRIMARY: Color = Color::Rgb(86, 156, 214);

pub const ACCENT_SUCCESS: Color = Color::Rgb(106, 153, 85);

pub const ACCENT_WARNING: Color = Color::Rgb(206, 145, 120);

pub const ACCENT_ERROR: Color = Color::Rgb(244, 112, 112);

/// Human authors
pub const ACCENT_SPECIAL: Color = Color::Rgb(169, 154, 203);

// -----------------------------------------------------------------------------
// Border Colors
// -----------------------------------------------------------------------------

pub const BORDER_INACTIVE: Color = Color::Rgb(60, 60, 60);

// =============================================================================
// STYLE FUNCTIONS
// =============================================================================

pub fn text_primary() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn text_dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn border_inactive() -> Style {
    Style::default().fg(BORDER_INACTIVE)
}

pub fn border_focused() -> Style {
    Style::default().fg(ACCENT_PRIMARY)
}

/// Section headers such as `/// TRANSMISSIONS`
pub fn pane_header() -> Style {
    Style::default()
        .fg(ACCENT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

/// Placeholder text in an empty or loading pane
pub fn placeholder() -> Style {
    Style::default()
        .fg(TEXT_DIM)
        .add_modifier(Modifier::ITALIC)
}

/// Row of the thread the messages pane is showing
pub fn thread_active() -> Style {
    Style::default()
        .fg(ACCENT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

/// Row under the keyboard cursor
pub fn thread_cursor() -> Style {
    Style::default().bg(BG_SELECTED)
}

pub fn delete_hint() -> Style {
    Style::default().fg(ACCENT_ERROR)
}

pub fn author_style(author: &Author) -> Style {
    let color = if author.is_system() {
        ACCENT_PRIMARY
    } else {
        ACCENT_SPECIAL
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn input_active() -> Style {
    Style::default().fg(TEXT_PRIMARY).bg(BG_INPUT)
}

pub fn input_placeholder() -> Style {
    Style::default().fg(TEXT_DIM).bg(BG_INPUT)
}

pub fn modal_title() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn modal_hint() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn modal_item() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn modal_item_shortcut() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn modal_warning() -> Style {
    Style::default().fg(ACCENT_WARNING)
}
