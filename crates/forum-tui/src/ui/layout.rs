// Centralized layout constants for consistent spacing

use ratatui::layout::Rect;

// =============================================================================
// PADDING CONSTANTS
// =============================================================================

/// Horizontal padding for pane content
pub const CONTENT_PADDING_H: u16 = 2;

/// Horizontal padding for modal content
pub const MODAL_PADDING_H: u16 = 2;

// =============================================================================
// FORUM MODAL DIMENSIONS
// =============================================================================

/// Width of the thread list pane
pub const THREAD_PANE_WIDTH: u16 = 32;

/// Pane header height (1 line + 1 spacing)
pub const PANE_HEADER_HEIGHT: u16 = 2;

/// Read-only footer under the message pane
pub const FOOTER_HEIGHT: u16 = 1;

/// Global status bar at the very bottom
pub const STATUSBAR_HEIGHT: u16 = 1;

pub const FORUM_MODAL_WIDTH: u16 = 120;

pub const FORUM_MODAL_HEIGHT_PERCENT: f32 = 0.85;

/// Lines moved per PgUp/PgDn
pub const PAGE_SCROLL_LINES: usize = 10;

/// Lines moved per mouse wheel notch
pub const WHEEL_SCROLL_LINES: usize = 3;

// =============================================================================
// LAYOUT HELPER FUNCTIONS
// =============================================================================

/// Apply horizontal padding to a Rect (reduces width and shifts x)
#[inline]
pub fn with_horizontal_padding(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x + padding,
        y: area.y,
        width: area.width.saturating_sub(padding * 2),
        height: area.height,
    }
}

#[inline]
pub fn with_content_padding(area: Rect) -> Rect {
    with_horizontal_padding(area, CONTENT_PADDING_H)
}

#[inline]
pub fn with_modal_padding(area: Rect) -> Rect {
    with_horizontal_padding(area, MODAL_PADDING_H)
}
