use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const THREAD_TIME_FORMAT: &str = "%H:%M";
const MESSAGE_TIME_FORMAT: &str = "%H:%M:%S";
const UNKNOWN_THREAD_TIME: &str = "--:--";
const UNKNOWN_MESSAGE_TIME: &str = "--:--:--";

/// Thread creation time as local `HH:MM`, dashes when unknown
pub fn thread_time(created_at: Option<&DateTime<Utc>>) -> String {
    created_at.map_or_else(
        || UNKNOWN_THREAD_TIME.to_string(),
        |instant| clock_in(instant, &Local, THREAD_TIME_FORMAT),
    )
}

/// Message time as local `HH:MM:SS`, dashes when unknown
pub fn message_time(created_at: Option<&DateTime<Utc>>) -> String {
    created_at.map_or_else(
        || UNKNOWN_MESSAGE_TIME.to_string(),
        |instant| clock_in(instant, &Local, MESSAGE_TIME_FORMAT),
    )
}

fn clock_in<Tz>(instant: &DateTime<Utc>, zone: &Tz, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant.with_timezone(zone).format(format).to_string()
}

/// Truncate to `max_width` display columns, ending with "..." when cut.
/// Grapheme-aware so emoji and combining characters are never split.
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return take_width(s, max_width);
    }

    let mut result = take_width(s, max_width - 3);
    result.push_str("...");
    result
}

fn take_width(s: &str, max_width: usize) -> String {
    let mut current_width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let grapheme_width = grapheme.width();
        if current_width + grapheme_width > max_width {
            break;
        }
        result.push_str(grapheme);
        current_width += grapheme_width;
    }
    result
}
