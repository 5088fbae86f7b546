use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};
use futures::StreamExt;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;

use crate::input::handle_key;
use crate::render::render;
use crate::ui::confirm::ConfirmRequest;
use crate::ui::layout::WHEEL_SCROLL_LINES;
use crate::ui::{App, Tui};

/// Redraw cadence; also expires notifications
const TICK_INTERVAL: Duration = Duration::from_millis(250);

pub(crate) async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    confirm_rx: &mut UnboundedReceiver<ConfirmRequest>,
) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut tick_interval = tokio::time::interval(TICK_INTERVAL);

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => handle_terminal_event(app, event),
                    Some(Err(e)) => return Err(e.into()),
                    None => app.quit(),
                }
            }

            // Network completions and poll ticks
            Some(event) = app.controller.next_event() => {
                app.controller.handle_event(event);
            }

            Some(request) = confirm_rx.recv() => {
                debug!("Confirmation requested");
                app.show_confirm(request);
            }

            _ = tick_interval.tick() => {
                app.tick();
            }
        }
    }
    Ok(())
}

fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                if app.pending_quit {
                    app.quit();
                } else {
                    // First Ctrl+C only arms the quit; the status bar shows a warning.
                    app.pending_quit = true;
                }
            } else {
                app.pending_quit = false;
                handle_key(app, key);
            }
        }
        Event::Mouse(mouse) if app.controller.is_open() && app.modal_state.is_none() => {
            match mouse.kind {
                MouseEventKind::ScrollUp => app.screen_mut().scroll_up(WHEEL_SCROLL_LINES),
                MouseEventKind::ScrollDown => app.screen_mut().scroll_down(WHEEL_SCROLL_LINES),
                _ => {}
            }
        }
        _ => {}
    }
}
