//! The event loop.
//!
//! One queue, one consumer: terminal input and expired timers are both turned
//! into [`AppEvent`]s and applied to the [`App`] strictly one at a time, so
//! the state needs no locking.

use crate::ui::app::App;
use crate::ui::events::{AppEvent, Effect, EventReader, Scheduler};
use crate::ui::render;
use anyhow::{anyhow, Result};
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Run until the app asks to quit.
///
/// The first event applied is a resize to the terminal's current size, so
/// the layout is valid before the first frame is drawn.
pub async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
    scheduler: &Scheduler,
    timers: &mut UnboundedReceiver<AppEvent>,
) -> Result<()> {
    let size = terminal
        .size()
        .map_err(|e| anyhow!("Failed to read terminal size: {e}"))?;
    let mut pending = VecDeque::from([AppEvent::Resize(size.width, size.height)]);

    loop {
        while let Some(event) = pending.pop_front() {
            for effect in app.update(event) {
                match effect {
                    Effect::Quit => return Ok(()),
                    Effect::ScheduleNoticeClear { id, after } => {
                        scheduler.schedule(AppEvent::NoticeExpired(id), after);
                    }
                }
            }
        }

        terminal
            .draw(|f| render::render(f, app))
            .map_err(|e| anyhow!("Failed to draw terminal UI: {e}"))?;

        while let Ok(event) = timers.try_recv() {
            pending.push_back(event);
        }
        if !pending.is_empty() {
            continue;
        }

        if let Some(event) = event_reader.read_event(POLL_TIMEOUT)? {
            pending.extend(AppEvent::from_terminal(event));
        }

        // Give timer tasks a chance to run between polls
        tokio::task::yield_now().await;
    }
}
