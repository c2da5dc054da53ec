//! # Events
//!
//! Everything that can reach [`App::update`](crate::ui::App::update) is an
//! [`AppEvent`], and everything the update asks the runtime to do is an
//! [`Effect`]. Terminal input arrives through an [`EventReader`]; delayed
//! events such as notice expiry are sent back by the [`Scheduler`].

use crate::ui::notifier::NoticeId;
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Mouse(MouseEvent),
    NoticeExpired(NoticeId),
}

impl AppEvent {
    /// Convert a raw terminal event, dropping the ones the app ignores
    /// (key releases, mouse motion, focus and paste events).
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
            Event::Resize(width, height) => Some(AppEvent::Resize(width, height)),
            Event::Mouse(mouse)
                if matches!(
                    mouse.kind,
                    MouseEventKind::ScrollUp | MouseEventKind::ScrollDown
                ) =>
            {
                Some(AppEvent::Mouse(mouse))
            }
            _ => None,
        }
    }
}

/// Follow-up work requested by a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Deliver `AppEvent::NoticeExpired(id)` once `after` has elapsed.
    ScheduleNoticeClear { id: NoticeId, after: Duration },
    Quit,
}

/// Trait for reading terminal events (allows dependency injection for testing)
pub trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
pub struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(event::read().context("Failed to read terminal event")?))
        } else {
            Ok(None)
        }
    }
}

/// Sends events back into the dispatch queue after a delay.
///
/// Each scheduled event runs as its own tokio task. Tasks are never
/// cancelled; a receiver that has gone away simply drops the event.
#[derive(Debug, Clone)]
pub struct Scheduler {
    tx: UnboundedSender<AppEvent>,
}

impl Scheduler {
    pub fn channel() -> (Self, UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn schedule(&self, event: AppEvent, after: Duration) {
        let tx = self.tx.clone();
        let deadline = tokio::time::Instant::now() + after;
        tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let _ = tx.send(event);
        });
    }
}
