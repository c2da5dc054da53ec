//! Notice auto-clear timing tests
//!
//! Runs the real `Scheduler` on a paused tokio clock and feeds its expiry
//! events back into the app, the way the event loop does.

mod common;

use common::{create_test_app, notes_dir, select_txt};
use mdpeek::browser::Browser;
use mdpeek::ui::app::{Settings, REJECTED_SELECTION_MESSAGE};
use mdpeek::ui::events::{AppEvent, Effect, Scheduler};
use mdpeek::ui::App;
use std::time::Duration;
use tokio::time::Instant;

/// Schedule every effect the way the runtime does.
fn schedule_all(scheduler: &Scheduler, effects: Vec<Effect>) {
    for effect in effects {
        if let Effect::ScheduleNoticeClear { id, after } = effect {
            scheduler.schedule(AppEvent::NoticeExpired(id), after);
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_notice_clears_after_delay() {
    let dir = notes_dir();
    let mut app = create_test_app(&dir);
    let (scheduler, mut timers) = Scheduler::channel();
    let start = Instant::now();

    schedule_all(&scheduler, select_txt(&mut app));
    assert_eq!(
        app.notice().map(|n| n.message.as_str()),
        Some(REJECTED_SELECTION_MESSAGE)
    );

    tokio::time::sleep(Duration::from_millis(999)).await;
    assert!(timers.try_recv().is_err(), "cleared too early");
    assert!(app.notice().is_some());

    let event = timers.recv().await.expect("timer fired");
    assert!(start.elapsed() >= Duration::from_millis(1000));
    app.update(event);

    assert!(app.notice().is_none());
    assert!(app.page().is_browsing());
}

#[tokio::test(start_paused = true)]
async fn test_second_rejection_restarts_delay() {
    let dir = notes_dir();
    let mut app = create_test_app(&dir);
    let (scheduler, mut timers) = Scheduler::channel();

    schedule_all(&scheduler, select_txt(&mut app));
    tokio::time::sleep(Duration::from_millis(600)).await;

    let second_raised = Instant::now();
    schedule_all(&scheduler, select_txt(&mut app));

    // The first timer fires 400ms after the second rejection and is ignored
    let stale = timers.recv().await.expect("first timer fired");
    app.update(stale);
    assert!(app.notice().is_some());
    assert!(second_raised.elapsed() < Duration::from_millis(1000));

    let fresh = timers.recv().await.expect("second timer fired");
    assert!(second_raised.elapsed() >= Duration::from_millis(1000));
    app.update(fresh);
    assert!(app.notice().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_configured_delay_is_used() {
    let dir = notes_dir();
    let settings = Settings {
        notice_delay: Duration::from_secs(2),
        ..Settings::default()
    };
    let browser = Browser::new(dir.path(), vec!["md".to_string()], false).unwrap();
    let mut app = App::new(browser, &settings);
    let (scheduler, mut timers) = Scheduler::channel();
    let start = Instant::now();

    let effects = select_txt(&mut app);
    assert!(matches!(
        effects.as_slice(),
        [Effect::ScheduleNoticeClear { after, .. }] if *after == Duration::from_secs(2)
    ));
    schedule_all(&scheduler, effects);

    let event = timers.recv().await.expect("timer fired");
    assert!(start.elapsed() >= Duration::from_secs(2));
    app.update(event);
    assert!(app.notice().is_none());
}
