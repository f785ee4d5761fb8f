use env_logger::Env;
use lanyard_sdk::{Client, Event};
use std::time::Duration;
use tokio::sync::mpsc;

pub fn init_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("trace")).try_init();
}

/// Registers a handler that forwards every event into a channel the test can
/// drain at its own pace.
pub fn collect_events(client: &Client) -> mpsc::UnboundedReceiver<Event> {
    let (tx, rx) = mpsc::unbounded_channel();
    client.add_event_handler_closure(move |event| {
        let _ = tx.send(event);
    });

    rx
}

/// Drains events until one matches, panicking when the timeout elapses first.
pub async fn wait_for(
    rx: &mut mpsc::UnboundedReceiver<Event>,
    timeout: Duration,
    matches: impl Fn(&Event) -> bool,
) -> Event {
    let deadline = tokio::time::Instant::now() + timeout;

    loop {
        let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
        match tokio::time::timeout(remaining, rx.recv()).await {
            Ok(Some(event)) if matches(&event) => return event,
            Ok(Some(_)) => continue,
            Ok(None) => panic!("Event channel closed while waiting"),
            Err(_) => panic!("Timed out waiting for event"),
        }
    }
}
