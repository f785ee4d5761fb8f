use crate::support::{collect_events, init_logging, wait_for};
use lanyard_sdk::{Client, Event, Status};
use mock_server::MockGateway;
use std::time::{Duration, Instant};

/// The mock closes the first connection right after hello; the client must come
/// back on its own, no earlier than the fixed 5 s delay, and complete the
/// handshake on the second connection.
#[tokio::test]
async fn reconnects_after_a_dropped_connection() {
    init_logging();

    let mock = MockGateway {
        drop_first_connection: true,
        ..MockGateway::default()
    };
    let port = mock.listen(0).await;

    let client = Client::new(
        format!("ws://127.0.0.1:{port}"),
        "321284718035468288".to_string(),
    )
    .unwrap();

    let mut events = collect_events(&client);

    wait_for(&mut events, Duration::from_secs(5), |event| {
        matches!(event, Event::Disconnected)
    })
    .await;
    let dropped_at = Instant::now();

    wait_for(&mut events, Duration::from_secs(10), |event| {
        matches!(event, Event::Connected)
    })
    .await;
    assert!(dropped_at.elapsed() >= Duration::from_millis(4500));

    let update = wait_for(&mut events, Duration::from_secs(5), |event| {
        matches!(event, Event::PresenceUpdate(_))
    })
    .await;

    let Event::PresenceUpdate(presence) = update else {
        unreachable!();
    };
    assert_eq!(presence.status, Status::Idle);

    client.disconnect();
}
