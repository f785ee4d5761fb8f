use crate::support::{collect_events, init_logging};
use lanyard_sdk::{Client, Event, Status};
use mock_server::MockGateway;
use std::time::Duration;

/// The mock sends a non-JSON frame and a broken event payload right after
/// hello. Both must be dropped without tearing the connection down: the
/// subscription still completes and the valid snapshot still arrives.
#[tokio::test]
async fn malformed_frames_are_dropped_without_closing_the_connection() {
    init_logging();

    let mock = MockGateway {
        garbage_after_hello: true,
        ..MockGateway::default()
    };
    let port = mock.listen(0).await;

    let client = Client::new(
        format!("ws://127.0.0.1:{port}"),
        "321284718035468288".to_string(),
    )
    .unwrap();

    let mut events = collect_events(&client);

    let presence = loop {
        let event = tokio::time::timeout(Duration::from_secs(5), events.recv())
            .await
            .expect("Timed out waiting for the presence update")
            .expect("Event channel closed while waiting");

        match event {
            Event::PresenceUpdate(presence) => break presence,
            Event::Disconnected => panic!("A dropped frame must not close the connection"),
            _ => continue,
        }
    };

    assert_eq!(presence.status, Status::Idle);

    client.disconnect();
}
