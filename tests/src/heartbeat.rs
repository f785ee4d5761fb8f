use crate::support::{collect_events, init_logging, wait_for};
use lanyard_sdk::{Client, Event, RenderState, Status};
use mock_server::MockGateway;
use std::time::{Duration, Instant};

/// The mock only pushes its follow-up snapshot after counting three heartbeats,
/// so receiving it proves the client keeps beating at the advertised cadence.
#[tokio::test]
async fn heartbeats_keep_the_session_alive() {
    init_logging();

    let mock = MockGateway {
        heartbeat_interval_ms: 100,
        heartbeats_before_followup: 3,
        ..MockGateway::default()
    };
    let port = mock.listen(0).await;

    let client = Client::new(
        format!("ws://127.0.0.1:{port}"),
        "321284718035468288".to_string(),
    )
    .unwrap();

    let mut events = collect_events(&client);

    let first = wait_for(&mut events, Duration::from_secs(5), |event| {
        matches!(event, Event::PresenceUpdate(_))
    })
    .await;
    let subscribed_at = Instant::now();

    let Event::PresenceUpdate(first) = first else {
        unreachable!();
    };
    assert_eq!(first.status, Status::Idle);

    let followup = wait_for(&mut events, Duration::from_secs(5), |event| {
        matches!(event, Event::PresenceUpdate(_))
    })
    .await;

    // Three 100 ms heartbeats have to elapse before the follow-up exists.
    assert!(subscribed_at.elapsed() >= Duration::from_millis(250));

    let Event::PresenceUpdate(followup) = followup else {
        unreachable!();
    };
    assert_eq!(followup.status, Status::Online);

    // The follow-up omits username and avatar and carries no activities: the
    // render keeps the old identity fields but hides the activity block.
    let mut render = RenderState::default();
    render.apply(&first);
    assert!(render.activity_visible);

    render.apply(&followup);
    assert_eq!(render.username.as_deref(), Some("WAAEUW"));
    assert!(render.avatar_url.is_some());
    assert_eq!(render.status_text, "ONLINE");
    assert!(!render.activity_visible);

    client.disconnect();
}
