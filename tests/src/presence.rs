use crate::support::{collect_events, init_logging, wait_for};
use lanyard_sdk::{Client, Event, RenderState, Status};
use mock_server::MockGateway;
use std::time::Duration;

#[tokio::test]
async fn subscribes_and_renders_the_first_snapshot() {
    init_logging();

    let port = MockGateway::default().listen(0).await;
    let client = Client::new(
        format!("ws://127.0.0.1:{port}"),
        "321284718035468288".to_string(),
    )
    .unwrap();

    let mut events = collect_events(&client);

    let connected = wait_for(&mut events, Duration::from_secs(5), |event| {
        matches!(event, Event::Connected)
    })
    .await;
    assert_eq!(connected, Event::Connected);

    let subscribed = wait_for(&mut events, Duration::from_secs(5), |event| {
        matches!(event, Event::Subscribed)
    })
    .await;
    assert_eq!(subscribed, Event::Subscribed);

    let update = wait_for(&mut events, Duration::from_secs(5), |event| {
        matches!(event, Event::PresenceUpdate(_))
    })
    .await;

    let Event::PresenceUpdate(presence) = update else {
        unreachable!();
    };

    assert_eq!(presence.status, Status::Idle);
    assert_eq!(presence.user.id, "321284718035468288");

    let mut render = RenderState::default();
    render.apply(&presence);

    assert_eq!(render.status_text, "IDLE");
    assert_eq!(render.username.as_deref(), Some("WAAEUW"));

    let activity = render.activity.expect("An activity line should be shown");
    assert_eq!(activity.name, "EDITOR");
    assert_eq!(activity.detail, "EDITING X.TS");

    client.disconnect();
}

#[tokio::test]
async fn rejects_endpoints_that_are_not_websocket_urls() {
    assert!(Client::new("http://127.0.0.1:1863".to_string(), "1".to_string()).is_err());
}
