use crate::event::Event;
use crate::gateway::commands::heartbeat::Heartbeat;
use crate::gateway::commands::subscribe::Subscribe;
use crate::gateway::event_matcher::into_gateway_event;
use crate::session::{RECONNECT_DELAY, SessionAction, SessionInput, SessionState, step};
use futures_util::{SinkExt, StreamExt};
use log::{trace, warn};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

/// Connects, serves and reconnects forever, until the shutdown flag flips or
/// the [Client][crate::client::Client] is dropped. Every transition goes
/// through [step]; this loop only interprets the resulting actions.
pub(crate) async fn run(
    endpoint: String,
    subject_id: String,
    event_tx: async_channel::Sender<Event>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let mut state = SessionState::Disconnected;

    loop {
        (state, _) = step(state, SessionInput::ConnectStarted);
        trace!("Connecting to {endpoint}");

        let reconnect = match tokio_tungstenite::connect_async(endpoint.as_str()).await {
            Ok((stream, _)) => {
                let (next, reconnect) =
                    serve_connection(stream, &subject_id, &event_tx, &mut shutdown_rx, state)
                        .await;

                state = next;
                reconnect
            }

            Err(error) => {
                warn!("Could not connect to the gateway: {error}");
                let (next, actions) = step(state, SessionInput::SocketError);
                state = next;
                reconnect_delay(&actions)
            }
        };

        if *shutdown_rx.borrow() {
            break;
        }

        tokio::select! {
            _ = tokio::time::sleep(reconnect.unwrap_or(RECONNECT_DELAY)) => {}
            changed = shutdown_rx.changed() => {
                if changed.is_err() || *shutdown_rx.borrow() {
                    break;
                }
            }
        }

        (state, _) = step(state, SessionInput::ReconnectDelayElapsed);
    }
}

/// Drives one live connection to its end. Returns the session state and the
/// reconnect delay the state machine scheduled, if any.
async fn serve_connection(
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
    subject_id: &str,
    event_tx: &async_channel::Sender<Event>,
    shutdown_rx: &mut watch::Receiver<bool>,
    state: SessionState,
) -> (SessionState, Option<Duration>) {
    let (mut write, mut read) = stream.split();
    let (ws_tx, mut ws_rx) = mpsc::channel::<Message>(16);

    let writer = tokio::spawn(async move {
        while let Some(message) = ws_rx.recv().await {
            if write.send(message).await.is_err() {
                break;
            }
        }
    });

    let (mut state, _) = step(state, SessionInput::SocketOpened);
    let _ = event_tx.send(Event::Connected).await;

    // Exclusively owned by this connection; aborted before it ends.
    let mut heartbeat: Option<JoinHandle<()>> = None;
    let mut reconnect = None;

    loop {
        tokio::select! {
            changed = shutdown_rx.changed() => {
                if changed.is_err() || *shutdown_rx.borrow() {
                    break;
                }
            }

            frame = read.next() => {
                let input = match frame {
                    Some(Ok(Message::Text(text))) => {
                        trace!("S: {text}");
                        match into_gateway_event(text.as_str()) {
                            Ok(event) => SessionInput::Frame(event),
                            Err(error) => {
                                warn!("Dropping frame: {error}");
                                continue;
                            }
                        }
                    }

                    Some(Ok(Message::Close(_))) | None => SessionInput::SocketClosed,
                    Some(Ok(_)) => continue,

                    Some(Err(error)) => {
                        warn!("Gateway socket error: {error}");
                        SessionInput::SocketError
                    }
                };

                let closing = matches!(
                    input,
                    SessionInput::SocketClosed | SessionInput::SocketError
                );

                let (next, actions) = step(state, input);
                state = next;

                for action in actions {
                    match action {
                        SessionAction::StartHeartbeat(interval) => {
                            heartbeat = Some(spawn_heartbeat(ws_tx.clone(), interval));
                        }

                        SessionAction::StopHeartbeat => {
                            if let Some(task) = heartbeat.take() {
                                task.abort();
                            }
                        }

                        SessionAction::SendSubscribe => {
                            if Subscribe::send(&ws_tx, subject_id).await.is_ok() {
                                let _ = event_tx.send(Event::Subscribed).await;
                            }
                        }

                        SessionAction::Forward(presence) => {
                            let _ = event_tx.send(Event::PresenceUpdate(presence)).await;
                        }

                        SessionAction::ScheduleReconnect(delay) => {
                            reconnect = Some(delay);
                        }
                    }
                }

                if closing {
                    break;
                }
            }
        }
    }

    if let Some(task) = heartbeat.take() {
        task.abort();
    }
    writer.abort();

    let _ = event_tx.send(Event::Disconnected).await;
    (state, reconnect)
}

fn spawn_heartbeat(ws_tx: mpsc::Sender<Message>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;
            if Heartbeat::send(&ws_tx).await.is_err() {
                break;
            }
        }
    })
}

fn reconnect_delay(actions: &[SessionAction]) -> Option<Duration> {
    actions.iter().find_map(|action| match action {
        SessionAction::ScheduleReconnect(delay) => Some(*delay),
        _ => None,
    })
}
