use futures_util::{SinkExt, StreamExt};
use log::{trace, warn};
use serde_json::{Value, json};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::tungstenite::Message;

/// Scripted stand-in for a presence gateway. Says hello on connect, answers the
/// first subscribe with a fixed presence snapshot, counts heartbeats and pushes
/// a follow-up snapshot once enough arrived.
pub struct MockGateway {
    /// Heartbeat interval advertised in the hello frame, in milliseconds.
    pub heartbeat_interval_ms: u64,
    /// Heartbeats to count before pushing the follow-up presence event.
    pub heartbeats_before_followup: u32,
    /// Close the first connection right after hello, to exercise reconnects.
    pub drop_first_connection: bool,
    /// Send a non-JSON frame and a broken event payload right after hello,
    /// to exercise the drop-malformed-frames path.
    pub garbage_after_hello: bool,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self {
            heartbeat_interval_ms: 250,
            heartbeats_before_followup: 3,
            drop_first_connection: false,
            garbage_after_hello: false,
        }
    }
}

impl MockGateway {
    /// Binds on 127.0.0.1 and serves connections in a background task. Pass
    /// port 0 for an ephemeral port; the bound port is returned.
    pub async fn listen(self, port: u16) -> u16 {
        let listener = TcpListener::bind(("127.0.0.1", port))
            .await
            .expect("Could not bind mock gateway");

        let port = listener
            .local_addr()
            .expect("Could not read mock gateway address")
            .port();

        tokio::spawn(async move {
            let mut first = true;
            while let Ok((stream, _)) = listener.accept().await {
                let drop_after_hello = self.drop_first_connection && first;
                first = false;

                tokio::spawn(serve(
                    stream,
                    self.heartbeat_interval_ms,
                    self.heartbeats_before_followup,
                    drop_after_hello,
                    self.garbage_after_hello,
                ));
            }
        });

        port
    }
}

async fn serve(
    stream: TcpStream,
    heartbeat_interval_ms: u64,
    heartbeats_before_followup: u32,
    drop_after_hello: bool,
    garbage_after_hello: bool,
) {
    let Ok(mut ws) = tokio_tungstenite::accept_async(stream).await else {
        warn!("Mock gateway handshake failed");
        return;
    };

    let hello = json!({ "op": 1, "d": { "heartbeat_interval": heartbeat_interval_ms } });
    if send(&mut ws, hello).await.is_err() {
        return;
    }

    if drop_after_hello {
        let _ = ws.close(None).await;
        return;
    }

    if garbage_after_hello {
        trace!("S: QNG 60");
        if ws.send(Message::text("QNG 60")).await.is_err() {
            return;
        }

        let broken = json!({ "op": 0, "d": { "oops": true } });
        if send(&mut ws, broken).await.is_err() {
            return;
        }
    }

    let mut subject = String::new();
    let mut heartbeats = 0;
    let mut followup_sent = false;

    while let Some(Ok(message)) = ws.next().await {
        let Message::Text(text) = message else {
            continue;
        };
        trace!("C: {text}");

        let Ok(frame) = serde_json::from_str::<Value>(text.as_str()) else {
            continue;
        };

        match frame.get("op").and_then(Value::as_u64) {
            Some(2) => {
                subject = frame
                    .get("d")
                    .and_then(|d| d.get("subscribe_to_id"))
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();

                let event = json!({
                    "op": 0,
                    "d": {
                        "discord_user": {
                            "id": subject,
                            "username": "waaeuw",
                            "avatar": "a1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6"
                        },
                        "discord_status": "idle",
                        "activities": [
                            { "type": 4, "name": "Custom Status", "state": "shipping commissions" },
                            { "type": 0, "name": "Editor", "details": "editing x.ts" }
                        ]
                    }
                });

                if send(&mut ws, event).await.is_err() {
                    break;
                }
            }

            Some(3) => {
                heartbeats += 1;
                if heartbeats < heartbeats_before_followup || followup_sent {
                    continue;
                }
                followup_sent = true;

                let event = json!({
                    "op": 0,
                    "d": {
                        "discord_user": { "id": subject },
                        "discord_status": "online",
                        "activities": []
                    }
                });

                if send(&mut ws, event).await.is_err() {
                    break;
                }
            }

            _ => (),
        }
    }
}

async fn send(
    ws: &mut tokio_tungstenite::WebSocketStream<TcpStream>,
    frame: Value,
) -> Result<(), tokio_tungstenite::tungstenite::Error> {
    let frame = frame.to_string();
    trace!("S: {frame}");
    ws.send(Message::text(frame)).await
}
