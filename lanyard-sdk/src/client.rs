use crate::connection;
use crate::event::Event;
use crate::event_handler::EventHandler;
use crate::sdk_error::SdkError;
use std::sync::Arc;
use tokio::sync::watch;

/// Defines the client itself; the presence widget is driven entirely through an instance of
/// this struct. It owns the connection lifecycle: connecting, the hello/subscribe handshake,
/// heartbeats and the fixed-delay reconnect all happen in the background once
/// [new][Client::new] returns.
pub struct Client {
    event_rx: async_channel::Receiver<Event>,
    shutdown_tx: watch::Sender<bool>,
}

impl Client {
    /// Validates the endpoint, defines the channels, spawns the connection loop and returns a
    /// new instance. Must be called from within a tokio runtime.
    pub fn new(endpoint: String, subject_id: String) -> Result<Self, SdkError> {
        if !endpoint.starts_with("ws://") && !endpoint.starts_with("wss://") {
            return Err(SdkError::InvalidEndpoint);
        }

        let (event_tx, event_rx) = async_channel::bounded::<Event>(32);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        tokio::spawn(connection::run(endpoint, subject_id, event_tx, shutdown_rx));

        Ok(Self {
            event_rx,
            shutdown_tx,
        })
    }

    /// Adds a handler closure. This is the preferred method of handling events.
    pub fn add_event_handler_closure<F>(&self, f: F)
    where
        F: Fn(Event) + Send + 'static,
    {
        let event_rx = self.event_rx.clone();
        tokio::spawn(async move {
            while let Ok(event) = event_rx.recv().await {
                f(event);
            }
        });
    }

    /// Adds a new handler that implements the [EventHandler] trait, for embedders that need
    /// async handling or shared handler state. Prefer
    /// [`add_event_handler_closure`][Client::add_event_handler_closure] otherwise.
    pub fn add_event_handler(&self, handler: Arc<dyn EventHandler>) {
        let event_rx = self.event_rx.clone();
        tokio::spawn(async move {
            while let Ok(event) = event_rx.recv().await {
                handler.handle(event).await;
            }
        });
    }

    /// Disconnects from the gateway and stops the reconnect loop. Dropping the client has the
    /// same effect.
    pub fn disconnect(&self) {
        let _ = self.shutdown_tx.send(true);
    }
}
