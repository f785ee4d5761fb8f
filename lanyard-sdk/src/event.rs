use crate::models::presence::Presence;

/// Connection lifecycle and presence events returned to handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The socket opened; the hello exchange is underway.
    Connected,
    /// The gateway said hello and the subscription for the subject was sent.
    Subscribed,
    /// A fresh presence snapshot for the subject.
    PresenceUpdate(Presence),
    /// Lost connection to the gateway. A reconnect is already scheduled.
    Disconnected,
}
