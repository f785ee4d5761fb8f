use crate::gateway::event_matcher::GatewayEvent;
use crate::models::presence::Presence;
use std::time::Duration;

/// Fixed delay between a closed connection and the next attempt. Retries are
/// unbounded and the delay never grows.
pub(crate) const RECONNECT_DELAY: Duration = Duration::from_millis(5000);

/// Connection lifecycle. At most one live connection exists per client; a new
/// one is only opened after the previous one has fully closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionState {
    Disconnected,
    Connecting,
    AwaitingHello,
    Subscribed,
    Closed,
}

/// Everything that can happen to a session.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SessionInput {
    ConnectStarted,
    SocketOpened,
    Frame(GatewayEvent),
    SocketClosed,
    /// Socket errors force a close rather than an in-place repair.
    SocketError,
    ReconnectDelayElapsed,
}

/// Side effects for the connection loop to carry out, in order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SessionAction {
    StartHeartbeat(Duration),
    StopHeartbeat,
    SendSubscribe,
    Forward(Presence),
    ScheduleReconnect(Duration),
}

/// Pure transition function from `(state, input)` to `(state, actions)`.
pub(crate) fn step(
    state: SessionState,
    input: SessionInput,
) -> (SessionState, Vec<SessionAction>) {
    match input {
        SessionInput::ConnectStarted => match state {
            SessionState::Disconnected => (SessionState::Connecting, Vec::new()),
            other => (other, Vec::new()),
        },

        SessionInput::SocketOpened => match state {
            SessionState::Connecting => (SessionState::AwaitingHello, Vec::new()),
            other => (other, Vec::new()),
        },

        SessionInput::Frame(frame) => match (state, frame) {
            (SessionState::AwaitingHello, GatewayEvent::Hello { heartbeat_interval }) => (
                SessionState::Subscribed,
                vec![
                    SessionAction::StartHeartbeat(Duration::from_millis(heartbeat_interval)),
                    SessionAction::SendSubscribe,
                ],
            ),

            // A repeated hello renegotiates the cadence without a second subscribe.
            (SessionState::Subscribed, GatewayEvent::Hello { heartbeat_interval }) => (
                SessionState::Subscribed,
                vec![
                    SessionAction::StopHeartbeat,
                    SessionAction::StartHeartbeat(Duration::from_millis(heartbeat_interval)),
                ],
            ),

            (SessionState::Subscribed, GatewayEvent::PresenceEvent(presence)) => (
                SessionState::Subscribed,
                vec![SessionAction::Forward(presence)],
            ),

            // Unknown opcodes, and frames outside the subscription, are ignored.
            (state, _) => (state, Vec::new()),
        },

        SessionInput::SocketClosed | SessionInput::SocketError => match state {
            SessionState::Connecting | SessionState::AwaitingHello | SessionState::Subscribed => (
                SessionState::Closed,
                vec![
                    SessionAction::StopHeartbeat,
                    SessionAction::ScheduleReconnect(RECONNECT_DELAY),
                ],
            ),

            // A close for a connection already torn down must not schedule a
            // second attempt.
            other => (other, Vec::new()),
        },

        SessionInput::ReconnectDelayElapsed => match state {
            SessionState::Closed => (SessionState::Disconnected, Vec::new()),
            other => (other, Vec::new()),
        },
    }
}
