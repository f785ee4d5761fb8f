use crate::gateway::envelope::{Envelope, opcode};
use crate::models::presence::Presence;
use crate::sdk_error::SdkError;

/// A decoded inbound frame.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum GatewayEvent {
    Hello { heartbeat_interval: u64 },
    PresenceEvent(Presence),
    /// Recognized envelope, unhandled operation code.
    Unknown,
}

/// Decodes an inbound text frame. Frames that fail the envelope or payload
/// structure return [MalformedPresenceEvent][SdkError::MalformedPresenceEvent]
/// and are dropped by the caller; the connection stays up.
pub(crate) fn into_gateway_event(frame: &str) -> Result<GatewayEvent, SdkError> {
    let envelope: Envelope =
        serde_json::from_str(frame).or(Err(SdkError::MalformedPresenceEvent))?;

    match envelope.op {
        opcode::HELLO => {
            let heartbeat_interval = envelope
                .d
                .as_ref()
                .and_then(|d| d.get("heartbeat_interval"))
                .and_then(|interval| interval.as_u64())
                .ok_or(SdkError::MalformedPresenceEvent)?;

            Ok(GatewayEvent::Hello { heartbeat_interval })
        }

        opcode::EVENT => {
            let payload = envelope.d.ok_or(SdkError::MalformedPresenceEvent)?;
            let presence =
                serde_json::from_value(payload).or(Err(SdkError::MalformedPresenceEvent))?;

            Ok(GatewayEvent::PresenceEvent(presence))
        }

        _ => Ok(GatewayEvent::Unknown),
    }
}
