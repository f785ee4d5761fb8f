use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Operation codes carried in the envelope. Inbound codes outside this list are
/// ignored for forward compatibility.
pub(crate) mod opcode {
    /// Inbound presence event.
    pub const EVENT: u64 = 0;
    /// First inbound frame; carries the heartbeat interval.
    pub const HELLO: u64 = 1;
    /// Outbound subscription request naming the subject.
    pub const SUBSCRIBE: u64 = 2;
    /// Outbound keep-alive.
    pub const HEARTBEAT: u64 = 3;
}

/// The `{op, d}` envelope every gateway frame uses. The operation code is kept
/// wide so codes the SDK does not know about still decode and can be ignored.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub(crate) struct Envelope {
    pub(crate) op: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) d: Option<Value>,
}
