use serde::{Deserialize, Serialize};

/// Coarse presence status pushed by the gateway. Wire strings the SDK does not
/// recognize decode as [Offline][Status::Offline].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Online,
    Idle,
    Dnd,
    #[default]
    Offline,
}

impl Status {
    /// Lowercase variant name, as carried on the wire and used for indicator styling.
    pub fn variant(&self) -> &'static str {
        match self {
            Status::Online => "online",
            Status::Idle => "idle",
            Status::Dnd => "dnd",
            Status::Offline => "offline",
        }
    }

    /// Uppercase label shown next to the status indicator.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Online => "ONLINE",
            Status::Idle => "IDLE",
            Status::Dnd => "DND",
            Status::Offline => "OFFLINE",
        }
    }
}

impl From<String> for Status {
    fn from(value: String) -> Self {
        match value.as_str() {
            "online" => Status::Online,
            "idle" => Status::Idle,
            "dnd" => Status::Dnd,
            _ => Status::Offline,
        }
    }
}

impl From<Status> for String {
    fn from(value: Status) -> Self {
        value.variant().to_string()
    }
}
