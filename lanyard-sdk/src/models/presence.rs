use crate::status::Status;
use serde::{Deserialize, Serialize};

/// Activity entries with this kind carry a custom status and are never selected
/// for the activity line.
const CUSTOM_STATUS_KIND: i64 = 4;

/// A subject's full presence snapshot. Every event frame carries a complete
/// snapshot that replaces the previous one; nothing is merged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Presence {
    #[serde(rename = "discord_user")]
    pub user: Subject,
    #[serde(rename = "discord_status", default)]
    pub status: Status,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Presence {
    /// The first activity that is not a custom status entry, if any.
    pub fn primary_activity(&self) -> Option<&Activity> {
        self.activities
            .iter()
            .find(|activity| activity.kind != CUSTOM_STATUS_KIND)
    }
}

/// The watched subject's identity as the gateway reports it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Subject {
    pub id: String,
    pub username: Option<String>,
    /// Avatar hash, not a URL. [RenderState][crate::models::render_state::RenderState]
    /// derives the image URL from it.
    pub avatar: Option<String>,
}

/// One entry of the subject's activity list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: i64,
    pub name: String,
    pub details: Option<String>,
    pub state: Option<String>,
}
