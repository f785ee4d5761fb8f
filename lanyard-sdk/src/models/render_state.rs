use crate::models::presence::Presence;
use crate::status::Status;

/// What the presence widget shows. [apply][RenderState::apply] folds the latest
/// snapshot in: fields the payload omits keep their previous value, while the
/// status and the activity line are always recomputed from the latest payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    /// Avatar image source, derived from the subject id and avatar hash.
    pub avatar_url: Option<String>,
    /// Uppercased username.
    pub username: Option<String>,
    pub status: Status,
    /// Uppercased status label, e.g. `IDLE`.
    pub status_text: String,
    pub activity: Option<ActivityLine>,
    /// Whether the activity block should be shown at all.
    pub activity_visible: bool,
}

/// The single activity line under the status indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLine {
    pub name: String,
    pub detail: String,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            avatar_url: None,
            username: None,
            status: Status::Offline,
            status_text: Status::Offline.label().to_string(),
            activity: None,
            activity_visible: false,
        }
    }
}

impl RenderState {
    /// Applies a presence snapshot. Applying the same snapshot twice leaves the
    /// state unchanged.
    pub fn apply(&mut self, presence: &Presence) {
        if let Some(avatar) = &presence.user.avatar {
            self.avatar_url = Some(format!(
                "https://cdn.discordapp.com/avatars/{}/{avatar}.png",
                presence.user.id
            ));
        }

        if let Some(username) = &presence.user.username {
            self.username = Some(username.to_uppercase());
        }

        self.status = presence.status;
        self.status_text = presence.status.label().to_string();

        self.activity = presence.primary_activity().map(|activity| ActivityLine {
            name: activity.name.to_uppercase(),
            detail: activity
                .details
                .as_deref()
                .or(activity.state.as_deref())
                .unwrap_or_default()
                .to_uppercase(),
        });

        self.activity_visible = self.activity.is_some();
    }
}
