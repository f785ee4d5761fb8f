use crate::sdk_error::SdkError;
use std::fs;
use std::path::Path;

/// The two widget preferences, persisted as `key=value` lines in a small store
/// file. Read once at startup; they survive across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    /// Key `sfx`. Any value other than `off`, or an absent key, means enabled.
    pub sound_enabled: bool,
    /// Key `theme`. Dark only when the value is exactly `dark`.
    pub dark_theme: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            dark_theme: false,
        }
    }
}

impl Preferences {
    /// Loads from the store. A missing or unreadable store yields the defaults,
    /// as do missing keys.
    pub fn load(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };

        let mut preferences = Self::default();
        for line in contents.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };

            match key.trim() {
                "sfx" => preferences.sound_enabled = value.trim() != "off",
                "theme" => preferences.dark_theme = value.trim() == "dark",
                _ => (),
            }
        }

        preferences
    }

    pub fn save(&self, path: &Path) -> Result<(), SdkError> {
        let contents = format!(
            "sfx={}\ntheme={}\n",
            if self.sound_enabled { "on" } else { "off" },
            if self.dark_theme { "dark" } else { "light" },
        );

        fs::write(path, contents).or(Err(SdkError::CouldNotWritePreferences))
    }

    /// Flips the sound flag and returns the new value.
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }

    /// Flips the theme flag and returns the new value.
    pub fn toggle_theme(&mut self) -> bool {
        self.dark_theme = !self.dark_theme;
        self.dark_theme
    }
}
