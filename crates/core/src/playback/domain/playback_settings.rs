use crate::shared::settings_error::{validate_speed, validate_volume, SettingsError};
use crate::transcript::domain::caption_entry::CaptionEntry;

/// Global playback rate and gain, overridable per entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSettings {
    pub speed: f64,
    pub volume: f64,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            speed: 1.0,
            volume: 1.0,
        }
    }
}

impl PlaybackSettings {
    pub fn new(speed: f64, volume: f64) -> Result<Self, SettingsError> {
        Ok(Self {
            speed: validate_speed(speed)?,
            volume: validate_volume(volume)?,
        })
    }

    pub fn effective_speed(&self, entry: &CaptionEntry) -> f64 {
        entry.speed.unwrap_or(self.speed)
    }

    pub fn effective_volume(&self, entry: &CaptionEntry) -> f64 {
        entry.volume.unwrap_or(self.volume)
    }

    /// Settings to apply while `entry` is playing.
    pub fn for_entry(&self, entry: &CaptionEntry) -> Self {
        Self {
            speed: self.effective_speed(entry),
            volume: self.effective_volume(entry),
        }
    }
}
