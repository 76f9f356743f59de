use serde::{Deserialize, Serialize};

use crate::playback::domain::playback_settings::PlaybackSettings;
use crate::shared::constants::{AUTO_STOP_TOLERANCE, DEFAULT_LONG_SEEK_STEP, DEFAULT_SEEK_STEP};
use crate::shared::settings_error::{validate_speed, validate_volume, SettingsError};

use super::practice_mode::ShadowingSubmode;

/// Learner preferences that shape a practice session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PracticeConfig {
    pub playback_speed: f64,
    pub volume: f64,
    /// Seconds before a pinned sentence's end at which auto-stop fires.
    pub auto_stop_tolerance: f64,
    pub seek_step: f64,
    pub long_seek_step: f64,
    pub shadowing_submode: ShadowingSubmode,
    /// Regenerate sentences right after a transcript is loaded.
    pub auto_regenerate: bool,
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            playback_speed: 1.0,
            volume: 1.0,
            auto_stop_tolerance: AUTO_STOP_TOLERANCE,
            seek_step: DEFAULT_SEEK_STEP,
            long_seek_step: DEFAULT_LONG_SEEK_STEP,
            shadowing_submode: ShadowingSubmode::default(),
            auto_regenerate: false,
        }
    }
}

impl PracticeConfig {
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_speed(self.playback_speed)?;
        validate_volume(self.volume)?;
        if !(self.auto_stop_tolerance.is_finite() && self.auto_stop_tolerance >= 0.0) {
            return Err(SettingsError::Tolerance(self.auto_stop_tolerance));
        }
        for step in [self.seek_step, self.long_seek_step] {
            if !(step.is_finite() && step > 0.0) {
                return Err(SettingsError::SeekStep(step));
            }
        }
        Ok(())
    }

    pub fn playback_settings(&self) -> PlaybackSettings {
        PlaybackSettings {
            speed: self.playback_speed,
            volume: self.volume,
        }
    }
}
