use thiserror::Error;

/// Rejected user-supplied playback setting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error("playback speed must be greater than 0, got {0}")]
    Speed(f64),
    #[error("volume must be between 0.0 and 1.0, got {0}")]
    Volume(f64),
    #[error("auto-stop tolerance must be a non-negative number, got {0}")]
    Tolerance(f64),
    #[error("seek step must be greater than 0, got {0}")]
    SeekStep(f64),
    #[error("no entry at index {index} (transcript has {len} entries)")]
    NoSuchEntry { index: usize, len: usize },
}

pub fn validate_speed(speed: f64) -> Result<f64, SettingsError> {
    if speed.is_finite() && speed > 0.0 {
        Ok(speed)
    } else {
        Err(SettingsError::Speed(speed))
    }
}

pub fn validate_volume(volume: f64) -> Result<f64, SettingsError> {
    if (0.0..=1.0).contains(&volume) {
        Ok(volume)
    } else {
        Err(SettingsError::Volume(volume))
    }
}
