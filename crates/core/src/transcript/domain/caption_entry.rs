use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::shared::settings_error::{validate_speed, validate_volume, SettingsError};

static RE_MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// One timed unit of transcript text.
///
/// Produced by the subtitle parsers (one per cue) and by the sentence
/// regenerator (one per merged sentence). `index` is 1-based and dense in
/// output order; `start_time <= end_time` always holds for parser output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionEntry {
    pub index: usize,
    pub start_time: f64,
    pub end_time: f64,
    pub text: String,
    /// Playback speed override; `None` means "use the global setting".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    /// Volume override in `0.0..=1.0`; `None` means "use the global setting".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

/// A caption entry that has been merged into a full sentence. Same shape.
pub type SentenceEntry = CaptionEntry;

impl CaptionEntry {
    pub fn new(index: usize, start_time: f64, end_time: f64, text: impl Into<String>) -> Self {
        Self {
            index,
            start_time,
            end_time,
            text: text.into(),
            speed: None,
            volume: None,
        }
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Boundary-inclusive on both ends.
    pub fn contains(&self, time: f64) -> bool {
        self.start_time <= time && time <= self.end_time
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Text with markup tags removed and whitespace collapsed, for display only.
    pub fn display_text(&self) -> String {
        let stripped = RE_MARKUP_TAG.replace_all(&self.text, "");
        RE_WHITESPACE.replace_all(&stripped, " ").trim().to_string()
    }

    pub fn set_speed(&mut self, speed: Option<f64>) -> Result<(), SettingsError> {
        self.speed = speed.map(validate_speed).transpose()?;
        Ok(())
    }

    pub fn set_volume(&mut self, volume: Option<f64>) -> Result<(), SettingsError> {
        self.volume = volume.map(validate_volume).transpose()?;
        Ok(())
    }
}
