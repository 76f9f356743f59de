use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PracticeMode {
    /// Follow-along with a live highlight, no gating.
    #[default]
    Listening,
    /// Type each sentence; advancing requires a correct answer or a reveal.
    Dictation,
    /// Repeat each sentence aloud while it is recorded.
    Shadowing,
}

impl PracticeMode {
    pub const ALL: [PracticeMode; 3] = [
        PracticeMode::Listening,
        PracticeMode::Dictation,
        PracticeMode::Shadowing,
    ];

    /// Whether the mode holds a pinned sentence and takes keyboard shortcuts.
    pub fn is_gated(self) -> bool {
        !matches!(self, PracticeMode::Listening)
    }
}

impl fmt::Display for PracticeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PracticeMode::Listening => write!(f, "listening"),
            PracticeMode::Dictation => write!(f, "dictation"),
            PracticeMode::Shadowing => write!(f, "shadowing"),
        }
    }
}

impl FromStr for PracticeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PracticeMode::ALL
            .into_iter()
            .find(|mode| mode.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown practice mode: {s}"))
    }
}

/// Shadowing sub-state, orthogonal to the mode itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShadowingSubmode {
    /// Auto-stop after each sentence, one recording per sentence.
    #[default]
    Sentence,
    /// Continuous playback with a single whole-session recording.
    Full,
}

impl fmt::Display for ShadowingSubmode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShadowingSubmode::Sentence => write!(f, "sentence"),
            ShadowingSubmode::Full => write!(f, "full"),
        }
    }
}
