/// Trailing buffer before a pinned sentence's end at which playback auto-stops.
pub const AUTO_STOP_TOLERANCE: f64 = 0.1;

pub const DEFAULT_SEEK_STEP: f64 = 5.0;
pub const DEFAULT_LONG_SEEK_STEP: f64 = 10.0;

pub const PLAYBACK_SPEEDS: &[f64] = &[0.25, 0.5, 0.75, 1.0];

/// Sentences with at least this many words count as "long" in transcript stats.
pub const LONG_SENTENCE_WORDS: usize = 20;

/// Number of leading entries shown in a transcript preview.
pub const PREVIEW_ENTRIES: usize = 3;

pub const NO_TRANSCRIPT_PREVIEW: &str = "No transcript available";
