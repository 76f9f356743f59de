use super::caption_entry::{CaptionEntry, SentenceEntry};
use super::sentence_regenerator::SentenceRegenerator;
use super::transcript_stats::TranscriptStats;

/// Preview-then-decide wrapper around [`SentenceRegenerator`].
///
/// The original entries are kept until the caller confirms; cancelling hands
/// them back untouched.
pub struct TranscriptRegeneration {
    original: Vec<CaptionEntry>,
    preview: Option<Vec<SentenceEntry>>,
}

impl TranscriptRegeneration {
    pub fn new(original: Vec<CaptionEntry>) -> Self {
        Self {
            original,
            preview: None,
        }
    }

    pub fn original(&self) -> &[CaptionEntry] {
        &self.original
    }

    pub fn original_stats(&self) -> TranscriptStats {
        TranscriptStats::of(&self.original)
    }

    /// Computes (once) and returns the regenerated sequence.
    pub fn preview(&mut self) -> &[SentenceEntry] {
        let original = &self.original;
        self.preview
            .get_or_insert_with(|| SentenceRegenerator::regenerate(original))
    }

    pub fn preview_stats(&self) -> Option<TranscriptStats> {
        self.preview.as_deref().map(TranscriptStats::of)
    }

    /// Returns the regenerated sequence, or `None` if no preview was computed.
    pub fn confirm(self) -> Option<Vec<SentenceEntry>> {
        self.preview
    }

    pub fn cancel(self) -> Vec<CaptionEntry> {
        self.original
    }
}
