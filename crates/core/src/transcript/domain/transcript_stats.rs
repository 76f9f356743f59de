use serde::Serialize;

use super::caption_entry::CaptionEntry;
use crate::shared::constants::{LONG_SENTENCE_WORDS, NO_TRANSCRIPT_PREVIEW, PREVIEW_ENTRIES};

/// Summary figures shown before and after a regeneration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptStats {
    pub total_sentences: usize,
    pub total_words: usize,
    pub average_words_per_sentence: f64,
    pub short_sentences: usize,
    pub long_sentences: usize,
}

impl TranscriptStats {
    pub fn of(entries: &[CaptionEntry]) -> Self {
        let total_sentences = entries.len();
        let total_words = count_words(entries);
        let average_words_per_sentence = if total_sentences > 0 {
            total_words as f64 / total_sentences as f64
        } else {
            0.0
        };
        let long_sentences = entries
            .iter()
            .filter(|e| e.word_count() >= LONG_SENTENCE_WORDS)
            .count();

        Self {
            total_sentences,
            total_words,
            average_words_per_sentence,
            short_sentences: total_sentences - long_sentences,
            long_sentences,
        }
    }
}

pub fn count_words(entries: &[CaptionEntry]) -> usize {
    entries.iter().map(CaptionEntry::word_count).sum()
}

/// First few entry texts joined by spaces, with `...` when more follow.
pub fn transcript_preview(entries: &[CaptionEntry]) -> String {
    if entries.is_empty() {
        return NO_TRANSCRIPT_PREVIEW.to_string();
    }
    let preview = entries
        .iter()
        .take(PREVIEW_ENTRIES)
        .map(|e| e.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    if entries.len() > PREVIEW_ENTRIES {
        format!("{preview}...")
    } else {
        preview
    }
}
