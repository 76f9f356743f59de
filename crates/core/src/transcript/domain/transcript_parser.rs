use super::caption_entry::CaptionEntry;

/// Domain interface for turning raw subtitle text into caption entries.
///
/// Implementations are format-specific and lenient: malformed blocks are
/// dropped and parsing continues. Entries come back in source order with
/// `index` reassigned as output position + 1.
pub trait TranscriptParser: Send {
    fn parse(&self, content: &str) -> Vec<CaptionEntry>;
}
