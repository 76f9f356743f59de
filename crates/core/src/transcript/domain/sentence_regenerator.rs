use super::caption_entry::{CaptionEntry, SentenceEntry};

const TERMINAL_PUNCTUATION: &[char] = &['.', '!', '?'];

/// Merges fragmented caption entries into sentence-aligned entries.
///
/// A group of consecutive entries is finalized, in priority order, when:
/// 1. its space-joined text ends in `.`, `!` or `?`;
/// 2. it contains the last input entry;
/// 3. the next entry's text starts with an uppercase letter.
///
/// Rule 3 is a casing heuristic, not grammar. Re-running the regenerator over
/// its own output leaves punctuated, capitalized sentences alone, but callers
/// must not treat it as a fixed point for irregularly cased transcripts.
pub struct SentenceRegenerator;

impl SentenceRegenerator {
    pub fn regenerate(entries: &[CaptionEntry]) -> Vec<SentenceEntry> {
        let mut sentences = Vec::new();
        let mut group: Vec<&CaptionEntry> = Vec::new();

        for (i, entry) in entries.iter().enumerate() {
            group.push(entry);

            let is_last = i + 1 == entries.len();
            let next_starts_capital = entries
                .get(i + 1)
                .is_some_and(|next| starts_with_uppercase(&next.text));

            if ends_sentence(&merged_text(&group)) || is_last || next_starts_capital {
                sentences.push(finalize(&group, sentences.len() + 1));
                group.clear();
            }
        }

        log::debug!(
            "Regenerated {} caption entries into {} sentences",
            entries.len(),
            sentences.len()
        );
        sentences
    }
}

/// Joins trimmed texts with single spaces. Empty texts contribute nothing.
fn merged_text(group: &[&CaptionEntry]) -> String {
    group
        .iter()
        .map(|e| e.text.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn ends_sentence(text: &str) -> bool {
    text.trim_end().ends_with(TERMINAL_PUNCTUATION)
}

fn starts_with_uppercase(text: &str) -> bool {
    text.trim_start().chars().next().is_some_and(char::is_uppercase)
}

fn finalize(group: &[&CaptionEntry], index: usize) -> SentenceEntry {
    // Callers only finalize non-empty groups
    let first = group[0];
    let last = group[group.len() - 1];
    CaptionEntry::new(index, first.start_time, last.end_time, merged_text(group))
}
