use std::collections::BTreeSet;

use serde::Serialize;

use super::equivalence_table::EquivalenceTable;

/// Outcome of comparing typed text against a reference sentence.
///
/// `is_correct` and `matched_words` are computed independently and can
/// disagree: the first accepts any equivalent phrasing of the whole
/// sentence, the second only compares words position by position.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordMatchResult {
    pub is_correct: bool,
    /// One flag per reference word.
    pub matched_words: Vec<bool>,
    pub correct_words: Vec<String>,
    pub user_words: Vec<String>,
}

impl WordMatchResult {
    pub fn matched_count(&self) -> usize {
        self.matched_words.iter().filter(|m| **m).count()
    }

    /// Fraction of reference words matched in place, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.matched_words.is_empty() {
            return 0.0;
        }
        self.matched_count() as f64 / self.matched_words.len() as f64
    }
}

/// Lenient dictation checker: ignores case and punctuation and accepts
/// contraction variants from an [`EquivalenceTable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TextComparator {
    table: EquivalenceTable,
}

impl TextComparator {
    pub fn new(table: EquivalenceTable) -> Self {
        Self { table }
    }

    pub fn compare(&self, user_input: &str, reference_text: &str) -> WordMatchResult {
        let normalized_reference = normalize_text(reference_text);
        let normalized_user = normalize_text(user_input);
        let correct_words = split_words(&normalized_reference);
        let user_words = split_words(&normalized_user);

        if correct_words.is_empty() || user_words.is_empty() {
            return WordMatchResult {
                is_correct: false,
                matched_words: Vec::new(),
                correct_words,
                user_words,
            };
        }

        let is_correct = self.matches_any_phrasing(&correct_words, &normalized_user);
        let matched_words = correct_words
            .iter()
            .enumerate()
            .map(|(i, correct)| {
                user_words.get(i).is_some_and(|user| {
                    correct == user || self.table.are_equivalent(correct, user)
                })
            })
            .collect();

        WordMatchResult {
            is_correct,
            matched_words,
            correct_words,
            user_words,
        }
    }

    pub fn typing_progress(&self, user_input: &str, reference_text: &str) -> f64 {
        self.compare(user_input, reference_text).progress()
    }

    /// Tests `user` against every phrasing obtained by swapping each
    /// reference word for any of its variants.
    ///
    /// Equivalent to building the full cross-product and checking
    /// membership, but walks it as a set of reachable byte offsets into
    /// `user` so the product is never materialized.
    fn matches_any_phrasing(&self, reference_words: &[String], user: &str) -> bool {
        let mut offsets = BTreeSet::from([0usize]);

        for (i, word) in reference_words.iter().enumerate() {
            let variants = self.table.variants(word);
            let mut reached = BTreeSet::new();

            for &offset in &offsets {
                let rest = &user[offset..];
                let rest = if i == 0 {
                    rest
                } else {
                    match rest.strip_prefix(' ') {
                        Some(r) => r,
                        None => continue,
                    }
                };
                let base = user.len() - rest.len();
                for variant in &variants {
                    if rest.starts_with(variant) {
                        reached.insert(base + variant.len());
                    }
                }
            }

            if reached.is_empty() {
                return false;
            }
            offsets = reached;
        }

        offsets.contains(&user.len())
    }
}

/// Lowercases, drops everything that is not a word character or whitespace,
/// collapses whitespace runs to one space and trims.
pub fn normalize_text(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn split_words(normalized: &str) -> Vec<String> {
    normalized.split_whitespace().map(str::to_string).collect()
}

/// The reference sentence as shown during dictation: words not yet matched
/// have their letters and digits replaced with `_`; punctuation stays.
pub fn masked_reference(reference_text: &str, matched_words: &[bool], show_answer: bool) -> String {
    if show_answer {
        return reference_text.to_string();
    }
    reference_text
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            if matched_words.get(i).copied().unwrap_or(false) {
                word.to_string()
            } else {
                word.chars()
                    .map(|c| if c.is_alphanumeric() { '_' } else { c })
                    .collect()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
