use crate::comparison::domain::text_comparator::{masked_reference, TextComparator, WordMatchResult};
use crate::playback::domain::sentence_locator::{SentenceLocator, SentencePin};
use crate::transcript::domain::caption_entry::CaptionEntry;

use super::practice_context::PracticeContext;

/// Typing-recall mode.
///
/// Holds a pinned sentence, checks every keystroke against it, and only
/// lets the learner move on once the answer is correct or revealed.
#[derive(Debug)]
pub struct DictationController {
    pin: SentencePin,
    comparator: TextComparator,
    input: String,
    show_answer: bool,
    result: WordMatchResult,
}

impl DictationController {
    pub fn enter(current_time: f64, entries: &[CaptionEntry], comparator: TextComparator) -> Self {
        Self {
            pin: SentencePin::from_playhead(current_time, entries),
            comparator,
            input: String::new(),
            show_answer: false,
            result: WordMatchResult::default(),
        }
    }

    pub fn pinned_index(&self) -> usize {
        self.pin.index()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn show_answer(&self) -> bool {
        self.show_answer
    }

    pub fn result(&self) -> &WordMatchResult {
        &self.result
    }

    pub fn type_input(&mut self, ctx: &PracticeContext<'_>, input: &str) -> &WordMatchResult {
        self.input = input.to_string();
        self.result = match self.pin.sentence(ctx.entries) {
            Some(sentence) => self.comparator.compare(&self.input, &sentence.text),
            None => WordMatchResult::default(),
        };
        &self.result
    }

    /// Reveals the pinned sentence. Unlocks `next` without marking the
    /// answer correct.
    pub fn reveal_answer(&mut self) {
        self.show_answer = true;
    }

    pub fn can_advance(&self) -> bool {
        self.result.is_correct || self.show_answer
    }

    pub fn typing_progress(&self) -> f64 {
        self.result.progress()
    }

    /// Pinned sentence text with unmatched words masked, `None` for an
    /// empty transcript.
    pub fn masked_text(&self, entries: &[CaptionEntry]) -> Option<String> {
        self.pin.sentence(entries).map(|sentence| {
            masked_reference(&sentence.text, &self.result.matched_words, self.show_answer)
        })
    }

    /// Advances to the next sentence and resumes playback there. A no-op
    /// while the answer is neither correct nor revealed, and at the last
    /// sentence.
    pub fn next(&mut self, ctx: &mut PracticeContext<'_>) -> bool {
        if !self.can_advance() {
            log::debug!("dictation: next blocked at sentence {}", self.pin.index());
            return false;
        }
        if !self.pin.advance(ctx.entries.len()) {
            return false;
        }
        self.start_sentence(ctx);
        true
    }

    pub fn previous(&mut self, ctx: &mut PracticeContext<'_>) -> bool {
        if !self.pin.retreat() {
            return false;
        }
        self.start_sentence(ctx);
        true
    }

    /// Plays the pinned sentence again from its start. Typed input is kept.
    pub fn replay(&mut self, ctx: &mut PracticeContext<'_>) -> bool {
        ctx.jump_to(self.pin.index(), true)
    }

    pub fn seek_to_sentence(&mut self, ctx: &mut PracticeContext<'_>, index: usize) -> bool {
        if !self.pin.move_to(index, ctx.entries.len()) {
            return false;
        }
        self.start_sentence(ctx);
        true
    }

    /// Re-pins to the sentence under the playhead, e.g. after a manual
    /// scrub. Input is cleared only if the pin moved.
    pub fn sync_to_playhead(&mut self, ctx: &PracticeContext<'_>) {
        let pin = SentencePin::from_playhead(ctx.current_time(), ctx.entries);
        if pin != self.pin {
            self.pin = pin;
            self.clear_attempt();
        }
    }

    /// Auto-stops playback at the end of the pinned sentence.
    pub fn on_time_update(&mut self, ctx: &mut PracticeContext<'_>) {
        auto_stop(&self.pin, ctx);
    }

    fn start_sentence(&mut self, ctx: &mut PracticeContext<'_>) {
        self.clear_attempt();
        ctx.jump_to(self.pin.index(), true);
    }

    fn clear_attempt(&mut self) {
        self.input.clear();
        self.show_answer = false;
        self.result = WordMatchResult::default();
    }
}

/// Pauses playback once the playhead reaches the pinned sentence's end.
pub(super) fn auto_stop(pin: &SentencePin, ctx: &mut PracticeContext<'_>) {
    if !ctx.cursor.is_playing() {
        return;
    }
    let Some(sentence) = pin.sentence(ctx.entries) else {
        return;
    };
    let t = ctx.current_time();
    if SentenceLocator::should_pause(t, sentence, ctx.config.auto_stop_tolerance) {
        log::debug!(
            "auto-stop at {t:.3}s, end of sentence {} ({:.3}s)",
            pin.index(),
            sentence.end_time
        );
        ctx.cursor.pause();
    }
}
