use crate::playback::domain::sentence_locator::SentenceLocator;
use crate::transcript::domain::caption_entry::CaptionEntry;

use super::practice_context::PracticeContext;

/// Follow-along mode: the highlight tracks the playhead on every tick.
///
/// Navigation jumps the playhead without changing the play/pause state.
#[derive(Debug, Default)]
pub struct ListeningController {
    active: Option<usize>,
}

impl ListeningController {
    pub fn enter(current_time: f64, entries: &[CaptionEntry]) -> Self {
        Self {
            active: SentenceLocator::locate(current_time, entries),
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn on_time_update(&mut self, ctx: &PracticeContext<'_>) {
        self.active = SentenceLocator::locate(ctx.current_time(), ctx.entries);
    }

    /// Jumps to the sentence after the active one, or after the playhead
    /// when it sits in a gap.
    pub fn next(&mut self, ctx: &mut PracticeContext<'_>) -> bool {
        let t = ctx.current_time();
        let target = match self.active {
            Some(index) => Some(index + 1),
            None => ctx.entries.iter().position(|entry| entry.start_time > t),
        };
        self.jump(ctx, target)
    }

    /// Jumps to the sentence before the active one, or before the playhead
    /// when it sits in a gap.
    pub fn previous(&mut self, ctx: &mut PracticeContext<'_>) -> bool {
        let t = ctx.current_time();
        let target = match self.active {
            Some(index) => index.checked_sub(1),
            None => ctx.entries.iter().rposition(|entry| entry.end_time < t),
        };
        self.jump(ctx, target)
    }

    /// Restarts the active sentence.
    pub fn replay(&mut self, ctx: &mut PracticeContext<'_>) -> bool {
        self.jump(ctx, self.active)
    }

    pub fn seek_to_sentence(&mut self, ctx: &mut PracticeContext<'_>, index: usize) -> bool {
        self.jump(ctx, Some(index))
    }

    fn jump(&mut self, ctx: &mut PracticeContext<'_>, target: Option<usize>) -> bool {
        let Some(index) = target else {
            return false;
        };
        if !ctx.jump_to(index, false) {
            return false;
        }
        self.active = Some(index);
        true
    }
}
