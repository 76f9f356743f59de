use crate::playback::domain::playback_cursor::PlaybackCursor;
use crate::practice::domain::practice_config::PracticeConfig;
use crate::transcript::domain::caption_entry::CaptionEntry;

/// Borrowed session state a mode controller acts on.
pub struct PracticeContext<'a> {
    pub entries: &'a [CaptionEntry],
    pub cursor: &'a mut PlaybackCursor,
    pub config: &'a PracticeConfig,
}

impl PracticeContext<'_> {
    /// Seeks to the start of entry `index` with its overrides applied.
    /// Returns `false` when no such entry exists.
    pub fn jump_to(&mut self, index: usize, resume: bool) -> bool {
        match self.entries.get(index) {
            Some(entry) => {
                self.cursor
                    .jump_to(entry, &self.config.playback_settings(), resume);
                true
            }
            None => false,
        }
    }

    pub fn current_time(&self) -> f64 {
        self.cursor.current_time()
    }
}
