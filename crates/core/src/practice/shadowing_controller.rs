use crate::playback::domain::sentence_locator::SentencePin;
use crate::practice::domain::practice_mode::ShadowingSubmode;
use crate::recording::domain::recording_capture::RecordingCapture;
use crate::recording::domain::recording_error::RecordingError;
use crate::recording::domain::recording_key::RecordingKey;
use crate::transcript::domain::caption_entry::CaptionEntry;

use super::dictation_controller::auto_stop;
use super::practice_context::PracticeContext;

/// What a recording toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingToggle {
    Started(RecordingKey),
    Stopped(RecordingKey),
}

/// Speech-repetition mode.
///
/// In the sentence submode playback stops after each sentence and each
/// recording is keyed by sentence; in the full submode playback runs on and
/// a single whole-session recording is kept. Navigation is never gated.
#[derive(Debug)]
pub struct ShadowingController {
    pin: SentencePin,
    submode: ShadowingSubmode,
    capturing: Option<RecordingKey>,
}

impl ShadowingController {
    pub fn enter(current_time: f64, entries: &[CaptionEntry], submode: ShadowingSubmode) -> Self {
        Self {
            pin: SentencePin::from_playhead(current_time, entries),
            submode,
            capturing: None,
        }
    }

    pub fn pinned_index(&self) -> usize {
        self.pin.index()
    }

    pub fn submode(&self) -> ShadowingSubmode {
        self.submode
    }

    /// Key of the capture in progress, if any.
    pub fn capturing(&self) -> Option<RecordingKey> {
        self.capturing
    }

    /// Key a new recording would be stored under.
    pub fn recording_key(&self) -> RecordingKey {
        match self.submode {
            ShadowingSubmode::Sentence => RecordingKey::Sentence(self.pin.index()),
            ShadowingSubmode::Full => RecordingKey::FullSession,
        }
    }

    pub fn toggle_recording(
        &mut self,
        recorder: &mut dyn RecordingCapture,
    ) -> Result<RecordingToggle, RecordingError> {
        match self.capturing {
            Some(key) => {
                recorder.stop_capture()?;
                self.capturing = None;
                Ok(RecordingToggle::Stopped(key))
            }
            None => {
                let key = self.recording_key();
                recorder.start_capture(key)?;
                self.capturing = Some(key);
                Ok(RecordingToggle::Started(key))
            }
        }
    }

    /// Stops any capture in progress. Used when leaving the mode or
    /// switching submode.
    pub fn stop_capture(&mut self, recorder: &mut dyn RecordingCapture) -> Result<(), RecordingError> {
        if self.capturing.take().is_some() {
            recorder.stop_capture()?;
        }
        Ok(())
    }

    /// Switches submode. An active capture must be stopped by the caller
    /// first; stored recordings of either kind are untouched.
    pub fn set_submode(&mut self, submode: ShadowingSubmode) {
        self.submode = submode;
    }

    pub fn next(&mut self, ctx: &mut PracticeContext<'_>) -> bool {
        self.pin.advance(ctx.entries.len()) && ctx.jump_to(self.pin.index(), true)
    }

    pub fn previous(&mut self, ctx: &mut PracticeContext<'_>) -> bool {
        self.pin.retreat() && ctx.jump_to(self.pin.index(), true)
    }

    pub fn replay(&mut self, ctx: &mut PracticeContext<'_>) -> bool {
        ctx.jump_to(self.pin.index(), true)
    }

    pub fn seek_to_sentence(&mut self, ctx: &mut PracticeContext<'_>, index: usize) -> bool {
        self.pin.move_to(index, ctx.entries.len()) && ctx.jump_to(index, true)
    }

    pub fn sync_to_playhead(&mut self, ctx: &PracticeContext<'_>) {
        self.pin = SentencePin::from_playhead(ctx.current_time(), ctx.entries);
    }

    pub fn on_time_update(&mut self, ctx: &mut PracticeContext<'_>) {
        if self.submode == ShadowingSubmode::Sentence {
            auto_stop(&self.pin, ctx);
        }
    }
}
