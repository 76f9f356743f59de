use std::path::Path;

use crate::comparison::domain::text_comparator::{TextComparator, WordMatchResult};
use crate::playback::domain::audio_player::AudioPlayer;
use crate::playback::domain::playback_cursor::PlaybackCursor;
use crate::playback::domain::sentence_locator::SentenceLocator;
use crate::practice::domain::keyboard_shortcuts::{
    InputFocus, KeyPress, KeyboardShortcuts, ShortcutAction,
};
use crate::practice::domain::practice_config::PracticeConfig;
use crate::practice::domain::practice_mode::{PracticeMode, ShadowingSubmode};
use crate::recording::domain::recorded_clip::RecordedClip;
use crate::recording::domain::recording_capture::RecordingCapture;
use crate::recording::domain::recording_error::RecordingError;
use crate::recording::domain::recording_key::RecordingKey;
use crate::recording::domain::recording_library::RecordingLibrary;
use crate::shared::settings_error::{validate_speed, validate_volume, SettingsError};
use crate::transcript::domain::caption_entry::CaptionEntry;
use crate::transcript::domain::transcript_regeneration::TranscriptRegeneration;

use super::dictation_controller::DictationController;
use super::listening_controller::ListeningController;
use super::practice_context::PracticeContext;
use super::shadowing_controller::{RecordingToggle, ShadowingController};

/// Per-mode state. Replaced wholesale on every mode change or transcript
/// load, so no state from a previous mode or sequence survives.
#[derive(Debug)]
enum ModeState {
    Listening(ListeningController),
    Dictation(DictationController),
    Shadowing(ShadowingController),
}

/// One learner practising one transcript against one audio track.
///
/// All operations take `&mut self`, so time-update ticks and user actions
/// are applied strictly in call order. Callers sharing a session across
/// threads must serialize access to it.
pub struct PracticeSession {
    entries: Vec<CaptionEntry>,
    cursor: PlaybackCursor,
    config: PracticeConfig,
    comparator: TextComparator,
    recorder: Option<Box<dyn RecordingCapture>>,
    recordings: RecordingLibrary,
    shadowing_submode: ShadowingSubmode,
    state: ModeState,
}

impl PracticeSession {
    pub fn new(player: Box<dyn AudioPlayer>, config: PracticeConfig) -> Self {
        let mut cursor = PlaybackCursor::new(player);
        cursor.apply(config.playback_settings());
        Self {
            entries: Vec::new(),
            cursor,
            shadowing_submode: config.shadowing_submode,
            config,
            comparator: TextComparator::default(),
            recorder: None,
            recordings: RecordingLibrary::new(),
            state: ModeState::Listening(ListeningController::default()),
        }
    }

    pub fn with_recorder(mut self, recorder: Box<dyn RecordingCapture>) -> Self {
        self.recorder = Some(recorder);
        self
    }

    pub fn with_comparator(mut self, comparator: TextComparator) -> Self {
        self.comparator = comparator;
        self
    }

    pub fn entries(&self) -> &[CaptionEntry] {
        &self.entries
    }

    pub fn config(&self) -> &PracticeConfig {
        &self.config
    }

    pub fn mode(&self) -> PracticeMode {
        match self.state {
            ModeState::Listening(_) => PracticeMode::Listening,
            ModeState::Dictation(_) => PracticeMode::Dictation,
            ModeState::Shadowing(_) => PracticeMode::Shadowing,
        }
    }

    pub fn current_time(&self) -> f64 {
        self.cursor.current_time()
    }

    pub fn duration(&self) -> Option<f64> {
        self.cursor.duration()
    }

    pub fn is_playing(&self) -> bool {
        self.cursor.is_playing()
    }

    /// Installs a new sentence sequence and resets the active mode onto it.
    ///
    /// Pin, typed input, revealed answer and stored recordings all belong to
    /// the previous sequence and are discarded together.
    pub fn load_transcript(&mut self, entries: Vec<CaptionEntry>) {
        self.stop_active_capture();
        self.entries = entries;
        self.recordings.clear();
        self.state = self.enter(self.mode());
        log::info!("Loaded transcript with {} entries", self.entries.len());
    }

    /// Switches practice mode. Re-selecting the current mode is a no-op.
    pub fn select_mode(&mut self, mode: PracticeMode) -> bool {
        if mode == self.mode() {
            return false;
        }
        self.stop_active_capture();
        self.state = self.enter(mode);
        log::info!("Entered {mode} mode");
        true
    }

    fn enter(&self, mode: PracticeMode) -> ModeState {
        let current_time = self.cursor.current_time();
        match mode {
            PracticeMode::Listening => ModeState::Listening(ListeningController::enter(
                current_time,
                &self.entries,
            )),
            PracticeMode::Dictation => ModeState::Dictation(DictationController::enter(
                current_time,
                &self.entries,
                self.comparator,
            )),
            PracticeMode::Shadowing => ModeState::Shadowing(ShadowingController::enter(
                current_time,
                &self.entries,
                self.shadowing_submode,
            )),
        }
    }

    /// Applies a time-update tick from the audio player.
    pub fn on_time_update(&mut self, t: f64) {
        self.cursor.update(t);
        let mut ctx = PracticeContext {
            entries: &self.entries,
            cursor: &mut self.cursor,
            config: &self.config,
        };
        match &mut self.state {
            ModeState::Listening(controller) => controller.on_time_update(&ctx),
            ModeState::Dictation(controller) => controller.on_time_update(&mut ctx),
            ModeState::Shadowing(controller) => controller.on_time_update(&mut ctx),
        }
    }

    /// The sentence under the playhead, regardless of mode.
    pub fn live_index(&self) -> Option<usize> {
        SentenceLocator::locate(self.cursor.current_time(), &self.entries)
    }

    /// The pinned sentence of a gated mode; `None` in listening or for an
    /// empty transcript.
    pub fn pinned_index(&self) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        match &self.state {
            ModeState::Listening(_) => None,
            ModeState::Dictation(controller) => Some(controller.pinned_index()),
            ModeState::Shadowing(controller) => Some(controller.pinned_index()),
        }
    }

    /// The sentence to highlight: the live sentence in listening, the pin
    /// otherwise.
    pub fn active_index(&self) -> Option<usize> {
        match &self.state {
            ModeState::Listening(controller) => controller.active_index(),
            _ => self.pinned_index(),
        }
    }

    pub fn current_sentence(&self) -> Option<&CaptionEntry> {
        self.active_index().and_then(|index| self.entries.get(index))
    }

    pub fn next(&mut self) -> bool {
        let mut ctx = PracticeContext {
            entries: &self.entries,
            cursor: &mut self.cursor,
            config: &self.config,
        };
        match &mut self.state {
            ModeState::Listening(controller) => controller.next(&mut ctx),
            ModeState::Dictation(controller) => controller.next(&mut ctx),
            ModeState::Shadowing(controller) => controller.next(&mut ctx),
        }
    }

    pub fn previous(&mut self) -> bool {
        let mut ctx = PracticeContext {
            entries: &self.entries,
            cursor: &mut self.cursor,
            config: &self.config,
        };
        match &mut self.state {
            ModeState::Listening(controller) => controller.previous(&mut ctx),
            ModeState::Dictation(controller) => controller.previous(&mut ctx),
            ModeState::Shadowing(controller) => controller.previous(&mut ctx),
        }
    }

    pub fn replay(&mut self) -> bool {
        let mut ctx = PracticeContext {
            entries: &self.entries,
            cursor: &mut self.cursor,
            config: &self.config,
        };
        match &mut self.state {
            ModeState::Listening(controller) => controller.replay(&mut ctx),
            ModeState::Dictation(controller) => controller.replay(&mut ctx),
            ModeState::Shadowing(controller) => controller.replay(&mut ctx),
        }
    }

    /// Jumps to sentence `index` (click-to-seek), moving the pin in the
    /// gated modes. Out-of-range indices are ignored.
    pub fn seek_to_sentence(&mut self, index: usize) -> bool {
        let mut ctx = PracticeContext {
            entries: &self.entries,
            cursor: &mut self.cursor,
            config: &self.config,
        };
        match &mut self.state {
            ModeState::Listening(controller) => controller.seek_to_sentence(&mut ctx, index),
            ModeState::Dictation(controller) => controller.seek_to_sentence(&mut ctx, index),
            ModeState::Shadowing(controller) => controller.seek_to_sentence(&mut ctx, index),
        }
    }

    /// Re-pins the gated modes to the sentence under the playhead. Plain
    /// scrubbing and ticks never do this on their own.
    pub fn sync_pin_to_playhead(&mut self) {
        let ctx = PracticeContext {
            entries: &self.entries,
            cursor: &mut self.cursor,
            config: &self.config,
        };
        match &mut self.state {
            ModeState::Listening(controller) => controller.on_time_update(&ctx),
            ModeState::Dictation(controller) => controller.sync_to_playhead(&ctx),
            ModeState::Shadowing(controller) => controller.sync_to_playhead(&ctx),
        }
    }

    pub fn play(&mut self) {
        self.cursor.play();
    }

    pub fn pause(&mut self) {
        self.cursor.pause();
    }

    pub fn toggle_playback(&mut self) {
        if self.cursor.is_playing() {
            self.cursor.pause();
        } else {
            self.cursor.play();
        }
    }

    /// Scrubs the playhead to `t` without touching the pin.
    pub fn seek(&mut self, t: f64) -> f64 {
        self.cursor.seek(t)
    }

    pub fn skip_forward(&mut self, long: bool) -> f64 {
        let step = if long {
            self.config.long_seek_step
        } else {
            self.config.seek_step
        };
        self.cursor.skip(step)
    }

    pub fn skip_backward(&mut self, long: bool) -> f64 {
        let step = if long {
            self.config.long_seek_step
        } else {
            self.config.seek_step
        };
        self.cursor.skip(-step)
    }

    /// Checks dictation input against the pinned sentence. `None` outside
    /// dictation.
    pub fn type_input(&mut self, input: &str) -> Option<&WordMatchResult> {
        let ModeState::Dictation(controller) = &mut self.state else {
            return None;
        };
        let ctx = PracticeContext {
            entries: &self.entries,
            cursor: &mut self.cursor,
            config: &self.config,
        };
        Some(controller.type_input(&ctx, input))
    }

    pub fn reveal_answer(&mut self) -> bool {
        match &mut self.state {
            ModeState::Dictation(controller) => {
                controller.reveal_answer();
                true
            }
            _ => false,
        }
    }

    /// Whether `next` would move. Always true outside dictation.
    pub fn can_advance(&self) -> bool {
        match &self.state {
            ModeState::Dictation(controller) => controller.can_advance(),
            _ => true,
        }
    }

    pub fn dictation(&self) -> Option<&DictationController> {
        match &self.state {
            ModeState::Dictation(controller) => Some(controller),
            _ => None,
        }
    }

    /// Pinned sentence with unmatched words masked. `None` outside
    /// dictation or for an empty transcript.
    pub fn masked_sentence(&self) -> Option<String> {
        self.dictation()?.masked_text(&self.entries)
    }

    pub fn shadowing(&self) -> Option<&ShadowingController> {
        match &self.state {
            ModeState::Shadowing(controller) => Some(controller),
            _ => None,
        }
    }

    pub fn shadowing_submode(&self) -> ShadowingSubmode {
        self.shadowing_submode
    }

    /// Starts or stops a shadowing capture for the current key.
    pub fn toggle_recording(&mut self) -> Result<RecordingToggle, RecordingError> {
        let ModeState::Shadowing(controller) = &mut self.state else {
            return Err(RecordingError::Unavailable(
                "recording is only available in shadowing mode".to_string(),
            ));
        };
        let recorder = self
            .recorder
            .as_deref_mut()
            .ok_or_else(|| RecordingError::Unavailable("no recorder attached".to_string()))?;
        let toggle = controller.toggle_recording(recorder)?;
        log::debug!("recording {toggle:?}");
        Ok(toggle)
    }

    /// Changes the shadowing submode, stopping any capture in progress.
    /// The choice is remembered across mode switches.
    pub fn set_shadowing_submode(&mut self, submode: ShadowingSubmode) {
        self.shadowing_submode = submode;
        self.stop_active_capture();
        if let ModeState::Shadowing(controller) = &mut self.state {
            controller.set_submode(submode);
        }
    }

    /// Stores a finished clip delivered by the capture collaborator.
    pub fn deliver_recording(&mut self, key: RecordingKey, clip: RecordedClip) {
        log::info!("Stored {} byte recording for {key}", clip.len());
        self.recordings.insert(key, clip);
    }

    pub fn delete_recording(&mut self, key: RecordingKey) -> Option<RecordedClip> {
        self.recordings.remove(key)
    }

    pub fn play_recording(&mut self, key: RecordingKey) -> Result<(), RecordingError> {
        let clip = self
            .recordings
            .get(key)
            .ok_or_else(|| RecordingError::Unavailable(format!("no recording for {key}")))?;
        let recorder = self
            .recorder
            .as_deref_mut()
            .ok_or_else(|| RecordingError::Unavailable("no recorder attached".to_string()))?;
        recorder.play_clip(clip)
    }

    pub fn export_recording(&self, key: RecordingKey, path: &Path) -> Result<(), RecordingError> {
        self.recordings.export(key, path)
    }

    pub fn recordings(&self) -> &RecordingLibrary {
        &self.recordings
    }

    /// Resolves a key press in the active mode and performs its action.
    /// Returns the action that fired, even when gating turned it into a
    /// no-op.
    pub fn handle_key(&mut self, press: KeyPress, focus: InputFocus) -> Option<ShortcutAction> {
        let action = KeyboardShortcuts::resolve(self.mode(), press, focus)?;
        match action {
            ShortcutAction::Replay => {
                self.replay();
            }
            ShortcutAction::Next => {
                self.next();
            }
            ShortcutAction::ToggleRecording => {
                if let Err(e) = self.toggle_recording() {
                    log::warn!("Recording toggle failed: {e}");
                }
            }
        }
        Some(action)
    }

    pub fn set_playback_speed(&mut self, speed: f64) -> Result<(), SettingsError> {
        self.config.playback_speed = validate_speed(speed)?;
        self.reapply_settings();
        Ok(())
    }

    pub fn set_volume(&mut self, volume: f64) -> Result<(), SettingsError> {
        self.config.volume = validate_volume(volume)?;
        self.reapply_settings();
        Ok(())
    }

    /// Sets or clears the speed override of entry `index`.
    pub fn set_entry_speed(&mut self, index: usize, speed: Option<f64>) -> Result<(), SettingsError> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(SettingsError::NoSuchEntry { index, len })?
            .set_speed(speed)?;
        self.reapply_settings();
        Ok(())
    }

    /// Sets or clears the volume override of entry `index`.
    pub fn set_entry_volume(&mut self, index: usize, volume: Option<f64>) -> Result<(), SettingsError> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(SettingsError::NoSuchEntry { index, len })?
            .set_volume(volume)?;
        self.reapply_settings();
        Ok(())
    }

    /// Starts a regeneration preview over the current sequence.
    pub fn begin_regeneration(&self) -> TranscriptRegeneration {
        TranscriptRegeneration::new(self.entries.clone())
    }

    /// Installs a confirmed regeneration. Returns `false` if it was never
    /// previewed.
    pub fn apply_regeneration(&mut self, regeneration: TranscriptRegeneration) -> bool {
        match regeneration.confirm() {
            Some(sentences) => {
                self.load_transcript(sentences);
                true
            }
            None => false,
        }
    }

    /// Regenerates sentences in place without a preview step.
    pub fn regenerate_transcript(&mut self) {
        let mut regeneration = self.begin_regeneration();
        regeneration.preview();
        self.apply_regeneration(regeneration);
    }

    fn reapply_settings(&mut self) {
        let settings = self.config.playback_settings();
        let applied = match self.current_sentence() {
            Some(sentence) => settings.for_entry(sentence),
            None => settings,
        };
        self.cursor.apply(applied);
    }

    fn stop_active_capture(&mut self) {
        let ModeState::Shadowing(controller) = &mut self.state else {
            return;
        };
        if let Some(recorder) = self.recorder.as_deref_mut() {
            if let Err(e) = controller.stop_capture(recorder) {
                log::warn!("Failed to stop recording: {e}");
            }
        }
    }
}
