use crate::transcript::domain::caption_entry::CaptionEntry;

use super::audio_player::AudioPlayer;
use super::playback_settings::PlaybackSettings;

/// The engine's view of the playhead.
///
/// `current_time` follows the ticks reported by the player; commands that
/// move the playhead update it immediately so the next tick is judged
/// against the new position.
pub struct PlaybackCursor {
    player: Box<dyn AudioPlayer>,
    current_time: f64,
}

impl PlaybackCursor {
    pub fn new(player: Box<dyn AudioPlayer>) -> Self {
        Self {
            player,
            current_time: 0.0,
        }
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> Option<f64> {
        self.player.duration()
    }

    pub fn is_playing(&self) -> bool {
        self.player.is_playing()
    }

    /// Records a time-update tick from the player.
    pub fn update(&mut self, t: f64) {
        self.current_time = t;
    }

    pub fn play(&mut self) {
        self.player.play();
    }

    pub fn pause(&mut self) {
        self.player.pause();
    }

    /// Seeks to `t`, clamped to `[0, duration]`. Returns the applied time.
    pub fn seek(&mut self, t: f64) -> f64 {
        let mut target = t.max(0.0);
        if let Some(duration) = self.player.duration() {
            target = target.min(duration);
        }
        self.player.seek(target);
        self.current_time = target;
        target
    }

    /// Relative seek by `delta` seconds, negative to go back.
    pub fn skip(&mut self, delta: f64) -> f64 {
        self.seek(self.current_time + delta)
    }

    pub fn apply(&mut self, settings: PlaybackSettings) {
        self.player.set_playback_rate(settings.speed);
        self.player.set_volume(settings.volume);
    }

    /// Seeks to the start of `entry` with its overrides applied, resuming
    /// playback when `resume` is set.
    pub fn jump_to(&mut self, entry: &CaptionEntry, settings: &PlaybackSettings, resume: bool) {
        self.apply(settings.for_entry(entry));
        self.seek(entry.start_time);
        if resume {
            self.player.play();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::infrastructure::simulated_audio_player::{
        PlayerCommand, SimulatedAudioPlayer, SimulatedPlayerHandle,
    };
    use approx::assert_relative_eq;

    fn cursor(duration: Option<f64>) -> (PlaybackCursor, SimulatedPlayerHandle) {
        let player = SimulatedAudioPlayer::new(duration);
        let handle = player.handle();
        (PlaybackCursor::new(Box::new(player)), handle)
    }

    #[test]
    fn test_seek_clamps_to_duration() {
        let (mut cursor, handle) = cursor(Some(30.0));
        assert_relative_eq!(cursor.seek(45.0), 30.0);
        assert_relative_eq!(handle.position(), 30.0);
        assert_relative_eq!(cursor.seek(-3.0), 0.0);
    }

    #[test]
    fn test_seek_without_duration_only_clamps_below() {
        let (mut cursor, _handle) = cursor(None);
        assert_relative_eq!(cursor.seek(1000.0), 1000.0);
    }

    #[test]
    fn test_skip_is_relative_to_current_time() {
        let (mut cursor, _handle) = cursor(Some(60.0));
        cursor.update(20.0);
        assert_relative_eq!(cursor.skip(5.0), 25.0);
        assert_relative_eq!(cursor.skip(-30.0), 0.0);
    }

    #[test]
    fn test_jump_to_applies_overrides_and_resumes() {
        let (mut cursor, handle) = cursor(Some(60.0));
        let mut entry = CaptionEntry::new(2, 12.0, 15.0, "x");
        entry.set_speed(Some(0.5)).unwrap();

        cursor.jump_to(&entry, &PlaybackSettings::default(), true);

        assert!(handle.is_playing());
        assert_relative_eq!(cursor.current_time(), 12.0);
        assert_eq!(
            handle.commands(),
            vec![
                PlayerCommand::SetPlaybackRate(0.5),
                PlayerCommand::SetVolume(1.0),
                PlayerCommand::Seek(12.0),
                PlayerCommand::Play,
            ]
        );
    }

    #[test]
    fn test_jump_to_without_resume_leaves_paused() {
        let (mut cursor, handle) = cursor(Some(60.0));
        let entry = CaptionEntry::new(1, 3.0, 4.0, "x");
        cursor.jump_to(&entry, &PlaybackSettings::default(), false);
        assert!(!handle.is_playing());
        assert_relative_eq!(handle.position(), 3.0);
    }
}
