use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::playback::domain::audio_player::AudioPlayer;

/// A command received by [`SimulatedAudioPlayer`], in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    Play,
    Pause,
    Seek(f64),
    SetPlaybackRate(f64),
    SetVolume(f64),
}

#[derive(Debug)]
struct PlayerState {
    position: f64,
    duration: Option<f64>,
    playing: bool,
    rate: f64,
    volume: f64,
    commands: Vec<PlayerCommand>,
}

/// In-memory player with a virtual clock.
///
/// Time only moves through [`SimulatedPlayerHandle::advance`], which lets a
/// terminal front-end or a test drive the tick loop deterministically.
pub struct SimulatedAudioPlayer {
    state: Arc<Mutex<PlayerState>>,
}

/// Observer and clock driver for a [`SimulatedAudioPlayer`] that has been
/// handed to the engine.
#[derive(Clone)]
pub struct SimulatedPlayerHandle {
    state: Arc<Mutex<PlayerState>>,
}

fn lock(state: &Mutex<PlayerState>) -> MutexGuard<'_, PlayerState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SimulatedAudioPlayer {
    pub fn new(duration: Option<f64>) -> Self {
        Self {
            state: Arc::new(Mutex::new(PlayerState {
                position: 0.0,
                duration,
                playing: false,
                rate: 1.0,
                volume: 1.0,
                commands: Vec::new(),
            })),
        }
    }

    pub fn handle(&self) -> SimulatedPlayerHandle {
        SimulatedPlayerHandle {
            state: Arc::clone(&self.state),
        }
    }
}

impl AudioPlayer for SimulatedAudioPlayer {
    fn play(&mut self) {
        let mut state = lock(&self.state);
        state.playing = true;
        state.commands.push(PlayerCommand::Play);
    }

    fn pause(&mut self) {
        let mut state = lock(&self.state);
        state.playing = false;
        state.commands.push(PlayerCommand::Pause);
    }

    fn seek(&mut self, seconds: f64) {
        let mut state = lock(&self.state);
        state.position = seconds;
        state.commands.push(PlayerCommand::Seek(seconds));
    }

    fn is_playing(&self) -> bool {
        lock(&self.state).playing
    }

    fn duration(&self) -> Option<f64> {
        lock(&self.state).duration
    }

    fn set_playback_rate(&mut self, rate: f64) {
        let mut state = lock(&self.state);
        state.rate = rate;
        state.commands.push(PlayerCommand::SetPlaybackRate(rate));
    }

    fn set_volume(&mut self, volume: f64) {
        let mut state = lock(&self.state);
        state.volume = volume;
        state.commands.push(PlayerCommand::SetVolume(volume));
    }
}

impl SimulatedPlayerHandle {
    /// Advances the clock by `dt` wall-clock seconds scaled by the playback
    /// rate, if playing. Stops at the end of the media. Returns the new
    /// position, which the caller feeds back to the engine as a tick.
    pub fn advance(&self, dt: f64) -> f64 {
        let mut state = lock(&self.state);
        if state.playing {
            state.position += dt * state.rate;
            if let Some(duration) = state.duration {
                if state.position >= duration {
                    state.position = duration;
                    state.playing = false;
                }
            }
        }
        state.position
    }

    pub fn position(&self) -> f64 {
        lock(&self.state).position
    }

    pub fn is_playing(&self) -> bool {
        lock(&self.state).playing
    }

    pub fn rate(&self) -> f64 {
        lock(&self.state).rate
    }

    pub fn volume(&self) -> f64 {
        lock(&self.state).volume
    }

    pub fn commands(&self) -> Vec<PlayerCommand> {
        lock(&self.state).commands.clone()
    }

    /// Drains the command log.
    pub fn take_commands(&self) -> Vec<PlayerCommand> {
        std::mem::take(&mut lock(&self.state).commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_advance_only_moves_while_playing() {
        let mut player = SimulatedAudioPlayer::new(Some(10.0));
        let handle = player.handle();

        assert_relative_eq!(handle.advance(1.0), 0.0);
        player.play();
        assert_relative_eq!(handle.advance(1.5), 1.5);
    }

    #[test]
    fn test_advance_scales_by_rate() {
        let mut player = SimulatedAudioPlayer::new(None);
        let handle = player.handle();
        player.set_playback_rate(0.5);
        player.play();
        assert_relative_eq!(handle.advance(2.0), 1.0);
    }

    #[test]
    fn test_advance_stops_at_end() {
        let mut player = SimulatedAudioPlayer::new(Some(3.0));
        let handle = player.handle();
        player.seek(2.5);
        player.play();

        assert_relative_eq!(handle.advance(1.0), 3.0);
        assert!(!handle.is_playing());
    }

    #[test]
    fn test_take_commands_drains_log() {
        let mut player = SimulatedAudioPlayer::new(None);
        let handle = player.handle();
        player.seek(4.0);
        player.pause();

        assert_eq!(
            handle.take_commands(),
            vec![PlayerCommand::Seek(4.0), PlayerCommand::Pause]
        );
        assert!(handle.commands().is_empty());
    }
}
