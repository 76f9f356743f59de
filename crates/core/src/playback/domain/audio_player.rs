/// Audio playback collaborator driven by the practice modes.
///
/// Implementations own the actual media element or output device. The
/// engine only issues commands here and learns about the playhead through
/// time-update ticks delivered by the caller.
pub trait AudioPlayer: Send {
    fn play(&mut self);

    fn pause(&mut self);

    /// Moves the playhead to `seconds` from the start of the media.
    fn seek(&mut self, seconds: f64);

    fn is_playing(&self) -> bool;

    /// Total media length, `None` until the media's metadata is known.
    fn duration(&self) -> Option<f64>;

    fn set_playback_rate(&mut self, rate: f64);

    /// Output gain in `0.0..=1.0`.
    fn set_volume(&mut self, volume: f64);
}
