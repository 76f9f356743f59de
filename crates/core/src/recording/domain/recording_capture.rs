use super::recorded_clip::RecordedClip;
use super::recording_error::RecordingError;
use super::recording_key::RecordingKey;

/// Microphone capture collaborator used by shadowing.
///
/// Start and stop are requests: the finished clip arrives later and is
/// handed to the practice session by the caller, keyed as requested here.
pub trait RecordingCapture: Send {
    fn start_capture(&mut self, key: RecordingKey) -> Result<(), RecordingError>;

    fn stop_capture(&mut self) -> Result<(), RecordingError>;

    /// Plays a stored clip through the collaborator's own output.
    fn play_clip(&mut self, clip: &RecordedClip) -> Result<(), RecordingError>;
}
