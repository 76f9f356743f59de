pub mod recorded_clip;
pub mod recording_capture;
pub mod recording_error;
pub mod recording_key;
pub mod recording_library;
