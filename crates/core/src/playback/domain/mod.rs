pub mod audio_player;
pub mod playback_cursor;
pub mod playback_settings;
pub mod sentence_locator;
