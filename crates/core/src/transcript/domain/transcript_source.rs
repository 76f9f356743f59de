use std::path::Path;

use super::transcript_error::TranscriptError;

/// Domain interface for loading raw subtitle text.
pub trait TranscriptSource: Send {
    fn read_text(&self, path: &Path) -> Result<String, TranscriptError>;
}
