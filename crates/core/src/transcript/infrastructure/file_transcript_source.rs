use std::fs;
use std::path::Path;

use crate::transcript::domain::subtitle_format::SubtitleFormat;
use crate::transcript::domain::transcript_error::TranscriptError;
use crate::transcript::domain::transcript_source::TranscriptSource;

/// Reads subtitle text from the local filesystem.
pub struct FileTranscriptSource;

impl TranscriptSource for FileTranscriptSource {
    fn read_text(&self, path: &Path) -> Result<String, TranscriptError> {
        fs::read_to_string(path).map_err(|source| TranscriptError::Read {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Finds the subtitle file that belongs to an audio file: same base name
/// (case-insensitive) with an `.srt` or `.vtt` extension.
pub fn find_subtitle_file<'a, P: AsRef<Path>>(
    audio_file_name: &str,
    candidates: &'a [P],
) -> Option<&'a Path> {
    let audio_base = base_name(Path::new(audio_file_name))?;
    candidates.iter().map(<P as AsRef<Path>>::as_ref).find(|candidate| {
        let Some(name) = candidate.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        SubtitleFormat::from_file_name(name).is_some()
            && base_name(candidate).as_deref() == Some(audio_base.as_str())
    })
}

fn base_name(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_lowercase)
}
