use std::fmt;
use std::path::Path;

/// Subtitle formats the engine can ingest. Chosen purely by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormat {
    Srt,
    Vtt,
}

impl SubtitleFormat {
    pub const ALL: &[SubtitleFormat] = &[SubtitleFormat::Srt, SubtitleFormat::Vtt];

    /// Resolves the format from a file name's extension, case-insensitively.
    /// There is no content sniffing.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "srt" => Some(SubtitleFormat::Srt),
                "vtt" => Some(SubtitleFormat::Vtt),
                _ => None,
            })
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SubtitleFormat::Srt => "srt",
            SubtitleFormat::Vtt => "vtt",
        }
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubtitleFormat::Srt => write!(f, "SubRip"),
            SubtitleFormat::Vtt => write!(f, "WebVTT"),
        }
    }
}
