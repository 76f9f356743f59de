use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced at the transcript ingestion boundary.
///
/// Individual malformed blocks are never errors; they are dropped by the
/// parsers. Only whole-file outcomes reach the user.
#[derive(Error, Debug)]
pub enum TranscriptError {
    #[error("unsupported subtitle format: {file_name} (expected .srt or .vtt)")]
    UnsupportedFormat { file_name: String },
    #[error("failed to read subtitle file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse subtitle file {file_name}: no valid entries found")]
    NoEntries { file_name: String },
}
