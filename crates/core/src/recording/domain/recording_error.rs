use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordingError {
    #[error("recording unavailable: {0}")]
    Unavailable(String),
    #[error("failed to export recording to {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
