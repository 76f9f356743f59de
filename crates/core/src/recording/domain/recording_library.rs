use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::recorded_clip::RecordedClip;
use super::recording_error::RecordingError;
use super::recording_key::RecordingKey;

/// Finished shadowing recordings for the current transcript.
#[derive(Debug, Default, Clone)]
pub struct RecordingLibrary {
    clips: BTreeMap<RecordingKey, RecordedClip>,
}

impl RecordingLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `clip`, returning the clip it replaced.
    pub fn insert(&mut self, key: RecordingKey, clip: RecordedClip) -> Option<RecordedClip> {
        self.clips.insert(key, clip)
    }

    pub fn get(&self, key: RecordingKey) -> Option<&RecordedClip> {
        self.clips.get(&key)
    }

    pub fn remove(&mut self, key: RecordingKey) -> Option<RecordedClip> {
        self.clips.remove(&key)
    }

    pub fn contains(&self, key: RecordingKey) -> bool {
        self.clips.contains_key(&key)
    }

    /// Stored keys, sentences first in index order.
    pub fn keys(&self) -> Vec<RecordingKey> {
        self.clips.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    pub fn clear(&mut self) {
        self.clips.clear();
    }

    /// Writes the clip stored under `key` to `path`.
    pub fn export(&self, key: RecordingKey, path: &Path) -> Result<(), RecordingError> {
        let clip = self
            .clips
            .get(&key)
            .ok_or_else(|| RecordingError::Unavailable(format!("no recording for {key}")))?;
        fs::write(path, &clip.bytes).map_err(|source| RecordingError::Export {
            path: path.to_path_buf(),
            source,
        })
    }
}
