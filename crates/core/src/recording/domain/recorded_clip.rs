/// A finished recording as delivered by the capture collaborator.
///
/// The engine never looks inside `bytes`; it only stores, exports and hands
/// the clip back for playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedClip {
    pub bytes: Vec<u8>,
    /// Playable location issued by the collaborator (object URL, file URL).
    pub url: String,
    pub mime_type: String,
}

impl RecordedClip {
    pub fn new(bytes: Vec<u8>, url: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            url: url.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
