use std::fmt;

/// Slot a shadowing recording is stored under.
///
/// Sentence recordings and the whole-session recording live in separate
/// keyspaces, so switching submode never overwrites the other kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordingKey {
    /// Zero-based index of the sentence being shadowed.
    Sentence(usize),
    FullSession,
}

impl fmt::Display for RecordingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordingKey::Sentence(index) => write!(f, "sentence {}", index + 1),
            RecordingKey::FullSession => write!(f, "full session"),
        }
    }
}
