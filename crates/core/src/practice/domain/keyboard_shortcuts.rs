use super::practice_mode::PracticeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    Enter,
    Space,
    /// Any other key; never bound.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self { key, shift: false }
    }

    pub fn with_shift(key: Key) -> Self {
        Self { key, shift: true }
    }
}

/// Which control currently owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFocus {
    /// The practice view itself, including the dictation answer box.
    #[default]
    Practice,
    /// A popup or dialog where Tab, Enter and Space keep their native meaning.
    Popup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Replay,
    Next,
    ToggleRecording,
}

/// Key bindings for the gated practice modes.
pub struct KeyboardShortcuts;

impl KeyboardShortcuts {
    /// Action bound to `press` in `mode`, if any.
    ///
    /// Listening has no bindings, and nothing fires while a popup holds
    /// focus. Shift+Enter is left alone so it can insert a newline.
    pub fn resolve(mode: PracticeMode, press: KeyPress, focus: InputFocus) -> Option<ShortcutAction> {
        if !mode.is_gated() || focus == InputFocus::Popup {
            return None;
        }
        match press.key {
            Key::Tab => Some(ShortcutAction::Replay),
            Key::Enter if !press.shift => Some(ShortcutAction::Next),
            Key::Space if mode == PracticeMode::Shadowing => Some(ShortcutAction::ToggleRecording),
            _ => None,
        }
    }
}
