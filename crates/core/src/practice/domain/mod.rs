pub mod keyboard_shortcuts;
pub mod practice_config;
pub mod practice_mode;
