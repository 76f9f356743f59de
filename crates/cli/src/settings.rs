use std::fs;
use std::path::{Path, PathBuf};

use listenloop_core::practice::domain::practice_config::PracticeConfig;

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("listenloop").join("settings.json"))
}

/// Loads the config at `path`, or the default location when `None`.
/// Missing, unreadable or invalid files fall back to defaults.
pub fn load(path: Option<&Path>) -> PracticeConfig {
    let path = path.map(Path::to_path_buf).or_else(default_config_path);
    let config: PracticeConfig = path
        .and_then(|path| fs::read_to_string(path).ok())
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default();
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::warn!("Ignoring saved settings: {e}");
            PracticeConfig::default()
        }
    }
}

pub fn save(config: &PracticeConfig, path: Option<&Path>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = path
        .map(Path::to_path_buf)
        .or_else(default_config_path)
        .ok_or("No config directory available")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, serde_json::to_string_pretty(config)?)?;
    Ok(path)
}
