use std::path::{Path, PathBuf};

use super::Config;

/// Returns the config directory: `~/.config/gripframe/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("gripframe"))
}

/// Returns the config file path: `~/.config/gripframe/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(Config)` on success, or an error string describing
/// what went wrong (IO error, parse error, etc.).
pub fn try_load() -> Result<Config, String> {
    let path = config_path().ok_or("could not determine config path")?;
    try_load_from(&path)
}

/// Loads and validates a config file at an explicit path.
pub fn try_load_from(path: &Path) -> Result<Config, String> {
    if !path.exists() {
        return Err(format!("{}: {NOT_FOUND}", path.display()));
    }
    let content = std::fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    let mut config: Config =
        toml::from_str(&content).map_err(|e| format!("{}: {e}", path.display()))?;
    config.validate();
    Ok(config)
}

/// Loads the configuration from disk, falling back to defaults.
///
/// After loading, values are clamped to safe ranges via [`Config::validate`].
/// Non-existent files silently return defaults; other errors are logged.
pub fn load() -> Config {
    load_or_default(try_load, || {
        let mut config = Config::default();
        config.validate();
        config
    })
}

const NOT_FOUND: &str = "file not found";

/// Loads a config value from disk, falling back to defaults.
///
/// Non-existent files silently return defaults; other errors are logged.
fn load_or_default<T>(try_load: impl FnOnce() -> Result<T, String>, default: impl Fn() -> T) -> T {
    match try_load() {
        Ok(val) => val,
        Err(e) if e.ends_with(NOT_FOUND) => default(),
        Err(e) => {
            crate::log_warn!("config: {e}");
            eprintln!("Warning: {e}");
            default()
        }
    }
}
