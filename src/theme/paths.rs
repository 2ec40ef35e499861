use std::env;
use std::path::{Path, PathBuf};

/// Application directory name below the config base.
const APP_DIR: &str = "issue-facets";

/// Candidate config files named `file_name`, `$HOME/.config` first, then `XDG_CONFIG_HOME`.
fn config_candidates(file_name: &str) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(h) = env::var("HOME") {
        candidates.push(Path::new(&h).join(".config").join(APP_DIR).join(file_name));
    }
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME")
        && !xdg.trim().is_empty()
    {
        candidates.push(Path::new(&xdg).join(APP_DIR).join(file_name));
    }
    candidates
}

/// Determine the path of `settings.conf`, if one exists.
pub(crate) fn resolve_settings_config_path() -> Option<PathBuf> {
    config_candidates("settings.conf")
        .into_iter()
        .find(|p| p.is_file())
}

/// Determine the path of `theme.conf`, if one exists.
pub(crate) fn resolve_theme_config_path() -> Option<PathBuf> {
    config_candidates("theme.conf")
        .into_iter()
        .find(|p| p.is_file())
}

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Config directory (`$HOME/.config/issue-facets`, or below `XDG_CONFIG_HOME`), ensured to exist.
pub fn config_dir() -> PathBuf {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join(APP_DIR);
        if std::fs::create_dir_all(&dir).is_ok() {
            return dir;
        }
    }
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `<config_dir>/logs` (ensured to exist)
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}
