use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const APP_DIR: &str = "tomato";

/// Get the configuration directory (~/.config/tomato on Linux)
pub fn get_config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_DIR))
}

/// Get the local data directory used for the log file
pub fn get_data_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .context("Could not determine data directory")?;
    Ok(base.join(APP_DIR))
}

/// Ensure a directory exists
fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(())
}

/// Create the config directory and its sounds folder
pub fn init_config_dir() -> Result<PathBuf> {
    let dir = get_config_dir()?;
    ensure_dir(&dir)?;
    ensure_dir(&dir.join("sounds"))?;
    Ok(dir)
}

/// Default config file path
pub fn config_file() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.json"))
}

/// Default folder holding the cue assets
pub fn sounds_dir() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("sounds"))
}

/// Log file path, creating its directory if needed
pub fn log_file() -> Result<PathBuf> {
    let dir = get_data_dir()?;
    ensure_dir(&dir)?;
    Ok(dir.join("tomato.log"))
}

/// Write a file atomically using a temp file and rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;
    ensure_dir(dir)?;

    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}
