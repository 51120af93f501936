use crate::domain::{Durations, DEFAULT_POMODOROS_PER_LONG_BREAK};
use crate::sound::CueAsset;
use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User configuration stored in config.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub durations: Durations,
    pub pomodoros_per_long_break: u32,
    /// Start with sound cues muted
    pub muted: bool,
    /// Start-of-work cue (defaults to sounds/start.mp3 in the config dir)
    pub start_cue: Option<PathBuf>,
    /// End-of-timer cue (defaults to sounds/finish.mp3 in the config dir)
    pub end_cue: Option<PathBuf>,
    pub start_volume: f32,
    pub end_volume: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            durations: Durations::default(),
            pomodoros_per_long_break: DEFAULT_POMODOROS_PER_LONG_BREAK,
            muted: false,
            start_cue: None,
            end_cue: None,
            start_volume: 0.8,
            end_volume: 0.6,
        }
    }
}

impl AppConfig {
    /// Reject values the timer cannot work with
    pub fn validate(&self) -> Result<()> {
        let d = &self.durations;
        ensure!(d.pomodoro_secs > 0, "pomodoro duration must be greater than zero");
        ensure!(d.short_break_secs > 0, "short break duration must be greater than zero");
        ensure!(d.long_break_secs > 0, "long break duration must be greater than zero");
        ensure!(
            self.pomodoros_per_long_break > 0,
            "pomodoros_per_long_break must be at least 1"
        );
        for (name, volume) in [("start_volume", self.start_volume), ("end_volume", self.end_volume)] {
            ensure!(
                (0.0..=1.0).contains(&volume),
                "{} must be between 0.0 and 1.0 (got {})",
                name,
                volume
            );
        }
        Ok(())
    }

    /// Resolve the start and end cue assets, falling back to `sounds_dir`
    pub fn cue_assets(&self, sounds_dir: &Path) -> (CueAsset, CueAsset) {
        let start = CueAsset {
            path: self
                .start_cue
                .clone()
                .unwrap_or_else(|| sounds_dir.join("start.mp3")),
            volume: self.start_volume,
        };
        let end = CueAsset {
            path: self
                .end_cue
                .clone()
                .unwrap_or_else(|| sounds_dir.join("finish.mp3")),
            volume: self.end_volume,
        };
        (start, end)
    }
}

/// Load configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();

    if !path.exists() {
        // If file doesn't exist, return default config
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: AppConfig = serde_json::from_str(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    Ok(config)
}

/// Save configuration to a JSON file
pub fn save_config<P: AsRef<Path>>(path: P, config: &AppConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    crate::config::atomic_write(path, &json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");

        let config = load_config(&path).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.durations.pomodoro_secs, 1500);
        assert_eq!(config.durations.short_break_secs, 300);
        assert_eq!(config.durations.long_break_secs, 900);
        assert_eq!(config.pomodoros_per_long_break, 4);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");

        let mut config = AppConfig::default();
        config.durations.pomodoro_secs = 50 * 60;
        config.muted = true;
        config.end_cue = Some(PathBuf::from("/usr/share/sounds/bell.oga"));

        save_config(&path, &config).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "durations": { "short_break_secs": 120 }, "muted": true }"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.durations.short_break_secs, 120);
        assert_eq!(config.durations.pomodoro_secs, 1500);
        assert!(config.muted);
        assert_eq!(config.start_volume, 0.8);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "pomodoros_per_long_break": 0 }"#).unwrap();
        assert!(load_config(&path).is_err());

        std::fs::write(&path, r#"{ "end_volume": 1.5 }"#).unwrap();
        assert!(load_config(&path).is_err());

        std::fs::write(&path, "not json").unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_cue_assets_default_to_sounds_dir() {
        let config = AppConfig::default();
        let (start, end) = config.cue_assets(Path::new("/cfg/sounds"));

        assert_eq!(start.path, PathBuf::from("/cfg/sounds/start.mp3"));
        assert_eq!(start.volume, 0.8);
        assert_eq!(end.path, PathBuf::from("/cfg/sounds/finish.mp3"));
        assert_eq!(end.volume, 0.6);
    }

    #[test]
    fn test_cue_assets_respect_overrides() {
        let config = AppConfig {
            start_cue: Some(PathBuf::from("/music/gong.wav")),
            ..Default::default()
        };
        let (start, end) = config.cue_assets(Path::new("/cfg/sounds"));

        assert_eq!(start.path, PathBuf::from("/music/gong.wav"));
        assert_eq!(end.path, PathBuf::from("/cfg/sounds/finish.mp3"));
    }
}
