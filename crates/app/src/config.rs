use directories::ProjectDirs;
use eegsim_core::constants::{DEFAULT_FREQUENCY, DEFAULT_NOISE_LEVEL};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SNAPSHOT_FILE: &str = "eeg_snapshot.png";

/// User preferences persisted between sessions.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AppConfig {
    #[serde(default = "default_frequency")]
    pub frequency: f32,
    #[serde(default = "default_noise_level")]
    pub noise_level: f32,
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,
    /// Directory holding low_beep.wav, mid_beep.wav and high_beep.wav.
    /// Built-in tones are used when unset.
    #[serde(default)]
    pub sound_dir: Option<PathBuf>,
    #[serde(default = "default_output_device")]
    pub output_device: String,
    #[serde(default)]
    pub muted: bool,
    #[serde(default)]
    pub window_x: Option<f32>,
    #[serde(default)]
    pub window_y: Option<f32>,
}

fn default_frequency() -> f32 {
    DEFAULT_FREQUENCY
}

fn default_noise_level() -> f32 {
    DEFAULT_NOISE_LEVEL
}

fn default_dark_mode() -> bool {
    true
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from(DEFAULT_SNAPSHOT_FILE)
}

fn default_output_device() -> String {
    "default".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            frequency: default_frequency(),
            noise_level: default_noise_level(),
            dark_mode: default_dark_mode(),
            snapshot_path: default_snapshot_path(),
            sound_dir: None,
            output_device: default_output_device(),
            muted: false,
            window_x: None,
            window_y: None,
        }
    }
}

/// Per-launch overrides from the command line. Never written back to disk.
#[derive(Clone, Debug, Default)]
pub struct SessionOverrides {
    pub sound_dir: Option<PathBuf>,
    pub output_device: Option<String>,
    pub muted: bool,
}

/// Audio settings in effect for this session.
#[derive(Clone, Debug, PartialEq)]
pub struct AudioSettings {
    pub output_device: String,
    pub sound_dir: Option<PathBuf>,
    pub muted: bool,
}

impl AppConfig {
    /// Loads configuration from disk, or returns default if not found.
    pub fn load() -> Self {
        config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Self {
        if let Ok(content) = fs::read_to_string(path) {
            match serde_json::from_str(&content) {
                Ok(cfg) => return cfg,
                Err(e) => log::warn!("Ignoring malformed config: {}", e),
            }
        }
        Self::default()
    }

    /// Saves configuration to disk in JSON format.
    pub fn save(&self) {
        if let Some(path) = config_path() {
            self.save_to(&path);
        }
    }

    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string_pretty(self) {
            if let Err(e) = fs::write(path, json) {
                log::warn!("Failed to save config to {}: {}", path.display(), e);
            }
        }
    }

    /// Resolves audio settings, letting CLI overrides win without touching `self`.
    pub fn audio_settings(&self, overrides: &SessionOverrides) -> AudioSettings {
        AudioSettings {
            output_device: overrides
                .output_device
                .clone()
                .unwrap_or_else(|| self.output_device.clone()),
            sound_dir: overrides.sound_dir.clone().or_else(|| self.sound_dir.clone()),
            muted: overrides.muted || self.muted,
        }
    }
}

fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "eegsim", "eegsim").map(|dirs| dirs.config_dir().join("config.json"))
}
