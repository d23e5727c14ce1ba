use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use rizal_core::{FLY_TO_DURATION, FLY_TO_ZOOM};
use rizal_types::SectionId;
use rizal_types::ui::UiOptions;

/// Environment variable that overrides `[app] start_section`.
pub const START_SECTION_ENV: &str = "RIZAL_START_SECTION";

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(500);
pub const DEFAULT_AUDIO_PATH: &str = "audio/mi-ultimo-adios.mp3";

const MIN_TICK_INTERVAL: Duration = Duration::from_millis(50);
const ZOOM_RANGE: (f64, f64) = (1.0, 18.0);

#[derive(Debug, Default, Deserialize)]
pub struct RizalConfig {
    pub app: Option<AppConfig>,
    pub timeline: Option<TimelineConfig>,
    pub library: Option<LibraryConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for markers, bullets and borders.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable modal animations, camera flights and the animated path.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Section shown at startup (`hero`, `timeline`, `library`, ...).
    pub start_section: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TimelineConfig {
    pub tick_interval_ms: Option<u64>,
    pub fly_duration_ms: Option<u64>,
    pub fly_zoom: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LibraryConfig {
    /// Path to the poem recording. Supports `${VAR}` expansion.
    pub audio_path: Option<String>,
    /// External command used to play the recording, e.g. `mpv`.
    pub audio_player: Option<String>,
}

/// Replace every `${VAR}` with the variable's value (empty if unset).
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(open) = rest.find("${") {
        let after = &rest[open + 2..];
        let Some(close) = after.find('}') else {
            break;
        };
        out.push_str(&rest[..open]);
        let var = &after[..close];
        if !var.is_empty() {
            out.push_str(&env::var(var).unwrap_or_default());
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

impl RizalConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        Self::load_from(&path)
    }

    /// Load from an explicit path. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".rizal").join("config.toml"))
}

/// Effective settings after defaults, clamping and environment overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub ui: UiOptions,
    pub start_section: SectionId,
    pub tick_interval: Duration,
    pub fly_duration: Duration,
    pub fly_zoom: f64,
    pub audio_path: PathBuf,
    pub audio_player: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ui: UiOptions::default(),
            start_section: SectionId::Hero,
            tick_interval: DEFAULT_TICK_INTERVAL,
            fly_duration: FLY_TO_DURATION,
            fly_zoom: FLY_TO_ZOOM,
            audio_path: PathBuf::from(DEFAULT_AUDIO_PATH),
            audio_player: None,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn from_config(config: Option<&RizalConfig>) -> Self {
        let defaults = Self::default();
        let app = config.and_then(|cfg| cfg.app.as_ref());
        let timeline = config.and_then(|cfg| cfg.timeline.as_ref());
        let library = config.and_then(|cfg| cfg.library.as_ref());

        let ui = UiOptions {
            ascii_only: app.is_some_and(|cfg| cfg.ascii_only),
            high_contrast: app.is_some_and(|cfg| cfg.high_contrast),
            reduced_motion: app.is_some_and(|cfg| cfg.reduced_motion),
        };

        let start_section = app
            .and_then(|cfg| cfg.start_section.as_deref())
            .map_or(defaults.start_section, |raw| {
                parse_section_or_default(raw, "[app] start_section")
            });

        let tick_interval = timeline
            .and_then(|cfg| cfg.tick_interval_ms)
            .map_or(defaults.tick_interval, |ms| {
                Duration::from_millis(ms).max(MIN_TICK_INTERVAL)
            });

        let fly_duration = timeline
            .and_then(|cfg| cfg.fly_duration_ms)
            .map_or(defaults.fly_duration, Duration::from_millis);

        let fly_zoom = timeline
            .and_then(|cfg| cfg.fly_zoom)
            .filter(|zoom| zoom.is_finite())
            .map_or(defaults.fly_zoom, |zoom| zoom.clamp(ZOOM_RANGE.0, ZOOM_RANGE.1));

        let audio_path = library
            .and_then(|cfg| cfg.audio_path.as_deref())
            .map_or(defaults.audio_path, |raw| {
                PathBuf::from(expand_env_vars(raw))
            });

        let audio_player = library
            .and_then(|cfg| cfg.audio_player.as_deref())
            .map(expand_env_vars)
            .map(|player| player.trim().to_string())
            .filter(|player| !player.is_empty());

        Self {
            ui,
            start_section,
            tick_interval,
            fly_duration,
            fly_zoom,
            audio_path,
            audio_player,
        }
    }

    /// Apply overrides looked up through `lookup` (normally `std::env::var`).
    #[must_use]
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup(START_SECTION_ENV) {
            self.start_section = parse_section_or_default(&raw, START_SECTION_ENV);
        }
        self
    }

    /// Load `~/.rizal/config.toml` and the environment. Never fails: problems
    /// are logged and defaults used.
    #[must_use]
    pub fn load() -> Self {
        let config = RizalConfig::load().unwrap_or_else(|err| {
            tracing::warn!(path = %err.path().display(), "Using default settings: {err}");
            None
        });
        Self::from_config(config.as_ref()).with_env_overrides(|key| env::var(key).ok())
    }
}

fn parse_section_or_default(raw: &str, source: &str) -> SectionId {
    raw.parse().unwrap_or_else(|err| {
        tracing::warn!("Ignoring {source}: {err}");
        SectionId::default()
    })
}
