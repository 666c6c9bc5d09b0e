//! Player-adjustable settings and their environment overrides.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::arena::{Level, Rgb};
use crate::error::ConfigError;

pub const LEVEL_VAR: &str = "FLAGGED_LEVEL";
pub const SPEED_VAR: &str = "FLAGGED_SPEED";
pub const DARK_MODE_VAR: &str = "FLAGGED_DARK_MODE";

const LIGHT_BACKGROUND: Rgb = Rgb(255, 237, 220);
const LIGHT_TEXT: Rgb = Rgb(105, 2, 2);
const DARK_BACKGROUND: Rgb = Rgb(40, 0, 48);
const DARK_TEXT: Rgb = Rgb::WHITE;

/// Pixels moved per tick on each pressed axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerSpeed {
    #[default]
    Slow,
    Normal,
    Fast,
}

impl PlayerSpeed {
    pub fn pixels(self) -> i32 {
        match self {
            PlayerSpeed::Slow => 3,
            PlayerSpeed::Normal => 5,
            PlayerSpeed::Fast => 7,
        }
    }

    /// 3 -> 5 -> 7 -> 3
    pub fn next(self) -> PlayerSpeed {
        match self {
            PlayerSpeed::Slow => PlayerSpeed::Normal,
            PlayerSpeed::Normal => PlayerSpeed::Fast,
            PlayerSpeed::Fast => PlayerSpeed::Slow,
        }
    }
}

impl fmt::Display for PlayerSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pixels())
    }
}

impl FromStr for PlayerSpeed {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "3" => Ok(PlayerSpeed::Slow),
            "5" => Ok(PlayerSpeed::Normal),
            "7" => Ok(PlayerSpeed::Fast),
            other => Err(ConfigError::InvalidSpeed(other.to_owned())),
        }
    }
}

/// Background and text colors for menus and the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub text: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub player_speed: PlayerSpeed,
    /// Level marked on the level-select screen. Follows the last level played.
    pub level: Level,
    /// Rendering only; never read by the simulation.
    pub dark_mode: bool,
}

impl Settings {
    /// Defaults overridden by `FLAGGED_LEVEL`, `FLAGGED_SPEED` and
    /// `FLAGGED_DARK_MODE` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(value) = lookup(LEVEL_VAR) {
            settings.level = value.parse()?;
        }
        if let Some(value) = lookup(SPEED_VAR) {
            settings.player_speed = value.parse()?;
        }
        if let Some(value) = lookup(DARK_MODE_VAR) {
            settings.dark_mode = parse_flag(DARK_MODE_VAR, &value)?;
        }

        debug!(?settings, "settings loaded");
        Ok(settings)
    }

    pub fn cycle_speed(&mut self) {
        self.player_speed = self.player_speed.next();
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn palette(&self) -> Palette {
        if self.dark_mode {
            Palette {
                background: DARK_BACKGROUND,
                text: DARK_TEXT,
            }
        } else {
            Palette {
                background: LIGHT_BACKGROUND,
                text: LIGHT_TEXT,
            }
        }
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_owned(),
        }),
    }
}
