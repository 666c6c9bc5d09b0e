//! Static per-level arena layouts and color themes.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::geometry::Rect;

pub const ARENA_WIDTH: i32 = 800;
pub const ARENA_HEIGHT: i32 = 600;
pub const ARENA_BOUNDS: Rect = Rect::new(0, 0, ARENA_WIDTH, ARENA_HEIGHT);

pub const BASE_SIZE: i32 = 120;
const BASE_Y: i32 = ARENA_HEIGHT / 2 - BASE_SIZE / 2;
const BASE1_X: i32 = 20;
const BASE2_X: i32 = 660;

pub const FLAG_WIDTH: i32 = 20;
pub const FLAG_HEIGHT: i32 = 50;

pub const PLAYER_SIZE: i32 = 50;

/// 8-bit RGB color. Converted to the renderer's color type at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Linear blend, `t` in [0, 1].
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

/// Playable arenas. Chosen before a match and fixed for its duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    #[default]
    Fire,
    Water,
    Earth,
    Wind,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Fire, Level::Water, Level::Earth, Level::Wind];

    pub fn name(self) -> &'static str {
        match self {
            Level::Fire => "FIRE",
            Level::Water => "WATER",
            Level::Earth => "EARTH",
            Level::Wind => "WIND",
        }
    }

    pub fn from_index(index: usize) -> Result<Level, ConfigError> {
        Level::ALL
            .get(index)
            .copied()
            .ok_or(ConfigError::LevelIndexOutOfRange(index))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            return Level::from_index(index);
        }
        Level::ALL
            .iter()
            .copied()
            .find(|level| level.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConfigError::UnknownLevel(trimmed.to_owned()))
    }
}

/// Colors used to draw one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelTheme {
    pub gradient_top: Rgb,
    pub gradient_bottom: Rgb,
    pub p1_color: Rgb,
    pub p2_color: Rgb,
    pub obstacle_color: Rgb,
}

/// Everything static about an arena. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelConfig {
    pub level: Level,
    pub obstacles: Vec<Rect>,
    pub base1: Rect,
    pub base2: Rect,
    pub flag_home1: Rect,
    pub flag_home2: Rect,
    pub player1_start: Rect,
    pub player2_start: Rect,
    pub theme: LevelTheme,
}

impl LevelConfig {
    pub fn obstacles(&self) -> &[Rect] {
        &self.obstacles
    }
}

fn obstacles(level: Level) -> Vec<Rect> {
    match level {
        Level::Fire => vec![
            Rect::new(200, 100, 50, 400),
            Rect::new(550, 100, 50, 400),
            Rect::new(350, 250, 100, 100),
        ],
        Level::Water => vec![
            Rect::new(350, 60, 100, 100),
            Rect::new(350, 440, 100, 100),
            Rect::new(200, 250, 100, 100),
            Rect::new(500, 250, 100, 100),
        ],
        Level::Earth => vec![
            Rect::new(150, 150, 100, 100),
            Rect::new(550, 150, 100, 100),
            Rect::new(150, 350, 100, 100),
            Rect::new(550, 350, 100, 100),
            Rect::new(350, 250, 100, 100),
        ],
        Level::Wind => vec![
            Rect::new(250, 100, 300, 30),
            Rect::new(250, 470, 300, 30),
            Rect::new(150, 200, 30, 200),
            Rect::new(620, 200, 30, 200),
            Rect::new(350, 250, 80, 80),
        ],
    }
}

fn theme(level: Level) -> LevelTheme {
    match level {
        Level::Fire => LevelTheme {
            gradient_top: Rgb(255, 165, 0),
            gradient_bottom: Rgb(255, 0, 0),
            p1_color: Rgb(255, 255, 0),
            p2_color: Rgb(139, 0, 0),
            obstacle_color: Rgb(255, 0, 0),
        },
        Level::Water => LevelTheme {
            gradient_top: Rgb(135, 206, 235),
            gradient_bottom: Rgb(0, 0, 255),
            p1_color: Rgb(0, 191, 255),
            p2_color: Rgb(0, 0, 139),
            obstacle_color: Rgb(0, 0, 255),
        },
        Level::Earth => LevelTheme {
            gradient_top: Rgb(144, 238, 144),
            gradient_bottom: Rgb(0, 100, 0),
            p1_color: Rgb(34, 139, 34),
            p2_color: Rgb(139, 69, 19),
            obstacle_color: Rgb(0, 128, 0),
        },
        Level::Wind => LevelTheme {
            gradient_top: Rgb(220, 220, 220),
            gradient_bottom: Rgb(105, 105, 105),
            p1_color: Rgb(169, 169, 169),
            p2_color: Rgb(47, 79, 79),
            obstacle_color: Rgb(128, 128, 128),
        },
    }
}

/// Build the layout for `level`. Bases, flags and spawn points are shared
/// by every level; obstacles and colors vary.
pub fn level_config(level: Level) -> LevelConfig {
    LevelConfig {
        level,
        obstacles: obstacles(level),
        base1: Rect::new(BASE1_X, BASE_Y, BASE_SIZE, BASE_SIZE),
        base2: Rect::new(BASE2_X, BASE_Y, BASE_SIZE, BASE_SIZE),
        // Flags sit just outside the outer edge of each base
        flag_home1: Rect::new(BASE1_X - FLAG_WIDTH, BASE_Y + 5, FLAG_WIDTH, FLAG_HEIGHT),
        flag_home2: Rect::new(BASE2_X + BASE_SIZE, BASE_Y + 5, FLAG_WIDTH, FLAG_HEIGHT),
        player1_start: Rect::new(
            BASE1_X + 30,
            ARENA_HEIGHT / 2 - PLAYER_SIZE / 2,
            PLAYER_SIZE,
            PLAYER_SIZE,
        ),
        player2_start: Rect::new(
            BASE2_X + 40,
            ARENA_HEIGHT / 2 - PLAYER_SIZE / 2,
            PLAYER_SIZE,
            PLAYER_SIZE,
        ),
        theme: theme(level),
    }
}
