//! Button layouts for each screen, shared by the renderer and click handling.

use crate::arena::{Level, ARENA_WIDTH};
use crate::geometry::Rect;
use crate::screen::{Screen, UiAction};
use crate::settings::Settings;

const COLUMN_X: i32 = 300;
const BUTTON_WIDTH: i32 = 200;
const BUTTON_HEIGHT: i32 = 50;

const LEVEL_BUTTON_X: i32 = 275;
const LEVEL_BUTTON_WIDTH: i32 = 250;
const LEVEL_BUTTON_TOP: i32 = 150;
const LEVEL_BUTTON_SPACING: i32 = 70;

const TOGGLE_RECT: Rect = Rect::new(ARENA_WIDTH - 150, 10, 140, 40);

/// How a button should be filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Palette background with a hover outline.
    Plain,
    /// Vertical gradient in the level's theme colors. `selected` marks the
    /// configured or last played level.
    Level { level: Level, selected: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub action: UiAction,
    pub style: ButtonStyle,
}

impl Button {
    fn plain(rect: Rect, label: impl Into<String>, action: UiAction) -> Self {
        Self {
            rect,
            label: label.into(),
            action,
            style: ButtonStyle::Plain,
        }
    }
}

fn column(y: i32) -> Rect {
    Rect::new(COLUMN_X, y, BUTTON_WIDTH, BUTTON_HEIGHT)
}

fn dark_mode_toggle(settings: &Settings) -> Button {
    let label = if settings.dark_mode { "Light Mode" } else { "Dark Mode" };
    Button::plain(TOGGLE_RECT, label, UiAction::ToggleDarkMode)
}

/// Buttons shown on `screen`. Empty while playing.
pub fn buttons(screen: Screen, settings: &Settings) -> Vec<Button> {
    match screen {
        Screen::MainMenu => vec![
            Button::plain(column(200), "PLAY", UiAction::Play),
            Button::plain(column(270), "SETTINGS", UiAction::OpenSettings),
            Button::plain(column(340), "QUIT", UiAction::Quit),
            dark_mode_toggle(settings),
        ],
        Screen::LevelSelect => {
            let mut buttons: Vec<Button> = Level::ALL
                .iter()
                .zip(0..)
                .map(|(&level, i)| Button {
                    rect: Rect::new(
                        LEVEL_BUTTON_X,
                        LEVEL_BUTTON_TOP + i * LEVEL_BUTTON_SPACING,
                        LEVEL_BUTTON_WIDTH,
                        BUTTON_HEIGHT,
                    ),
                    label: level.name().to_owned(),
                    action: UiAction::SelectLevel(level),
                    style: ButtonStyle::Level {
                        level,
                        selected: level == settings.level,
                    },
                })
                .collect();
            buttons.push(Button::plain(column(500), "BACK", UiAction::Back));
            buttons.push(dark_mode_toggle(settings));
            buttons
        }
        Screen::Settings => vec![
            Button::plain(
                column(200),
                format!("Speed: {}", settings.player_speed),
                UiAction::CycleSpeed,
            ),
            Button::plain(column(500), "BACK", UiAction::Back),
            dark_mode_toggle(settings),
        ],
        Screen::Paused => vec![
            Button::plain(column(250), "RESUME", UiAction::Resume),
            Button::plain(column(320), "QUIT", UiAction::Quit),
        ],
        Screen::GameOver { .. } => vec![
            Button::plain(column(300), "PLAY AGAIN", UiAction::PlayAgain),
            Button::plain(column(370), "QUIT", UiAction::Quit),
        ],
        Screen::Playing => Vec::new(),
    }
}

/// Action of the button under `(x, y)`, if any.
pub fn hit(buttons: &[Button], x: i32, y: i32) -> Option<UiAction> {
    buttons
        .iter()
        .find(|button| button.rect.contains_point(x, y))
        .map(|button| button.action)
}
