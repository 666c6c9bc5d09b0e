//! Screen flow as an explicit state machine.
//!
//! ```text
//! MainMenu      --Play---------> LevelSelect
//! MainMenu      --OpenSettings-> Settings
//! LevelSelect   --SelectLevel--> Playing
//! Playing       --Pause--------> Paused   --Resume----> Playing
//! Playing       --(winner)-----> GameOver --PlayAgain-> LevelSelect
//! LevelSelect,
//! Settings      --Back---------> MainMenu
//! any           --Quit---------> exit
//! ```

use std::fmt;

use crate::arena::Level;
use crate::player::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    LevelSelect,
    Settings,
    Playing,
    Paused,
    GameOver { winner: PlayerId },
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::MainMenu => f.write_str("main menu"),
            Screen::LevelSelect => f.write_str("level select"),
            Screen::Settings => f.write_str("settings"),
            Screen::Playing => f.write_str("playing"),
            Screen::Paused => f.write_str("paused"),
            Screen::GameOver { winner } => write!(f, "game over ({winner} wins)"),
        }
    }
}

/// Something the player asked for through a button or key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Play,
    OpenSettings,
    Back,
    SelectLevel(Level),
    ToggleDarkMode,
    CycleSpeed,
    Pause,
    Resume,
    PlayAgain,
    Quit,
}

/// What the driver must do in response to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Switch screens, keeping any match in progress.
    Goto(Screen),
    /// Drop any previous match and start a new one on this level.
    StartMatch(Level),
    ToggleDarkMode,
    CycleSpeed,
    Quit,
    /// Action does not apply to this screen.
    Ignore,
}

impl Screen {
    /// Pure transition table. Side effects are left to the driver.
    pub fn on(self, action: UiAction) -> Transition {
        use Transition::*;

        match (self, action) {
            (_, UiAction::Quit) => Quit,

            (Screen::MainMenu, UiAction::Play) => Goto(Screen::LevelSelect),
            (Screen::MainMenu, UiAction::OpenSettings) => Goto(Screen::Settings),

            (Screen::LevelSelect, UiAction::SelectLevel(level)) => StartMatch(level),
            (Screen::LevelSelect | Screen::Settings, UiAction::Back) => Goto(Screen::MainMenu),

            (Screen::Settings, UiAction::CycleSpeed) => CycleSpeed,

            (Screen::MainMenu | Screen::LevelSelect | Screen::Settings, UiAction::ToggleDarkMode) => {
                ToggleDarkMode
            }

            (Screen::Playing, UiAction::Pause) => Goto(Screen::Paused),
            (Screen::Paused, UiAction::Resume | UiAction::Pause) => Goto(Screen::Playing),

            (Screen::GameOver { .. }, UiAction::PlayAgain) => Goto(Screen::LevelSelect),

            _ => Ignore,
        }
    }

    /// Whether the simulation advances on this screen.
    pub fn is_simulating(self) -> bool {
        self == Screen::Playing
    }
}
