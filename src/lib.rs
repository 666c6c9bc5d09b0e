//! # Flagged
//!
//! Two-player local capture the flag on a single 800x600 screen.
//!
//! ```text
//! geometry  - Rect / Vec2 and the overlap, containment and clamp tests
//! arena     - the four levels: obstacles, bases, flag homes, colors
//! player    - player identity, rect and carry state
//! input     - per-tick key snapshots and macroquad polling
//! state     - MatchState and the deterministic step()
//! events    - what happened during a step
//! settings  - speed, level, dark mode
//! screen    - menu state machine
//! ui        - button layouts and hit testing
//! driver    - fixed 60 Hz loop tying input, state and screens together
//! ```
//!
//! Everything except `input::poll` is independent of the window, so the
//! whole game flow can be driven from tests.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod arena;
pub mod driver;
pub mod error;
pub mod events;
pub mod geometry;
pub mod input;
pub mod player;
pub mod screen;
pub mod settings;
pub mod state;
pub mod ui;

pub use arena::{level_config, Level, LevelConfig};
pub use driver::{Driver, Flow, View};
pub use error::ConfigError;
pub use events::MatchEvent;
pub use geometry::{clamp_into, contains, intersects, Rect};
pub use input::{FrameInput, PlayerInput, TickInput};
pub use player::{Player, PlayerId};
pub use settings::{PlayerSpeed, Settings};
pub use state::{MatchState, StepResult, WINNING_SCORE};

/// Simulation tick rate (Hz)
pub const TICK_RATE: u32 = 60;
