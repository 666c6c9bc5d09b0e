//! Fixed-rate game loop driver.
//!
//! The driver owns the current [`Screen`], the [`Settings`] and at most one
//! [`MatchState`]. Each frame it takes an input snapshot, resolves menu
//! actions, and runs as many 60 Hz simulation ticks as the elapsed time
//! allows. It draws nothing itself; the renderer asks for a [`View`].

use tracing::{debug, info};

use crate::events::MatchEvent;
use crate::input::{FrameInput, TickInput};
use crate::screen::{Screen, Transition, UiAction};
use crate::settings::Settings;
use crate::state::MatchState;
use crate::ui::{self, Button};
use crate::TICK_RATE;

/// Upper bound on catch-up ticks in one frame. Any larger backlog is dropped.
const MAX_TICKS_PER_FRAME: u32 = 5;

/// Fixed-step accumulator that turns variable frame times into whole ticks.
#[derive(Debug, Clone)]
pub struct TickPacer {
    step: f32,
    accumulator: f32,
}

impl TickPacer {
    pub fn new(rate: u32) -> Self {
        Self {
            step: 1.0 / rate as f32,
            accumulator: 0.0,
        }
    }

    /// Number of ticks due after `frame_time` seconds.
    pub fn advance(&mut self, frame_time: f32) -> u32 {
        self.accumulator += frame_time.max(0.0);

        let mut ticks = 0;
        while self.accumulator >= self.step {
            if ticks == MAX_TICKS_PER_FRAME {
                self.accumulator = 0.0;
                break;
            }
            self.accumulator -= self.step;
            ticks += 1;
        }
        ticks
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

/// Whether the frame loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What the renderer should draw this frame.
#[derive(Debug)]
pub enum View<'a> {
    Match {
        state: &'a MatchState,
        settings: &'a Settings,
    },
    Menu {
        screen: Screen,
        settings: &'a Settings,
        buttons: Vec<Button>,
    },
}

#[derive(Debug)]
pub struct Driver {
    screen: Screen,
    settings: Settings,
    session: Option<MatchState>,
    pacer: TickPacer,
}

impl Driver {
    pub fn new(settings: Settings) -> Self {
        Self {
            screen: Screen::MainMenu,
            settings,
            session: None,
            pacer: TickPacer::new(TICK_RATE),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The match in progress, including while paused.
    pub fn session(&self) -> Option<&MatchState> {
        self.session.as_ref()
    }

    pub fn buttons(&self) -> Vec<Button> {
        ui::buttons(self.screen, &self.settings)
    }

    pub fn view(&self) -> View<'_> {
        match (&self.session, self.screen) {
            (Some(state), Screen::Playing) => View::Match {
                state,
                settings: &self.settings,
            },
            _ => View::Menu {
                screen: self.screen,
                settings: &self.settings,
                buttons: self.buttons(),
            },
        }
    }

    /// Process one frame of input and advance the simulation by
    /// `frame_time` seconds worth of ticks.
    pub fn update(&mut self, input: &FrameInput, frame_time: f32) -> Flow {
        if input.quit {
            info!("quit requested");
            return Flow::Quit;
        }

        if input.pause && self.apply(UiAction::Pause) == Flow::Quit {
            return Flow::Quit;
        }

        if let Some((x, y)) = input.click {
            if let Some(action) = ui::hit(&self.buttons(), x, y) {
                if self.apply(action) == Flow::Quit {
                    return Flow::Quit;
                }
            }
        }

        if self.screen.is_simulating() {
            for _ in 0..self.pacer.advance(frame_time) {
                self.tick(&input.players);
                if !self.screen.is_simulating() {
                    break;
                }
            }
        }

        Flow::Continue
    }

    /// Apply a menu action to the current screen.
    pub fn apply(&mut self, action: UiAction) -> Flow {
        match self.screen.on(action) {
            Transition::Goto(next) => self.goto(next),
            Transition::StartMatch(level) => {
                self.settings.level = level;
                self.session = Some(MatchState::new(level, self.settings.player_speed));
                self.goto(Screen::Playing);
            }
            Transition::ToggleDarkMode => {
                self.settings.toggle_dark_mode();
                info!(dark_mode = self.settings.dark_mode, "dark mode toggled");
            }
            Transition::CycleSpeed => {
                self.settings.cycle_speed();
                info!(speed = self.settings.player_speed.pixels(), "player speed changed");
            }
            Transition::Quit => {
                info!(screen = %self.screen, "quit selected");
                return Flow::Quit;
            }
            Transition::Ignore => {
                debug!(screen = %self.screen, ?action, "action ignored");
            }
        }
        Flow::Continue
    }

    /// Run exactly one simulation tick, if a match is being played.
    pub fn tick(&mut self, input: &TickInput) {
        if !self.screen.is_simulating() {
            return;
        }
        let Some(state) = self.session.as_mut() else {
            return;
        };

        let result = state.step(input);
        for event in &result.events {
            log_event(state.tick, event);
        }

        if let Some(winner) = result.winner {
            self.session = None;
            self.goto(Screen::GameOver { winner });
        }
    }

    fn goto(&mut self, next: Screen) {
        info!(from = %self.screen, to = %next, "screen changed");
        if next.is_simulating() {
            self.pacer.reset();
        }
        if matches!(next, Screen::MainMenu | Screen::LevelSelect) {
            self.session = None;
        }
        self.screen = next;
    }
}

fn log_event(tick: u32, event: &MatchEvent) {
    match *event {
        MatchEvent::FlagPickedUp { player } => info!(tick, %player, "flag picked up"),
        MatchEvent::FlagScored { player, new_score } => {
            info!(tick, %player, score = new_score, "flag returned")
        }
        MatchEvent::FlagDropped { player } => info!(tick, %player, "tagged, flag dropped"),
        MatchEvent::MatchWon { winner } => info!(tick, %winner, "match won"),
    }
}
