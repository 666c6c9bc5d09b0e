//! Input snapshots consumed by the driver, and the macroquad polling that fills them.

use macroquad::prelude::{
    is_key_down, is_key_pressed, is_mouse_button_pressed, is_quit_requested, mouse_position,
    KeyCode, MouseButton,
};

use crate::geometry::Vec2;

/// Direction keys held by one player this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl PlayerInput {
    pub const IDLE: PlayerInput = PlayerInput {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    pub const UP: PlayerInput = PlayerInput { up: true, ..Self::IDLE };
    pub const DOWN: PlayerInput = PlayerInput { down: true, ..Self::IDLE };
    pub const LEFT: PlayerInput = PlayerInput { left: true, ..Self::IDLE };
    pub const RIGHT: PlayerInput = PlayerInput { right: true, ..Self::IDLE };

    /// Unit step per axis in {-1, 0, 1}. Opposite keys cancel; diagonals are
    /// not normalized.
    pub fn direction(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| pos as i32 - neg as i32;
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }

    pub fn combine(self, other: PlayerInput) -> PlayerInput {
        PlayerInput {
            up: self.up || other.up,
            down: self.down || other.down,
            left: self.left || other.left,
            right: self.right || other.right,
        }
    }
}

/// Input for a single simulation step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub p1: PlayerInput,
    pub p2: PlayerInput,
}

impl TickInput {
    pub const IDLE: TickInput = TickInput {
        p1: PlayerInput::IDLE,
        p2: PlayerInput::IDLE,
    };

    pub fn new(p1: PlayerInput, p2: PlayerInput) -> Self {
        Self { p1, p2 }
    }
}

/// Everything sampled from the window in one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub players: TickInput,
    /// Escape pressed this frame.
    pub pause: bool,
    /// Left click position this frame, in window pixels.
    pub click: Option<(i32, i32)>,
    /// Window close requested.
    pub quit: bool,
}

/// Keyboard layout for one player.
#[derive(Debug, Clone, Copy)]
pub struct KeyBindings {
    pub up: KeyCode,
    pub down: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
}

impl KeyBindings {
    pub const PLAYER_ONE: KeyBindings = KeyBindings {
        up: KeyCode::W,
        down: KeyCode::S,
        left: KeyCode::A,
        right: KeyCode::D,
    };

    pub const PLAYER_TWO: KeyBindings = KeyBindings {
        up: KeyCode::Up,
        down: KeyCode::Down,
        left: KeyCode::Left,
        right: KeyCode::Right,
    };

    fn sample(&self) -> PlayerInput {
        PlayerInput {
            up: is_key_down(self.up),
            down: is_key_down(self.down),
            left: is_key_down(self.left),
            right: is_key_down(self.right),
        }
    }
}

/// Read the current keyboard and mouse state from macroquad.
pub fn poll() -> FrameInput {
    let click = is_mouse_button_pressed(MouseButton::Left).then(|| {
        let (x, y) = mouse_position();
        (x as i32, y as i32)
    });

    FrameInput {
        players: TickInput::new(
            KeyBindings::PLAYER_ONE.sample(),
            KeyBindings::PLAYER_TWO.sample(),
        ),
        pause: is_key_pressed(KeyCode::Escape),
        click,
        quit: is_quit_requested(),
    }
}
