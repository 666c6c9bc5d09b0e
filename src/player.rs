use std::fmt;

use crate::geometry::{clamp_into, Rect, Vec2};

/// Which side a player, base or flag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::One => f.write_str("Player 1"),
            PlayerId::Two => f.write_str("Player 2"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub rect: Rect,
    /// Holding the opponent's flag.
    pub carrying: bool,
}

impl Player {
    pub fn new(id: PlayerId, rect: Rect) -> Self {
        Self {
            id,
            rect,
            carrying: false,
        }
    }

    /// Move by `direction * speed` and keep the result inside `bounds`.
    /// Returns the rect held before the move so callers can roll back.
    pub fn advance(&mut self, direction: Vec2, speed: i32, bounds: &Rect) -> Rect {
        let previous = self.rect;
        self.rect = clamp_into(self.rect.translated(direction * speed), bounds);
        previous
    }

    pub fn drop_flag(&mut self) -> bool {
        std::mem::replace(&mut self.carrying, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::ARENA_BOUNDS;

    #[test]
    fn test_advance_diagonal_is_additive() {
        let mut player = Player::new(PlayerId::One, Rect::new(100, 100, 50, 50));
        let previous = player.advance(Vec2::new(1, -1), 5, &ARENA_BOUNDS);

        assert_eq!(previous, Rect::new(100, 100, 50, 50));
        assert_eq!(player.rect, Rect::new(105, 95, 50, 50));
    }

    #[test]
    fn test_advance_clamps_to_bounds() {
        let mut player = Player::new(PlayerId::Two, Rect::new(748, 2, 50, 50));
        player.advance(Vec2::new(1, -1), 7, &ARENA_BOUNDS);
        assert_eq!(player.rect, Rect::new(750, 0, 50, 50));
    }

    #[test]
    fn test_drop_flag_reports_previous() {
        let mut player = Player::new(PlayerId::One, Rect::new(0, 0, 50, 50));
        assert!(!player.drop_flag());
        player.carrying = true;
        assert!(player.drop_flag());
        assert!(!player.carrying);
    }

    #[test]
    fn test_ids() {
        assert_eq!(PlayerId::One.opponent(), PlayerId::Two);
        assert_eq!(PlayerId::Two.index(), 1);
        assert_eq!(PlayerId::One.to_string(), "Player 1");
    }
}
