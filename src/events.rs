//! Gameplay events reported by a single step.

use crate::player::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEvent {
    /// Player took the opponent's flag from its home slot.
    FlagPickedUp { player: PlayerId },

    /// Player brought the flag into their own base.
    FlagScored { player: PlayerId, new_score: u32 },

    /// Player was tagged while carrying; the flag went back home.
    FlagDropped { player: PlayerId },

    /// Player reached the winning score.
    MatchWon { winner: PlayerId },
}
