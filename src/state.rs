//! Match state and the per-tick transition.
//!
//! One [`MatchState`] exists per match. It is created by [`MatchState::new`]
//! when a level is chosen, advanced only through [`MatchState::step`], and
//! dropped when the match ends or is restarted.

use tracing::{info, warn};

use crate::arena::{level_config, Level, LevelConfig, ARENA_BOUNDS};
use crate::events::MatchEvent;
use crate::geometry::{contains, intersects, Rect};
use crate::input::TickInput;
use crate::player::{Player, PlayerId};
use crate::settings::PlayerSpeed;

/// Score that ends the match.
pub const WINNING_SCORE: u32 = 3;

/// Rules captured at match start. Immutable for the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRules {
    /// Pixels per tick on each pressed axis.
    pub player_speed: i32,
    pub winning_score: u32,
    pub bounds: Rect,
}

impl MatchRules {
    pub fn new(speed: PlayerSpeed) -> Self {
        Self {
            player_speed: speed.pixels(),
            winning_score: WINNING_SCORE,
            bounds: ARENA_BOUNDS,
        }
    }
}

/// A flag and its home slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    /// Whose base the flag belongs next to.
    pub owner: PlayerId,
    pub home: Rect,
    /// Away from home, carried by the opponent.
    pub captured: bool,
}

impl Flag {
    pub fn new(owner: PlayerId, home: Rect) -> Self {
        Self {
            owner,
            home,
            captured: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.captured
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub p1: u32,
    pub p2: u32,
}

impl Score {
    pub fn get(&self, id: PlayerId) -> u32 {
        match id {
            PlayerId::One => self.p1,
            PlayerId::Two => self.p2,
        }
    }

    fn increment(&mut self, id: PlayerId) -> u32 {
        let slot = match id {
            PlayerId::One => &mut self.p1,
            PlayerId::Two => &mut self.p2,
        };
        *slot += 1;
        *slot
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Playing,
    Ended { winner: PlayerId },
}

/// Result of a step.
#[derive(Debug, Default)]
pub struct StepResult {
    /// Events generated this step, in rule order
    pub events: Vec<MatchEvent>,
    /// Whether the match is over after this step
    pub match_ended: bool,
    /// Winner, once the match is over
    pub winner: Option<PlayerId>,
}

#[derive(Debug, Clone)]
pub struct MatchState {
    pub config: LevelConfig,
    pub rules: MatchRules,
    /// Indexed by [`PlayerId::index`].
    pub players: [Player; 2],
    /// Indexed by the owning player's [`PlayerId::index`].
    pub flags: [Flag; 2],
    pub score: Score,
    pub phase: MatchPhase,
    /// Steps applied so far.
    pub tick: u32,
}

impl MatchState {
    /// Fresh match on `level`: players at their spawn points, flags home,
    /// score 0-0.
    pub fn new(level: Level, speed: PlayerSpeed) -> Self {
        info!(%level, speed = speed.pixels(), "match started");
        Self::with_rules(level_config(level), MatchRules::new(speed))
    }

    pub fn with_rules(config: LevelConfig, rules: MatchRules) -> Self {
        let players = [
            Player::new(PlayerId::One, config.player1_start),
            Player::new(PlayerId::Two, config.player2_start),
        ];
        let flags = [
            Flag::new(PlayerId::One, config.flag_home1),
            Flag::new(PlayerId::Two, config.flag_home2),
        ];

        Self {
            config,
            rules,
            players,
            flags,
            score: Score::default(),
            phase: MatchPhase::Playing,
            tick: 0,
        }
    }

    pub fn level(&self) -> Level {
        self.config.level
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// The flag that sits next to `owner`'s base.
    pub fn flag(&self, owner: PlayerId) -> &Flag {
        &self.flags[owner.index()]
    }

    pub fn base(&self, id: PlayerId) -> &Rect {
        match id {
            PlayerId::One => &self.config.base1,
            PlayerId::Two => &self.config.base2,
        }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            MatchPhase::Playing => None,
            MatchPhase::Ended { winner } => Some(winner),
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Advance the match by one input sample.
    ///
    /// Rules run in a fixed order: move and clamp, obstacle rollback, flag
    /// pickup, scoring, tagging, win check. All of them run even when no key
    /// is held, since a stationary overlap can still tag or score.
    ///
    /// Once the match has a winner this is a no-op.
    pub fn step(&mut self, input: &TickInput) -> StepResult {
        let mut result = StepResult::default();

        if let MatchPhase::Ended { winner } = self.phase {
            warn!(%winner, "step called on a finished match");
            result.match_ended = true;
            result.winner = Some(winner);
            return result;
        }

        self.tick += 1;

        // 1. Move, clamped to the arena
        let previous = self.move_players(input);

        // 2. Obstacles revert the whole move
        self.resolve_obstacles(previous);

        // 3. Flag pickup
        self.process_pickups(&mut result);

        // 4. Scoring
        self.process_returns(&mut result);

        // 5. Tagging
        self.process_tag(&mut result);

        // 6. Win check
        self.check_win(&mut result);

        result
    }

    fn move_players(&mut self, input: &TickInput) -> [Rect; 2] {
        let speed = self.rules.player_speed;
        let bounds = self.rules.bounds;
        let [p1, p2] = &mut self.players;

        [
            p1.advance(input.p1.direction(), speed, &bounds),
            p2.advance(input.p2.direction(), speed, &bounds),
        ]
    }

    fn resolve_obstacles(&mut self, previous: [Rect; 2]) {
        // A pre-move rect never touches an obstacle, so a revert cannot be
        // undone by a later obstacle in the list.
        for obstacle in &self.config.obstacles {
            for (player, prev) in self.players.iter_mut().zip(previous) {
                if intersects(&player.rect, obstacle) {
                    player.rect = prev;
                }
            }
        }
    }

    fn process_pickups(&mut self, result: &mut StepResult) {
        for player in self.players.iter_mut() {
            let target = &mut self.flags[player.id.opponent().index()];
            if !player.carrying && intersects(&player.rect, &target.home) {
                player.carrying = true;
                target.captured = true;
                result.events.push(MatchEvent::FlagPickedUp { player: player.id });
            }
        }
    }

    fn process_returns(&mut self, result: &mut StepResult) {
        for player in self.players.iter_mut() {
            let base = match player.id {
                PlayerId::One => &self.config.base1,
                PlayerId::Two => &self.config.base2,
            };
            if player.carrying && contains(base, &player.rect) {
                player.carrying = false;
                self.flags[player.id.opponent().index()].captured = false;
                let new_score = self.score.increment(player.id);
                result.events.push(MatchEvent::FlagScored {
                    player: player.id,
                    new_score,
                });
            }
        }
    }

    fn process_tag(&mut self, result: &mut StepResult) {
        if !intersects(&self.players[0].rect, &self.players[1].rect) {
            return;
        }

        for player in self.players.iter_mut() {
            if player.drop_flag() {
                result.events.push(MatchEvent::FlagDropped { player: player.id });
            }
        }
        for flag in self.flags.iter_mut() {
            flag.captured = false;
        }
    }

    fn check_win(&mut self, result: &mut StepResult) {
        let winner = [PlayerId::One, PlayerId::Two]
            .into_iter()
            .find(|id| self.score.get(*id) >= self.rules.winning_score);

        if let Some(winner) = winner {
            self.phase = MatchPhase::Ended { winner };
            result.events.push(MatchEvent::MatchWon { winner });
            result.match_ended = true;
            result.winner = Some(winner);
        }
    }
}
