use flagged::geometry::{contains, intersects, Rect};
use flagged::input::{PlayerInput, TickInput};
use flagged::state::MatchPhase;
use flagged::{level_config, Level, MatchEvent, MatchState, PlayerId, PlayerSpeed};
use proptest::prelude::*;

const P1: usize = 0;
const P2: usize = 1;

/// Step player 1 with `input` until `done` holds. Panics after `max` ticks.
fn drive_p1<F>(state: &mut MatchState, input: PlayerInput, max: u32, done: F) -> Vec<MatchEvent>
where
    F: Fn(&MatchState) -> bool,
{
    let mut events = Vec::new();
    for _ in 0..max {
        if done(state) {
            return events;
        }
        events.extend(state.step(&TickInput::new(input, PlayerInput::IDLE)).events);
    }
    assert!(done(state), "condition not reached after {max} ticks: {:?}", state.players[P1]);
    events
}

fn capture_and_return(state: &mut MatchState) -> Vec<MatchEvent> {
    let mut events = Vec::new();

    state.players[P1].rect = Rect::new(735, 245, 50, 50);
    events.extend(state.step(&TickInput::IDLE).events);
    assert!(state.players[P1].carrying);

    state.players[P1].rect = Rect::new(50, 275, 50, 50);
    events.extend(state.step(&TickInput::IDLE).events);
    events
}

#[test]
fn capture_and_return_on_foot() {
    let mut state = MatchState::new(Level::Fire, PlayerSpeed::Slow);
    // Keep player 2 out of the way so no tag interrupts the run
    state.players[P2].rect = Rect::new(400, 20, 50, 50);

    // Under the FIRE barriers, across, then up to the enemy flag
    drive_p1(&mut state, PlayerInput::DOWN, 200, |s| s.players[P1].rect.y == 550);
    drive_p1(&mut state, PlayerInput::RIGHT, 300, |s| s.players[P1].rect.x >= 730);
    let pickup = drive_p1(&mut state, PlayerInput::UP, 200, |s| s.players[P1].carrying);

    assert_eq!(pickup, vec![MatchEvent::FlagPickedUp { player: PlayerId::One }]);
    assert!(state.players[P1].carrying);
    assert!(state.flags[P2].captured);
    assert!(intersects(&state.players[P1].rect, &state.config.flag_home2));

    // Back the same way and up into base 1
    drive_p1(&mut state, PlayerInput::DOWN, 200, |s| s.players[P1].rect.y == 550);
    drive_p1(&mut state, PlayerInput::LEFT, 300, |s| s.players[P1].rect.x <= 60);
    let returned = drive_p1(&mut state, PlayerInput::UP, 200, |s| s.score.p1 == 1);

    assert_eq!(
        returned,
        vec![MatchEvent::FlagScored { player: PlayerId::One, new_score: 1 }]
    );
    assert!(contains(&state.config.base1, &state.players[P1].rect));
    assert!(!state.players[P1].carrying);
    assert!(!state.flags[P2].captured);
    assert_eq!(state.phase, MatchPhase::Playing);
}

#[test]
fn tag_drops_carried_flag_in_one_step() {
    let mut state = MatchState::new(Level::Water, PlayerSpeed::Normal);
    state.players[P1].rect = Rect::new(400, 200, 50, 50);
    state.players[P1].carrying = true;
    state.flags[P2].captured = true;
    state.players[P2].rect = Rect::new(420, 220, 50, 50);

    let result = state.step(&TickInput::IDLE);

    assert!(!state.players[P1].carrying);
    assert!(!state.flags[P2].captured);
    assert!(!state.players[P2].carrying);
    assert!(!state.flags[P1].captured);
    assert_eq!(result.events, vec![MatchEvent::FlagDropped { player: PlayerId::One }]);
}

#[test]
fn carrier_pair_both_drop_on_contact() {
    let mut state = MatchState::new(Level::Earth, PlayerSpeed::Slow);
    for (player, flag) in [(P1, P2), (P2, P1)] {
        state.players[player].carrying = true;
        state.flags[flag].captured = true;
    }
    state.players[P1].rect = Rect::new(300, 520, 50, 50);
    state.players[P2].rect = Rect::new(356, 520, 50, 50);

    // Player 2 walks left into player 1: 356 -> 353 -> 350 touches at the edge
    state.step(&TickInput::new(PlayerInput::IDLE, PlayerInput::LEFT));
    assert!(state.players[P2].carrying);
    state.step(&TickInput::new(PlayerInput::IDLE, PlayerInput::LEFT));

    assert!(state.players.iter().all(|p| !p.carrying));
    assert!(state.flags.iter().all(|f| !f.captured));
}

#[test]
fn three_returns_win_and_freeze_the_match() {
    let mut state = MatchState::new(Level::Wind, PlayerSpeed::Fast);
    // Player 2 idles up top, clear of the flag and base
    state.players[P2].rect = Rect::new(400, 20, 50, 50);

    for round in 1..=2 {
        capture_and_return(&mut state);
        assert_eq!(state.score.p1, round);
        assert_eq!(state.winner(), None, "score {round} must not end the match");
    }

    let last = capture_and_return(&mut state);
    assert_eq!(state.score.p1, 3);
    assert_eq!(state.winner(), Some(PlayerId::One));
    assert_eq!(state.winner().map(|w| w.to_string()), Some("Player 1".to_owned()));
    assert_eq!(last.last(), Some(&MatchEvent::MatchWon { winner: PlayerId::One }));

    // Nothing moves or scores once the match is over
    state.players[P1].carrying = true;
    let frozen = state.clone();
    for _ in 0..5 {
        let result = state.step(&TickInput::new(PlayerInput::RIGHT, PlayerInput::LEFT));
        assert!(result.match_ended);
        assert!(result.events.is_empty());
    }
    assert_eq!(state.score, frozen.score);
    assert_eq!(state.players, frozen.players);
    assert_eq!(state.tick, frozen.tick);
}

#[test]
fn idle_step_still_scores() {
    let mut state = MatchState::new(Level::Fire, PlayerSpeed::Slow);
    state.players[P2].carrying = true;
    state.flags[P1].captured = true;

    // Player 2 already stands inside base 2
    let result = state.step(&TickInput::IDLE);
    assert_eq!(state.score.p2, 1);
    assert_eq!(
        result.events,
        vec![MatchEvent::FlagScored { player: PlayerId::Two, new_score: 1 }]
    );
}

#[test]
fn player_two_scores_from_a_pickup() {
    let mut state = MatchState::new(Level::Water, PlayerSpeed::Normal);
    state.players[P1].rect = Rect::new(400, 200, 50, 50);

    // Touch flag 1 just outside base 1
    state.players[P2].rect = Rect::new(15, 245, 50, 50);
    let pickup = state.step(&TickInput::IDLE);
    assert_eq!(pickup.events, vec![MatchEvent::FlagPickedUp { player: PlayerId::Two }]);
    assert!(state.flags[P1].captured);

    // Five pixels short of base 2; one step right completes the return
    state.players[P2].rect = Rect::new(655, 275, 50, 50);
    assert!(!contains(&state.config.base2, &state.players[P2].rect));
    let returned = state.step(&TickInput::new(PlayerInput::IDLE, PlayerInput::RIGHT));

    assert_eq!(state.players[P2].rect, Rect::new(660, 275, 50, 50));
    assert_eq!(
        returned.events,
        vec![MatchEvent::FlagScored { player: PlayerId::Two, new_score: 1 }]
    );
    assert_eq!(state.score.p2, 1);
    assert_eq!(state.score.p1, 0);
    assert!(!state.players[P2].carrying);
    assert!(!state.flags[P1].captured);
}

fn any_level() -> impl Strategy<Value = Level> {
    prop::sample::select(Level::ALL.to_vec())
}

fn any_input() -> impl Strategy<Value = PlayerInput> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(up, down, left, right)| PlayerInput {
            up,
            down,
            left,
            right,
        },
    )
}

fn any_speed() -> impl Strategy<Value = PlayerSpeed> {
    prop::sample::select(vec![PlayerSpeed::Slow, PlayerSpeed::Normal, PlayerSpeed::Fast])
}

proptest! {
    /// Random walks never leave the arena, never end inside an obstacle,
    /// and never break the carry/captured pairing.
    #[test]
    fn random_play_keeps_invariants(
        level in any_level(),
        speed in any_speed(),
        inputs in prop::collection::vec((any_input(), any_input()), 1..300),
    ) {
        let mut state = MatchState::new(level, speed);
        let arena = state.rules.bounds;

        for (p1, p2) in inputs {
            let before = state.clone();
            state.step(&TickInput::new(p1, p2));

            for (i, player) in state.players.iter().enumerate() {
                prop_assert!(contains(&arena, &player.rect));
                for obstacle in state.config.obstacles() {
                    prop_assert!(!intersects(&player.rect, obstacle));
                }
                // Either moved freely or was fully reverted
                let prev = before.players[i].rect;
                let dir = (if i == P1 { p1 } else { p2 }).direction();
                let moved = flagged::clamp_into(prev.translated(dir * state.rules.player_speed), &arena);
                prop_assert!(player.rect == moved || player.rect == prev);

                prop_assert_eq!(player.carrying, state.flags[player.id.opponent().index()].captured);
            }

            prop_assert!(state.score.p1 >= before.score.p1);
            prop_assert!(state.score.p2 >= before.score.p2);
            if state.is_over() {
                break;
            }
        }
    }

    #[test]
    fn move_into_obstacle_is_fully_reverted(
        level in any_level(),
        speed in any_speed(),
        input in any_input(),
        obstacle_index in 0usize..5,
        side in 0u8..4,
        gap in 1i32..8,
        offset in -40i32..40,
    ) {
        let config = level_config(level);
        let o = config.obstacles[obstacle_index % config.obstacles.len()];
        let mut state = MatchState::new(level, speed);

        // Start a few pixels off one side of the obstacle
        let start = match side {
            0 => Rect::new(o.x - 50 - gap, o.y + offset, 50, 50),
            1 => Rect::new(o.right() + gap, o.y + offset, 50, 50),
            2 => Rect::new(o.x + offset, o.y - 50 - gap, 50, 50),
            _ => Rect::new(o.x + offset, o.bottom() + gap, 50, 50),
        };
        let start = flagged::clamp_into(start, &state.rules.bounds);
        prop_assume!(config.obstacles.iter().all(|o| !intersects(&start, o)));
        state.players[P1].rect = start;

        let target = flagged::clamp_into(
            start.translated(input.direction() * speed.pixels()),
            &state.rules.bounds,
        );
        state.step(&TickInput::new(input, PlayerInput::IDLE));

        if config.obstacles.iter().any(|o| intersects(&target, o)) {
            prop_assert_eq!(state.players[P1].rect, start);
        } else {
            prop_assert_eq!(state.players[P1].rect, target);
        }
    }
}
