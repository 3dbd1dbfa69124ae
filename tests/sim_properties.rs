//! Property tests for the simulation invariants
//!
//! Wrap bounds, laser range culling, shield timer exclusivity, spawn
//! placement, and whole-state determinism under randomized inputs.

use glam::Vec2;
use proptest::prelude::*;

use neon_asteroids::consts::*;
use neon_asteroids::sim::{
    tick, Asteroid, Bomb, GamePhase, GameState, Movable, ShieldState, TickInput, Viewport,
};
use neon_asteroids::Tunables;

const VIEWPORT: Viewport = Viewport {
    width: 800.0,
    height: 600.0,
};

fn start_input() -> TickInput {
    TickInput {
        start: true,
        ..Default::default()
    }
}

/// Both coordinates inside `[-radius, dimension + radius]`.
fn within_wrap_bounds(pos: Vec2, radius: f32, viewport: Viewport) -> bool {
    pos.x >= -radius
        && pos.x <= viewport.width + radius
        && pos.y >= -radius
        && pos.y <= viewport.height + radius
}

proptest! {
    #[test]
    fn asteroid_wrap_bounds_hold(
        x in -2000.0f32..2000.0,
        y in -2000.0f32..2000.0,
        vx in -20.0f32..20.0,
        vy in -20.0f32..20.0,
        radius in ASTEROID_MIN_RADIUS..ASTEROID_MAX_RADIUS,
    ) {
        let mut asteroid = Asteroid {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            radius,
            base_angle: 0.0,
            jaggedness: vec![1.0; 8],
        };
        for _ in 0..5 {
            asteroid.advance(VIEWPORT);
            prop_assert!(within_wrap_bounds(asteroid.pos, asteroid.radius, VIEWPORT));
        }
    }

    #[test]
    fn bomb_wrap_bounds_hold(
        x in -2000.0f32..2000.0,
        y in -2000.0f32..2000.0,
        vx in -20.0f32..20.0,
        vy in -20.0f32..20.0,
    ) {
        let mut bomb = Bomb {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
        };
        for _ in 0..5 {
            bomb.advance(VIEWPORT);
            prop_assert!(within_wrap_bounds(bomb.pos, bomb.radius(), VIEWPORT));
        }
    }

    #[test]
    fn ship_stays_in_wrap_bounds_under_input(
        seed in any::<u64>(),
        moves in proptest::collection::vec(0u8..6, 1..200),
    ) {
        let mut state = GameState::new(seed, Tunables::default());
        tick(&mut state, &start_input(), VIEWPORT, 0.0);

        let mut now_ms = 0.0;
        for step in moves {
            let input = TickInput {
                turn_left: step == 1,
                turn_right: step == 2,
                thrust_forward: step == 3,
                thrust_reverse: step == 4,
                hyperdrive: step == 5,
                ..Default::default()
            };
            tick(&mut state, &input, VIEWPORT, now_ms);
            now_ms += 1000.0 / 60.0;
            if state.phase != GamePhase::Playing {
                break;
            }
            // Hyperdrive jumps are wrapped by the move step of the same
            // update, so the bound holds even on jump ticks
            prop_assert!(within_wrap_bounds(state.ship.pos, state.ship.radius, VIEWPORT));
        }
    }

    #[test]
    fn laser_range_cull_is_exact(width in 300.0f32..2000.0) {
        let viewport = Viewport::new(width, 600.0);
        let mut state = GameState::new(7, Tunables::default());
        tick(&mut state, &start_input(), viewport, 0.0);
        state.asteroids.clear();
        state.bombs.clear();

        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire, viewport, 0.0);
        prop_assert_eq!(state.ship.lasers.len(), 1);

        let limit = width * LASER_RANGE_FACTOR;
        let step = LASER_SPEED / FPS;
        let mut prev_dist = state.ship.lasers[0].dist;
        let mut culled = false;
        for _ in 0..2000 {
            tick(&mut state, &TickInput::default(), viewport, 0.0);
            match state.ship.lasers.first() {
                Some(laser) => {
                    // Monotone, in range, and advancing by one step per tick
                    prop_assert!(laser.dist > prev_dist);
                    prop_assert!(laser.dist <= limit + 1e-3);
                    prop_assert!((laser.dist - prev_dist - step).abs() < 1e-3);
                    prev_dist = laser.dist;
                }
                None => {
                    // Culled on the first tick that pushed it past the limit
                    prop_assert!(prev_dist + step > limit - 1e-3);
                    culled = true;
                    break;
                }
            }
        }
        prop_assert!(culled, "laser was never culled");
    }

    #[test]
    fn shield_timers_never_coexist(
        seed in any::<u64>(),
        presses in proptest::collection::vec(any::<bool>(), 1..900),
    ) {
        let mut state = GameState::new(seed, Tunables::default());
        tick(&mut state, &start_input(), VIEWPORT, 0.0);
        state.asteroids.clear();
        state.bombs.clear();

        for press in presses {
            let input = TickInput {
                shield: press,
                ..Default::default()
            };
            tick(&mut state, &input, VIEWPORT, 0.0);
            match state.ship.shield {
                ShieldState::Ready => {}
                ShieldState::Active { remaining } => prop_assert!(remaining > 0),
                ShieldState::Cooldown { remaining } => prop_assert!(remaining > 0),
            }
        }
    }

    #[test]
    fn spawns_clear_of_ship_when_space_allows(seed in any::<u64>()) {
        let mut state = GameState::new(seed, Tunables::default());
        tick(&mut state, &start_input(), VIEWPORT, 0.0);

        for asteroid in &state.asteroids {
            prop_assert!(asteroid.pos.distance(state.ship.pos) >= SPAWN_EXCLUSION_RADIUS);
        }
        for bomb in &state.bombs {
            prop_assert!(bomb.pos.distance(state.ship.pos) >= SPAWN_EXCLUSION_RADIUS);
        }
    }

    #[test]
    fn tiny_viewport_still_spawns_full_counts(seed in any::<u64>()) {
        // Exclusion radius exceeds every reachable distance; the bounded
        // fallback must still deliver the full collections
        let tiny = Viewport::new(120.0, 90.0);
        let mut state = GameState::new(seed, Tunables::default());
        tick(&mut state, &start_input(), tiny, 0.0);

        prop_assert_eq!(state.asteroids.len(), 6);
        prop_assert_eq!(state.bombs.len(), 2);
    }

    #[test]
    fn same_seed_same_inputs_same_state(
        seed in any::<u64>(),
        script in proptest::collection::vec(any::<u8>(), 1..150),
    ) {
        let mut state1 = GameState::new(seed, Tunables::default());
        let mut state2 = GameState::new(seed, Tunables::default());

        tick(&mut state1, &start_input(), VIEWPORT, 0.0);
        tick(&mut state2, &start_input(), VIEWPORT, 0.0);

        let mut now_ms = 0.0;
        for bits in script {
            let input = TickInput {
                turn_left: bits & 1 != 0,
                turn_right: bits & 2 != 0,
                thrust_forward: bits & 4 != 0,
                thrust_reverse: bits & 8 != 0,
                fire: bits & 16 != 0,
                shield: bits & 32 != 0,
                hyperdrive: bits & 64 != 0,
                start: false,
            };
            tick(&mut state1, &input, VIEWPORT, now_ms);
            tick(&mut state2, &input, VIEWPORT, now_ms);
            now_ms += 1000.0 / 60.0;
        }

        let snap1 = serde_json::to_string(&state1).unwrap();
        let snap2 = serde_json::to_string(&state2).unwrap();
        prop_assert_eq!(snap1, snap2);
    }
}
