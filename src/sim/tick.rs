//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation deterministically: phase
//! dispatch, entity updates, then the collision and scoring sweeps in a fixed
//! order. The sweep order decides which entity wins a near-simultaneous
//! multi-hit, so it must never be reshuffled.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::overlaps;
use super::ship::Ship;
use super::state::{Asteroid, Bomb, GamePhase, GameState, Movable, Viewport};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
///
/// Latched booleans sampled once per tick by the input collaborator; `start`
/// is edge-triggered and only read on the start and game-over screens.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust_forward: bool,
    pub thrust_reverse: bool,
    pub fire: bool,
    /// Raise the shield (ignored on builds without one)
    pub shield: bool,
    /// Trigger a hyperdrive jump (ignored on builds without one)
    pub hyperdrive: bool,
    /// Begin a new round from the start or game-over screen
    pub start: bool,
}

/// Advance the game state by one fixed timestep.
///
/// `viewport` is the current canvas size and `now_ms` the host wall clock;
/// both are read-only inputs the simulation never owns. The wall clock gates
/// exactly one thing, the fire-rate limit.
pub fn tick(state: &mut GameState, input: &TickInput, viewport: Viewport, now_ms: f64) {
    match state.phase {
        GamePhase::Start | GamePhase::GameOver => {
            if input.start {
                start_game(state, viewport);
            }
        }
        GamePhase::Playing => playing_tick(state, input, viewport, now_ms),
    }
}

/// Begin a new round: fresh ship at the viewport center, score and level
/// reset, level 1 spawned. Particles from the previous round keep fading.
pub fn start_game(state: &mut GameState, viewport: Viewport) {
    state.ship = Ship::new(viewport.center(), &state.tunables);
    state.level = 0;
    state.score = 0;
    state.time_ticks = 0;
    advance_level(state, viewport);
    state.phase = GamePhase::Playing;
    log::info!("game start: seed {}", state.seed);
}

fn playing_tick(state: &mut GameState, input: &TickInput, viewport: Viewport, now_ms: f64) {
    state.time_ticks += 1;

    state.ship.update(input, viewport, &state.tunables, now_ms);

    for asteroid in &mut state.asteroids {
        asteroid.advance(viewport);
    }
    sweep_laser_asteroid(state, viewport);

    for bomb in &mut state.bombs {
        bomb.advance(viewport);
    }
    sweep_laser_bomb(state);

    sweep_ship_asteroid(state, viewport);
    // Runs even after a fatal asteroid hit; an overlapping bomb still adds
    // its burst to the wreck
    sweep_ship_bomb(state);

    for particle in &mut state.particles {
        particle.advance();
    }
    state.particles.retain(|p| p.alive());
}

/// Lasers vs asteroids, both in reverse index order. A laser is consumed by
/// its first hit. Clearing the field advances the level immediately, so the
/// remaining sweeps this tick run against the rebuilt collections.
fn sweep_laser_asteroid(state: &mut GameState, viewport: Viewport) {
    let mut i = state.asteroids.len();
    while i > 0 {
        i -= 1;
        let mut j = state.ship.lasers.len();
        while j > 0 {
            j -= 1;
            if overlaps(&state.asteroids[i], &state.ship.lasers[j]) {
                let hit = state.asteroids[i].pos;
                state.spawn_burst(hit, LASER_ASTEROID_BURST);
                state.ship.lasers.remove(j);
                state.asteroids.remove(i);
                state.score += SCORE_ASTEROID;
                if state.asteroids.is_empty() {
                    advance_level(state, viewport);
                }
                break;
            }
        }
    }
}

/// Lasers vs bombs; shooting a bomb is a mistake the score remembers.
fn sweep_laser_bomb(state: &mut GameState) {
    let mut i = state.bombs.len();
    while i > 0 {
        i -= 1;
        let mut j = state.ship.lasers.len();
        while j > 0 {
            j -= 1;
            if overlaps(&state.bombs[i], &state.ship.lasers[j]) {
                let hit = state.bombs[i].pos;
                state.spawn_burst(hit, LASER_BOMB_BURST);
                state.ship.lasers.remove(j);
                state.bombs.remove(i);
                state.score -= SCORE_BOMB_PENALTY;
                break;
            }
        }
    }
}

/// Ship vs asteroids, forward order, at most one contact resolved per tick.
/// A raised shield turns the contact into a kill; otherwise it is fatal.
fn sweep_ship_asteroid(state: &mut GameState, viewport: Viewport) {
    for i in 0..state.asteroids.len() {
        if overlaps(&state.ship, &state.asteroids[i]) {
            if state.ship.shield.is_active() {
                let hit = state.asteroids[i].pos;
                state.spawn_burst(hit, SHIELD_RAM_BURST);
                state.asteroids.remove(i);
                state.score += SCORE_SHIELD_RAM;
                if state.asteroids.is_empty() {
                    advance_level(state, viewport);
                }
            } else {
                let wreck = state.ship.pos;
                state.spawn_burst(wreck, FATAL_ASTEROID_BURST);
                game_over(state);
            }
            break;
        }
    }
}

/// Ship vs bombs. The shield saves the ship but never the bomb, and a
/// shielded ram scores nothing.
fn sweep_ship_bomb(state: &mut GameState) {
    for i in 0..state.bombs.len() {
        if overlaps(&state.ship, &state.bombs[i]) {
            if state.ship.shield.is_active() {
                let hit = state.bombs[i].pos;
                state.spawn_burst(hit, SHIELD_RAM_BURST);
                state.bombs.remove(i);
            } else {
                let wreck = state.ship.pos;
                state.spawn_burst(wreck, FATAL_BOMB_BURST);
                game_over(state);
            }
            break;
        }
    }
}

fn game_over(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    log::info!(
        "game over: level {} score {} after {} ticks",
        state.level,
        state.score,
        state.time_ticks
    );
}

/// Advance to the next level, rebuilding both hazard collections from
/// scratch: `level + 5` asteroids and `level / 2 + 2` bombs, each placed
/// clear of the ship.
pub fn advance_level(state: &mut GameState, viewport: Viewport) {
    state.level += 1;
    let asteroid_count = state.level as usize + 5;
    let bomb_count = state.level as usize / 2 + 2;
    log::info!(
        "level {}: spawning {} asteroids, {} bombs",
        state.level,
        asteroid_count,
        bomb_count
    );

    let ship_pos = state.ship.pos;

    let mut asteroids = Vec::with_capacity(asteroid_count);
    for _ in 0..asteroid_count {
        let pos = place_clear_of_ship(&mut state.rng, ship_pos, viewport);
        asteroids.push(Asteroid::new(pos, &mut state.rng));
    }
    state.asteroids = asteroids;

    let mut bombs = Vec::with_capacity(bomb_count);
    for _ in 0..bomb_count {
        let pos = place_clear_of_ship(&mut state.rng, ship_pos, viewport);
        bombs.push(Bomb::new(pos, &mut state.rng));
    }
    state.bombs = bombs;
}

/// Rejection-sample a spawn point at least [`SPAWN_EXCLUSION_RADIUS`] from
/// the ship; coordinates are floored to whole pixels. A viewport too small to
/// ever satisfy the exclusion would loop forever, so after
/// [`MAX_PLACEMENT_ATTEMPTS`] the draw is accepted unconstrained.
fn place_clear_of_ship(rng: &mut Pcg32, ship_pos: Vec2, viewport: Viewport) -> Vec2 {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let p = Vec2::new(
            rng.random_range(0.0..viewport.width).floor(),
            rng.random_range(0.0..viewport.height).floor(),
        );
        if p.distance(ship_pos) >= SPAWN_EXCLUSION_RADIUS {
            return p;
        }
    }
    log::warn!(
        "no spawn point clear of the ship after {} attempts; placing unconstrained",
        MAX_PLACEMENT_ATTEMPTS
    );
    Vec2::new(
        rng.random_range(0.0..viewport.width).floor(),
        rng.random_range(0.0..viewport.height).floor(),
    )
}
