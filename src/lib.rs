//! Neon Asteroids - a neon arcade shooter, simulation core only
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `tuning`: Data-driven game balance (the two ship builds)
//!
//! Rendering, input capture and the page shell are external collaborators:
//! they feed a [`sim::TickInput`] in and read the [`sim::GameState`] back out.

pub mod sim;
pub mod tuning;

pub use tuning::Tunables;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Simulation rate; one tick is 1/60 s
    pub const FPS: f32 = 60.0;

    /// Laser defaults
    pub const LASER_SPEED: f32 = 500.0; // px/s
    /// A laser despawns once it has traveled this fraction of the viewport width
    pub const LASER_RANGE_FACTOR: f32 = 0.8;
    /// Most lasers the ship may have in flight
    pub const MAX_LASERS: usize = 10;
    /// Wall-clock refractory period between shots
    pub const FIRE_COOLDOWN_MS: f64 = 250.0;

    /// Shield timers
    pub const SHIELD_ACTIVE_TICKS: u32 = 180; // 3 s at 60 fps
    pub const SHIELD_COOLDOWN_TICKS: u32 = 600; // 10 s

    /// Hyperdrive
    pub const HYPER_COOLDOWN_TICKS: u32 = 300; // 5 s
    pub const HYPER_JUMP_DISTANCE: f32 = 150.0;
    pub const TRAIL_POINTS: usize = 5;
    pub const TRAIL_SPACING: f32 = 30.0;
    pub const TRAIL_DECAY: f32 = 0.05;

    /// Asteroid defaults
    pub const ASTEROID_MIN_RADIUS: f32 = 20.0;
    pub const ASTEROID_MAX_RADIUS: f32 = 50.0;
    pub const ASTEROID_DRIFT_SPEED: f32 = 50.0; // px/s, per-axis maximum
    pub const ASTEROID_MIN_VERTICES: u32 = 5;
    pub const ASTEROID_MAX_VERTICES: u32 = 14;

    /// Bomb defaults
    pub const BOMB_RADIUS: f32 = 25.0;
    pub const BOMB_DRIFT_SPEED: f32 = 40.0; // px/s, per-axis maximum

    /// Particle decay
    pub const PARTICLE_SHRINK_RATE: f32 = 0.05;

    /// Explosion burst sizes per collision kind
    pub const LASER_ASTEROID_BURST: usize = 10;
    pub const LASER_BOMB_BURST: usize = 20;
    pub const SHIELD_RAM_BURST: usize = 15;
    pub const FATAL_ASTEROID_BURST: usize = 30;
    pub const FATAL_BOMB_BURST: usize = 40;

    /// Scoring
    pub const SCORE_ASTEROID: i64 = 100;
    pub const SCORE_BOMB_PENALTY: i64 = 500;
    pub const SCORE_SHIELD_RAM: i64 = 50;

    /// Spawn placement
    pub const SPAWN_EXCLUSION_RADIUS: f32 = 150.0;
    /// Rejection-sampling bound; past this the placement falls back to an
    /// unconstrained draw instead of looping forever on tiny viewports
    pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;
}

/// Unit vector for a heading angle.
///
/// Canvas convention: x grows right, y grows down, so a heading of 0 points
/// right and π/2 points up.
#[inline]
pub fn heading_vec(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), -angle.sin())
}

/// Toroidal wrap with a radius margin: the entity leaves fully off one edge
/// before reappearing just off the opposite one.
#[inline]
pub fn wrap_with_margin(v: f32, limit: f32, margin: f32) -> f32 {
    if v < -margin {
        limit + margin
    } else if v > limit + margin {
        -margin
    } else {
        v
    }
}

/// Hard toroidal wrap to the exact edges (lasers use this; no margin).
#[inline]
pub fn wrap_hard(v: f32, limit: f32) -> f32 {
    if v < 0.0 {
        limit
    } else if v > limit {
        0.0
    } else {
        v
    }
}
