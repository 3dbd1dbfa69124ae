//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call = one 60 Hz tick)
//! - Seeded RNG only
//! - Viewport and wall-clock supplied by the caller each tick
//! - No rendering or platform dependencies

pub mod collision;
pub mod ship;
pub mod state;
pub mod tick;

pub use collision::overlaps;
pub use ship::{Ship, ShieldState, TrailPoint};
pub use state::{
    Asteroid, Bomb, GamePhase, GameState, Laser, Movable, Particle, Viewport, MAX_PARTICLES,
};
pub use tick::{advance_level, start_game, tick, TickInput};
