//! Game state and core simulation types
//!
//! All state that must be persisted for determinism lives here. Particles are
//! the one exception: they are visual-only and skipped by serde, matching
//! their exclusion from gameplay.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ship::Ship;
use crate::consts::*;
use crate::tuning::Tunables;
use crate::{wrap_hard, wrap_with_margin};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting on the start screen for the first start input
    Start,
    /// Active gameplay
    Playing,
    /// Run ended; start input begins a fresh round
    GameOver,
}

/// Viewport dimensions in pixels, read fresh each tick
///
/// The canvas resizes with the window, so the simulation never owns this;
/// the caller passes the current size into every [`tick`](super::tick::tick).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center point, where the ship spawns
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Shared capability of every collidable entity
///
/// The collision sweeps only need a position and a circular radius; `advance`
/// is the passive per-tick drift (translate + toroidal wrap). The ship layers
/// its steering on top of this in [`Ship::update`].
pub trait Movable {
    fn position(&self) -> Vec2;
    fn radius(&self) -> f32;
    /// Advance one tick: translate by velocity and wrap at the viewport edges.
    fn advance(&mut self, viewport: Viewport);
}

/// A ship-fired projectile
///
/// Collision-wise a point (radius 0). Tracks cumulative distance so it can
/// despawn after covering 0.8x the viewport width, wraps included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Laser {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Total distance traveled since spawn, in px
    pub dist: f32,
}

impl Laser {
    /// Spawn a laser at `pos` moving along `angle` at [`LASER_SPEED`].
    pub fn new(pos: Vec2, angle: f32) -> Self {
        Self {
            pos,
            vel: crate::heading_vec(angle) * LASER_SPEED / FPS,
            dist: 0.0,
        }
    }

    /// True once the laser has outrun its range and should be culled.
    pub fn expired(&self, viewport: Viewport) -> bool {
        self.dist > viewport.width * LASER_RANGE_FACTOR
    }
}

impl Movable for Laser {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        0.0
    }

    fn advance(&mut self, viewport: Viewport) {
        self.pos += self.vel;
        self.dist += self.vel.length();
        // Lasers snap to the exact opposite edge, no margin
        self.pos.x = wrap_hard(self.pos.x, viewport.width);
        self.pos.y = wrap_hard(self.pos.y, viewport.height);
    }
}

/// A drifting asteroid
///
/// The jagged polygon (`base_angle` + per-vertex `jaggedness`) exists only for
/// the renderer; collision treats the asteroid as a circle of `radius`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Rotation of the first polygon vertex, radians
    pub base_angle: f32,
    /// Per-vertex radial scale in [0.8, 1.2); length is the vertex count
    pub jaggedness: Vec<f32>,
}

impl Asteroid {
    /// Roll a new asteroid at `pos` with random size, drift, and outline.
    pub fn new(pos: Vec2, rng: &mut Pcg32) -> Self {
        let radius = rng.random_range(ASTEROID_MIN_RADIUS..=ASTEROID_MAX_RADIUS);
        let vertices = rng.random_range(ASTEROID_MIN_VERTICES..=ASTEROID_MAX_VERTICES);
        let jaggedness = (0..vertices).map(|_| rng.random_range(0.8..1.2)).collect();
        Self {
            pos,
            vel: random_drift(rng, ASTEROID_DRIFT_SPEED),
            radius,
            base_angle: rng.random_range(0.0..std::f32::consts::TAU),
            jaggedness,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.jaggedness.len()
    }
}

impl Movable for Asteroid {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn advance(&mut self, viewport: Viewport) {
        self.pos += self.vel;
        self.pos.x = wrap_with_margin(self.pos.x, viewport.width, self.radius);
        self.pos.y = wrap_with_margin(self.pos.y, viewport.height, self.radius);
    }
}

/// A drifting bomb: fixed size, harsh score penalty when shot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bomb {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Bomb {
    pub fn new(pos: Vec2, rng: &mut Pcg32) -> Self {
        Self {
            pos,
            vel: random_drift(rng, BOMB_DRIFT_SPEED),
        }
    }
}

impl Movable for Bomb {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        BOMB_RADIUS
    }

    fn advance(&mut self, viewport: Viewport) {
        self.pos += self.vel;
        self.pos.x = wrap_with_margin(self.pos.x, viewport.width, BOMB_RADIUS);
        self.pos.y = wrap_with_margin(self.pos.y, viewport.height, BOMB_RADIUS);
    }
}

/// Per-axis drift velocity up to `max_speed` px/s in either direction.
fn random_drift(rng: &mut Pcg32, max_speed: f32) -> Vec2 {
    let axis = |rng: &mut Pcg32| {
        let v = rng.random::<f32>() * max_speed / FPS;
        if rng.random_bool(0.5) { v } else { -v }
    };
    Vec2::new(axis(&mut *rng), axis(rng))
}

/// A particle for explosion effects
///
/// No collision, no wrap; it fades out before leaving the screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// 0-1, decreases by `decay` each tick
    pub life: f32,
    decay: f32,
}

impl Particle {
    /// Scatter a particle from an explosion centered at `pos`.
    pub fn new(pos: Vec2, rng: &mut Pcg32) -> Self {
        // Random direction at 50-250 px/s, halved by the 0.5 centering
        let axis = |rng: &mut Pcg32| {
            (rng.random::<f32>() - 0.5) * (rng.random::<f32>() * 200.0 + 50.0) / FPS
        };
        Self {
            pos,
            vel: Vec2::new(axis(&mut *rng), axis(rng)),
            radius: rng.random::<f32>() * 3.0 + 1.0,
            life: 1.0,
            decay: rng.random_range(0.02..0.07),
        }
    }

    /// Advance one tick: drift, fade, shrink (radius floors at 0).
    pub fn advance(&mut self) {
        self.pos += self.vel;
        self.life -= self.decay;
        self.radius = (self.radius - PARTICLE_SHRINK_RATE).max(0.0);
    }

    pub fn alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Maximum particles; bursts evict the oldest beyond this
pub const MAX_PARTICLES: usize = 256;

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// RNG stream; every random draw in the simulation comes from here
    pub rng: Pcg32,
    /// Balance preset for this session's ship build
    pub tunables: Tunables,
    /// Current phase
    pub phase: GamePhase,
    /// Current level, 1-based once playing
    pub level: u32,
    /// Running score; bomb penalties can push it negative
    pub score: i64,
    /// Simulation tick counter, reset on game start
    pub time_ticks: u64,
    /// Player ship; recreated per game, placeholder before the first start
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    pub bombs: Vec<Bomb>,
    /// Visual particles (not gameplay-affecting)
    #[serde(skip)]
    pub particles: Vec<Particle>,
}

impl GameState {
    /// Create a fresh session with the given seed and ship build.
    pub fn new(seed: u64, tunables: Tunables) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tunables,
            phase: GamePhase::Start,
            level: 0,
            score: 0,
            time_ticks: 0,
            ship: Ship::new(Vec2::ZERO, &tunables),
            asteroids: Vec::new(),
            bombs: Vec::new(),
            particles: Vec::new(),
        }
    }

    /// Spawn an explosion burst of `count` particles at `pos`.
    ///
    /// The oldest particles are evicted past [`MAX_PARTICLES`] so a collision
    /// streak cannot grow the buffer without bound.
    pub fn spawn_burst(&mut self, pos: Vec2, count: usize) {
        for _ in 0..count {
            if self.particles.len() >= MAX_PARTICLES {
                self.particles.remove(0);
            }
            let particle = Particle::new(pos, &mut self.rng);
            self.particles.push(particle);
        }
    }
}
