//! Data-driven game balance
//!
//! The game ships two hull builds that differ only in these numbers and in
//! which auxiliary systems are fitted. Everything else (scoring, spawn
//! policy, timers) is shared and lives in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::FPS;

/// Gameplay balance for one ship build.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tunables {
    /// Hull height in px; the collision radius is half of this
    pub ship_size: f32,
    /// Turn rate in degrees per second
    pub turn_speed: f32,
    /// Forward acceleration in px/s²; reverse runs at half
    pub thrust: f32,
    /// Per-second velocity damping while coasting
    pub friction: f32,
    /// Shield system fitted
    pub shield: bool,
    /// Hyperdrive system fitted
    pub hyperdrive: bool,
    /// Reverse thruster fitted
    pub reverse_thrust: bool,
}

impl Default for Tunables {
    /// The standard build: nimble hull with every auxiliary system.
    fn default() -> Self {
        Self {
            ship_size: 30.0,
            turn_speed: 180.0,
            thrust: 2.5,
            friction: 0.7,
            shield: true,
            hyperdrive: true,
            reverse_thrust: true,
        }
    }
}

impl Tunables {
    /// The heavy build: a bigger, faster-turning hull with no auxiliary
    /// systems fitted (no shield, no hyperdrive, no reverse thrust).
    pub fn heavy() -> Self {
        Self {
            ship_size: 50.0,
            turn_speed: 360.0,
            thrust: 5.0,
            friction: 0.7,
            shield: false,
            hyperdrive: false,
            reverse_thrust: false,
        }
    }

    /// Ship collision radius for this build.
    #[inline]
    pub fn ship_radius(&self) -> f32 {
        self.ship_size / 2.0
    }

    /// Turn rate converted to radians per tick.
    #[inline]
    pub fn turn_rate_per_tick(&self) -> f32 {
        self.turn_speed.to_radians() / FPS
    }
}
