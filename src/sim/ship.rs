//! Player ship controller
//!
//! Turning, thrust integration, firing, and the two auxiliary systems (shield
//! and hyperdrive). Which systems are fitted comes from the session's
//! [`Tunables`]; the heavy build has none of them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Laser, Movable, Viewport};
use super::tick::TickInput;
use crate::consts::*;
use crate::tuning::Tunables;
use crate::{heading_vec, wrap_with_margin};

/// Shield system state machine
///
/// Strictly sequential: Ready -> Active (3 s) -> Cooldown (10 s) -> Ready.
/// The enum carries the one live timer, so the mutual-exclusion invariant
/// (never active and cooling down at once) holds structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShieldState {
    /// Off, ready to activate
    Ready,
    /// Raised; the ship rams asteroids and shrugs off bombs
    Active { remaining: u32 },
    /// Recharging; activation input is ignored
    Cooldown { remaining: u32 },
}

impl ShieldState {
    pub fn is_active(&self) -> bool {
        matches!(self, ShieldState::Active { .. })
    }

    /// Ticks until the shield can be raised again (0 when ready or active).
    pub fn cooldown_ticks(&self) -> u32 {
        match self {
            ShieldState::Cooldown { remaining } => *remaining,
            _ => 0,
        }
    }
}

/// A fading afterimage left behind by a hyperdrive jump (visual only)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub angle: f32,
    /// 1.0 at spawn, fades by [`TRAIL_DECAY`] per tick
    pub life: f32,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    /// Heading in radians; 0 points right, pi/2 up (canvas y grows down)
    pub angle: f32,
    /// Turn applied last tick, rad/tick (for the renderer's banking cue)
    pub rot: f32,
    pub vel: Vec2,
    pub radius: f32,
    /// True while a thruster fired this tick (drives the exhaust glow)
    pub thrusting: bool,
    /// Live projectiles, owned by the ship; at most [`MAX_LASERS`]
    pub lasers: Vec<Laser>,
    pub shield: ShieldState,
    /// Ticks until the hyperdrive can jump again
    pub hyper_cooldown: u32,
    /// Hyperdrive afterimages (newest last)
    pub trail: Vec<TrailPoint>,
    /// Wall-clock instant (ms) at which the next shot is allowed
    pub fire_ready_at_ms: f64,
}

impl Ship {
    /// A fresh ship at `pos`, facing up, at rest.
    pub fn new(pos: Vec2, tunables: &Tunables) -> Self {
        Self {
            pos,
            angle: std::f32::consts::FRAC_PI_2,
            rot: 0.0,
            vel: Vec2::ZERO,
            radius: tunables.ship_radius(),
            thrusting: false,
            lasers: Vec::new(),
            shield: ShieldState::Ready,
            hyper_cooldown: 0,
            trail: Vec::new(),
            fire_ready_at_ms: 0.0,
        }
    }

    /// Advance the ship one tick under the given input.
    ///
    /// Order matters and is fixed: turn, shield, hyperdrive, trail decay,
    /// thrust, move+wrap, fire, then laser advance/cull.
    pub fn update(
        &mut self,
        input: &TickInput,
        viewport: Viewport,
        tunables: &Tunables,
        now_ms: f64,
    ) {
        // Turn: full rate or nothing, no angular inertia
        self.rot = if input.turn_left {
            tunables.turn_rate_per_tick()
        } else if input.turn_right {
            -tunables.turn_rate_per_tick()
        } else {
            0.0
        };
        self.angle += self.rot;

        self.update_shield(input.shield && tunables.shield);
        self.update_hyperdrive(input.hyperdrive && tunables.hyperdrive);

        for point in &mut self.trail {
            point.life -= TRAIL_DECAY;
        }
        self.trail.retain(|p| p.life > 0.0);

        // Thrust integration; coasting damps velocity toward rest
        if input.thrust_forward {
            self.thrusting = true;
            self.vel += tunables.thrust * heading_vec(self.angle) / FPS;
        } else if input.thrust_reverse && tunables.reverse_thrust {
            self.thrusting = true;
            self.vel -= tunables.thrust / 2.0 * heading_vec(self.angle) / FPS;
        } else {
            self.thrusting = false;
            self.vel -= tunables.friction * self.vel / FPS;
        }

        self.advance(viewport);

        if input.fire {
            self.shoot(now_ms);
        }

        for laser in &mut self.lasers {
            laser.advance(viewport);
        }
        self.lasers.retain(|l| !l.expired(viewport));
    }

    /// Fire a laser from the nose, if the refractory period has elapsed and
    /// fewer than [`MAX_LASERS`] are in flight. A blocked shot does not arm
    /// the cooldown.
    pub fn shoot(&mut self, now_ms: f64) {
        if now_ms >= self.fire_ready_at_ms && self.lasers.len() < MAX_LASERS {
            let nose = self.pos + 4.0 / 3.0 * self.radius * heading_vec(self.angle);
            self.lasers.push(Laser::new(nose, self.angle));
            self.fire_ready_at_ms = now_ms + FIRE_COOLDOWN_MS;
        }
    }

    fn update_shield(&mut self, activate: bool) {
        if activate && self.shield == ShieldState::Ready {
            self.shield = ShieldState::Active {
                remaining: SHIELD_ACTIVE_TICKS,
            };
        }
        self.shield = match self.shield {
            ShieldState::Ready => ShieldState::Ready,
            ShieldState::Active { remaining } => {
                let remaining = remaining - 1;
                if remaining == 0 {
                    ShieldState::Cooldown {
                        remaining: SHIELD_COOLDOWN_TICKS,
                    }
                } else {
                    ShieldState::Active { remaining }
                }
            }
            ShieldState::Cooldown { remaining } => {
                let remaining = remaining - 1;
                if remaining == 0 {
                    ShieldState::Ready
                } else {
                    ShieldState::Cooldown { remaining }
                }
            }
        };
    }

    fn update_hyperdrive(&mut self, activate: bool) {
        if activate && self.hyper_cooldown == 0 {
            // Afterimages along the jump path, then the jump itself.
            // No invulnerability: jumping into a hazard is fatal next sweep.
            let dir = heading_vec(self.angle);
            for i in 0..TRAIL_POINTS {
                self.trail.push(TrailPoint {
                    pos: self.pos + i as f32 * TRAIL_SPACING * dir,
                    angle: self.angle,
                    life: 1.0,
                });
            }
            self.pos += HYPER_JUMP_DISTANCE * dir;
            self.hyper_cooldown = HYPER_COOLDOWN_TICKS;
        }
        if self.hyper_cooldown > 0 {
            self.hyper_cooldown -= 1;
        }
    }
}

impl Movable for Ship {
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
