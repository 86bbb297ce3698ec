//! Damped pendulum driving the swinging ID card.
//!
//! Integrated with semi-implicit Euler in units of "frames" (16 ms). The
//! host calls [`Pendulum::step`] once per rendered frame while
//! [`Pendulum::is_settling`] is true and stops polling otherwise.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::config::PhysicsConfig;

/// Nominal frame length the constants are tuned for.
const FRAME: Duration = Duration::from_millis(16);

/// Below this angle (and `min_velocity`) the card is considered at rest.
const REST_ANGLE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsState {
    /// Radians, positive swings right.
    pub angle: f64,
    /// Radians per frame.
    pub angular_velocity: f64,
    pub is_settling: bool,
    pub last_sample: Instant,
}

/// Presentation values derived from the angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPose {
    pub rotation_deg: f64,
    /// Horizontal drop-shadow offset, opposite to the swing.
    pub shadow_offset: f64,
    pub shadow_blur: f64,
}

impl CardPose {
    pub fn from_angle(angle: f64) -> Self {
        Self {
            rotation_deg: angle.to_degrees(),
            shadow_offset: -angle * 20.0,
            shadow_blur: 10.0 + angle.abs() * 30.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Pendulum {
    state: PhysicsState,
    config: PhysicsConfig,
}

impl Pendulum {
    /// A pendulum hanging still.
    pub fn new(config: PhysicsConfig, now: Instant) -> Self {
        Self {
            state: PhysicsState {
                angle: 0.0,
                angular_velocity: 0.0,
                is_settling: false,
                last_sample: now,
            },
            config,
        }
    }

    pub fn state(&self) -> PhysicsState {
        self.state
    }

    pub fn is_settling(&self) -> bool {
        self.state.is_settling
    }

    pub fn pose(&self) -> CardPose {
        CardPose::from_angle(self.state.angle)
    }

    /// Kick the pendulum in a random direction.
    pub fn impulse<R: Rng + ?Sized>(&mut self, strength: f64, now: Instant, rng: &mut R) {
        let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.impulse_towards(strength * direction, now);
    }

    /// Kick the pendulum; the sign of `signed_strength` picks the direction.
    pub fn impulse_towards(&mut self, signed_strength: f64, now: Instant) {
        if !self.state.is_settling {
            // Restart the clock so the idle period does not count as a step
            self.state.last_sample = now;
        }
        self.state.angular_velocity += signed_strength * self.config.impulse_scale;
        self.state.is_settling = true;
        tracing::trace!(
            velocity = self.state.angular_velocity,
            "pendulum impulse"
        );
    }

    /// Advance the simulation to `now`.
    pub fn step(&mut self, now: Instant) -> PhysicsState {
        if !self.state.is_settling {
            return self.state;
        }

        let elapsed = now.saturating_duration_since(self.state.last_sample);
        let dt = (elapsed.as_secs_f64() / FRAME.as_secs_f64()).min(1.0);
        self.state.last_sample = now;

        let cfg = &self.config;
        let acceleration = -(cfg.gravity / cfg.length) * self.state.angle.sin();
        let velocity = (self.state.angular_velocity + acceleration * dt) * cfg.damping;
        let mut angle = self.state.angle + velocity * dt;
        let mut velocity = velocity;

        if angle.abs() > cfg.max_angle {
            angle = cfg.max_angle.copysign(angle);
            velocity = 0.0;
        }

        if velocity.abs() < cfg.min_velocity && angle.abs() < REST_ANGLE {
            self.state.angle = 0.0;
            self.state.angular_velocity = 0.0;
            self.state.is_settling = false;
            tracing::trace!("pendulum settled");
        } else {
            self.state.angle = angle;
            self.state.angular_velocity = velocity;
        }

        self.state
    }
}
