//! Verlet point masses used by chains.

use crate::config::ChainConfig;
use crate::float::Float;
use crate::pointer::Pointer;
use crate::vec::Vec2;

/// A Verlet point: velocity is implied by `current - previous`.
///
/// A fixed point is never moved by integration, constraint correction or
/// pointer collision.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChainPoint<F: Float> {
    pub current: Vec2<F>,
    pub previous: Vec2<F>,
    pub fixed: bool,
}

impl<F: Float> ChainPoint<F> {
    /// A free point at rest.
    pub fn new(pos: Vec2<F>) -> Self {
        ChainPoint { current: pos, previous: pos, fixed: false }
    }

    /// A point that never moves.
    pub fn fixed(pos: Vec2<F>) -> Self {
        ChainPoint { current: pos, previous: pos, fixed: true }
    }

    /// Damped Verlet step with the configured buoyancy.
    pub fn integrate(&mut self, dt: F, config: &ChainConfig<F>) {
        if self.fixed {
            return;
        }
        let mut velocity = (self.current - self.previous) * config.damping;
        velocity.clamp_scalar(-config.max_velocity, config.max_velocity);
        let acceleration = Vec2::new(F::zero(), config.buoyancy) * (F::half() * dt * dt);

        self.previous = self.current;
        self.current += velocity + acceleration;
    }

    /// Shift by a constraint correction, then resolve pointer overlap.
    pub fn constrain(&mut self, correction: Vec2<F>, pointer: &Pointer<F>) {
        if self.fixed {
            return;
        }
        self.current += correction;
        self.current = pointer.push_out(self.current);
    }

    /// Implied per-step displacement.
    pub fn velocity(&self) -> Vec2<F> {
        self.current - self.previous
    }
}
