//! Flocking agents.
//!
//! Each boid blends three local rules into a desired heading:
//! 1. Separation: steer away from neighbors that are too close
//! 2. Cohesion: steer towards the centre of nearby neighbors
//! 3. Alignment: match the average heading of nearby neighbors
//!
//! Edge handling and pointer avoidance run after the rules and, when they
//! produce a direction, replace the rule heading outright for that step.

use crate::config::BoidConfig;
use crate::error::PhysicsError;
use crate::float::{uniform, Float};
use crate::pointer::Pointer;
use crate::vec::Vec2;
use rand::Rng;

/// Region a boid lives in.
///
/// Horizontally the region wraps once a boid is `margin` past an edge.
/// Vertically a boid is turned back once it comes within `margin` of an edge.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds<F: Float> {
    pub min: Vec2<F>,
    pub max: Vec2<F>,
    pub margin: F,
}

impl<F: Float> Bounds<F> {
    pub fn new(min: Vec2<F>, max: Vec2<F>, margin: F) -> Result<Self, PhysicsError> {
        let ordered = min.x <= max.x && min.y <= max.y;
        if !ordered || !(margin >= F::zero()) {
            return Err(PhysicsError::InvalidBounds);
        }
        Ok(Bounds { min, max, margin })
    }
}

/// What another boid looks like to the one being updated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Neighbor<F: Float> {
    pub position: Vec2<F>,
    pub direction: Vec2<F>,
}

/// Which influence decided a boid's desired heading on its last update.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Steering {
    /// Separation, cohesion and alignment.
    Rules,
    /// Turned back from the top or bottom edge.
    Bounce,
    /// Inside the pointer circle, fleeing straight away from it.
    Flee,
    /// About to run into the pointer circle, steering around it.
    Avoid,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Boid<F: Float> {
    position: Vec2<F>,
    direction: Vec2<F>,
    bounds: Bounds<F>,
    config: BoidConfig<F>,
}

impl<F: Float> Boid<F> {
    /// Spawn at a random point inside `bounds` with a random heading.
    pub fn new<R: Rng + ?Sized>(bounds: Bounds<F>, config: BoidConfig<F>, rng: &mut R) -> Self {
        let position = Vec2::new(
            uniform(rng, bounds.min.x, bounds.max.x),
            uniform(rng, bounds.min.y, bounds.max.y),
        );
        let one = F::one();
        let direction = Vec2::new(uniform(rng, -one, one), uniform(rng, -one, one));
        Self::with_state(position, direction, bounds, config)
    }

    /// Place a boid explicitly. `direction` is normalized.
    pub fn with_state(
        position: Vec2<F>,
        direction: Vec2<F>,
        bounds: Bounds<F>,
        config: BoidConfig<F>,
    ) -> Self {
        Boid { position, direction: direction.normalize(), bounds, config }
    }

    pub fn position(&self) -> Vec2<F> {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2<F>) {
        self.position = position;
    }

    /// Unit heading.
    pub fn direction(&self) -> Vec2<F> {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Vec2<F>) {
        self.direction = direction.normalize();
    }

    pub fn bounds(&self) -> &Bounds<F> {
        &self.bounds
    }

    pub fn config(&self) -> &BoidConfig<F> {
        &self.config
    }

    pub fn neighbor(&self) -> Neighbor<F> {
        Neighbor { position: self.position, direction: self.direction }
    }

    /// Advance one frame.
    ///
    /// `neighbors` must not contain this boid. Returns which influence set
    /// the desired heading.
    pub fn update<I>(&mut self, neighbors: I, dt: F, pointer: &Pointer<F>) -> Steering
    where
        I: IntoIterator<Item = Neighbor<F>>,
    {
        let rules = self.flocking_direction(neighbors) * self.config.turn_factor_rules;

        let (steering, desired) = match self.avoid_collisions(pointer) {
            Some((steering, dir)) => {
                let weighted = dir * self.config.turn_factor_collisions;
                if weighted.length() > F::zero() {
                    (steering, weighted)
                } else {
                    (Steering::Rules, rules)
                }
            }
            None => (Steering::Rules, rules),
        };

        self.direction = (self.direction + (desired - self.direction) * dt).normalize();
        self.position += self.direction * (self.config.speed * dt);
        steering
    }

    /// Unit heading from separation, cohesion and alignment.
    ///
    /// With no neighbors in range this is the boid's own heading.
    pub fn flocking_direction<I>(&self, neighbors: I) -> Vec2<F>
    where
        I: IntoIterator<Item = Neighbor<F>>,
    {
        let cfg = &self.config;

        let mut separation = Vec2::zero();
        let mut separation_count = 0usize;
        let mut cohesion = Vec2::zero();
        let mut cohesion_count = 0usize;
        let mut alignment = self.direction;
        let mut alignment_count = 1usize;

        for other in neighbors {
            let distance = self.position.distance(other.position);

            if distance < cfg.separation_radius {
                separation += (other.position - self.position).normalize();
                separation_count += 1;
            }
            if distance < cfg.cohesion_radius {
                cohesion += other.position;
                cohesion_count += 1;
            }
            if distance < cfg.alignment_radius {
                alignment += other.direction;
                alignment_count += 1;
            }
        }

        if separation_count > 0 {
            separation = (separation / F::from_usize(separation_count)).normalize()
                * -cfg.separation_factor;
        }
        if cohesion_count > 0 {
            cohesion = (cohesion / F::from_usize(cohesion_count) - self.position).normalize()
                * cfg.cohesion_factor;
        }
        alignment = (alignment / F::from_usize(alignment_count)).normalize() * cfg.alignment_factor;

        (alignment + cohesion + separation).normalize()
    }

    /// Wrap horizontally, then work out whether an edge or the pointer
    /// demands a heading. `None` means the rules are free to steer.
    pub fn avoid_collisions(&mut self, pointer: &Pointer<F>) -> Option<(Steering, Vec2<F>)> {
        let Bounds { min, max, margin } = self.bounds;

        if self.position.x < min.x - margin {
            self.position.x = max.x + margin;
        }
        if self.position.x > max.x + margin {
            self.position.x = min.x - margin;
        }

        if self.position.y < min.y + margin {
            return Some((Steering::Bounce, Vec2::new(F::zero(), F::one())));
        }
        if self.position.y > max.y - margin {
            return Some((Steering::Bounce, Vec2::new(F::zero(), -F::one())));
        }

        if !pointer.active {
            return None;
        }

        let away = self.position - pointer.position;
        if away.length() < pointer.radius {
            let flee = away.normalize();
            return (flee != Vec2::zero()).then_some((Steering::Flee, flee));
        }

        let hit = ray_circle_intersection(self.position, self.direction, pointer.position, pointer.radius);
        if !hit.is_nan() && self.position.distance(hit) < margin {
            return Some((Steering::Avoid, (hit - pointer.position).normalize()));
        }

        None
    }
}

/// First point where the ray `origin + t * direction` (t >= 0) meets the
/// circle, or a NaN vector if it never does.
pub fn ray_circle_intersection<F: Float>(
    origin: Vec2<F>,
    direction: Vec2<F>,
    center: Vec2<F>,
    radius: F,
) -> Vec2<F> {
    let to_origin = origin - center;

    let a = direction.dot(direction);
    let b = F::two() * to_origin.dot(direction);
    let c = to_origin.dot(to_origin) - radius * radius;

    if a == F::zero() {
        return Vec2::nan();
    }

    let discriminant = b * b - F::from_f32(4.0) * a * c;
    if discriminant < F::zero() {
        return Vec2::nan();
    }

    let root = discriminant.sqrt();
    let near = (-b - root) / (F::two() * a);
    let far = (-b + root) / (F::two() * a);

    let t = if near >= F::zero() {
        near
    } else if far >= F::zero() {
        far
    } else {
        return Vec2::nan();
    };

    origin + direction * t
}
