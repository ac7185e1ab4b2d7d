//! Tuning parameters for chains and boids.
//!
//! Defaults are the values the kelp and fish scenes were tuned with.

use crate::float::Float;

/// Integration and relaxation parameters for a [`VerletChain`](crate::VerletChain).
///
/// # Builder Pattern
/// ```
/// use tidepool::config::ChainConfig;
///
/// let config: ChainConfig<f32> = ChainConfig::new()
///     .with_buoyancy(-9000.0)
///     .with_damping(0.9)
///     .with_max_velocity(5.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChainConfig<F: Float> {
    /// Constant vertical acceleration. Negative values pull towards -y
    /// (upwards on a y-down screen). Default: -15000.
    pub buoyancy: F,
    /// Velocity retained per step [0, 1]. Default: 0.75.
    pub damping: F,
    /// Per-axis velocity limit, in units per step. Default: 10.
    pub max_velocity: F,
    /// Relaxation iterations per point per second of `dt`. Default: 50.
    pub iteration_rate: F,
    /// Upper bound on relaxation iterations in one step, however long `dt`
    /// is. Default: 4096.
    pub max_iterations: usize,
    /// Ranges for the decorative display data.
    pub appearance: Appearance<F>,
}

impl<F: Float> ChainConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        ChainConfig {
            buoyancy: F::from_f32(-15000.0),
            damping: F::from_f32(0.75),
            max_velocity: F::from_f32(10.0),
            iteration_rate: F::from_f32(50.0),
            max_iterations: 4096,
            appearance: Appearance::default(),
        }
    }

    /// Set the vertical acceleration.
    pub fn with_buoyancy(mut self, buoyancy: F) -> Self {
        self.buoyancy = buoyancy;
        self
    }

    /// Set the velocity damping factor.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the per-axis velocity limit.
    pub fn with_max_velocity(mut self, max_velocity: F) -> Self {
        self.max_velocity = max_velocity;
        self
    }

    /// Set the relaxation iteration rate.
    pub fn with_iteration_rate(mut self, iteration_rate: F) -> Self {
        self.iteration_rate = iteration_rate;
        self
    }

    /// Set the per-step relaxation iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the decorative ranges.
    pub fn with_appearance(mut self, appearance: Appearance<F>) -> Self {
        self.appearance = appearance;
        self
    }
}

impl<F: Float> Default for ChainConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Ranges the chain's decorative data is drawn from at construction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Appearance<F: Float> {
    /// Half-extent of the per-segment curve offset, per axis. Default: 10.
    pub curve_offset: F,
    /// Inclusive stroke width range. Default: 2..=4.
    pub min_width: u32,
    pub max_width: u32,
    /// Half-open color multiplier range. Default: [0.75, 1.0).
    pub min_color: F,
    pub max_color: F,
}

impl<F: Float> Default for Appearance<F> {
    fn default() -> Self {
        Appearance {
            curve_offset: F::from_f32(10.0),
            min_width: 2,
            max_width: 4,
            min_color: F::from_f32(0.75),
            max_color: F::one(),
        }
    }
}

/// Steering parameters for a [`Boid`](crate::Boid).
///
/// ```
/// use tidepool::config::BoidConfig;
///
/// let config: BoidConfig<f64> = BoidConfig::new()
///     .with_speed(120.0)
///     .with_radii(40.0, 80.0, 80.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoidConfig<F: Float> {
    /// Distance travelled per second. Default: 175.
    pub speed: F,
    /// Default: 75.
    pub separation_radius: F,
    /// Default: 100.
    pub cohesion_radius: F,
    /// Default: 100.
    pub alignment_radius: F,
    /// Default: 0.95.
    pub separation_factor: F,
    /// Default: 1.0.
    pub cohesion_factor: F,
    /// Default: 0.75.
    pub alignment_factor: F,
    /// Turn rate while following flocking rules. Default: 5.
    pub turn_factor_rules: F,
    /// Turn rate while avoiding edges or the pointer. Default: 15.
    pub turn_factor_collisions: F,
}

impl<F: Float> BoidConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        BoidConfig {
            speed: F::from_f32(175.0),
            separation_radius: F::from_f32(75.0),
            cohesion_radius: F::from_f32(100.0),
            alignment_radius: F::from_f32(100.0),
            separation_factor: F::from_f32(0.95),
            cohesion_factor: F::one(),
            alignment_factor: F::from_f32(0.75),
            turn_factor_rules: F::from_f32(5.0),
            turn_factor_collisions: F::from_f32(15.0),
        }
    }

    /// Set the travel speed.
    pub fn with_speed(mut self, speed: F) -> Self {
        self.speed = speed;
        self
    }

    /// Set the separation, cohesion and alignment radii.
    pub fn with_radii(mut self, separation: F, cohesion: F, alignment: F) -> Self {
        self.separation_radius = separation;
        self.cohesion_radius = cohesion;
        self.alignment_radius = alignment;
        self
    }

    /// Set the separation, cohesion and alignment blend weights.
    pub fn with_factors(mut self, separation: F, cohesion: F, alignment: F) -> Self {
        self.separation_factor = separation;
        self.cohesion_factor = cohesion;
        self.alignment_factor = alignment;
        self
    }

    /// Set the turn rates for rule following and collision avoidance.
    pub fn with_turn_factors(mut self, rules: F, collisions: F) -> Self {
        self.turn_factor_rules = rules;
        self.turn_factor_collisions = collisions;
        self
    }
}

impl<F: Float> Default for BoidConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
