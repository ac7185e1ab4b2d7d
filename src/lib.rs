//! Verlet kelp chains and flocking boids, stepped once per frame.
//!
//! `tidepool` is a small 2D simulation kernel meant to sit behind a renderer
//! or scripting host. The host hands it a frame delta and the pointer state,
//! and reads back positions to draw.
//!
//! # Features
//!
//! - **Vector kernel**: `Vec2` with scalar and component-wise operators
//! - **Verlet chains**: damped integration, frame-rate-adaptive distance
//!   relaxation, pointer push-out, and a Bézier-smoothed display curve
//! - **Boids**: separation/cohesion/alignment with edge wrap and bounce and
//!   predictive pointer avoidance that overrides the rules when it fires
//! - **Flocks**: roster stepping against a per-frame snapshot or in order
//! - **Deterministic**: every random initial state comes from an injected `Rng`
//! - **Observable**: monitor chain steps via the `StepObserver` trait
//! - **`no_std` compatible**: only needs `alloc`
//!
//! ```
//! use rand::{rngs::SmallRng, SeedableRng};
//! use tidepool::{ChainConfig, NoOpStepObserver, Pointer, Vec2, VerletChain};
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let mut kelp = VerletChain::new(
//!     Vec2::new(100.0f32, 400.0), 8, 25.0, 2, ChainConfig::default(), &mut rng,
//! ).unwrap();
//!
//! let pointer = Pointer::new(Vec2::new(110.0, 300.0), 30.0);
//! kelp.step(1.0 / 60.0, &pointer, &mut NoOpStepObserver);
//! assert_eq!(kelp.display_points().len(), kelp.display_point_count());
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod pointer;
pub mod point;
pub mod constraint;
pub mod chain;
pub mod boid;
pub mod flock;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use pointer::Pointer;
pub use point::ChainPoint;
pub use constraint::DistanceConstraint;
pub use chain::VerletChain;
pub use boid::{ray_circle_intersection, Boid, Bounds, Neighbor, Steering};
pub use flock::{Flock, UpdateOrder};
pub use config::{Appearance, BoidConfig, ChainConfig};
pub use observer::{NoOpStepObserver, StepObserver, TracingStepObserver};
pub use error::PhysicsError;
