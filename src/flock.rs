//! A roster of boids stepped together.

use crate::boid::{Boid, Bounds, Neighbor, Steering};
use crate::config::BoidConfig;
use crate::float::Float;
use crate::pointer::Pointer;
use alloc::vec::Vec as AllocVec;
use rand::Rng;

/// How boids see each other within one [`Flock::step`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum UpdateOrder {
    /// Every boid sees the roster as it was at the start of the frame.
    /// Results do not depend on roster order.
    #[default]
    Snapshot,
    /// Boids are updated in roster order and later boids see the already
    /// updated state of earlier ones.
    Sequential,
}

/// Owns a set of boids and updates them once per frame.
pub struct Flock<F: Float> {
    boids: AllocVec<Boid<F>>,
    order: UpdateOrder,
    snapshot: AllocVec<Neighbor<F>>,
}

impl<F: Float> Flock<F> {
    /// Spawn `count` boids at random positions inside `bounds`.
    pub fn new<R: Rng + ?Sized>(
        count: usize,
        bounds: Bounds<F>,
        config: BoidConfig<F>,
        rng: &mut R,
    ) -> Self {
        let boids: AllocVec<_> = (0..count).map(|_| Boid::new(bounds, config, rng)).collect();
        tracing::debug!(count, "flock spawned");
        Self::from_boids(boids)
    }

    pub fn from_boids(boids: AllocVec<Boid<F>>) -> Self {
        Flock { snapshot: AllocVec::with_capacity(boids.len()), boids, order: UpdateOrder::default() }
    }

    pub fn with_order(mut self, order: UpdateOrder) -> Self {
        self.order = order;
        self
    }

    pub fn order(&self) -> UpdateOrder {
        self.order
    }

    pub fn push(&mut self, boid: Boid<F>) {
        self.boids.push(boid);
    }

    pub fn boids(&self) -> &[Boid<F>] {
        &self.boids
    }

    pub fn boids_mut(&mut self) -> &mut [Boid<F>] {
        &mut self.boids
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    /// Update every boid once. Returns how many were steered by something
    /// other than the flocking rules.
    pub fn step(&mut self, dt: F, pointer: &Pointer<F>) -> usize {
        let avoiding = match self.order {
            UpdateOrder::Snapshot => self.step_snapshot(dt, pointer),
            UpdateOrder::Sequential => self.step_sequential(dt, pointer),
        };
        tracing::trace!(boids = self.boids.len(), avoiding, "flock step");
        avoiding
    }

    fn step_snapshot(&mut self, dt: F, pointer: &Pointer<F>) -> usize {
        self.snapshot.clear();
        self.snapshot.extend(self.boids.iter().map(Boid::neighbor));

        let snapshot = &self.snapshot;
        let mut avoiding = 0;
        for (i, boid) in self.boids.iter_mut().enumerate() {
            let others = snapshot
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, n)| *n);
            if boid.update(others, dt, pointer) != Steering::Rules {
                avoiding += 1;
            }
        }
        avoiding
    }

    fn step_sequential(&mut self, dt: F, pointer: &Pointer<F>) -> usize {
        let mut avoiding = 0;
        for i in 0..self.boids.len() {
            let (before, rest) = self.boids.split_at_mut(i);
            let Some((boid, after)) = rest.split_first_mut() else {
                break;
            };
            let others = before.iter().chain(after.iter()).map(Boid::neighbor);
            if boid.update(others, dt, pointer) != Steering::Rules {
                avoiding += 1;
            }
        }
        avoiding
    }
}
