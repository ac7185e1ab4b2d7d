//! Verlet chain (kelp/rope) anchored at its first point.

use crate::config::ChainConfig;
use crate::constraint::DistanceConstraint;
use crate::error::PhysicsError;
use crate::float::{uniform, Float};
use crate::observer::StepObserver;
use crate::point::ChainPoint;
use crate::pointer::Pointer;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;
use rand::Rng;

/// A hanging chain of Verlet points joined by distance constraints.
///
/// The first point is the anchor and never moves on its own. Besides the
/// physics state the chain carries decorative data for drawing it as a smooth
/// curve: one random curve offset per segment, and a width and color
/// multiplier per display point. These are randomized once at construction.
pub struct VerletChain<F: Float> {
    points: AllocVec<ChainPoint<F>>,
    constraints: AllocVec<DistanceConstraint<F>>,
    target_distance: F,
    segments_per_link: usize,
    curve_offsets: AllocVec<Vec2<F>>,
    widths: AllocVec<u32>,
    color_multipliers: AllocVec<F>,
    config: ChainConfig<F>,
}

impl<F: Float> VerletChain<F> {
    /// Build a chain hanging straight down (towards -y) from `anchor`.
    ///
    /// `segments_per_link` is the number of interpolated display points
    /// emitted between each pair of chain points.
    pub fn new<R: Rng + ?Sized>(
        anchor: Vec2<F>,
        point_count: usize,
        target_distance: F,
        segments_per_link: usize,
        config: ChainConfig<F>,
        rng: &mut R,
    ) -> Result<Self, PhysicsError> {
        if point_count == 0 {
            return Err(PhysicsError::InsufficientPoints);
        }
        if !target_distance.is_finite() || target_distance < F::zero() {
            return Err(PhysicsError::InvalidDistance);
        }

        let mut points = AllocVec::with_capacity(point_count);
        points.push(ChainPoint::fixed(anchor));
        for i in 1..point_count {
            let offset = Vec2::new(F::zero(), target_distance * F::from_usize(i));
            points.push(ChainPoint::new(anchor - offset));
        }

        let constraints = (0..point_count - 1)
            .map(|i| DistanceConstraint::new(i, i + 1, target_distance))
            .collect();

        let display_count = display_point_count(point_count, segments_per_link);
        let look = &config.appearance;
        let curve_offsets = (0..point_count - 1)
            .map(|_| {
                Vec2::new(
                    uniform(rng, -look.curve_offset, look.curve_offset),
                    uniform(rng, -look.curve_offset, look.curve_offset),
                )
            })
            .collect();
        let min_width = look.min_width.min(look.max_width);
        let max_width = look.max_width.max(look.min_width);
        let widths = (0..display_count)
            .map(|_| rng.gen_range(min_width..=max_width))
            .collect();
        let color_multipliers = (0..display_count)
            .map(|_| uniform(rng, look.min_color, look.max_color))
            .collect();

        tracing::debug!(point_count, segments_per_link, display_count, "verlet chain created");

        Ok(VerletChain {
            points,
            constraints,
            target_distance,
            segments_per_link,
            curve_offsets,
            widths,
            color_multipliers,
            config,
        })
    }

    /// Number of relaxation sweeps a step of length `dt` performs, at most
    /// `config.max_iterations`.
    pub fn relaxation_iterations(&self, dt: F) -> usize {
        let count = F::from_usize(self.points.len()) * self.config.iteration_rate * dt;
        count.round().to_usize().min(self.config.max_iterations)
    }

    /// Advance the chain by `dt` seconds.
    pub fn step<O: StepObserver>(&mut self, dt: F, pointer: &Pointer<F>, observer: &mut O) {
        for p in self.points.iter_mut() {
            p.integrate(dt, &self.config);
        }
        observer.on_integrate();

        for i in 0..self.relaxation_iterations(dt) {
            for c in self.constraints.iter() {
                c.solve(&mut self.points, pointer);
            }
            observer.on_constraint_iteration(i);
        }

        observer.on_step_complete();
    }

    /// Smoothed polyline for drawing. Always `display_point_count()` long.
    pub fn display_points(&self) -> AllocVec<Vec2<F>> {
        let mut out = AllocVec::with_capacity(self.display_point_count());
        self.display_points_into(&mut out);
        out
    }

    /// Like [`display_points`](Self::display_points) but refills `out`.
    pub fn display_points_into(&self, out: &mut AllocVec<Vec2<F>>) {
        out.clear();
        let steps = F::from_usize(self.segments_per_link + 1);

        for (pair, offset) in self.points.windows(2).zip(self.curve_offsets.iter()) {
            let start = pair[0].current;
            let end = pair[1].current;
            let control = start.lerp(end, F::half()) + *offset;

            out.push(start);
            for k in 1..=self.segments_per_link {
                let t = F::from_usize(k) / steps;
                out.push(start.quadratic_bezier(control, end, t));
            }
        }

        if let Some(last) = self.points.last() {
            out.push(last.current);
        }
    }

    /// Teleport the anchor, carrying its implied velocity with it.
    pub fn move_anchor(&mut self, pos: Vec2<F>) {
        let anchor = &mut self.points[0];
        anchor.previous = anchor.current;
        anchor.current = pos;
    }

    pub fn anchor(&self) -> Vec2<F> {
        self.points[0].current
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.points.iter().map(|p| p.current).collect()
    }

    pub fn points(&self) -> &[ChainPoint<F>] {
        &self.points
    }

    pub fn point(&self, index: usize) -> &ChainPoint<F> {
        &self.points[index]
    }

    pub fn point_mut(&mut self, index: usize) -> &mut ChainPoint<F> {
        &mut self.points[index]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.constraints.len()
    }

    pub fn segments_per_link(&self) -> usize {
        self.segments_per_link
    }

    pub fn display_point_count(&self) -> usize {
        display_point_count(self.points.len(), self.segments_per_link)
    }

    pub fn target_distance(&self) -> F {
        self.target_distance
    }

    /// Largest absolute deviation of any link from the target distance.
    pub fn max_stretch(&self) -> F {
        self.constraints
            .iter()
            .map(|c| c.error(&self.points).abs())
            .fold(F::zero(), F::max)
    }

    pub fn config(&self) -> &ChainConfig<F> {
        &self.config
    }

    pub fn curve_offsets(&self) -> &[Vec2<F>] {
        &self.curve_offsets
    }

    /// Stroke width per display point.
    pub fn widths(&self) -> &[u32] {
        &self.widths
    }

    pub fn widths_mut(&mut self) -> &mut [u32] {
        &mut self.widths
    }

    /// Color multiplier per display point.
    pub fn color_multipliers(&self) -> &[F] {
        &self.color_multipliers
    }

    pub fn color_multipliers_mut(&mut self) -> &mut [F] {
        &mut self.color_multipliers
    }
}

fn display_point_count(point_count: usize, segments_per_link: usize) -> usize {
    (point_count - 1) * (segments_per_link + 1) + 1
}
