//! Distance constraint between two chain points.

use crate::float::Float;
use crate::point::ChainPoint;
use crate::pointer::Pointer;

/// Keeps points `a` and `b` at `rest_length` apart.
///
/// Each solve splits the error evenly: half goes to `a`, half to `b`. The
/// half aimed at a fixed point is dropped, not handed to the other point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DistanceConstraint<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
}

impl<F: Float> DistanceConstraint<F> {
    pub fn new(a: usize, b: usize, rest_length: F) -> Self {
        DistanceConstraint { a, b, rest_length }
    }

    /// One Gauss-Seidel correction, followed by pointer push-out on each
    /// moved point.
    pub fn solve(&self, points: &mut [ChainPoint<F>], pointer: &Pointer<F>) {
        let delta = points[self.a].current - points[self.b].current;
        let error = self.rest_length - delta.length();
        let correction = delta.normalize() * (error * F::half());

        points[self.a].constrain(correction, pointer);
        points[self.b].constrain(-correction, pointer);
    }

    /// Signed stretch: positive when the points are further apart than rest.
    pub fn error(&self, points: &[ChainPoint<F>]) -> F {
        points[self.a].current.distance(points[self.b].current) - self.rest_length
    }
}
