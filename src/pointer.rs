//! Host pointer (mouse/touch) state passed into every simulation step.

use crate::float::Float;
use crate::vec::Vec2;

/// A circular pointer collider. When `active` is false it is ignored entirely.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pointer<F: Float> {
    pub active: bool,
    pub position: Vec2<F>,
    pub radius: F,
}

impl<F: Float> Pointer<F> {
    /// An active pointer at `position`.
    pub fn new(position: Vec2<F>, radius: F) -> Self {
        Pointer { active: true, position, radius }
    }

    /// A pointer that never collides.
    pub fn inactive() -> Self {
        Pointer { active: false, position: Vec2::zero(), radius: F::zero() }
    }

    /// `true` if the pointer is active and `point` lies strictly inside its circle.
    pub fn contains(&self, point: Vec2<F>) -> bool {
        self.active && point.distance(self.position) < self.radius
    }

    /// Project `point` onto the pointer circle if it lies inside.
    ///
    /// A point exactly at the centre has no push direction and stays put.
    pub fn push_out(&self, point: Vec2<F>) -> Vec2<F> {
        if !self.contains(point) {
            return point;
        }
        let away = (point - self.position).normalize();
        self.position + away * self.radius
    }
}
