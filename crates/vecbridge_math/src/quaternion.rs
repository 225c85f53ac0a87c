use std::fmt::{Display, Formatter};
use std::ops::Mul;

use crate::number_traits::{Float, One, Zero};

/// Rotation quaternion stored as `x i + y j + z k + w`.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion<T = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T> Quaternion<T> {
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }
}

impl<T> Quaternion<T>
where
    T: Zero + One,
{
    pub fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }
}

impl<T> Quaternion<T>
where
    T: Float,
{
    pub fn norm(&self) -> T {
        let Self { x, y, z, w } = *self;
        (w * w + x * x + y * y + z * z).sqrt()
    }

    pub fn normalized(&self) -> Self {
        let norm = self.norm();
        Self::new(self.x / norm, self.y / norm, self.z / norm, self.w / norm)
    }
}

impl<T> Display for Quaternion<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} + {} i + {} j + {} k)", self.w, self.x, self.y, self.z)
    }
}

impl<T> Mul for Quaternion<T>
where
    T: Float,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let Self {
            x: x1,
            y: y1,
            z: z1,
            w: w1,
        } = self;
        let Self {
            x: x2,
            y: y2,
            z: z2,
            w: w2,
        } = rhs;

        Quaternion::new(
            x1 * w2 + y1 * z2 - z1 * y2 + w1 * x2,
            y1 * w2 + z1 * x2 + w1 * y2 - x1 * z2,
            z1 * w2 + w1 * z2 + x1 * y2 - y1 * x2,
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
        )
    }
}

impl<T> Default for Quaternion<T>
where
    T: Zero + One,
{
    fn default() -> Self {
        Self::identity()
    }
}
