use crate::bbox::BBox;
use math::hcm::{Mat4, Point3, Vec3};
use std::ops::Mul;

/// An affine transform together with its inverse. The inverse is needed to carry surface normals
/// through the transform (by the inverse-transpose of the linear block).
///
/// Composition follows matrix multiplication: `(a * b).apply(x)` applies `b` first, then `a`.
#[derive(Debug, Clone, Copy)]
pub struct AffineTransform {
    forward: Mat4,
    inverse: Mat4,
}

pub trait Transform<T> {
    fn apply(&self, x: T) -> T;
}

impl std::fmt::Display for AffineTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.forward)
    }
}

impl AffineTransform {
    pub fn identity() -> Self {
        Self {
            forward: Mat4::IDENTITY,
            inverse: Mat4::IDENTITY,
        }
    }
    /// Wraps an arbitrary matrix. Returns `None` if the matrix isn't invertible.
    pub fn from_matrix(forward: Mat4) -> Option<Self> {
        let inverse = forward.inverse()?;
        Some(Self { forward, inverse })
    }
    pub fn translater(t: Vec3) -> Self {
        Self {
            forward: Mat4::translater(t),
            inverse: Mat4::translater(-t),
        }
    }
    pub fn rotater(axis: Vec3, radians: f64) -> Self {
        let forward = Mat4::rotater(axis, radians);
        Self {
            forward,
            inverse: forward.transpose(),
        }
    }
    /// Uniform scaling. Panics if `scale` is zero.
    pub fn scaler(scale: f64) -> Self {
        Self::nonuniform_scaler(Vec3::new(scale, scale, scale))
    }
    /// Per-axis scaling. Panics if any of the factors is zero.
    pub fn nonuniform_scaler(scale: Vec3) -> Self {
        let Vec3 { x, y, z } = scale;
        assert!(
            x != 0.0 && y != 0.0 && z != 0.0,
            "degenerate scale {}",
            scale
        );
        let scale_inv = Vec3::new(1.0 / x, 1.0 / y, 1.0 / z);
        Self {
            forward: Mat4::nonuniform_scale(scale),
            inverse: Mat4::nonuniform_scale(scale_inv),
        }
    }
    pub fn inverse(&self) -> Self {
        Self {
            forward: self.inverse,
            inverse: self.forward,
        }
    }
    pub fn matrix(&self) -> &Mat4 {
        &self.forward
    }

    /// Returns the same transform, but pivoting around `center` instead of the world origin:
    /// Translate(center) * self * Translate(-center).
    pub fn about_point(self, center: Point3) -> Self {
        let to_center = Vec3::from(center);
        Self::translater(to_center) * self * Self::translater(-to_center)
    }

    /// Applies Translate(t) onto the transform, and returns Translate(t) * self.
    pub fn translate(self, t: Vec3) -> Self {
        Self::translater(t) * self
    }

    /// Transforms a surface normal: multiplies it by the inverse-transpose of the linear block
    /// and renormalizes. If the result has no length, the zero vector is returned.
    pub fn apply_normal(&self, n: Vec3) -> Vec3 {
        let n = self.inverse.transposed_linear_mul(n);
        n.try_hat().unwrap_or(Vec3::ZERO)
    }
}

impl Mul for AffineTransform {
    type Output = AffineTransform;
    fn mul(self, rhs: Self) -> Self::Output {
        // self * rhs -> self.forward * rhs.forward, rhs.inverse * self.inverse.
        Self {
            forward: self.forward * rhs.forward,
            inverse: rhs.inverse * self.inverse,
        }
    }
}

// Transforms on:
// - Vec3
// - Point3
// - BBox
// -------------------------------------------------------------------------------------------------

impl Transform<Vec3> for AffineTransform {
    fn apply(&self, x: Vec3) -> Vec3 {
        self.forward * x
    }
}
impl Transform<Point3> for AffineTransform {
    fn apply(&self, p: Point3) -> Point3 {
        self.forward * p
    }
}
impl Transform<BBox> for AffineTransform {
    fn apply(&self, b: BBox) -> BBox {
        if b.is_empty() {
            return b;
        }
        BBox::from_points(b.all_corners().iter().map(|c| self.apply(*c)))
    }
}
