mod simple;
mod triangle;

use enum_dispatch::enum_dispatch;
use geometry::bbox::BBox;
use geometry::ray::Ray;
use geometry::transform::AffineTransform;
use math::hcm::{Point3, Vec3};

pub use simple::*;
pub use triangle::*;

/// Represents the characteristics of a primitive surface: it has a bounding box, can be hit by a
/// ray, reports its normal at a hit, and can be moved by an affine transform.
/// - See `simple.rs` for `Sphere` and `Plane`.
/// - See `triangle.rs` for `Triangle`, which is a bounded piece of a `Plane`.
#[enum_dispatch]
pub trait Surface {
    fn summary(&self) -> String;

    /// Returns the extent of the surface in its current (post-transform) placement.
    /// Unbounded surfaces return `BBox::empty()` until given explicit bounds.
    fn bbox(&self) -> BBox;

    /// Returns the ray parameter of the nearest forward hit (`t > ALMOST_ZERO`), or `None` if the
    /// ray misses. Degenerate configurations (tangent rays, rays parallel to a plane, zero-area
    /// triangles) count as misses.
    fn intersect(&self, r: &Ray) -> Option<f64>;

    /// Computes the unit surface normal at `r.position_at(t)`, where `t` was returned by
    /// `intersect()` on the same ray.
    fn normal_at(&self, r: &Ray, t: f64) -> Vec3;

    /// Moves the surface in place. Any cached quantity derived from the geometry is refreshed.
    fn apply_transform(&mut self, transform: &AffineTransform);

    /// A point that is representative of the surface's placement: the center of a sphere, the
    /// anchor point of a plane or the first vertex of a triangle.
    fn representative_point(&self) -> Point3;

    /// The points that define the placement of the surface: every vertex of a triangle, the
    /// center of a sphere, the anchor point of a plane.
    fn anchor_points(&self) -> Vec<Point3>;
}

/// The closed set of primitives a scene is built from.
#[enum_dispatch(Surface)]
#[derive(Debug, Clone)]
pub enum Shape {
    Sphere,
    Plane,
    Triangle,
}

impl Shape {
    pub fn as_plane_mut(&mut self) -> Option<&mut Plane> {
        match self {
            Shape::Plane(plane) => Some(plane),
            _ => None,
        }
    }
}

/// Index of a `Shape` in the scene's shape collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(usize);

impl ShapeId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "shape#{}", self.0)
    }
}
