use geometry::bbox::BBox;
use geometry::ray::Ray;
use geometry::transform::{AffineTransform, Transform};
use math::hcm::{Point3, Vec3};
use math::ALMOST_ZERO;

use crate::Surface;

#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    center: Point3,
    radius: f64,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64) -> Sphere {
        Sphere { center, radius }
    }
    pub fn from_raw(center: (f64, f64, f64), radius: f64) -> Sphere {
        let (x, y, z) = center;
        let center = Point3::new(x, y, z);
        assert!(!center.has_nan() && !radius.is_nan());
        Self::new(center, radius)
    }
    pub fn center(&self) -> Point3 {
        self.center
    }
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// An infinite plane through `point` with unit `normal`.
///
/// A plane has no finite extent, so its bounding box is `BBox::empty()` until the scene extent is
/// handed over with `set_bounds()`.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    point: Point3,
    normal: Vec3,
    bounds: BBox,
}

impl Plane {
    /// Makes a plane from a normal vector (of any length) and a point on it.
    /// A zero normal makes a degenerate plane that no ray can hit.
    pub fn new(normal: Vec3, point: Point3) -> Self {
        let normal = normal.try_hat().unwrap_or_else(|| {
            log::warn!("plane through {} has a degenerate normal {}", point, normal);
            Vec3::ZERO
        });
        Self {
            point,
            normal,
            bounds: BBox::empty(),
        }
    }
    pub fn point(&self) -> Point3 {
        self.point
    }
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Supplies the extent reported by `bbox()`, normally the bounds of the whole scene.
    /// The bounds are kept as they are by `apply_transform()`.
    pub fn set_bounds(&mut self, bounds: BBox) {
        self.bounds = bounds;
    }

    /// Returns the hit point of the ray on the plane, or the ray origin if the ray misses.
    pub fn point_intersect(&self, r: &Ray) -> Point3 {
        match self.intersect(r) {
            Some(t) => r.position_at(t),
            None => r.origin,
        }
    }
}

// Implementation of the `Surface` trait for the shape implementations.

impl Surface for Sphere {
    fn summary(&self) -> String {
        format!("Sphere{{ {}, radius = {} }}", self.center, self.radius)
    }
    fn bbox(&self) -> BBox {
        let half_diagonal = Vec3::new(1.0, 1.0, 1.0) * self.radius;
        BBox::new(self.center - half_diagonal, self.center + half_diagonal)
    }
    fn intersect(&self, r: &Ray) -> Option<f64> {
        // r = o + td, with |d| = 1
        // sphere: (p-c)(p-c) = R^2
        // t^2 + 2t d.(o-c) + (o-c)^2 - R^2 = 0
        //   => t^2 - Bt + C = 0, B = -2 d.(o-c), C = (o-c)^2 - R^2
        let diff = r.origin - self.center;
        let b = -2.0 * diff.dot(r.dir);
        let c = diff.norm_squared() - self.radius * self.radius;
        let delta = b * b - 4.0 * c;
        // Tangent rays are dropped along with the misses.
        if delta < ALMOST_ZERO {
            return None;
        }
        let sqrt_delta = delta.sqrt();
        let (t_near, t_far) = ((b - sqrt_delta) * 0.5, (b + sqrt_delta) * 0.5);
        r.truncated_t(t_near).or_else(|| r.truncated_t(t_far))
    }
    fn normal_at(&self, r: &Ray, t: f64) -> Vec3 {
        (r.position_at(t) - self.center).hat()
    }
    /// Moves the center exactly. The radius is multiplied by the average of the 3 axis scales of
    /// the transform, so that the sphere stays a sphere under a non-uniform scale. This is an
    /// approximation: the exact image would be an ellipsoid.
    fn apply_transform(&mut self, transform: &AffineTransform) {
        self.center = transform.apply(self.center);
        let scales = transform.matrix().axis_scales();
        self.radius *= (scales.x + scales.y + scales.z) / 3.0;
    }
    fn representative_point(&self) -> Point3 {
        self.center
    }
    fn anchor_points(&self) -> Vec<Point3> {
        vec![self.center]
    }
}

impl Surface for Plane {
    fn summary(&self) -> String {
        format!("Plane{{ {}, normal = {} }}", self.point, self.normal)
    }
    fn bbox(&self) -> BBox {
        self.bounds
    }
    fn intersect(&self, r: &Ray) -> Option<f64> {
        // Ray:    r = o + td
        // Plane: (p-p0) dot n = 0
        //        (o + td - p0) dot n = 0  =>  t = (p0 - o) dot n / (d dot n)
        let denom = r.dir.dot(self.normal);
        if denom.abs() < ALMOST_ZERO {
            return None;
        }
        let t = (self.point - r.origin).dot(self.normal) / denom;
        r.truncated_t(t)
    }
    /// The normal is flipped to the side of the plane where the ray comes from.
    fn normal_at(&self, r: &Ray, _t: f64) -> Vec3 {
        if self.normal.dot(r.origin - self.point) > ALMOST_ZERO {
            self.normal
        } else {
            -self.normal
        }
    }
    fn apply_transform(&mut self, transform: &AffineTransform) {
        self.point = transform.apply(self.point);
        self.normal = transform.apply_normal(self.normal);
        if self.normal.is_zero() {
            log::warn!("transform collapsed the normal of {}", self.summary());
        }
    }
    fn representative_point(&self) -> Point3 {
        self.point
    }
    fn anchor_points(&self) -> Vec<Point3> {
        vec![self.point]
    }
}
