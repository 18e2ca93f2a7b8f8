use geometry::bbox::BBox;
use geometry::ray::Ray;
use geometry::transform::{AffineTransform, Transform};
use math::float::Inside;
use math::hcm::{Point3, Vec3};
use math::ALMOST_ZERO;

use crate::{Plane, Surface};

/// A triangle is a bounded piece of its supporting `Plane`: a ray hits the triangle if it hits
/// the plane at a point whose barycentric coordinates are all positive.
///
/// The edge vectors and their dot products only depend on the vertices, so they are computed once
/// and refreshed whenever the triangle is transformed.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    plane: Plane,
    vertices: [Point3; 3],
    edges: [Vec3; 2],
    dot00: f64,
    dot01: f64,
    dot11: f64,
    denom: f64,
}

impl Triangle {
    /// Builds a triangle from its 3 vertices and a face normal. The normal is taken as is (up to
    /// normalization) and isn't checked against the winding of the vertices.
    pub fn new(p0: Point3, p1: Point3, p2: Point3, normal: Vec3) -> Self {
        let mut triangle = Self {
            plane: Plane::new(normal, p0),
            vertices: [p0, p1, p2],
            edges: [Vec3::ZERO; 2],
            dot00: 0.0,
            dot01: 0.0,
            dot11: 0.0,
            denom: 0.0,
        };
        triangle.refresh();
        triangle
    }

    /// Builds a triangle whose normal follows the right-hand rule on the vertex order.
    pub fn from_vertices(p0: Point3, p1: Point3, p2: Point3) -> Self {
        Self::new(p0, p1, p2, (p1 - p0).cross(p2 - p0))
    }

    pub fn vertices(&self) -> &[Point3; 3] {
        &self.vertices
    }
    pub fn plane(&self) -> &Plane {
        &self.plane
    }
    pub fn is_degenerate(&self) -> bool {
        self.denom == 0.0
    }

    fn refresh(&mut self) {
        let [p0, p1, p2] = self.vertices;
        let (e0, e1) = (p1 - p0, p2 - p0);
        self.edges = [e0, e1];
        self.dot00 = e0.dot(e0);
        self.dot01 = e0.dot(e1);
        self.dot11 = e1.dot(e1);
        self.denom = self.dot00 * self.dot11 - self.dot01 * self.dot01;
    }

    /// Computes the barycentric coordinates `(alpha, beta, gamma)` of `p` with respect to the
    /// vertices, so that `p = alpha * p0 + beta * p1 + gamma * p2` for a point `p` on the plane.
    /// Returns `None` for a zero-area triangle.
    pub fn barycentric(&self, p: Point3) -> Option<(f64, f64, f64)> {
        if self.is_degenerate() {
            return None;
        }
        let [e0, e1] = self.edges;
        let c = p - self.vertices[0];
        let (dot_c0, dot_c1) = (c.dot(e0), c.dot(e1));
        let beta = (dot_c0 * self.dot11 - dot_c1 * self.dot01) / self.denom;
        let gamma = (dot_c1 * self.dot00 - dot_c0 * self.dot01) / self.denom;
        Some((1.0 - beta - gamma, beta, gamma))
    }
}

impl Surface for Triangle {
    fn summary(&self) -> String {
        let [p0, p1, p2] = self.vertices;
        format!("Triangle{{ {}, {}, {} }}", p0, p1, p2)
    }
    fn bbox(&self) -> BBox {
        BBox::from_points(self.vertices.iter().copied())
    }
    fn intersect(&self, r: &Ray) -> Option<f64> {
        let t = self.plane.intersect(r)?;
        let (alpha, beta, gamma) = self.barycentric(r.position_at(t))?;
        // Points on the edges are rejected along with the outside ones.
        let inside = [alpha, beta, gamma]
            .iter()
            .all(|w| w.inside((ALMOST_ZERO, 1.0)));
        if inside {
            Some(t)
        } else {
            None
        }
    }
    fn normal_at(&self, r: &Ray, t: f64) -> Vec3 {
        self.plane.normal_at(r, t)
    }
    fn apply_transform(&mut self, transform: &AffineTransform) {
        for v in self.vertices.iter_mut() {
            *v = transform.apply(*v);
        }
        self.plane.apply_transform(transform);
        self.refresh();
    }
    fn representative_point(&self) -> Point3 {
        self.vertices[0]
    }
    fn anchor_points(&self) -> Vec<Point3> {
        self.vertices.to_vec()
    }
}
