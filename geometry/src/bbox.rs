use std::fmt::{Display, Formatter, Result};

use crate::ray::Ray;
use itertools::iproduct;
use math::{
    float::min_max,
    hcm::Point3,
};

/// 3D axis-aligned bounding-box type. Boundary check is closed (`[min, max]`) on all axes.
/// - Build one from 2 `Point3`s, or from any number of points with `from_points()`;
/// - Expand it by `b.union()` or `b.union_box()`;
/// - Check if it `contains()` a point or `encloses()` another box, or `intersect()`s a `Ray`.
///
/// `BBox::empty()` is a sentinel without any extent. It is the identity of `union` and must not
/// be treated as a real bound: check `is_empty()` first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    min: Point3,
    max: Point3,
}

impl Default for BBox {
    fn default() -> Self {
        Self::empty()
    }
}

impl BBox {
    pub fn empty() -> BBox {
        BBox {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(-f64::INFINITY, -f64::INFINITY, -f64::INFINITY),
        }
    }
    pub fn new(p0: Point3, p1: Point3) -> BBox {
        let (xmin, xmax) = min_max(p0.x, p1.x);
        let (ymin, ymax) = min_max(p0.y, p1.y);
        let (zmin, zmax) = min_max(p0.z, p1.z);
        BBox {
            min: Point3::new(xmin, ymin, zmin),
            max: Point3::new(xmax, ymax, zmax),
        }
    }
    pub fn from_points<I: IntoIterator<Item = Point3>>(points: I) -> BBox {
        points.into_iter().fold(Self::empty(), BBox::union)
    }

    pub fn is_empty(&self) -> bool {
        (0..3).any(|axis| self.min[axis] > self.max[axis])
    }

    pub fn union(self, p: Point3) -> BBox {
        let mut result = self;
        for i in 0..3 {
            result.min[i] = self.min[i].min(p[i]);
            result.max[i] = self.max[i].max(p[i]);
        }
        result
    }

    pub fn union_box(self, other: BBox) -> BBox {
        if other.is_empty() {
            self
        } else {
            self.union(other.min).union(other.max)
        }
    }

    pub fn all_corners(&self) -> [Point3; 8] {
        let mut res = [Point3::ORIGIN; 8];
        for (corner, (i, j, k)) in res.iter_mut().zip(iproduct!(0..2, 0..2, 0..2)) {
            let pick = |axis: usize, high: i32| {
                if high == 0 {
                    self.min[axis]
                } else {
                    self.max[axis]
                }
            };
            *corner = Point3::new(pick(0, i), pick(1, j), pick(2, k));
        }
        res
    }
    pub fn min(&self) -> Point3 {
        self.min
    }
    pub fn max(&self) -> Point3 {
        self.max
    }

    /// Slab test: returns true if the ray passes through the box at some `t >= 0`.
    pub fn intersect(&self, r: &Ray) -> bool {
        if self.is_empty() {
            return false;
        }
        let (mut t_min, mut t_max) = (0.0f64, f64::INFINITY);
        for axis in 0..3 {
            let inv_dir = 1.0 / r.dir[axis];
            let t0 = (self.min[axis] - r.origin[axis]) * inv_dir;
            let t1 = (self.max[axis] - r.origin[axis]) * inv_dir;
            if t0.is_nan() || t1.is_nan() {
                // Ray runs inside one of the slab planes; (0 * inf) tells nothing about the axis.
                continue;
            }
            let (t0, t1) = min_max(t0, t1);
            // Shrinks [t_min, t_max] by intersecting it with [t0, t1].
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_max < t_min {
                return false;
            }
        }
        true
    }

    pub fn encloses(&self, other: Self) -> bool {
        if other.is_empty() {
            return true;
        }
        for axis in 0..3 {
            if self.min[axis] > other.min[axis] {
                return false;
            }
            if self.max[axis] < other.max[axis] {
                return false;
            }
        }
        true
    }
    pub fn contains(&self, p: Point3) -> bool {
        for axis in 0..3 {
            if self.min[axis] > p[axis] {
                return false;
            }
            if self.max[axis] < p[axis] {
                return false;
            }
        }
        true
    }
}

impl Display for BBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.is_empty() {
            write!(f, "box[empty]")
        } else {
            write!(f, "box[{} -> {}]", self.min, self.max)
        }
    }
}
