use std::fmt::{Display, Formatter, Result};

use math::hcm;
use math::ALMOST_ZERO;

/// Represents a ray:
///
///   origin + t * direction
///
/// where t is positive. The direction is normalized on construction, so `t` measures the
/// Euclidean distance from the origin.
///
/// A `Ray` object can be used to intersect a `Shape` and a `BBox`. Please see their respective
/// documentation for details.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: hcm::Point3,
    pub dir: hcm::Vec3,
}

impl Ray {
    /// Builds a ray with normalized direction.
    /// Panics if `dir` is the zero vector: a ray must point somewhere.
    pub fn new(origin: hcm::Point3, dir: hcm::Vec3) -> Self {
        Ray {
            origin,
            dir: dir.hat(),
        }
    }

    /// Builds a ray starting at `from` and heading toward `to`. The points must be distinct.
    pub fn between(from: hcm::Point3, to: hcm::Point3) -> Self {
        Self::new(from, to - from)
    }

    /// Returns `None` if the given `t` isn't a valid forward hit (i.e., `t <= ALMOST_ZERO`).
    /// `Some(t)` otherwise.
    pub fn truncated_t(&self, t: f64) -> Option<f64> {
        if t > ALMOST_ZERO {
            Some(t)
        } else {
            None
        }
    }

    pub fn position_at(&self, t: f64) -> hcm::Point3 {
        self.origin + t * self.dir
    }
}

impl Display for Ray {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let precision = f.precision().unwrap_or(2);
        write!(
            f,
            "{:.precision$} + t{:.precision$}",
            self.origin,
            self.dir,
            precision = precision
        )
    }
}
