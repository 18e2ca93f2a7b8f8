//! A small Phong ray tracer core: analytic intersection of spheres, planes and triangles, a
//! nearest-hit resolver over a frozen scene, and direct lighting with hard shadows.
//!
//! The building blocks live in their own crates and are re-exported here:
//! - `math`: vectors, points and 4x4 affine matrices;
//! - `geometry`: rays, bounding boxes and affine transforms;
//! - `shape`: the `Shape` primitives;
//! - `material`: Phong materials and the shading evaluator;
//! - `scene`: scene construction and nearest-hit queries.
//!
//! The `trace` module ties them together to compute the color seen along a ray.

pub mod trace;

pub use geometry;
pub use light;
pub use material;
pub use math;
pub use radiometry;
pub use scene;
pub use shape;

pub use trace::{trace, trace_batch, TraceOptions};
