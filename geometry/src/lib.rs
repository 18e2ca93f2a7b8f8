/// Defines the `BBox` axis-aligned bounding-box type.
pub mod bbox;
pub mod ray;
pub mod transform;

pub use bbox::BBox;
pub use ray::Ray;
pub use transform::{AffineTransform, Transform};
