/// Defines useful functions for common math operations, tools and constants:
/// - The `ALMOST_ZERO` threshold under which ray parameters and determinants count as zero,
/// - Ordering helpers on pairs of numbers,
/// - Macros to check if two math quantities are close, less than / greater than (or equal to) each other.
pub mod float;

/// Homogeneous-coordinate maths module.
/// - Types: 3D points and vectors, 4x4 affine matrices.
/// - Function `reflect()` to compute the mirror direction of a vector about a normal.
pub mod hcm;

pub use float::ALMOST_ZERO;
