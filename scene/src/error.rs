use material::MaterialId;
use shape::ShapeId;
use thiserror::Error;

/// Misuse of the scene API during construction or lookup. Rays missing the scene are not errors.
#[derive(Error, Debug, PartialEq)]
pub enum SceneError {
    #[error("{0} is not in the scene")]
    UnknownShape(ShapeId),

    #[error("{0} is not in the scene")]
    UnknownMaterial(MaterialId),

    /// The placement matrix of a model has no inverse, so normals can't be carried through it.
    #[error("transform matrix is singular:\n{0}")]
    SingularTransform(String),
}
