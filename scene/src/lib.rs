mod builder;
mod error;

use geometry::bbox::BBox;
use geometry::ray::Ray;
use light::PointLight;
use material::{Material, ShadingContext};
use radiometry::color::Color;
use shape::{Shape, Surface};

pub use builder::SceneBuilder;
pub use error::SceneError;
pub use material::MaterialId;
pub use shape::ShapeId;

/// Result of a nearest-hit query. `t` is `f64::INFINITY` when nothing is hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest {
    pub hit: Option<MaterialId>,
    pub t: f64,
}

impl Nearest {
    pub fn miss() -> Self {
        Self {
            hit: None,
            t: f64::INFINITY,
        }
    }
    pub fn is_hit(&self) -> bool {
        self.hit.is_some()
    }
}

/// A frozen scene: the shapes, their materials, the lights and the ambient term. Nothing changes
/// after `SceneBuilder::build()`, so a `Scene` can be queried from any number of threads.
pub struct Scene {
    shapes: Vec<Shape>,
    materials: Vec<Material>,
    lights: Vec<PointLight>,
    ambient: Color,
    bounds: BBox,
}

impl Scene {
    /// Finds the closest material whose shape is hit by the ray. This is a linear scan over all
    /// materials; on equal distances the earlier material wins.
    pub fn nearest(&self, r: &Ray) -> Nearest {
        let mut nearest = Nearest::miss();
        for (i, m) in self.materials.iter().enumerate() {
            if let Some(t) = self.shapes[m.shape.index()].intersect(r) {
                if t > 0.0 && t < nearest.t {
                    nearest = Nearest {
                        hit: Some(MaterialId::new(i)),
                        t,
                    };
                }
            }
        }
        nearest
    }

    pub fn material(&self, id: MaterialId) -> Result<&Material, SceneError> {
        self.materials
            .get(id.index())
            .ok_or(SceneError::UnknownMaterial(id))
    }
    pub fn shape(&self, id: ShapeId) -> Result<&Shape, SceneError> {
        self.shapes
            .get(id.index())
            .ok_or(SceneError::UnknownShape(id))
    }
    pub fn shape_of(&self, material: &Material) -> Result<&Shape, SceneError> {
        self.shape(material.shape)
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }
    pub fn ambient(&self) -> Color {
        self.ambient
    }
    /// Union of the boxes of all bounded shapes. Empty if the scene only has planes.
    pub fn bounds(&self) -> BBox {
        self.bounds
    }
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }
}

impl ShadingContext for Scene {
    fn lights(&self) -> &[PointLight] {
        &self.lights
    }
    fn ambient(&self) -> Color {
        self.ambient
    }
    fn nearest_t(&self, r: &Ray) -> f64 {
        self.nearest(r).t
    }
}
