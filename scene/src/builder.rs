use std::collections::HashSet;

use geometry::bbox::BBox;
use geometry::transform::AffineTransform;
use light::PointLight;
use material::{FaceRecord, Material, MaterialId};
use math::hcm::{Mat4, Point3};
use radiometry::color::Color;
use shape::{Shape, ShapeId, Surface, Triangle};

use crate::{Scene, SceneError};

/// Collects shapes, materials and lights before rendering. Shapes can be moved freely while the
/// scene is being built; `build()` freezes everything into a read-only `Scene`.
pub struct SceneBuilder {
    shapes: Vec<Shape>,
    materials: Vec<Material>,
    lights: Vec<PointLight>,
    ambient: Color,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self {
            shapes: vec![],
            materials: vec![],
            lights: vec![],
            ambient: Color::black(),
        }
    }

    pub fn with_ambient(self, ambient: Color) -> Self {
        Self { ambient, ..self }
    }

    pub fn add_shape<S: Into<Shape>>(&mut self, shape: S) -> ShapeId {
        self.shapes.push(shape.into());
        ShapeId::new(self.shapes.len() - 1)
    }

    /// Registers a material. Only shapes that have a material take part in ray queries.
    pub fn add_material(&mut self, material: Material) -> Result<MaterialId, SceneError> {
        self.check_shape(material.shape)?;
        self.materials.push(material);
        Ok(MaterialId::new(self.materials.len() - 1))
    }

    pub fn add_light(&mut self, light: PointLight) -> &mut Self {
        self.lights.push(light);
        self
    }

    /// Moves one shape.
    pub fn transform_shape(
        &mut self, id: ShapeId, transform: &AffineTransform,
    ) -> Result<(), SceneError> {
        self.check_shape(id)?;
        self.shapes[id.index()].apply_transform(transform);
        Ok(())
    }

    /// Places a group of shapes (typically the faces of one imported model) with a model matrix.
    /// The matrix is applied about the center of the group, the mean of the distinct anchor points
    /// of its shapes, so that rotations and scales keep the model where it was modeled.
    pub fn transform_group(&mut self, ids: &[ShapeId], matrix: Mat4) -> Result<(), SceneError> {
        let transform = AffineTransform::from_matrix(matrix).ok_or_else(|| {
            log::warn!("rejecting a singular model matrix for {} shapes", ids.len());
            SceneError::SingularTransform(matrix.to_string())
        })?;
        for id in ids.iter() {
            self.check_shape(*id)?;
        }
        let center = match self.group_center(ids) {
            Some(c) => c,
            None => {
                log::warn!("transforming an empty group of shapes");
                return Ok(());
            }
        };
        let transform = transform.about_point(center);
        for id in ids.iter() {
            self.shapes[id.index()].apply_transform(&transform);
        }
        Ok(())
    }

    /// Mean of the anchor points of the shapes. Vertices shared by adjacent faces count once.
    fn group_center(&self, ids: &[ShapeId]) -> Option<Point3> {
        let mut seen = HashSet::new();
        let distinct = ids
            .iter()
            .flat_map(|id| self.shapes[id.index()].anchor_points())
            .filter(|p| seen.insert([p.x.to_bits(), p.y.to_bits(), p.z.to_bits()]))
            .collect::<Vec<_>>();
        Point3::centroid(distinct)
    }

    /// Adds one triangle and one material for each face. Returns the ids of the new triangles in
    /// the order of the faces.
    pub fn import_faces<I>(&mut self, faces: I) -> Vec<ShapeId>
    where
        I: IntoIterator<Item = FaceRecord>,
    {
        let mut ids = vec![];
        for face in faces.into_iter() {
            let [p0, p1, p2] = face.vertices;
            let triangle = Triangle::new(p0, p1, p2, face.normal);
            if triangle.is_degenerate() {
                log::warn!("importing a degenerate face: {}", triangle.summary());
            }
            let shape_id = self.add_shape(triangle);
            self.materials
                .push(Material::from_record(shape_id, &face.material));
            ids.push(shape_id);
        }
        log::debug!("imported {} faces", ids.len());
        ids
    }

    /// Freezes the scene. Every plane gets the bounds of the rest of the scene as its extent.
    pub fn build(self) -> Scene {
        let Self {
            mut shapes,
            materials,
            lights,
            ambient,
        } = self;
        let bounds = shapes
            .iter()
            .filter(|s| !matches!(s, Shape::Plane(_)))
            .fold(BBox::empty(), |b, s| b.union_box(s.bbox()));
        for plane in shapes.iter_mut().filter_map(Shape::as_plane_mut) {
            plane.set_bounds(bounds);
        }
        log::debug!(
            "scene built: {} shapes, {} materials, {} lights, {}",
            shapes.len(),
            materials.len(),
            lights.len(),
            bounds
        );
        Scene {
            shapes,
            materials,
            lights,
            ambient,
            bounds,
        }
    }

    fn check_shape(&self, id: ShapeId) -> Result<(), SceneError> {
        if id.index() < self.shapes.len() {
            Ok(())
        } else {
            log::warn!("{} referenced before being added", id);
            Err(SceneError::UnknownShape(id))
        }
    }
}
