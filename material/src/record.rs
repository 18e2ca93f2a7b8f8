use math::hcm::{Point3, Vec3};
use radiometry::color::Color;

/// Material parameters as delivered by a mesh loader, one per face. Colors are on the `[0, 1]`
/// scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialRecord {
    pub ka: Color,
    pub kd: Color,
    pub ks: Color,
    /// Emissive color; read as the reflectance of the material.
    pub ke: Color,
    /// Shininess.
    pub ns: f64,
    /// Index of refraction.
    pub ni: f64,
    /// Opacity, 1.0 is fully opaque.
    pub d: f64,
}

impl Default for MaterialRecord {
    fn default() -> Self {
        Self {
            ka: Color::gray(0.1),
            kd: Color::gray(0.8),
            ks: Color::black(),
            ke: Color::black(),
            ns: 1.0,
            ni: 1.0,
            d: 1.0,
        }
    }
}

/// A triangle face with its flat normal and material, as delivered by a mesh loader.
#[derive(Debug, Clone, Copy)]
pub struct FaceRecord {
    pub vertices: [Point3; 3],
    pub normal: Vec3,
    pub material: MaterialRecord,
}
