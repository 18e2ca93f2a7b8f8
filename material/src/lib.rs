mod record;

use geometry::ray::Ray;
use light::PointLight;
use math::hcm::{self, Point3, Vec3};
use radiometry::color::Color;
use shape::ShapeId;

pub use record::{FaceRecord, MaterialRecord};

/// Index of a `Material` in the scene's material collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(usize);

impl MaterialId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "material#{}", self.0)
    }
}

/// What the shading code needs to know about the world around a surface point: the lights, the
/// global ambient term, and the distance to the nearest surface along a shadow ray.
pub trait ShadingContext {
    fn lights(&self) -> &[PointLight];
    fn ambient(&self) -> Color;
    /// Ray parameter of the nearest hit along `r`, or `f64::INFINITY` if nothing is hit.
    fn nearest_t(&self, r: &Ray) -> f64;
}

/// Phong shading parameters attached to one shape of the scene.
///
/// `kr`, `kt` and `ior` describe reflection and transmission. They are carried along with the
/// material but `shade()` only evaluates direct lighting and doesn't bounce rays.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    pub shape: ShapeId,
    pub color: Color,
    pub ka: f64,
    pub kd: f64,
    pub ks: f64,
    pub kr: f64,
    pub kt: f64,
    /// Shininess exponent of the specular lobe.
    pub eta: i32,
    pub ior: f64,
}

impl Material {
    /// Creates a matte material from an 8-bit RGB color.
    pub fn new(shape: ShapeId, rgb: [u8; 3]) -> Self {
        let [r, g, b] = rgb;
        Self {
            shape,
            color: Color::rgb(r, g, b),
            ka: 0.1,
            kd: 0.9,
            ks: 0.0,
            kr: 0.0,
            kt: 0.0,
            eta: 1,
            ior: 1.0,
        }
    }

    pub fn with_phong(self, ka: f64, kd: f64, ks: f64, eta: i32) -> Self {
        Self {
            ka,
            kd,
            ks,
            eta,
            ..self
        }
    }

    pub fn with_transmission(self, kr: f64, kt: f64, ior: f64) -> Self {
        Self { kr, kt, ior, ..self }
    }

    /// Translates a material record from the mesh loader. Colors in records are already in
    /// `[0, 1]`; per-channel coefficients are averaged down to scalars. A fractional shininess is
    /// truncated.
    pub fn from_record(shape: ShapeId, record: &MaterialRecord) -> Self {
        Self {
            shape,
            color: record.kd,
            ka: record.ka.mean(),
            kd: record.kd.mean(),
            ks: record.ks.mean(),
            kr: record.ke.mean(),
            kt: 1.0 - record.d,
            eta: record.ns as i32,
            ior: record.ni,
        }
    }

    /// Computes the color seen from direction `view` at `point`, a surface point with unit
    /// `normal`. The result is the sum of:
    /// - the ambient term, `color * ambient * ka`;
    /// - for every light that isn't occluded, a diffuse term and a specular term.
    ///
    /// A light is occluded if the nearest surface along the shadow ray is closer than the light.
    /// The output isn't clamped.
    pub fn shade<C: ShadingContext + ?Sized>(
        &self,
        ctx: &C,
        point: Point3,
        view: Vec3,
        normal: Vec3,
    ) -> Color {
        let mut color = self.color * (ctx.ambient() * self.ka);
        for light in ctx.lights().iter() {
            let (wi, light_dist) = match light.direction_from(point) {
                Some(dir_dist) => dir_dist,
                None => continue,
            };
            let occluder_t = ctx.nearest_t(&Ray::new(point, wi));
            if occluder_t <= light_dist {
                continue;
            }

            let cos_theta = normal.dot(wi);
            if cos_theta > 0.0 {
                color += self.color * light.color * (self.kd * cos_theta * light.intensity);
            }
            let r = hcm::reflect(normal, wi);
            let cos_alpha = r.dot(view);
            if cos_alpha > 0.0 {
                color += light.color * (self.ks * cos_alpha.powi(self.eta) * light.intensity);
            }
        }
        color
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Material{{ {}, color = {}, ka/kd/ks = {}/{}/{}, eta = {} }}",
            self.shape, self.color, self.ka, self.kd, self.ks, self.eta
        )
    }
}
