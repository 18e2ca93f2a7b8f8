use math::hcm::{Point3, Vec3};
use radiometry::color::Color;

/// An isotropic point light. Lights are passive values: the shading code reads their position,
/// color and intensity and does all of the visibility work itself.
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    pub position: Point3,
    pub color: Color,
    pub intensity: f64,
}

impl PointLight {
    /// Creates a point light with the given position, color and scalar intensity.
    pub fn new(position: Point3, color: Color, intensity: f64) -> Self {
        Self {
            position,
            color,
            intensity,
        }
    }

    /// A white light of unit intensity.
    pub fn white(position: Point3) -> Self {
        Self::new(position, Color::white(), 1.0)
    }

    /// Unit vector pointing from `target` to the light, together with the distance between them.
    /// Returns `None` when `target` coincides with the light position.
    pub fn direction_from(&self, target: Point3) -> Option<(Vec3, f64)> {
        let to_light = self.position - target;
        let dir = to_light.try_hat()?;
        Some((dir, to_light.norm()))
    }
}

impl std::fmt::Display for PointLight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PointLight{{ {}, color = {}, intensity = {} }}",
            self.position, self.color, self.intensity
        )
    }
}
