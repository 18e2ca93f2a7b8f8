/// RGB radiometric quantities: surface colors, light colors and shaded radiance.
pub mod color;

pub use color::Color;
