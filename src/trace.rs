use std::time::Instant;

use geometry::ray::Ray;
use radiometry::color::Color;
use rayon::prelude::*;
use scene::Scene;
use shape::Surface;

/// Knobs of the batch tracer.
#[derive(Debug, Clone, Copy)]
pub struct TraceOptions {
    pub use_multi_thread: bool,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            use_multi_thread: true,
        }
    }
}

/// Computes the color seen along `ray`: finds the nearest surface, evaluates its normal and shades
/// the hit point as seen from the ray origin. Returns `None` if the ray escapes the scene, leaving
/// the choice of a background to the caller.
pub fn trace(scene: &Scene, ray: &Ray) -> Option<Color> {
    let nearest = scene.nearest(ray);
    let id = nearest.hit?;
    // Ids coming out of `nearest()` always belong to the scene.
    let material = scene.material(id).ok()?;
    let shape = scene.shape_of(material).ok()?;
    let normal = shape.normal_at(ray, nearest.t);
    let point = ray.position_at(nearest.t);
    Some(material.shade(scene, point, -ray.dir, normal))
}

/// Traces every ray of the batch. The output is in the same order as the input.
pub fn trace_batch(scene: &Scene, rays: &[Ray], options: &TraceOptions) -> Vec<Option<Color>> {
    let start_time = Instant::now();
    let colors: Vec<_> = if options.use_multi_thread {
        rays.par_iter().map(|r| trace(scene, r)).collect()
    } else {
        rays.iter().map(|r| trace(scene, r)).collect()
    };
    let hits = colors.iter().filter(|c| c.is_some()).count();
    log::info!(
        "traced {} rays ({} hits) in {:.3} secs",
        rays.len(),
        hits,
        start_time.elapsed().as_secs_f64()
    );
    colors
}
