use itertools::iproduct;
use phong::geometry::ray::Ray;
use phong::geometry::transform::AffineTransform;
use phong::light::PointLight;
use phong::material::Material;
use phong::math::hcm::{point3, vec3, Point3, Vec3};
use phong::math::{assert_ge, assert_gt};
use phong::radiometry::color::Color;
use phong::scene::{Scene, SceneBuilder};
use phong::shape::{Plane, Sphere, Triangle};
use phong::{trace, trace_batch, TraceOptions};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A red ball resting on a gray floor, a blue triangle behind it, and two lights.
fn still_life() -> Scene {
    let mut builder = SceneBuilder::new().with_ambient(Color::gray(0.2));
    let floor = builder.add_shape(Plane::new(Vec3::Y, point3(0.0, -1.0, 0.0)));
    let ball = builder.add_shape(Sphere::new(point3(0.0, 0.0, -5.0), 1.0));
    let panel = builder.add_shape(Triangle::from_vertices(
        point3(-4.0, -1.0, -9.0),
        point3(4.0, -1.0, -9.0),
        point3(0.0, 4.0, -9.0),
    ));
    builder
        .transform_shape(ball, &AffineTransform::translater(vec3(0.5, 0.0, 0.0)))
        .unwrap();

    let gray = Material::new(floor, [200, 200, 200]);
    let red = Material::new(ball, [255, 0, 0]).with_phong(0.1, 0.7, 0.4, 16);
    let blue = Material::new(panel, [0, 0, 255]);
    for m in [gray, red, blue].iter() {
        builder.add_material(*m).unwrap();
    }
    builder
        .add_light(PointLight::white(point3(-3.0, 5.0, 0.0)))
        .add_light(PointLight::new(point3(4.0, 3.0, -2.0), Color::new(1.0, 0.9, 0.8), 0.5));
    builder.build()
}

fn camera_rays() -> Vec<Ray> {
    iproduct!(-10..10, -8..8)
        .map(|(i, j)| {
            let dir = vec3(i as f64 * 0.05, j as f64 * 0.05, -1.0);
            Ray::new(point3(0.0, 0.5, 0.0), dir)
        })
        .collect()
}

#[test]
fn miss_is_none_test() {
    init_logger();
    let scene = still_life();
    assert!(trace(&scene, &Ray::new(Point3::ORIGIN, Vec3::Y)).is_none());
    assert!(trace(&scene, &Ray::new(Point3::ORIGIN, Vec3::Z)).is_none());
}

#[test]
fn ball_is_red_test() {
    init_logger();
    let scene = still_life();
    let color = trace(&scene, &Ray::new(Point3::ORIGIN, vec3(0.1, 0.0, -1.0))).unwrap();
    assert_gt!(color.r, 0.0);
    assert!(color.is_finite());
    // Only the specular highlight could put green or blue in a red ball, and it's white-ish at most.
    assert_ge!(color.r, color.g);
    assert_ge!(color.r, color.b);
}

#[test]
fn batch_matches_single_rays_test() {
    init_logger();
    let scene = still_life();
    let rays = camera_rays();
    let parallel = trace_batch(&scene, &rays, &TraceOptions::default());
    let serial = trace_batch(
        &scene,
        &rays,
        &TraceOptions {
            use_multi_thread: false,
        },
    );
    assert_eq!(parallel.len(), rays.len());
    assert_eq!(parallel, serial);
    for (ray, color) in rays.iter().zip(parallel.iter()) {
        assert_eq!(trace(&scene, ray), *color);
    }
    assert!(parallel.iter().any(|c| c.is_some()));
    assert!(parallel.iter().flatten().all(|c| !c.has_nan()));
}

#[test]
fn shadow_under_ball_test() {
    init_logger();
    let mut builder = SceneBuilder::new();
    let floor = builder.add_shape(Plane::new(Vec3::Y, point3(0.0, -1.0, 0.0)));
    let ball = builder.add_shape(Sphere::new(point3(0.0, 1.0, -5.0), 1.0));
    builder
        .add_material(Material::new(floor, [255, 255, 255]))
        .unwrap();
    builder
        .add_material(Material::new(ball, [255, 255, 255]))
        .unwrap();
    builder.add_light(PointLight::white(point3(0.0, 10.0, -5.0)));
    let scene = builder.build();

    let below = trace(&scene, &Ray::between(Point3::ORIGIN, point3(0.0, -1.0, -5.0))).unwrap();
    let aside = trace(&scene, &Ray::between(Point3::ORIGIN, point3(3.0, -1.0, -5.0))).unwrap();
    assert!(below.is_black());
    assert_gt!(aside.g, 0.0);
}
