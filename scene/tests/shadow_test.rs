use geometry::ray::Ray;
use light::PointLight;
use material::{FaceRecord, Material, MaterialRecord, ShadingContext};
use math::hcm::{point3, vec3, Mat4, Point3, Vec3};
use radiometry::color::Color;
use rand::{Rng, SeedableRng};
use scene::{Scene, SceneBuilder};
use shape::{Plane, Sphere, Surface};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A floor at y = 0 lit by a white light straight above the origin, with an optional sphere
/// centered on the y axis.
fn floor_scene(occluder_height: Option<f64>) -> Scene {
    let mut builder = SceneBuilder::new();
    let floor = builder.add_shape(Plane::new(Vec3::Y, Point3::ORIGIN));
    let yellow = Material::new(floor, [255, 255, 0]).with_phong(0.0, 0.5, 0.0, 1);
    builder.add_material(yellow).unwrap();
    if let Some(h) = occluder_height {
        let ball = builder.add_shape(Sphere::new(point3(0.0, h, 0.0), 1.0));
        builder
            .add_material(Material::new(ball, [255, 255, 255]))
            .unwrap();
    }
    builder.add_light(PointLight::white(point3(0.0, 10.0, 0.0)));
    builder.build()
}

fn shade_floor_origin(scene: &Scene) -> Color {
    let ray = Ray::between(point3(5.0, 5.0, 0.0), Point3::ORIGIN);
    let nearest = scene.nearest(&ray);
    let material = scene.material(nearest.hit.unwrap()).unwrap();
    let shape = scene.shape_of(material).unwrap();
    let normal = shape.normal_at(&ray, nearest.t);
    assert_eq!(normal, Vec3::Y);
    material.shade(scene, ray.position_at(nearest.t), -ray.dir, normal)
}

#[test]
fn miss_everything_test() {
    init_logger();
    let scene = floor_scene(Some(5.0));
    let mut rng = rand::rngs::StdRng::seed_from_u64(5);
    for _ in 0..100 {
        // Upward rays from above the sphere never come back down.
        let dir = vec3(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(0.1..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let nearest = scene.nearest(&Ray::new(point3(0.0, 7.0, 0.0), dir));
        assert!(nearest.hit.is_none());
        assert_eq!(nearest.t, f64::INFINITY);
        assert_eq!(scene.nearest_t(&Ray::new(point3(0.0, 7.0, 0.0), dir)), f64::INFINITY);
    }
}

#[test]
fn occluder_between_test() {
    init_logger();
    let color = shade_floor_origin(&floor_scene(Some(5.0)));
    assert!(color.is_black(), "expected a shadow, got {}", color);
}

#[test]
fn occluder_beyond_light_test() {
    init_logger();
    let lit = shade_floor_origin(&floor_scene(Some(15.0)));
    let open_sky = shade_floor_origin(&floor_scene(None));
    assert!((lit.r - 0.5).abs() < 1e-9);
    assert!((lit.g - 0.5).abs() < 1e-9);
    assert_eq!(lit.b, 0.0);
    assert_eq!(lit, open_sky);
}

#[test]
fn ambient_only_test() {
    init_logger();
    let mut builder = SceneBuilder::new().with_ambient(Color::gray(0.5));
    let floor = builder.add_shape(Plane::new(Vec3::Y, Point3::ORIGIN));
    let m = builder
        .add_material(Material::new(floor, [255, 255, 255]).with_phong(0.4, 0.5, 0.0, 1))
        .unwrap();
    let scene = builder.build();
    let material = scene.material(m).unwrap();
    let c = material.shade(&scene, Point3::ORIGIN, Vec3::Y, Vec3::Y);
    assert!((c.g - 0.2).abs() < 1e-9);
}

#[test]
fn imported_model_test() {
    init_logger();
    let record = MaterialRecord {
        kd: Color::new(0.2, 0.4, 0.6),
        ..MaterialRecord::default()
    };
    let quad = vec![
        FaceRecord {
            vertices: [
                point3(-1.0, -1.0, 0.0),
                point3(1.0, -1.0, 0.0),
                point3(1.0, 1.0, 0.0),
            ],
            normal: Vec3::Z,
            material: record,
        },
        FaceRecord {
            vertices: [
                point3(-1.0, -1.0, 0.0),
                point3(1.0, 1.0, 0.0),
                point3(-1.0, 1.0, 0.0),
            ],
            normal: Vec3::Z,
            material: record,
        },
    ];
    let mut builder = SceneBuilder::new();
    let ids = builder.import_faces(quad);
    assert_eq!(ids.len(), 2);
    // The quad is centered on the origin, so half a turn maps it onto itself.
    builder
        .transform_group(&ids, Mat4::rotater(Vec3::Z, std::f64::consts::PI))
        .unwrap();
    let scene = builder.build();
    assert_eq!(scene.material_count(), 2);

    let down = -Vec3::Z;
    let hit = scene.nearest(&Ray::new(point3(0.3, 0.6, 5.0), down));
    assert!((hit.t - 5.0).abs() < 1e-9);
    let material = scene.material(hit.hit.unwrap()).unwrap();
    assert_eq!(material.color, record.kd);
    assert!(!scene.nearest(&Ray::new(point3(-2.3, -2.6, 5.0), down)).is_hit());

    let bounds = scene.bounds();
    assert!((bounds.min().x + 1.0).abs() < 1e-9);
    assert!((bounds.min().y + 1.0).abs() < 1e-9);
    assert!((bounds.max().x - 1.0).abs() < 1e-9);
    assert!((bounds.max().y - 1.0).abs() < 1e-9);
}

#[test]
fn model_scales_about_its_center_test() {
    init_logger();
    // A unit square whose corner sits at (2, 2): its center is (2.5, 2.5).
    let face = |vertices| FaceRecord {
        vertices,
        normal: Vec3::Z,
        material: MaterialRecord::default(),
    };
    let quad = vec![
        face([
            point3(2.0, 2.0, 0.0),
            point3(3.0, 2.0, 0.0),
            point3(3.0, 3.0, 0.0),
        ]),
        face([
            point3(2.0, 2.0, 0.0),
            point3(3.0, 3.0, 0.0),
            point3(2.0, 3.0, 0.0),
        ]),
    ];
    let mut builder = SceneBuilder::new();
    let ids = builder.import_faces(quad);
    builder.transform_group(&ids, Mat4::scaler(2.0)).unwrap();
    let scene = builder.build();

    let bounds = scene.bounds();
    assert!((bounds.min().x - 1.5).abs() < 1e-9);
    assert!((bounds.min().y - 1.5).abs() < 1e-9);
    assert!((bounds.max().x - 3.5).abs() < 1e-9);
    assert!((bounds.max().y - 3.5).abs() < 1e-9);
    assert!(scene
        .nearest(&Ray::new(point3(1.7, 3.2, 5.0), -Vec3::Z))
        .is_hit());
}
