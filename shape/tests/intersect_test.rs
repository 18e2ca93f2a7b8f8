use geometry::ray::Ray;
use geometry::transform::AffineTransform;
use itertools::iproduct;
use math::hcm::{point3, vec3, Point3, Vec3};
use math::{assert_close, assert_near};
use rand::{Rng, SeedableRng};
use shape::{Plane, Shape, Sphere, Surface, Triangle};

fn random_unit(rng: &mut rand::rngs::StdRng) -> Vec3 {
    loop {
        let v = vec3(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        if let Some(u) = v.try_hat() {
            return u;
        }
    }
}

#[test]
fn sphere_distance_test() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let center = point3(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        );
        let radius = rng.gen_range(0.1..5.0);
        let distance = radius + rng.gen_range(0.1..20.0);
        let u = random_unit(&mut rng);

        let sphere = Sphere::new(center, radius);
        let ray = Ray::new(center + u * distance, -u);
        let t = sphere.intersect(&ray).expect("ray aimed at the center must hit");
        assert_near!(t, distance - radius);
        assert_close!(sphere.normal_at(&ray, t), u);
    }
}

#[test]
fn sphere_tangent_and_behind_test() {
    let sphere = Sphere::from_raw((0.0, 0.0, 0.0), 1.0);
    let tangent = Ray::new(point3(-5.0, 1.0, 0.0), Vec3::X);
    assert!(sphere.intersect(&tangent).is_none());
    let away = Ray::new(point3(-5.0, 0.0, 0.0), -Vec3::X);
    assert!(sphere.intersect(&away).is_none());
}

#[test]
fn triangle_test() {
    let tri = Triangle::new(
        Point3::ORIGIN,
        point3(1.0, 0.0, 0.0),
        point3(0.0, 1.0, 0.0),
        Vec3::Z,
    );
    let hit = Ray::between(point3(0.25, 0.25, 1.0), point3(0.25, 0.25, 0.0));
    let t = tri.intersect(&hit).unwrap();
    assert_near!(t, 1.0);
    let (alpha, beta, gamma) = tri.barycentric(hit.position_at(t)).unwrap();
    assert_near!(alpha + beta + gamma, 1.0);
    assert_near!(alpha, 0.5);
    assert_near!(beta, 0.25);
    assert_near!(gamma, 0.25);

    let miss = Ray::between(point3(0.25, 0.25, 1.0), point3(2.0, 2.0, 0.0));
    assert!(tri.intersect(&miss).is_none());
    // The supporting plane is still hit.
    assert!(tri.plane().intersect(&miss).is_some());
}

#[test]
fn translate_round_trip_test() {
    let v = vec3(3.0, -4.5, 12.0);
    let shapes: Vec<Shape> = vec![
        Sphere::new(point3(0.0, 0.0, -5.0), 2.0).into(),
        Plane::new(Vec3::Y, point3(0.0, -1.0, 0.0)).into(),
        Triangle::from_vertices(
            point3(-1.0, -1.0, -3.0),
            point3(1.0, -1.0, -3.0),
            point3(0.0, 1.0, -3.0),
        )
        .into(),
    ];
    let rays: Vec<Ray> = iproduct!(-4..=4, -4..=4)
        .map(|(i, j)| {
            let dir = vec3(i as f64 * 0.1, j as f64 * 0.1, -1.0);
            Ray::new(Point3::ORIGIN, dir)
        })
        .collect();

    for shape in shapes.iter() {
        let mut moved = shape.clone();
        moved.apply_transform(&AffineTransform::translater(v));
        moved.apply_transform(&AffineTransform::translater(-v));
        assert_close!(moved.representative_point(), shape.representative_point());
        for ray in rays.iter() {
            match (shape.intersect(ray), moved.intersect(ray)) {
                (Some(t0), Some(t1)) => assert_near!(t0, t1),
                (None, None) => (),
                (a, b) => panic!("{} vs. {:?} on {}", shape.summary(), (a, b), ray),
            }
        }
    }
}

#[test]
fn sphere_scale_test() {
    let mut sphere = Sphere::new(point3(1.0, 2.0, 3.0), 1.5);
    sphere.apply_transform(&AffineTransform::scaler(2.0));
    assert_close!(sphere.center(), point3(2.0, 4.0, 6.0));
    assert_near!(sphere.radius(), 3.0);

    let mut squashed = Sphere::new(Point3::ORIGIN, 1.0);
    squashed.apply_transform(&AffineTransform::nonuniform_scaler(vec3(1.0, 2.0, 6.0)));
    assert_near!(squashed.radius(), 3.0);
    assert_near!(squashed.bbox().max().x, 3.0);

    // A rotation keeps the radius.
    let mut spun = Sphere::new(point3(1.0, 0.0, 0.0), 2.0);
    spun.apply_transform(&AffineTransform::rotater(Vec3::Z, 0.7));
    assert_near!(spun.radius(), 2.0);
}

#[test]
fn plane_transform_test() {
    let mut shape = Shape::from(Plane::new(Vec3::Z, Point3::ORIGIN));
    shape.apply_transform(
        &AffineTransform::rotater(Vec3::X, -std::f64::consts::FRAC_PI_2)
            .translate(vec3(0.0, -2.0, 0.0)),
    );
    // z = 0 rotates onto y = 0, then shifts down to y = -2.
    let ray = Ray::new(point3(5.0, 3.0, 5.0), -Vec3::Y);
    let t = shape.intersect(&ray).unwrap();
    assert_near!(t, 5.0);
    assert_close!(shape.normal_at(&ray, t), Vec3::Y);

    let plane = shape.as_plane_mut().unwrap();
    assert_close!(plane.normal(), Vec3::Y);
}
