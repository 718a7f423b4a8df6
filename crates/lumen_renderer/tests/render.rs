use lumen_renderer::{
    Camera, Color, Dielectric, HittableList, Lambertian, Metal, Point3, Schedule, Silent, Sphere,
    Vec3,
};

fn three_spheres() -> HittableList {
    let mut world = HittableList::new();
    world.add(Sphere::new(
        Point3::new(0.0, -100.5, -1.0),
        100.0,
        Lambertian::new(Color::new(0.8, 0.8, 0.0)),
    ));
    world.add(Sphere::new(
        Point3::new(0.0, 0.0, -1.2),
        0.5,
        Lambertian::new(Color::new(0.1, 0.2, 0.5)),
    ));
    world.add(Sphere::new(Point3::new(-1.0, 0.0, -1.0), 0.5, Dielectric::new(1.5)));
    world.add(Sphere::new(
        Point3::new(1.0, 0.0, -1.0),
        0.5,
        Metal::new(Color::new(0.8, 0.6, 0.2), 0.3),
    ));
    world
}

fn camera() -> Camera {
    Camera::new()
        .with_resolution(40, 16.0 / 9.0)
        .with_quality(6, 8)
        .with_position(Point3::new(-2.0, 2.0, 1.0), Point3::new(0.0, 0.0, -1.0), Vec3::Y)
        .with_lens(30.0, 1.0, 3.4)
        .with_seed(2024)
}

fn render(camera: &mut Camera, schedule: Schedule) -> String {
    let mut out = Vec::new();
    camera
        .render_with(&three_spheres(), &mut out, &mut Silent, schedule)
        .expect("render failed");
    String::from_utf8(out).expect("PPM output is ASCII")
}

/// Parse a `P3` document into (width, height, pixels).
fn parse_ppm(text: &str) -> (u32, u32, Vec<[u8; 3]>) {
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("P3"));

    let dims: Vec<u32> = lines
        .next()
        .unwrap()
        .split(' ')
        .map(|d| d.parse().unwrap())
        .collect();
    assert_eq!(lines.next(), Some("255"));

    let pixels = lines
        .map(|line| {
            let c: Vec<u8> = line.split(' ').map(|v| v.parse().unwrap()).collect();
            [c[0], c[1], c[2]]
        })
        .collect();

    (dims[0], dims[1], pixels)
}

#[test]
fn test_scene_renders_full_image() {
    let mut camera = camera();
    let (width, height, pixels) = parse_ppm(&render(&mut camera, Schedule::Sequential));

    assert_eq!((width, height), (40, 22));
    assert_eq!(pixels.len(), 40 * 22);

    // Something in view is neither sky-white nor black
    assert!(pixels.iter().any(|p| p != &[255, 255, 255] && p != &[0, 0, 0]));
}

#[test]
fn test_sky_is_bluer_at_the_top() {
    let mut camera = Camera::new()
        .with_resolution(10, 1.0)
        .with_quality(4, 4)
        .with_position(Point3::ZERO, Point3::new(0.0, 0.0, -1.0), Vec3::Y)
        .with_seed(3);
    let mut out = Vec::new();
    camera
        .render_with(&HittableList::new(), &mut out, &mut Silent, Schedule::Sequential)
        .unwrap();

    let (_, _, pixels) = parse_ppm(&String::from_utf8(out).unwrap());
    let top = pixels[5];
    let bottom = pixels[95];
    assert!(top[0] < bottom[0], "top {top:?} bottom {bottom:?}");
    assert_eq!(top[2], 255);
}

#[test]
fn test_schedules_are_byte_identical() {
    let mut camera = camera();

    let sequential = render(&mut camera, Schedule::Sequential);
    for threads in [1, 3, 8] {
        assert_eq!(sequential, render(&mut camera, Schedule::Parallel { threads }));
    }
}

#[test]
fn test_unseeded_renders_keep_dimensions() {
    let mut camera = camera();
    camera.config.seed = None;

    let (w1, h1, p1) = parse_ppm(&render(&mut camera, Schedule::Sequential));
    let (w2, h2, p2) = parse_ppm(&render(&mut camera, Schedule::Parallel { threads: 2 }));

    assert_eq!((w1, h1), (w2, h2));
    assert_eq!(p1.len(), p2.len());

    // Same scene, different noise: mean brightness stays close
    let mean = |pixels: &[[u8; 3]]| {
        pixels.iter().map(|p| p.iter().map(|&c| f64::from(c)).sum::<f64>()).sum::<f64>()
            / pixels.len() as f64
    };
    assert!((mean(&p1) - mean(&p2)).abs() < 30.0);
}

#[test]
fn test_zero_width_renders_header_only() {
    let mut camera = Camera::new().with_resolution(0, 1.0);
    let mut out = Vec::new();
    camera
        .render_with(&three_spheres(), &mut out, &mut Silent, Schedule::Sequential)
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "P3\n0 1\n255\n");
}
