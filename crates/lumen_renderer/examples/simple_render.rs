//! Simple ray tracer example.
//!
//! Renders three spheres on a ground plane and streams the PPM to stdout:
//!
//! ```text
//! cargo run --release --example simple_render > output.ppm
//! ```

use lumen_renderer::{
    Camera, Color, Dielectric, HittableList, Lambertian, Metal, Point3, RenderResult, Sphere,
    Vec3,
};

fn main() -> RenderResult<()> {
    let mut world = HittableList::new();

    world.add(Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        Lambertian::new(Color::new(0.5, 0.5, 0.5)),
    ));
    world.add(Sphere::new(Point3::new(0.0, 1.0, 0.0), 1.0, Dielectric::new(1.5)));
    world.add(Sphere::new(
        Point3::new(-4.0, 1.0, 0.0),
        1.0,
        Lambertian::new(Color::new(0.4, 0.2, 0.1)),
    ));
    world.add(Sphere::new(
        Point3::new(4.0, 1.0, 0.0),
        1.0,
        Metal::new(Color::new(0.7, 0.6, 0.5), 0.0),
    ));

    let mut camera = Camera::new()
        .with_resolution(400, 16.0 / 9.0)
        .with_quality(50, 10)
        .with_position(Point3::new(13.0, 2.0, 3.0), Point3::ZERO, Vec3::Y)
        .with_lens(20.0, 0.6, 10.0);

    // Pixels to stdout, progress to stderr
    camera.render(&world)
}
