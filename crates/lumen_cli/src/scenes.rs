//! Built-in scenes, each with the camera it is meant to be seen through.

use anyhow::{bail, Error};
use lumen_renderer::{
    random_f64, random_range, CameraConfig, Color, Dielectric, HittableList, Lambertian, Metal,
    Point3, Sphere, Vec3,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    /// Ground plus a diffuse, a glass and a metal sphere
    Spheres,
    /// A field of small random spheres around three large ones
    Cover,
    /// Nothing but sky
    Empty,
}

impl FromStr for SceneKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spheres" => Ok(SceneKind::Spheres),
            "cover" => Ok(SceneKind::Cover),
            "empty" => Ok(SceneKind::Empty),
            other => bail!("Unknown scene '{}', expected spheres, cover or empty", other),
        }
    }
}

/// Build a scene and its camera preset. `seed` only affects random layouts.
pub fn build(kind: SceneKind, seed: u64) -> (HittableList, CameraConfig) {
    match kind {
        SceneKind::Spheres => (spheres(), spheres_camera()),
        SceneKind::Cover => {
            let mut rng = StdRng::seed_from_u64(seed);
            (cover(&mut rng), cover_camera())
        }
        SceneKind::Empty => (HittableList::new(), empty_camera()),
    }
}

fn spheres() -> HittableList {
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

    // Hollow glass: an outer shell and an inverted inner bubble
    world.add(Sphere::new(Point3::new(-1.0, 0.0, -1.0), 0.5, Dielectric::new(1.5)));
    world.add(Sphere::new(
        Point3::new(-1.0, 0.0, -1.0),
        0.4,
        Dielectric::new(1.0 / 1.5),
    ));

    world.add(Sphere::new(
        Point3::new(1.0, 0.0, -1.0),
        0.5,
        Metal::new(Color::new(0.8, 0.6, 0.2), 1.0),
    ));

    world
}

fn spheres_camera() -> CameraConfig {
    CameraConfig {
        aspect_ratio: 16.0 / 9.0,
        image_width: 400,
        samples_per_pixel: 100,
        max_depth: 50,
        vfov: 20.0,
        lookfrom: Point3::new(-2.0, 2.0, 1.0),
        lookat: Point3::new(0.0, 0.0, -1.0),
        vup: Vec3::Y,
        defocus_angle: 10.0,
        focus_dist: 3.4,
        ..CameraConfig::default()
    }
}

fn cover(rng: &mut dyn RngCore) -> HittableList {
    let mut world = HittableList::new();

    world.add(Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        Lambertian::new(Color::new(0.5, 0.5, 0.5)),
    ));

    for a in -11..11 {
        for b in -11..11 {
            let center = Point3::new(
                f64::from(a) + 0.9 * random_f64(rng),
                0.2,
                f64::from(b) + 0.9 * random_f64(rng),
            );

            // Keep clear of the large metal sphere
            if (center - Point3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let choose_mat = random_f64(rng);
            if choose_mat < 0.8 {
                let albedo = random_color(rng, 0.0, 1.0) * random_color(rng, 0.0, 1.0);
                world.add(Sphere::new(center, 0.2, Lambertian::new(albedo)));
            } else if choose_mat < 0.95 {
                let albedo = random_color(rng, 0.5, 1.0);
                let fuzz = random_range(rng, 0.0, 0.5);
                world.add(Sphere::new(center, 0.2, Metal::new(albedo, fuzz)));
            } else {
                world.add(Sphere::new(center, 0.2, Dielectric::new(1.5)));
            }
        }
    }

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

    log::info!("Built cover scene with {} objects", world.len());
    world
}

fn cover_camera() -> CameraConfig {
    CameraConfig {
        aspect_ratio: 16.0 / 9.0,
        image_width: 800,
        samples_per_pixel: 50,
        max_depth: 10,
        vfov: 20.0,
        lookfrom: Point3::new(13.0, 2.0, 3.0),
        lookat: Point3::ZERO,
        vup: Vec3::Y,
        defocus_angle: 0.6,
        focus_dist: 10.0,
        ..CameraConfig::default()
    }
}

fn empty_camera() -> CameraConfig {
    CameraConfig {
        aspect_ratio: 16.0 / 9.0,
        image_width: 400,
        lookfrom: Point3::ZERO,
        lookat: Point3::new(0.0, 0.0, -1.0),
        focus_dist: 1.0,
        ..CameraConfig::default()
    }
}

fn random_color(rng: &mut dyn RngCore, min: f64, max: f64) -> Color {
    Color::new(
        random_range(rng, min, max),
        random_range(rng, min, max),
        random_range(rng, min, max),
    )
}
