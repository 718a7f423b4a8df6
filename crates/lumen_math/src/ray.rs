use crate::{Point3, Vec3};

/// A half-line starting at `origin` and traveling along `direction`.
///
/// The direction is not required to be normalized; points along the ray are
/// parameterized by `t`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Point3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Point3::ZERO);
        assert_eq!(ray.at(1.0), Point3::X);
        assert_eq!(ray.at(2.0), Point3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Point3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_unnormalized_direction() {
        let ray = Ray::new(Point3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, -4.0));

        assert_eq!(ray.at(0.5), Point3::new(1.0, 2.0, 1.0));
        assert_eq!(ray.origin(), ray.origin);
        assert_eq!(ray.direction(), ray.direction);
    }
}
