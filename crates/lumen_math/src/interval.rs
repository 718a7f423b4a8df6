/// A closed range of real numbers `[min, max]`.
///
/// Used for the admissible `t` range of ray queries and for clamping color
/// channels. An interval with `min > max` is empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// An empty interval (min > max, contains nothing).
    pub const EMPTY: Interval = Interval {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    /// A universe interval (contains everything).
    pub const UNIVERSE: Interval = Interval {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };

    /// Create a new interval given min and max values.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    ///
    /// Never panics, unlike `f64::clamp`, so it is safe on [`Interval::EMPTY`].
    pub fn clamp(&self, x: f64) -> f64 {
        if x < self.min {
            self.min
        } else if x > self.max {
            self.max
        } else {
            x
        }
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROBES: [f64; 11] = [
        -1e300, -10.0, -0.5, -f64::MIN_POSITIVE, 0.0, 0.001, 0.5, 1.0, 9.999, 10.0, 1e300,
    ];

    #[test]
    fn test_interval_contains() {
        let interval = Interval::new(0.0, 10.0);

        // Inclusive bounds
        assert!(interval.contains(0.0));
        assert!(interval.contains(10.0));
        assert!(interval.contains(5.0));

        assert!(!interval.contains(-0.1));
        assert!(!interval.contains(10.1));
    }

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.0, 10.0);

        // Exclusive bounds - endpoints NOT included
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(10.0));

        assert!(interval.surrounds(5.0));
        assert!(interval.surrounds(0.1));
        assert!(interval.surrounds(9.9));

        assert!(!interval.surrounds(-0.1));
        assert!(!interval.surrounds(10.1));
    }

    #[test]
    fn test_interval_clamp() {
        let interval = Interval::new(0.0, 10.0);

        assert_eq!(interval.clamp(-5.0), 0.0);
        assert_eq!(interval.clamp(0.0), 0.0);
        assert_eq!(interval.clamp(5.0), 5.0);
        assert_eq!(interval.clamp(10.0), 10.0);
        assert_eq!(interval.clamp(15.0), 10.0);
    }

    #[test]
    fn test_predicates_agree_with_bounds() {
        let ranges = [
            Interval::new(0.0, 10.0),
            Interval::new(-0.5, -0.5),
            Interval::new(0.001, f64::INFINITY),
            Interval::new(-1e300, 1e300),
        ];

        for range in ranges {
            for x in PROBES {
                assert_eq!(range.contains(x), range.min <= x && x <= range.max);
                assert_eq!(range.surrounds(x), range.min < x && x < range.max);

                let clamped = range.clamp(x);
                assert!(range.contains(clamped), "{clamped} escaped {range:?}");
                if range.contains(x) {
                    assert_eq!(clamped, x);
                }
            }
        }
    }

    #[test]
    fn test_interval_empty() {
        let empty = Interval::EMPTY;

        assert!(empty.min > empty.max);
        assert_eq!(Interval::default(), empty);

        for x in PROBES {
            assert!(!empty.contains(x));
            assert!(!empty.surrounds(x));
        }

        // Clamping with an empty range must not panic
        assert_eq!(empty.clamp(3.0), f64::INFINITY);
    }

    #[test]
    fn test_interval_universe() {
        let universe = Interval::UNIVERSE;

        for x in PROBES {
            assert!(universe.contains(x));
            assert!(universe.surrounds(x));
            assert_eq!(universe.clamp(x), x);
        }
    }
}
