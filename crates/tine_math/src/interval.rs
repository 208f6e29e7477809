/// A closed range `[min, max]` on one axis.
///
/// Used for screen-space bounding boxes. An interval with `min > max`
/// is empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// An empty interval (min > max, contains nothing).
    pub const EMPTY: Interval = Interval {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Smallest interval containing both `self` and `x`.
    pub fn include(&self, x: f32) -> Interval {
        Interval::new(self.min.min(x), self.max.max(x))
    }

    /// Overlap of two intervals; empty if they are disjoint.
    pub fn intersect(&self, other: &Interval) -> Interval {
        Interval::new(self.min.max(other.min), self.max.min(other.max))
    }

    /// Integer positions covered by the interval.
    pub fn integers(&self) -> std::ops::RangeInclusive<i32> {
        if self.is_empty() {
            return std::ops::RangeInclusive::new(1, 0);
        }
        (self.min.ceil() as i32)..=(self.max.floor() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_include_and_intersect() {
        let grown = Interval::EMPTY.include(3.0).include(-1.0);
        assert_eq!(grown, Interval::new(-1.0, 3.0));

        let clipped = grown.intersect(&Interval::new(0.0, 799.0));
        assert_eq!(clipped, Interval::new(0.0, 3.0));

        let disjoint = Interval::new(900.0, 950.0).intersect(&Interval::new(0.0, 799.0));
        assert!(disjoint.is_empty());
    }

    #[test]
    fn test_interval_integers() {
        let span: Vec<i32> = Interval::new(0.5, 3.0).integers().collect();
        assert_eq!(span, vec![1, 2, 3]);

        assert_eq!(Interval::EMPTY.integers().count(), 0);
        assert_eq!(Interval::new(2.2, 2.8).integers().count(), 0);
    }
}
