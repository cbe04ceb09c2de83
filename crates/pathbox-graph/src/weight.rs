//! Edge length type, and the distance type produced by the shortest path algorithms.
use num_traits::Num;
use std::fmt;
use std::ops;

/// Numeric type usable as an edge length.
///
/// Lengths may be negative. Any signed integer or floating point type qualifies; unsigned types
/// also work as long as the graph has no negative edges to begin with.
pub trait Weight: Copy + PartialOrd + Num + fmt::Debug + Send + Sync {}

impl<T: Copy + PartialOrd + Num + fmt::Debug + Send + Sync> Weight for T {}

/// Length of a shortest path, or the absence of any path.
///
/// [`Distance::Unreachable`] compares greater than any finite distance, so it can be used
/// directly in minimum computations. It is never added to, so it cannot overflow or turn back
/// into a finite value.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Distance<W> {
    /// The target is reachable with a shortest path of this length.
    Finite(W),
    /// There is no path to the target.
    Unreachable,
}

impl<W> Distance<W> {
    /// Returns true if this distance is finite.
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Returns the finite value, if any.
    pub fn finite(self) -> Option<W> {
        match self {
            Self::Finite(w) => Some(w),
            Self::Unreachable => None,
        }
    }

    /// Maps the finite value with the given function, leaving [`Distance::Unreachable`] untouched.
    pub fn map<U>(self, f: impl FnOnce(W) -> U) -> Distance<U> {
        match self {
            Self::Finite(w) => Distance::Finite(f(w)),
            Self::Unreachable => Distance::Unreachable,
        }
    }
}

impl<W: Weight> Distance<W> {
    /// Zero distance, the distance from a node to itself.
    pub fn zero() -> Self {
        Self::Finite(W::zero())
    }

    /// Returns the smaller of the two distances.
    pub fn min(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }
}

impl<W> Default for Distance<W> {
    fn default() -> Self {
        Self::Unreachable
    }
}

impl<W> From<Option<W>> for Distance<W> {
    fn from(value: Option<W>) -> Self {
        value.map_or(Self::Unreachable, Self::Finite)
    }
}

impl<W: ops::Add<Output = W>> ops::Add<W> for Distance<W> {
    type Output = Self;

    fn add(self, rhs: W) -> Self::Output {
        self.map(|w| w + rhs)
    }
}

impl<W: ops::Add<Output = W>> ops::Add for Distance<W> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Finite(a), Self::Finite(b)) => Self::Finite(a + b),
            _ => Self::Unreachable,
        }
    }
}

impl<W: fmt::Display> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(w) => fmt::Display::fmt(w, f),
            Self::Unreachable => f.write_str("inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Distance::Finite(-5), Distance::Finite(3))]
    #[case(Distance::Finite(i64::MAX), Distance::Unreachable)]
    #[case(Distance::Finite(0), Distance::Unreachable)]
    fn test_ordering(#[case] smaller: Distance<i64>, #[case] larger: Distance<i64>) {
        assert!(smaller < larger);
        assert_eq!(smaller, smaller.min(larger));
        assert_eq!(smaller, larger.min(smaller));
    }

    #[test]
    fn test_unreachable_absorbs_addition() {
        assert_eq!(Distance::Unreachable, Distance::<i32>::Unreachable + -10);
        assert_eq!(Distance::Unreachable, Distance::Finite(1) + Distance::Unreachable);
        assert_eq!(Distance::Finite(-9), Distance::Finite(1) + -10);
    }

    #[test]
    fn test_display() {
        assert_eq!("-3", Distance::Finite(-3).to_string());
        assert_eq!("inf", Distance::<f64>::Unreachable.to_string());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Distance::Finite(2.5), Distance::from(Some(2.5)));
        assert_eq!(Distance::<f32>::Unreachable, Distance::from(None));
    }
}
