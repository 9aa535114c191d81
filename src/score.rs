//! Totally ordered priority scores.
//!
//! Scores are `f64` under the hood, wrapped in [`ordered_float::OrderedFloat`]
//! so the heap discipline always sees a total order. Integral priorities
//! promote into the same numeric domain.

use core::fmt;

use ordered_float::OrderedFloat;

/// A priority score with a total order.
///
/// Higher scores are higher priority. `NaN` sorts above every finite score
/// (the `OrderedFloat` convention); callers that care should avoid feeding
/// `NaN` in, but the queue itself never misbehaves on it.
///
/// # Example
///
/// ```
/// use schedq::Score;
///
/// let low = Score::new(1.5);
/// let high = Score::from(10);
///
/// assert!(high > low);
/// assert_eq!(high.get(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(OrderedFloat<f64>);

impl Score {
    /// Creates a score from a raw `f64`.
    #[inline]
    pub fn new(score: f64) -> Self {
        Self(OrderedFloat(score))
    }

    /// Returns the raw `f64` value.
    #[inline]
    pub fn get(self) -> f64 {
        self.0.into_inner()
    }
}

impl From<f64> for Score {
    #[inline]
    fn from(score: f64) -> Self {
        Self::new(score)
    }
}

impl From<f32> for Score {
    #[inline]
    fn from(score: f32) -> Self {
        Self::new(score as f64)
    }
}

macro_rules! impl_score_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Score {
                #[inline]
                fn from(score: $ty) -> Self {
                    Self::new(score as f64)
                }
            }
        )*
    };
}

impl_score_from_int!(u8, u16, u32, i8, i16, i32, i64, u64);

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
