//! The timeline playhead.

use std::fmt;

/// First year of the journey timeline (birth).
pub const MIN_YEAR: u16 = 1861;
/// Last year of the journey timeline (execution).
pub const MAX_YEAR: u16 = 1896;

/// A year guaranteed to lie in `[MIN_YEAR, MAX_YEAR]`.
///
/// The only constructor clamps, so an out-of-range value can never be
/// observed downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimelineYear(u16);

impl TimelineYear {
    pub const MIN: Self = Self(MIN_YEAR);
    pub const MAX: Self = Self(MAX_YEAR);

    /// Clamp an arbitrary integer to the timeline range.
    #[must_use]
    pub fn clamped(year: i64) -> Self {
        let year = year.clamp(i64::from(MIN_YEAR), i64::from(MAX_YEAR));
        Self(year as u16)
    }

    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn is_max(self) -> bool {
        self.0 == MAX_YEAR
    }

    /// The following year, saturating at `MAX`.
    #[must_use]
    pub fn succ(self) -> Self {
        Self::clamped(i64::from(self.0) + 1)
    }

    /// Offset by `delta` years, clamping at both ends.
    #[must_use]
    pub fn offset(self, delta: i64) -> Self {
        Self::clamped(i64::from(self.0).saturating_add(delta))
    }

    /// Position within the range as a fraction in `[0.0, 1.0]`.
    #[must_use]
    pub fn fraction(self) -> f64 {
        f64::from(self.0 - MIN_YEAR) / f64::from(MAX_YEAR - MIN_YEAR)
    }
}

impl Default for TimelineYear {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for TimelineYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{MAX_YEAR, MIN_YEAR, TimelineYear};

    #[test]
    fn clamps_below_range() {
        assert_eq!(TimelineYear::clamped(1700).get(), MIN_YEAR);
        assert_eq!(TimelineYear::clamped(i64::MIN).get(), MIN_YEAR);
    }

    #[test]
    fn clamps_above_range() {
        assert_eq!(TimelineYear::clamped(2024).get(), MAX_YEAR);
        assert_eq!(TimelineYear::clamped(i64::MAX).get(), MAX_YEAR);
    }

    #[test]
    fn in_range_is_preserved() {
        for year in MIN_YEAR..=MAX_YEAR {
            assert_eq!(TimelineYear::clamped(i64::from(year)).get(), year);
        }
    }

    #[test]
    fn succ_saturates_at_max() {
        assert_eq!(TimelineYear::clamped(1895).succ(), TimelineYear::MAX);
        assert_eq!(TimelineYear::MAX.succ(), TimelineYear::MAX);
    }

    #[test]
    fn offset_clamps_both_ways() {
        assert_eq!(TimelineYear::MIN.offset(-5), TimelineYear::MIN);
        assert_eq!(TimelineYear::MIN.offset(10).get(), 1871);
        assert_eq!(TimelineYear::MAX.offset(10), TimelineYear::MAX);
    }

    #[test]
    fn fraction_spans_unit_interval() {
        assert!(TimelineYear::MIN.fraction().abs() < f64::EPSILON);
        assert!((TimelineYear::MAX.fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn default_is_min() {
        assert_eq!(TimelineYear::default(), TimelineYear::MIN);
        assert_eq!(TimelineYear::default().to_string(), "1861");
    }
}
