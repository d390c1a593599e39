//! Character-count state for a capped field.

/// Default share of the cap at which a field enters [`CountStatus::Warning`].
pub const DEFAULT_WARNING_RATIO: f64 = 0.8;

/// Status derived from a field's length and cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountStatus {
    #[default]
    Normal,
    /// At or above the warning ratio but still below the cap.
    Warning,
    /// Exactly at the cap.
    AtLimit,
}

impl CountStatus {
    /// Style class applied to the counter and field, if any.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Warning => Some("warning"),
            Self::AtLimit => Some("error"),
        }
    }
}

/// Validity marker for required fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid,
}

impl Validity {
    /// Style class for the marker.
    pub fn class(self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
        }
    }
}

/// Snapshot of one field's count. Never stored; always recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountState {
    pub length: usize,
    pub max: usize,
    pub status: CountStatus,
}

impl CountState {
    /// Computes the state for a value of `length` characters under `max`.
    ///
    /// `warning_ratio` is the share of `max` where [`CountStatus::Warning`]
    /// begins. A length above `max` is reported as [`CountStatus::Normal`]; the
    /// over-cap condition is carried by [`Validity::Invalid`] instead.
    pub fn compute(length: usize, max: usize, warning_ratio: f64) -> Self {
        let status = if length == max {
            CountStatus::AtLimit
        } else if length < max && length as f64 >= max as f64 * warning_ratio {
            CountStatus::Warning
        } else {
            CountStatus::Normal
        };
        Self {
            length,
            max,
            status,
        }
    }

    /// Characters left before the cap. Negative while over the cap.
    pub fn remaining(&self) -> i64 {
        self.max as i64 - self.length as i64
    }

    /// Counter text in `current/max` form.
    pub fn counter_text(&self) -> String {
        format!("{}/{}", self.length, self.max)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn status(length: usize, max: usize) -> CountStatus {
        CountState::compute(length, max, DEFAULT_WARNING_RATIO).status
    }

    // --- thresholds ---

    #[test]
    fn below_warning_is_normal() {
        assert_eq!(status(0, 10), CountStatus::Normal);
        assert_eq!(status(7, 10), CountStatus::Normal);
    }

    #[test]
    fn warning_starts_at_eighty_percent() {
        assert_eq!(status(8, 10), CountStatus::Warning);
        assert_eq!(status(9, 10), CountStatus::Warning);
        assert_eq!(status(40, 50), CountStatus::Warning);
        assert_eq!(status(39, 50), CountStatus::Normal);
    }

    #[test]
    fn at_cap_is_at_limit() {
        assert_eq!(status(10, 10), CountStatus::AtLimit);
    }

    #[test]
    fn zero_cap_empty_value_is_at_limit() {
        assert_eq!(status(0, 0), CountStatus::AtLimit);
    }

    #[test]
    fn over_cap_is_not_at_limit() {
        assert_eq!(status(11, 10), CountStatus::Normal);
    }

    #[test]
    fn custom_ratio_moves_warning_threshold() {
        let state = CountState::compute(5, 10, 0.5);
        assert_eq!(state.status, CountStatus::Warning);
        let state = CountState::compute(4, 10, 0.5);
        assert_eq!(state.status, CountStatus::Normal);
    }

    // --- derived values ---

    #[test]
    fn remaining_goes_negative_over_cap() {
        assert_eq!(CountState::compute(3, 10, 0.8).remaining(), 7);
        assert_eq!(CountState::compute(12, 10, 0.8).remaining(), -2);
    }

    #[test]
    fn counter_text_format() {
        insta::assert_snapshot!(CountState::compute(7, 100, 0.8).counter_text(), @"7/100");
    }

    #[test]
    fn status_classes() {
        assert_eq!(CountStatus::Normal.class(), None);
        assert_eq!(CountStatus::Warning.class(), Some("warning"));
        assert_eq!(CountStatus::AtLimit.class(), Some("error"));
        assert_eq!(Validity::Invalid.class(), "invalid");
    }

    #[quickcheck]
    fn status_matches_thresholds(length: u16, max: u16) -> bool {
        let (length, max) = (length as usize, max as usize);
        let state = CountState::compute(length, max, DEFAULT_WARNING_RATIO);
        let expected = if length == max {
            CountStatus::AtLimit
        } else if (max as f64) * 0.8 <= length as f64 && length < max {
            CountStatus::Warning
        } else {
            CountStatus::Normal
        };
        state.status == expected && state.counter_text() == format!("{length}/{max}")
    }
}
