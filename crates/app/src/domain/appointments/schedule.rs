//! Appointment time slots and the half-open overlap rule.

use jiff::civil::DateTime;
use thiserror::Error;

/// Rejected slot whose start is not strictly before its finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("time slot must start before it finishes (starts at {starts_at}, finishes at {finishes_at})")]
pub struct InvalidTimeSlot {
    pub starts_at: DateTime,
    pub finishes_at: DateTime,
}

/// Wall-clock interval `[starts_at, finishes_at)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    starts_at: DateTime,
    finishes_at: DateTime,
}

impl TimeSlot {
    /// Build a slot, requiring `starts_at < finishes_at`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTimeSlot`] when the slot is empty or inverted.
    pub fn new(starts_at: DateTime, finishes_at: DateTime) -> Result<Self, InvalidTimeSlot> {
        if starts_at >= finishes_at {
            return Err(InvalidTimeSlot {
                starts_at,
                finishes_at,
            });
        }

        Ok(Self {
            starts_at,
            finishes_at,
        })
    }

    #[must_use]
    pub const fn starts_at(&self) -> DateTime {
        self.starts_at
    }

    #[must_use]
    pub const fn finishes_at(&self) -> DateTime {
        self.finishes_at
    }

    /// Two slots overlap iff each starts before the other finishes.
    ///
    /// A slot finishing exactly when another starts does not overlap it.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.starts_at < other.finishes_at && other.starts_at < self.finishes_at
    }
}

#[cfg(test)]
mod tests {
    use jiff::{ToSpan, civil::date};
    use testresult::TestResult;

    use super::*;

    fn nine_am() -> DateTime {
        date(2026, 3, 2).at(9, 0, 0, 0)
    }

    fn slot(starts_at: DateTime, finishes_at: DateTime) -> Result<TimeSlot, InvalidTimeSlot> {
        TimeSlot::new(starts_at, finishes_at)
    }

    #[test]
    fn new_rejects_equal_bounds() {
        let result = slot(nine_am(), nine_am());

        assert_eq!(
            result,
            Err(InvalidTimeSlot {
                starts_at: nine_am(),
                finishes_at: nine_am(),
            })
        );
    }

    #[test]
    fn new_rejects_inverted_bounds() {
        assert!(slot(nine_am() + 1.hour(), nine_am()).is_err());
    }

    #[test]
    fn partially_overlapping_slots_overlap() -> TestResult {
        let first = slot(nine_am(), nine_am() + 1.hour())?;
        let second = slot(nine_am() + 30.minutes(), nine_am() + 90.minutes())?;

        assert!(first.overlaps(&second));
        assert!(second.overlaps(&first), "overlap must be symmetric");

        Ok(())
    }

    #[test]
    fn touching_slots_do_not_overlap() -> TestResult {
        let first = slot(nine_am(), nine_am() + 1.hour())?;
        let second = slot(nine_am() + 1.hour(), nine_am() + 2.hours())?;

        assert!(!first.overlaps(&second));
        assert!(!second.overlaps(&first));

        Ok(())
    }

    #[test]
    fn contained_slot_overlaps() -> TestResult {
        let outer = slot(nine_am(), nine_am() + 3.hours())?;
        let inner = slot(nine_am() + 1.hour(), nine_am() + 2.hours())?;

        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));

        Ok(())
    }

    #[test]
    fn identical_slots_overlap() -> TestResult {
        let first = slot(nine_am(), nine_am() + 15.minutes())?;

        assert!(first.overlaps(&first));

        Ok(())
    }

    #[test]
    fn disjoint_slots_do_not_overlap() -> TestResult {
        let morning = slot(nine_am(), nine_am() + 1.hour())?;
        let afternoon = slot(nine_am() + 5.hours(), nine_am() + 6.hours())?;

        assert!(!morning.overlaps(&afternoon));

        Ok(())
    }
}
