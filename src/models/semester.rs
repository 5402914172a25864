//! Semester arithmetic.
//!
//! An academic year has three offering slots, cycling
//! Semester1 → Semester2 → Summer → Semester1 of the next year.
//! The derived lexicographic order on `(year, offering)` agrees with
//! repeated [`Semester::successor`] application, so range iteration and
//! loop termination are consistent with stepping.

use serde::{Deserialize, Serialize};

/// The slot within an academic year a unit may run in.
///
/// Ordinal order: `Semester1 < Semester2 < Summer`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Offering {
    /// First half-year teaching period.
    Semester1,
    /// Second half-year teaching period.
    Semester2,
    /// Condensed end-of-year teaching period.
    Summer,
}

impl Offering {
    /// All offerings in ordinal order.
    pub const ALL: [Offering; 3] = [Offering::Semester1, Offering::Semester2, Offering::Summer];
}

/// A concrete semester: a year paired with an offering slot.
///
/// Ordered by year, then by offering ordinal within the year. Stepping past
/// `Summer` wraps to `Semester1` of the following year.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Semester {
    /// Calendar year.
    pub year: i32,
    /// Offering slot within the year.
    pub offering: Offering,
}

impl Semester {
    /// Creates a semester.
    pub fn new(year: i32, offering: Offering) -> Self {
        Self { year, offering }
    }

    /// The next semester in the academic calendar.
    pub fn successor(self) -> Self {
        match self.offering {
            Offering::Semester1 => Self::new(self.year, Offering::Semester2),
            Offering::Semester2 => Self::new(self.year, Offering::Summer),
            Offering::Summer => Self::new(self.year + 1, Offering::Semester1),
        }
    }

    /// The previous semester in the academic calendar.
    pub fn predecessor(self) -> Self {
        match self.offering {
            Offering::Semester1 => Self::new(self.year - 1, Offering::Summer),
            Offering::Semester2 => Self::new(self.year, Offering::Semester1),
            Offering::Summer => Self::new(self.year, Offering::Semester2),
        }
    }
}

/// Ascending iterator over `first..=last`.
///
/// Lazy and finite; restartable by cloning or re-creating. Yields nothing
/// when `first > last`.
pub fn semester_range(first: Semester, last: Semester) -> SemesterRange {
    SemesterRange {
        cursor: Some(first),
        last,
    }
}

/// Iterator state for [`semester_range`].
#[derive(Debug, Clone)]
pub struct SemesterRange {
    cursor: Option<Semester>,
    last: Semester,
}

impl Iterator for SemesterRange {
    type Item = Semester;

    fn next(&mut self) -> Option<Semester> {
        let current = self.cursor?;
        if current > self.last {
            self.cursor = None;
            return None;
        }
        self.cursor = Some(current.successor());
        Some(current)
    }
}
