//! Study plans and bound plans.
//!
//! A [`StudyPlan`] is an ordered collection of concrete unit placements;
//! a [`BoundPlan`] pairs each still-unplaced unit with the semesters it
//! could legally occupy. Both are plain values: the search constructs new
//! snapshots rather than mutating shared state, so every backtrack branch
//! owns its own copy.

use serde::{Deserialize, Serialize};

use super::{Catalog, Semester};

/// Maximum number of units that may share one semester.
pub const MAX_UNITS_PER_SEMESTER: usize = 4;

/// One concrete placement of a unit in a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitInPlan {
    /// Unit code.
    pub code: String,
    /// Study area the unit counts toward.
    pub study_area: String,
    /// Semester the unit is placed in.
    pub semester: Semester,
}

impl UnitInPlan {
    /// Creates a placement.
    pub fn new(
        code: impl Into<String>,
        study_area: impl Into<String>,
        semester: Semester,
    ) -> Self {
        Self {
            code: code.into(),
            study_area: study_area.into(),
            semester,
        }
    }
}

/// An ordered collection of unit placements.
///
/// Invariant: no two entries share a code — a unit appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyPlan {
    /// Placements in plan order.
    pub units: Vec<UnitInPlan>,
}

impl StudyPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a placement. The caller upholds the no-duplicate invariant.
    pub fn add(&mut self, unit: UnitInPlan) {
        self.units.push(unit);
    }

    /// Builder: appends a placement and returns self.
    pub fn with_unit(mut self, unit: UnitInPlan) -> Self {
        self.add(unit);
        self
    }

    /// Whether a unit with the given code is in the plan.
    pub fn contains_code(&self, code: &str) -> bool {
        self.units.iter().any(|u| u.code == code)
    }

    /// Finds the placement of a unit.
    pub fn unit(&self, code: &str) -> Option<&UnitInPlan> {
        self.units.iter().find(|u| u.code == code)
    }

    /// Number of units placed in the given semester.
    pub fn count_in(&self, semester: Semester) -> usize {
        self.units.iter().filter(|u| u.semester == semester).count()
    }

    /// The units placed strictly before `cutoff`, as a plan snapshot.
    pub fn completed_before(&self, cutoff: Semester) -> StudyPlan {
        StudyPlan {
            units: self
                .units
                .iter()
                .filter(|u| u.semester < cutoff)
                .cloned()
                .collect(),
        }
    }

    /// A copy of the plan with the named unit removed.
    pub fn without(&self, code: &str) -> StudyPlan {
        StudyPlan {
            units: self
                .units
                .iter()
                .filter(|u| u.code != code)
                .cloned()
                .collect(),
        }
    }

    /// The latest semester used by any placement. `None` for an empty plan.
    pub fn last_semester(&self) -> Option<Semester> {
        self.units.iter().map(|u| u.semester).max()
    }

    /// Total credit points across the plan, from the catalog entries.
    pub fn total_credit_points(&self, catalog: &Catalog) -> u32 {
        self.units
            .iter()
            .map(|u| catalog.lookup(&u.code).credit_points)
            .sum()
    }

    /// Number of placements.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the plan has no placements.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// A unit paired with the semesters it could still legally occupy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedUnit {
    /// Unit code.
    pub code: String,
    /// Study area the unit counts toward.
    pub study_area: String,
    /// Candidate semesters in ascending order.
    pub possible_semesters: Vec<Semester>,
}

/// The units still to be scheduled, each with its candidate semesters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundPlan {
    /// Bound units in plan order.
    pub units: Vec<PlannedUnit>,
}

impl BoundPlan {
    /// Creates an empty bound plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a bound unit.
    pub fn add(&mut self, unit: PlannedUnit) {
        self.units.push(unit);
    }

    /// A copy of the bound plan with the named unit removed.
    pub fn without(&self, code: &str) -> BoundPlan {
        BoundPlan {
            units: self
                .units
                .iter()
                .filter(|u| u.code != code)
                .cloned()
                .collect(),
        }
    }

    /// Whether every unit still has at least one candidate semester.
    pub fn all_feasible(&self) -> bool {
        self.units.iter().all(|u| !u.possible_semesters.is_empty())
    }

    /// Number of bound units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether no units remain.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
