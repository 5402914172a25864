//! Iterative plan compression.
//!
//! Starting from a plan already in force, repeatedly tightens the target
//! completion semester, re-derives bounds, and re-runs the placement
//! search. Every success is yielded and tightens the target further; the
//! first failure — or crossing the theoretical completion floor — ends the
//! sequence. The yielded plans are strictly monotonically improving, so
//! the sequence is finite.

use crate::bounds::bound_units_in_plan;
use crate::models::{Catalog, Offering, Semester, StudyPlan, MAX_UNITS_PER_SEMESTER};

use super::schedule_remaining;

/// Lower bound on the completion semester of any legal rearrangement of
/// `plan`.
///
/// With at most [`MAX_UNITS_PER_SEMESTER`] units per semester and two
/// teaching semesters per year (Summer excluded from this arithmetic), the
/// plan needs `ceil(len / 4)` semesters. The first semester counts as the
/// first slot; each further slot advances to the next non-Summer offering.
pub fn best_possible(first: Semester, plan: &StudyPlan) -> Semester {
    let slots = plan.len().div_ceil(MAX_UNITS_PER_SEMESTER);
    let mut semester = first;
    for _ in 1..slots {
        semester = next_teaching_semester(semester);
    }
    semester
}

/// The next Semester1/Semester2 slot after `s`.
fn next_teaching_semester(s: Semester) -> Semester {
    match s.offering {
        Offering::Semester1 => Semester::new(s.year, Offering::Semester2),
        Offering::Semester2 | Offering::Summer => Semester::new(s.year + 1, Offering::Semester1),
    }
}

/// Lazy sequence of strictly-improving plans.
///
/// Each pull attempts exactly one tighter completion target; the first
/// failed attempt exhausts the iterator. Dropping the iterator early
/// abandons the unexplored remainder of the search — that is the intended
/// cancellation mechanism; there is no other.
#[derive(Debug, Clone)]
pub struct Improvements<'a> {
    catalog: &'a Catalog,
    plan: StudyPlan,
    first: Semester,
    floor: Semester,
    target: Option<Semester>,
}

impl Iterator for Improvements<'_> {
    type Item = StudyPlan;

    fn next(&mut self) -> Option<StudyPlan> {
        let target = self.target.take()?;
        if target < self.floor {
            return None;
        }
        let bound = bound_units_in_plan(self.catalog, &self.plan, self.first, target);
        if !bound.all_feasible() {
            return None;
        }
        let improved = schedule_remaining(self.catalog, &bound, &StudyPlan::new())?;
        self.target = improved.last_semester().map(Semester::predecessor);
        Some(improved)
    }
}

/// Searches for schedules strictly shorter than `plan`.
///
/// `current_semester` is the fixed start of the scheduling window — the
/// semester the student is about to begin. The first attempt targets the
/// semester before `plan`'s current completion; each yielded improvement
/// tightens the target to the semester before its own completion. Bounds
/// are always derived from the input plan's unit set.
///
/// Deterministic: identical inputs produce identical sequences, and the
/// iterator restarts from scratch when re-created.
///
/// # Example
///
/// ```
/// use study_schedule::models::{
///     Catalog, Offering, Prereq, Semester, StudyPlan, UnitInPlan, UnitInfo,
/// };
/// use study_schedule::scheduler::try_to_improve_schedule;
///
/// let catalog = Catalog::new()
///     .with_unit(
///         "A",
///         UnitInfo::new("Intro").with_credit_points(6).offered_every_semester(),
///     )
///     .with_unit(
///         "B",
///         UnitInfo::new("Follow-on")
///             .with_credit_points(6)
///             .offered_every_semester()
///             .with_prereq(Prereq::unit("A")),
///     );
///
/// // The plan in force wastes a year between A and B.
/// let plan = StudyPlan::new()
///     .with_unit(UnitInPlan::new("A", "core", Semester::new(2021, Offering::Semester1)))
///     .with_unit(UnitInPlan::new("B", "core", Semester::new(2022, Offering::Semester1)));
///
/// let start = Semester::new(2021, Offering::Semester1);
/// let better = try_to_improve_schedule(&catalog, start, &plan).next().unwrap();
/// assert_eq!(better.last_semester(), Some(Semester::new(2021, Offering::Semester2)));
/// ```
pub fn try_to_improve_schedule<'a>(
    catalog: &'a Catalog,
    current_semester: Semester,
    plan: &StudyPlan,
) -> Improvements<'a> {
    Improvements {
        catalog,
        plan: plan.clone(),
        first: current_semester,
        floor: best_possible(current_semester, plan),
        target: plan.last_semester().map(Semester::predecessor),
    }
}
