//! Enrollment legality predicates.
//!
//! Tests whether a unit may occupy a given semester of a plan: the unit
//! must run in that semester's offering, its prerequisite must be met by
//! the units placed strictly earlier, and the semester must have room
//! under the load cap.
//!
//! All predicates are pure functions of the catalog and the plan; they are
//! usable as feasibility probes by a host before committing a change.

use crate::models::{Catalog, Semester, StudyPlan, MAX_UNITS_PER_SEMESTER};

/// Whether the unit runs in the given semester's offering.
pub fn is_offered(catalog: &Catalog, code: &str, semester: Semester) -> bool {
    catalog.lookup(code).is_offered_in(semester.offering)
}

/// Whether the unit may legally sit in `semester` of `plan`: it runs in
/// that offering and its prerequisite is satisfied by the units placed
/// strictly earlier.
pub fn is_legal_in(catalog: &Catalog, code: &str, semester: Semester, plan: &StudyPlan) -> bool {
    is_offered(catalog, code, semester)
        && catalog
            .lookup(code)
            .prereq
            .is_satisfied_by(&plan.completed_before(semester), catalog)
}

/// [`is_legal_in`] plus the load cap: fewer than
/// [`MAX_UNITS_PER_SEMESTER`] units already occupy `semester`.
pub fn is_enrollable_in(
    catalog: &Catalog,
    code: &str,
    semester: Semester,
    plan: &StudyPlan,
) -> bool {
    plan.count_in(semester) < MAX_UNITS_PER_SEMESTER
        && is_legal_in(catalog, code, semester, plan)
}

/// Semester-unconstrained feasibility: would the unit's prerequisite hold
/// with every unit of `plan` completed? Used for dependency-edge detection,
/// where placement order is deliberately ignored.
pub fn is_enrollable(catalog: &Catalog, code: &str, plan: &StudyPlan) -> bool {
    catalog.lookup(code).prereq.is_satisfied_by(plan, catalog)
}

/// Whether every placement in `plan` is legal at its own semester given
/// the rest of the plan.
pub fn is_legal_plan(catalog: &Catalog, plan: &StudyPlan) -> bool {
    plan.units
        .iter()
        .all(|u| is_legal_in(catalog, &u.code, u.semester, plan))
}
