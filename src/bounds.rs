//! Per-unit semester bound propagation.
//!
//! Given a candidate plan and a `[first, last]` semester window, derives
//! for each unit the set of semesters in which it could legally be placed.
//! Bounds follow the dependency edges actually present inside the plan:
//! a prerequisite pushes its dependents later, a dependent pulls its
//! prerequisites earlier, and offering patterns snap both directions to
//! semesters the unit actually runs in.
//!
//! The earliest/latest recursion is unmemoized; depth is bounded by the
//! prerequisite-chain length. A cyclic prerequisite graph would recurse
//! without bound — acyclicity is a precondition on the catalog, checked
//! upstream by [`crate::validation`], never here.

use crate::enrollment::is_enrollable;
use crate::models::{
    semester_range, BoundPlan, Catalog, PlannedUnit, Semester, StudyPlan,
};

/// Dependency edges between units of one candidate plan.
///
/// An edge `(p, d)` records that removing `p` from the plan would leave
/// `d` unenrollable: `p` is load-bearing for `d`, not a redundant
/// alternative inside an `Or` group.
#[derive(Debug, Clone, Default)]
pub struct PlanDependencies {
    edges: Vec<(String, String)>,
}

impl PlanDependencies {
    /// Prerequisites with an edge into `code`.
    pub fn prerequisites_of<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a str> {
        self.edges
            .iter()
            .filter(move |(_, d)| d == code)
            .map(|(p, _)| p.as_str())
    }

    /// Dependents with an edge out of `code`.
    pub fn dependents_of<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a str> {
        self.edges
            .iter()
            .filter(move |(p, _)| p == code)
            .map(|(_, d)| d.as_str())
    }

    /// Whether the edge `(prereq, dependent)` is present.
    pub fn contains(&self, prereq: &str, dependent: &str) -> bool {
        self.edges
            .iter()
            .any(|(p, d)| p == prereq && d == dependent)
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether there are no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Extracts the dependency edges present inside `plan`.
///
/// For each unit and each code its prerequisite expression mentions that is
/// also in the plan, the edge exists iff removing that code breaks the
/// unit's semester-unconstrained enrollability. An `Or` group whose other
/// alternative is still in the plan therefore contributes no edge.
pub fn dependencies_within_plan(catalog: &Catalog, plan: &StudyPlan) -> PlanDependencies {
    let mut edges = Vec::new();
    for unit in &plan.units {
        for mentioned in catalog.lookup(&unit.code).prereq.unit_codes() {
            if mentioned == unit.code || !plan.contains_code(&mentioned) {
                continue;
            }
            if !is_enrollable(catalog, &unit.code, &plan.without(&mentioned)) {
                edges.push((mentioned, unit.code.clone()));
            }
        }
    }
    PlanDependencies { edges }
}

/// First semester at or after `from` in which the unit runs.
///
/// Requires a non-empty `offered` set; a never-offered unit would step
/// forever.
pub fn first_offering_on_or_after(catalog: &Catalog, code: &str, from: Semester) -> Semester {
    let info = catalog.lookup(code);
    let mut semester = from;
    while !info.is_offered_in(semester.offering) {
        semester = semester.successor();
    }
    semester
}

/// First semester at or before `from` in which the unit runs.
///
/// Requires a non-empty `offered` set.
pub fn first_offering_on_or_before(catalog: &Catalog, code: &str, from: Semester) -> Semester {
    let info = catalog.lookup(code);
    let mut semester = from;
    while !info.is_offered_in(semester.offering) {
        semester = semester.predecessor();
    }
    semester
}

/// Earliest semester the unit could occupy within the plan.
///
/// Without incoming edges this is the unit's first offering at or after
/// `first`. Otherwise every load-bearing prerequisite chain must finish
/// first: the result is the maximum over prerequisites of the unit's first
/// offering after that prerequisite's own earliest semester.
pub fn earliest_semester(
    catalog: &Catalog,
    deps: &PlanDependencies,
    code: &str,
    first: Semester,
) -> Semester {
    deps.prerequisites_of(code)
        .map(|p| {
            let after_chain = earliest_semester(catalog, deps, p, first).successor();
            first_offering_on_or_after(catalog, code, after_chain)
        })
        .max()
        .unwrap_or_else(|| first_offering_on_or_after(catalog, code, first))
}

/// Latest semester the unit could occupy within the plan.
///
/// Symmetric to [`earliest_semester`]: without outgoing edges this is the
/// unit's last offering at or before `last`; otherwise the unit must leave
/// room before its fastest-deadline dependent, so the result is the
/// minimum over dependents of the unit's last offering before that
/// dependent's own latest semester.
pub fn latest_semester(
    catalog: &Catalog,
    deps: &PlanDependencies,
    code: &str,
    last: Semester,
) -> Semester {
    deps.dependents_of(code)
        .map(|d| {
            let before_dependent = latest_semester(catalog, deps, d, last).predecessor();
            first_offering_on_or_before(catalog, code, before_dependent)
        })
        .min()
        .unwrap_or_else(|| first_offering_on_or_before(catalog, code, last))
}

/// Derives the candidate semesters of every unit in `plan` over the
/// inclusive window `[first, last]`.
///
/// Each unit's `[earliest, latest]` window is intersected with the
/// semesters the unit is actually offered in. A unit whose window closes
/// (earliest past latest) gets an empty candidate list, which
/// [`BoundPlan::all_feasible`] reports as infeasible.
pub fn bound_units_in_plan(
    catalog: &Catalog,
    plan: &StudyPlan,
    first: Semester,
    last: Semester,
) -> BoundPlan {
    let deps = dependencies_within_plan(catalog, plan);
    let mut bound = BoundPlan::new();
    for unit in &plan.units {
        let info = catalog.lookup(&unit.code);
        let earliest = earliest_semester(catalog, &deps, &unit.code, first);
        let latest = latest_semester(catalog, &deps, &unit.code, last);
        bound.add(PlannedUnit {
            code: unit.code.clone(),
            study_area: unit.study_area.clone(),
            possible_semesters: semester_range(earliest, latest)
                .filter(|s| info.is_offered_in(s.offering))
                .collect(),
        });
    }
    bound
}
