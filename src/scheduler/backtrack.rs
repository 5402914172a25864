//! Backtracking placement of bound units.
//!
//! # Algorithm
//!
//! 1. If no units remain, the accumulated placements are the answer.
//! 2. Select the first unit (in bound-plan order) with at least one
//!    candidate semester that is enrollable against the placements so far.
//!    No such unit means final failure.
//! 3. Try that unit's enrollable candidates in ascending order: place,
//!    remove from the remainder, recurse. The first recursive success
//!    wins; if every candidate fails, the call fails.
//!
//! Unit *selection* is never backtracked — only the semester choice of the
//! selected unit is retried. The search is therefore a heuristic: for some
//! catalogs with interacting `Or` prerequisites it reports infeasibility
//! where an exhaustive search over selection order would find a plan.
//! Callers rely on this exact behavior; treat any change to it as a
//! behavior change, not a fix.

use crate::enrollment::is_enrollable_in;
use crate::models::{BoundPlan, Catalog, Semester, StudyPlan, UnitInPlan};

/// Places every unit of `remaining` into a semester, extending `placed`.
///
/// Returns the completed plan, or `None` when no legal completion exists
/// under the search's selection heuristic. Infeasibility is an expected
/// outcome, not an error.
pub fn schedule_remaining(
    catalog: &Catalog,
    remaining: &BoundPlan,
    placed: &StudyPlan,
) -> Option<StudyPlan> {
    if remaining.is_empty() {
        return Some(placed.clone());
    }

    let (unit, candidates) = remaining.units.iter().find_map(|unit| {
        let candidates: Vec<Semester> = unit
            .possible_semesters
            .iter()
            .copied()
            .filter(|&s| is_enrollable_in(catalog, &unit.code, s, placed))
            .collect();
        if candidates.is_empty() {
            None
        } else {
            Some((unit, candidates))
        }
    })?;

    let rest = remaining.without(&unit.code);
    for semester in candidates {
        let mut attempt = placed.clone();
        attempt.add(UnitInPlan::new(
            unit.code.clone(),
            unit.study_area.clone(),
            semester,
        ));
        if let Some(complete) = schedule_remaining(catalog, &rest, &attempt) {
            return Some(complete);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::bound_units_in_plan;
    use crate::enrollment::is_legal_plan;
    use crate::models::{Offering, PlannedUnit, Prereq, UnitInfo};

    fn sem(year: i32, offering: Offering) -> Semester {
        Semester::new(year, offering)
    }

    fn independent_unit() -> UnitInfo {
        UnitInfo::new("unit")
            .with_credit_points(6)
            .offered_every_semester()
    }

    fn bound_unit(code: &str, semesters: Vec<Semester>) -> PlannedUnit {
        PlannedUnit {
            code: code.into(),
            study_area: "core".into(),
            possible_semesters: semesters,
        }
    }

    #[test]
    fn test_empty_remaining_returns_placed() {
        let catalog = Catalog::new();
        let placed = StudyPlan::new().with_unit(UnitInPlan::new(
            "A",
            "core",
            sem(2021, Offering::Semester1),
        ));
        let result = schedule_remaining(&catalog, &BoundPlan::new(), &placed).unwrap();
        assert_eq!(result, placed);
    }

    #[test]
    fn test_single_unit_takes_earliest_candidate() {
        let catalog = Catalog::new().with_unit("A", independent_unit());
        let mut bound = BoundPlan::new();
        bound.add(bound_unit(
            "A",
            vec![sem(2021, Offering::Semester1), sem(2021, Offering::Semester2)],
        ));

        let plan = schedule_remaining(&catalog, &bound, &StudyPlan::new()).unwrap();
        assert_eq!(plan.unit("A").unwrap().semester, sem(2021, Offering::Semester1));
    }

    #[test]
    fn test_five_units_split_four_one() {
        let mut catalog = Catalog::new();
        let mut bound = BoundPlan::new();
        let window = vec![sem(2021, Offering::Semester1), sem(2021, Offering::Semester2)];
        for code in ["A", "B", "C", "D", "E"] {
            catalog.add(code, independent_unit());
            bound.add(bound_unit(code, window.clone()));
        }

        let plan = schedule_remaining(&catalog, &bound, &StudyPlan::new()).unwrap();
        assert_eq!(plan.count_in(sem(2021, Offering::Semester1)), 4);
        assert_eq!(plan.count_in(sem(2021, Offering::Semester2)), 1);
        assert_eq!(plan.len(), 5);
    }

    #[test]
    fn test_prereq_chain_is_ordered() {
        let catalog = Catalog::new()
            .with_unit("A", independent_unit())
            .with_unit("B", independent_unit().with_prereq(Prereq::unit("A")));
        let plan_in = StudyPlan::new()
            .with_unit(UnitInPlan::new("A", "core", sem(2021, Offering::Semester1)))
            .with_unit(UnitInPlan::new("B", "core", sem(2022, Offering::Semester1)));
        let bound = bound_units_in_plan(
            &catalog,
            &plan_in,
            sem(2021, Offering::Semester1),
            sem(2021, Offering::Semester2),
        );

        let plan = schedule_remaining(&catalog, &bound, &StudyPlan::new()).unwrap();
        assert!(is_legal_plan(&catalog, &plan));
        assert!(plan.unit("A").unwrap().semester < plan.unit("B").unwrap().semester);
    }

    #[test]
    fn test_backtracks_over_semester_choice() {
        // D's only candidate is Semester1; three fillers could grab all of
        // Semester1's remaining room unless placement backtracks.
        let mut catalog = Catalog::new();
        for code in ["A", "B", "C", "D", "E"] {
            catalog.add(code, independent_unit());
        }
        let s1 = sem(2021, Offering::Semester1);
        let s2 = sem(2021, Offering::Semester2);

        let mut bound = BoundPlan::new();
        for code in ["A", "B", "C", "E"] {
            bound.add(bound_unit(code, vec![s1, s2]));
        }
        bound.add(bound_unit("D", vec![s1]));

        let plan = schedule_remaining(&catalog, &bound, &StudyPlan::new()).unwrap();
        assert_eq!(plan.unit("D").unwrap().semester, s1);
        assert_eq!(plan.count_in(s1), 4);
        assert_eq!(plan.count_in(s2), 1);
    }

    #[test]
    fn test_infeasible_when_no_unit_selectable() {
        // B's prerequisite can never be met: A is not in the bound plan.
        let catalog = Catalog::new()
            .with_unit("A", independent_unit())
            .with_unit("B", independent_unit().with_prereq(Prereq::unit("A")));
        let mut bound = BoundPlan::new();
        bound.add(bound_unit("B", vec![sem(2021, Offering::Semester1)]));

        assert!(schedule_remaining(&catalog, &bound, &StudyPlan::new()).is_none());
    }

    #[test]
    fn test_infeasible_when_capacity_exhausted() {
        // Five units forced into one semester under the four-unit cap.
        let mut catalog = Catalog::new();
        let mut bound = BoundPlan::new();
        for code in ["A", "B", "C", "D", "E"] {
            catalog.add(code, independent_unit());
            bound.add(bound_unit(code, vec![sem(2021, Offering::Semester1)]));
        }

        assert!(schedule_remaining(&catalog, &bound, &StudyPlan::new()).is_none());
    }

    #[test]
    fn test_result_is_legal() {
        let catalog = Catalog::new()
            .with_unit("A", independent_unit())
            .with_unit("B", independent_unit().with_prereq(Prereq::unit("A")))
            .with_unit("C", independent_unit().with_prereq(Prereq::credit_points(6)));
        let s1 = sem(2021, Offering::Semester1);
        let s2 = sem(2021, Offering::Semester2);
        let summer = sem(2021, Offering::Summer);

        let mut bound = BoundPlan::new();
        bound.add(bound_unit("A", vec![s1, s2, summer]));
        bound.add(bound_unit("B", vec![s1, s2, summer]));
        bound.add(bound_unit("C", vec![s1, s2, summer]));

        let plan = schedule_remaining(&catalog, &bound, &StudyPlan::new()).unwrap();
        assert!(is_legal_plan(&catalog, &plan));
        assert_eq!(plan.len(), 3);
    }
}
