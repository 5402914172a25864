//! Input validation for study-plan scheduling.
//!
//! Pre-flight integrity checks for the catalog-loading layer. The
//! scheduling core assumes a well-formed catalog and never runs these
//! checks itself: an unknown code panics at lookup, and a cyclic
//! prerequisite graph would recurse without bound in the bounds optimizer.
//! Running [`validate_catalog`] (and [`validate_plan`] for user-supplied
//! plans) before invoking the core turns both into reportable errors.
//!
//! Detects:
//! - Prerequisite references to codes absent from the catalog
//! - Circular prerequisite chains (DFS back-edge detection)
//! - Units that are never offered
//! - Plans with duplicate or unknown unit codes
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use std::collections::{HashMap, HashSet};

use crate::models::{Catalog, StudyPlan};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A prerequisite expression mentions a code not in the catalog.
    UnknownUnitReference,
    /// The prerequisite graph contains a cycle.
    CyclicPrerequisite,
    /// A unit has an empty `offered` set.
    NeverOffered,
    /// A plan places the same unit twice.
    DuplicateUnit,
    /// A plan places a unit the catalog does not know.
    UnknownUnit,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates catalog integrity.
///
/// Checks:
/// 1. Every code mentioned in a prerequisite expression exists in the catalog
/// 2. Every unit is offered in at least one offering
/// 3. The prerequisite graph is acyclic
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut errors = Vec::new();

    for code in catalog.codes() {
        let info = catalog.lookup(code);

        if info.offered.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NeverOffered,
                format!("Unit '{code}' is not offered in any semester"),
            ));
        }

        for mentioned in info.prereq.unit_codes() {
            if !catalog.contains(&mentioned) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownUnitReference,
                    format!("Unit '{code}' requires unknown unit '{mentioned}'"),
                ));
            }
        }
    }

    if let Some(cycle_err) = detect_cycles(catalog) {
        errors.push(cycle_err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a plan against a catalog.
///
/// Checks that every placed code exists in the catalog and that no unit
/// appears twice.
pub fn validate_plan(catalog: &Catalog, plan: &StudyPlan) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for unit in &plan.units {
        if !seen.insert(unit.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateUnit,
                format!("Unit '{}' appears more than once in the plan", unit.code),
            ));
        }
        if !catalog.contains(&unit.code) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownUnit,
                format!("Plan places unknown unit '{}'", unit.code),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the prerequisite graph using DFS.
///
/// # Algorithm
/// Topological sort via DFS. If a back-edge is found (visiting a node
/// currently in the recursion stack), a cycle exists.
fn detect_cycles(catalog: &Catalog) -> Option<ValidationError> {
    // Adjacency: unit code → codes its prerequisite mentions
    let mut adj: HashMap<String, Vec<String>> = HashMap::new();
    for code in catalog.codes() {
        adj.insert(code.to_string(), catalog.lookup(code).prereq.unit_codes());
    }

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for code in adj.keys() {
        if !visited.contains(code.as_str())
            && has_cycle_dfs(code, &adj, &mut visited, &mut in_stack)
        {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicPrerequisite,
                format!("Circular prerequisite detected involving unit '{code}'"),
            ));
        }
    }

    None
}

fn has_cycle_dfs<'a>(
    node: &'a str,
    adj: &'a HashMap<String, Vec<String>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(node) {
        for next in neighbors {
            if in_stack.contains(next.as_str()) {
                return true; // Back edge → cycle
            }
            if !visited.contains(next.as_str())
                && has_cycle_dfs(next, adj, visited, in_stack)
            {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Offering, Prereq, Semester, UnitInPlan, UnitInfo};

    fn offered_unit(prereq: Prereq) -> UnitInfo {
        UnitInfo::new("unit")
            .with_credit_points(6)
            .with_offered(vec![Offering::Semester1, Offering::Semester2])
            .with_prereq(prereq)
    }

    #[test]
    fn test_valid_catalog() {
        let catalog = Catalog::new()
            .with_unit("A", offered_unit(Prereq::None))
            .with_unit("B", offered_unit(Prereq::unit("A")))
            .with_unit(
                "C",
                offered_unit(Prereq::all_of(vec![
                    Prereq::unit("B"),
                    Prereq::credit_points(12),
                ])),
            );
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn test_unknown_prereq_reference() {
        let catalog = Catalog::new().with_unit("A", offered_unit(Prereq::unit("MISSING")));

        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownUnitReference));
    }

    #[test]
    fn test_never_offered() {
        let catalog = Catalog::new().with_unit(
            "A",
            UnitInfo::new("Ghost unit").with_credit_points(6), // no offerings
        );

        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NeverOffered));
    }

    #[test]
    fn test_cyclic_prerequisites() {
        // A → B → C → A
        let catalog = Catalog::new()
            .with_unit("A", offered_unit(Prereq::unit("C")))
            .with_unit("B", offered_unit(Prereq::unit("A")))
            .with_unit("C", offered_unit(Prereq::unit("B")));

        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::CyclicPrerequisite));
    }

    #[test]
    fn test_self_prerequisite_is_a_cycle() {
        let catalog = Catalog::new().with_unit("A", offered_unit(Prereq::unit("A")));

        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::CyclicPrerequisite));
    }

    #[test]
    fn test_chain_is_not_a_cycle() {
        let catalog = Catalog::new()
            .with_unit("A", offered_unit(Prereq::None))
            .with_unit("B", offered_unit(Prereq::unit("A")))
            .with_unit("C", offered_unit(Prereq::unit("B")));
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn test_valid_plan() {
        let catalog = Catalog::new()
            .with_unit("A", offered_unit(Prereq::None))
            .with_unit("B", offered_unit(Prereq::None));
        let plan = StudyPlan::new()
            .with_unit(UnitInPlan::new(
                "A",
                "core",
                Semester::new(2021, Offering::Semester1),
            ))
            .with_unit(UnitInPlan::new(
                "B",
                "core",
                Semester::new(2021, Offering::Semester2),
            ));
        assert!(validate_plan(&catalog, &plan).is_ok());
    }

    #[test]
    fn test_duplicate_unit_in_plan() {
        let catalog = Catalog::new().with_unit("A", offered_unit(Prereq::None));
        let plan = StudyPlan {
            units: vec![
                UnitInPlan::new("A", "core", Semester::new(2021, Offering::Semester1)),
                UnitInPlan::new("A", "core", Semester::new(2021, Offering::Semester2)),
            ],
        };

        let errors = validate_plan(&catalog, &plan).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateUnit));
    }

    #[test]
    fn test_unknown_unit_in_plan() {
        let catalog = Catalog::new().with_unit("A", offered_unit(Prereq::None));
        let plan = StudyPlan::new().with_unit(UnitInPlan::new(
            "GHOST",
            "core",
            Semester::new(2021, Offering::Semester1),
        ));

        let errors = validate_plan(&catalog, &plan).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownUnit));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let catalog = Catalog::new()
            .with_unit("A", UnitInfo::new("No offerings")) // never offered
            .with_unit("B", offered_unit(Prereq::unit("MISSING"))); // unknown ref

        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
