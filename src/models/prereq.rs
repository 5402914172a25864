//! Prerequisite expressions.
//!
//! A prerequisite is a recursive boolean/credit-threshold formula over
//! previously completed units. `And`/`Or` groups nest to arbitrary depth;
//! evaluation and code extraction are exhaustive structural recursions.

use serde::{Deserialize, Serialize};

use super::{Catalog, StudyPlan};

/// An enrollment prerequisite formula.
///
/// Satisfaction is evaluated against a set of completed units — callers
/// pre-filter to the units completed strictly before the semester under
/// consideration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prereq {
    /// The named unit must have been completed.
    Unit(String),
    /// Every sub-expression must hold. An empty group is trivially satisfied.
    And(Vec<Prereq>),
    /// At least one sub-expression must hold. An empty group is unsatisfiable.
    Or(Vec<Prereq>),
    /// Total completed credit points must reach the threshold.
    CreditPoints(u32),
    /// No prerequisite.
    None,
}

impl Prereq {
    /// Creates a single-unit prerequisite.
    pub fn unit(code: impl Into<String>) -> Self {
        Self::Unit(code.into())
    }

    /// Creates a conjunction.
    pub fn all_of(parts: Vec<Prereq>) -> Self {
        Self::And(parts)
    }

    /// Creates a disjunction.
    pub fn any_of(parts: Vec<Prereq>) -> Self {
        Self::Or(parts)
    }

    /// Creates a credit-point threshold.
    pub fn credit_points(points: u32) -> Self {
        Self::CreditPoints(points)
    }

    /// Evaluates the formula against a set of completed units.
    ///
    /// `completed` must already be filtered to the units regarded as
    /// completed; no date filtering happens here. Credit points are summed
    /// from the catalog entries of the completed units.
    pub fn is_satisfied_by(&self, completed: &StudyPlan, catalog: &Catalog) -> bool {
        match self {
            Prereq::Unit(code) => completed.contains_code(code),
            Prereq::And(parts) => parts.iter().all(|p| p.is_satisfied_by(completed, catalog)),
            Prereq::Or(parts) => parts.iter().any(|p| p.is_satisfied_by(completed, catalog)),
            Prereq::CreditPoints(points) => completed.total_credit_points(catalog) >= *points,
            Prereq::None => true,
        }
    }

    /// Every unit code mentioned anywhere in the formula, without duplicates,
    /// in first-mention order.
    pub fn unit_codes(&self) -> Vec<String> {
        let mut codes = Vec::new();
        self.collect_unit_codes(&mut codes);
        codes
    }

    fn collect_unit_codes(&self, out: &mut Vec<String>) {
        match self {
            Prereq::Unit(code) => {
                if !out.iter().any(|c| c == code) {
                    out.push(code.clone());
                }
            }
            Prereq::And(parts) | Prereq::Or(parts) => {
                for part in parts {
                    part.collect_unit_codes(out);
                }
            }
            Prereq::CreditPoints(_) | Prereq::None => {}
        }
    }
}
