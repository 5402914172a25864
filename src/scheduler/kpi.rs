//! Plan quality metrics.
//!
//! Computes summary indicators from a study plan and its catalog.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | Latest semester carrying a unit |
//! | Semesters Used | Distinct semesters carrying at least one unit |
//! | Total Credit Points | Sum over all placed units |
//! | Max Load | Heaviest single-semester unit count |
//!
//! Reporting only: nothing here feeds back into the search, and plan
//! duration remains the only quantity the scheduler ever optimizes.

use std::collections::HashMap;

use crate::models::{Catalog, Semester, StudyPlan, MAX_UNITS_PER_SEMESTER};

/// Study-plan summary indicators.
#[derive(Debug, Clone)]
pub struct PlanKpi {
    /// Final semester of the plan. `None` for an empty plan.
    pub completion: Option<Semester>,
    /// Number of distinct semesters carrying at least one unit.
    pub semesters_used: usize,
    /// Total credit points across the plan.
    pub total_credit_points: u32,
    /// Units placed per semester.
    pub load_by_semester: HashMap<Semester, usize>,
    /// Heaviest single-semester load.
    pub max_load: usize,
}

impl PlanKpi {
    /// Computes KPIs from a plan and its catalog.
    pub fn calculate(plan: &StudyPlan, catalog: &Catalog) -> Self {
        let mut load_by_semester: HashMap<Semester, usize> = HashMap::new();
        for unit in &plan.units {
            *load_by_semester.entry(unit.semester).or_insert(0) += 1;
        }
        let max_load = load_by_semester.values().copied().max().unwrap_or(0);

        Self {
            completion: plan.last_semester(),
            semesters_used: load_by_semester.len(),
            total_credit_points: plan.total_credit_points(catalog),
            load_by_semester,
            max_load,
        }
    }

    /// Whether no semester exceeds the per-semester unit cap.
    pub fn within_load_cap(&self) -> bool {
        self.max_load <= MAX_UNITS_PER_SEMESTER
    }
}
