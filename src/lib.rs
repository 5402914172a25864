//! Study-plan scheduling for university degree progressions.
//!
//! Computes, for a student's set of chosen units of study, a legal
//! semester-by-semester schedule — respecting prerequisite chains,
//! credit-point thresholds, per-unit offering patterns, and a four-unit
//! load cap — and searches for shorter schedules by iteratively tightening
//! the target completion semester.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Offering`, `Semester`, `Prereq`,
//!   `UnitInfo`, `Catalog`, `StudyPlan`, `BoundPlan`
//! - **`enrollment`**: Legality and enrollability predicates
//! - **`bounds`**: Per-unit earliest/latest semester propagation from
//!   intra-plan dependency edges
//! - **`scheduler`**: Backtracking placement search, iterative plan
//!   compression, plan quality metrics
//! - **`validation`**: Input integrity checks (unknown codes, cyclic
//!   prerequisites, never-offered units)
//!
//! # Architecture
//!
//! The unit catalog is a read-only lookup constructed once by a loading
//! layer before scheduling begins; the core never mutates it. Plans are
//! plain values threaded through the search — each backtrack branch owns
//! its own snapshot. Infeasibility is an ordinary `None` or empty-sequence
//! result, never an error: an unsatisfiable schedule is a first-class
//! outcome, not a fault.
//!
//! # References
//!
//! - Russell & Norvig (2021), "Artificial Intelligence: A Modern Approach",
//!   Ch. 6: Constraint Satisfaction Problems
//! - Dechter (2003), "Constraint Processing"

pub mod bounds;
pub mod enrollment;
pub mod models;
pub mod scheduler;
pub mod validation;
