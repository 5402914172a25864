//! Backtracking placement search and iterative plan compression.
//!
//! # Algorithm
//!
//! `schedule_remaining` performs a depth-first assignment of units to
//! semesters: it commits to the first unit (in bound-plan order) with an
//! enrollable candidate and backtracks only over that unit's semester
//! choice. The search is a heuristic, not exhaustive — see
//! [`schedule_remaining`] for the consequences.
//!
//! `try_to_improve_schedule` wraps the search in an iterative-improvement
//! loop: each pull of the returned iterator tightens the target completion
//! semester, re-derives bounds, and re-solves, stopping at the first
//! failure or at the theoretical completion floor.
//!
//! # KPI
//!
//! `PlanKpi` computes quality metrics from a finished plan: completion
//! semester, credit totals, and per-semester loads.

mod backtrack;
mod improve;
mod kpi;

pub use backtrack::schedule_remaining;
pub use improve::{best_possible, try_to_improve_schedule, Improvements};
pub use kpi::PlanKpi;
