//! Unit catalog entries and the catalog lookup table.
//!
//! A [`Catalog`] maps unit codes to their [`UnitInfo`] entries. It is built
//! once by the loading layer before scheduling begins and is read-only
//! thereafter; the scheduling core looks units up but never mutates them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Offering, Prereq};

/// A catalog entry for one unit of study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitInfo {
    /// Human-readable unit title.
    pub title: String,
    /// Credit points awarded on completion.
    pub credit_points: u32,
    /// Offerings in which the unit runs. Non-empty in well-formed data.
    pub offered: Vec<Offering>,
    /// Enrollment prerequisite.
    pub prereq: Prereq,
    /// Prerequisite text as published in the handbook. Display only;
    /// never evaluated.
    pub prereq_text: String,
}

impl UnitInfo {
    /// Creates a unit entry with the given title and no constraints.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            credit_points: 0,
            offered: Vec::new(),
            prereq: Prereq::None,
            prereq_text: String::new(),
        }
    }

    /// Sets the credit points.
    pub fn with_credit_points(mut self, credit_points: u32) -> Self {
        self.credit_points = credit_points;
        self
    }

    /// Sets the offerings the unit runs in.
    pub fn with_offered(mut self, offered: Vec<Offering>) -> Self {
        self.offered = offered;
        self
    }

    /// Marks the unit as running in every offering.
    pub fn offered_every_semester(mut self) -> Self {
        self.offered = Offering::ALL.to_vec();
        self
    }

    /// Sets the enrollment prerequisite.
    pub fn with_prereq(mut self, prereq: Prereq) -> Self {
        self.prereq = prereq;
        self
    }

    /// Sets the published prerequisite text.
    pub fn with_prereq_text(mut self, text: impl Into<String>) -> Self {
        self.prereq_text = text.into();
        self
    }

    /// Whether the unit runs in the given offering.
    pub fn is_offered_in(&self, offering: Offering) -> bool {
        self.offered.contains(&offering)
    }
}

/// Read-only lookup table of unit catalog entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    units: HashMap<String, UnitInfo>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a unit entry.
    pub fn add(&mut self, code: impl Into<String>, info: UnitInfo) {
        self.units.insert(code.into(), info);
    }

    /// Builder: adds a unit entry and returns self.
    pub fn with_unit(mut self, code: impl Into<String>, info: UnitInfo) -> Self {
        self.add(code, info);
        self
    }

    /// Looks up a unit entry.
    ///
    /// # Panics
    ///
    /// Panics if `code` is not in the catalog. Callers must only pass codes
    /// known to exist; an unknown code is a fatal input error, not a
    /// recoverable condition. Use [`Catalog::get`] where absence is a
    /// legitimate answer.
    pub fn lookup(&self, code: &str) -> &UnitInfo {
        self.units
            .get(code)
            .unwrap_or_else(|| panic!("unknown unit code: {code}"))
    }

    /// Looks up a unit entry, returning `None` when absent.
    pub fn get(&self, code: &str) -> Option<&UnitInfo> {
        self.units.get(code)
    }

    /// Whether the catalog contains the code.
    pub fn contains(&self, code: &str) -> bool {
        self.units.contains_key(code)
    }

    /// All unit codes in the catalog.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.units.keys().map(String::as_str)
    }

    /// Number of units in the catalog.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
