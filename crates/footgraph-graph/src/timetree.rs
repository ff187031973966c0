//! Year → month → day containment tree over the match dates.
//!
//! Dates are decomposed once over the whole dataset so that each year,
//! month and day node exists exactly once no matter how many matches share
//! it (the "time-tree" pattern for temporal graphs).

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use footgraph_core::{FootgraphError, FootgraphResult};

/// Parse a `YYYY-MM-DD` date cell.
pub fn parse_date(raw: &str) -> FootgraphResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| FootgraphError::InvalidDate(raw.to_string()))
}

/// Distinct years, months and days of a set of dates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeTree {
    years: BTreeSet<i32>,
    months: BTreeSet<(i32, u32)>,
    days: BTreeSet<(i32, u32, u32)>,
}

impl TimeTree {
    /// Decompose date strings. Any unparseable date fails the whole build.
    pub fn from_dates<'a, I>(dates: I) -> FootgraphResult<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tree = TimeTree::default();
        for raw in dates {
            let date = parse_date(raw)?;
            tree.insert(date);
        }
        debug!(
            years = tree.years.len(),
            months = tree.months.len(),
            days = tree.days.len(),
            "Built time tree"
        );
        Ok(tree)
    }

    pub fn insert(&mut self, date: NaiveDate) {
        let (year, month, day) = (date.year(), date.month(), date.day());
        self.years.insert(year);
        self.months.insert((year, month));
        self.days.insert((year, month, day));
    }

    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.iter().copied()
    }

    pub fn months(&self) -> impl Iterator<Item = (i32, u32)> + '_ {
        self.months.iter().copied()
    }

    pub fn days(&self) -> impl Iterator<Item = (i32, u32, u32)> + '_ {
        self.days.iter().copied()
    }

    /// Total number of temporal nodes.
    pub fn node_count(&self) -> usize {
        self.years.len() + self.months.len() + self.days.len()
    }
}
