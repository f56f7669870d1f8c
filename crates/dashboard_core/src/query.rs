//! Filtering and ordering of the users table.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use shared::{
    domain::{SortDirection, SortField, UserRecord},
    error::DashboardError,
};

/// Search box contents plus the active column ordering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryState {
    pub search_query: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl QueryState {
    pub fn new(sort_field: SortField, sort_direction: SortDirection) -> Self {
        Self {
            search_query: String::new(),
            sort_field,
            sort_direction,
        }
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Header click on `field`: same column flips the direction, a new
    /// column starts ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Asc;
        }
    }

    /// Header click identified by column name. An unknown name leaves the
    /// state untouched.
    pub fn toggle_sort_by_name(&mut self, field: &str) -> Result<(), DashboardError> {
        let field = field.parse::<SortField>()?;
        self.toggle_sort(field);
        Ok(())
    }
}

fn matches_search(record: &UserRecord, needle_lower: &str) -> bool {
    needle_lower.is_empty()
        || record.name.to_lowercase().contains(needle_lower)
        || record.email.to_lowercase().contains(needle_lower)
}

fn compare(field: SortField, direction: SortDirection, a: &UserRecord, b: &UserRecord) -> Ordering {
    let ordering = field.key(a).cmp(field.key(b));
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Returns the records visible under `state`, leaving `records` untouched.
///
/// Ordering uses a stable sort with the comparator itself reversed for
/// descending order, so records with equal keys keep their input order in
/// both directions.
pub fn query(records: &[UserRecord], state: &QueryState) -> Vec<UserRecord> {
    let needle = state.search_query.to_lowercase();
    let mut visible: Vec<UserRecord> = records
        .iter()
        .filter(|record| matches_search(record, &needle))
        .cloned()
        .collect();
    visible.sort_by(|a, b| compare(state.sort_field, state.sort_direction, a, b));
    visible
}

/// Like [`query`] but with the sort column given by name, as it arrives from
/// a header or a command line.
pub fn query_with_field(
    records: &[UserRecord],
    search_query: &str,
    sort_field: &str,
    sort_direction: SortDirection,
) -> Result<Vec<UserRecord>, DashboardError> {
    let sort_field = sort_field.parse::<SortField>().inspect_err(|err| {
        tracing::warn!(error = %err, "rejected users query");
    })?;
    let state = QueryState {
        search_query: search_query.to_string(),
        sort_field,
        sort_direction,
    };
    Ok(query(records, &state))
}

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod tests;
