use chrono::NaiveDate;

use super::model::{Dataset, MissionRecord};

/// Sentinel label for "every company".
pub const ALL_COMPANIES: &str = "All Companies";
/// Sentinel label for "every mission status".
pub const ALL_STATUSES: &str = "All Statuses";
/// Sentinel label for "every rocket status".
pub const ALL_ROCKET_STATUSES: &str = "All";

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Equality predicate on one text column. `All` disables it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Interpret a choice-box label, where `sentinel` means "no filter".
    pub fn from_label(label: &str, sentinel: &str) -> Self {
        if label == sentinel {
            Selection::All
        } else {
            Selection::Only(label.to_string())
        }
    }

    /// Label to show for this selection.
    pub fn label<'a>(&'a self, sentinel: &'a str) -> &'a str {
        match self {
            Selection::All => sentinel,
            Selection::Only(v) => v,
        }
    }

    /// Exact, case-sensitive comparison.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(v) => v == value,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Selection::Only(_))
    }
}

/// Date range as picked by the user; either end may still be unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Both endpoints, if both are set.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.start?, self.end?))
    }
}

/// How the date predicate ended up being used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateFilterStatus {
    /// No date range requested.
    #[default]
    Disabled,
    /// Both endpoints were set and the range was applied.
    Applied,
    /// Only one endpoint was set; the full dataset range was used instead.
    Incomplete,
}

// ---------------------------------------------------------------------------
// Filter state
// ---------------------------------------------------------------------------

/// All predicates of the dashboard, combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MissionFilter {
    pub date_range: Option<DateRange>,
    pub company: Selection,
    pub mission_status: Selection,
    pub rocket_status: Selection,
}

impl MissionFilter {
    /// A filter spanning the whole dataset, with every predicate disabled
    /// except a date range covering all launches.
    pub fn full_range(dataset: &Dataset) -> Self {
        Self {
            date_range: dataset
                .date_bounds
                .map(|(lo, hi)| DateRange::between(lo, hi)),
            ..Self::default()
        }
    }

    /// Whether one record passes the non-date predicates.
    fn matches_columns(&self, rec: &MissionRecord) -> bool {
        self.company.matches(&rec.company)
            && self.mission_status.matches(rec.mission_status.as_str())
            && self.rocket_status.matches(&rec.rocket_status)
    }
}

/// Result of applying a [`MissionFilter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Positions of passing records, in dataset order.
    pub indices: Vec<usize>,
    pub date_status: DateFilterStatus,
}

/// Return indices of records that pass all active predicates.
///
/// * No date range → date predicate disabled
/// * Range with one endpoint missing → full dataset range, flagged `Incomplete`
/// * Complete range → inclusive at both ends; start after end selects nothing
pub fn filtered_indices(dataset: &Dataset, filter: &MissionFilter) -> FilterOutcome {
    let (bounds, date_status) = match filter.date_range {
        None => (None, DateFilterStatus::Disabled),
        Some(range) => match range.bounds() {
            Some(b) => (Some(b), DateFilterStatus::Applied),
            None => (None, DateFilterStatus::Incomplete),
        },
    };

    let indices = dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            if let Some((start, end)) = bounds {
                if rec.date < start || rec.date > end {
                    return false;
                }
            }
            filter.matches_columns(rec)
        })
        .map(|(i, _)| i)
        .collect();

    FilterOutcome {
        indices,
        date_status,
    }
}
