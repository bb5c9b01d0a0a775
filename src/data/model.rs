use std::collections::BTreeSet;
use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveTime};

// ---------------------------------------------------------------------------
// MissionStatus – outcome of a single launch
// ---------------------------------------------------------------------------

/// Outcome of a launch attempt.
///
/// The four canonical outcomes get their own variants; any other text found
/// in the source is preserved verbatim in `Other` so that it still shows up
/// in filters and the table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MissionStatus {
    Success,
    Failure,
    PartialFailure,
    PrelaunchFailure,
    Other(String),
}

impl MissionStatus {
    /// Exact, case-sensitive mapping from the source text.
    pub fn parse(s: &str) -> Self {
        match s {
            "Success" => MissionStatus::Success,
            "Failure" => MissionStatus::Failure,
            "Partial Failure" => MissionStatus::PartialFailure,
            "Prelaunch Failure" => MissionStatus::PrelaunchFailure,
            other => MissionStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MissionStatus::Success => "Success",
            MissionStatus::Failure => "Failure",
            MissionStatus::PartialFailure => "Partial Failure",
            MissionStatus::PrelaunchFailure => "Prelaunch Failure",
            MissionStatus::Other(s) => s,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MissionStatus::Success)
    }
}

impl fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MissionRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single launch attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionRecord {
    pub company: String,
    pub location: String,
    pub date: NaiveDate,
    /// Launch time of day, when the source has one. Display only.
    pub time: Option<NaiveTime>,
    pub rocket: String,
    pub mission: String,
    pub rocket_status: String,
    /// Cost estimate in millions of USD; `None` when missing or unparseable.
    pub price: Option<f64>,
    pub mission_status: MissionStatus,
}

impl MissionRecord {
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed filter choices.
///
/// Built once and then only read; share it as `Arc<Dataset>`.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All records, in source order.
    pub records: Vec<MissionRecord>,
    /// Sorted distinct company names.
    pub companies: BTreeSet<String>,
    /// Sorted distinct mission status strings (canonical and otherwise).
    pub mission_statuses: BTreeSet<String>,
    /// Sorted distinct rocket status strings.
    pub rocket_statuses: BTreeSet<String>,
    /// Earliest and latest launch date, `None` for an empty dataset.
    pub date_bounds: Option<(NaiveDate, NaiveDate)>,
}

impl Dataset {
    /// Build the filter indices from the loaded records.
    pub fn from_records(records: Vec<MissionRecord>) -> Self {
        let mut companies = BTreeSet::new();
        let mut mission_statuses = BTreeSet::new();
        let mut rocket_statuses = BTreeSet::new();
        let mut date_bounds: Option<(NaiveDate, NaiveDate)> = None;

        for rec in &records {
            companies.insert(rec.company.clone());
            mission_statuses.insert(rec.mission_status.as_str().to_string());
            rocket_statuses.insert(rec.rocket_status.clone());
            date_bounds = Some(match date_bounds {
                None => (rec.date, rec.date),
                Some((lo, hi)) => (lo.min(rec.date), hi.max(rec.date)),
            });
        }

        Dataset {
            records,
            companies,
            mission_statuses,
            rocket_statuses,
            date_bounds,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate the records at `indices`, in the order given. Indices past
    /// the end are skipped.
    pub fn select<'a>(
        &'a self,
        indices: &'a [usize],
    ) -> impl Iterator<Item = &'a MissionRecord> + 'a {
        indices.iter().filter_map(move |&i| self.records.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(company: &str, date: &str, status: &str) -> MissionRecord {
        MissionRecord {
            company: company.to_string(),
            location: "Site".to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            time: None,
            rocket: "R".to_string(),
            mission: "M".to_string(),
            rocket_status: "Active".to_string(),
            price: None,
            mission_status: MissionStatus::parse(status),
        }
    }

    #[test]
    fn status_parse_is_exact() {
        assert_eq!(MissionStatus::parse("Success"), MissionStatus::Success);
        assert_eq!(
            MissionStatus::parse("success"),
            MissionStatus::Other("success".to_string())
        );
        assert_eq!(
            MissionStatus::parse("Partial Failure"),
            MissionStatus::PartialFailure
        );
    }

    #[test]
    fn unknown_status_passes_through() {
        let status = MissionStatus::parse("Scrubbed");
        assert_eq!(status.as_str(), "Scrubbed");
        assert!(!status.is_success());
    }

    #[test]
    fn from_records_builds_choices_and_bounds() {
        let ds = Dataset::from_records(vec![
            record("B", "2020-03-01", "Success"),
            record("A", "1999-12-31", "Weird"),
            record("B", "2021-01-05", "Failure"),
        ]);

        assert_eq!(ds.len(), 3);
        assert_eq!(
            ds.companies.iter().cloned().collect::<Vec<_>>(),
            vec!["A".to_string(), "B".to_string()]
        );
        assert!(ds.mission_statuses.contains("Weird"));
        assert_eq!(
            ds.date_bounds,
            Some((
                NaiveDate::from_ymd_opt(1999, 12, 31).unwrap(),
                NaiveDate::from_ymd_opt(2021, 1, 5).unwrap()
            ))
        );
    }

    #[test]
    fn select_skips_out_of_range_indices() {
        let ds = Dataset::from_records(vec![
            record("A", "2020-01-01", "Success"),
            record("B", "2020-01-02", "Success"),
        ]);
        let picked: Vec<&str> = ds.select(&[1, 7, 0]).map(|r| r.company.as_str()).collect();
        assert_eq!(picked, vec!["B", "A"]);
    }

    #[test]
    fn empty_dataset_has_no_bounds() {
        let ds = Dataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.date_bounds, None);
    }
}
