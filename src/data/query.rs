//! The eight aggregation queries.
//!
//! Every operation is total: bad or empty input yields `0`, `0.0` or an
//! empty collection instead of an error, so callers can probe freely.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::input::parse_date;
use super::model::{Dataset, MissionRecord, MissionStatus};

/// Decimal places kept by [`QueryEngine::success_rate`] and
/// [`QueryEngine::average_missions_per_year`].
pub const RATE_DECIMALS: i32 = 2;

/// Round to `decimals` places using the exact binary value, ties to even.
///
/// `1.125` becomes `1.12`, while `0.375` becomes `0.38`.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let prec = usize::try_from(decimals).unwrap_or(0);
    format!("{value:.prec$}").parse().unwrap_or(value)
}

// ---------------------------------------------------------------------------
// StatusHistogram
// ---------------------------------------------------------------------------

/// Launch count per canonical outcome. Non-canonical statuses are not
/// counted here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusHistogram {
    #[serde(rename = "Success")]
    pub success: usize,
    #[serde(rename = "Failure")]
    pub failure: usize,
    #[serde(rename = "Partial Failure")]
    pub partial_failure: usize,
    #[serde(rename = "Prelaunch Failure")]
    pub prelaunch_failure: usize,
}

impl StatusHistogram {
    /// Count for a status label; `None` for non-canonical labels.
    pub fn get(&self, status: &str) -> Option<usize> {
        match MissionStatus::parse(status) {
            MissionStatus::Success => Some(self.success),
            MissionStatus::Failure => Some(self.failure),
            MissionStatus::PartialFailure => Some(self.partial_failure),
            MissionStatus::PrelaunchFailure => Some(self.prelaunch_failure),
            MissionStatus::Other(_) => None,
        }
    }

    /// `(label, count)` pairs in canonical order.
    pub fn entries(&self) -> [(&'static str, usize); 4] {
        [
            ("Success", self.success),
            ("Failure", self.failure),
            ("Partial Failure", self.partial_failure),
            ("Prelaunch Failure", self.prelaunch_failure),
        ]
    }

    pub fn total(&self) -> usize {
        self.success + self.failure + self.partial_failure + self.prelaunch_failure
    }
}

// ---------------------------------------------------------------------------
// QueryEngine
// ---------------------------------------------------------------------------

/// Read-only query front end over a dataset, or over a filtered subset of
/// it given as record positions.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    dataset: &'a Dataset,
    scope: Option<&'a [usize]>,
}

impl<'a> QueryEngine<'a> {
    /// Query the whole dataset.
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            scope: None,
        }
    }

    /// Query only the records at `indices` (e.g. the output of the filter).
    pub fn over(dataset: &'a Dataset, indices: &'a [usize]) -> Self {
        Self {
            dataset,
            scope: Some(indices),
        }
    }

    fn records(&self) -> Box<dyn Iterator<Item = &'a MissionRecord> + 'a> {
        match self.scope {
            None => Box::new(self.dataset.records.iter()),
            Some(indices) => Box::new(self.dataset.select(indices)),
        }
    }

    /// Number of missions flown by `company` (exact, case-sensitive match).
    pub fn mission_count_by_company(&self, company: &str) -> usize {
        if company.is_empty() {
            return 0;
        }
        self.records().filter(|r| r.company == company).count()
    }

    /// Unrounded success percentage of `company`, `None` when it has no
    /// missions in scope.
    pub fn success_percentage(&self, company: &str) -> Option<f64> {
        if company.is_empty() {
            return None;
        }
        let (total, successes) = self
            .records()
            .filter(|r| r.company == company)
            .fold((0usize, 0usize), |(t, s), r| {
                (t + 1, s + usize::from(r.mission_status.is_success()))
            });
        if total == 0 {
            return None;
        }
        Some(successes as f64 / total as f64 * 100.0)
    }

    /// Percentage of `company`'s missions with status `Success`, rounded to
    /// [`RATE_DECIMALS`] places. `0.0` when the company has no missions.
    pub fn success_rate(&self, company: &str) -> f64 {
        self.success_percentage(company)
            .map(|pct| round_to(pct, RATE_DECIMALS))
            .unwrap_or(0.0)
    }

    /// Mission names launched within `[start, end]` (inclusive), oldest
    /// first. Launches on the same day keep their dataset order.
    pub fn missions_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<String> {
        if start > end {
            return Vec::new();
        }
        let mut hits: Vec<&MissionRecord> = self
            .records()
            .filter(|r| r.date >= start && r.date <= end)
            .collect();
        hits.sort_by_key(|r| r.date);
        hits.into_iter().map(|r| r.mission.clone()).collect()
    }

    /// Textual variant of [`Self::missions_by_date_range`]; unparseable
    /// dates give an empty list.
    pub fn missions_by_date_range_str(&self, start: &str, end: &str) -> Vec<String> {
        match (parse_date(start), parse_date(end)) {
            (Ok(start), Ok(end)) => self.missions_by_date_range(start, end),
            _ => Vec::new(),
        }
    }

    /// Mission count per company, most active first; equal counts are
    /// ordered by company name.
    pub fn company_ranking(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for r in self.records() {
            *counts.entry(r.company.as_str()).or_default() += 1;
        }
        let mut ranking: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(company, count)| (company.to_string(), count))
            .collect();
        ranking.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranking
    }

    /// The `n` companies with the most missions. `n <= 0` gives nothing.
    pub fn top_companies_by_mission_count(&self, n: i64) -> Vec<(String, usize)> {
        if n <= 0 {
            return Vec::new();
        }
        let mut ranking = self.company_ranking();
        ranking.truncate(usize::try_from(n).unwrap_or(usize::MAX));
        ranking
    }

    /// Launch count for each of the four canonical outcomes.
    pub fn mission_status_count(&self) -> StatusHistogram {
        let mut histogram = StatusHistogram::default();
        for r in self.records() {
            match r.mission_status {
                MissionStatus::Success => histogram.success += 1,
                MissionStatus::Failure => histogram.failure += 1,
                MissionStatus::PartialFailure => histogram.partial_failure += 1,
                MissionStatus::PrelaunchFailure => histogram.prelaunch_failure += 1,
                MissionStatus::Other(_) => {}
            }
        }
        histogram
    }

    /// Number of launches in calendar year `year`.
    pub fn missions_by_year(&self, year: i32) -> usize {
        self.records().filter(|r| r.date.year() == year).count()
    }

    /// Rocket with the most launches; ties go to the alphabetically first
    /// name. Empty string when there are no records.
    pub fn most_used_rocket(&self) -> String {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for r in self.records() {
            *counts.entry(r.rocket.as_str()).or_default() += 1;
        }
        counts
            .into_iter()
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(rocket, _)| rocket.to_string())
            .unwrap_or_default()
    }

    /// Launches in `[start_year, end_year]` divided by the number of years
    /// in that span, including years without launches. `0.0` when
    /// `start_year > end_year`.
    pub fn average_missions_per_year(&self, start_year: i32, end_year: i32) -> f64 {
        if start_year > end_year {
            return 0.0;
        }
        let span = i64::from(end_year) - i64::from(start_year) + 1;
        let total = self
            .records()
            .filter(|r| (start_year..=end_year).contains(&r.date.year()))
            .count();
        round_to(total as f64 / span as f64, RATE_DECIMALS)
    }
}
