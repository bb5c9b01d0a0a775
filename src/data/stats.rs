//! Summary metrics and chart series derived from a filtered view.

use std::collections::{BTreeMap, HashMap, HashSet};

use super::model::Dataset;
use super::query::{QueryEngine, StatusHistogram};

/// Number of companies shown in the dashboard's ranking charts.
pub const CHART_TOP_COMPANIES: usize = 10;

/// Number of companies in the quick-reference list.
pub const REFERENCE_TOP_COMPANIES: i64 = 5;

/// Headline numbers for the filtered view.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterSummary {
    pub missions: usize,
    /// Percent of missions with status `Success`; `0.0` for an empty view.
    pub success_rate: f64,
    pub companies: usize,
    pub rockets: usize,
    pub locations: usize,
}

/// Compute the headline numbers over `indices`.
pub fn summarize(dataset: &Dataset, indices: &[usize]) -> FilterSummary {
    let mut companies = HashSet::new();
    let mut rockets = HashSet::new();
    let mut locations = HashSet::new();
    let mut missions = 0usize;
    let mut successes = 0usize;

    for rec in dataset.select(indices) {
        missions += 1;
        companies.insert(rec.company.as_str());
        rockets.insert(rec.rocket.as_str());
        locations.insert(rec.location.as_str());
        if rec.mission_status.is_success() {
            successes += 1;
        }
    }

    let success_rate = if missions == 0 {
        0.0
    } else {
        successes as f64 / missions as f64 * 100.0
    };

    FilterSummary {
        missions,
        success_rate,
        companies: companies.len(),
        rockets: rockets.len(),
        locations: locations.len(),
    }
}

/// Launches per calendar year, only years with at least one launch.
pub fn missions_per_year(dataset: &Dataset, indices: &[usize]) -> BTreeMap<i32, usize> {
    let mut per_year = BTreeMap::new();
    for rec in dataset.select(indices) {
        *per_year.entry(rec.year()).or_insert(0) += 1;
    }
    per_year
}

/// Count of every status present in the view (canonical or not), largest
/// first, ties by status text.
pub fn status_breakdown(dataset: &Dataset, indices: &[usize]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for rec in dataset.select(indices) {
        *counts.entry(rec.mission_status.as_str()).or_default() += 1;
    }
    let mut breakdown: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(status, count)| (status.to_string(), count))
        .collect();
    breakdown.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    breakdown
}

/// Success percentage of a company within the view.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyRate {
    pub company: String,
    pub missions: usize,
    pub success_rate: f64,
}

/// Success rates of the busiest companies in the view, in ranking order.
pub fn top_company_success_rates(dataset: &Dataset, indices: &[usize]) -> Vec<CompanyRate> {
    let engine = QueryEngine::over(dataset, indices);
    engine
        .top_companies_by_mission_count(CHART_TOP_COMPANIES as i64)
        .into_iter()
        .map(|(company, missions)| {
            let success_rate = engine.success_percentage(&company).unwrap_or(0.0);
            CompanyRate {
                company,
                missions,
                success_rate,
            }
        })
        .collect()
}

/// Whole-dataset figures shown beneath the table. They ignore the filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuickReference {
    pub most_used_rocket: String,
    pub status_counts: StatusHistogram,
    pub top_companies: Vec<(String, usize)>,
    /// `(decade start, average launches per year)` for the 1960s..2020s.
    pub decade_averages: Vec<(i32, f64)>,
}

impl QuickReference {
    pub fn compute(dataset: &Dataset) -> Self {
        let engine = QueryEngine::new(dataset);
        Self {
            most_used_rocket: engine.most_used_rocket(),
            status_counts: engine.mission_status_count(),
            top_companies: engine.top_companies_by_mission_count(REFERENCE_TOP_COMPANIES),
            decade_averages: (1960..2030)
                .step_by(10)
                .map(|start| (start, engine.average_missions_per_year(start, start + 9)))
                .collect(),
        }
    }
}
