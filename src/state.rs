use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use space_missions::data::filter::{
    filtered_indices, DateFilterStatus, DateRange, MissionFilter, Selection,
};
use space_missions::data::model::Dataset;
use space_missions::data::stats::{
    missions_per_year, status_breakdown, summarize, top_company_success_rates, CompanyRate,
    FilterSummary, QuickReference,
};
use space_missions::data::table::{search_and_sort, TableQuery};

use crate::color::CompanyColors;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until a file is loaded). Shared read-only.
    pub dataset: Option<Arc<Dataset>>,

    /// Predicates chosen in the side panel.
    pub filter: MissionFilter,

    /// Date picker values. Each end only counts while its checkbox is on.
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub use_start: bool,
    pub use_end: bool,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,
    pub date_status: DateFilterStatus,

    /// Derived from `visible_indices`.
    pub summary: FilterSummary,
    pub yearly: BTreeMap<i32, usize>,
    pub statuses: Vec<(String, usize)>,
    pub company_rates: Vec<CompanyRate>,

    /// Table search/sort and the resulting row order.
    pub table: TableQuery,
    pub table_rows: Vec<usize>,

    /// Whole-dataset figures, computed once per load.
    pub reference: QuickReference,

    pub company_colors: CompanyColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest a newly loaded dataset, reset filters and recompute views.
    pub fn set_dataset(&mut self, dataset: Arc<Dataset>) {
        self.reference = QuickReference::compute(&dataset);
        self.company_colors = CompanyColors::new(&dataset.companies);
        self.table = TableQuery::default();
        self.dataset = Some(dataset);
        self.reset_filters();
        self.status_message = None;
    }

    /// Back to the full date range with every other predicate disabled.
    pub fn reset_filters(&mut self) {
        let Some(ds) = &self.dataset else {
            return;
        };
        self.filter = MissionFilter::full_range(ds);
        if let Some((lo, hi)) = ds.date_bounds {
            self.start_date = lo;
            self.end_date = hi;
        }
        self.use_start = true;
        self.use_end = true;
        self.refilter();
    }

    /// Copy the picker values into the filter and recompute.
    pub fn apply_date_inputs(&mut self) {
        self.filter.date_range = if !self.use_start && !self.use_end {
            None
        } else {
            Some(DateRange {
                start: self.use_start.then_some(self.start_date),
                end: self.use_end.then_some(self.end_date),
            })
        };
        self.refilter();
    }

    pub fn set_company(&mut self, selection: Selection) {
        self.filter.company = selection;
        self.refilter();
    }

    pub fn set_mission_status(&mut self, selection: Selection) {
        self.filter.mission_status = selection;
        self.refilter();
    }

    pub fn set_rocket_status(&mut self, selection: Selection) {
        self.filter.rocket_status = selection;
        self.refilter();
    }

    /// Recompute `visible_indices` and everything derived from it.
    pub fn refilter(&mut self) {
        let Some(ds) = &self.dataset else {
            return;
        };
        let outcome = filtered_indices(ds, &self.filter);
        if outcome.date_status == DateFilterStatus::Incomplete {
            log::debug!("date range incomplete, showing the full range");
        }
        self.summary = summarize(ds, &outcome.indices);
        self.yearly = missions_per_year(ds, &outcome.indices);
        self.statuses = status_breakdown(ds, &outcome.indices);
        self.company_rates = top_company_success_rates(ds, &outcome.indices);
        self.visible_indices = outcome.indices;
        self.date_status = outcome.date_status;
        self.refresh_table();
    }

    /// Re-run search and sort over the visible rows.
    pub fn refresh_table(&mut self) {
        if let Some(ds) = &self.dataset {
            self.table_rows = search_and_sort(ds, &self.visible_indices, &self.table);
        }
    }
}
