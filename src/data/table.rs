//! Search and sort stage for the mission table.

use std::cmp::Ordering;
use std::fmt;

use super::model::{Dataset, MissionRecord};

/// Column the table can be sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Date,
    Company,
    Mission,
    Rocket,
    MissionStatus,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Date,
        SortField::Company,
        SortField::Mission,
        SortField::Rocket,
        SortField::MissionStatus,
    ];

    fn compare(self, a: &MissionRecord, b: &MissionRecord) -> Ordering {
        match self {
            SortField::Date => a.date.cmp(&b.date),
            SortField::Company => a.company.cmp(&b.company),
            SortField::Mission => a.mission.cmp(&b.mission),
            SortField::Rocket => a.rocket.cmp(&b.rocket),
            SortField::MissionStatus => a.mission_status.as_str().cmp(b.mission_status.as_str()),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortField::Date => "Date",
            SortField::Company => "Company",
            SortField::Mission => "Mission",
            SortField::Rocket => "Rocket",
            SortField::MissionStatus => "MissionStatus",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Descending, SortOrder::Ascending];

    /// Label used in the dashboard's order picker.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Descending => "Newest First",
            SortOrder::Ascending => "Oldest First",
        }
    }
}

/// Parameters of the table stage. The default shows newest launches first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableQuery {
    pub search: String,
    pub sort_by: SortField,
    pub order: SortOrder,
}

/// Case-insensitive substring match against mission, company and rocket.
/// `needle` must already be lowercase.
fn matches_search(rec: &MissionRecord, needle: &str) -> bool {
    [&rec.mission, &rec.company, &rec.rocket]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Narrow `indices` by the search term, then sort them.
///
/// A blank term keeps every row. The sort is stable in both directions, so
/// rows with equal keys keep their relative input order.
pub fn search_and_sort(dataset: &Dataset, indices: &[usize], query: &TableQuery) -> Vec<usize> {
    let needle = query.search.trim().to_lowercase();

    let mut rows: Vec<(usize, &MissionRecord)> = indices
        .iter()
        .filter_map(|&i| dataset.records.get(i).map(|rec| (i, rec)))
        .filter(|(_, rec)| needle.is_empty() || matches_search(rec, &needle))
        .collect();

    let field = query.sort_by;
    rows.sort_by(|(_, ra), (_, rb)| match query.order {
        SortOrder::Ascending => field.compare(ra, rb),
        SortOrder::Descending => field.compare(rb, ra),
    });
    rows.into_iter().map(|(i, _)| i).collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::data::model::MissionStatus;

    fn record(company: &str, mission: &str, rocket: &str, date: &str) -> MissionRecord {
        MissionRecord {
            company: company.to_string(),
            location: "Pad".to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            time: None,
            rocket: rocket.to_string(),
            mission: mission.to_string(),
            rocket_status: "Active".to_string(),
            price: None,
            mission_status: MissionStatus::Success,
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            record("SpaceX", "Starlink V1 L9", "Falcon 9 Block 5", "2020-08-07"),
            record("NASA", "Apollo 11", "Saturn V", "1969-07-16"),
            record("ULA", "Mars 2020", "Atlas V 541", "2020-07-30"),
            record("SpaceX", "Crew-1", "Falcon 9 Block 5", "2020-08-07"),
        ])
    }

    #[test]
    fn search_is_case_insensitive_over_three_fields() {
        let ds = dataset();
        let all = [0, 1, 2, 3];
        let by = |term: &str| {
            let q = TableQuery {
                search: term.to_string(),
                sort_by: SortField::Date,
                order: SortOrder::Ascending,
            };
            search_and_sort(&ds, &all, &q)
        };
        assert_eq!(by("APOLLO"), vec![1]);
        assert_eq!(by("spacex"), vec![0, 3]);
        assert_eq!(by("atlas"), vec![2]);
        assert_eq!(by("2020"), vec![2]);
        assert_eq!(by("   "), vec![1, 2, 0, 3]);
        assert!(by("soyuz").is_empty());
    }

    #[test]
    fn out_of_range_indices_are_dropped() {
        let ds = dataset();
        let q = TableQuery {
            sort_by: SortField::Date,
            order: SortOrder::Ascending,
            ..TableQuery::default()
        };
        assert_eq!(search_and_sort(&ds, &[9, 1, 0], &q), vec![1, 0]);
    }

    #[test]
    fn empty_fields_never_match() {
        let ds = Dataset::from_records(vec![record("", "", "", "2020-01-01")]);
        let q = TableQuery {
            search: "x".to_string(),
            ..TableQuery::default()
        };
        assert!(search_and_sort(&ds, &[0], &q).is_empty());
    }

    #[test]
    fn sort_is_stable_both_ways() {
        let ds = dataset();
        let all = [0, 1, 2, 3];
        let asc = TableQuery {
            sort_by: SortField::Date,
            order: SortOrder::Ascending,
            ..TableQuery::default()
        };
        assert_eq!(search_and_sort(&ds, &all, &asc), vec![1, 2, 0, 3]);

        let desc = TableQuery::default();
        assert_eq!(search_and_sort(&ds, &all, &desc), vec![0, 3, 2, 1]);
    }

    #[test]
    fn sort_by_text_columns() {
        let ds = dataset();
        let all = [0, 1, 2, 3];
        let q = TableQuery {
            sort_by: SortField::Company,
            order: SortOrder::Ascending,
            ..TableQuery::default()
        };
        assert_eq!(search_and_sort(&ds, &all, &q), vec![1, 0, 3, 2]);

        let q = TableQuery {
            sort_by: SortField::Mission,
            order: SortOrder::Descending,
            ..TableQuery::default()
        };
        assert_eq!(search_and_sort(&ds, &all, &q), vec![0, 2, 3, 1]);
    }

    #[test]
    fn only_given_indices_are_considered() {
        let ds = dataset();
        let q = TableQuery {
            search: "falcon".to_string(),
            ..TableQuery::default()
        };
        assert_eq!(search_and_sort(&ds, &[3, 1], &q), vec![3]);
    }
}
