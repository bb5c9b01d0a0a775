use std::path::PathBuf;

use space_missions::data::loader::load_file;
use space_missions::{Dataset, QueryEngine};

fn fixture() -> Dataset {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/space_missions.csv");
    load_file(&path).expect("fixture loads")
}

#[test]
fn test_count_by_company() {
    let ds = fixture();
    let q = QueryEngine::new(&ds);
    assert_eq!(q.mission_count_by_company("RVSN USSR"), 3);
    assert_eq!(q.mission_count_by_company("NASA"), 2);
    assert_eq!(q.mission_count_by_company("nasa"), 0);
    assert_eq!(q.mission_count_by_company("Blue Origin"), 0);
    assert_eq!(q.mission_count_by_company(""), 0);
}

#[test]
fn test_success_rate() {
    let ds = fixture();
    let q = QueryEngine::new(&ds);
    assert_eq!(q.success_rate("RVSN USSR"), 66.67);
    assert_eq!(q.success_rate("US Navy"), 33.33);
    assert_eq!(q.success_rate("NASA"), 50.0);
    assert_eq!(q.success_rate("Blue Origin"), 0.0);

    for company in &ds.companies {
        let rate = q.success_rate(company);
        assert!((0.0..=100.0).contains(&rate), "{company}: {rate}");
    }
}

#[test]
fn test_missions_by_date_range() {
    let ds = fixture();
    let q = QueryEngine::new(&ds);
    assert_eq!(
        q.missions_by_date_range_str("2020-01-01", "2020-12-31"),
        vec!["Crew Dragon Demo-2", "ANASIS-II", "Tianwen-1"]
    );
    assert_eq!(
        q.missions_by_date_range_str("1957-10-04", "1957-10-04"),
        vec!["Sputnik-1"]
    );
    assert_eq!(
        q.missions_by_date_range_str("1957-10-01", "1957-12-31"),
        vec!["Sputnik-1", "Sputnik-2", "Vanguard TV3"]
    );
    assert!(q.missions_by_date_range_str("1957-13-01", "1958-01-01").is_empty());
    assert!(q.missions_by_date_range_str("2021-01-01", "2020-01-01").is_empty());
}

#[test]
fn test_top_companies() {
    let ds = fixture();
    let q = QueryEngine::new(&ds);
    assert_eq!(
        q.top_companies_by_mission_count(3),
        vec![
            ("RVSN USSR".to_string(), 3),
            ("SpaceX".to_string(), 3),
            ("US Navy".to_string(), 3),
        ]
    );
    assert_eq!(q.top_companies_by_mission_count(100).len(), ds.companies.len());
    assert!(q.top_companies_by_mission_count(0).is_empty());

    let ranking = q.top_companies_by_mission_count(100);
    for pair in ranking.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.1 > b.1 || (a.1 == b.1 && a.0 < b.0));
    }
}

#[test]
fn test_status_count() {
    let ds = fixture();
    let h = QueryEngine::new(&ds).mission_status_count();
    assert_eq!(h.success, 8);
    assert_eq!(h.failure, 4);
    assert_eq!(h.partial_failure, 1);
    assert_eq!(h.prelaunch_failure, 1);
    assert_eq!(h.total(), ds.len());
}

#[test]
fn test_missions_by_year() {
    let ds = fixture();
    let q = QueryEngine::new(&ds);
    assert_eq!(q.missions_by_year(1957), 3);
    assert_eq!(q.missions_by_year(1958), 5);
    assert_eq!(q.missions_by_year(2020), 3);
    assert_eq!(q.missions_by_year(1900), 0);
}

#[test]
fn test_most_used_rocket() {
    let ds = fixture();
    assert_eq!(QueryEngine::new(&ds).most_used_rocket(), "Vanguard");
}

#[test]
fn test_average_missions_per_year() {
    let ds = fixture();
    let q = QueryEngine::new(&ds);
    assert_eq!(q.average_missions_per_year(1957, 1958), 4.0);
    assert_eq!(q.average_missions_per_year(1957, 1960), 2.0);
    assert_eq!(q.average_missions_per_year(1960, 1957), 0.0);
    for year in [1957, 1958, 1969, 2020, 2000] {
        assert_eq!(
            q.average_missions_per_year(year, year),
            q.missions_by_year(year) as f64
        );
    }
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let ds = std::sync::Arc::new(fixture());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let ds = std::sync::Arc::clone(&ds);
            std::thread::spawn(move || QueryEngine::new(&ds).mission_count_by_company("SpaceX"))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 3);
    }
}
