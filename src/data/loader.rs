use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use super::input::parse_date;
use super::model::{Dataset, MissionRecord, MissionStatus};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a mission dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with `Company, Location, Date, Time, Rocket,
///   Mission, RocketStatus, Price, MissionStatus` (any order)
/// * `.json` – `[{ "Company": ..., "Date": ..., ... }, ...]` with the same keys
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" | "txt" => load_csv(path),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    log::info!(
        "Loaded {} missions from {} ({} companies)",
        dataset.len(),
        path.display(),
        dataset.companies.len()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Row layout shared by the readers and the sample generator
// ---------------------------------------------------------------------------

/// One row exactly as it appears in the source file, before typing.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MissionRow {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Time", default)]
    pub time: Option<String>,
    #[serde(rename = "Rocket")]
    pub rocket: String,
    #[serde(rename = "Mission")]
    pub mission: String,
    #[serde(rename = "RocketStatus")]
    pub rocket_status: String,
    #[serde(rename = "Price", default)]
    pub price: Option<String>,
    #[serde(rename = "MissionStatus")]
    pub mission_status: String,
}

impl MissionRow {
    /// Type the row. Only an unusable `Date` is an error; the optional
    /// columns degrade to `None`.
    pub fn into_record(self, row_no: usize) -> Result<MissionRecord> {
        let date = parse_date(&self.date)
            .with_context(|| format!("Row {row_no}: invalid Date {:?}", self.date))?;

        let time = self
            .time
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .and_then(parse_time);

        let price = self.price.as_deref().and_then(|p| {
            let parsed = parse_price(p);
            if parsed.is_none() && !p.trim().is_empty() {
                log::debug!("Row {row_no}: ignoring unparseable Price {p:?}");
            }
            parsed
        });

        Ok(MissionRecord {
            company: self.company,
            location: self.location,
            date,
            time,
            rocket: self.rocket,
            mission: self.mission,
            rocket_status: self.rocket_status,
            price,
            mission_status: MissionStatus::parse(&self.mission_status),
        })
    }
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}

/// Prices may carry thousands separators, e.g. `"1,160.0"`.
fn parse_price(s: &str) -> Option<f64> {
    let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Dataset> {
    let file = File::open(path).context("opening CSV")?;
    read_csv(BufReader::new(file))
}

/// Parse CSV text from any reader. Column order does not matter; missing
/// required columns fail the whole load.
pub fn read_csv<R: std::io::Read>(reader: R) -> Result<Dataset> {
    let mut reader = csv::Reader::from_reader(reader);
    reader.headers().context("reading CSV headers")?;

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<MissionRow>().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(row.into_record(row_no)?);
    }

    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "Company": "SpaceX", "Date": "2020-01-07", "Price": 50.0, ... },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Dataset> {
    let file = File::open(path).context("opening JSON file")?;
    let root: JsonValue =
        serde_json::from_reader(BufReader::new(file)).context("parsing JSON")?;
    read_json_value(&root)
}

/// Type an already-parsed JSON document.
pub fn read_json_value(root: &JsonValue) -> Result<Dataset> {
    let rows = root
        .as_array()
        .context("Expected top-level JSON array")?;

    let mut records = Vec::with_capacity(rows.len());
    for (i, rec) in rows.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let row = MissionRow {
            company: json_text(obj, "Company").unwrap_or_default(),
            location: json_text(obj, "Location").unwrap_or_default(),
            date: json_text(obj, "Date")
                .with_context(|| format!("Row {i}: missing 'Date'"))?,
            time: json_text(obj, "Time"),
            rocket: json_text(obj, "Rocket").unwrap_or_default(),
            mission: json_text(obj, "Mission").unwrap_or_default(),
            rocket_status: json_text(obj, "RocketStatus").unwrap_or_default(),
            price: json_text(obj, "Price"),
            mission_status: json_text(obj, "MissionStatus").unwrap_or_default(),
        };
        records.push(row.into_record(i)?);
    }

    Ok(Dataset::from_records(records))
}

/// Read a JSON field as text; numbers are stringified, null is absent.
fn json_text(obj: &Map<String, JsonValue>, key: &str) -> Option<String> {
    match obj.get(key)? {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    const SAMPLE: &str = "\
Company,Location,Date,Time,Rocket,Mission,RocketStatus,Price,MissionStatus
RVSN USSR,\"Site 1/5, Baikonur Cosmodrome, Kazakhstan\",1957-10-04,19:28:00,Sputnik 8K71PS,Sputnik-1,Retired,,Success
US Navy,\"LC-18A, Cape Canaveral AFS, Florida, USA\",1957-12-06,16:44:00,Vanguard,Vanguard TV3,Retired,,Failure
NASA,\"LC-39A, Kennedy Space Center, Florida, USA\",1981-04-12,12:00,Space Shuttle Columbia,STS-1,Retired,\"1,160.0\",Success
";

    #[test]
    fn csv_rows_are_typed() {
        let ds = read_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);

        let first = &ds.records[0];
        assert_eq!(first.company, "RVSN USSR");
        assert_eq!(first.location, "Site 1/5, Baikonur Cosmodrome, Kazakhstan");
        assert_eq!(first.date, NaiveDate::from_ymd_opt(1957, 10, 4).unwrap());
        assert_eq!(first.time, NaiveTime::from_hms_opt(19, 28, 0));
        assert_eq!(first.price, None);
        assert_eq!(first.mission_status, MissionStatus::Success);

        let shuttle = &ds.records[2];
        assert_eq!(shuttle.price, Some(1160.0));
        assert_eq!(shuttle.time, NaiveTime::from_hms_opt(12, 0, 0));
    }

    #[test]
    fn column_order_is_irrelevant_and_time_optional() {
        let text = "MissionStatus,Mission,Rocket,RocketStatus,Date,Company,Location,Price\n\
                    Prelaunch Failure,Amos-6,Falcon 9,Active,2016-09-01,SpaceX,SLC-40,abc\n";
        let ds = read_csv(text.as_bytes()).unwrap();
        let rec = &ds.records[0];
        assert_eq!(rec.company, "SpaceX");
        assert_eq!(rec.mission_status, MissionStatus::PrelaunchFailure);
        assert_eq!(rec.time, None);
        assert_eq!(rec.price, None);
    }

    #[test]
    fn missing_column_fails() {
        let text = "Company,Date\nSpaceX,2020-01-01\n";
        assert!(read_csv(text.as_bytes()).is_err());
    }

    #[test]
    fn bad_date_fails_with_row_context() {
        let text = "Company,Location,Date,Rocket,Mission,RocketStatus,MissionStatus\n\
                    SpaceX,SLC-40,yesterday,Falcon 9,X,Active,Success\n";
        let err = read_csv(text.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("Row 0"));
    }

    #[test]
    fn json_records_accept_numeric_price() {
        let root = serde_json::json!([
            { "Company": "SpaceX", "Location": "SLC-40", "Date": "2020-01-07",
              "Rocket": "Falcon 9", "Mission": "Starlink", "RocketStatus": "Active",
              "Price": 50.0, "MissionStatus": "Success" },
            { "Company": "CASC", "Location": "LC-2", "Date": "2020-01-15",
              "Rocket": "Long March 2D", "Mission": "Jilin", "RocketStatus": "Active",
              "Price": null, "MissionStatus": "Success" }
        ]);
        let ds = read_json_value(&root).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].price, Some(50.0));
        assert_eq!(ds.records[1].price, None);
    }

    #[test]
    fn json_requires_array() {
        let root = serde_json::json!({ "Company": "SpaceX" });
        assert!(read_json_value(&root).is_err());
    }

    #[test]
    fn unsupported_extension() {
        assert!(load_file(Path::new("missions.parquet")).is_err());
    }
}
