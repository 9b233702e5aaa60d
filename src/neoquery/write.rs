//! Writing query results as CSV or JSON.
//!
//! Each output row is one close approach merged with its object. CSV puts the
//! object columns beside the approach columns; JSON nests the object under
//! `neo`. Zero results still produce a well-formed file: a header line, or an
//! empty JSON array.

use crate::error::{NeoError, Result};
use crate::model::{ApproachRecord, LinkedApproach, NeoRecord};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

pub const CSV_FIELDS: [&str; 7] = [
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];

/// Output format, picked from an output file's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("csv") => Ok(OutputFormat::Csv),
            Some("json") => Ok(OutputFormat::Json),
            _ => Err(NeoError::Api(format!(
                "Output file must end in .csv or .json: {}",
                path.display()
            ))),
        }
    }
}

/// Write `results` in `format`. Returns the number of rows written.
pub fn write_results<'db, W, I>(results: I, format: OutputFormat, writer: &mut W) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = LinkedApproach<'db>>,
{
    match format {
        OutputFormat::Csv => write_to_csv(results, writer),
        OutputFormat::Json => write_to_json(results, writer),
    }
}

pub fn write_to_csv<'db, W, I>(results: I, writer: &mut W) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = LinkedApproach<'db>>,
{
    writeln!(writer, "{}", CSV_FIELDS.join(","))?;

    let mut count = 0;
    for linked in results {
        let ca = linked.approach.serialize();
        let mut row = vec![
            csv_field(&ca.datetime_utc),
            csv_float(ca.distance_au),
            csv_float(ca.velocity_km_s),
        ];
        match linked.neo.map(|neo| neo.serialize()) {
            Some(neo) => row.extend([
                csv_field(&neo.designation),
                csv_field(&neo.name),
                csv_float(neo.diameter_km),
                csv_bool(neo.potentially_hazardous),
            ]),
            None => row.extend([
                csv_field(linked.approach.designation()),
                String::new(),
                String::new(),
                String::new(),
            ]),
        }
        writeln!(writer, "{}", row.join(","))?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

#[derive(Serialize)]
struct JsonRow {
    #[serde(flatten)]
    approach: ApproachRecord,
    neo: Option<NeoRecord>,
}

/// NaN diameters serialize as `null`.
pub fn write_to_json<'db, W, I>(results: I, writer: &mut W) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = LinkedApproach<'db>>,
{
    let rows: Vec<JsonRow> = results
        .into_iter()
        .map(|linked| JsonRow {
            approach: linked.approach.serialize(),
            neo: linked.neo.map(|neo| neo.serialize()),
        })
        .collect();
    serde_json::to_writer_pretty(&mut *writer, &rows)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(rows.len())
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

// Whole numbers keep their `.0`.
fn csv_float(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{:?}", value)
    }
}

fn csv_bool(value: bool) -> String {
    let s = if value { "True" } else { "False" };
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::NeoDatabase;
    use crate::helpers::cd_to_datetime;
    use crate::model::{CloseApproach, NearEarthObject};

    fn db() -> NeoDatabase {
        let time = cd_to_datetime("2020-Jan-01 06:00").unwrap();
        NeoDatabase::new(
            vec![
                NearEarthObject::new("433", Some("Eros".into()), 16.84, false),
                NearEarthObject::new("2020 AB", Some("Smith, Jones".into()), f64::NAN, true),
            ],
            vec![
                CloseApproach::new("433", time, 0.15, 5.2),
                CloseApproach::new("2020 AB", time, 0.02, 11.5),
                CloseApproach::new("ghost", time, 0.3, 1.0),
            ],
        )
    }

    fn csv_of(db: &NeoDatabase) -> String {
        let mut buf = Vec::new();
        write_to_csv(db.linked_approaches(), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn csv_rows_merge_approach_and_object() {
        let out = csv_of(&db());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0],
            "datetime_utc,distance_au,velocity_km_s,designation,name,diameter_km,potentially_hazardous"
        );
        assert_eq!(lines[1], "2020-01-01 06:00,0.15,5.2,433,Eros,16.84,False");
        assert_eq!(
            lines[2],
            "2020-01-01 06:00,0.02,11.5,2020 AB,\"Smith, Jones\",nan,True"
        );
        assert_eq!(lines[3], "2020-01-01 06:00,0.3,1.0,ghost,,,");
    }

    #[test]
    fn csv_floats_keep_a_decimal_point() {
        assert_eq!(csv_float(1.0), "1.0");
        assert_eq!(csv_float(16.84), "16.84");
        assert_eq!(csv_float(-2.0), "-2.0");
        assert_eq!(csv_float(f64::NAN), "nan");
    }

    #[test]
    fn empty_csv_has_header_only() {
        let mut buf = Vec::new();
        let written = write_to_csv(std::iter::empty(), &mut buf).unwrap();
        assert_eq!(written, 0);
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 1);
    }

    #[test]
    fn json_nests_object_under_neo() {
        let db = db();
        let mut buf = Vec::new();
        assert_eq!(write_to_json(db.linked_approaches(), &mut buf).unwrap(), 3);

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows[0]["datetime_utc"], "2020-01-01 06:00");
        assert_eq!(rows[0]["distance_au"], 0.15);
        assert_eq!(rows[0]["neo"]["designation"], "433");
        assert_eq!(rows[0]["neo"]["potentially_hazardous"], false);
        assert!(rows[1]["neo"]["diameter_km"].is_null());
        assert!(rows[2]["neo"].is_null());
    }

    #[test]
    fn empty_json_is_empty_list() {
        let mut buf = Vec::new();
        write_to_json(std::iter::empty(), &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value, serde_json::json!([]));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            OutputFormat::from_path(Path::new("out/results.CSV")).unwrap(),
            OutputFormat::Csv
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("results.json")).unwrap(),
            OutputFormat::Json
        );
        assert!(OutputFormat::from_path(Path::new("results.txt")).is_err());
        assert!(OutputFormat::from_path(Path::new("results")).is_err());
    }
}
