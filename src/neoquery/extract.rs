//! Loading objects from the NEO CSV file and approaches from the CAD JSON file.
//!
//! Loaders do no linking; they default missing values and hand the raw
//! collections to [`crate::database::NeoDatabase::new`].

use crate::error::{NeoError, Result};
use crate::helpers::cd_to_datetime;
use crate::model::{CloseApproach, NearEarthObject};
use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

/// Read objects from a CSV file with `pdes`, `name`, `diameter` and `pha`
/// columns. Other columns are ignored. Quoted fields may hold commas but not
/// line breaks.
pub fn load_neos<P: AsRef<Path>>(path: P) -> Result<Vec<NearEarthObject>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(NeoError::Io)?;
    let neos = read_neos(BufReader::new(file))?;
    info!(count = neos.len(), path = %path.display(), "loaded near-Earth objects");
    Ok(neos)
}

pub fn read_neos<R: BufRead>(reader: R) -> Result<Vec<NearEarthObject>> {
    let mut lines = reader.lines();
    let header = match lines.next() {
        Some(line) => split_csv_line(&line?),
        None => return Ok(Vec::new()),
    };
    let column = |name: &str| header.iter().position(|h| h.trim() == name);
    let pdes = column("pdes").ok_or_else(|| NeoError::Parse("NEO file has no 'pdes' column".into()))?;
    let name = column("name");
    let diameter = column("diameter");
    let pha = column("pha");

    let mut neos = Vec::new();
    for (row, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_csv_line(&line);
        let field = |idx: Option<usize>| idx.and_then(|i| fields.get(i)).map(|s| s.trim());

        let designation = field(Some(pdes)).unwrap_or_default();
        if designation.is_empty() {
            warn!(row = row + 2, "skipping NEO row without a designation");
            continue;
        }
        neos.push(NearEarthObject::new(
            designation,
            field(name).map(str::to_string),
            field(diameter).map_or(f64::NAN, parse_float),
            field(pha) == Some("Y"),
        ));
    }
    Ok(neos)
}

#[derive(Deserialize)]
struct CadFile {
    fields: Vec<String>,
    data: Vec<Vec<Value>>,
}

/// Read close approaches from a NASA CAD API JSON file.
pub fn load_approaches<P: AsRef<Path>>(path: P) -> Result<Vec<CloseApproach>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(NeoError::Io)?;
    let approaches = read_approaches(BufReader::new(file))?;
    info!(count = approaches.len(), path = %path.display(), "loaded close approaches");
    Ok(approaches)
}

pub fn read_approaches<R: Read>(reader: R) -> Result<Vec<CloseApproach>> {
    let cad: CadFile = serde_json::from_reader(reader)?;
    let column = |name: &str| {
        cad.fields
            .iter()
            .position(|f| f == name)
            .ok_or_else(|| NeoError::Parse(format!("CAD file has no '{}' field", name)))
    };
    let des = column("des")?;
    let cd = column("cd")?;
    let dist = column("dist")?;
    let v_rel = column("v_rel")?;

    cad.data
        .iter()
        .map(|row| -> Result<CloseApproach> {
            let time = cd_to_datetime(&value_str(row.get(cd)))?;
            Ok(CloseApproach::new(
                value_str(row.get(des)),
                time,
                parse_float(&value_str(row.get(dist))),
                parse_float(&value_str(row.get(v_rel))),
            ))
        })
        .collect()
}

fn value_str(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Missing or malformed numbers become NaN.
fn parse_float(s: &str) -> f64 {
    s.trim().parse().unwrap_or(f64::NAN)
}

/// Split one CSV record, honoring double-quoted fields with `""` escapes.
/// Records are read line by line, so quoted fields cannot contain newlines.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}
