//! # File I/O Module
//!
//! Reading beam data and writing results. Nothing in [`crate::calculations`]
//! calls into this module; drivers read an input here, analyze it, and hand
//! the results back here to be written.
//!
//! ## Beam data CSV
//!
//! ```text
//! Length,Width,Height,Elastic Modulus      <- header, ignored
//! 10.0,0.1,0.2,200000000000
//! Position,Magnitude                      <- header, ignored
//! 2.0,1000
//! 6.5,-250
//! ```
//!
//! Fields may be quoted and are trimmed; blank lines are skipped. The load
//! header row is required once any load follows, so a first load is never
//! mistaken for a header. JSON input (`.json`) is a [`BeamInput`].
//!
//! ## Results CSV
//!
//! One section per result: a `"<Label> Data"` row, the value, a blank row.
//!
//! ## Saves
//!
//! All writes are atomic: write to `.tmp`, fsync, rename over the target.
//! A failed save removes its `.tmp` file.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};

use crate::calculations::BeamResults;
use crate::errors::{CalcError, CalcResult};
use crate::loads::PointLoad;
use crate::model::BeamInput;
use crate::report::AnalysisReport;

/// Parse beam data in the CSV layout described in the module docs.
///
/// The label of the returned input is left empty; [`load_beam_input`] fills
/// it from the file name.
///
/// # Example
///
/// ```rust
/// use beam_core::file_io::parse_beam_csv;
///
/// let text = "L,W,H,E\n10,0.1,0.2,2e11\nPosition,Magnitude\n2,1000\n6.5,-250\n";
/// let input = parse_beam_csv(text).unwrap();
/// assert_eq!(input.length, 10.0);
/// assert_eq!(input.loads.len(), 2);
/// ```
pub fn parse_beam_csv(text: &str) -> CalcResult<BeamInput> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let rows = reader
        .records()
        .map(|record| record.map(|r| (record_line(&r), r)).map_err(csv_parse_error))
        .filter(|row| !matches!(row, Ok((_, r)) if r.iter().all(str::is_empty)))
        .collect::<CalcResult<Vec<(usize, StringRecord)>>>()?;
    let mut rows = rows.into_iter();

    let (header_line, _) = rows
        .next()
        .ok_or_else(|| CalcError::parse_error(1, "Missing beam header row"))?;

    let (line, props) = rows
        .next()
        .ok_or_else(|| CalcError::parse_error(header_line + 1, "Missing beam property row"))?;
    let props = parse_numbers(line, &props)?;
    if props.len() != 4 {
        return Err(CalcError::parse_error(
            line,
            format!("Expected length,width,height,elastic_modulus; found {} values", props.len()),
        ));
    }

    // Load header; a file may stop after the property row
    if let Some((line, header)) = rows.next() {
        if parse_numbers(line, &header).is_ok() {
            return Err(CalcError::parse_error(
                line,
                "Expected a position,magnitude header row before the loads",
            ));
        }
    }

    let mut loads = Vec::new();
    for (line, row) in rows {
        let values = parse_numbers(line, &row)?;
        if values.len() != 2 {
            return Err(CalcError::parse_error(
                line,
                format!("Expected position,magnitude; found {} values", values.len()),
            ));
        }
        loads.push(PointLoad::new(values[0], values[1]));
    }

    Ok(BeamInput {
        label: String::new(),
        length: props[0],
        width: props[1],
        height: props[2],
        elastic_modulus: props[3],
        loads,
    })
}

fn record_line(record: &StringRecord) -> usize {
    record.position().map(|p| p.line() as usize).unwrap_or(1)
}

fn csv_parse_error(e: csv::Error) -> CalcError {
    let line = e.position().map(|p| p.line() as usize).unwrap_or(1);
    CalcError::parse_error(line, e.to_string())
}

fn parse_numbers(line: usize, record: &StringRecord) -> CalcResult<Vec<f64>> {
    record
        .iter()
        .map(|field| {
            field
                .parse::<f64>()
                .map_err(|_| CalcError::parse_error(line, format!("'{}' is not a number", field)))
        })
        .collect()
}

/// Read a beam input file. `.json` files are parsed as [`BeamInput`];
/// anything else as beam data CSV. An empty label is replaced by the file stem.
pub fn load_beam_input(path: &Path) -> CalcResult<BeamInput> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let mut input = if is_json {
        serde_json::from_str::<BeamInput>(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?
    } else {
        parse_beam_csv(&contents)?
    };

    if input.label.is_empty() {
        if let Some(stem) = path.file_stem() {
            input.label = stem.to_string_lossy().into_owned();
        }
    }
    Ok(input)
}

/// Render results as sectioned CSV text.
///
/// ```rust
/// use beam_core::calculations::BeamResults;
/// use beam_core::file_io::results_to_csv;
///
/// let r = BeamResults {
///     max_bending_moment: 80.0,
///     max_shear_force: 10.0,
///     max_bending_stress: 0.8,
///     max_shear_stress: 0.25,
///     max_deflection: 3.2e-6,
/// };
/// assert!(results_to_csv(&r).unwrap().starts_with("Max Bending Moment Data\n80\n\n"));
/// ```
pub fn results_to_csv(results: &BeamResults) -> CalcResult<String> {
    let mut out = Vec::new();
    for (label, value) in results.labeled_values() {
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut out);
        writer
            .write_record([format!("{} Data", label)])
            .and_then(|()| writer.write_record([value.to_string()]))
            .map_err(|e| CalcError::SerializationError { reason: e.to_string() })?;
        writer
            .flush()
            .map_err(|e| CalcError::SerializationError { reason: e.to_string() })?;
        drop(writer);
        out.push(b'\n');
    }
    String::from_utf8(out).map_err(|e| CalcError::SerializationError { reason: e.to_string() })
}

/// Write results as sectioned CSV
pub fn save_results_csv(results: &BeamResults, path: &Path) -> CalcResult<()> {
    write_atomic(path, results_to_csv(results)?.as_bytes())
}

/// Write a JSON analysis report
pub fn save_report_json(report: &AnalysisReport, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(report)?;
    write_atomic(path, json.as_bytes())
}

/// Write `bytes` to `path` atomically.
///
/// 1. Write to `<path>.tmp`
/// 2. Sync to disk (fsync)
/// 3. Rename over `path`
///
/// If any step fails the temp file is removed and `path` is left untouched.
fn write_atomic(path: &Path, bytes: &[u8]) -> CalcResult<()> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = Path::new(&tmp_name);

    let saved = write_synced(tmp_path, bytes).and_then(|()| {
        fs::rename(tmp_path, path).map_err(|e| {
            CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
        })
    });

    if saved.is_err() {
        let _ = fs::remove_file(tmp_path);
    }
    saved
}

fn write_synced(tmp_path: &Path, bytes: &[u8]) -> CalcResult<()> {
    let mut tmp_file = File::create(tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(bytes).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })
}
