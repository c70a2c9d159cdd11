//! CSV color-matching dataset format support.
//!
//! The dataset provider ships the observer curves as a delimited text file,
//! one row per sampled wavelength:
//!
//! ```text
//! lambda,xbar,ybar,zbar
//! 360,0.000000122200,0.000000013398,0.000000535027
//! 365,0.000000919270,0.000000100650,0.000004028300
//! ...
//! ```
//!
//! The `lambda` column is in nanometers and must be strictly ascending.
//! Column order is free; columns are located by header name. Extra columns
//! are ignored. Lines starting with `#` and blank lines are skipped.
//!
//! # Example
//!
//! ```rust,ignore
//! use planck_cmf::csv;
//!
//! let cmf = csv::read("CIE_1964.csv")?;
//! ```

use crate::{Cmf, CmfError, CmfResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads a color-matching dataset from a CSV file.
///
/// # Example
///
/// ```rust,ignore
/// let cmf = csv::read("CIE_1964.csv")?;
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> CmfResult<Cmf> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    parse(reader)
}

/// Parses a color-matching dataset from a reader.
pub fn parse<R: BufRead>(reader: R) -> CmfResult<Cmf> {
    let mut header: Option<Columns> = None;
    let mut lambda_nm = Vec::new();
    let mut xbar = Vec::new();
    let mut ybar = Vec::new();
    let mut zbar = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields = split_fields(line);

        match &header {
            None => {
                header = Some(Columns::from_header(&fields)?);
            }
            Some(cols) => {
                lambda_nm.push(parse_field(&fields, cols.lambda, line_no)?);
                xbar.push(parse_field(&fields, cols.xbar, line_no)?);
                ybar.push(parse_field(&fields, cols.ybar, line_no)?);
                zbar.push(parse_field(&fields, cols.zbar, line_no)?);
            }
        }
    }

    if header.is_none() {
        return Err(CmfError::Parse("no header line found".into()));
    }

    Cmf::from_nanometers(lambda_nm, xbar, ybar, zbar)
}

/// Column indices resolved from the header row.
struct Columns {
    lambda: usize,
    xbar: usize,
    ybar: usize,
    zbar: usize,
}

impl Columns {
    fn from_header(fields: &[&str]) -> CmfResult<Self> {
        let find = |name: &str| {
            fields
                .iter()
                .position(|f| f.eq_ignore_ascii_case(name))
                .ok_or_else(|| CmfError::MissingColumn(name.to_string()))
        };
        Ok(Self {
            lambda: find("lambda")?,
            xbar: find("xbar")?,
            ybar: find("ybar")?,
            zbar: find("zbar")?,
        })
    }
}

fn split_fields(line: &str) -> Vec<&str> {
    if line.contains(',') {
        line.split(',').map(str::trim).collect()
    } else {
        line.split_whitespace().collect()
    }
}

fn parse_field(fields: &[&str], index: usize, line_no: usize) -> CmfResult<f64> {
    let raw = fields.get(index).ok_or_else(|| {
        CmfError::Parse(format!(
            "line {}: expected at least {} fields, found {}",
            line_no + 1,
            index + 1,
            fields.len()
        ))
    })?;
    raw.parse::<f64>().map_err(|_| {
        CmfError::Parse(format!("line {}: invalid number {:?}", line_no + 1, raw))
    })
}
