//! JSON persistence for the color table.
//!
//! The table is written in one atomic step: serialize into a temporary
//! file beside the destination, then rename it into place. A crash or
//! I/O failure mid-write leaves no artifact at the final path that could
//! be mistaken for a complete table.

use crate::{BlackBodyTable, TableResult};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes a table to `path` as JSON, atomically.
///
/// # Example
///
/// ```rust,ignore
/// json::write("black_body.json", &table)?;
/// ```
pub fn write<P: AsRef<Path>>(path: P, table: &BlackBodyTable) -> TableResult<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        serde_json::to_writer(&mut writer, table)?;
        writer.flush()?;
    }
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(())
}

/// Reads a table back from a JSON artifact.
///
/// Rejects objects with unknown keys and validates column alignment.
///
/// # Example
///
/// ```rust,ignore
/// let table = json::read("black_body.json")?;
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> TableResult<BlackBodyTable> {
    let file = File::open(path.as_ref())?;
    let table: BlackBodyTable = serde_json::from_reader(BufReader::new(file))?;
    table.validate()?;
    Ok(table)
}
