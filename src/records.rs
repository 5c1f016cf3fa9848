//! Line-delimited integer record files.
//!
//! One value per line. A leading byte-order mark and surrounding whitespace
//! are ignored on load, and blank lines are skipped. The writer emits one
//! value per line and truncates the destination.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};

const BOM: char = '\u{FEFF}';

/// Load signed byte records from `path`.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<i8>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let records = parse_records(BufReader::new(file), path)?;
    tracing::debug!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}

fn parse_records<R: BufRead>(reader: R, path: &Path) -> Result<Vec<i8>> {
    let mut out = Vec::new();
    for (idx, raw) in reader.split(b'\n').enumerate() {
        let raw = raw.map_err(|e| Error::io(path, e))?;
        let line = std::str::from_utf8(&raw).map_err(|source| Error::Encoding {
            path: path.to_path_buf(),
            line: idx + 1,
            source,
        })?;
        let content = line.trim_start_matches(BOM).trim();
        if content.is_empty() {
            continue;
        }
        let value = content.parse::<i8>().map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            line: idx + 1,
            content: content.to_string(),
            source,
        })?;
        out.push(value);
    }
    Ok(out)
}

/// Write `records` to `path`, one per line, replacing any existing file.
pub fn write_records(records: &[i8], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    for value in records {
        writeln!(writer, "{value}").map_err(|e| Error::io(path, e))?;
    }
    writer.flush().map_err(|e| Error::io(path, e))?;
    tracing::debug!(path = %path.display(), count = records.len(), "wrote records");
    Ok(())
}
