use crate::error::{IndexerError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes each line followed by `\n`.
pub fn write_lines<W: Write, S: AsRef<str>>(writer: &mut W, lines: &[S]) -> std::io::Result<()> {
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Creates (or truncates) `path` and writes the report into it.
pub fn write_report<S: AsRef<str>>(path: impl AsRef<Path>, lines: &[S]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|err| IndexerError::unavailable(path, err))?;

    let mut writer = BufWriter::new(file);
    write_lines(&mut writer, lines).map_err(|err| IndexerError::unavailable(path, err))?;

    tracing::info!("Wrote {} index entries to {}", lines.len(), path.display());
    Ok(())
}
