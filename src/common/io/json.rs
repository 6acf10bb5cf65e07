use std::{fs::File, io::{BufWriter, Write}, path::Path};

use anyhow::{Context, Result};
use serde_json::Value;

/// Write a JSON value to `path`, pretty-printed with a 2-space indent.
pub fn write_json_file(path: &Path, value: &Value) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[write_json] Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("[write_json] Failed to serialize {}", path.display()))?;
    writer.flush()?;
    Ok(())
}

