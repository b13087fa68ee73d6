use crate::record::{AddressRecord, Field, edit};
use anyhow::Context;
use std::fs;
use tracing::debug;

/// Deserialize a record from JSON text. Unknown keys and non-string values fail.
pub fn parse_record(text: &str) -> anyhow::Result<AddressRecord> {
    let rec = serde_json::from_str(text).context("invalid address record")?;
    Ok(rec)
}

pub fn read_record_file(path: &str) -> anyhow::Result<AddressRecord> {
    let text = fs::read_to_string(path).with_context(|| format!("read record file {}", path))?;
    let rec = parse_record(&text).with_context(|| format!("parse record file {}", path))?;
    debug!(path, ?rec, "loaded record");
    Ok(rec)
}

/// Pretty JSON; unset fields are omitted.
pub fn to_json(rec: &AddressRecord) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(rec)?)
}

pub fn write_record_file(path: &str, rec: &AddressRecord) -> anyhow::Result<()> {
    let mut json = to_json(rec)?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("write record file {}", path))?;
    debug!(path, "wrote record");
    Ok(())
}

/// What `show` prints: the whole record as JSON, or one field's value.
/// An unset field yields `None` (nothing printed).
pub fn show_text(rec: &AddressRecord, field: Option<Field>) -> anyhow::Result<Option<String>> {
    match field {
        Some(f) => Ok(rec.get(f).map(str::to_string)),
        None => Ok(Some(to_json(rec)?)),
    }
}

/// Load `input`, apply the edits, and write to `out` (the input itself when
/// `out` is `None`). Returns the path written.
pub fn edit_record_file(
    input: &str,
    out: Option<&str>,
    unset: &[Field],
    assignments: &[String],
) -> anyhow::Result<String> {
    let mut rec = read_record_file(input)?;
    edit(&mut rec, unset, assignments).with_context(|| format!("edit record file {}", input))?;

    let out = out.unwrap_or(input);
    write_record_file(out, &rec)?;
    Ok(out.to_string())
}
