//! Rampage skills array generation.
//!
//! Same pipeline as the skills generator over `rampage_skills.json`:
//! rampage skill entries have a string `shortId` and no level cap or
//! icon, so the entry block is three lines.

use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;

use crate::config::GeneratorPaths;
use crate::error::{CodegenError, Result};
use crate::helpers::{json_type_name, read_file, string_literal, write_output};
use crate::models::RampageSkillRecord;
use crate::notice::with_generated_notice;
use crate::template::Template;

/// Input data file, resolved against `GeneratorPaths::data_dir`.
pub const DATA_FILE: &str = "rampage_skills.json";
/// Template file, resolved against `GeneratorPaths::template_dir`.
pub const TEMPLATE_FILE: &str = "rampage_skills.ts";
/// Output file, resolved against `GeneratorPaths::out_dir`.
pub const OUTPUT_FILE: &str = "rampage_skills.ts";

/// Marker token replaced by the joined entry blocks.
pub const MARKER: &str = "%RAMPAGE_SKILLS_ARRAY_GOES_HERE%";

/// Generate the rampage skills source file.
///
/// Returns the loaded records for callers chaining several generators.
pub fn generate(paths: &GeneratorPaths) -> Result<Vec<RampageSkillRecord>> {
    let data_path = paths.data_dir.join(DATA_FILE);
    log::info!("generating rampage skills data from {}", data_path.display());

    let records = load_records(&data_path)?;
    let template = Template::load(&paths.template_dir.join(TEMPLATE_FILE))?;

    let entries: Vec<String> = records.iter().map(format_entry).collect();
    let rendered = template.splice(MARKER, &entries.join("\n"))?;
    let output = with_generated_notice(&rendered);

    let dest = paths.out_dir.join(OUTPUT_FILE);
    write_output(&dest, &output)?;
    log::info!(
        "wrote {} rampage skill entries to {}",
        records.len(),
        dest.display()
    );

    Ok(records)
}

/// Parse and validate the rampage skills data file.
pub fn load_records(path: &Path) -> Result<Vec<RampageSkillRecord>> {
    let json = read_file(path)?;
    let value: Value = serde_json::from_str(&json).map_err(|source| CodegenError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let items = match value.as_array() {
        Some(items) => items,
        None => {
            return Err(CodegenError::MalformedInput {
                path: path.to_path_buf(),
                found: json_type_name(&value),
            })
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let record = RampageSkillRecord::from_value(item, index, path)?;
        log::debug!("rampage skill record {index}: {record:?}");
        records.push(record);
    }
    check_unique(&records, path)?;
    Ok(records)
}

// Consumer-side lookups are keyed by id and by shortId, same as skills.
fn check_unique(records: &[RampageSkillRecord], path: &Path) -> Result<()> {
    let mut ids = HashSet::new();
    let mut short_ids = HashSet::new();
    for (index, record) in records.iter().enumerate() {
        if !ids.insert(record.id.as_str()) {
            return Err(CodegenError::DuplicateKey {
                path: path.to_path_buf(),
                index,
                field: "id",
                value: record.id.clone(),
            });
        }
        if !short_ids.insert(record.short_id.as_str()) {
            return Err(CodegenError::DuplicateKey {
                path: path.to_path_buf(),
                index,
                field: "shortId",
                value: record.short_id.clone(),
            });
        }
    }
    Ok(())
}

/// Format one rampage skill as an entry block of the generated array
/// literal. All three values are strings, so all three are quoted.
fn format_entry(record: &RampageSkillRecord) -> String {
    format!(
        "    {{
        id: {id},
        shortId: {short_id},
        name: {name},
    }},",
        id = string_literal(&record.id),
        short_id = string_literal(&record.short_id),
        name = string_literal(&record.name),
    )
}
