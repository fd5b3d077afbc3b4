//! Skills array generation.
//!
//! Reads `skills.json`, formats each record as an entry block, splices
//! the joined blocks into the `skills.ts` template, and writes the
//! generated source.

use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;

use crate::config::GeneratorPaths;
use crate::error::{CodegenError, Result};
use crate::helpers::{json_type_name, read_file, string_literal, write_output};
use crate::models::SkillRecord;
use crate::notice::with_generated_notice;
use crate::template::Template;

/// Input data file, resolved against `GeneratorPaths::data_dir`.
pub const DATA_FILE: &str = "skills.json";
/// Template file, resolved against `GeneratorPaths::template_dir`.
pub const TEMPLATE_FILE: &str = "skills.ts";
/// Output file, resolved against `GeneratorPaths::out_dir`.
pub const OUTPUT_FILE: &str = "skills.ts";

/// Marker token replaced by the joined entry blocks.
pub const MARKER: &str = "%SKILLS_ARRAY_GOES_HERE%";

/// Generate the skills source file.
///
/// Returns the loaded records so a caller chaining several generators
/// can reuse the same source data without re-reading it.
pub fn generate(paths: &GeneratorPaths) -> Result<Vec<SkillRecord>> {
    let data_path = paths.data_dir.join(DATA_FILE);
    log::info!("generating skills data from {}", data_path.display());

    let records = load_records(&data_path)?;
    let template = Template::load(&paths.template_dir.join(TEMPLATE_FILE))?;

    let entries: Vec<String> = records.iter().map(format_entry).collect();
    let rendered = template.splice(MARKER, &entries.join("\n"))?;
    let output = with_generated_notice(&rendered);

    let dest = paths.out_dir.join(OUTPUT_FILE);
    write_output(&dest, &output)?;
    log::info!("wrote {} skill entries to {}", records.len(), dest.display());

    Ok(records)
}

/// Parse and validate the skills data file.
pub fn load_records(path: &Path) -> Result<Vec<SkillRecord>> {
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
        let record = SkillRecord::from_value(item, index, path)?;
        log::debug!("skill record {index}: {record:?}");
        records.push(record);
    }
    check_unique(&records, path)?;
    Ok(records)
}

// The generated file's consumer builds one lookup map keyed by id and
// one keyed by shortId; collisions have to be caught before emission.
fn check_unique(records: &[SkillRecord], path: &Path) -> Result<()> {
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
        if !short_ids.insert(record.short_id) {
            return Err(CodegenError::DuplicateKey {
                path: path.to_path_buf(),
                index,
                field: "shortId",
                value: record.short_id.to_string(),
            });
        }
    }
    Ok(())
}

/// Format one skill as an entry block of the generated array literal.
///
/// Values are encoded as JSON scalars, which TypeScript reads verbatim:
/// strings quoted and escaped, integers bare. The layout (including the
/// blank line before `icon`) is fixed.
fn format_entry(record: &SkillRecord) -> String {
    format!(
        "    {{
        id: {id},
        shortId: {short_id},
        name: {name},
        maxLevels: {max_levels},

        icon: {icon},
    }},",
        id = string_literal(&record.id),
        short_id = record.short_id,
        name = string_literal(&record.name),
        max_levels = record.max_levels,
        icon = string_literal(&record.icon),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire_attack() -> SkillRecord {
        SkillRecord {
            id: "fire_attack".to_string(),
            short_id: 1,
            name: "Fire Attack".to_string(),
            max_levels: 5,
            icon: "red".to_string(),
        }
    }

    #[test]
    fn entry_block_layout_is_exact() {
        let expected = "    {
        id: \"fire_attack\",
        shortId: 1,
        name: \"Fire Attack\",
        maxLevels: 5,

        icon: \"red\",
    },";
        assert_eq!(format_entry(&fire_attack()), expected);
    }

    #[test]
    fn entry_values_are_escaped_literals() {
        let record = SkillRecord {
            id: "odd\\id".to_string(),
            short_id: -3,
            name: "He said \"go\"".to_string(),
            max_levels: 1,
            icon: "icons/attack.png".to_string(),
        };
        let entry = format_entry(&record);
        assert!(entry.contains(r#"id: "odd\\id","#));
        assert!(entry.contains("shortId: -3,"));
        assert!(entry.contains(r#"name: "He said \"go\"","#));
        assert!(entry.contains(r#"icon: "icons/attack.png","#));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut second = fire_attack();
        second.short_id = 2;
        let err = check_unique(&[fire_attack(), second], Path::new(DATA_FILE)).unwrap_err();
        match err {
            CodegenError::DuplicateKey {
                index,
                field,
                value,
                ..
            } => {
                assert_eq!(index, 1);
                assert_eq!(field, "id");
                assert_eq!(value, "fire_attack");
            }
            other => panic!("expected DuplicateKey, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_short_ids_are_rejected() {
        let mut second = fire_attack();
        second.id = "water_attack".to_string();
        let err = check_unique(&[fire_attack(), second], Path::new(DATA_FILE)).unwrap_err();
        match err {
            CodegenError::DuplicateKey { field, value, .. } => {
                assert_eq!(field, "shortId");
                assert_eq!(value, "1");
            }
            other => panic!("expected DuplicateKey, got {other:?}"),
        }
    }
}
