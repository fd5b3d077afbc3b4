//! Shared helpers for record validation, literal encoding, and file I/O.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{CodegenError, Result};

/// Human-readable name for a JSON value's type, used in diagnostics.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Extract a required string field from a record object.
pub(crate) fn string_field(
    obj: &Map<String, Value>,
    field: &'static str,
    index: usize,
    path: &Path,
) -> Result<String> {
    match obj.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(type_error(path, index, field, "string", json_type_name(other))),
        None => Err(type_error(path, index, field, "string", "missing")),
    }
}

/// Extract a required integer field from a record object.
///
/// A JSON number with a fractional part is rejected, not truncated.
pub(crate) fn integer_field(
    obj: &Map<String, Value>,
    field: &'static str,
    index: usize,
    path: &Path,
) -> Result<i64> {
    match obj.get(field) {
        Some(Value::Number(n)) => n
            .as_i64()
            .ok_or_else(|| type_error(path, index, field, "integer", "non-integer number")),
        Some(other) => Err(type_error(path, index, field, "integer", json_type_name(other))),
        None => Err(type_error(path, index, field, "integer", "missing")),
    }
}

fn type_error(
    path: &Path,
    index: usize,
    field: &'static str,
    expected: &'static str,
    found: &str,
) -> CodegenError {
    CodegenError::TypeValidation {
        path: path.to_path_buf(),
        index,
        field,
        expected,
        found: found.to_string(),
    }
}

/// Encode a string as a quoted, escaped source literal.
///
/// JSON string syntax is a subset of TypeScript string syntax, so the
/// JSON encoder doubles as the literal escaper.
pub(crate) fn string_literal(s: &str) -> String {
    Value::from(s).to_string()
}

/// Read a file into memory, wrapping failures with the offending path.
pub(crate) fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CodegenError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrite `path` with fully-rendered output, creating the parent
/// directory if it does not exist yet.
pub(crate) fn write_output(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| CodegenError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(path, text).map_err(|source| CodegenError::Io {
        path: path.to_path_buf(),
        source,
    })
}
