//! Typed record shapes for the JSON data files.
//!
//! Records are built by a validating parse over `serde_json::Value`
//! rather than a straight serde deserialize: the diagnostics must name
//! the offending record and field, which serde's own errors do not
//! carry. The serde derives remain so records round-trip to the
//! canonical camelCase JSON shape (the fixture tests rely on this).

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CodegenError, Result};
use crate::helpers::{integer_field, json_type_name, string_field};

/// One skill as it appears in `skills.json`.
///
/// `name` carries whatever the data file holds; the webapp treats it as
/// a key into its localization layer, so it is passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecord {
    pub id: String,
    pub short_id: i64,
    pub name: String,
    pub max_levels: i64,
    pub icon: String,
}

impl SkillRecord {
    /// Validate one element of the top-level array.
    ///
    /// `index` and `path` feed diagnostics only. Fields are checked in
    /// declaration order, so the first bad field is the one reported.
    /// Unknown extra fields are ignored.
    pub(crate) fn from_value(value: &Value, index: usize, path: &Path) -> Result<Self> {
        let obj = match value.as_object() {
            Some(obj) => obj,
            None => {
                return Err(CodegenError::MalformedRecord {
                    path: path.to_path_buf(),
                    index,
                    found: json_type_name(value),
                })
            }
        };
        Ok(Self {
            id: string_field(obj, "id", index, path)?,
            short_id: integer_field(obj, "shortId", index, path)?,
            name: string_field(obj, "name", index, path)?,
            max_levels: integer_field(obj, "maxLevels", index, path)?,
            icon: string_field(obj, "icon", index, path)?,
        })
    }
}

/// One rampage skill as it appears in `rampage_skills.json`.
///
/// Unlike regular skills, the compact identifier is a string (the data
/// uses prefixed codes like `"fib1"` alongside plain numerals) and there
/// is no level cap or icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RampageSkillRecord {
    pub id: String,
    pub short_id: String,
    pub name: String,
}

impl RampageSkillRecord {
    /// Validate one element of the top-level array.
    pub(crate) fn from_value(value: &Value, index: usize, path: &Path) -> Result<Self> {
        let obj = match value.as_object() {
            Some(obj) => obj,
            None => {
                return Err(CodegenError::MalformedRecord {
                    path: path.to_path_buf(),
                    index,
                    found: json_type_name(value),
                })
            }
        };
        Ok(Self {
            id: string_field(obj, "id", index, path)?,
            short_id: string_field(obj, "shortId", index, path)?,
            name: string_field(obj, "name", index, path)?,
        })
    }
}
