//! Template loading and marker substitution.

use std::path::{Path, PathBuf};

use crate::error::{CodegenError, Result};
use crate::helpers::read_file;

/// A template source file, read verbatim.
///
/// The path is kept alongside the text so substitution failures can name
/// the file that is missing its marker.
#[derive(Debug, Clone)]
pub struct Template {
    path: PathBuf,
    text: String,
}

impl Template {
    /// Read a template file verbatim.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self {
            path: path.to_path_buf(),
            text: read_file(path)?,
        })
    }

    /// Substitute `replacement` for the marker token.
    ///
    /// The marker must occur exactly once in the template; zero or
    /// repeated occurrences are errors, never a silent no-op.
    pub fn splice(&self, marker: &str, replacement: &str) -> Result<String> {
        match self.text.matches(marker).count() {
            1 => Ok(self.text.replacen(marker, replacement, 1)),
            0 => Err(CodegenError::PlaceholderNotFound {
                path: self.path.clone(),
                marker: marker.to_string(),
            }),
            count => Err(CodegenError::PlaceholderRepeated {
                path: self.path.clone(),
                marker: marker.to_string(),
                count,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(text: &str) -> Template {
        Template {
            path: PathBuf::from("templates/skills.ts"),
            text: text.to_string(),
        }
    }

    #[test]
    fn splice_preserves_surrounding_text() {
        let t = template("before\n%MARKER%\nafter\n");
        let out = t.splice("%MARKER%", "    { id: 1 },").unwrap();
        assert_eq!(out, "before\n    { id: 1 },\nafter\n");
    }

    #[test]
    fn splice_with_empty_replacement_leaves_an_empty_line() {
        let t = template("[\n%MARKER%\n]\n");
        let out = t.splice("%MARKER%", "").unwrap();
        assert_eq!(out, "[\n\n]\n");
    }

    #[test]
    fn missing_marker_is_an_error() {
        let t = template("no marker here\n");
        let err = t.splice("%MARKER%", "x").unwrap_err();
        match err {
            CodegenError::PlaceholderNotFound { marker, path } => {
                assert_eq!(marker, "%MARKER%");
                assert_eq!(path, PathBuf::from("templates/skills.ts"));
            }
            other => panic!("expected PlaceholderNotFound, got {other:?}"),
        }
    }

    #[test]
    fn repeated_marker_is_an_error() {
        let t = template("%MARKER%\n%MARKER%\n");
        let err = t.splice("%MARKER%", "x").unwrap_err();
        match err {
            CodegenError::PlaceholderRepeated { count, .. } => assert_eq!(count, 2),
            other => panic!("expected PlaceholderRepeated, got {other:?}"),
        }
    }
}
