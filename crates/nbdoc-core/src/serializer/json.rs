//! JSON serialization for `Notebook` documents
//!
//! `Notebook` already implements Serialize with the on-disk field rules
//! (discriminator tag, `id` only when present, `execution_count` and
//! `outputs` always present on code cells), so this is a convenience
//! wrapper with formatting options plus the file entry point.

use crate::error::Result;
use crate::notebook::Notebook;
use serde_json::{to_string, to_string_pretty, Value};
use std::fs;
use std::path::Path;

/// Options for JSON serialization
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JsonOptions {
    /// Pretty-print with indentation (default: true, matching Jupyter's
    /// own writer)
    pub pretty: bool,
}

impl Default for JsonOptions {
    #[inline]
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// JSON serializer for `Notebook` documents
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsonSerializer {
    options: JsonOptions,
}

impl JsonSerializer {
    /// Create a new JSON serializer with default options (pretty-printed)
    #[inline]
    #[must_use = "creates serializer with default options"]
    pub fn new() -> Self {
        Self {
            options: JsonOptions::default(),
        }
    }

    /// Create a new JSON serializer with custom options
    #[inline]
    #[must_use = "creates serializer with custom options"]
    pub const fn with_options(options: JsonOptions) -> Self {
        Self { options }
    }

    /// Serialize a `Notebook` to a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    #[must_use = "this function returns serialized JSON that should be used"]
    pub fn serialize_notebook(&self, notebook: &Notebook) -> Result<String> {
        let json = if self.options.pretty {
            to_string_pretty(notebook)?
        } else {
            to_string(notebook)?
        };
        Ok(json)
    }

    /// Serialize a `Notebook` to compact JSON (no pretty-printing)
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    #[must_use = "this function returns serialized JSON that should be used"]
    pub fn serialize_compact(notebook: &Notebook) -> Result<String> {
        Ok(to_string(notebook)?)
    }
}

/// Serialize a `Notebook` to an in-memory JSON value
///
/// # Errors
///
/// Returns an error if serialization fails.
#[must_use = "this function returns serialized JSON that should be used"]
pub fn to_json(notebook: &Notebook) -> Result<Value> {
    Ok(serde_json::to_value(notebook)?)
}

/// Write a `Notebook` to a UTF-8 .ipynb file
///
/// The document is pretty-printed so the artifact diffs cleanly. Callers
/// that own their file handling can use [`JsonSerializer`] instead and
/// write the string themselves.
///
/// # Errors
///
/// Returns an error if serialization or the file write fails.
pub fn write_notebook<P: AsRef<Path>>(path: P, notebook: &Notebook) -> Result<()> {
    let json = JsonSerializer::new().serialize_notebook(notebook)?;
    fs::write(path.as_ref(), json)?;
    log::debug!(
        "wrote notebook with {} cells to {}",
        notebook.cells.len(),
        path.as_ref().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::NotebookBuilder;

    #[test]
    fn test_json_serialization_basic() {
        let mut builder = NotebookBuilder::new();
        builder.push_markdown("# Hello World\nThis is a test.");
        let notebook = builder.finish();

        let serializer = JsonSerializer::new();
        let json = serializer.serialize_notebook(&notebook).unwrap();

        assert!(json.contains("Hello World"));
        assert!(json.contains("This is a test"));

        // Should be pretty-printed (contains newlines)
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_json_serialization_compact() {
        let mut builder = NotebookBuilder::new();
        builder.push_markdown("# Test");
        let notebook = builder.finish();

        let serializer = JsonSerializer::with_options(JsonOptions { pretty: false });
        let json = serializer.serialize_notebook(&notebook).unwrap();

        assert!(json.contains("Test"));
        assert!(!json.contains("\n  "));
        assert_eq!(json, JsonSerializer::serialize_compact(&notebook).unwrap());
    }

    #[test]
    fn test_id_serialized_only_when_present() {
        let anonymous = to_json(&Notebook::example()).unwrap();
        assert!(anonymous["cells"][0].get("id").is_none());

        let mut builder = NotebookBuilder::new();
        builder.push_cell(crate::cell::Cell::markdown("x").with_id("cell-7"));
        let named = to_json(&builder.finish()).unwrap();
        assert_eq!(named["cells"][0]["id"], "cell-7");
    }

    #[test]
    fn test_code_cell_serialized_shape() {
        let mut builder = NotebookBuilder::new();
        builder.push_code("2 + 2\n");
        let value = to_json(&builder.finish()).unwrap();

        let cell = &value["cells"][0];
        assert_eq!(cell["cell_type"], "code");
        assert!(cell["execution_count"].is_null());
        assert_eq!(cell["outputs"], serde_json::json!([]));
        assert_eq!(cell["metadata"], serde_json::json!({}));
    }

    #[test]
    fn test_json_serializer_default() {
        let default = JsonSerializer::default();
        let new = JsonSerializer::new();
        assert_eq!(default, new);
    }
}
