//! Strict validation of untyped notebook JSON
//!
//! The serde derive on the model covers serialization only: the wire
//! contract here is stricter than what an internally-tagged derive can
//! express (`deny_unknown_fields` is unsupported on tagged enums), so
//! records are walked by hand and every failure maps to a precise
//! `SchemaMismatch`.
//!
//! Policy, applied consistently: cell records are validated closed-world
//! (a code-only or unknown field on a markdown record is a hard error),
//! while notebook-level and metadata mappings are open-world (unknown
//! keys are ignored, as Jupyter metadata is extensible).

use crate::cell::{Cell, CellType, JsonMap, Output};
use crate::error::{NotebookError, Result};
use crate::notebook::{LanguageInfo, Notebook, NotebookMetadata, NBFORMAT, NBFORMAT_MINOR};
use serde_json::Value;
use std::fs;
use std::path::Path;

const MARKDOWN_FIELDS: &[&str] = &["cell_type", "source", "metadata", "id"];
const CODE_FIELDS: &[&str] = &[
    "cell_type",
    "source",
    "metadata",
    "id",
    "execution_count",
    "outputs",
];

fn mismatch(message: impl Into<String>) -> NotebookError {
    NotebookError::SchemaMismatch(message.into())
}

impl Cell {
    /// Validate a single untyped cell record
    ///
    /// The `cell_type` discriminator selects the variant; the record is
    /// then checked against exactly that variant's field set.
    ///
    /// # Errors
    ///
    /// Returns `SchemaMismatch` when the discriminator is missing or
    /// unknown, `source` is absent or not a sequence of strings, a field
    /// has the wrong type, or the record carries a field its variant does
    /// not allow.
    pub fn from_value(value: &Value) -> Result<Self> {
        let record = value
            .as_object()
            .ok_or_else(|| mismatch("cell record must be a JSON object"))?;

        let kind = match record.get("cell_type") {
            Some(Value::String(s)) => s
                .parse::<CellType>()
                .map_err(NotebookError::SchemaMismatch)?,
            Some(_) => return Err(mismatch("cell_type must be a string")),
            None => return Err(mismatch("cell record is missing cell_type")),
        };

        let source = parse_source(record)?;
        let metadata = parse_cell_metadata(record)?;
        let id = parse_id(record)?;

        match kind {
            CellType::Markdown => {
                reject_unknown_fields(record, MARKDOWN_FIELDS, "markdown")?;
                Ok(Self::Markdown {
                    source,
                    metadata,
                    id,
                })
            }
            CellType::Code => {
                reject_unknown_fields(record, CODE_FIELDS, "code")?;
                Ok(Self::Code {
                    source,
                    metadata,
                    id,
                    execution_count: parse_execution_count(record)?,
                    outputs: parse_outputs(record)?,
                })
            }
        }
    }
}

impl Notebook {
    /// Validate a full untyped notebook document
    ///
    /// # Errors
    ///
    /// Returns `SchemaMismatch` for shape/type failures and
    /// `UnsupportedVersion` when the document's version pair diverges
    /// from (4, 5).
    pub fn from_value(value: &Value) -> Result<Self> {
        let doc = value
            .as_object()
            .ok_or_else(|| mismatch("notebook document must be a JSON object"))?;

        let major = version_field(doc, "nbformat", NBFORMAT)?;
        let minor = version_field(doc, "nbformat_minor", NBFORMAT_MINOR)?;
        if (major, minor) != (NBFORMAT, NBFORMAT_MINOR) {
            return Err(NotebookError::UnsupportedVersion { major, minor });
        }

        let cells = match doc.get("cells") {
            Some(Value::Array(records)) => records
                .iter()
                .map(Cell::from_value)
                .collect::<Result<Vec<_>>>()?,
            Some(_) => return Err(mismatch("cells must be a sequence of cell records")),
            None => return Err(mismatch("notebook document is missing cells")),
        };
        let metadata = parse_notebook_metadata(doc)?;

        log::debug!("validated notebook document with {} cells", cells.len());
        Ok(Self::with_metadata(cells, metadata))
    }
}

/// Parse a notebook document from a JSON string
///
/// # Errors
///
/// Returns an error if the string is not valid JSON or the document
/// fails validation.
#[must_use = "this function returns a validated notebook that should be processed"]
pub fn parse_notebook_from_str(content: &str) -> Result<Notebook> {
    let value: Value = serde_json::from_str(content)?;
    Notebook::from_value(&value)
}

/// Parse a notebook document from a .ipynb file
///
/// # Errors
///
/// Returns an error if the file cannot be read, the content is not
/// valid JSON, or the document fails validation.
#[must_use = "this function returns a validated notebook that should be processed"]
pub fn parse_notebook<P: AsRef<Path>>(path: P) -> Result<Notebook> {
    let content = fs::read_to_string(path)?;
    parse_notebook_from_str(&content)
}

fn parse_source(record: &JsonMap) -> Result<Vec<String>> {
    let lines = match record.get("source") {
        Some(Value::Array(lines)) => lines,
        Some(_) => return Err(mismatch("source must be a sequence of strings")),
        None => return Err(mismatch("cell record is missing source")),
    };
    lines
        .iter()
        .map(|line| {
            line.as_str()
                .map(str::to_owned)
                .ok_or_else(|| mismatch("source lines must be strings"))
        })
        .collect()
}

fn parse_cell_metadata(record: &JsonMap) -> Result<JsonMap> {
    match record.get("metadata") {
        None => Ok(JsonMap::new()),
        Some(Value::Object(map)) => Ok(map.clone()),
        Some(_) => Err(mismatch("cell metadata must be a string-keyed mapping")),
    }
}

fn parse_id(record: &JsonMap) -> Result<Option<String>> {
    match record.get("id") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(mismatch("cell id must be a string")),
    }
}

fn parse_execution_count(record: &JsonMap) -> Result<Option<i32>> {
    match record.get("execution_count") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| mismatch("execution_count must be an integer")),
        Some(_) => Err(mismatch("execution_count must be an integer or null")),
    }
}

fn parse_outputs(record: &JsonMap) -> Result<Vec<Output>> {
    match record.get("outputs") {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => items.iter().map(Output::from_value).collect(),
        Some(_) => Err(mismatch("outputs must be a sequence of output records")),
    }
}

fn reject_unknown_fields(record: &JsonMap, allowed: &[&str], variant: &str) -> Result<()> {
    for key in record.keys() {
        if !allowed.contains(&key.as_str()) {
            return Err(mismatch(format!(
                "field '{key}' is not allowed on a {variant} cell"
            )));
        }
    }
    Ok(())
}

fn version_field(doc: &JsonMap, key: &str, default: i64) -> Result<i64> {
    match doc.get(key) {
        None => Ok(default),
        Some(Value::Number(n)) => n
            .as_i64()
            .ok_or_else(|| mismatch(format!("{key} must be an integer"))),
        Some(_) => Err(mismatch(format!("{key} must be an integer"))),
    }
}

fn parse_notebook_metadata(doc: &JsonMap) -> Result<NotebookMetadata> {
    let map = match doc.get("metadata") {
        None => return Ok(NotebookMetadata::default()),
        Some(Value::Object(map)) => map,
        Some(_) => return Err(mismatch("notebook metadata must be a string-keyed mapping")),
    };
    let language_info = match map.get("language_info") {
        None => LanguageInfo::default(),
        Some(Value::Object(info)) => match info.get("name") {
            None => LanguageInfo::default(),
            Some(Value::String(name)) => LanguageInfo { name: name.clone() },
            Some(_) => return Err(mismatch("language_info.name must be a string")),
        },
        Some(_) => return Err(mismatch("language_info must be a string-keyed mapping")),
    };
    Ok(NotebookMetadata { language_info })
}
