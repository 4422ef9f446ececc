//! Cell variants for the notebook document model
//!
//! A notebook is an ordered list of cells, each either explanatory
//! markdown or executable code. The variant is selected by the
//! `cell_type` discriminator in the on-disk JSON.

use crate::error::{NotebookError, Result};
use serde::Serialize;
use serde_json::Value;

/// String-keyed JSON mapping used for cell metadata and output records
pub type JsonMap = serde_json::Map<String, Value>;

/// Type of notebook cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CellType {
    /// Executable code cell
    #[default]
    Code,
    /// Markdown documentation cell
    Markdown,
}

impl std::fmt::Display for CellType {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Code => "code",
            Self::Markdown => "markdown",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for CellType {
    type Err = String;

    // Only the canonical discriminator values are accepted; this doubles
    // as the record validator, so no aliases.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "code" => Ok(Self::Code),
            "markdown" => Ok(Self::Markdown),
            _ => Err(format!("unknown cell type '{s}'. Expected: code, markdown")),
        }
    }
}

/// Type of code-cell output record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputType {
    /// Stream output (stdout/stderr)
    #[default]
    Stream,
    /// Rich display data (images, HTML, etc.)
    DisplayData,
    /// Result of code execution
    ExecuteResult,
    /// Error traceback
    Error,
}

impl std::fmt::Display for OutputType {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Stream => "stream",
            Self::DisplayData => "display_data",
            Self::ExecuteResult => "execute_result",
            Self::Error => "error",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for OutputType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "stream" => Ok(Self::Stream),
            "display_data" => Ok(Self::DisplayData),
            "execute_result" => Ok(Self::ExecuteResult),
            "error" => Ok(Self::Error),
            _ => Err(format!(
                "unknown output type '{s}'. Expected: stream, display_data, execute_result, error"
            )),
        }
    }
}

/// Validated code-cell output record
///
/// The record is kept losslessly as its original JSON object so that
/// parsed notebooks round-trip; construction only checks that the
/// `output_type` discriminator names one of the known kinds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Output(JsonMap);

impl Output {
    /// Validate a JSON value as an output record
    ///
    /// # Errors
    ///
    /// Returns `SchemaMismatch` if the value is not a JSON object or its
    /// `output_type` is missing, non-string, or not a known kind.
    pub fn from_value(value: &Value) -> Result<Self> {
        let record = value.as_object().ok_or_else(|| {
            NotebookError::SchemaMismatch("output record must be a JSON object".to_string())
        })?;
        let kind = record
            .get("output_type")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                NotebookError::SchemaMismatch(
                    "output record is missing a string output_type".to_string(),
                )
            })?;
        kind.parse::<OutputType>()
            .map_err(NotebookError::SchemaMismatch)?;
        Ok(Self(record.clone()))
    }

    /// The record's discriminator
    #[must_use]
    pub fn output_type(&self) -> OutputType {
        // Guaranteed parseable by construction.
        self.0
            .get("output_type")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// The full record as its underlying JSON object
    #[must_use]
    pub fn as_map(&self) -> &JsonMap {
        &self.0
    }
}

/// One unit of a notebook document
///
/// Closed sum over the two supported variants, tagged by `cell_type`
/// in the serialized form. `source` holds Jupyter's per-line storage:
/// each line keeps its trailing newline except the last line of the
/// cell. `metadata` defaults to an empty mapping constructed per cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum Cell {
    /// Explanatory text cell
    Markdown {
        /// Cell text as per-line storage
        source: Vec<String>,
        /// Open-ended cell metadata
        metadata: JsonMap,
        /// Opaque cell identifier, serialized only when present
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
    },
    /// Executable source cell
    Code {
        /// Cell text as per-line storage
        source: Vec<String>,
        /// Open-ended cell metadata
        metadata: JsonMap,
        /// Opaque cell identifier, serialized only when present
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        /// Run order, unset until the cell has been executed
        execution_count: Option<i32>,
        /// Outputs of the last execution, empty at creation
        outputs: Vec<Output>,
    },
}

impl Cell {
    /// Create a markdown cell from flat text
    #[must_use]
    pub fn markdown(text: &str) -> Self {
        Self::Markdown {
            source: split_source(text),
            metadata: JsonMap::new(),
            id: None,
        }
    }

    /// Create an unexecuted code cell from flat text
    #[must_use]
    pub fn code(text: &str) -> Self {
        Self::Code {
            source: split_source(text),
            metadata: JsonMap::new(),
            id: None,
            execution_count: None,
            outputs: Vec::new(),
        }
    }

    /// Attach an identifier to the cell
    #[must_use]
    pub fn with_id(mut self, cell_id: impl Into<String>) -> Self {
        match &mut self {
            Self::Markdown { id, .. } | Self::Code { id, .. } => *id = Some(cell_id.into()),
        }
        self
    }

    /// The cell's discriminator
    #[must_use]
    pub fn cell_type(&self) -> CellType {
        match self {
            Self::Markdown { .. } => CellType::Markdown,
            Self::Code { .. } => CellType::Code,
        }
    }

    /// Cell text in per-line storage form
    #[must_use]
    pub fn source(&self) -> &[String] {
        match self {
            Self::Markdown { source, .. } | Self::Code { source, .. } => source,
        }
    }

    /// Cell text joined back into a flat string
    #[must_use]
    pub fn source_text(&self) -> String {
        self.source().join("")
    }

    /// Cell metadata mapping
    #[must_use]
    pub fn metadata(&self) -> &JsonMap {
        match self {
            Self::Markdown { metadata, .. } | Self::Code { metadata, .. } => metadata,
        }
    }

    /// Cell identifier, if one was assigned
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Markdown { id, .. } | Self::Code { id, .. } => id.as_deref(),
        }
    }
}

/// Split flat text into Jupyter's per-line storage form
///
/// Every line keeps its trailing `\n` except the last when the text does
/// not end with one. Empty text produces an empty (valid) source.
#[must_use]
pub fn split_source(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_owned).collect()
}
