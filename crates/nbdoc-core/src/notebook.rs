//! Top-level notebook aggregate and metadata
//!
//! A `Notebook` is an ordered list of cells plus document metadata and
//! the fixed nbformat version pair this model targets. Instances are
//! assembled once and treated as immutable values afterwards.

use crate::cell::Cell;
use crate::error::Result;
use serde::Serialize;
use serde_json::Value;

/// Supported nbformat major version
pub const NBFORMAT: i64 = 4;
/// Supported nbformat minor version
pub const NBFORMAT_MINOR: i64 = 5;

/// Language description under notebook metadata
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LanguageInfo {
    /// Programming language name (e.g. "python")
    pub name: String,
}

impl Default for LanguageInfo {
    #[inline]
    fn default() -> Self {
        Self {
            name: "python".to_string(),
        }
    }
}

/// Notebook-level metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct NotebookMetadata {
    /// Language the code cells are written in
    pub language_info: LanguageInfo,
}

/// In-memory representation of a .ipynb document
///
/// Cell order is display/execution order and is preserved exactly
/// through construction and serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notebook {
    /// Ordered cells, mixed variants allowed in any order
    pub cells: Vec<Cell>,
    /// Document metadata
    pub metadata: NotebookMetadata,
    /// Format major version, fixed at [`NBFORMAT`]
    pub nbformat: i64,
    /// Format minor version, fixed at [`NBFORMAT_MINOR`]
    pub nbformat_minor: i64,
}

impl Default for Notebook {
    #[inline]
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Notebook {
    /// Create a notebook from already-validated cells with default metadata
    #[must_use]
    pub fn new(cells: Vec<Cell>) -> Self {
        Self::with_metadata(cells, NotebookMetadata::default())
    }

    /// Create a notebook from already-validated cells and explicit metadata
    #[must_use]
    pub fn with_metadata(cells: Vec<Cell>, metadata: NotebookMetadata) -> Self {
        Self {
            cells,
            metadata,
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
        }
    }

    /// Build a notebook from a sequence of untyped cell records
    ///
    /// Each record is validated against the variant its `cell_type`
    /// discriminator selects; the input order is preserved exactly.
    /// Metadata defaults and the version pair are fixed by this model.
    ///
    /// # Errors
    ///
    /// Returns `SchemaMismatch` on the first record that fails shape or
    /// type validation; no partial notebook is produced.
    pub fn from_records(records: &[Value]) -> Result<Self> {
        let cells = records
            .iter()
            .map(Cell::from_value)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(cells))
    }

    /// Number of cells in the document
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Canonical two-cell example document
    ///
    /// The same markdown-then-code fixture the producer pipeline is shown
    /// as the expected output shape; used by docs and tests.
    #[must_use]
    pub fn example() -> Self {
        Self::new(vec![
            Cell::markdown("## This is an explanation\nHere is some text."),
            Cell::code("import pandas as pd\nprint('Hello World')"),
        ])
    }
}
