//! Assembly of notebooks from a producer's plan/code stream
//!
//! The external pipeline emits an ordered sequence of (text, kind)
//! pairs: a markdown plan step, optionally followed by the code block
//! implementing it. The builder turns that stream into cells in emission
//! order and fixes the document envelope at the end.

use crate::cell::Cell;
use crate::notebook::{LanguageInfo, Notebook, NotebookMetadata};

/// Incremental notebook assembler
///
/// ## Example
///
/// ```
/// use nbdoc_core::NotebookBuilder;
///
/// let mut builder = NotebookBuilder::new().language("python");
/// builder.push_markdown("## Load the data\n");
/// builder.push_code("import pandas as pd\ndf = pd.read_csv('x.csv')\n");
/// let notebook = builder.finish();
/// assert_eq!(notebook.cell_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NotebookBuilder {
    cells: Vec<Cell>,
    metadata: NotebookMetadata,
}

impl NotebookBuilder {
    /// Create an empty builder with default metadata
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the notebook's language name
    #[must_use]
    pub fn language(mut self, name: &str) -> Self {
        self.metadata.language_info = LanguageInfo {
            name: name.to_string(),
        };
        self
    }

    /// Append a markdown cell built from flat text
    pub fn push_markdown(&mut self, text: &str) -> &mut Self {
        self.cells.push(Cell::markdown(text));
        self
    }

    /// Append an unexecuted code cell built from flat text
    pub fn push_code(&mut self, text: &str) -> &mut Self {
        self.cells.push(Cell::code(text));
        self
    }

    /// Append an already-constructed cell
    pub fn push_cell(&mut self, cell: Cell) -> &mut Self {
        self.cells.push(cell);
        self
    }

    /// Number of cells appended so far
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Finish assembly, fixing the format version pair
    #[must_use]
    pub fn finish(self) -> Notebook {
        Notebook::with_metadata(self.cells, self.metadata)
    }
}
