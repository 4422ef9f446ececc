//! # nbdoc-core
//!
//! Jupyter Notebook (.ipynb, nbformat 4.5) document model for nbdoc_rs.
//!
//! This crate provides a validated, serializable, round-trippable
//! representation of a notebook document:
//! - Markdown and code cell variants behind a closed sum type
//! - Strict shape validation of untyped cell records (`SchemaMismatch`
//!   on the first malformed record, never a partial document)
//! - Assembly from a producer's ordered plan/code stream
//! - Canonical JSON serialization loadable by Jupyter-compatible readers
//!
//! ## Example
//!
//! ```
//! use nbdoc_core::{parse_notebook_from_str, JsonSerializer, NotebookBuilder};
//!
//! let mut builder = NotebookBuilder::new();
//! builder.push_markdown("## Load the data\n");
//! builder.push_code("import pandas as pd\ndf = pd.read_csv('x.csv')\n");
//! let notebook = builder.finish();
//!
//! let json = JsonSerializer::new().serialize_notebook(&notebook)?;
//! assert_eq!(parse_notebook_from_str(&json)?, notebook);
//! # Ok::<(), nbdoc_core::NotebookError>(())
//! ```

/// Assembly of notebooks from producer plan/code pairs
pub mod builder;
/// Cell variants and output records
pub mod cell;
/// Error types for notebook validation and serialization
pub mod error;
/// Top-level notebook aggregate and metadata
pub mod notebook;
/// Strict validation of untyped notebook JSON
pub mod parse;
/// Serializers for notebook documents
pub mod serializer;

pub use builder::NotebookBuilder;
pub use cell::{split_source, Cell, CellType, JsonMap, Output, OutputType};
pub use error::{NotebookError, Result};
pub use notebook::{LanguageInfo, Notebook, NotebookMetadata, NBFORMAT, NBFORMAT_MINOR};
pub use parse::{parse_notebook, parse_notebook_from_str};
pub use serializer::{to_json, write_notebook, JsonOptions, JsonSerializer};
