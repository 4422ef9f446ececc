//! Notebook serialization module
//!
//! This module provides serializers for writing `Notebook` documents in
//! the on-disk .ipynb JSON format.

pub mod json;

pub use json::{to_json, write_notebook, JsonOptions, JsonSerializer};
