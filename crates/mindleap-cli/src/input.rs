//! Loading graph model definitions from disk.

use std::path::Path;

use mindleap_core::GraphModel;

use crate::error::{CliError, Result};

/// Read a graph model from a JSON file.
pub fn read_graph_model(path: &Path) -> Result<GraphModel> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a graph model and check it against the schema rules.
pub fn read_valid_graph_model(path: &Path) -> Result<GraphModel> {
    let model = read_graph_model(path)?;
    model.validate()?;
    Ok(model)
}
