use std::path::Path;

use anyhow::Context;

use crate::{
    config::settings::ForestConfig,
    encode::gif::ensure_parent_dir,
    foundation::error::{ForestError, ForestResult},
    grid::{model::ActivityGrid, stats::NormalizationBounds},
};

/// Where the activity grid came from.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridSource {
    File { path: String },
    Synthetic { seed: u64 },
}

/// Summary of one render, written as `meta.json` next to the outputs.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RenderMeta {
    pub source: GridSource,
    pub config: ForestConfig,
    pub columns: usize,
    pub rows: usize,
    pub active_cells: usize,
    pub bounds: NormalizationBounds,
    pub sprites: Vec<String>,
}

impl RenderMeta {
    pub fn new(
        source: GridSource,
        config: &ForestConfig,
        grid: &ActivityGrid,
        bounds: NormalizationBounds,
        sprites: Vec<String>,
    ) -> Self {
        Self {
            source,
            config: config.clone(),
            columns: grid.columns(),
            rows: grid.rows(),
            active_cells: grid.active_cells(),
            bounds,
            sprites,
        }
    }

    pub fn to_json_pretty(&self) -> ForestResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ForestError::serde(format!("serialize render meta: {e}")))
    }

    pub fn write(&self, path: impl AsRef<Path>) -> ForestResult<()> {
        let path = path.as_ref();
        ensure_parent_dir(path)?;
        let json = self.to_json_pretty()?;
        std::fs::write(path, json)
            .with_context(|| format!("write meta '{}'", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/meta.rs"]
mod tests;
