use std::{fs::File, io::BufReader, path::Path};

use crate::foundation::error::{ForestError, ForestResult};

/// Rectangular per-day activity matrix: columns are weeks, rows are days.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ActivityGrid {
    columns: Vec<Vec<u32>>,
    rows: usize,
}

/// One cell of the grid in iteration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCell {
    /// Column (week) index.
    pub column: usize,
    /// Row (day) index.
    pub row: usize,
    /// Linear index, column-major over all cells including zero-count ones.
    pub index: usize,
    /// Activity count.
    pub count: u32,
}

impl ActivityGrid {
    /// Validate and build a grid from raw columns.
    ///
    /// Fails on ragged columns, negative counts, counts above `u32::MAX`, or columns without rows.
    pub fn new(columns: Vec<Vec<i64>>) -> ForestResult<Self> {
        let rows = columns.first().map(Vec::len).unwrap_or(0);
        if !columns.is_empty() && rows == 0 {
            return Err(ForestError::validation("activity grid columns must have >= 1 row"));
        }

        let mut out = Vec::with_capacity(columns.len());
        for (c, col) in columns.into_iter().enumerate() {
            if col.len() != rows {
                return Err(ForestError::validation(format!(
                    "activity grid is not rectangular: column {c} has {} rows, expected {rows}",
                    col.len()
                )));
            }
            let mut counts = Vec::with_capacity(rows);
            for (r, v) in col.into_iter().enumerate() {
                let v = u32::try_from(v).map_err(|_| {
                    ForestError::validation(format!(
                        "activity count at column {c}, row {r} is out of range: {v}"
                    ))
                })?;
                counts.push(v);
            }
            out.push(counts);
        }

        Ok(Self { columns: out, rows })
    }

    /// Build from already non-negative columns.
    pub fn from_counts(columns: Vec<Vec<u32>>) -> ForestResult<Self> {
        Self::new(
            columns
                .into_iter()
                .map(|col| col.into_iter().map(i64::from).collect())
                .collect(),
        )
    }

    /// Parse a JSON array of columns (`[[0, 3, ...], ...]`).
    pub fn from_reader<R: std::io::Read>(r: R) -> ForestResult<Self> {
        let columns: Vec<Vec<i64>> = serde_json::from_reader(r)
            .map_err(|e| ForestError::serde(format!("parse activity grid JSON: {e}")))?;
        Self::new(columns)
    }

    /// Parse a JSON grid file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> ForestResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ForestError::validation(format!("open activity grid '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Number of columns (weeks).
    pub fn columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows (days) per column.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total cell count, including zero-count cells.
    pub fn total_cells(&self) -> usize {
        self.columns.len() * self.rows
    }

    /// Iterate cells column-outer, row-inner, assigning linear indices over every cell.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        let rows = self.rows;
        self.columns.iter().enumerate().flat_map(move |(column, col)| {
            col.iter().enumerate().map(move |(row, &count)| GridCell {
                column,
                row,
                index: column * rows + row,
                count,
            })
        })
    }

    /// Number of cells with a positive count.
    pub fn active_cells(&self) -> usize {
        self.cells().filter(|c| c.count > 0).count()
    }

    /// Reshape to `weeks x days`.
    ///
    /// Keeps the most recent `weeks` columns (dropping from the front) and pads missing weeks
    /// with zero columns at the front. Each column is truncated or zero-padded to `days`.
    pub fn fit(&self, weeks: usize, days: usize) -> ForestResult<Self> {
        if weeks == 0 || days == 0 {
            return Err(ForestError::validation("fit target must be at least 1x1"));
        }

        let skip = self.columns.len().saturating_sub(weeks);
        let pad = weeks.saturating_sub(self.columns.len());

        let mut out = Vec::with_capacity(weeks);
        out.extend(std::iter::repeat_n(vec![0u32; days], pad));
        for col in self.columns.iter().skip(skip) {
            let mut c: Vec<u32> = col.iter().copied().take(days).collect();
            c.resize(days, 0);
            out.push(c);
        }

        Ok(Self {
            columns: out,
            rows: days,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/model.rs"]
mod tests;
