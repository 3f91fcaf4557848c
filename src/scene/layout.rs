use crate::foundation::core::{Point, Rect};

/// Fixed pixel layout of the activity grid on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridLayout {
    /// Side of one square cell, in pixels.
    pub cell_px: u32,
    /// Left edge of the grid.
    pub origin_x: u32,
    /// Top edge of the grid.
    pub origin_y: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            cell_px: 16,
            origin_x: 90,
            origin_y: 250,
        }
    }
}

/// Vertical anchor inside a cell, as a fraction of the cell height.
const ANCHOR_Y_FRAC: f64 = 0.92;

impl GridLayout {
    /// Bottom-center point where a tree in `(column, row)` is planted.
    pub fn anchor(&self, column: usize, row: usize) -> Point {
        let cell = f64::from(self.cell_px);
        Point::new(
            f64::from(self.origin_x) + column as f64 * cell + cell * 0.5,
            f64::from(self.origin_y) + row as f64 * cell + cell * ANCHOR_Y_FRAC,
        )
    }

    /// Pixel bounds covered by a `columns x rows` grid.
    pub fn bounds(&self, columns: usize, rows: usize) -> Rect {
        let cell = f64::from(self.cell_px);
        let x0 = f64::from(self.origin_x);
        let y0 = f64::from(self.origin_y);
        Rect::new(x0, y0, x0 + columns as f64 * cell, y0 + rows as f64 * cell)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/layout.rs"]
mod tests;
