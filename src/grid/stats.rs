use crate::{animation::ease::ease_out_cubic, foundation::math, grid::model::ActivityGrid};

/// Lower bound of the rendered tree height range, in pixels.
pub const MIN_TREE_HEIGHT_PX: f64 = 28.0;
/// Upper bound of the rendered tree height range, in pixels.
pub const MAX_TREE_HEIGHT_PX: f64 = 128.0;

const LOW_PERCENTILE: f64 = 0.10;
const HIGH_PERCENTILE: f64 = 0.95;

/// Percentile-clipped normalization range derived once per grid.
///
/// Invariant: `0 <= low < high`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct NormalizationBounds {
    /// Count at the 10th percentile rank.
    pub low: f64,
    /// Count at the 95th percentile rank, raised to at least `low + 1`.
    pub high: f64,
    /// Largest count.
    pub max: f64,
}

impl NormalizationBounds {
    /// Bounds used when the grid has no positive counts.
    pub const DEGENERATE: Self = Self {
        low: 0.0,
        high: 1.0,
        max: 1.0,
    };

    /// Compute bounds from the strictly positive counts of `grid`.
    #[tracing::instrument(skip(grid), fields(cells = grid.total_cells()))]
    pub fn compute(grid: &ActivityGrid) -> Self {
        let mut vals: Vec<u32> = grid.cells().map(|c| c.count).filter(|&c| c > 0).collect();
        if vals.is_empty() {
            tracing::debug!("no positive counts, using degenerate bounds");
            return Self::DEGENERATE;
        }
        vals.sort_unstable();

        let n = vals.len();
        let low = f64::from(vals[percentile_rank(n, LOW_PERCENTILE)]);
        let high = f64::from(vals[percentile_rank(n, HIGH_PERCENTILE)]);
        let high = high.max(low + 1.0);
        let max = f64::from(vals[n - 1]);

        let bounds = Self { low, high, max };
        tracing::debug!(?bounds, positive = n, "normalization bounds");
        bounds
    }

    /// Rendered height for an activity count under these bounds.
    pub fn height_for(&self, count: u32) -> f64 {
        height_from_count(count, self.low, self.high)
    }
}

/// Index-based percentile rank: `floor(p * (n - 1))`.
fn percentile_rank(n: usize, p: f64) -> usize {
    ((p * (n - 1) as f64).floor() as usize).min(n - 1)
}

/// Map an activity count to a fully-grown tree height in pixels.
///
/// Zero counts map to zero. Positive counts are normalized against `[low, high]`, clamped, eased
/// and mapped into `[MIN_TREE_HEIGHT_PX, MAX_TREE_HEIGHT_PX]`.
pub fn height_from_count(count: u32, low: f64, high: f64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let span = (high - low).max(1e-6);
    let norm = math::clamp01((f64::from(count) - low) / span);
    math::lerp(MIN_TREE_HEIGHT_PX, MAX_TREE_HEIGHT_PX, ease_out_cubic(norm))
}

#[cfg(test)]
#[path = "../../tests/unit/grid/stats.rs"]
mod tests;
