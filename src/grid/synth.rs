use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::{
    foundation::error::{ForestError, ForestResult},
    grid::model::ActivityGrid,
};

/// Deterministic stand-in grid used when no real activity data is available.
///
/// Activity follows a yearly sine swell with skewed per-day noise and rare bursts. The same
/// `(seed, weeks, days)` always yields the same grid.
pub fn synthetic_grid(seed: u64, weeks: usize, days: usize) -> ForestResult<ActivityGrid> {
    if weeks == 0 || days == 0 {
        return Err(ForestError::validation(
            "synthetic grid must be at least 1x1",
        ));
    }

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut columns = Vec::with_capacity(weeks);
    for w in 0..weeks {
        let phase = (w as f64 / weeks as f64) * std::f64::consts::TAU;
        let seasonal = 0.5 + 0.5 * phase.sin();
        let mut col = Vec::with_capacity(days);
        for _ in 0..days {
            let base = rng.random::<f64>().powf(1.8);
            let mut c = ((base * seasonal + 0.15 * rng.random::<f64>()) * 18.0) as u32;
            if rng.random::<f64>() < 0.035 {
                c += 18 + (rng.random::<f64>() * 22.0) as u32;
            }
            col.push(c);
        }
        columns.push(col);
    }

    ActivityGrid::from_counts(columns)
}

#[cfg(test)]
#[path = "../../tests/unit/grid/synth.rs"]
mod tests;
