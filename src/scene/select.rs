/// Coarse activity tier that restricts which sprite slots may represent a count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// Counts `<= 2`.
    Small,
    /// Counts `3..=6`.
    Medium,
    /// Counts `>= 7`.
    Large,
}

impl Bucket {
    /// Tier for an activity count.
    pub fn for_count(count: u32) -> Self {
        match count {
            0..=2 => Self::Small,
            3..=6 => Self::Medium,
            _ => Self::Large,
        }
    }

    /// Conceptual sprite slots for this tier.
    ///
    /// Slots index the sprite bank modulo its size, so they are not guaranteed to be distinct
    /// sprites when fewer than eight are loaded.
    pub fn slots(self) -> &'static [usize] {
        match self {
            Self::Small => &[0, 1, 2],
            Self::Medium => &[3, 4, 5],
            Self::Large => &[6, 7],
        }
    }
}

/// Sprite choice for one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpriteChoice {
    /// Tier the count fell into.
    pub bucket: Bucket,
    /// Conceptual slot, before wrapping into the sprite bank.
    pub slot: usize,
    /// Mirror the sprite horizontally.
    pub flip: bool,
}

const CELL_MIX: u64 = 17;
const COUNT_MIX: u64 = 13;
const FLIP_MIX: u64 = 2_654_435_761;

/// Pick a sprite slot and orientation for a cell.
///
/// A pure function of `(count, cell_index, seed)`: no generator state, no dependence on frame
/// number or draw order, so a cell keeps its look across every frame it appears in. Arithmetic
/// wraps on `u64` overflow.
pub fn select(count: u32, cell_index: usize, seed: u64) -> SpriteChoice {
    let bucket = Bucket::for_count(count);
    let slots = bucket.slots();
    let idx = cell_index as u64;

    let mix = seed
        .wrapping_add(idx.wrapping_mul(CELL_MIX))
        .wrapping_add(u64::from(count).wrapping_mul(COUNT_MIX));
    let slot = slots[(mix % slots.len() as u64) as usize];

    let flip = (seed.wrapping_add(idx.wrapping_mul(FLIP_MIX)) & 1) == 0;

    SpriteChoice { bucket, slot, flip }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/select.rs"]
mod tests;
