#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod types;

/// Size and mine count for one game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Panics when either dimension is zero. A mine request beyond the board
    /// area is clamped to the area and logged, not rejected, so difficulty
    /// presets stay usable on tiny custom boards.
    pub fn new(size: Coord2, mines: CellCount) -> Self {
        assert!(
            size.0 >= 1 && size.1 >= 1,
            "board dimensions must be at least 1x1"
        );

        let capacity = area(size);
        if mines > capacity {
            log::warn!(
                "requested {} mines but the board only fits {}, clamping",
                mines,
                capacity
            );
        }

        Self::new_unchecked(size, mines.min(capacity))
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked((9, 9), 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked((16, 16), 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked((30, 16), 99)
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_hold_the_classic_values() {
        assert_eq!(GameConfig::beginner().total_cells(), 81);
        assert_eq!(GameConfig::intermediate().mines, 40);
        assert_eq!(GameConfig::expert().size, (30, 16));
    }

    #[test]
    fn oversized_mine_requests_clamp_to_the_area() {
        assert_eq!(GameConfig::new((3, 3), 100).mines, 9);
        assert_eq!(GameConfig::new((3, 3), 9).mines, 9);
        assert_eq!(GameConfig::new((3, 3), 0).mines, 0);
    }

    #[test]
    #[should_panic(expected = "at least 1x1")]
    fn zero_dimension_is_a_caller_bug() {
        GameConfig::new((0, 5), 1);
    }
}
