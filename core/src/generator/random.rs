use alloc::vec::Vec;
use ndarray::Array2;
use rand::prelude::*;

use super::BoardGenerator;
use crate::{nd, Board, CellCount, GameConfig};

/// Purely random layout: every arrangement of the requested mines over the
/// board is equally likely. No special treatment of the first reveal, so the
/// opening move can hit a mine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    /// The seed is the only entropy source; the same seed and configuration
    /// always produce the same board.
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Board {
        let total = config.total_cells();

        // full boards need no shuffling
        if config.mines >= total {
            if config.mines > total {
                log::warn!(
                    "board only fits {} mines, requested {}, filling every cell",
                    total,
                    config.mines
                );
            }
            return Board::from_mine_mask(Array2::from_elem(nd(config.size), true));
        }

        // Fisher-Yates over the cell indices; the shuffled prefix is the mine
        // placement, sampled without replacement.
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut indices: Vec<CellCount> = (0..total).collect();
        let (mine_indices, _) = indices.partial_shuffle(&mut rng, config.mines as usize);

        let height = config.size.1 as CellCount;
        let mut mask: Array2<bool> = Array2::default(nd(config.size));
        for &index in mine_indices.iter() {
            let x = (index / height) as usize;
            let y = (index % height) as usize;
            mask[(x, y)] = true;
        }

        Board::from_mine_mask(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coord;

    fn generate(config: GameConfig, seed: u64) -> Board {
        RandomBoardGenerator::new(seed).generate(config)
    }

    fn mined_cells(board: &Board) -> Vec<(Coord, Coord)> {
        let (width, height) = board.size();
        let mut mined = Vec::new();
        for x in 0..width {
            for y in 0..height {
                if board.cell((x, y)).has_mine() {
                    mined.push((x, y));
                }
            }
        }
        mined
    }

    #[test]
    fn exact_mine_count_for_every_seed() {
        for seed in 0..16 {
            let board = generate(GameConfig::beginner(), seed);
            assert_eq!(board.mine_count(), 10);
            assert_eq!(mined_cells(&board).len(), 10);
        }
    }

    #[test]
    fn same_seed_reproduces_the_board() {
        let config = GameConfig::intermediate();

        assert_eq!(generate(config, 42), generate(config, 42));
    }

    #[test]
    fn different_seeds_differ() {
        let config = GameConfig::beginner();

        assert_ne!(generate(config, 1), generate(config, 2));
    }

    #[test]
    fn stored_counts_match_a_brute_force_recount() {
        let board = generate(GameConfig::intermediate(), 42);
        let (width, height) = board.size();

        for x in 0..width {
            for y in 0..height {
                let cell = board.cell((x, y));
                let Some(count) = cell.adjacent_mines() else {
                    continue;
                };
                let recount = board
                    .iter_neighbors((x, y))
                    .filter(|&pos| board.cell(pos).has_mine())
                    .count() as u8;
                assert_eq!(count, recount, "count mismatch at ({x}, {y})");
            }
        }
    }

    #[test]
    fn two_by_two_single_mine_leaves_three_ones() {
        for seed in 0..8 {
            let board = generate(GameConfig::new((2, 2), 1), seed);
            assert_eq!(board.mine_count(), 1);
            assert_eq!(board.total_cells(), 4);

            let (width, height) = board.size();
            for x in 0..width {
                for y in 0..height {
                    let cell = board.cell((x, y));
                    if !cell.has_mine() {
                        assert_eq!(cell.adjacent_mines(), Some(1));
                    }
                }
            }
        }
    }

    #[test]
    fn full_board_config_mines_every_cell() {
        let board = generate(GameConfig::new_unchecked((5, 5), 25), 3);

        assert_eq!(board.mine_count(), 25);
        assert_eq!(board.safe_cell_count(), 0);
        assert_eq!(mined_cells(&board).len(), 25);
    }

    #[test]
    fn oversized_request_is_clamped_to_capacity() {
        let config = GameConfig::new((3, 3), 100);
        assert_eq!(config.mines, 9);

        let board = generate(config, 11);
        assert_eq!(board.mine_count(), 9);
        assert_eq!(board.safe_cell_count(), 0);
    }
}
