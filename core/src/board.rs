use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::{nd, neighbors, Cell, CellContent, CellCount, Coord, Coord2, GameError, Result};

/// The minefield: an H x W grid of cells with the mine total cached. Built
/// once per game by a generator, mutated in place by the session, replaced
/// wholesale on restart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    /// Builds a board from a mine mask, deriving every safe cell's neighbor
    /// mine count: each mined cell increments its safe Moore neighbors, and
    /// mined neighbors are skipped.
    pub fn from_mine_mask(mines: Array2<bool>) -> Self {
        let dim = mines.dim();
        let size: Coord2 = (dim.0 as Coord, dim.1 as Coord);
        let mut cells: Array2<Cell> = Array2::default(dim);
        let mut mine_count: CellCount = 0;

        for ((x, y), &is_mine) in mines.indexed_iter() {
            if !is_mine {
                continue;
            }
            mine_count += 1;
            cells[(x, y)].content = CellContent::Mine;
            for pos in neighbors((x as Coord, y as Coord), size) {
                if let CellContent::Safe(count) = &mut cells[nd(pos)].content {
                    *count += 1;
                }
            }
        }

        Self { cells, mine_count }
    }

    /// Builds a board with mines at exactly the listed positions. A position
    /// outside `size` is rejected, not clamped.
    pub fn with_mines(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mask: Array2<bool> = Array2::default(nd(size));

        for &pos in mine_coords {
            if pos.0 >= size.0 || pos.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mask[nd(pos)] = true;
        }

        Ok(Self::from_mine_mask(mask))
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0 as Coord, dim.1 as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// The win target: revealing this many cells clears the board.
    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    /// Copies out one cell. Panics when `coords` lies outside the board;
    /// callers are responsible for issuing in-bounds positions.
    pub fn cell(&self, coords: Coord2) -> Cell {
        self.cells[nd(coords)]
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[nd(coords)]
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> {
        neighbors(coords, self.size())
    }
}

impl core::ops::Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[nd(coords)]
    }
}
