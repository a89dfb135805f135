/// Single axis of a position or board dimension.
pub type Coord = u16;

/// Count of cells or mines over a whole board.
pub type CellCount = u32;

/// Position `(x, y)` or size `(width, height)`.
pub type Coord2 = (Coord, Coord);

/// Board area as a cell count; saturates instead of overflowing.
pub const fn area(size: Coord2) -> CellCount {
    (size.0 as CellCount).saturating_mul(size.1 as CellCount)
}

pub(crate) const fn nd(coords: Coord2) -> [usize; 2] {
    [coords.0 as usize, coords.1 as usize]
}

const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Iterates the Moore neighborhood of `center` that lies inside `bounds`:
/// 8 positions for an interior cell, 5 on an edge, 3 in a corner.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dx, dy)| {
        let x = center.0 as i32 + dx;
        let y = center.1 as i32 + dy;
        let in_bounds = x >= 0 && y >= 0 && x < bounds.0 as i32 && y < bounds.1 as i32;
        in_bounds.then(|| (x as Coord, y as Coord))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let all: Vec<Coord2> = neighbors((1, 1), (3, 3)).collect();
        assert_eq!(all.len(), 8);
        assert!(!all.contains(&(1, 1)));
    }

    #[test]
    fn corner_and_edge_cells_are_bounds_checked() {
        assert_eq!(neighbors((0, 0), (3, 3)).count(), 3);
        assert_eq!(neighbors((1, 0), (3, 3)).count(), 5);
        assert_eq!(neighbors((2, 2), (3, 3)).count(), 3);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(neighbors((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn area_saturates() {
        assert_eq!(area((3, 3)), 9);
        assert_eq!(area((0, 9)), 0);
        assert_eq!(area((Coord::MAX, Coord::MAX)), 4_294_836_225);
    }
}
