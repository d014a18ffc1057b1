use core::ops::{Index, IndexMut};
use ndarray::Array2;

use crate::*;

/// Rectangular grid of cells with fixed dimensions for the lifetime of one game.
///
/// The board exposes mine identity and is therefore never handed to the
/// presentation layer; [`GameEngine`] only lends out [`CellView`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    config: GameConfig,
    cells: Array2<Cell>,
    mines_placed: bool,
    counts_computed: bool,
}

impl Board {
    /// Allocates every cell concealed, unflagged and mine-free.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            cells: Array2::default(config.size().to_nd_index()),
            mines_placed: false,
            counts_computed: false,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    /// Places the generator's layout, refusing it unless it has exactly
    /// `config.mines` distinct in-bounds positions that avoid `exclude`.
    ///
    /// The board is left untouched on any error.
    pub fn place_mines<G: MineGenerator>(&mut self, exclude: Coord2, mut generator: G) -> Result<()> {
        if self.mines_placed {
            return Err(GameError::AlreadyInitialized);
        }
        let exclude = self.validate_coords(exclude)?;

        let layout = generator.generate(&self.config, exclude);
        if layout.len() != usize::from(self.config.mines) {
            log::warn!(
                "Generator produced {} mines, expected {}",
                layout.len(),
                self.config.mines
            );
            return Err(GameError::InvalidLayout);
        }

        let mut mask: Array2<bool> = Array2::default(self.size().to_nd_index());
        for &coords in &layout {
            if coords == exclude || self.validate_coords(coords).is_err() {
                return Err(GameError::InvalidLayout);
            }
            let slot = &mut mask[coords.to_nd_index()];
            if *slot {
                return Err(GameError::InvalidLayout);
            }
            *slot = true;
        }

        for (cell, &mine) in self.cells.iter_mut().zip(mask.iter()) {
            cell.mine = mine;
        }
        self.mines_placed = true;
        log::debug!("Placed {} mines, start cell {:?} kept safe", layout.len(), exclude);
        Ok(())
    }

    /// Stores, for every safe cell, how many of its in-bounds neighbors hold a mine.
    pub fn compute_neighbor_counts(&mut self) -> Result<()> {
        if !self.mines_placed {
            return Err(GameError::MinesNotPlaced);
        }

        for coords in self.positions() {
            let count = if self[coords].mine {
                0
            } else {
                self.adjacent_mine_count(coords)
            };
            self[coords].neighbor_mines = count;
        }
        self.counts_computed = true;
        Ok(())
    }

    pub fn counts_computed(&self) -> bool {
        self.counts_computed
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most eight neighbors, so the count always fits
        self.iter_neighbors(coords).filter(|&pos| self[pos].mine).count() as u8
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_cells(|cell| cell.mine)
    }

    pub fn flagged_count(&self) -> CellCount {
        self.count_cells(|cell| cell.flagged)
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.count_cells(|cell| cell.revealed && !cell.mine)
    }

    fn count_cells(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        // cell totals are bounded by `mult`, which fits `CellCount`
        self.cells.iter().filter(|&cell| predicate(cell)).count() as CellCount
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: Coord, cols: Coord, mines: CellCount) -> Board {
        Board::new(GameConfig::new_unchecked(rows, cols, mines)).unwrap()
    }

    #[test]
    fn new_board_is_blank() {
        let board = board(4, 6, 5);
        assert_eq!(board.size(), (4, 6));
        assert!(!board.mines_placed());
        assert_eq!(board.mine_count(), 0);
        assert!(board.positions().all(|pos| board[pos] == Cell::default()));
        assert_eq!(board.positions().count(), 24);
    }

    #[test]
    fn new_rejects_invalid_configuration() {
        let err = Board::new(GameConfig::new_unchecked(2, 2, 4)).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration(_)));
    }

    #[test]
    fn random_placement_keeps_start_cell_safe() {
        for seed in 0..20 {
            let mut board = board(9, 9, 10);
            board
                .place_mines((0, 0), RandomMineGenerator::new(seed))
                .unwrap();
            assert_eq!(board.mine_count(), 10);
            assert!(!board[(0, 0)].is_mine());
        }
    }

    #[test]
    fn second_placement_is_rejected() {
        let mut board = board(3, 3, 1);
        board.place_mines((0, 0), FixedMineGenerator::new([(2, 2)])).unwrap();

        let err = board.place_mines((0, 0), FixedMineGenerator::new([(1, 1)]));

        assert_eq!(err, Err(GameError::AlreadyInitialized));
        assert!(board[(2, 2)].is_mine());
        assert!(!board[(1, 1)].is_mine());
    }

    #[test]
    fn rejects_layout_on_excluded_cell() {
        let mut board = board(3, 3, 1);
        let err = board.place_mines((1, 1), FixedMineGenerator::new([(1, 1)]));
        assert_eq!(err, Err(GameError::InvalidLayout));
        assert!(!board.mines_placed());
        assert_eq!(board.mine_count(), 0);
    }

    #[test]
    fn rejects_duplicate_or_out_of_bounds_layouts() {
        let mut board = board(3, 3, 2);
        assert_eq!(
            board.place_mines((0, 0), FixedMineGenerator::new([(1, 1), (1, 1)])),
            Err(GameError::InvalidLayout)
        );
        assert_eq!(
            board.place_mines((0, 0), FixedMineGenerator::new([(1, 1), (3, 0)])),
            Err(GameError::InvalidLayout)
        );
        assert_eq!(
            board.place_mines((0, 0), FixedMineGenerator::new([(1, 1)])),
            Err(GameError::InvalidLayout)
        );
        assert_eq!(board.mine_count(), 0);
    }

    #[test]
    fn out_of_bounds_exclude_is_reported() {
        let mut board = board(3, 3, 1);
        assert_eq!(
            board.place_mines((3, 3), RandomMineGenerator::new(0)),
            Err(GameError::OutOfBounds)
        );
    }

    #[test]
    fn counts_require_mines() {
        let mut board = board(3, 3, 1);
        assert_eq!(board.compute_neighbor_counts(), Err(GameError::MinesNotPlaced));
    }

    #[test]
    fn counts_include_diagonals_and_respect_edges() {
        // . * .
        // . . .
        // * . *
        let mut board = board(3, 3, 3);
        board
            .place_mines((1, 1), FixedMineGenerator::new([(0, 1), (2, 0), (2, 2)]))
            .unwrap();
        board.compute_neighbor_counts().unwrap();

        assert!(board.counts_computed());
        assert_eq!(board[(0, 0)].neighbor_mine_count(), 1);
        assert_eq!(board[(0, 2)].neighbor_mine_count(), 1);
        assert_eq!(board[(1, 0)].neighbor_mine_count(), 2);
        assert_eq!(board[(1, 1)].neighbor_mine_count(), 3);
        assert_eq!(board[(1, 2)].neighbor_mine_count(), 2);
        assert_eq!(board[(2, 1)].neighbor_mine_count(), 2);
    }

    #[test]
    fn random_counts_match_brute_force() {
        let mut board = board(12, 7, 20);
        board.place_mines((6, 3), RandomMineGenerator::new(42)).unwrap();
        board.compute_neighbor_counts().unwrap();

        for (row, col) in board.positions() {
            if board[(row, col)].is_mine() {
                continue;
            }
            let mut expected = 0;
            for r in row.saturating_sub(1)..=(row + 1).min(11) {
                for c in col.saturating_sub(1)..=(col + 1).min(6) {
                    if (r, c) != (row, col) && board[(r, c)].is_mine() {
                        expected += 1;
                    }
                }
            }
            assert_eq!(board[(row, col)].neighbor_mine_count(), expected);
        }
    }
}
