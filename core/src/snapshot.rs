use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only copy of everything a front end may show about a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: Coord2,
    pub status: GameStatus,
    pub total_mines: CellCount,
    pub remaining_mine_estimate: isize,
    pub mines_placed: bool,
    pub cells: Array2<CellView>,
}

impl BoardSnapshot {
    pub fn from_engine<G: MineGenerator>(engine: &GameEngine<G>) -> Self {
        let size = engine.size();
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
            // indices come from `size`, so they fit `Coord` and are in bounds
            engine
                .cell_view((row as Coord, col as Coord))
                .unwrap_or_default()
        });

        Self {
            size,
            status: engine.status(),
            total_mines: engine.total_mines(),
            remaining_mine_estimate: engine.remaining_mine_estimate(),
            mines_placed: engine.mines_placed(),
            cells,
        }
    }

    pub fn cell(&self, coords: Coord2) -> Option<CellView> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = CellView> + '_> + '_ {
        self.cells.rows().into_iter().map(|row| row.into_iter().copied())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::vec::Vec;

    #[test]
    fn snapshot_mirrors_engine_state() {
        let config = GameConfig::new(2, 3, 1).unwrap();
        let mut engine =
            GameEngine::with_generator(config, FixedMineGenerator::new([(1, 2)])).unwrap();
        engine.reveal((0, 0)).unwrap();
        engine.toggle_flag((1, 2)).unwrap();

        let snapshot = engine.snapshot();

        assert_eq!(snapshot.size, (2, 3));
        assert_eq!(snapshot.status, GameStatus::Playing);
        assert_eq!(snapshot.remaining_mine_estimate, 0);
        assert!(snapshot.mines_placed);
        assert_eq!(snapshot.cell((0, 0)), Some(CellView::Open(0)));
        assert_eq!(snapshot.cell((1, 2)), Some(CellView::Flagged));
        assert_eq!(snapshot.cell((2, 0)), None);
    }

    #[test]
    fn rows_iterate_in_board_order() {
        let engine = GameEngine::new(GameConfig::new(2, 3, 1).unwrap(), 0).unwrap();
        let rows: Vec<Vec<CellView>> = engine
            .snapshot()
            .rows()
            .map(|row| row.collect())
            .collect();

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == 3));
        assert!(rows.iter().flatten().all(|&view| view == CellView::Hidden));
    }

    #[test]
    fn snapshot_serializes_for_front_ends() {
        let engine = GameEngine::new(GameConfig::beginner(), 0).unwrap();
        let json = serde_json::to_value(engine.snapshot()).unwrap();

        assert_eq!(json["status"], "NotStarted");
        assert_eq!(json["remaining_mine_estimate"], 10);
        assert_eq!(json["mines_placed"], false);
    }
}
