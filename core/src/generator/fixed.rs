use super::*;

/// Replays a predetermined layout, ignoring the excluded start cell.
///
/// Board validation rejects the layout if it puts a mine on the start cell.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator {
    mines: Vec<Coord2>,
}

impl FixedMineGenerator {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(&mut self, _config: &GameConfig, _exclude: Coord2) -> Vec<Coord2> {
        self.mines.clone()
    }
}
