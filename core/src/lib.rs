#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod snapshot;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(rows, cols, mines);
        config.validate()?;
        Ok(config)
    }

    /// Requires a non-empty grid and `0 < mines < rows * cols`, so at least one safe cell exists.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GameError::InvalidConfiguration("board must have rows and columns"));
        }
        if self.mines == 0 {
            return Err(GameError::InvalidConfiguration("at least one mine is required"));
        }
        if self.mines >= self.total_cells() {
            return Err(GameError::InvalidConfiguration("too many mines for the board"));
        }
        Ok(())
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked(9, 9, 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked(16, 16, 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked(16, 30, 99)
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::beginner()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    Ignored,
    Flagged,
    Unflagged,
}

impl FlagOutcome {
    /// Whether this outcome changed anything worth redrawing
    pub const fn has_update(self) -> bool {
        match self {
            Self::Ignored => false,
            Self::Flagged | Self::Unflagged => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Stale click: the cell was already open or flagged, or the game is over.
    Ignored,
    Continue,
    Won,
    Lost,
}

impl RevealOutcome {
    /// Whether this outcome changed anything worth redrawing
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            Ignored => false,
            Continue => true,
            Won => true,
            Lost => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for config in [
            GameConfig::beginner(),
            GameConfig::intermediate(),
            GameConfig::expert(),
        ] {
            assert_eq!(config.validate(), Ok(()));
        }
        assert_eq!(GameConfig::default(), GameConfig::new(9, 9, 10).unwrap());
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert!(matches!(
            GameConfig::new(0, 9, 1),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            GameConfig::new(9, 0, 1),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn mine_count_must_leave_a_safe_cell() {
        assert!(GameConfig::new(3, 3, 0).is_err());
        assert!(GameConfig::new(3, 3, 9).is_err());
        assert!(GameConfig::new(3, 3, 8).is_ok());
    }

    #[test]
    fn largest_board_does_not_overflow() {
        let config = GameConfig::new(255, 255, 1000).unwrap();
        assert_eq!(config.total_cells(), 65025);
        assert_eq!(config.safe_cells(), 64025);
    }

    #[test]
    fn ignored_outcomes_do_not_request_redraw() {
        assert!(!RevealOutcome::Ignored.has_update());
        assert!(RevealOutcome::Continue.has_update());
        assert!(!FlagOutcome::Ignored.has_update());
        assert!(FlagOutcome::Unflagged.has_update());
    }
}
