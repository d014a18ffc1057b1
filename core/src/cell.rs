use serde::{Deserialize, Serialize};

/// Canonical per-cell state owned by the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) mine: bool,
    pub(crate) revealed: bool,
    pub(crate) flagged: bool,
    pub(crate) neighbor_mines: u8,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        self.mine
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    /// Number of adjacent mines, meaningless for mine cells.
    pub const fn neighbor_mine_count(self) -> u8 {
        self.neighbor_mines
    }

    /// Concealed and not flagged, the only state a reveal or flood fill may open.
    pub const fn is_hidden(self) -> bool {
        !self.revealed && !self.flagged
    }
}

/// Player-visible state of a cell.
///
/// Mine identity of concealed cells never leaks through this type: a hidden or
/// flagged cell looks the same whether or not it holds a mine until the game
/// is lost.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Open(u8),
    /// Mine disclosed after a loss.
    Mine,
    /// Mine disclosed after a loss that the player had flagged.
    FlaggedMine,
    /// The mine whose reveal lost the game.
    Exploded,
    /// Flag placed on a safe cell, only reported after a loss.
    WrongFlag,
}

impl CellView {
    pub const fn is_revealed(self) -> bool {
        use CellView::*;
        match self {
            Hidden | Flagged | WrongFlag => false,
            Open(_) | Mine | FlaggedMine | Exploded => true,
        }
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged | Self::FlaggedMine | Self::WrongFlag)
    }

    /// `None` while the cell's contents are still concealed.
    pub const fn is_mine(self) -> Option<bool> {
        use CellView::*;
        match self {
            Hidden | Flagged => None,
            Open(_) | WrongFlag => Some(false),
            Mine | FlaggedMine | Exploded => Some(true),
        }
    }

    pub const fn neighbor_mine_count(self) -> Option<u8> {
        match self {
            Self::Open(count) => Some(count),
            _ => None,
        }
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}
