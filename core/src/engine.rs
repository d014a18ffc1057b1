use alloc::collections::{BTreeSet, VecDeque};
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> Playing, on the first reveal (mines are placed here)
/// - Playing -> Won
/// - Playing -> Lost
/// - any -> NotStarted, only through [`GameEngine::reset`]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    NotStarted,
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Owns the canonical board of one game and every state transition on it.
#[derive(Clone, Debug)]
pub struct GameEngine<G = RandomMineGenerator> {
    board: Board,
    status: GameStatus,
    flagged_count: CellCount,
    triggered_mine: Option<Coord2>,
    generator: G,
}

impl GameEngine<RandomMineGenerator> {
    /// New game with uniformly random mines drawn from `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, RandomMineGenerator::new(seed))
    }
}

impl<G: MineGenerator> GameEngine<G> {
    pub fn with_generator(config: GameConfig, generator: G) -> Result<Self> {
        Ok(Self {
            board: Board::new(config)?,
            status: GameStatus::NotStarted,
            flagged_count: 0,
            triggered_mine: None,
            generator,
        })
    }

    /// Discards the current board and starts over, keeping the generator.
    ///
    /// An invalid configuration leaves the current game as it was.
    pub fn reset(&mut self, config: GameConfig) -> Result<()> {
        self.board = Board::new(config)?;
        self.status = GameStatus::NotStarted;
        self.flagged_count = 0;
        self.triggered_mine = None;
        log::debug!("Reset to {}x{} with {} mines", config.rows, config.cols, config.mines);
        Ok(())
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn config(&self) -> &GameConfig {
        self.board.config()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.config().mines
    }

    pub fn mines_placed(&self) -> bool {
        self.board.mines_placed()
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Mines minus flags, negative when the player over-flags.
    pub fn remaining_mine_estimate(&self) -> isize {
        (self.total_mines() as isize) - (self.flagged_count as isize)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.board.revealed_safe_count()
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// True once every safe cell is open; mines need not be flagged.
    pub fn check_win(&self) -> bool {
        self.board.mines_placed()
            && self.board.revealed_safe_count() == self.config().safe_cells()
    }

    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.board.validate_coords(coords)?;
        Ok(self.view_at(coords))
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_engine(self)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        use FlagOutcome::*;

        let coords = self.board.validate_coords(coords)?;
        if self.status.is_finished() {
            return Ok(Ignored);
        }

        let cell = &mut self.board[coords];
        Ok(if cell.revealed {
            Ignored
        } else if cell.flagged {
            cell.flagged = false;
            self.flagged_count -= 1;
            Unflagged
        } else {
            cell.flagged = true;
            self.flagged_count += 1;
            Flagged
        })
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        if self.status.is_finished() || !self.board[coords].is_hidden() {
            return Ok(RevealOutcome::Ignored);
        }

        if self.status.is_initial() {
            self.start(coords)?;
        }

        if self.board[coords].mine {
            self.board[coords].revealed = true;
            self.triggered_mine = Some(coords);
            self.end_game(false);
            return Ok(RevealOutcome::Lost);
        }

        let opened = self.flood_fill(coords);
        log::debug!("Revealed {:?}, {} cells opened", coords, opened);

        if self.check_win() {
            self.end_game(true);
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Continue)
        }
    }

    /// The first reveal places mines around `first` and computes counts.
    fn start(&mut self, first: Coord2) -> Result<()> {
        self.board.place_mines(first, &mut self.generator)?;
        self.board.compute_neighbor_counts()?;
        self.status = GameStatus::Playing;
        log::debug!("Game started at {:?}", first);
        Ok(())
    }

    /// Opens `origin` and, through zero-count cells, the whole connected empty
    /// region with its numbered border. Each cell enters the worklist at most once.
    fn flood_fill(&mut self, origin: Coord2) -> CellCount {
        let mut visited = BTreeSet::from([origin]);
        let mut to_visit = VecDeque::from([origin]);
        let mut opened = 0;

        while let Some(visit_coords) = to_visit.pop_front() {
            let cell = &mut self.board[visit_coords];
            if !cell.is_hidden() || cell.mine {
                log::trace!("Skipping cell at {:?}", visit_coords);
                continue;
            }

            cell.revealed = true;
            opened += 1;
            let count = cell.neighbor_mines;
            log::trace!("Opened cell at {:?}, mine count: {}", visit_coords, count);

            if count == 0 {
                for pos in self.board.iter_neighbors(visit_coords) {
                    if self.board[pos].is_hidden() && visited.insert(pos) {
                        to_visit.push_back(pos);
                    }
                }
            }
        }

        opened
    }

    fn end_game(&mut self, won: bool) {
        if self.status.is_finished() {
            return;
        }

        self.status = if won {
            GameStatus::Won
        } else {
            GameStatus::Lost
        };
        log::debug!("Game ended, status: {:?}", self.status);

        if !won {
            self.disclose_mines();
        }
    }

    /// Reveals every mine; flagged mines keep their flag.
    fn disclose_mines(&mut self) {
        for coords in self.board.positions() {
            if self.board[coords].mine {
                self.board[coords].revealed = true;
            }
        }
    }

    fn view_at(&self, coords: Coord2) -> CellView {
        use CellView::*;

        let cell = self.board[coords];
        let lost = matches!(self.status, GameStatus::Lost);

        match (cell.mine, cell.revealed, cell.flagged) {
            (true, true, _) if self.triggered_mine == Some(coords) => Exploded,
            (true, true, true) => FlaggedMine,
            (true, true, false) => Mine,
            (false, true, _) => Open(cell.neighbor_mines),
            (false, false, true) if lost => WrongFlag,
            (_, false, true) => Flagged,
            (_, false, false) => Hidden,
        }
    }
}
