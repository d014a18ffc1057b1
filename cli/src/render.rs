use std::fmt::Write;

use mineboard_core::{BoardSnapshot, CellView, GameStatus};

/// A flag hides whatever is under it, even once mines are disclosed.
pub fn glyph(view: CellView) -> char {
    use CellView::*;
    match view {
        Hidden => '#',
        Flagged | FlaggedMine => 'F',
        WrongFlag => 'x',
        Open(0) => '.',
        // counts never exceed 8
        Open(count) => char::from(b'0' + count),
        Mine => '*',
        Exploded => '@',
    }
}

pub fn status_text(status: GameStatus) -> &'static str {
    match status {
        GameStatus::NotStarted => "Reveal a cell to start",
        GameStatus::Playing => "Playing",
        GameStatus::Won => "You won!",
        GameStatus::Lost => "Game over!",
    }
}

/// Draws the board with row and column labels, then the status line.
pub fn render(snapshot: &BoardSnapshot, elapsed_secs: u64) -> String {
    let (rows, cols) = snapshot.size;
    let width = cols.saturating_sub(1).to_string().len().max(1);
    let label = rows.saturating_sub(1).to_string().len();
    let mut out = String::new();

    let _ = write!(out, "{:label$} ", "");
    for col in 0..cols {
        let _ = write!(out, " {col:>width$}");
    }
    out.push('\n');

    for (row, cells) in snapshot.rows().enumerate() {
        let _ = write!(out, "{row:>label$} ");
        for view in cells {
            let _ = write!(out, " {:>width$}", glyph(view));
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "Mines: {}  Time: {}s  {}",
        snapshot.remaining_mine_estimate,
        elapsed_secs,
        status_text(snapshot.status)
    );
    out
}
