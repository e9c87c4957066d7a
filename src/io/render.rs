//! Text rendering of a board for terminal output

use crate::board::Placement;
use crate::io::configuration::MAX_RENDERED_SIZE;

/// Marker for a square holding a queen
pub const QUEEN: char = 'Q';
/// Marker for an empty square
pub const EMPTY: char = '.';

/// Draw the board one row per line, squares separated by spaces
///
/// Rows under attack are flagged with a trailing `*` when `conflicted` lists
/// them. Boards larger than [`MAX_RENDERED_SIZE`] are not drawn.
pub fn render_board(placement: &Placement, conflicted: &[usize]) -> Option<String> {
    let n = placement.size();
    if n > MAX_RENDERED_SIZE {
        return None;
    }

    let mut out = String::with_capacity(n * (2 * n + 3));
    for (row, &queen) in placement.columns().iter().enumerate() {
        for column in 0..n {
            if column > 0 {
                out.push(' ');
            }
            out.push(if column == queen { QUEEN } else { EMPTY });
        }
        if conflicted.contains(&row) {
            out.push_str(" *");
        }
        out.push('\n');
    }

    Some(out)
}
