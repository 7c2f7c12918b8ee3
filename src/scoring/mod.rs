//! Scoring: completed lines and the winner.
//!
//! Only classical marks count. A collapse can finish lines for both
//! players at once, which is where the move-index tie-break comes in.

pub mod lines;
pub mod winner;

pub use lines::{completed_line, find_winning_lines, CompletedLine, Line, WINNING_LINES};
pub use winner::determine_winner;
