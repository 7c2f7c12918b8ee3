//! Collapse resolution.
//!
//! Two steps, kept separate so bots can inspect a collapse before
//! committing to it:
//!
//! 1. [`collapse_cycle`] works out which move lands on which square.
//! 2. [`apply_collapse`] produces the updated move list and the new
//!    classical marks. The engine then writes those marks onto a copy of
//!    the board.

pub mod map;
pub mod resolver;
pub mod apply;

pub use map::CollapseMap;
pub use resolver::collapse_cycle;
pub use apply::{apply_collapse, AppliedCollapse, NewMarks};
