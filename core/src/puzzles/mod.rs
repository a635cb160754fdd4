//! Text puzzles.
//!
//! Each puzzle is a plain function over typed arguments (see the submodules),
//! plus a [`Puzzle`] command that reads the raw argument text, runs the
//! function and formats the reply.
//!
//! ```
//! use stackbot_core::puzzles::{self, Puzzle};
//!
//! assert_eq!(Puzzle::from_name("peaks"), Some(Puzzle::MiniPeaks));
//! assert_eq!(
//!     puzzles::run("mystery_func", "152").unwrap(),
//!     "```py\n>>> mystery_function(152)\n10```"
//! );
//! ```

mod commands;
mod digits;
mod directions;
mod error;
mod inequality;
mod sequences;

#[cfg(test)]
mod commands_test;

pub use commands::{Puzzle, run};
pub use digits::{left_digit, mystery_function, rearranged_difference};
pub use directions::{Walk, directionally_challenged, final_direction};
pub use error::PuzzleError;
pub use inequality::correct_inequality;
pub use sequences::{
    DUCCI_STEP_LIMIT, Ducci, DucciStart, count_overlapping, ducci_sequence, intersection_union,
    mini_peaks, remove_extras,
};
