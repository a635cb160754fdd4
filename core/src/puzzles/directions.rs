//! Puzzles about walking and turning on a compass.

use crate::puzzles::PuzzleError;

const CARDINALS: [&str; 4] = ["N", "E", "S", "W"];

/// Length of a walk compared with the shortest path to the same spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walk {
    pub walked: usize,
    pub shortest: usize,
}

impl Walk {
    pub fn difference(&self) -> usize {
        self.walked - self.shortest
    }
}

/// Every step is one unit in the direction it names. Steps that are not
/// one of `N`, `E`, `S`, `W` still count towards the distance walked.
pub fn directionally_challenged<S: AsRef<str>>(directions: &[S]) -> Walk {
    let count = |wanted: &str| directions.iter().filter(|d| d.as_ref() == wanted).count();
    let shortest = count("N").abs_diff(count("S")) + count("E").abs_diff(count("W"));
    Walk {
        walked: directions.len(),
        shortest,
    }
}

/// Direction faced after applying every `L` (quarter turn left) and `R`
/// (quarter turn right) in `turns`, starting from `facing`.
pub fn final_direction<S: AsRef<str>>(
    facing: &str,
    turns: &[S],
) -> Result<&'static str, PuzzleError> {
    let start = CARDINALS
        .iter()
        .position(|c| *c == facing)
        .ok_or(PuzzleError::Invalid("Facing must be one of 'N', 'E', 'S' or 'W'"))?;

    let quarter_turns = turns.iter().fold(0i64, |acc, turn| match turn.as_ref() {
        "L" => acc - 1,
        "R" => acc + 1,
        _ => acc,
    });

    let index = (start as i64 + quarter_turns).rem_euclid(CARDINALS.len() as i64);
    Ok(CARDINALS[index as usize])
}
