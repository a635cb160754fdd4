//! Puzzles over sequences of numbers or other literals.

use std::collections::BTreeSet;

use crate::literal::Literal;
use crate::puzzles::PuzzleError;

/// Maximum length of a Ducci sequence before giving up.
pub const DUCCI_STEP_LIMIT: usize = 100;

/// Keep each item only while it has appeared fewer than `count` times
/// before.
pub fn remove_extras(count: i64, items: &[Literal]) -> Vec<Literal> {
    items
        .iter()
        .enumerate()
        .filter(|(index, item)| {
            let seen = items[..*index].iter().filter(|prev| prev == item).count();
            (seen as i64) < count
        })
        .map(|(_, item)| item.clone())
        .collect()
}

/// Elements strictly greater than both of their neighbours.
pub fn mini_peaks(numbers: &[Literal]) -> Result<Vec<Literal>, PuzzleError> {
    let values = numbers
        .iter()
        .map(Literal::as_f64)
        .collect::<Option<Vec<f64>>>()
        .ok_or(PuzzleError::Invalid("You must provide a sequence of integers"))?;

    Ok(values
        .windows(3)
        .enumerate()
        .filter(|(_, w)| w[1] > w[0] && w[1] > w[2])
        .map(|(i, _)| numbers[i + 1].clone())
        .collect())
}

/// Sorted intersection and union of two integer lists, without duplicates.
pub fn intersection_union(a: &[i64], b: &[i64]) -> (Vec<i64>, Vec<i64>) {
    let a: BTreeSet<i64> = a.iter().copied().collect();
    let b: BTreeSet<i64> = b.iter().copied().collect();
    (
        a.intersection(&b).copied().collect(),
        a.union(&b).copied().collect(),
    )
}

/// Number of closed intervals `[start, end]` that contain `point`.
pub fn count_overlapping(intervals: &[(i64, i64)], point: i64) -> usize {
    intervals
        .iter()
        .filter(|(start, end)| *start <= point && point <= *end)
        .count()
}

/// Steps of a Ducci sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ducci {
    /// Every tuple produced, starting with the input.
    pub steps: Vec<Vec<i64>>,
    /// False when [`DUCCI_STEP_LIMIT`] cut the sequence short.
    pub finished: bool,
}

/// How the first row of a Ducci sequence was written.
///
/// Every later row is a tuple, and a list never equals a tuple, so a list
/// start can never be the row a sequence repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DucciStart {
    List,
    Tuple,
}

/// Repeatedly replace a tuple by the absolute differences of cyclic
/// neighbours, until it reaches all zeros or repeats an earlier tuple.
pub fn ducci_sequence(start: Vec<i64>, kind: DucciStart) -> Result<Ducci, PuzzleError> {
    let first_comparable = usize::from(kind == DucciStart::List);
    let mut steps = vec![start];

    loop {
        let last = &steps[steps.len() - 1];
        let repeated = steps
            .iter()
            .take(steps.len() - 1)
            .skip(first_comparable)
            .any(|step| step == last);
        if repeated || last.iter().all(|n| *n == 0) {
            return Ok(Ducci {
                steps,
                finished: true,
            });
        }

        let next = ducci_step(last).ok_or(PuzzleError::Invalid("There was an error"))?;
        steps.push(next);

        if steps.len() == DUCCI_STEP_LIMIT {
            return Ok(Ducci {
                steps,
                finished: false,
            });
        }
    }
}

fn ducci_step(tuple: &[i64]) -> Option<Vec<i64>> {
    tuple
        .iter()
        .zip(tuple.iter().cycle().skip(1))
        .map(|(a, b)| a.checked_sub(*b).and_then(i64::checked_abs))
        .collect()
}
