//! Puzzle commands: raw argument text in, chat reply out.

use once_cell::sync::Lazy;
use regex::Regex;

use num_bigint::BigUint;

use crate::literal::{Literal, parse_literal};
use crate::puzzles::{
    DucciStart, PuzzleError, correct_inequality, count_overlapping, directionally_challenged,
    ducci_sequence, final_direction, intersection_union, left_digit, mini_peaks, mystery_function,
    rearranged_difference, remove_extras,
};

static INT_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\[[0-9,\s]+\])").expect("valid list pattern"));
static INTERVALS_OR_INT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\[[0-9,\s\[\]]+\]|\d+)").expect("valid interval pattern"));

/// Every puzzle command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Puzzle {
    RemoveExtras,
    DirectionallyChallenged,
    MysteryFunction,
    MiniPeaks,
    CompassDirections,
    IntersectionUnion,
    CountOverlapping,
    RearrangedDifference,
    LeftDigit,
    CorrectInequality,
    DucciSequence,
}

impl Puzzle {
    pub const ALL: [Puzzle; 11] = [
        Puzzle::RemoveExtras,
        Puzzle::DirectionallyChallenged,
        Puzzle::MysteryFunction,
        Puzzle::MiniPeaks,
        Puzzle::CompassDirections,
        Puzzle::IntersectionUnion,
        Puzzle::CountOverlapping,
        Puzzle::RearrangedDifference,
        Puzzle::LeftDigit,
        Puzzle::CorrectInequality,
        Puzzle::DucciSequence,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Puzzle::RemoveExtras => "remove_extras",
            Puzzle::DirectionallyChallenged => "directionally_challenged",
            Puzzle::MysteryFunction => "mystery_function",
            Puzzle::MiniPeaks => "mini_peaks",
            Puzzle::CompassDirections => "compass_directions",
            Puzzle::IntersectionUnion => "intersection_union",
            Puzzle::CountOverlapping => "count_overlapping",
            Puzzle::RearrangedDifference => "rearranged_difference",
            Puzzle::LeftDigit => "left_digit",
            Puzzle::CorrectInequality => "correct_inequality",
            Puzzle::DucciSequence => "ducci_sequence",
        }
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Puzzle::RemoveExtras | Puzzle::DirectionallyChallenged => &[],
            Puzzle::MysteryFunction => &[
                "mystery_func",
                "mystery_fun",
                "mysteryfunction",
                "mysteryfunc",
                "mysteryfun",
            ],
            Puzzle::MiniPeaks => &["minipeaks", "peaks"],
            Puzzle::CompassDirections => &["compass", "directions", "compassdirections"],
            Puzzle::IntersectionUnion => &["intersection", "union", "intersectionunion"],
            Puzzle::CountOverlapping => &["countoverlapping", "overlapping"],
            Puzzle::RearrangedDifference => &["rearranged"],
            Puzzle::LeftDigit => &[
                "left",
                "leftdigit",
                "leftmost",
                "left_most",
                "leftmost_digit",
                "left_most_digit",
                "leftmostdigit",
            ],
            Puzzle::CorrectInequality => &["correctinequality", "inequality"],
            Puzzle::DucciSequence => &["ducci"],
        }
    }

    /// Look a puzzle up by its name or one of its aliases.
    pub fn from_name(name: &str) -> Option<Puzzle> {
        Puzzle::ALL
            .into_iter()
            .find(|p| p.name() == name || p.aliases().contains(&name))
    }

    /// Run the puzzle on the raw argument text that followed the command.
    pub fn run(&self, args: &str) -> Result<String, PuzzleError> {
        let args = args.trim();
        match self {
            Puzzle::RemoveExtras => run_remove_extras(args),
            Puzzle::DirectionallyChallenged => run_directionally_challenged(args),
            Puzzle::MysteryFunction => run_mystery_function(args),
            Puzzle::MiniPeaks => run_mini_peaks(args),
            Puzzle::CompassDirections => run_compass_directions(args),
            Puzzle::IntersectionUnion => run_intersection_union(args),
            Puzzle::CountOverlapping => run_count_overlapping(args),
            Puzzle::RearrangedDifference => run_rearranged_difference(args),
            Puzzle::LeftDigit => run_left_digit(args),
            Puzzle::CorrectInequality => run_correct_inequality(args),
            Puzzle::DucciSequence => run_ducci_sequence(args),
        }
    }
}

/// Run a puzzle by name.
pub fn run(name: &str, args: &str) -> Result<String, PuzzleError> {
    Puzzle::from_name(name)
        .ok_or_else(|| PuzzleError::UnknownPuzzle(name.to_string()))?
        .run(args)
}

/// Split off the first whitespace-delimited argument.
fn split_first(args: &str) -> (&str, &str) {
    match args.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim_start()),
        None => (args, ""),
    }
}

fn parse(message: &'static str, input: &str) -> Result<Literal, PuzzleError> {
    parse_literal(input).map_err(|e| PuzzleError::literal(message, input, e))
}

/// Items of a sequence; a string counts as the sequence of its characters.
fn items(literal: Literal) -> Option<Vec<Literal>> {
    match literal {
        Literal::List(items) | Literal::Tuple(items) => Some(items),
        Literal::Str(s) => Some(s.chars().map(|c| Literal::Str(c.to_string())).collect()),
        _ => None,
    }
}

/// Items as strings for comparisons against direction letters.
fn string_items(items: &[Literal]) -> Vec<String> {
    items
        .iter()
        .map(|item| match item {
            Literal::Str(s) => s.clone(),
            other => other.to_string(),
        })
        .collect()
}

fn python_block(call: String, result: impl std::fmt::Display) -> String {
    format!("```py\n>>> {call}\n{result}```")
}

fn run_remove_extras(args: &str) -> Result<String, PuzzleError> {
    const MESSAGE: &str = "You must provide a sequence of literals";

    let (count, raw_literals) = split_first(args);
    let count: i64 = count
        .parse()
        .map_err(|_| PuzzleError::Invalid("Count must be an integer"))?;
    let literals = items(parse(MESSAGE, raw_literals)?).ok_or(PuzzleError::Invalid(MESSAGE))?;

    let result = remove_extras(count, &literals);
    Ok(format!("Result: {}", Literal::List(result)))
}

fn run_directionally_challenged(args: &str) -> Result<String, PuzzleError> {
    const MESSAGE: &str = "You must provide a sequence of strings";

    let directions = items(parse(MESSAGE, args)?).ok_or(PuzzleError::Invalid(MESSAGE))?;
    let walk = directionally_challenged(&string_items(&directions));
    Ok(format!(
        "Your path had a length of `{}`\n\
         The shortest path had a length of `{}`\n\
         The answer was that they have a difference of `{}`",
        walk.walked,
        walk.shortest,
        walk.difference()
    ))
}

fn run_mystery_function(args: &str) -> Result<String, PuzzleError> {
    let result = mystery_function(args)?;
    Ok(python_block(format!("mystery_function({args})"), result))
}

fn run_mini_peaks(args: &str) -> Result<String, PuzzleError> {
    const MESSAGE: &str = "You must provide a sequence of integers";

    let numbers = parse(MESSAGE, args)?;
    let numbers = numbers.as_seq().ok_or(PuzzleError::Invalid(MESSAGE))?;
    let result = mini_peaks(numbers)?;
    Ok(python_block(
        format!("mini_peaks({args})"),
        Literal::List(result),
    ))
}

fn run_compass_directions(args: &str) -> Result<String, PuzzleError> {
    const MESSAGE: &str = "Facing must be a string, directions must be a sequence of strings";

    let (raw_facing, raw_directions) = split_first(args);
    let facing = parse(MESSAGE, raw_facing)?;
    let facing = facing.as_str().ok_or(PuzzleError::Invalid(MESSAGE))?;
    let directions = items(parse(MESSAGE, raw_directions)?).ok_or(PuzzleError::Invalid(MESSAGE))?;
    if !directions.iter().any(|d| d.as_str().is_some()) {
        return Err(PuzzleError::Invalid(MESSAGE));
    }

    let result = final_direction(facing, &string_items(&directions))?;
    Ok(python_block(
        format!("final_direction({raw_facing}, {raw_directions})"),
        result,
    ))
}

fn int_list(literal: &Literal) -> Option<Vec<i64>> {
    literal.as_seq()?.iter().map(Literal::as_int).collect()
}

fn run_intersection_union(args: &str) -> Result<String, PuzzleError> {
    const MESSAGE: &str = "You must provide two lists of integers";

    let lists: Vec<&str> = INT_LIST.find_iter(args).map(|m| m.as_str()).collect();
    let [raw_a, raw_b, ..] = lists.as_slice() else {
        return Err(PuzzleError::Invalid(MESSAGE));
    };
    let a = int_list(&parse(MESSAGE, raw_a)?).ok_or(PuzzleError::Invalid(MESSAGE))?;
    let b = int_list(&parse(MESSAGE, raw_b)?).ok_or(PuzzleError::Invalid(MESSAGE))?;

    let (intersection, union) = intersection_union(&a, &b);
    Ok(python_block(
        format!("intersection_union({a:?}, {b:?})"),
        format!("({intersection:?}, {union:?})"),
    ))
}

fn run_count_overlapping(args: &str) -> Result<String, PuzzleError> {
    const MESSAGE: &str = "You must provide a list of intervals and a point";

    let data: Vec<&str> = INTERVALS_OR_INT
        .find_iter(args)
        .map(|m| m.as_str())
        .collect();
    let [raw_intervals, raw_point, ..] = data.as_slice() else {
        return Err(PuzzleError::Invalid(MESSAGE));
    };
    let intervals = parse(MESSAGE, raw_intervals)?;
    let point = parse(MESSAGE, raw_point)?
        .as_int()
        .ok_or(PuzzleError::Invalid(MESSAGE))?;

    let pairs = intervals
        .as_seq()
        .and_then(|items| {
            items
                .iter()
                .map(|item| match int_list(item)?.as_slice() {
                    [start, end] => Some((*start, *end)),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
        })
        .ok_or(PuzzleError::Invalid("Intervals must be pairs of integers"))?;

    let result = count_overlapping(&pairs, point);
    Ok(python_block(
        format!("count_overlapping({intervals}, {point})"),
        result,
    ))
}

fn run_rearranged_difference(args: &str) -> Result<String, PuzzleError> {
    let (number, _) = split_first(args);
    let number: BigUint = number
        .parse()
        .map_err(|_| PuzzleError::Invalid("You must provide a non-negative integer"))?;
    let result = rearranged_difference(&number);
    Ok(python_block(format!("rearranged_difference({number})"), result))
}

fn run_left_digit(args: &str) -> Result<String, PuzzleError> {
    let (input, _) = split_first(args);
    let result = match left_digit(input) {
        Some(digit) => digit.to_string(),
        None => String::from("None"),
    };
    Ok(python_block(format!("left_digit(\"{input}\")"), result))
}

fn run_correct_inequality(args: &str) -> Result<String, PuzzleError> {
    let result = correct_inequality(args).join("\n");
    Ok(format!("`{args}`\n```py\n{result}\n```"))
}

fn run_ducci_sequence(args: &str) -> Result<String, PuzzleError> {
    const MESSAGE: &str = "There was an error";

    let sequence = parse(MESSAGE, args)?;
    let start = int_list(&sequence).ok_or(PuzzleError::Invalid(MESSAGE))?;
    let kind = match sequence {
        Literal::List(_) => DucciStart::List,
        _ => DucciStart::Tuple,
    };
    let ducci = ducci_sequence(start, kind)?;

    let lines: Vec<String> = ducci
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let repr = if index == 0 {
                sequence.to_string()
            } else {
                Literal::Tuple(step.iter().copied().map(Literal::Int).collect()).to_string()
            };
            format!("{:<4} {}", format!("{}.", index + 1), repr)
        })
        .collect();

    Ok(format!(
        "```py\n{}\n```\n{} {} steps",
        lines.join("\n"),
        if ducci.finished {
            "Finished in"
        } else {
            "Exited after"
        },
        ducci.steps.len()
    ))
}
