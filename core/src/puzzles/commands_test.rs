//! Tests for the puzzle commands' argument handling and replies.

use super::*;
use crate::literal::LiteralError;
use pretty_assertions::assert_eq;

fn reply(name: &str, args: &str) -> String {
    run(name, args).unwrap_or_else(|e| panic!("{name} {args:?} failed: {e}"))
}

fn refusal(name: &str, args: &str) -> String {
    match run(name, args) {
        Ok(reply) => panic!("{name} {args:?} unexpectedly replied {reply:?}"),
        Err(err) => err.to_string(),
    }
}

#[test]
fn test_every_name_and_alias_resolves() {
    for puzzle in Puzzle::ALL {
        assert_eq!(Puzzle::from_name(puzzle.name()), Some(puzzle));
        for alias in puzzle.aliases() {
            assert_eq!(Puzzle::from_name(alias), Some(puzzle));
        }
    }
    assert_eq!(Puzzle::from_name("nope"), None);
}

#[test]
fn test_unknown_puzzle() {
    assert_eq!(refusal("nope", ""), "Unknown puzzle 'nope'");
}

#[test]
fn test_remove_extras() {
    assert_eq!(reply("remove_extras", "1 [1, 1, 2, 3, 2]"), "Result: [1, 2, 3]");
    assert_eq!(
        reply("remove_extras", "2 ('a', 'a', 'a', 'b')"),
        "Result: ['a', 'a', 'b']"
    );
}

#[test]
fn test_remove_extras_refusals() {
    assert_eq!(refusal("remove_extras", "x [1]"), "Count must be an integer");
    assert_eq!(
        refusal("remove_extras", "1 [1,"),
        "You must provide a sequence of literals"
    );
    assert_eq!(
        refusal("remove_extras", "1 5"),
        "You must provide a sequence of literals"
    );
}

#[test]
fn test_literal_refusal_keeps_parse_error() {
    match run("remove_extras", "1 [1,") {
        Err(PuzzleError::Literal { input, error, .. }) => {
            assert_eq!(input, "[1,");
            assert!(matches!(error, LiteralError::Syntax { .. }));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_directionally_challenged() {
    assert_eq!(
        reply(
            "directionally_challenged",
            "['N', 'S', 'E', 'W', 'N', 'N', 'E']"
        ),
        "Your path had a length of `7`\n\
         The shortest path had a length of `3`\n\
         The answer was that they have a difference of `4`"
    );
}

#[test]
fn test_directionally_challenged_accepts_a_string() {
    assert!(reply("directionally_challenged", "'NNS'").contains("length of `3`"));
}

#[test]
fn test_mystery_function() {
    assert_eq!(
        reply("mysteryfun", "832"),
        "```py\n>>> mystery_function(832)\n48```"
    );
    assert_eq!(
        refusal("mystery_function", "abc"),
        "You must provide a positive integer"
    );
}

#[test]
fn test_mystery_function_beyond_64_bits() {
    assert_eq!(
        reply("mystery_function", "99999999999999999999999"),
        "```py\n>>> mystery_function(99999999999999999999999)\n8862938119652501095929```"
    );
}

#[test]
fn test_mini_peaks() {
    assert_eq!(
        reply("mini_peaks", "[4, 5, 2, 1, 4, 9, 7, 2]"),
        "```py\n>>> mini_peaks([4, 5, 2, 1, 4, 9, 7, 2])\n[5, 9]```"
    );
    assert_eq!(
        refusal("peaks", "[1, 'a', 2]"),
        "You must provide a sequence of integers"
    );
    assert_eq!(
        refusal("peaks", "hello"),
        "You must provide a sequence of integers"
    );
}

#[test]
fn test_compass_directions() {
    assert_eq!(
        reply("compass", "'N' ['L', 'L', 'L', 'R']"),
        "```py\n>>> final_direction('N', ['L', 'L', 'L', 'R'])\nS```"
    );
    assert_eq!(
        refusal("compass", "N ['L']"),
        "Facing must be a string, directions must be a sequence of strings"
    );
    assert_eq!(
        refusal("compass", "'N' [1, 2]"),
        "Facing must be a string, directions must be a sequence of strings"
    );
}

#[test]
fn test_intersection_union() {
    assert_eq!(
        reply("union", "intersection_union([1, 2, 3, 4, 4], [4, 5, 9])"),
        "```py\n>>> intersection_union([1, 2, 3, 4, 4], [4, 5, 9])\n([4], [1, 2, 3, 4, 5, 9])```"
    );
    assert_eq!(
        refusal("intersection", "[1, 2]"),
        "You must provide two lists of integers"
    );
}

#[test]
fn test_count_overlapping() {
    assert_eq!(
        reply("overlapping", "[[1, 2], [2, 3], [1, 3], [4, 5], [0, 1]], 2"),
        "```py\n>>> count_overlapping([[1, 2], [2, 3], [1, 3], [4, 5], [0, 1]], 2)\n3```"
    );
    assert_eq!(
        refusal("overlapping", "[[1, 2, 3]], 2"),
        "Intervals must be pairs of integers"
    );
}

#[test]
fn test_rearranged_difference() {
    assert_eq!(
        reply("rearranged", "972882"),
        "```py\n>>> rearranged_difference(972882)\n760833```"
    );
    assert_eq!(
        refusal("rearranged", "-5"),
        "You must provide a non-negative integer"
    );
}

#[test]
fn test_rearranged_difference_beyond_64_bits() {
    assert_eq!(
        reply("rearranged_difference", "123456789012345678901"),
        "```py\n>>> rearranged_difference(123456789012345678901)\n997765432098765432201```"
    );
    assert_eq!(
        reply("rearranged", "007"),
        "```py\n>>> rearranged_difference(7)\n0```"
    );
}

#[test]
fn test_left_digit() {
    assert_eq!(
        reply("leftmost", "TrAdE2W1n95!"),
        "```py\n>>> left_digit(\"TrAdE2W1n95!\")\n2```"
    );
    assert_eq!(
        reply("left", "nothing"),
        "```py\n>>> left_digit(\"nothing\")\nNone```"
    );
}

#[test]
fn test_correct_inequality() {
    assert_eq!(
        reply("inequality", "3 < 7 > 4"),
        "`3 < 7 > 4`\n```py\n3 < 7 - True\n7 > 4 - True\nVALID EXPRESSION\n```"
    );
}

#[test]
fn test_ducci_sequence() {
    assert_eq!(
        reply("ducci", "[1, 2, 1]"),
        "```py\n\
         1.   [1, 2, 1]\n\
         2.   (1, 1, 0)\n\
         3.   (0, 1, 1)\n\
         4.   (1, 0, 1)\n\
         5.   (1, 1, 0)\n\
         ```\n\
         Finished in 5 steps"
    );
    assert_eq!(refusal("ducci", "['a']"), "There was an error");
}

#[test]
fn test_ducci_sequence_list_start_is_not_a_repeat() {
    assert_eq!(
        reply("ducci", "[0, 1, 1]"),
        "```py\n\
         1.   [0, 1, 1]\n\
         2.   (1, 0, 1)\n\
         3.   (1, 1, 0)\n\
         4.   (0, 1, 1)\n\
         5.   (1, 0, 1)\n\
         ```\n\
         Finished in 5 steps"
    );
    assert_eq!(
        reply("ducci", "(0, 1, 1)"),
        "```py\n\
         1.   (0, 1, 1)\n\
         2.   (1, 0, 1)\n\
         3.   (1, 1, 0)\n\
         4.   (0, 1, 1)\n\
         ```\n\
         Finished in 4 steps"
    );
}

#[test]
fn test_ducci_sequence_step_limit() {
    let reply = reply("ducci_sequence", "[46, 47, 50, 6, 49]");
    assert!(reply.ends_with("Exited after 100 steps"));
    assert!(reply.contains("\n100. ("));
    assert_eq!(reply.lines().count(), DUCCI_STEP_LIMIT + 3);
}
