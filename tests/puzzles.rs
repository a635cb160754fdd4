use indoc::indoc;
use pretty_assertions::assert_eq;
use stackbot::{Error, run_puzzle};

fn reply(name: &str, args: &str) -> String {
    run_puzzle(name, args).unwrap_or_else(|e| panic!("{name} {args:?} failed: {e}"))
}

#[test]
fn remove_extras() {
    assert_eq!(
        reply("remove_extras", "2 [1, 1, 1, 'x', 'x', 'x']"),
        "Result: [1, 1, 'x', 'x']"
    );
}

#[test]
fn directionally_challenged() {
    assert_eq!(
        reply("directionally_challenged", "('N', 'N', 'S', 'W')"),
        indoc! {"
            Your path had a length of `4`
            The shortest path had a length of `2`
            The answer was that they have a difference of `2`"}
    );
}

#[test]
fn compass_directions_wraps_around() {
    assert_eq!(
        reply("directions", "'N' ['L', 'L', 'L', 'L', 'L']"),
        "```py\n>>> final_direction('N', ['L', 'L', 'L', 'L', 'L'])\nW```"
    );
}

#[test]
fn correct_inequality_stops_at_first_false_link() {
    assert_eq!(
        reply("correct_inequality", "1 < 2 > 5 < 9"),
        indoc! {"
            `1 < 2 > 5 < 9`
            ```py
            1 < 2 - True
            2 > 5 - False
            INVALID EXPRESSION
            ```"}
    );
}

#[test]
fn correct_inequality_bad_token_count() {
    assert_eq!(
        reply("inequality", "1 <"),
        "`1 <`\n```py\nINVALID INPUT\n```"
    );
}

#[test]
fn ducci_reaches_zero() {
    assert_eq!(
        reply("ducci", "(0, 653, 1854, 4063)"),
        indoc! {"
            ```py
            1.   (0, 653, 1854, 4063)
            2.   (653, 1201, 2209, 4063)
            3.   (548, 1008, 1854, 3410)
            4.   (460, 846, 1556, 2862)
            5.   (386, 710, 1306, 2402)
            6.   (324, 596, 1096, 2016)
            7.   (272, 500, 920, 1692)
            8.   (228, 420, 772, 1420)
            9.   (192, 352, 648, 1192)
            10.  (160, 296, 544, 1000)
            11.  (136, 248, 456, 840)
            12.  (112, 208, 384, 704)
            13.  (96, 176, 320, 592)
            14.  (80, 144, 272, 496)
            15.  (64, 128, 224, 416)
            16.  (64, 96, 192, 352)
            17.  (32, 96, 160, 288)
            18.  (64, 64, 128, 256)
            19.  (0, 64, 128, 192)
            20.  (64, 64, 64, 192)
            21.  (0, 0, 128, 128)
            22.  (0, 128, 0, 128)
            23.  (128, 128, 128, 128)
            24.  (0, 0, 0, 0)
            ```
            Finished in 24 steps"}
    );
}

#[test]
fn malformed_literal_becomes_input_error() {
    match run_puzzle("mini_peaks", "[1, 2").unwrap_err() {
        Error::Input { diagnostic, source } => {
            assert_eq!(source, "[1, 2");
            assert!(diagnostic.code.is_some());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn shape_errors_keep_the_chat_reply() {
    let err = run_puzzle("intersection_union", "[1, 2]").unwrap_err();
    assert_eq!(err.to_string(), "You must provide two lists of integers");
}
