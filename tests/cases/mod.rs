//! Table-style test cases for stack programs.
//!
//! ```ignore
//! test_case!(addition, input: "3 4 +", value: 7);
//! test_case!(big, input: "9999999999 DUP *", value: "99999999980000000001");
//! test_case!(traced, input: "3", value: 3, trace: ["Push 3"]);
//! test_case!(bad, input: "FOO", reply: "Invalid Instruction: FOO");
//! ```

#[macro_export]
macro_rules! test_case {
    ($name:ident, input: $input:expr, value: $value:expr $(,)?) => {
        #[test]
        fn $name() {
            let result = stackbot::stack::evaluate($input, false);
            pretty_assertions::assert_eq!(
                result.as_ref().map(|e| e.value.to_string()),
                Ok($value.to_string()),
                "input: {:?}",
                $input
            );
            pretty_assertions::assert_eq!(
                stackbot::stack::message(&result),
                format!("Final value: {}", $value)
            );
        }
    };
    ($name:ident, input: $input:expr, value: $value:expr, trace: [$($line:expr),* $(,)?] $(,)?) => {
        #[test]
        fn $name() {
            let evaluation = stackbot::stack::evaluate($input, true)
                .unwrap_or_else(|e| panic!("input {:?} failed: {e}", $input));
            pretty_assertions::assert_eq!(evaluation.value.to_string(), $value.to_string());
            let expected: Vec<&str> = vec![$($line),*];
            pretty_assertions::assert_eq!(
                evaluation.trace,
                Some(expected.iter().map(|l| l.to_string()).collect())
            );
        }
    };
    ($name:ident, input: $input:expr, reply: $reply:expr $(,)?) => {
        #[test]
        fn $name() {
            let result = stackbot::stack::evaluate($input, false);
            assert!(result.is_err(), "input {:?} should fail", $input);
            pretty_assertions::assert_eq!(stackbot::stack::message(&result), $reply);
        }
    };
}
