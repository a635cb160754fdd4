//! Results of a stack program, in the shapes callers consume them.

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::stack::StackError;

/// A successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The value popped off the stack after the last instruction.
    pub value: BigInt,
    /// One line per executed instruction, present only in verbose mode.
    pub trace: Option<Vec<String>>,
}

impl Evaluation {
    /// The chat reply for this run: the final value, preceded by the trace
    /// in a code block when one was recorded.
    pub fn message(&self) -> String {
        let message = format!("Final value: {}", self.value);
        match &self.trace {
            Some(lines) => format!("```\n{}\n```{}", lines.join("\n"), message),
            None => message,
        }
    }

    pub fn report(&self) -> Report {
        Report::Ok {
            value: self.value.clone(),
            trace: self.trace.clone(),
        }
    }
}

/// Status-tagged outcome of an evaluation.
///
/// Serializes as `{"status": "ok", "value": 7}`,
/// `{"status": "invalid_instruction", "token": "FOO"}` and so on. Integers
/// outside the 64-bit range are written as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Report {
    Ok {
        #[serde(with = "json_int")]
        value: BigInt,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace: Option<Vec<String>>,
    },
    InvalidInstruction {
        token: String,
    },
    StackUnderflow {
        #[serde(with = "json_int::seq")]
        stack: Vec<BigInt>,
    },
    DivisionByZero {
        #[serde(with = "json_int::seq")]
        stack: Vec<BigInt>,
    },
}

impl Report {
    pub fn is_ok(&self) -> bool {
        matches!(self, Report::Ok { .. })
    }
}

impl From<&StackError> for Report {
    fn from(err: &StackError) -> Self {
        match err {
            StackError::InvalidInstruction { token, .. } => Report::InvalidInstruction {
                token: token.clone(),
            },
            StackError::StackUnderflow { stack, .. } => Report::StackUnderflow {
                stack: stack.clone(),
            },
            StackError::DivisionByZero { stack, .. } => Report::DivisionByZero {
                stack: stack.clone(),
            },
        }
    }
}

impl From<&Result<Evaluation, StackError>> for Report {
    fn from(result: &Result<Evaluation, StackError>) -> Self {
        match result {
            Ok(evaluation) => evaluation.report(),
            Err(err) => Report::from(err),
        }
    }
}

impl From<Result<Evaluation, StackError>> for Report {
    fn from(result: Result<Evaluation, StackError>) -> Self {
        Report::from(&result)
    }
}

/// The chat reply for any outcome.
pub fn message(result: &Result<Evaluation, StackError>) -> String {
    match result {
        Ok(evaluation) => evaluation.message(),
        Err(err) => err.to_string(),
    }
}

/// JSON integers: a number while the value fits in an `i64`, a decimal
/// string beyond that.
mod json_int {
    use num_bigint::BigInt;
    use num_traits::ToPrimitive;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Small(i64),
        Big(String),
    }

    impl Repr {
        fn into_int<E: serde::de::Error>(self) -> Result<BigInt, E> {
            match self {
                Repr::Small(n) => Ok(BigInt::from(n)),
                Repr::Big(digits) => digits.parse().map_err(E::custom),
            }
        }
    }

    struct Int<'a>(&'a BigInt);

    impl Serialize for Int<'_> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match self.0.to_i64() {
                Some(n) => serializer.serialize_i64(n),
                None => serializer.collect_str(self.0),
            }
        }
    }

    pub fn serialize<S>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Int(value).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        Repr::deserialize(deserializer)?.into_int()
    }

    pub mod seq {
        use super::{Int, Repr};
        use num_bigint::BigInt;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(values: &[BigInt], serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_seq(values.iter().map(Int))
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<BigInt>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Vec::<Repr>::deserialize(deserializer)?
                .into_iter()
                .map(Repr::into_int)
                .collect()
        }
    }
}
