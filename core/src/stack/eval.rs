//! Core evaluation loop.

use tracing::{debug, trace};

use crate::api::EvalOptions;
use crate::stack::{
    Evaluation, Instruction, StackError,
    instruction::{Token, classify, tokenize},
    machine::Stack,
    operators,
};

/// Runs a single program against its own stack.
pub struct Evaluator<'src> {
    options: EvalOptions,
    source: &'src str,
    stack: Stack,
    trace: Trace,
}

impl<'src> Evaluator<'src> {
    pub fn new(options: EvalOptions, source: &'src str) -> Self {
        let trace = Trace::new(options.verbose);
        Self {
            options,
            source,
            stack: Stack::with_sentinel(),
            trace,
        }
    }

    /// Execute every token, then pop the final value.
    ///
    /// Stops at the first failing instruction; nothing executed before it is
    /// reported back.
    pub fn eval(mut self) -> Result<Evaluation, StackError> {
        let tokens = tokenize(self.source);
        debug!(tokens = tokens.len(), verbose = self.options.verbose, "Evaluating stack program");

        for token in &tokens {
            self.step(token)?;
        }

        let value = self.stack.pop(None)?;
        debug!(%value, "Stack program finished");

        Ok(Evaluation {
            value,
            trace: self.trace.finish(),
        })
    }

    fn step(&mut self, token: &Token<'_>) -> Result<(), StackError> {
        let instruction = classify(token.text);
        trace!(%instruction, stack = ?self.stack.snapshot(), "Step");

        match &instruction {
            Instruction::PushLiteral(value) => {
                self.stack.push(value.clone());
                self.trace.record(|| format!("Push {}", token.text));
            }
            Instruction::Add
            | Instruction::Subtract
            | Instruction::Multiply
            | Instruction::Divide => {
                let a = self.stack.pop(Some(&token.span))?;
                let b = self.stack.pop(Some(&token.span))?;
                let result = operators::apply(&instruction, &a, &b).ok_or_else(|| {
                    StackError::DivisionByZero {
                        stack: self.stack.snapshot(),
                        span: token.span.clone(),
                    }
                })?;
                let verb = instruction.verb().unwrap_or_default();
                self.trace
                    .record(|| format!("Pop {a}, Pop {b}, {verb}, Push {result}"));
                self.stack.push(result);
            }
            Instruction::Duplicate => {
                let top = self.stack.peek(Some(&token.span))?;
                self.trace
                    .record(|| format!("Pop {top}, Push {top}, Push {top}"));
                self.stack.push(top);
            }
            Instruction::Pop => {
                let top = self.stack.pop(Some(&token.span))?;
                self.trace.record(|| format!("Pop {top}"));
            }
            Instruction::Unrecognized(text) => {
                return Err(StackError::InvalidInstruction {
                    token: text.to_string(),
                    span: token.span.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Human-readable log of executed instructions.
///
/// Lines are only built when the trace was requested.
struct Trace {
    lines: Option<Vec<String>>,
}

impl Trace {
    fn new(enabled: bool) -> Self {
        Self {
            lines: enabled.then(Vec::new),
        }
    }

    fn record(&mut self, line: impl FnOnce() -> String) {
        if let Some(lines) = &mut self.lines {
            lines.push(line());
        }
    }

    fn finish(self) -> Option<Vec<String>> {
        self.lines
    }
}
