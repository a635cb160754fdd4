//! The value stack a program runs against.

use num_bigint::BigInt;

use crate::stack::StackError;
use crate::syntax::Span;

/// A stack of integers that reports underflow as a [`StackError`].
///
/// Every evaluation owns a fresh stack, created holding the sentinel `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    items: Vec<BigInt>,
}

impl Stack {
    /// Creates a stack holding only the sentinel `0`.
    pub fn with_sentinel() -> Self {
        Self {
            items: vec![BigInt::ZERO],
        }
    }

    #[inline]
    pub fn push(&mut self, value: impl Into<BigInt>) {
        self.items.push(value.into());
    }

    /// Removes and returns the top value.
    ///
    /// On an empty stack this fails with `StackUnderflow`, blaming `span`.
    #[inline]
    pub fn pop(&mut self, span: Option<&Span>) -> Result<BigInt, StackError> {
        self.items.pop().ok_or_else(|| self.underflow(span))
    }

    /// Returns the top value without removing it.
    #[inline]
    pub fn peek(&self, span: Option<&Span>) -> Result<BigInt, StackError> {
        self.items.last().cloned().ok_or_else(|| self.underflow(span))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Copy of the current contents, bottom first.
    pub fn snapshot(&self) -> Vec<BigInt> {
        self.items.clone()
    }

    fn underflow(&self, span: Option<&Span>) -> StackError {
        StackError::StackUnderflow {
            stack: self.snapshot(),
            span: span.cloned(),
        }
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::with_sentinel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_starts_with_sentinel() {
        let stack = Stack::with_sentinel();
        assert_eq!(stack.snapshot(), vec![BigInt::ZERO]);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_push_pop() {
        let mut stack = Stack::with_sentinel();
        stack.push(42);
        stack.push(17);
        assert_eq!(stack.pop(None), Ok(BigInt::from(17)));
        assert_eq!(stack.peek(None), Ok(BigInt::from(42)));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_pop_past_sentinel_underflows() {
        let mut stack = Stack::with_sentinel();
        assert_eq!(stack.pop(None), Ok(BigInt::ZERO));
        assert!(stack.is_empty());

        let span = Span::new(2, 3);
        assert_eq!(
            stack.pop(Some(&span)),
            Err(StackError::StackUnderflow {
                stack: vec![],
                span: Some(span),
            })
        );
    }

    #[test]
    fn test_peek_empty_underflows() {
        let mut stack = Stack::with_sentinel();
        stack.pop(None).unwrap();
        assert!(matches!(
            stack.peek(None),
            Err(StackError::StackUnderflow { span: None, .. })
        ));
    }
}
