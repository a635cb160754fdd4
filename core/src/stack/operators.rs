//! Arithmetic for the binary instructions.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

use crate::stack::Instruction;

/// Apply a binary instruction to its operands.
///
/// `a` is the first value popped (the old top of the stack) and `b` the
/// second. Returns `None` for division by zero, and for instructions that
/// are not binary.
pub(super) fn apply(instruction: &Instruction<'_>, a: &BigInt, b: &BigInt) -> Option<BigInt> {
    match instruction {
        Instruction::Add => Some(a + b),
        Instruction::Subtract => Some(a - b),
        Instruction::Multiply => Some(a * b),
        Instruction::Divide => floor_div(a, b),
        _ => None,
    }
}

/// Integer division rounding toward negative infinity.
pub(super) fn floor_div(a: &BigInt, b: &BigInt) -> Option<BigInt> {
    if b.is_zero() {
        return None;
    }
    Some(a.div_floor(b))
}
