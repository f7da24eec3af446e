//! Integer arithmetic helpers and a binary min-heap priority queue
//!
//! Division and modulo report a zero divisor as [`CalcError::DivideByZero`],
//! whose [`code`](CalcError::code) is the `1` error flag callers compare
//! against.

pub mod heap;

pub use heap::MinHeap;

use thiserror::Error;

/// Arithmetic errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("division by zero")]
    DivideByZero,
}

impl CalcError {
    /// Numeric error flag (0 means success)
    pub fn code(self) -> i32 {
        match self {
            CalcError::DivideByZero => 1,
        }
    }
}

/// Error flag for a calculation result: 0 on success
pub fn error_code<T>(result: &Result<T, CalcError>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(e) => e.code(),
    }
}

pub fn add(a: i32, b: i32) -> i32 {
    a + b
}

pub fn subtract(a: i32, b: i32) -> i32 {
    a - b
}

pub fn multiply(a: i32, b: i32) -> i32 {
    a * b
}

/// `a % b`, failing on a zero divisor
pub fn modulo(a: i32, b: i32) -> Result<i32, CalcError> {
    if b == 0 {
        return Err(CalcError::DivideByZero);
    }
    Ok(a % b)
}

/// `a / b` truncated toward zero, failing on a zero divisor
pub fn divide(a: i32, b: i32) -> Result<i32, CalcError> {
    if b == 0 {
        return Err(CalcError::DivideByZero);
    }
    Ok(a / b)
}
