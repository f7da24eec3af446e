//! Calculator and min-heap test binary
//!
//! `Calculator.SubtractsNumbers` fails on purpose so the failure path of the
//! console output and the report can be seen end to end.

use calculator::{add, divide, error_code, subtract, CalcError, MinHeap};
use minitest::{expect_eq, expect_false, expect_true, require_eq, require_true, Registry};
use std::process::ExitCode;

fn register_calculator(registry: &mut Registry) {
    registry.register("Calculator", "AddsNumbers", |t| {
        expect_eq!(t, add(2, 3), 5);
        expect_eq!(t, add(-1, 1), 0);
        Ok(())
    });

    registry.register("Calculator", "SubtractsNumbers", |t| {
        expect_eq!(t, subtract(5, 3), 1);
        Ok(())
    });

    registry.register("Calculator", "DividesSafely", |t| {
        let result = divide(8, 4);
        expect_eq!(t, error_code(&result), 0);
        expect_eq!(t, result, Ok(2));

        let result = divide(1, 0);
        expect_eq!(t, error_code(&result), 1);
        expect_eq!(t, result, Err(CalcError::DivideByZero));
        Ok(())
    });
}

fn register_min_heap(registry: &mut Registry) {
    registry.register("MinHeap", "StartsEmpty", |t| {
        let mut heap = MinHeap::new();
        expect_true!(t, heap.is_empty());
        expect_eq!(t, heap.peek_min(), None);
        expect_eq!(t, heap.delete_min(), None);
        Ok(())
    });

    registry.register("MinHeap", "ExtractsSmallestFirst", |t| {
        let mut heap: MinHeap = [7, 2, 9, 4].into_iter().collect();
        require_eq!(t, heap.len(), 4);
        expect_eq!(t, heap.delete_min(), Some(2));
        expect_eq!(t, heap.delete_min(), Some(4));
        expect_eq!(t, heap.peek_min(), Some(7));
        Ok(())
    });

    registry.register("MinHeap", "ClearReleasesStorage", |t| {
        let mut heap: MinHeap = (0..32).collect();
        require_true!(t, heap.capacity() >= 32);
        heap.clear();
        expect_true!(t, heap.is_empty());
        expect_false!(t, heap.capacity() > 0);
        Ok(())
    });
}

fn main() -> ExitCode {
    minitest::main(&[register_calculator, register_min_heap])
}
