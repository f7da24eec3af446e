//! Assertion macros
//!
//! `expect_*` macros record a failure and let the body continue.
//! `require_*` macros record a failure and return from the body; they can
//! only be used inside a function or closure returning [`BodyResult`].
//!
//! Every macro takes the recorder as its first argument:
//!
//! ```
//! use minitest::{expect_eq, require_true, BodyResult, Recorder};
//!
//! fn body(t: &mut Recorder) -> BodyResult {
//!     expect_eq!(t, 2 + 3, 5);
//!     require_true!(t, 10 > 1);
//!     Ok(())
//! }
//! # let mut t = Recorder::new();
//! # body(&mut t).unwrap();
//! # assert!(!t.has_failures());
//! ```
//!
//! [`BodyResult`]: crate::BodyResult

/// Non-fatal equality check
#[macro_export]
macro_rules! expect_eq {
    ($t:expr, $a:expr, $b:expr $(,)?) => {{
        let _ = $t.check_eq(&$a, &$b, stringify!($a), stringify!($b), false);
    }};
}

/// Fatal equality check
#[macro_export]
macro_rules! require_eq {
    ($t:expr, $a:expr, $b:expr $(,)?) => {{
        $t.check_eq(&$a, &$b, stringify!($a), stringify!($b), true)?;
    }};
}

/// Non-fatal inequality check
#[macro_export]
macro_rules! expect_ne {
    ($t:expr, $a:expr, $b:expr $(,)?) => {{
        let _ = $t.check_ne(&$a, &$b, stringify!($a), stringify!($b), false);
    }};
}

/// Fatal inequality check
#[macro_export]
macro_rules! require_ne {
    ($t:expr, $a:expr, $b:expr $(,)?) => {{
        $t.check_ne(&$a, &$b, stringify!($a), stringify!($b), true)?;
    }};
}

/// Non-fatal check that a condition holds
#[macro_export]
macro_rules! expect_true {
    ($t:expr, $cond:expr $(,)?) => {{
        let _ = $t.check_true($cond, stringify!($cond), false);
    }};
}

/// Fatal check that a condition holds
#[macro_export]
macro_rules! require_true {
    ($t:expr, $cond:expr $(,)?) => {{
        $t.check_true($cond, stringify!($cond), true)?;
    }};
}

/// Non-fatal check that a condition does not hold
#[macro_export]
macro_rules! expect_false {
    ($t:expr, $cond:expr $(,)?) => {{
        let _ = $t.check_false($cond, stringify!($cond), false);
    }};
}

/// Fatal check that a condition does not hold
#[macro_export]
macro_rules! require_false {
    ($t:expr, $cond:expr $(,)?) => {{
        $t.check_false($cond, stringify!($cond), true)?;
    }};
}

#[cfg(test)]
mod tests {
    use crate::{BodyResult, Recorder};

    fn mixed_body(t: &mut Recorder, reached_end: &mut bool) -> BodyResult {
        expect_eq!(t, 1 + 1, 3);
        expect_ne!(t, 4, 4);
        expect_true!(t, 2 < 1);
        expect_false!(t, 1 < 2);
        require_eq!(t, 5 - 3, 1);
        *reached_end = true;
        Ok(())
    }

    #[test]
    fn test_expect_macros_continue_and_require_stops() {
        let mut t = Recorder::new();
        let mut reached_end = false;

        let result = mixed_body(&mut t, &mut reached_end);

        assert!(result.unwrap_err().is_fatal());
        assert!(!reached_end);
        let outcomes = t.outcomes();
        assert_eq!(outcomes.len(), 5);
        assert_eq!(outcomes.iter().filter(|o| o.fatal).count(), 1);
        assert!(outcomes[4].fatal);
    }

    #[test]
    fn test_macros_capture_source_text() {
        let mut t = Recorder::new();
        let values = vec![1, 2, 3];
        expect_eq!(t, values.len(), 4);
        expect_true!(t, values.is_empty());

        let outcomes = t.outcomes();
        assert!(outcomes[0].message.contains("values.len()"));
        assert!(outcomes[0].message.contains("Which is: 3"));
        assert!(outcomes[0].message.contains("Which is: 4"));
        assert_eq!(outcomes[1].message, "Expected: values.is_empty() is true");
        assert!(outcomes[0].file.ends_with("macros.rs"));
    }

    #[test]
    fn test_require_macros_pass_through() {
        fn body(t: &mut Recorder) -> BodyResult {
            require_eq!(t, "a", "a");
            require_ne!(t, 1, 2);
            require_true!(t, true);
            require_false!(t, false);
            Ok(())
        }

        let mut t = Recorder::new();
        assert!(body(&mut t).is_ok());
        assert!(!t.has_failures());
    }
}
