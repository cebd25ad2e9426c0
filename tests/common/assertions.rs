//! Custom test assertions
//!
//! Macros are exported at the test crate root, so use them as
//! `crate::assert_ok!` and friends.

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}

/// Assert that captured report output contains a fragment
#[macro_export]
macro_rules! assert_reported {
    ($output:expr, $fragment:expr) => {
        let text = $output.contents();
        assert!(
            text.contains($fragment),
            "Expected report to contain {:?}, got:\n{}",
            $fragment,
            text
        );
    };
}

/// Assert two values are approximately equal (for floats)
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr) => {
        $crate::assert_approx_eq!($left, $right, 1e-12_f64)
    };
    ($left:expr, $right:expr, $epsilon:expr) => {
        let left_val: f64 = $left as f64;
        let right_val: f64 = $right as f64;
        let diff = (left_val - right_val).abs();
        assert!(
            diff < $epsilon,
            "assertion failed: `(left ~ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` (epsilon: `{:?}`)",
            left_val,
            right_val,
            diff,
            $epsilon
        );
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_approx_eq_macro() {
        crate::assert_approx_eq!(0.04, 1000.0 * 0.00004);
        crate::assert_approx_eq!(0.1 + 0.2, 0.3);
        crate::assert_approx_eq!(1.0, 1.001, 1e-2_f64);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_approx_eq_failure() {
        crate::assert_approx_eq!(1.0, 2.0);
    }
}
