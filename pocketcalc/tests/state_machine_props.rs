//! Property tests for the calculator state machine

use pocketcalc::engine::{format_result, Calculator, Operator, CLEAR, EQUALS};
use pocketcalc::keypad;
use proptest::prelude::*;

// ===== Strategies =====

fn entry_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "."])
}

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

/// Any label a user can press.
fn label_strategy() -> impl Strategy<Value = &'static str> {
    let mut labels: Vec<&'static str> = keypad::ROWS.iter().flatten().copied().collect();
    labels.push(CLEAR);
    prop::sample::select(labels)
}

// ===== Properties =====

proptest! {
    /// Entry keys concatenate verbatim
    #[test]
    fn prop_entries_concatenate(keys in prop::collection::vec(entry_strategy(), 0..20)) {
        let mut calc = Calculator::new();
        for key in &keys {
            prop_assert!(calc.handle_input(key));
        }
        prop_assert_eq!(calc.display(), keys.concat());
    }

    /// Clear always returns to the initial state
    #[test]
    fn prop_clear_resets(keys in prop::collection::vec(label_strategy(), 0..30)) {
        let mut calc = Calculator::new();
        for key in &keys {
            calc.handle_input(key);
        }
        calc.handle_input(CLEAR);
        prop_assert_eq!(calc.display(), "");
        prop_assert_eq!(calc.pending_operand(), 0.0);
        prop_assert_eq!(calc.selected_operator(), None);
    }

    /// An operator commits the typed number and clears the display
    #[test]
    fn prop_operator_commits_operand(n in 0u32..1_000_000, op in operator_strategy()) {
        let mut calc = Calculator::new();
        for c in n.to_string().chars() {
            calc.handle_input(&c.to_string());
        }
        calc.handle_input(op.label());
        prop_assert_eq!(calc.pending_operand(), n as f64);
        prop_assert_eq!(calc.selected_operator(), Some(op));
        prop_assert_eq!(calc.display(), "");
    }

    /// "=" always drops the selected operator
    #[test]
    fn prop_equals_clears_operator(keys in prop::collection::vec(label_strategy(), 0..30)) {
        let mut calc = Calculator::new();
        for key in &keys {
            calc.handle_input(key);
        }
        calc.handle_input(EQUALS);
        prop_assert_eq!(calc.selected_operator(), None);
    }

    /// Integer arithmetic in range prints without a decimal point
    #[test]
    fn prop_integer_sums_have_no_decimals(a in 0u32..10_000, b in 0u32..10_000) {
        let mut calc = Calculator::new();
        let keys = format!("{a}+{b}=");
        for c in keys.chars() {
            calc.handle_input(&c.to_string());
        }
        prop_assert_eq!(calc.display(), (a + b).to_string());
    }

    /// Formatted results are either bare integers or have exactly two decimals
    #[test]
    fn prop_format_shape(x in -1e9f64..1e9f64) {
        let s = format_result(x);
        match s.split_once('.') {
            Some((_, frac)) => {
                prop_assert_eq!(frac.len(), 2);
                prop_assert_ne!(frac, "00");
            }
            None => prop_assert!(s.trim_start_matches('-').chars().all(|c| c.is_ascii_digit())),
        }
    }

    /// Non-finite results never panic the formatter
    #[test]
    fn prop_divide_by_zero_is_non_finite(n in 0u32..1000) {
        let mut calc = Calculator::new();
        for c in format!("{n}÷0=").chars() {
            calc.handle_input(&c.to_string());
        }
        let expected = if n == 0 { "nan" } else { "inf" };
        prop_assert_eq!(calc.display(), expected);
    }
}
