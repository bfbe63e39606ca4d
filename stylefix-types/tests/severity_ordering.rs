//! Property-based tests for the severity scale.
//!
//! These tests verify that:
//! - The threshold check agrees with the total order for every pair
//! - Parsing is total over recognized tokens regardless of case
//! - `none` never meets any threshold

use proptest::prelude::*;
use stylefix_types::Severity;

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

proptest! {
    /// For a ranked below b: a never meets b; b always meets a and itself
    /// (unless b is `none`, which never triggers).
    #[test]
    fn threshold_agrees_with_total_order(a in arb_severity(), b in arb_severity()) {
        if a < b {
            prop_assert!(!a.meets_threshold(b));
        }
        if a >= b && a != Severity::None {
            prop_assert!(a.meets_threshold(b));
        }
    }

    #[test]
    fn none_never_triggers(required in arb_severity()) {
        prop_assert!(!Severity::None.meets_threshold(required));
    }

    /// Round-trip: display output always parses back to the same rank.
    #[test]
    fn display_parses_back(sev in arb_severity()) {
        let back: Severity = sev.to_string().parse().unwrap();
        prop_assert_eq!(back, sev);
    }

    /// Case never matters for recognized tokens.
    #[test]
    fn parse_is_case_insensitive(sev in arb_severity(), upper in any::<bool>()) {
        let token = if upper {
            sev.as_str().to_ascii_uppercase()
        } else {
            sev.as_str().to_string()
        };
        prop_assert_eq!(token.parse::<Severity>().unwrap(), sev);
    }
}
