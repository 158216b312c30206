//! Property-based tests for parameter coercion.

use castellan_action::{Action, Param, ParamError};
use proptest::prelude::*;

fn single(param: Param) -> Action {
    Action::new("svc", "check").with_param(param)
}

proptest! {
    #[test]
    fn int_reads_back_unchanged(x in any::<i64>()) {
        let action = single(Param::int("p", x));
        prop_assert_eq!(action.get_int("p"), Ok(x));
        prop_assert_eq!(action.get_boolean("p"), Ok(x != 0));
    }

    #[test]
    fn int_text_parses_back(x in any::<i64>()) {
        let text = single(Param::int("p", x)).get_string("p").unwrap();
        prop_assert_eq!(text.clone(), x.to_string());

        let reparsed = single(Param::string("p", text));
        prop_assert_eq!(reparsed.get_int("p"), Ok(x));
    }

    #[test]
    fn float_to_int_truncates(x in -1.0e15f64..1.0e15) {
        let action = single(Param::float("p", x));
        prop_assert_eq!(action.get_int("p"), Ok(x.trunc() as i64));
    }

    #[test]
    fn float_text_has_six_fraction_digits(x in -1.0e9f64..1.0e9) {
        let text = single(Param::float("p", x)).get_string("p").unwrap();
        let (_, fraction) = text.split_once('.').unwrap();
        prop_assert_eq!(fraction.len(), 6);
    }

    #[test]
    fn string_to_bool_never_fails(s in ".*") {
        let expected = matches!(s.as_str(), "true" | "on" | "enabled");
        let action = single(Param::string("p", s));
        prop_assert_eq!(action.get_boolean("p"), Ok(expected));
    }

    #[test]
    fn non_numeric_text_is_parse_error(s in "[a-zA-Z_]{1,12}") {
        let action = single(Param::string("p", s));
        let result = action.get_int("p");
        prop_assert!(matches!(result, Err(ParamError::Parse { .. })), "got {:?}", result);
    }

    #[test]
    fn default_only_fills_missing(stored in any::<i64>(), fallback in any::<i64>()) {
        let action = single(Param::int("present", stored));
        prop_assert_eq!(action.get_int_with_default("present", fallback), Ok(stored));
        prop_assert_eq!(action.get_int_with_default("absent", fallback), Ok(fallback));
    }
}
