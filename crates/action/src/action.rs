use std::collections::HashMap;

use crate::ParamResult;
use crate::error::ParamError;
use crate::param::{Param, ParamType, ParamValue};

/// A named, typed action descriptor carrying a bag of typed parameters.
///
/// The parameter map is populated by whoever builds the action (normally
/// a configuration loader) and is only read afterwards. Accessors take
/// `&self`, so once an action is shared behind a reference or an `Arc`
/// it is frozen.
///
/// Every getter coerces between the four scalar types:
///
/// | stored \ requested | int | float | bool | string |
/// |---|---|---|---|---|
/// | int | identity | widen | `!= 0` | decimal |
/// | float | truncate | identity | `!= 0.0` | fixed-point |
/// | bool | 1 / 0 | 1.0 / 0.0 | identity | `"true"` / `"false"` |
/// | string | parse or error | parse or error | literal set, never errors | identity |
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Action {
    /// Action kind, e.g. a handler name.
    pub action_type: String,
    /// Name of this action instance.
    pub name: String,
    /// Parameters keyed by name.
    pub params: HashMap<String, Param>,
}

impl Action {
    /// Create an action with an empty parameter map.
    pub fn new(name: impl Into<String>, action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            name: name.into(),
            params: HashMap::new(),
        }
    }

    /// Add a parameter keyed by its own name, replacing any previous entry.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, param: Param) -> Self {
        self.insert_param(param);
        self
    }

    /// Insert a parameter keyed by its own name, returning the replaced entry.
    pub fn insert_param(&mut self, param: Param) -> Option<Param> {
        self.params.insert(param.name().to_owned(), param)
    }

    /// Look up a parameter without coercion.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params.get(name)
    }

    /// Whether a parameter with the given name exists.
    #[must_use]
    pub fn contains_param(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Iterate over parameter names (unordered).
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the action has no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    fn lookup(&self, name: &str) -> ParamResult<&ParamValue> {
        self.params
            .get(name)
            .map(Param::value)
            .ok_or_else(|| ParamError::not_found(name))
    }

    /// Read a parameter as an integer.
    ///
    /// Fails with [`ParamError::NotFound`] when absent and with
    /// [`ParamError::Parse`] when a string value is not an integer literal.
    pub fn get_int(&self, name: &str) -> ParamResult<i64> {
        self.lookup(name)?
            .to_int()
            .map_err(|e| ParamError::parse(name, ParamType::Integer, e))
    }

    /// Read a parameter as a float.
    ///
    /// Fails with [`ParamError::NotFound`] when absent and with
    /// [`ParamError::Parse`] when a string value is not a float literal.
    pub fn get_float(&self, name: &str) -> ParamResult<f64> {
        self.lookup(name)?
            .to_float()
            .map_err(|e| ParamError::parse(name, ParamType::Float, e))
    }

    /// Read a parameter as a boolean.
    ///
    /// Only a missing parameter is an error. Unrecognized strings read as
    /// `false`.
    pub fn get_boolean(&self, name: &str) -> ParamResult<bool> {
        Ok(self.lookup(name)?.to_boolean())
    }

    /// Read a parameter as a string. Only a missing parameter is an error.
    pub fn get_string(&self, name: &str) -> ParamResult<String> {
        Ok(self.lookup(name)?.to_text())
    }

    /// Like [`get_int`](Self::get_int), but a missing parameter yields `default`.
    ///
    /// A present parameter that fails to coerce is still an error.
    pub fn get_int_with_default(&self, name: &str, default: i64) -> ParamResult<i64> {
        if !self.contains_param(name) {
            return Ok(default);
        }
        self.get_int(name)
    }

    /// Like [`get_float`](Self::get_float), but a missing parameter yields `default`.
    pub fn get_float_with_default(&self, name: &str, default: f64) -> ParamResult<f64> {
        if !self.contains_param(name) {
            return Ok(default);
        }
        self.get_float(name)
    }

    /// Like [`get_boolean`](Self::get_boolean), but a missing parameter yields `default`.
    pub fn get_boolean_with_default(&self, name: &str, default: bool) -> ParamResult<bool> {
        if !self.contains_param(name) {
            return Ok(default);
        }
        self.get_boolean(name)
    }

    /// Like [`get_string`](Self::get_string), but a missing parameter yields `default`.
    pub fn get_string_with_default(
        &self,
        name: &str,
        default: impl Into<String>,
    ) -> ParamResult<String> {
        if !self.contains_param(name) {
            return Ok(default.into());
        }
        self.get_string(name)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn action_with(value: impl Into<ParamValue>) -> Action {
        Action::new("svc1", "restart").with_param(Param::new("p", value))
    }

    #[test]
    fn new_action_is_empty() {
        let action = Action::new("svc1", "restart");
        assert_eq!(action.name, "svc1");
        assert_eq!(action.action_type, "restart");
        assert!(action.is_empty());
        assert_eq!(action.len(), 0);
    }

    #[test]
    fn missing_param_is_not_found_for_every_getter() {
        let action = Action::new("svc1", "restart");

        assert_eq!(action.get_int("p"), Err(ParamError::not_found("p")));
        assert_eq!(action.get_float("p"), Err(ParamError::not_found("p")));
        assert_eq!(action.get_boolean("p"), Err(ParamError::not_found("p")));
        assert_eq!(action.get_string("p"), Err(ParamError::not_found("p")));
    }

    #[rstest]
    #[case(ParamValue::Int(-12), -12)]
    #[case(ParamValue::Float(7.99), 7)]
    #[case(ParamValue::Float(-7.99), -7)]
    #[case(ParamValue::Bool(true), 1)]
    #[case(ParamValue::Bool(false), 0)]
    #[case(ParamValue::Str("42".into()), 42)]
    #[case(ParamValue::Str("-9".into()), -9)]
    #[case(ParamValue::Str("+5".into()), 5)]
    fn int_coercion(#[case] stored: ParamValue, #[case] expected: i64) {
        assert_eq!(action_with(stored).get_int("p").unwrap(), expected);
    }

    #[rstest]
    #[case(ParamValue::Int(3), 3.0)]
    #[case(ParamValue::Float(2.5), 2.5)]
    #[case(ParamValue::Bool(true), 1.0)]
    #[case(ParamValue::Bool(false), 0.0)]
    #[case(ParamValue::Str("0.125".into()), 0.125)]
    #[case(ParamValue::Str("1e3".into()), 1000.0)]
    #[case(ParamValue::Str("17".into()), 17.0)]
    fn float_coercion(#[case] stored: ParamValue, #[case] expected: f64) {
        assert_eq!(action_with(stored).get_float("p").unwrap(), expected);
    }

    #[rstest]
    #[case(ParamValue::Int(0), false)]
    #[case(ParamValue::Int(-3), true)]
    #[case(ParamValue::Float(0.0), false)]
    #[case(ParamValue::Float(0.5), true)]
    #[case(ParamValue::Bool(true), true)]
    #[case(ParamValue::Str("true".into()), true)]
    #[case(ParamValue::Str("on".into()), true)]
    #[case(ParamValue::Str("enabled".into()), true)]
    #[case(ParamValue::Str("false".into()), false)]
    #[case(ParamValue::Str("off".into()), false)]
    #[case(ParamValue::Str("disabled".into()), false)]
    #[case(ParamValue::Str("maybe".into()), false)]
    #[case(ParamValue::Str(String::new()), false)]
    fn boolean_coercion(#[case] stored: ParamValue, #[case] expected: bool) {
        assert_eq!(action_with(stored).get_boolean("p"), Ok(expected));
    }

    #[rstest]
    #[case(ParamValue::Int(7), "7")]
    #[case(ParamValue::Int(-40), "-40")]
    #[case(ParamValue::Float(3.5), "3.500000")]
    #[case(ParamValue::Bool(true), "true")]
    #[case(ParamValue::Bool(false), "false")]
    #[case(ParamValue::Str("nginx".into()), "nginx")]
    fn string_coercion(#[case] stored: ParamValue, #[case] expected: &str) {
        assert_eq!(action_with(stored).get_string("p").unwrap(), expected);
    }

    #[test]
    fn invalid_int_literal_is_parse_error() {
        let err = action_with("notanumber").get_int("p").unwrap_err();
        assert!(matches!(
            err,
            ParamError::Parse {
                target: ParamType::Integer,
                ..
            }
        ));
        assert_eq!(err.key(), "p");
    }

    #[test]
    fn float_literal_is_not_an_int() {
        let err = action_with("1.5").get_int("p").unwrap_err();
        assert_eq!(err.code(), "PARAM_PARSE");
    }

    #[test]
    fn invalid_float_literal_is_parse_error() {
        let err = action_with("fast").get_float("p").unwrap_err();
        assert!(matches!(
            err,
            ParamError::Parse {
                target: ParamType::Float,
                ..
            }
        ));
    }

    #[test]
    fn defaults_apply_only_when_missing() {
        let empty = Action::new("svc1", "restart");
        assert_eq!(empty.get_int_with_default("p", 42), Ok(42));
        assert_eq!(empty.get_float_with_default("p", 0.5), Ok(0.5));
        assert_eq!(empty.get_boolean_with_default("p", true), Ok(true));
        assert_eq!(
            empty.get_string_with_default("missing", "fallback"),
            Ok("fallback".to_string())
        );

        let present = action_with(9);
        assert_eq!(present.get_int_with_default("p", 42), Ok(9));
        assert_eq!(present.get_float_with_default("p", 0.5), Ok(9.0));
        assert_eq!(present.get_boolean_with_default("p", false), Ok(true));
        assert_eq!(
            present.get_string_with_default("p", "fallback"),
            Ok("9".to_string())
        );
    }

    #[test]
    fn default_does_not_mask_parse_errors() {
        let action = action_with("notanumber");
        let err = action.get_int_with_default("p", 42).unwrap_err();
        assert!(matches!(err, ParamError::Parse { .. }));

        let err = action.get_float_with_default("p", 4.2).unwrap_err();
        assert!(matches!(err, ParamError::Parse { .. }));
    }

    #[test]
    fn insert_replaces_existing_entry() {
        let mut action = Action::new("svc1", "restart");
        assert!(action.insert_param(Param::int("p", 1)).is_none());

        let replaced = action.insert_param(Param::string("p", "two"));
        assert_eq!(replaced, Some(Param::int("p", 1)));
        assert_eq!(action.len(), 1);
        assert_eq!(action.get_string("p").unwrap(), "two");
    }

    #[test]
    fn map_key_wins_over_param_name() {
        let mut action = Action::new("svc1", "restart");
        action
            .params
            .insert("alias".to_string(), Param::int("inner", 5));

        assert_eq!(action.get_int("alias"), Ok(5));
        assert!(action.get_int("inner").unwrap_err().is_not_found());
        assert_eq!(action.param("alias").map(Param::name), Some("inner"));
    }

    #[test]
    fn param_names_lists_every_key() {
        let action = Action::new("svc1", "restart")
            .with_param(Param::int("a", 1))
            .with_param(Param::boolean("b", true));

        let mut names: Vec<&str> = action.param_names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["a", "b"]);
        assert!(action.contains_param("a"));
        assert!(!action.contains_param("c"));
    }

    #[test]
    fn action_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Action>();
    }
}
