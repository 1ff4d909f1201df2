//! Argument coercion.
//!
//! Host arguments are optional strings. A [`Param`] declares how one key is
//! read: passed through as text, or parsed as an integer or a rate with a
//! default for when the key is absent. [`coerce`] applies a parameter list to
//! a call in one pass and yields [`TypedArgs`].

use std::collections::BTreeMap;

use common::MethodCall;

use crate::error::ArgumentError;

/// How a parameter is read from its string form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamKind {
    /// Passed through; absent becomes the empty string.
    Text,
    /// Base-10 signed integer.
    Integer { default: i64 },
    /// Decimal floating-point number.
    Rate { default: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Param {
    pub key: &'static str,
    pub kind: ParamKind,
}

impl Param {
    pub const fn text(key: &'static str) -> Self {
        Self {
            key,
            kind: ParamKind::Text,
        }
    }

    pub const fn integer(key: &'static str, default: i64) -> Self {
        Self {
            key,
            kind: ParamKind::Integer { default },
        }
    }

    pub const fn rate(key: &'static str, default: f64) -> Self {
        Self {
            key,
            kind: ParamKind::Rate { default },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Rate(f64),
}

/// Coerced arguments, keyed by parameter name.
///
/// Values are taken out by the command builders; asking for a key that the
/// parameter list did not declare yields the kind's zero value.
#[derive(Debug, Default, PartialEq)]
pub struct TypedArgs {
    values: BTreeMap<&'static str, Value>,
}

impl TypedArgs {
    pub fn take_text(&mut self, key: &str) -> String {
        match self.values.remove(key) {
            Some(Value::Text(s)) => s,
            _ => String::new(),
        }
    }

    pub fn take_integer(&mut self, key: &str) -> i64 {
        match self.values.remove(key) {
            Some(Value::Integer(n)) => n,
            _ => 0,
        }
    }

    pub fn take_rate(&mut self, key: &str) -> f64 {
        match self.values.remove(key) {
            Some(Value::Rate(r)) => r,
            _ => 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parses an integer argument. Signs are accepted, whitespace is not.
pub fn parse_integer(key: &'static str, raw: &str) -> Result<i64, ArgumentError> {
    raw.parse::<i64>()
        .map_err(|e| ArgumentError::InvalidInteger {
            key,
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

/// Parses a rate argument. Surrounding whitespace is ignored.
///
/// The grammar is Rust's `f64` one: decimal digits with an optional exponent,
/// plus `inf`, `infinity` and `nan` in any case. Type suffixes (`1.5d`) and hex
/// floats are rejected. Non-finite values are passed on; the wallet core
/// rejects them as fee rates.
pub fn parse_rate(key: &'static str, raw: &str) -> Result<f64, ArgumentError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| ArgumentError::InvalidRate {
            key,
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

/// Reads every declared parameter from `call`, in declaration order.
///
/// Stops at the first argument that fails to parse. Keys present in the call
/// but not declared are ignored.
pub fn coerce(params: &[Param], call: &MethodCall) -> Result<TypedArgs, ArgumentError> {
    let mut args = TypedArgs::default();
    for param in params {
        let raw = call.argument(param.key);
        let value = match param.kind {
            ParamKind::Text => Value::Text(raw.unwrap_or_default().to_string()),
            ParamKind::Integer { default } => match raw {
                Some(raw) => Value::Integer(parse_integer(param.key, raw)?),
                None => Value::Integer(default),
            },
            ParamKind::Rate { default } => match raw {
                Some(raw) => Value::Rate(parse_rate(param.key, raw)?),
                None => Value::Rate(default),
            },
        };
        args.values.insert(param.key, value);
    }
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMS: [Param; 3] = [
        Param::text("networkName"),
        Param::integer("amount", 0),
        Param::rate("feeRate", 0.0),
    ];

    #[test]
    fn test_absent_arguments_take_defaults() {
        let call = MethodCall::new("createTransaction").null_arg("amount");
        let mut args = coerce(&PARAMS, &call).unwrap();

        assert_eq!(args.len(), 3);
        assert_eq!(args.take_text("networkName"), "");
        assert_eq!(args.take_integer("amount"), 0);
        assert_eq!(args.take_rate("feeRate"), 0.0);
        assert!(args.is_empty());
    }

    #[test]
    fn test_present_arguments_are_parsed() {
        let call = MethodCall::new("createTransaction")
            .arg("networkName", "Regtest")
            .arg("amount", "-42")
            .arg("feeRate", " 2.5e1 ")
            .arg("ignored", "x");
        let mut args = coerce(&PARAMS, &call).unwrap();

        assert_eq!(args.take_text("networkName"), "Regtest");
        assert_eq!(args.take_integer("amount"), -42);
        assert_eq!(args.take_rate("feeRate"), 25.0);
        assert_eq!(args.take_text("ignored"), "");
    }

    #[test]
    fn test_integer_parse_failures() {
        assert_eq!(parse_integer("num", "+7"), Ok(7));
        for bad in ["", "abc", "1.5", " 3", "99999999999999999999"] {
            let err = parse_integer("num", bad).unwrap_err();
            assert!(matches!(err, ArgumentError::InvalidInteger { key: "num", .. }));
        }
    }

    #[test]
    fn test_rate_grammar() {
        assert_eq!(parse_rate("feeRate", "2"), Ok(2.0));
        assert_eq!(parse_rate("feeRate", "-0.5"), Ok(-0.5));
        assert_eq!(parse_rate("feeRate", "inf"), Ok(f64::INFINITY));
        assert_eq!(parse_rate("feeRate", "-Infinity"), Ok(f64::NEG_INFINITY));
        assert!(parse_rate("feeRate", "NaN").unwrap().is_nan());

        for bad in ["", "1.5d", "1.5f", "0x1p3", "1,5"] {
            let err = parse_rate("feeRate", bad).unwrap_err();
            assert!(matches!(err, ArgumentError::InvalidRate { key: "feeRate", .. }));
        }
    }

    #[test]
    fn test_rate_parse_failure_stops_coercion() {
        let call = MethodCall::new("createTransaction")
            .arg("amount", "10")
            .arg("feeRate", "fast");
        let err = coerce(&PARAMS, &call).unwrap_err();
        assert_eq!(
            err,
            ArgumentError::InvalidRate {
                key: "feeRate",
                value: "fast".into(),
                reason: "invalid float literal".into(),
            }
        );
    }
}
