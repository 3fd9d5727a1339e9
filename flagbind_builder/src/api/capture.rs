use std::marker::PhantomData;
use std::str::FromStr;

use crate::constant::negated;
use crate::error::FlagError;
use crate::matcher::RawValues;
use crate::prelude::{AliasParser, Parser};

fn convert<T: FromStr>(name: &str, token: &str) -> Result<T, FlagError> {
    T::from_str(token).map_err(|_| FlagError::conversion::<T>(name, token))
}

/// A parser for a flag that takes precisely one value.
///
/// Multiple values are rejected as a [`FlagError::DuplicateFlag`], rather than picking one of them.
pub struct ScalarParser<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Default for ScalarParser<T> {
    fn default() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T: FromStr> Parser<T> for ScalarParser<T> {
    fn parse(&self, name: &str, values: &[&str]) -> Result<T, FlagError> {
        match values {
            [] => Err(FlagError::missing(name)),
            [token] => convert(name, token),
            _ => Err(FlagError::duplicate(name)),
        }
    }
}

/// A parser for a flag that takes one or more values, preserving their order.
pub struct SliceParser<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Default for SliceParser<T> {
    fn default() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T: FromStr> Parser<Vec<T>> for SliceParser<T> {
    fn parse(&self, name: &str, values: &[&str]) -> Result<Vec<T>, FlagError> {
        if values.is_empty() {
            return Err(FlagError::missing(name));
        }

        values.iter().map(|token| convert(name, token)).collect()
    }
}

/// Parse boolean text: `1`, `t`, `T`, `TRUE`, `true`, `True`, `0`, `f`, `F`, `FALSE`, `false`, `False`.
pub fn parse_bool(token: &str) -> Option<bool> {
    match token {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

// Without explicit text, the flag's own name means `true` and its negation means `false`.
fn resolve_switch(name: &str, alias: &str, token: &str) -> Result<bool, FlagError> {
    let negate = alias == negated(name);
    let value = if token.is_empty() {
        true
    } else {
        parse_bool(token).ok_or_else(|| FlagError::conversion::<bool>(name, token))?
    };

    Ok(value != negate)
}

/// A parser for a boolean flag and its generated `no-` alias.
///
/// * `--flag` is `true`, `--no-flag` is `false`.
/// * `--flag=false` is `false`, `--no-flag=false` is `true`.
/// * Specifying the flag more than once (under any of its aliases) is a [`FlagError::DuplicateFlag`].
#[derive(Debug, Default)]
pub struct BoolParser;

impl AliasParser<bool> for BoolParser {
    fn parse(&self, name: &str, values: &RawValues) -> Result<bool, FlagError> {
        let mut entries = values.iter();

        match (entries.next(), entries.next()) {
            (None, _) => Err(FlagError::missing(name)),
            (Some((alias, token)), None) => resolve_switch(name, alias, token),
            (Some(_), Some(_)) => Err(FlagError::duplicate(name)),
        }
    }
}

/// A parser for a multi-valued boolean flag.
///
/// Each occurrence (under any alias) produces one element, resolved as per [`BoolParser`], in input order.
#[derive(Debug, Default)]
pub struct BoolSliceParser;

impl AliasParser<Vec<bool>> for BoolSliceParser {
    fn parse(&self, name: &str, values: &RawValues) -> Result<Vec<bool>, FlagError> {
        if values.is_empty() {
            return Err(FlagError::missing(name));
        }

        values
            .iter()
            .map(|(alias, token)| resolve_switch(name, alias, token))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidCapture;
    use rstest::rstest;

    fn raw(values: Vec<(&str, &str)>) -> RawValues {
        values.into_iter().collect()
    }

    #[rstest]
    #[case(vec!["1"], 1)]
    #[case(vec!["01"], 1)]
    #[case(vec!["-7"], -7)]
    fn scalar(#[case] values: Vec<&str>, #[case] expected: i32) {
        let parser = ScalarParser::<i32>::default();
        assert_eq!(parser.parse("abc", values.as_slice()).unwrap(), expected);
    }

    #[test]
    fn scalar_string() {
        let parser = ScalarParser::<String>::default();
        assert_eq!(parser.parse("abc", &["x=y"]).unwrap(), "x=y");
        assert_eq!(parser.parse("abc", &[""]).unwrap(), "");
    }

    #[rstest]
    #[case(vec!["x"])]
    #[case(vec![""])]
    #[case(vec!["1.0"])]
    #[case(vec!["4294967296"])]
    fn scalar_invalid(#[case] values: Vec<&str>) {
        // Setup
        let parser = ScalarParser::<u32>::default();

        // Execute
        let result = parser.parse("abc", values.as_slice());

        // Verify
        assert_matches!(result, Err(FlagError::InvalidValue { name, reason }) => {
            assert_eq!(name, "abc");
            assert_eq!(reason, InvalidCapture::InvalidConversion {
                token: values[0].to_string(),
                type_name: "u32",
            });
        });
    }

    #[test]
    fn scalar_missing() {
        let parser = ScalarParser::<u32>::default();
        assert_matches!(
            parser.parse("abc", &[]),
            Err(FlagError::MissingFlag { name }) if name == "abc"
        );
    }

    #[rstest]
    #[case(vec!["1", "2"])]
    #[case(vec!["1", "1"])]
    #[case(vec!["x", "y", "z"])]
    fn scalar_duplicate(#[case] values: Vec<&str>) {
        let parser = ScalarParser::<u32>::default();
        assert_matches!(
            parser.parse("abc", values.as_slice()),
            Err(FlagError::DuplicateFlag { name }) if name == "abc"
        );
    }

    #[rstest]
    #[case(vec!["1"], vec![1.0])]
    #[case(vec!["1", "2.5", "1"], vec![1.0, 2.5, 1.0])]
    #[case(vec!["-0.5", "3e2"], vec![-0.5, 300.0])]
    fn slice(#[case] values: Vec<&str>, #[case] expected: Vec<f64>) {
        let parser = SliceParser::<f64>::default();
        assert_eq!(parser.parse("abc", values.as_slice()).unwrap(), expected);
    }

    #[test]
    fn slice_missing() {
        let parser = SliceParser::<u8>::default();
        assert_matches!(
            parser.parse("abc", &[]),
            Err(FlagError::MissingFlag { .. })
        );
    }

    #[rstest]
    #[case(vec!["1", "x"], "x")]
    #[case(vec!["256", "1"], "256")]
    #[case(vec![""], "")]
    fn slice_invalid(#[case] values: Vec<&str>, #[case] expected_token: &str) {
        // Setup
        let parser = SliceParser::<u8>::default();

        // Execute
        let result = parser.parse("abc", values.as_slice());

        // Verify
        assert_matches!(result, Err(FlagError::InvalidValue { reason: InvalidCapture::InvalidConversion { token, type_name }, .. }) => {
            assert_eq!(token, expected_token);
            assert_eq!(type_name, "u8");
        });
    }

    #[rstest]
    #[case("1", Some(true))]
    #[case("t", Some(true))]
    #[case("True", Some(true))]
    #[case("TRUE", Some(true))]
    #[case("0", Some(false))]
    #[case("F", Some(false))]
    #[case("false", Some(false))]
    #[case("yes", None)]
    #[case("tRuE", None)]
    #[case("", None)]
    fn bool_text(#[case] token: &str, #[case] expected: Option<bool>) {
        assert_eq!(parse_bool(token), expected);
    }

    #[rstest]
    #[case(vec![("flag", "")], true)]
    #[case(vec![("no-flag", "")], false)]
    #[case(vec![("flag", "true")], true)]
    #[case(vec![("flag", "false")], false)]
    #[case(vec![("no-flag", "true")], false)]
    #[case(vec![("no-flag", "false")], true)]
    #[case(vec![("no-flag", "0")], true)]
    #[case(vec![("f", "")], true)]
    fn bool_parser(#[case] values: Vec<(&str, &str)>, #[case] expected: bool) {
        assert_eq!(BoolParser.parse("flag", &raw(values)).unwrap(), expected);
    }

    #[rstest]
    #[case(vec![("flag", ""), ("flag", "")])]
    #[case(vec![("flag", ""), ("no-flag", "")])]
    #[case(vec![("no-flag", "true"), ("no-flag", "true")])]
    fn bool_parser_duplicate(#[case] values: Vec<(&str, &str)>) {
        assert_matches!(
            BoolParser.parse("flag", &raw(values)),
            Err(FlagError::DuplicateFlag { name }) if name == "flag"
        );
    }

    #[test]
    fn bool_parser_missing() {
        assert_matches!(
            BoolParser.parse("flag", &RawValues::default()),
            Err(FlagError::MissingFlag { name }) if name == "flag"
        );
    }

    #[rstest]
    #[case(vec![("flag", "x")])]
    #[case(vec![("no-flag", "yes")])]
    fn bool_parser_invalid(#[case] values: Vec<(&str, &str)>) {
        assert_matches!(
            BoolParser.parse("flag", &raw(values)),
            Err(FlagError::InvalidValue { reason: InvalidCapture::InvalidConversion { type_name: "bool", .. }, .. })
        );
    }

    #[test]
    fn bool_parser_negated_name() {
        // A flag whose own name starts with the negation prefix is still affirmative.
        assert!(BoolParser
            .parse("no-cache", &raw(vec![("no-cache", "")]))
            .unwrap());
        assert!(!BoolParser
            .parse("no-cache", &raw(vec![("no-no-cache", "")]))
            .unwrap());
    }

    #[rstest]
    #[case(vec![("flag", "")], vec![true])]
    #[case(vec![("flag", ""), ("no-flag", ""), ("flag", "false")], vec![true, false, false])]
    #[case(vec![("no-flag", "false"), ("no-flag", "")], vec![true, false])]
    fn bool_slice_parser(#[case] values: Vec<(&str, &str)>, #[case] expected: Vec<bool>) {
        assert_eq!(
            BoolSliceParser.parse("flag", &raw(values)).unwrap(),
            expected
        );
    }

    #[test]
    fn bool_slice_parser_failures() {
        assert_matches!(
            BoolSliceParser.parse("flag", &RawValues::default()),
            Err(FlagError::MissingFlag { .. })
        );
        assert_matches!(
            BoolSliceParser.parse("flag", &raw(vec![("flag", ""), ("no-flag", "x")])),
            Err(FlagError::InvalidValue { .. })
        );
    }

    #[test]
    fn closure_parser() {
        // Setup
        let parser = |name: &str, values: &[&str]| -> Result<usize, FlagError> {
            match values {
                [] => Err(FlagError::missing(name)),
                _ => Ok(values.iter().map(|v| v.len()).sum()),
            }
        };

        // Execute & Verify
        assert_eq!(Parser::parse(&parser, "abc", &["ab", "c"]).unwrap(), 3);
    }
}
