//! Atomic filter conditions

use serde::Serialize;
use std::fmt;

/// Comparison operator of a filter condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// `:` equality (contains for text fields)
    Equals,
    /// `<` less than or equal
    LessOrEqual,
    /// `>` greater than or equal
    GreaterOrEqual,
}

impl Operator {
    /// Every operator
    pub const ALL: [Operator; 3] = [
        Operator::Equals,
        Operator::LessOrEqual,
        Operator::GreaterOrEqual,
    ];

    /// The single ASCII symbol used in the filter syntax
    pub fn symbol(self) -> char {
        match self {
            Operator::Equals => ':',
            Operator::LessOrEqual => '<',
            Operator::GreaterOrEqual => '>',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One parsed filter condition: `key`, `operator`, raw `value`
///
/// The value stays textual here. It is coerced against the field type
/// when the condition is turned into a predicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Criterion {
    key: String,
    operator: Operator,
    value: String,
}

impl Criterion {
    /// Create a criterion
    ///
    /// `key` must be non-empty. The parser never produces an empty key, and
    /// schema resolution rejects one even in release builds.
    pub fn new(key: impl Into<String>, operator: Operator, value: impl Into<String>) -> Self {
        let key = key.into();
        debug_assert!(!key.is_empty(), "criterion key must not be empty");
        Self {
            key,
            operator,
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.key, self.operator, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_distinct() {
        let symbols: Vec<char> = Operator::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols, vec![':', '<', '>']);
    }

    #[test]
    fn test_criterion_display_matches_syntax() {
        let criterion = Criterion::new("age", Operator::GreaterOrEqual, "30");
        assert_eq!(criterion.to_string(), "age>30");
        assert_eq!(criterion.key(), "age");
        assert_eq!(criterion.operator(), Operator::GreaterOrEqual);
        assert_eq!(criterion.value(), "30");
    }
}
