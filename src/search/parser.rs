//! Filter string tokenizer
//!
//! Syntax: comma separated conditions, each `key<op>value` where `<op>` is one
//! of `:`, `<`, `>`. The first operator symbol in a condition splits key from
//! value; the value keeps any later symbols verbatim. There is no quoting, no
//! escaping of the delimiter and no grouping.

use super::criterion::{Criterion, Operator};
use super::error::FilterError;
use regex::Regex;
use serde::Serialize;
use std::str::FromStr;
use std::sync::OnceLock;

/// Condition delimiter
pub const DELIMITER: char = ',';

/// Ordered list of criteria parsed from one filter string
///
/// Order follows the source text. It carries no meaning for matching (all
/// criteria are AND-ed) and is kept for stable diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilterExpression {
    criteria: Vec<Criterion>,
}

impl FilterExpression {
    /// Parse an optional raw filter
    ///
    /// `None` and the empty string both mean "no filtering".
    pub fn parse(raw: Option<&str>) -> Result<Self, FilterError> {
        match raw {
            None => Ok(Self::default()),
            Some(raw) => raw.parse(),
        }
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn into_criteria(self) -> Vec<Criterion> {
        self.criteria
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

impl FromStr for FilterExpression {
    type Err = FilterError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.is_empty() {
            return Ok(Self::default());
        }

        let criteria = raw
            .split(DELIMITER)
            .enumerate()
            .map(|(position, token)| parse_condition(position, token))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { criteria })
    }
}

impl From<Vec<Criterion>> for FilterExpression {
    fn from(criteria: Vec<Criterion>) -> Self {
        Self { criteria }
    }
}

impl IntoIterator for FilterExpression {
    type Item = Criterion;
    type IntoIter = std::vec::IntoIter<Criterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.criteria.into_iter()
    }
}

fn condition_regex() -> &'static Regex {
    static CONDITION_REGEX: OnceLock<Regex> = OnceLock::new();
    CONDITION_REGEX.get_or_init(|| {
        Regex::new(r"(?s)^(?P<key>[^:<>]*)(?P<op>[:<>])(?P<value>.*)$")
            .expect("condition pattern is valid")
    })
}

fn parse_condition(position: usize, token: &str) -> Result<Criterion, FilterError> {
    let malformed = |reason: &'static str| FilterError::MalformedFilter {
        token: token.to_string(),
        position,
        reason,
    };

    if token.is_empty() {
        return Err(malformed("empty condition"));
    }

    let captures = condition_regex()
        .captures(token)
        .ok_or_else(|| malformed("missing operator, expected one of ':', '<', '>'"))?;

    let key = &captures["key"];
    let value = &captures["value"];
    if key.is_empty() {
        return Err(malformed("missing field name"));
    }
    if value.is_empty() {
        return Err(malformed("missing value"));
    }

    // the pattern only captures one of the three symbols
    let operator = match &captures["op"] {
        "<" => Operator::LessOrEqual,
        ">" => Operator::GreaterOrEqual,
        _ => Operator::Equals,
    };

    Ok(Criterion::new(key, operator, value))
}
