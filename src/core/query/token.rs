//! Query token stream.
//!
//! A query is a single line of whitespace-separated tokens. The
//! literals `AND`, `OR` and `NOT` (exact case) are operators; every
//! other token is a term looked up in the index as-is.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Boolean operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operator {
    And,
    Or,
    Not,
}

impl Operator {
    /// Binding strength used for eager reduction
    pub fn precedence(self) -> u8 {
        match self {
            Operator::And | Operator::Or => 1,
            Operator::Not => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AND" => Ok(Operator::And),
            "OR" => Ok(Operator::Or),
            "NOT" => Ok(Operator::Not),
            _ => Err(()),
        }
    }
}

/// One element of a query token stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryToken<'a> {
    Operator(Operator),
    Term(&'a str),
}

impl<'a> QueryToken<'a> {
    /// Classify a raw token
    pub fn parse(raw: &'a str) -> Self {
        match raw.parse() {
            Ok(op) => QueryToken::Operator(op),
            Err(()) => QueryToken::Term(raw),
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, QueryToken::Operator(_))
    }
}

impl fmt::Display for QueryToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryToken::Operator(op) => op.fmt(f),
            QueryToken::Term(term) => f.write_str(term),
        }
    }
}

/// Split a query line on whitespace and classify each token
pub fn parse_query(line: &str) -> Vec<QueryToken<'_>> {
    line.split_whitespace().map(QueryToken::parse).collect()
}
