//! Two-stack boolean query evaluation.
//!
//! Queries are infix expressions without parentheses. Evaluation keeps a
//! value stack of postings sets and an operator stack. Before an operator
//! is pushed, pending operators of equal or higher precedence are reduced.
//! After the last token the remaining operators are drained.
//!
//! Reduction pops an operator, then `v1`, then `v2`:
//!
//! ```text
//! AND  ->  v1 ∩ v2
//! OR   ->  v1 ∪ v2
//! NOT  ->  v2 − v1
//! ```
//!
//! `NOT` is a binary "and-not". While draining, a `NOT` also discards the
//! operator beneath it, so `A AND NOT B` drains to `A − B`. The same
//! discard does not happen when `NOT` is reduced during the main pass,
//! which is why `A AND NOT B OR C` leaves the `AND` without operands and
//! fails with a stack underflow.
//!
//! Index postings are borrowed onto the value stack; only reduction
//! results are allocated.

use std::borrow::Cow;

use crate::core::error::{Result, SiftError};
use crate::core::index::{InvertedIndex, PostingsSet};
use crate::core::query::token::{parse_query, Operator, QueryToken};

/// Phase names used in underflow errors
const PHASE_REDUCE: &str = "reduction";
const PHASE_DRAIN: &str = "drain";

/// Evaluates queries against a shared, read-only index
#[derive(Debug, Clone, Copy)]
pub struct QueryEvaluator<'i> {
    index: &'i InvertedIndex,
}

impl<'i> QueryEvaluator<'i> {
    pub fn new(index: &'i InvertedIndex) -> Self {
        Self { index }
    }

    /// Split a query line on whitespace and evaluate it
    pub fn evaluate_str(&self, query: &str) -> Result<PostingsSet> {
        self.evaluate(&parse_query(query))
    }

    /// Evaluate a token stream
    ///
    /// # Errors
    ///
    /// - `InvalidQuery` if `tokens` is empty
    /// - `StackUnderflow` if the stream lacks operands or operators
    pub fn evaluate(&self, tokens: &[QueryToken<'_>]) -> Result<PostingsSet> {
        if tokens.is_empty() {
            return Err(SiftError::InvalidQuery(
                "Query cannot be empty".to_string(),
            ));
        }

        let mut stacks = Stacks::default();

        for token in tokens {
            match *token {
                QueryToken::Operator(op) => {
                    while let Some(top) = stacks.ops.last().copied() {
                        if top.precedence() < op.precedence() {
                            break;
                        }
                        stacks.reduce()?;
                    }
                    stacks.ops.push(op);
                }
                QueryToken::Term(term) => stacks.values.push(self.resolve(term)),
            }
        }

        stacks.drain()?;

        if stacks.values.len() > 1 {
            tracing::warn!(
                "Query left {} unused operands, returning the last one",
                stacks.values.len() - 1
            );
        }

        stacks
            .values
            .pop()
            .map(Cow::into_owned)
            .ok_or(SiftError::StackUnderflow {
                stack: "value",
                phase: PHASE_DRAIN,
            })
    }

    /// Postings for a term; unknown terms match nothing
    fn resolve(&self, term: &str) -> Cow<'i, PostingsSet> {
        match self.index.postings(term) {
            Some(postings) => Cow::Borrowed(postings),
            None => Cow::Owned(PostingsSet::new()),
        }
    }
}

/// Per-evaluation state, discarded after each query
#[derive(Default)]
struct Stacks<'i> {
    values: Vec<Cow<'i, PostingsSet>>,
    ops: Vec<Operator>,
}

impl<'i> Stacks<'i> {
    /// Pop one operator and two values, push the combined set
    fn reduce(&mut self) -> Result<()> {
        let op = pop(&mut self.ops, "operator", PHASE_REDUCE)?;
        let (v1, v2) = self.pop_operands(PHASE_REDUCE)?;
        self.values.push(Cow::Owned(combine(op, &v1, &v2)));
        Ok(())
    }

    /// Empty the operator stack once all tokens are consumed
    fn drain(&mut self) -> Result<()> {
        while let Some(first_op) = self.ops.pop() {
            let (v1, v2) = self.pop_operands(PHASE_DRAIN)?;

            let result = if first_op == Operator::Not {
                // The operator under NOT is consumed by it
                pop(&mut self.ops, "operator", PHASE_DRAIN)?;
                v2.difference(&v1)
            } else {
                combine(first_op, &v1, &v2)
            };

            self.values.push(Cow::Owned(result));
        }
        Ok(())
    }

    fn pop_operands(
        &mut self,
        phase: &'static str,
    ) -> Result<(Cow<'i, PostingsSet>, Cow<'i, PostingsSet>)> {
        let v1 = pop(&mut self.values, "value", phase)?;
        let v2 = pop(&mut self.values, "value", phase)?;
        Ok((v1, v2))
    }
}

fn pop<T>(stack: &mut Vec<T>, name: &'static str, phase: &'static str) -> Result<T> {
    stack
        .pop()
        .ok_or(SiftError::StackUnderflow { stack: name, phase })
}

/// Apply `op` to the operands in pop order (`v1` popped first)
fn combine(op: Operator, v1: &PostingsSet, v2: &PostingsSet) -> PostingsSet {
    match op {
        Operator::And => v1.intersection(v2),
        Operator::Or => v1.union(v2),
        Operator::Not => v2.difference(v1),
    }
}
