// Query evaluation over indexes built from corpus files
//
// X = {1, 2}, Y = {2, 3}, Z = {3, 4}

use crate::common::{build_services, TestCorpus};
use sift::core::query::QueryEvaluator;
use sift::SiftError;

fn ids(services: &sift::Services, query: &str) -> Vec<String> {
    services
        .evaluate(query)
        .unwrap_or_else(|e| panic!("{query:?} failed: {e}"))
        .sorted()
        .into_iter()
        .map(String::from)
        .collect()
}

#[test]
fn test_basic_operators() {
    let services = build_services(&TestCorpus::small());

    assert_eq!(ids(&services, "cat"), vec!["D1"]);
    assert_eq!(ids(&services, "cat AND dog"), vec!["D1"]);
    assert_eq!(ids(&services, "cat OR bird"), vec!["D1", "D2"]);
    assert_eq!(ids(&services, "dog AND NOT cat"), vec!["D2"]);
}

#[test]
fn test_unknown_term_is_empty() {
    let services = build_services(&TestCorpus::small());

    assert!(ids(&services, "fish").is_empty());
    assert!(ids(&services, "fish AND dog").is_empty());
    assert_eq!(ids(&services, "fish OR dog"), vec!["D1", "D2"]);
}

#[test]
fn test_lower_case_operators_are_terms() {
    let services = build_services(&TestCorpus::small());

    // "and" is an unknown term, and the two terms give a surplus operand
    assert_eq!(ids(&services, "cat and"), Vec::<String>::new());
}

#[test]
fn test_left_to_right_equal_precedence() {
    let services = build_services(&TestCorpus::xyz());

    // (X OR Y) AND Z
    assert_eq!(ids(&services, "x OR y AND z"), vec!["3"]);
    // (X AND Y) OR Z
    assert_eq!(ids(&services, "x AND y OR z"), vec!["2", "3", "4"]);
}

#[test]
fn test_and_not() {
    let services = build_services(&TestCorpus::xyz());

    // X − Y
    assert_eq!(ids(&services, "x AND NOT y"), vec!["1"]);
    // (X ∪ Y) − Z
    assert_eq!(ids(&services, "x OR y AND NOT z"), vec!["1", "2"]);
}

#[test]
fn test_not_drain_consumes_operator_below() {
    let services = build_services(&TestCorpus::xyz());

    // The drained NOT takes the OR with it: Z − Y is returned and X is left over
    assert_eq!(ids(&services, "x OR z NOT y"), vec!["4"]);
}

#[test]
fn test_bare_not_underflows() {
    let services = build_services(&TestCorpus::small());

    let err = services.evaluate("dog NOT cat").unwrap_err();
    assert!(matches!(
        err,
        SiftError::StackUnderflow {
            stack: "operator",
            phase: "drain"
        }
    ));
}

#[test]
fn test_and_not_followed_by_operator_underflows() {
    let services = build_services(&TestCorpus::xyz());

    let err = services.evaluate("x AND NOT y OR z").unwrap_err();
    assert!(err.is_malformed_query(), "unexpected error: {err}");
}

#[test]
fn test_malformed_queries() {
    let services = build_services(&TestCorpus::xyz());

    for query in ["AND x", "x AND", "x AND OR y", "NOT x", "OR"] {
        let err = services.evaluate(query).unwrap_err();
        assert!(
            matches!(err, SiftError::StackUnderflow { .. }),
            "{query:?} should underflow, got {err}"
        );
    }
}

#[test]
fn test_empty_query() {
    let services = build_services(&TestCorpus::xyz());

    for query in ["", "   ", "\t\n"] {
        assert!(matches!(
            services.evaluate(query),
            Err(SiftError::InvalidQuery(_))
        ));
    }
}

#[test]
fn test_shared_index_concurrent_evaluation() {
    let services = build_services(&TestCorpus::xyz());

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let index = &services.index;
                scope.spawn(move || {
                    QueryEvaluator::new(index)
                        .evaluate_str("x AND NOT y")
                        .unwrap()
                        .len()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
    });
}
