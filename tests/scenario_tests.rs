// tests/scenario_tests.rs
//
// Worked examples for parsing, arithmetic and formatting.

use polystack::error::{ParseTermError, PolystackError};
use polystack::polynomial::{arithmetic, codec, Polynomial};
use polystack::Collection;

fn poly(terms: &[(i64, i64)]) -> Polynomial {
    Polynomial::from_terms(terms.iter().copied()).unwrap()
}

fn pairs(p: &Polynomial) -> Vec<(i64, i64)> {
    p.iter().map(|t| (t.get_coefficient(), t.get_exponent())).collect()
}

#[test]
fn test_parse_mixed_line() {
    let (p, rejected) = codec::parse_line("3x^2 -5x 4");
    assert!(rejected.is_empty());
    assert_eq!(pairs(&p), vec![(3, 2), (-5, 1), (4, 0)]);
}

#[test]
fn test_parse_line_merges_repeated_exponents() {
    let (p, _) = codec::parse_line("x^2 4 2x^2 -4");
    assert_eq!(pairs(&p), vec![(3, 2)]);
}

#[test]
fn test_add_cancels_leading_term() {
    let sum = arithmetic::add(&poly(&[(3, 2), (4, 0)]), &poly(&[(-3, 2), (1, 1)])).unwrap();
    assert_eq!(pairs(&sum), vec![(1, 1), (4, 0)]);
}

#[test]
fn test_multiply_binomials() {
    let product = arithmetic::multiply(&poly(&[(1, 1), (2, 0)]), &poly(&[(1, 1), (3, 0)])).unwrap();
    assert_eq!(pairs(&product), vec![(1, 2), (5, 1), (6, 0)]);
}

#[test]
fn test_single_tokens() {
    assert_eq!(codec::parse_term("x^2"), Ok((1, 2)));
    assert_eq!(codec::parse_term("-x"), Ok((-1, 1)));
    assert_eq!(codec::parse_term("abc"), Err(ParseTermError::new("abc")));
}

#[test]
fn test_add_with_single_polynomial() {
    let mut collection = Collection::new();
    collection.push(poly(&[(1, 0)]));
    let err = collection.apply(arithmetic::add).unwrap_err();
    assert!(matches!(err, PolystackError::InsufficientOperands { .. }));
    assert_eq!(collection.len(), 1);
}

#[test]
fn test_empty_polynomial_prints_indicator() {
    let empty = arithmetic::subtract(&poly(&[(2, 1)]), &poly(&[(2, 1)])).unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.to_string(), codec::EMPTY_POLYNOMIAL);
}

#[test]
fn test_print_format_signs() {
    let p = poly(&[(-2, 3), (1, 2), (-7, 0)]);
    assert_eq!(p.to_string(), "-2x^3 + 1x^2 - 7x^0");
}

#[test]
fn test_polynomial_json_round_trip() {
    let p = poly(&[(3, 2), (-5, 1), (4, 0)]);
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(
        json,
        r#"[{"coefficient":3,"exponent":2},{"coefficient":-5,"exponent":1},{"coefficient":4,"exponent":0}]"#
    );
    let back: Polynomial = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);
}

#[test]
fn test_json_input_is_normalized() {
    let json = r#"[{"coefficient":1,"exponent":0},{"coefficient":0,"exponent":5},{"coefficient":2,"exponent":3},{"coefficient":1,"exponent":0}]"#;
    let p: Polynomial = serde_json::from_str(json).unwrap();
    assert_eq!(pairs(&p), vec![(2, 3), (2, 0)]);
}
