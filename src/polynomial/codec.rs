// src/polynomial/codec.rs

//! Text form of terms and polynomials.
//!
//! Accepted term tokens, tried in this order:
//!
//! | token          | coefficient | exponent |
//! |----------------|-------------|----------|
//! | `<int>x^<int>` | int         | int      |
//! | `x^<int>`      | 1           | int      |
//! | `-x^<int>`     | -1          | int      |
//! | `<int>x`       | int         | 1        |
//! | `-x`           | -1          | 1        |
//! | `<int>`        | int         | 0        |

use log::warn;
use crate::error::{ParseTermError, TermError};
use crate::polynomial::polynomial::Polynomial;

/// Printed in place of a polynomial without terms.
pub const EMPTY_POLYNOMIAL: &str = "Polynomial is empty.";

pub fn parse_term(token: &str) -> Result<(i64, i64), ParseTermError> {
    let token = token.trim();
    let invalid = || ParseTermError::new(token);

    match token.split_once('x') {
        // A bare `x` is not one of the accepted forms.
        Some(("", "")) => Err(invalid()),
        Some((head, tail)) => {
            let coefficient = match head {
                "" => 1,
                "-" => -1,
                digits => parse_int(digits).ok_or_else(invalid)?,
            };
            let exponent = match tail {
                "" => 1,
                power => {
                    let digits = power.strip_prefix('^').ok_or_else(invalid)?;
                    parse_int(digits).ok_or_else(invalid)?
                }
            };
            Ok((coefficient, exponent))
        }
        None => parse_int(token).map(|c| (c, 0)).ok_or_else(invalid),
    }
}

/// Optionally signed decimal integer. Rejects the empty string and a lone sign.
fn parse_int(text: &str) -> Option<i64> {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Parses a whitespace separated line of term tokens.
///
/// Malformed tokens, and tokens whose coefficient would overflow, are
/// skipped and returned alongside the polynomial built from the rest.
pub fn parse_line(line: &str) -> (Polynomial, Vec<TermError>) {
    let mut polynomial = Polynomial::new();
    let mut rejected = Vec::new();

    for token in line.split_whitespace() {
        let (coefficient, exponent) = match parse_term(token) {
            Ok(term) => term,
            Err(e) => {
                warn!("Skipping term {:?}: {}", token, e);
                rejected.push(TermError::from(e));
                continue;
            }
        };
        if let Err(e) = polynomial.insert_term(coefficient, exponent) {
            warn!("Skipping term {:?}: {}", token, e);
            rejected.push(TermError::Overflow {
                token: token.to_string(),
                exponent,
            });
        }
    }

    (polynomial, rejected)
}

/// Human readable form: `3x^2 - 5x^1 + 4x^0`.
pub fn format_polynomial(polynomial: &Polynomial) -> String {
    if polynomial.is_empty() {
        return EMPTY_POLYNOMIAL.to_string();
    }

    let mut output = String::new();
    for (i, term) in polynomial.iter().enumerate() {
        let coefficient = term.get_coefficient();
        let exponent = term.get_exponent();
        let piece = if i == 0 {
            format!("{}x^{}", coefficient, exponent)
        } else if coefficient > 0 {
            format!(" + {}x^{}", coefficient, exponent)
        } else {
            format!(" - {}x^{}", coefficient.unsigned_abs(), exponent)
        };
        output.push_str(&piece);
    }
    output
}

/// File form: `3x^2 -5x^1 4x^0`. Parses back with `parse_line`.
pub fn to_save_format(polynomial: &Polynomial) -> String {
    polynomial
        .iter()
        .map(|term| format!("{}x^{}", term.get_coefficient(), term.get_exponent()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_grammars() {
        assert_eq!(parse_term("3x^2"), Ok((3, 2)));
        assert_eq!(parse_term("-12x^7"), Ok((-12, 7)));
        assert_eq!(parse_term("x^2"), Ok((1, 2)));
        assert_eq!(parse_term("-x^4"), Ok((-1, 4)));
        assert_eq!(parse_term("-5x"), Ok((-5, 1)));
        assert_eq!(parse_term("-x"), Ok((-1, 1)));
        assert_eq!(parse_term("4"), Ok((4, 0)));
        assert_eq!(parse_term("-4"), Ok((-4, 0)));
    }

    #[test]
    fn test_parse_signed_exponent() {
        assert_eq!(parse_term("2x^-3"), Ok((2, -3)));
    }

    #[test]
    fn test_parse_rejects_malformed_tokens() {
        for token in ["abc", "x", "", "-", "3y", "3x^", "3x2", "x^2x", "3x^2.5", "1.5", "--3", "3xx"] {
            assert_eq!(parse_term(token), Err(ParseTermError::new(token)), "token {:?}", token);
        }
    }

    #[test]
    fn test_parse_line_skips_bad_tokens() {
        let (p, rejected) = parse_line("3x^2 abc -5x 4\n");
        assert_eq!(p, Polynomial::from_terms([(3, 2), (-5, 1), (4, 0)]).unwrap());
        assert_eq!(rejected, vec![TermError::from(ParseTermError::new("abc"))]);
    }

    #[test]
    fn test_parse_line_reports_overflow_separately() {
        let line = format!("{}x^2 1x^2 5", i64::MAX);
        let (p, rejected) = parse_line(&line);
        assert_eq!(p, Polynomial::from_terms([(i64::MAX, 2), (5, 0)]).unwrap());
        assert_eq!(
            rejected,
            vec![TermError::Overflow {
                token: "1x^2".to_string(),
                exponent: 2
            }]
        );
        assert!(rejected[0].to_string().contains("overflows"));
        assert!(!rejected[0].to_string().contains("Invalid term format"));
    }

    #[test]
    fn test_format_polynomial() {
        let p = Polynomial::from_terms([(3, 2), (-5, 1), (4, 0)]).unwrap();
        assert_eq!(format_polynomial(&p), "3x^2 - 5x^1 + 4x^0");
        assert_eq!(p.to_string(), "3x^2 - 5x^1 + 4x^0");

        let negative_lead = Polynomial::from_terms([(-1, 3), (2, 0)]).unwrap();
        assert_eq!(format_polynomial(&negative_lead), "-1x^3 + 2x^0");
    }

    #[test]
    fn test_format_empty_polynomial() {
        assert_eq!(format_polynomial(&Polynomial::new()), EMPTY_POLYNOMIAL);
        assert!(!Polynomial::new().to_string().is_empty());
    }

    #[test]
    fn test_save_format() {
        let p = Polynomial::from_terms([(3, 2), (-5, 1), (4, 0)]).unwrap();
        assert_eq!(to_save_format(&p), "3x^2 -5x^1 4x^0");
    }

    #[test]
    fn test_format_min_coefficient() {
        let p = Polynomial::from_terms([(1, 1), (i64::MIN, 0)]).unwrap();
        assert_eq!(format_polynomial(&p), "1x^1 - 9223372036854775808x^0");
    }
}
