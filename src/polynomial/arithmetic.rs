// src/polynomial/arithmetic.rs

//! Exact arithmetic over sparse polynomials.
//!
//! Operands are borrowed and never modified. Every result is built from an
//! empty accumulator through `Polynomial::insert_term`, so it is normalized
//! by construction.

use log::debug;
use crate::error::PolystackError;
use crate::polynomial::polynomial::Polynomial;

pub fn add(left: &Polynomial, right: &Polynomial) -> Result<Polynomial, PolystackError> {
    merge(left, right, false)
}

pub fn subtract(left: &Polynomial, right: &Polynomial) -> Result<Polynomial, PolystackError> {
    merge(left, right, true)
}

pub fn multiply(left: &Polynomial, right: &Polynomial) -> Result<Polynomial, PolystackError> {
    let mut result = Polynomial::new();

    for term1 in left {
        for term2 in right {
            let exponent = term1
                .get_exponent()
                .checked_add(term2.get_exponent())
                .ok_or(PolystackError::ExponentOverflow {
                    left: term1.get_exponent(),
                    right: term2.get_exponent(),
                })?;
            let coefficient = term1
                .get_coefficient()
                .checked_mul(term2.get_coefficient())
                .ok_or(PolystackError::CoefficientOverflow { exponent })?;
            result.insert_term(coefficient, exponent)?;
        }
    }

    debug!("multiply: {} x {} terms -> {} terms", left.len(), right.len(), result.len());
    Ok(result)
}

/// Two-pointer merge of two descending term sequences. With `negate_right`
/// the terms of `right` enter the result with their sign flipped.
fn merge(left: &Polynomial, right: &Polynomial, negate_right: bool) -> Result<Polynomial, PolystackError> {
    let lhs = left.terms();
    let rhs = right.terms();
    let mut result = Polynomial::new();
    let mut i = 0;
    let mut j = 0;

    let signed = |coefficient: i64, exponent: i64| -> Result<i64, PolystackError> {
        if negate_right {
            coefficient
                .checked_neg()
                .ok_or(PolystackError::CoefficientOverflow { exponent })
        } else {
            Ok(coefficient)
        }
    };

    while i < lhs.len() || j < rhs.len() {
        match (lhs.get(i), rhs.get(j)) {
            (Some(term1), Some(term2)) if term1.get_exponent() == term2.get_exponent() => {
                let exponent = term1.get_exponent();
                let coefficient = term1
                    .get_coefficient()
                    .checked_add(signed(term2.get_coefficient(), exponent)?)
                    .ok_or(PolystackError::CoefficientOverflow { exponent })?;
                result.insert_term(coefficient, exponent)?;
                i += 1;
                j += 1;
            }
            (Some(term1), Some(term2)) if term1.get_exponent() > term2.get_exponent() => {
                result.insert_term(term1.get_coefficient(), term1.get_exponent())?;
                i += 1;
            }
            (Some(term1), None) => {
                result.insert_term(term1.get_coefficient(), term1.get_exponent())?;
                i += 1;
            }
            (_, Some(term2)) => {
                let exponent = term2.get_exponent();
                result.insert_term(signed(term2.get_coefficient(), exponent)?, exponent)?;
                j += 1;
            }
            (None, None) => break,
        }
    }

    Ok(result)
}
