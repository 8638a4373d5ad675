// src/polynomial/polynomial.rs

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::slice::Iter;
use log::trace;
use serde::{Deserialize, Serialize};
use crate::error::PolystackError;
use crate::polynomial::codec;

/// One monomial `coefficient * x^exponent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Term {
    coefficient: i64,
    exponent: i64,
}

impl Term {
    pub fn new(coefficient: i64, exponent: i64) -> Self {
        Term {
            coefficient,
            exponent,
        }
    }

    pub fn get_coefficient(&self) -> i64 {
        self.coefficient
    }

    pub fn get_exponent(&self) -> i64 {
        self.exponent
    }
}

/// Sparse single-variable polynomial.
///
/// Terms are kept strictly descending by exponent, with no duplicate
/// exponents and no zero coefficients. `insert_term` is the only mutator, so
/// every value reachable through the public API satisfies these invariants.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Term>", into = "Vec<Term>")]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    pub fn new() -> Self {
        Polynomial { terms: Vec::new() }
    }

    /// Builds a polynomial by inserting every `(coefficient, exponent)` pair in order.
    pub fn from_terms<I>(terms: I) -> Result<Self, PolystackError>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let mut polynomial = Polynomial::new();
        for (coefficient, exponent) in terms {
            polynomial.insert_term(coefficient, exponent)?;
        }
        Ok(polynomial)
    }

    /// Adds `coefficient * x^exponent` to the polynomial.
    ///
    /// A term with an existing exponent is merged into it, and removed when
    /// the merged coefficient is zero. Zero coefficients are ignored.
    pub fn insert_term(&mut self, coefficient: i64, exponent: i64) -> Result<(), PolystackError> {
        if coefficient == 0 {
            return Ok(());
        }

        // Descending order: terms with a larger exponent sort before the new one.
        match self.terms.binary_search_by(|term| exponent.cmp(&term.exponent)) {
            Ok(index) => {
                let existing = self.terms[index].coefficient;
                let merged = existing
                    .checked_add(coefficient)
                    .ok_or(PolystackError::CoefficientOverflow { exponent })?;
                if merged == 0 {
                    trace!("x^{} cancelled", exponent);
                    self.terms.remove(index);
                } else {
                    self.terms[index] = Term::new(merged, exponent);
                }
            }
            Err(index) => {
                self.terms.insert(index, Term::new(coefficient, exponent));
            }
        }
        Ok(())
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn iter(&self) -> Iter<'_, Term> {
        self.terms.iter()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn leading_term(&self) -> Option<&Term> {
        self.terms.first()
    }

    /// Largest exponent present, `None` for the empty polynomial.
    pub fn degree(&self) -> Option<i64> {
        self.leading_term().map(Term::get_exponent)
    }

    /// Coefficient of `x^exponent`, zero when absent.
    pub fn coefficient(&self, exponent: i64) -> i64 {
        self.terms
            .binary_search_by(|term| exponent.cmp(&term.exponent))
            .map_or(0, |index| self.terms[index].coefficient)
    }
}

impl TryFrom<Vec<Term>> for Polynomial {
    type Error = PolystackError;

    fn try_from(terms: Vec<Term>) -> Result<Self, Self::Error> {
        Polynomial::from_terms(terms.into_iter().map(|t| (t.coefficient, t.exponent)))
    }
}

impl From<Polynomial> for Vec<Term> {
    fn from(polynomial: Polynomial) -> Self {
        polynomial.terms
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = &'a Term;
    type IntoIter = Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", codec::format_polynomial(self))
    }
}
