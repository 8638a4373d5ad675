// src/error.rs

//! Error types shared by the polynomial core, the file layer and the console.

use std::path::PathBuf;
use thiserror::Error;

/// A single term token that matched none of the accepted term grammars.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid term format: {token}")]
pub struct ParseTermError {
    pub token: String,
}

impl ParseTermError {
    pub fn new(token: &str) -> Self {
        ParseTermError {
            token: token.to_string(),
        }
    }
}

/// A token skipped while parsing a line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TermError {
    #[error(transparent)]
    Malformed(#[from] ParseTermError),

    /// Well-formed, but merging it pushed a coefficient out of `i64` range
    #[error("Term {token} overflows the coefficient of x^{exponent}")]
    Overflow { token: String, exponent: i64 },
}

#[derive(Debug, Error)]
pub enum PolystackError {

    /// File missing, unreadable or unwritable
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Arithmetic requested with too few polynomials in the collection
    #[error("Not enough polynomials in the stack: need {required}, have {available}")]
    InsufficientOperands { required: usize, available: usize },

    #[error("No polynomials to save")]
    EmptyCollection,

    #[error("No polynomial to save: the polynomial is empty")]
    EmptyPolynomial,

    #[error("Coefficient overflow at exponent {exponent}")]
    CoefficientOverflow { exponent: i64 },

    #[error("Exponent overflow: {left} + {right}")]
    ExponentOverflow { left: i64, right: i64 },
}

impl PolystackError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PolystackError::Io {
            path: path.into(),
            source,
        }
    }
}
