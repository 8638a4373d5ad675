// src/lib.rs

//! Sparse single-variable integer polynomials with exact arithmetic, a text
//! codec, and a LIFO collection driven by a numbered-menu console.

pub mod config;
pub mod core;
pub mod error;
pub mod polynomial;

pub use crate::core::collection::Collection;
pub use crate::error::{ParseTermError, PolystackError, TermError};
pub use crate::polynomial::{Polynomial, Term};
