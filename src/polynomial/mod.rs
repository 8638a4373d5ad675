// src/polynomial/mod.rs

pub mod arithmetic;
pub mod codec;
pub mod polynomial;

pub use polynomial::{Polynomial, Term};
