// src/core/serialization/save.rs

use std::fs;
use std::path::Path;
use log::info;
use crate::error::PolystackError;
use crate::polynomial::{codec, Polynomial};

/// Writes `polynomial` in save format to `path`, replacing any existing file.
///
/// An empty polynomial is refused and the file is left alone.
pub fn polynomial<P: AsRef<Path>>(polynomial: &Polynomial, path: P) -> Result<(), PolystackError> {
    let path = path.as_ref();
    if polynomial.is_empty() {
        return Err(PolystackError::EmptyPolynomial);
    }
    fs::write(path, codec::to_save_format(polynomial)).map_err(|e| PolystackError::io(path, e))?;
    info!("Saved {} terms to {}", polynomial.len(), path.display());
    Ok(())
}
