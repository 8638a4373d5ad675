// src/core/serialization/load.rs

use std::fs;
use std::path::Path;
use log::{debug, info};
use crate::core::collection::Collection;
use crate::error::{PolystackError, TermError};
use crate::polynomial::codec;

/// A token that was skipped while loading, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedToken {
    pub line: usize,
    pub error: TermError,
}

/// Outcome of loading one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub rejected: Vec<RejectedToken>,
}

/// Reads `path` and pushes one polynomial per line, in file order.
///
/// The whole file is read before anything is pushed, so an I/O failure
/// leaves `collection` untouched. A blank line yields an empty polynomial.
/// Rejected tokens are skipped and listed in the report.
pub fn polynomials<P: AsRef<Path>>(collection: &mut Collection, path: P) -> Result<LoadReport, PolystackError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| PolystackError::io(path, e))?;

    let mut report = LoadReport::default();
    for (index, line) in content.lines().enumerate() {
        let (polynomial, rejected) = codec::parse_line(line);
        report.rejected.extend(rejected.into_iter().map(|error| RejectedToken { line: index + 1, error }));
        if polynomial.is_empty() {
            debug!("{}:{} holds no terms", path.display(), index + 1);
        }
        collection.push(polynomial);
        report.loaded += 1;
    }

    info!(
        "Loaded {} polynomials from {} ({} tokens rejected)",
        report.loaded,
        path.display(),
        report.rejected.len()
    );
    Ok(report)
}
