//! Reading reference strings and frame counts from text.
//!
//! A reference string is written as comma-separated page numbers:
//! `7, 0, 1, 2, 0, 3`. Trace files use the same syntax and may also put
//! one or more references per line; lines starting with `#` are comments.

use std::collections::HashSet;
use std::fs;
use std::hash::Hash;
use std::path::Path;

use tracing::debug;

use crate::common::{Error, PageId, Result};

/// Parse a comma-separated reference string.
///
/// Blank input is the empty reference string.
///
/// # Errors
/// `Error::InvalidPageReference` for the first token that is not a
/// non-negative integer (including empty tokens such as in `"1,,2"`).
///
/// # Example
/// ```
/// use evictionsim::{parse_reference_string, PageId};
///
/// let refs = parse_reference_string("7, 0, 1").unwrap();
/// assert_eq!(refs, vec![PageId::new(7), PageId::new(0), PageId::new(1)]);
/// ```
pub fn parse_reference_string(text: &str) -> Result<Vec<PageId>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    text.split(',')
        .enumerate()
        .map(|(position, token)| {
            token
                .parse::<PageId>()
                .map_err(|_| Error::InvalidPageReference {
                    position,
                    token: token.trim().to_string(),
                })
        })
        .collect()
}

/// Parse a frame count.
///
/// # Errors
/// - `Error::InvalidCapacity` if the value is zero or negative
/// - `Error::InvalidFrameCount` if the text is not an integer
pub fn parse_frame_count(text: &str) -> Result<usize> {
    let trimmed = text.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| Error::InvalidFrameCount(trimmed.to_string()))?;

    if value < 1 {
        return Err(Error::InvalidCapacity(value));
    }
    usize::try_from(value).map_err(|_| Error::InvalidFrameCount(trimmed.to_string()))
}

/// Load a reference string from a trace file.
///
/// Every non-comment line contributes its comma-separated references, in
/// file order. Blank lines are skipped.
///
/// # Errors
/// - `Error::Io` if the file cannot be read
/// - `Error::InvalidPageReference` for a malformed token; `position` counts
///   references across the whole file
pub fn load_reference_file(path: impl AsRef<Path>) -> Result<Vec<PageId>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let joined = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join(",");

    let refs = parse_reference_string(&joined)?;
    debug!(path = %path.display(), references = refs.len(), "loaded reference trace");
    Ok(refs)
}

/// Number of distinct pages in a reference string.
pub fn distinct_pages<P: Eq + Hash>(refs: &[P]) -> usize {
    refs.iter().collect::<HashSet<_>>().len()
}
