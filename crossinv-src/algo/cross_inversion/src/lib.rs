//! Counts pairs of values that appear in both `a` and `b` but in opposite
//! relative order.
//!
//! Every value of `a` is tagged with the position it first occurs at. `b`
//! is then rewritten, in its own order, into the positions its values
//! hold in `a`, skipping values `a` lacks. The answer is the number of
//! inversions of that rewritten sequence.
//!
//! ```
//! use cross_inversion::cross_inversion;
//!
//! let a = [1, 3, 5, 2, 4, 6];
//! let b = [5, 6, 1, 4, 2, 3];
//! // b maps to [2, 5, 0, 4, 3, 1]
//! assert_eq!(cross_inversion(&a, &b).unwrap(), 9);
//! ```

use std::collections::TryReserveError;

use avl_index::AvlIndex;
use inversion::Inversion;
use log::{debug, trace};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("out of memory")]
    Alloc(#[from] TryReserveError),
}

/// Positions in `a` of the values of `b` found there, in `b`'s order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MappedSequence(Vec<usize>);

impl MappedSequence {
    pub fn as_slice(&self) -> &[usize] { &self.0 }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Consumes the sequence; its buffer is sorted as a side effect.
    pub fn count_inversions(mut self) -> Result<u64, Error> {
        Ok(self.0.try_inversion_sort()?)
    }
}

/// Tags each value of `a` with its index. A repeated value keeps the index
/// of its first occurrence.
pub fn build_index(a: &[i64]) -> Result<AvlIndex, Error> {
    let mut index = AvlIndex::new();
    for (i, &v) in a.iter().enumerate() {
        if !index.insert(v, i)? {
            trace!("{v} at {i} is a repeat; keeping the earlier position");
        }
    }
    if index.len() < a.len() {
        debug!("{} repeated values ignored", a.len() - index.len());
    }
    Ok(index)
}

pub fn map_positions(
    index: &AvlIndex,
    b: &[i64],
) -> Result<MappedSequence, Error> {
    let mut res = vec![];
    res.try_reserve_exact(index.len().min(b.len()))?;
    for &v in b {
        if let Some(p) = index.get(v) {
            // `b` may repeat a value, so the guess above can fall short.
            res.try_reserve(1)?;
            res.push(p);
        }
    }
    Ok(MappedSequence(res))
}

pub fn cross_inversion(a: &[i64], b: &[i64]) -> Result<u64, Error> {
    let mut index = build_index(a)?;
    let mapped = map_positions(&index, b)?;
    index.clear();
    debug!(
        "{} of {} values of b found among {} values of a",
        mapped.len(),
        b.len(),
        a.len()
    );

    let res = mapped.count_inversions()?;
    debug!("{res} inversions");
    Ok(res)
}
