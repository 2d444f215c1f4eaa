use std::collections::TryReserveError;

/// Counting pairs `i < j` with `self[i] > self[j]` by merge sort.
///
/// Equal elements never count as an inversion.
pub trait Inversion {
    /// Counts on a private copy; `self` is left as is.
    fn inversion(&self) -> u64;

    /// Counts and leaves `self` sorted ascending.
    fn inversion_sort(&mut self) -> u64;

    /// Same as [`inversion_sort`](Self::inversion_sort), but reports a
    /// failure to allocate the merge buffer instead of aborting. `self` is
    /// untouched in that case.
    fn try_inversion_sort(&mut self) -> Result<u64, TryReserveError>;
}

impl<T: Ord + Clone> Inversion for [T] {
    fn inversion(&self) -> u64 { self.to_vec().inversion_sort() }

    fn inversion_sort(&mut self) -> u64 {
        let mut buf = Vec::with_capacity(self.len());
        sort_count(self, &mut buf)
    }

    fn try_inversion_sort(&mut self) -> Result<u64, TryReserveError> {
        let mut buf = vec![];
        buf.try_reserve_exact(self.len())?;
        Ok(sort_count(self, &mut buf))
    }
}

// `buf` has room for `a.len()` elements, so the pushes below never
// reallocate.
fn sort_count<T: Ord + Clone>(a: &mut [T], buf: &mut Vec<T>) -> u64 {
    if a.len() <= 1 {
        return 0;
    }

    // left half is `..=mid`, as in `mid = (lo + hi) / 2` over `[lo, hi]`
    let mid = (a.len() - 1) / 2;
    let (left, right) = a.split_at_mut(mid + 1);
    let mut res = sort_count(left, buf) + sort_count(right, buf);

    buf.clear();
    let (mut il, mut ir) = (0, 0);
    while il < left.len() && ir < right.len() {
        if right[ir] < left[il] {
            // `right[ir]` jumps over everything still in `left`.
            res += (left.len() - il) as u64;
            buf.push(right[ir].clone());
            ir += 1;
        } else {
            buf.push(left[il].clone());
            il += 1;
        }
    }
    buf.extend_from_slice(&left[il..]);
    buf.extend_from_slice(&right[ir..]);
    a.clone_from_slice(buf);
    res
}
