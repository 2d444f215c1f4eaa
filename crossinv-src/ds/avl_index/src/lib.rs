//! Ordered index from `i64` values to the positions they were first seen at.
//!
//! [`AvlIndex`] is an AVL tree whose nodes carry a balance factor
//! (`height(right) - height(left)`) and a parent link. Nodes live in an
//! arena and refer to each other by index, so parent links are plain
//! back-references and dropping the index releases every node at once.
//!
//! ```
//! use avl_index::{AvlIndex, Removal};
//!
//! let mut index = AvlIndex::new();
//! for (i, v) in [1, 3, 5, 2, 4, 6].into_iter().enumerate() {
//!     assert_eq!(index.insert(v, i), Ok(true));
//! }
//! assert_eq!(index.get(5), Some(2));
//! assert_eq!(index.get(7), None);
//!
//! // first writer wins
//! assert_eq!(index.insert(5, 10), Ok(false));
//! assert_eq!(index.get(5), Some(2));
//!
//! assert_eq!(index.remove(5), Removal::Removed(2));
//! assert_eq!(index.remove(5), Removal::NotFound);
//! ```

use std::{cmp::Ordering, collections::TryReserveError, fmt};

use node::{Arena, Node, NodeId};

mod balance;
pub mod debug;
mod node;
mod rotate;

pub struct AvlIndex {
    arena: Arena,
    root: Option<NodeId>,
    len: usize,
}

/// Outcome of [`AvlIndex::remove`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Removal {
    /// The value was present; carries the position it was tagged with.
    Removed(usize),
    /// The index holds no values at all.
    Empty,
    NotFound,
}

impl AvlIndex {
    pub fn new() -> Self { Self { arena: Arena::new(), root: None, len: 0 } }

    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    pub fn get(&self, value: i64) -> Option<usize> {
        self.find(value).map(|id| self.arena[id].position)
    }
    pub fn contains(&self, value: i64) -> bool { self.find(value).is_some() }

    /// Tags `value` with `position`.
    ///
    /// Returns `Ok(false)` without touching the tree if `value` is already
    /// present; the earlier position is kept. On allocation failure the
    /// tree is left exactly as it was.
    pub fn insert(
        &mut self,
        value: i64,
        position: usize,
    ) -> Result<bool, TryReserveError> {
        let mut parent = None;
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = &self.arena[id];
            parent = Some(id);
            cur = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Equal => return Ok(false),
                Ordering::Greater => node.right,
            };
        }

        let new = self.arena.alloc(value, position, parent)?;
        match parent {
            None => self.root = Some(new),
            Some(p) if value < self.arena[p].value => {
                self.arena[p].left = Some(new)
            }
            Some(p) => self.arena[p].right = Some(new),
        }
        self.len += 1;
        self.retrace_insert(new);
        Ok(true)
    }

    pub fn remove(&mut self, value: i64) -> Removal {
        if self.root.is_none() {
            return Removal::Empty;
        }
        let Some(target) = self.find(value) else {
            return Removal::NotFound;
        };
        let position = self.arena[target].position;

        let Node { left, right, .. } = self.arena[target];
        let unlinked = match (left, right) {
            (Some(left), Some(_)) => {
                // Move the predecessor's contents up, then drop the
                // predecessor, which has no right child.
                let pred = self.rightmost(left);
                let Node { value, position, left: pred_left, .. } =
                    self.arena[pred];
                let target = &mut self.arena[target];
                target.value = value;
                target.position = position;
                self.splice(pred, pred_left);
                pred
            }
            (only, None) | (None, only) => {
                self.splice(target, only);
                target
            }
        };

        let Node { value, parent, .. } = self.arena[unlinked];
        self.retrace_remove(parent, value);
        self.arena.free(unlinked);
        self.len -= 1;
        Removal::Removed(position)
    }

    /// Empties the index by removing the root until nothing is left, then
    /// releases the node storage.
    pub fn clear(&mut self) {
        while let Some(root) = self.root {
            let value = self.arena[root].value;
            self.remove(value);
        }
        debug_assert_eq!(self.len, 0);
        self.arena = Arena::new();
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter { index: self, next: self.root.map(|r| self.leftmost(r)) }
    }

    fn find(&self, value: i64) -> Option<NodeId> {
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = &self.arena[id];
            cur = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(id),
                Ordering::Greater => node.right,
            };
        }
        None
    }

    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.arena[id].left {
            id = left;
        }
        id
    }
    fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.arena[id].right {
            id = right;
        }
        id
    }

    fn successor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self.arena[id].right {
            return Some(self.leftmost(right));
        }
        let mut child = id;
        while let Some(parent) = self.arena[child].parent {
            if self.arena[parent].left == Some(child) {
                return Some(parent);
            }
            child = parent;
        }
        None
    }

    /// Makes `new` take `old`'s place under `old`'s parent (or as the root).
    /// `old`'s own links are left stale.
    fn replace_child(
        &mut self,
        parent: Option<NodeId>,
        old: NodeId,
        new: Option<NodeId>,
    ) {
        match parent {
            None => self.root = new,
            Some(p) if self.arena[p].left == Some(old) => {
                self.arena[p].left = new
            }
            Some(p) => {
                debug_assert_eq!(self.arena[p].right, Some(old));
                self.arena[p].right = new;
            }
        }
    }

    /// Unlinks `id`, which has at most one child, putting `child` in its
    /// slot.
    fn splice(&mut self, id: NodeId, child: Option<NodeId>) {
        let parent = self.arena[id].parent;
        self.replace_child(parent, id, child);
        if let Some(c) = child {
            self.arena[c].parent = parent;
        }
    }
}

impl Default for AvlIndex {
    fn default() -> Self { Self::new() }
}

impl fmt::Debug for AvlIndex {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_map().entries(self.iter()).finish()
    }
}

/// In-order `(value, position)` pairs, see [`AvlIndex::iter`].
pub struct Iter<'a> {
    index: &'a AvlIndex,
    next: Option<NodeId>,
}

impl Iterator for Iter<'_> {
    type Item = (i64, usize);
    fn next(&mut self) -> Option<(i64, usize)> {
        let id = self.next?;
        self.next = self.index.successor(id);
        let node = &self.index.arena[id];
        Some((node.value, node.position))
    }
}

impl<'a> IntoIterator for &'a AvlIndex {
    type Item = (i64, usize);
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Iter<'a> { self.iter() }
}

#[cfg(test)]
mod tests {
    use position_list::PositionList;
    use rand::{seq::SliceRandom, Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;
    use randgen::{Distinct, Gen};

    use crate::{AvlIndex, Removal};

    #[test]
    fn sanity_check() {
        let mut index = AvlIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.get(1), None);
        assert_eq!(index.remove(1), Removal::Empty);

        for (i, v) in [1, 3, 5, 2, 4, 6].into_iter().enumerate() {
            assert_eq!(index.insert(v, i), Ok(true));
            index.assert_invariants();
        }
        assert_eq!(index.len(), 6);
        for (v, i) in [(1, 0), (3, 1), (5, 2), (2, 3), (4, 4), (6, 5)] {
            assert_eq!(index.get(v), Some(i));
        }
        assert_eq!(index.get(0), None);
        assert_eq!(index.get(7), None);
        assert_eq!(index.remove(7), Removal::NotFound);

        let sorted: Vec<_> = index.iter().collect();
        assert_eq!(sorted, [(1, 0), (2, 3), (3, 1), (4, 4), (5, 2), (6, 5)]);
    }

    #[test]
    fn duplicates_keep_first_position() {
        let mut index = AvlIndex::new();
        assert_eq!(index.insert(5, 0), Ok(true));
        assert_eq!(index.insert(5, 1), Ok(false));
        assert_eq!(index.insert(5, 2), Ok(false));
        assert_eq!(index.len(), 1);
        assert_eq!(index.get(5), Some(0));

        assert_eq!(index.remove(5), Removal::Removed(0));
        assert_eq!(index.remove(5), Removal::Empty);
    }

    #[test]
    fn remove_two_children() {
        // 4 has both children; 3 is its predecessor and moves up.
        let mut index = AvlIndex::new();
        for (i, v) in [4, 2, 6, 1, 3, 5, 7].into_iter().enumerate() {
            index.insert(v, i).unwrap();
        }
        assert_eq!(index.remove(4), Removal::Removed(0));
        index.assert_invariants();
        assert_eq!(index.get(4), None);
        assert_eq!(index.get(3), Some(4));
        assert_eq!(
            index.preorder(),
            [(3, 0), (2, -1), (1, 0), (6, 0), (5, 0), (7, 0)],
        );

        assert_eq!(index.remove(3), Removal::Removed(4));
        assert_eq!(index.remove(2), Removal::Removed(1));
        index.assert_invariants();
        let values: Vec<_> = index.iter().map(|(v, _)| v).collect();
        assert_eq!(values, [1, 5, 6, 7]);
    }

    #[test]
    fn remove_and_reinsert() {
        let values = [8, 3, 10, 1, 6, 14, 4, 7, 13];
        let mut index = AvlIndex::new();
        for (i, &v) in values.iter().enumerate() {
            index.insert(v, i).unwrap();
        }
        let before: Vec<_> = index.iter().collect();
        for (i, &v) in values.iter().enumerate() {
            assert_eq!(index.remove(v), Removal::Removed(i));
            index.assert_invariants();
            assert_eq!(index.insert(v, i), Ok(true));
            index.assert_invariants();
            assert_eq!(index.iter().collect::<Vec<_>>(), before);
        }
    }

    #[test]
    fn clear() {
        let mut index = AvlIndex::new();
        for v in 0..100 {
            index.insert(v * 7 % 101, v as usize).unwrap();
        }
        index.clear();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.iter().next(), None);
        assert_eq!(index.remove(0), Removal::Empty);

        // still usable afterwards
        index.insert(3, 9).unwrap();
        assert_eq!(index.get(3), Some(9));
        index.assert_invariants();
    }

    #[test]
    fn debug_fmt() {
        let mut index = AvlIndex::new();
        assert_eq!(format!("{index:?}"), "{}");
        for (i, v) in [30, 10, 20].into_iter().enumerate() {
            index.insert(v, i).unwrap();
        }
        assert_eq!(format!("{index:?}"), "{10: 1, 20: 2, 30: 0}");
    }

    #[test]
    fn ascending_stays_balanced() {
        let n = 1 << 10;
        let mut index = AvlIndex::new();
        for v in 0..n {
            index.insert(v, v as usize).unwrap();
        }
        index.assert_invariants();
        assert_eq!(index.height(), 11);

        for v in (0..n).step_by(2) {
            assert_eq!(index.remove(v), Removal::Removed(v as usize));
        }
        index.assert_invariants();
        assert_eq!(index.len(), n as usize / 2);
    }

    #[test]
    fn random_ops() {
        let mut rng = ChaCha20Rng::from_seed([0x5A; 32]);
        for _ in 0..50 {
            let len = rng.gen_range(1..200);
            let values =
                Distinct { bound: -500..500, len }.generate(&mut rng);
            let mut actual = AvlIndex::new();
            let mut expected = PositionList::new();

            for (i, &v) in values.iter().enumerate() {
                assert_eq!(actual.insert(v, i), Ok(expected.insert(v, i)));
            }
            actual.assert_invariants();

            let mut order = values.clone();
            order.shuffle(&mut rng);
            for &v in &order[..len / 2] {
                let removed = expected
                    .remove(v)
                    .map_or(Removal::NotFound, Removal::Removed);
                assert_eq!(actual.remove(v), removed);
                actual.assert_invariants();
            }
            for v in -500..500 {
                assert_eq!(actual.get(v), expected.get(v));
            }
            assert_eq!(actual.iter().collect::<Vec<_>>(), expected.sorted());
        }
    }

    #[test]
    fn random_interleaved() {
        let mut rng = ChaCha20Rng::from_seed([0xC3; 32]);
        let mut actual = AvlIndex::new();
        let mut expected = PositionList::new();
        for i in 0..5000 {
            let v = rng.gen_range(0..64);
            if rng.gen_bool(0.55) {
                assert_eq!(actual.insert(v, i), Ok(expected.insert(v, i)));
            } else {
                let removed = match expected.remove(v) {
                    Some(p) => Removal::Removed(p),
                    None if expected.is_empty() => Removal::Empty,
                    None => Removal::NotFound,
                };
                assert_eq!(actual.remove(v), removed);
            }
            actual.assert_invariants();
            assert_eq!(actual.len(), expected.len());
        }
    }
}
