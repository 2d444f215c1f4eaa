//! Single rotations. Balance factors are the caller's business.

use crate::{node::NodeId, AvlIndex};

impl AvlIndex {
    /// Lifts `pivot`, the right child of `node`, into `node`'s place.
    ///
    /// ```text
    ///     node               pivot
    ///    /    \             /     \
    ///   a    pivot   =>   node     c
    ///       /     \      /    \
    ///     inner    c    a    inner
    /// ```
    pub(crate) fn rotate_left(&mut self, node: NodeId, pivot: NodeId) {
        debug_assert_eq!(self.arena[node].right, Some(pivot));

        let parent = self.arena[node].parent;
        let inner = self.arena[pivot].left;

        self.replace_child(parent, node, Some(pivot));
        self.arena[pivot].parent = parent;

        self.arena[pivot].left = Some(node);
        self.arena[node].parent = Some(pivot);

        self.arena[node].right = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(node);
        }
    }

    /// Mirror image of [`rotate_left`](Self::rotate_left): lifts `pivot`,
    /// the left child of `node`.
    pub(crate) fn rotate_right(&mut self, node: NodeId, pivot: NodeId) {
        debug_assert_eq!(self.arena[node].left, Some(pivot));

        let parent = self.arena[node].parent;
        let inner = self.arena[pivot].right;

        self.replace_child(parent, node, Some(pivot));
        self.arena[pivot].parent = parent;

        self.arena[pivot].right = Some(node);
        self.arena[node].parent = Some(pivot);

        self.arena[node].left = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(node);
        }
    }
}
