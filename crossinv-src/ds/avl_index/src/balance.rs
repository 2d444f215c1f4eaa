use crate::{node::NodeId, AvlIndex};

impl AvlIndex {
    /// Walks up from a freshly linked leaf, charging each parent for the
    /// side the walk came from.
    ///
    /// A parent that ends at `0` absorbed the growth; one at `±2` is
    /// rotated, after which the subtree is back to its old height. Either
    /// way nothing above changes.
    pub(crate) fn retrace_insert(&mut self, leaf: NodeId) {
        let mut child = leaf;
        while let Some(parent) = self.arena[child].parent {
            let node = &mut self.arena[parent];
            if node.left == Some(child) {
                node.balance -= 1;
            } else {
                node.balance += 1;
            }
            match node.balance {
                0 => return,
                -2 | 2 => {
                    self.rebalance(parent);
                    return;
                }
                _ => child = parent,
            }
        }
    }

    /// Walks up from `parent`, the parent of a node that was just unlinked
    /// and held `value`.
    ///
    /// Which side lost height is decided by comparing against `value`
    /// rather than by child links: after a removal by predecessor, the node
    /// that received the predecessor's contents holds exactly `value` and
    /// lost height on its left, hence `<=`.
    ///
    /// A node that ends at `±1` kept its height and stops the walk; `0`
    /// means it shrank and the walk goes on. After a rotation the walk
    /// resumes above the new subtree top if that top ended at `0`, since
    /// the rotation itself shrank the subtree.
    pub(crate) fn retrace_remove(
        &mut self,
        mut parent: Option<NodeId>,
        value: i64,
    ) {
        while let Some(mut cur) = parent {
            loop {
                let node = &mut self.arena[cur];
                if value <= node.value {
                    node.balance += 1;
                } else {
                    node.balance -= 1;
                }
                match (node.balance, node.parent) {
                    (-1 | 1, _) | (0, None) => return,
                    (0, Some(up)) => cur = up,
                    _ => break,
                }
            }

            let top = self.rebalance(cur);
            if self.arena[top].balance != 0 {
                return;
            }
            parent = self.arena[top].parent;
        }
    }

    /// Restores `node`, whose balance factor is `±2`, returning the new
    /// top of its subtree.
    pub(crate) fn rebalance(&mut self, node: NodeId) -> NodeId {
        match self.arena[node].balance {
            2 => {
                let child = self.heavy_child(node, Side::Right);
                match self.arena[child].balance {
                    1 => self.set_balance(node, child, 0, 0),
                    0 => self.set_balance(node, child, 1, -1),
                    _ => return self.rotate_right_left(node, child),
                }
                self.rotate_left(node, child);
                child
            }
            -2 => {
                let child = self.heavy_child(node, Side::Left);
                match self.arena[child].balance {
                    -1 => self.set_balance(node, child, 0, 0),
                    0 => self.set_balance(node, child, -1, 1),
                    _ => return self.rotate_left_right(node, child),
                }
                self.rotate_right(node, child);
                child
            }
            bf => unreachable!("rebalancing a node with balance {bf}"),
        }
    }

    fn rotate_right_left(&mut self, node: NodeId, child: NodeId) -> NodeId {
        let grandchild = self.heavy_child(child, Side::Left);
        match self.arena[grandchild].balance {
            0 => self.set_balance(node, child, 0, 0),
            1 => self.set_balance(node, child, -1, 0),
            _ => self.set_balance(node, child, 0, 1),
        }
        self.arena[grandchild].balance = 0;
        self.rotate_right(child, grandchild);
        self.rotate_left(node, grandchild);
        grandchild
    }

    fn rotate_left_right(&mut self, node: NodeId, child: NodeId) -> NodeId {
        let grandchild = self.heavy_child(child, Side::Right);
        match self.arena[grandchild].balance {
            0 => self.set_balance(node, child, 0, 0),
            1 => self.set_balance(node, child, 0, -1),
            _ => self.set_balance(node, child, 1, 0),
        }
        self.arena[grandchild].balance = 0;
        self.rotate_left(child, grandchild);
        self.rotate_right(node, grandchild);
        grandchild
    }

    fn set_balance(&mut self, node: NodeId, child: NodeId, bn: i8, bc: i8) {
        self.arena[node].balance = bn;
        self.arena[child].balance = bc;
    }

    fn heavy_child(&self, id: NodeId, side: Side) -> NodeId {
        let node = &self.arena[id];
        let child = match side {
            Side::Left => node.left,
            Side::Right => node.right,
        };
        match child {
            Some(child) => child,
            None => unreachable!("{side:?}-heavy node without a {side:?} child"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Side {
    Left,
    Right,
}

#[cfg(test)]
mod tests {
    use crate::{AvlIndex, Removal};

    fn build(values: &[i64]) -> AvlIndex {
        let mut index = AvlIndex::new();
        for (i, &v) in values.iter().enumerate() {
            index.insert(v, i).unwrap();
        }
        index.assert_invariants();
        index
    }

    #[test]
    fn single_rotations_on_insert() {
        assert_eq!(build(&[1, 2, 3]).preorder(), [(2, 0), (1, 0), (3, 0)]);
        assert_eq!(build(&[3, 2, 1]).preorder(), [(2, 0), (1, 0), (3, 0)]);

        // rotation below the root
        let index = build(&[5, 3, 8, 9, 10]);
        assert_eq!(
            index.preorder(),
            [(5, 1), (3, 0), (9, 0), (8, 0), (10, 0)],
        );
    }

    #[test]
    fn double_rotations_on_insert() {
        assert_eq!(build(&[1, 3, 2]).preorder(), [(2, 0), (1, 0), (3, 0)]);
        assert_eq!(build(&[3, 1, 2]).preorder(), [(2, 0), (1, 0), (3, 0)]);

        // grandchild right-heavy before the right-left rotation
        let index = build(&[20, 10, 40, 30, 50, 35]);
        assert_eq!(
            index.preorder(),
            [(30, 0), (20, -1), (10, 0), (40, 0), (35, 0), (50, 0)],
        );

        // grandchild left-heavy before the left-right rotation
        let index = build(&[40, 20, 50, 10, 30, 25]);
        assert_eq!(
            index.preorder(),
            [(30, 0), (20, 0), (10, 0), (25, 0), (40, 1), (50, 0)],
        );
    }

    #[test]
    fn rotation_with_balanced_child_on_remove() {
        // Removing 1 leaves 2 at +2 with a balanced right child; the
        // single rotation keeps the height, so nothing above moves.
        let mut index = build(&[2, 1, 4, 3, 5]);
        assert_eq!(index.remove(1), Removal::Removed(1));
        index.assert_invariants();
        assert_eq!(index.preorder(), [(4, -1), (2, 1), (3, 0), (5, 0)]);
    }

    #[test]
    fn cascading_rotations_on_remove() {
        // Fibonacci-shaped tree: every internal node leans left, so
        // removing the rightmost leaf triggers a rotation at each level
        // on the way up.
        let values = [8, 5, 11, 3, 7, 10, 12, 2, 4, 6, 9, 1];
        let mut index = build(&values);
        assert_eq!(
            index.preorder(),
            [
                (8, -1),
                (5, -1),
                (3, -1),
                (2, -1),
                (1, 0),
                (4, 0),
                (7, -1),
                (6, 0),
                (11, -1),
                (10, -1),
                (9, 0),
                (12, 0),
            ],
        );

        assert_eq!(index.remove(12), Removal::Removed(6));
        index.assert_invariants();
        assert_eq!(
            index.preorder(),
            [
                (5, 0),
                (3, -1),
                (2, -1),
                (1, 0),
                (4, 0),
                (8, 0),
                (7, -1),
                (6, 0),
                (10, 0),
                (9, 0),
                (11, 0),
            ],
        );
    }
}
