//! Structural checks and dumps, mostly for tests.

use std::fmt::Write;

use crate::{node::NodeId, AvlIndex};

impl AvlIndex {
    /// Height of the tree; `0` when empty.
    pub fn height(&self) -> usize {
        fn dfs(index: &AvlIndex, id: Option<NodeId>) -> usize {
            id.map_or(0, |id| {
                let node = &index.arena[id];
                1 + dfs(index, node.left).max(dfs(index, node.right))
            })
        }
        dfs(self, self.root)
    }

    /// `(value, balance factor)` for every node, in pre-order.
    pub fn preorder(&self) -> Vec<(i64, i8)> {
        let mut res = vec![];
        let mut stack: Vec<_> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = &self.arena[id];
            res.push((node.value, node.balance));
            stack.extend(node.right);
            stack.extend(node.left);
        }
        res
    }

    /// # Panics
    /// Panics if a parent link disagrees with the structure, a stored
    /// balance factor is wrong or out of `-1..=1`, values are not strictly
    /// increasing in order, or `len()` is off.
    pub fn assert_invariants(&self) {
        // returns (height, node count)
        fn dfs(
            index: &AvlIndex,
            id: NodeId,
            parent: Option<NodeId>,
            bounds: (Option<i64>, Option<i64>),
        ) -> (usize, usize) {
            let node = &index.arena[id];
            assert_eq!(node.parent, parent, "parent link of {}", node.value);

            let (lo, hi) = bounds;
            let in_range = lo.map_or(true, |lo| lo < node.value)
                && hi.map_or(true, |hi| node.value < hi);
            assert!(in_range, "order at {}", node.value);

            let (lh, lc) = node.left.map_or((0, 0), |left| {
                dfs(index, left, Some(id), (lo, Some(node.value)))
            });
            let (rh, rc) = node.right.map_or((0, 0), |right| {
                dfs(index, right, Some(id), (Some(node.value), hi))
            });

            let actual = rh as isize - lh as isize;
            assert_eq!(
                node.balance as isize, actual,
                "stored balance of {}",
                node.value
            );
            assert!((-1..=1).contains(&actual), "unbalanced at {}", node.value);
            (1 + lh.max(rh), 1 + lc + rc)
        }

        let count = self.root.map_or(0, |root| {
            assert_eq!(self.arena[root].parent, None, "root has a parent");
            dfs(self, root, None, (None, None)).1
        });
        assert_eq!(count, self.len, "reachable nodes");
        assert_eq!(self.arena.live(), self.len, "live arena slots");
    }

    /// Renders the tree sideways, right subtree on top, one node per line
    /// as `value (position) [balance]`.
    pub fn visualize(&self) -> String {
        fn dfs(
            index: &AvlIndex,
            id: NodeId,
            prefix: &str,
            link: Link,
            out: &mut String,
        ) {
            let node = &index.arena[id];
            let (above, below) = match link {
                Link::Root => ("", ""),
                Link::Upper => ("    ", "│   "),
                Link::Lower => ("│   ", "    "),
            };
            if let Some(right) = node.right {
                let prefix = format!("{prefix}{above}");
                dfs(index, right, &prefix, Link::Upper, out);
            }
            let branch = match link {
                Link::Root => "",
                Link::Upper => "┌── ",
                Link::Lower => "└── ",
            };
            let _ = writeln!(
                out,
                "{prefix}{branch}{} ({}) [{:+}]",
                node.value, node.position, node.balance
            );
            if let Some(left) = node.left {
                let prefix = format!("{prefix}{below}");
                dfs(index, left, &prefix, Link::Lower, out);
            }
        }

        #[derive(Clone, Copy)]
        enum Link {
            Root,
            Upper,
            Lower,
        }

        let mut out = String::new();
        if let Some(root) = self.root {
            dfs(self, root, "", Link::Root, &mut out);
        }
        out
    }
}

#[test]
fn visualize() {
    let mut index = AvlIndex::new();
    assert_eq!(index.visualize(), "");

    for (i, v) in [4, 2, 6, 1, 3, 7].into_iter().enumerate() {
        index.insert(v, i).unwrap();
    }
    let expected = [
        "    ┌── 7 (5) [+0]",
        "┌── 6 (2) [+1]",
        "4 (0) [+0]",
        "│   ┌── 3 (4) [+0]",
        "└── 2 (1) [+0]",
        "    └── 1 (3) [+0]",
    ];
    assert_eq!(index.visualize().lines().collect::<Vec<_>>(), expected);
}

#[test]
#[should_panic(expected = "stored balance")]
fn detect_stale_balance() {
    let mut index = AvlIndex::new();
    for (i, v) in [2, 1, 3].into_iter().enumerate() {
        index.insert(v, i).unwrap();
    }
    let root = index.root.unwrap();
    index.arena[root].balance = 1;
    index.assert_invariants();
}
