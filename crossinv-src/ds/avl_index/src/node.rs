use std::{
    collections::TryReserveError,
    ops::{Index, IndexMut},
};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct NodeId(usize);

pub(crate) struct Node {
    pub value: i64,
    pub position: usize,
    /// `height(right) - height(left)`; `-2` and `2` are only observed
    /// between a retrace step and the rotation that follows it.
    pub balance: i8,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    pub parent: Option<NodeId>,
}

enum Slot {
    Occupied(Node),
    // Vacant slots form a singly-linked stack through `next`, so freeing
    // never allocates.
    Vacant { next: Option<NodeId> },
}

pub(crate) struct Arena {
    slots: Vec<Slot>,
    vacant: Option<NodeId>,
}

impl Node {
    fn leaf(value: i64, position: usize, parent: Option<NodeId>) -> Self {
        Self { value, position, balance: 0, left: None, right: None, parent }
    }
}

impl Arena {
    pub fn new() -> Self { Self { slots: vec![], vacant: None } }

    pub fn alloc(
        &mut self,
        value: i64,
        position: usize,
        parent: Option<NodeId>,
    ) -> Result<NodeId, TryReserveError> {
        let node = Node::leaf(value, position, parent);
        if let Some(id) = self.vacant {
            let Slot::Vacant { next } = self.slots[id.0] else {
                unreachable!("free list points at a live node");
            };
            self.vacant = next;
            self.slots[id.0] = Slot::Occupied(node);
            return Ok(id);
        }
        self.slots.try_reserve(1)?;
        let id = NodeId(self.slots.len());
        self.slots.push(Slot::Occupied(node));
        Ok(id)
    }

    pub fn free(&mut self, id: NodeId) {
        debug_assert!(matches!(self.slots[id.0], Slot::Occupied(_)));
        self.slots[id.0] = Slot::Vacant { next: self.vacant };
        self.vacant = Some(id);
    }

    /// Number of slots ever handed out, live or vacant.
    pub fn capacity(&self) -> usize { self.slots.len() }

    pub fn live(&self) -> usize {
        self.slots.iter().filter(|s| matches!(s, Slot::Occupied(_))).count()
    }
}

impl Index<NodeId> for Arena {
    type Output = Node;
    fn index(&self, id: NodeId) -> &Node {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling node id {id:?}"),
        }
    }
}

impl IndexMut<NodeId> for Arena {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling node id {id:?}"),
        }
    }
}
