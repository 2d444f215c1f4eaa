/// Value → position pairs in insertion order, searched linearly.
pub struct PositionList(Vec<(i64, usize)>);

impl PositionList {
    pub fn new() -> Self { Self(vec![]) }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn len(&self) -> usize { self.0.len() }

    pub fn get(&self, value: i64) -> Option<usize> {
        self.0.iter().find(|&&(v, _)| v == value).map(|&(_, p)| p)
    }

    /// Keeps the existing position if `value` is already present.
    pub fn insert(&mut self, value: i64, position: usize) -> bool {
        if self.get(value).is_some() {
            return false;
        }
        self.0.push((value, position));
        true
    }

    pub fn remove(&mut self, value: i64) -> Option<usize> {
        (0..self.0.len())
            .find(|&i| self.0[i].0 == value)
            .map(|i| self.0.remove(i).1)
    }

    pub fn sorted(&self) -> Vec<(i64, usize)> {
        let mut res = self.0.clone();
        res.sort_unstable();
        res
    }
}

impl Default for PositionList {
    fn default() -> Self { Self::new() }
}

#[test]
fn sanity_check() {
    let mut list = PositionList::new();
    assert!(list.is_empty());

    assert!(list.insert(3, 0));
    assert!(list.insert(1, 1));
    assert!(!list.insert(3, 2));
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(3), Some(0));
    assert_eq!(list.get(2), None);
    assert_eq!(list.sorted(), [(1, 1), (3, 0)]);

    assert_eq!(list.remove(3), Some(0));
    assert_eq!(list.remove(3), None);
    assert!(list.insert(3, 5));
    assert_eq!(list.get(3), Some(5));
}
