use std::{collections::BTreeSet, ops::Range};

use rand::{
    distributions::{Distribution, Uniform},
    seq::SliceRandom,
    Rng,
};

pub trait Gen {
    type Output;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output;
}

/// `len` distinct values from `bound`, sorted ascending.
pub struct StrictAsc {
    pub bound: Range<i64>,
    pub len: usize,
}

/// `len` distinct values from `bound`, in uniformly random order.
pub struct Distinct {
    pub bound: Range<i64>,
    pub len: usize,
}

/// A uniformly random permutation of `0..len`.
pub struct Permutation {
    pub len: usize,
}

/// `len` values from `bound`, repetitions allowed.
pub struct Repeated {
    pub bound: Range<i64>,
    pub len: usize,
}

impl Gen for Range<i64> {
    type Output = i64;
    fn generate<R: Rng>(&self, rng: &mut R) -> i64 {
        Uniform::from(self.clone()).sample(rng)
    }
}

impl Gen for StrictAsc {
    type Output = Vec<i64>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Vec<i64> {
        let Self { bound: Range { start, end }, len } = self;
        let width = (end - start) as usize;
        assert!(*len <= width, "cannot pick {len} distinct values of {width}");

        // Sample the complement instead when more than half is wanted.
        let dense = 2 * len > width;
        let count = if dense { width - len } else { *len };

        let mut seen = BTreeSet::new();
        while seen.len() < count {
            seen.insert((*start..*end).generate(rng));
        }

        if dense {
            (*start..*end).filter(|x| !seen.contains(x)).collect()
        } else {
            seen.into_iter().collect()
        }
    }
}

impl Gen for Distinct {
    type Output = Vec<i64>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Vec<i64> {
        let mut res =
            StrictAsc { bound: self.bound.clone(), len: self.len }.generate(rng);
        res.shuffle(rng);
        res
    }
}

impl Gen for Permutation {
    type Output = Vec<usize>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        let mut res: Vec<_> = (0..self.len).collect();
        res.shuffle(rng);
        res
    }
}

impl Gen for Repeated {
    type Output = Vec<i64>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Vec<i64> {
        let between = Uniform::from(self.bound.clone());
        (0..self.len).map(|_| between.sample(rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use crate::*;

    #[test]
    fn uniformity() {
        let mut rng = ChaCha20Rng::from_seed([0; 32]);
        let n = 10_usize.pow(5);

        // sparse path
        let mut map = BTreeMap::new();
        for _ in 0..n {
            let tmp = StrictAsc { bound: 0..5, len: 2 }.generate(&mut rng);
            *map.entry(tmp).or_insert(0) += 1;
        }
        let k = 10;
        assert_eq!(map.len(), k);
        for &v in map.values() {
            assert!(v >= (n / k) * 95 / 100);
            assert!(v <= (n / k) * 105 / 100);
        }

        // dense path
        let mut map = BTreeMap::new();
        for _ in 0..n {
            let tmp = StrictAsc { bound: 0..5, len: 4 }.generate(&mut rng);
            *map.entry(tmp).or_insert(0) += 1;
        }
        let k = 5;
        assert_eq!(map.len(), k);
        for &v in map.values() {
            assert!(v >= (n / k) * 95 / 100);
            assert!(v <= (n / k) * 105 / 100);
        }
    }

    #[test]
    fn shapes() {
        let mut rng = ChaCha20Rng::from_seed([1; 32]);

        let a = Distinct { bound: -50..50, len: 100 }.generate(&mut rng);
        let mut sorted = a.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (-50..50).collect::<Vec<_>>());

        let p = Permutation { len: 20 }.generate(&mut rng);
        let mut sorted = p.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());

        let r = Repeated { bound: 0..3, len: 1000 }.generate(&mut rng);
        assert_eq!(r.len(), 1000);
        assert!(r.iter().all(|x| (0..3).contains(x)));
    }
}
