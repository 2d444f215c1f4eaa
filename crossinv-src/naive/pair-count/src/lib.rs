/// Number of pairs `i < j` with `a[i] > a[j]`, by checking every pair.
pub fn inversion_pairs<T: Ord>(a: &[T]) -> u64 {
    let n = a.len();
    (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .filter(|&(i, j)| a[i] > a[j])
        .count() as u64
}

#[test]
fn sanity_check() {
    assert_eq!(inversion_pairs(&[1, 5, 4, 2, 3]), 5);
    assert_eq!(inversion_pairs(&[1, 1, 1]), 0);
    assert_eq!(inversion_pairs(&[3, 2, 1]), 3);

    let empty: [(); 0] = [];
    assert_eq!(inversion_pairs(&empty), 0);
}
