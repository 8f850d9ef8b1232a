//! Counting helpers shared by the iterators.

/// Number of k-subsets of an n-set, `C(n, k)`, or `None` on overflow.
///
/// Returns `Some(0)` when `k > n`.
pub fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc * (n - i) is always divisible by (i + 1): it is C(n, i + 1) * (i + 1).
        acc = acc.checked_mul((n - i) as u128)? / (i as u128 + 1);
    }
    usize::try_from(acc).ok()
}

/// Number of points of the grid `{0..divisions}^dimension`, or `None` on overflow.
///
/// The empty product (`dimension == 0`) is one point.
pub fn grid_point_count(dimension: usize, divisions: usize) -> Option<usize> {
    let exp = u32::try_from(dimension).ok()?;
    divisions.checked_pow(exp)
}
