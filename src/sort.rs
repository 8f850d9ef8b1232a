//! In-place quick sort with a first-element pivot.
//!
//! Partitioning follows Lomuto: the first element is the pivot, a boundary
//! index trails every element found strictly less than the pivot, and the
//! pivot finally moves to that boundary. Equal keys are never swapped past
//! the pivot. The sort is not stable; sorted or reverse-sorted input is the
//! quadratic worst case.
//!
//! Only a strict "less than" relation is needed. Recursion descends into
//! the smaller side and loops on the larger one, so the stack stays
//! O(log n) deep even on worst-case input.

/// Sort `v` ascending.
///
/// ```
/// use algokit::sort::quick_sort;
///
/// let mut v = vec![3, 9, 0, 4, 4, 1];
/// quick_sort(&mut v);
/// assert_eq!(v, vec![0, 1, 3, 4, 4, 9]);
/// ```
pub fn quick_sort<T: PartialOrd>(v: &mut [T]) {
    quick_sort_by(v, |a, b| a < b);
}

/// Sort `v` so that no element is `less` than its predecessor.
///
/// `less` must be a strict weak ordering.
pub fn quick_sort_by<T, F>(v: &mut [T], mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("quick_sort", len = v.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    sort_range(v, &mut less);
}

fn sort_range<T, F>(mut v: &mut [T], less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while v.len() > 1 {
        let pivot = partition(v, less);
        let (left, right) = std::mem::take(&mut v).split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            sort_range(left, less);
            v = right;
        } else {
            sort_range(right, less);
            v = left;
        }
    }
}

/// Partition around `v[0]` and return the pivot's final index.
fn partition<T, F>(v: &mut [T], less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut boundary = 0;
    for j in 1..v.len() {
        if less(&v[j], &v[0]) {
            boundary += 1;
            v.swap(boundary, j);
        }
    }
    v.swap(boundary, 0);
    boundary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_places_pivot() {
        let mut v = [5, 8, 1, 5, 3, 9];
        let p = partition(&mut v, &mut |a: &i32, b: &i32| a < b);
        assert_eq!(p, 2);
        assert_eq!(v[p], 5);
        assert!(v[..p].iter().all(|&x| x < 5));
        assert!(v[p + 1..].iter().all(|&x| x >= 5));
    }

    #[test]
    fn sorted_and_reversed_inputs() {
        let mut up: Vec<i32> = (0..10).collect();
        quick_sort(&mut up);
        assert_eq!(up, (0..10).collect::<Vec<_>>());

        let mut down: Vec<i32> = (0..10).rev().collect();
        quick_sort(&mut down);
        assert_eq!(down, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn trivial_slices() {
        let mut empty: [u8; 0] = [];
        quick_sort(&mut empty);
        let mut one = [42];
        quick_sort(&mut one);
        assert_eq!(one, [42]);
    }

    #[test]
    fn tuples_sort_lexicographically() {
        let mut points = vec![(1, 2), (0, 1), (1, 0), (0, 2), (0, 0), (1, 1)];
        quick_sort(&mut points);
        assert_eq!(
            points,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
    }

    #[test]
    fn custom_order() {
        let mut v = vec!["ccc", "a", "bb", "dddd"];
        quick_sort_by(&mut v, |a, b| a.len() > b.len());
        assert_eq!(v, vec!["dddd", "ccc", "bb", "a"]);
    }

    #[test]
    fn long_sorted_input_does_not_overflow_stack() {
        let mut v: Vec<u32> = (0..10_000).collect();
        quick_sort(&mut v);
        assert!(v.windows(2).all(|w| w[0] <= w[1]));
    }
}
