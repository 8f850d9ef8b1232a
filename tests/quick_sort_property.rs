use algokit::sort::{quick_sort, quick_sort_by};
use proptest::prelude::*;

proptest! {
    #[test]
    fn matches_std_sort(mut v in proptest::collection::vec(-1000i32..1000, 0..200)) {
        let mut expected = v.clone();
        expected.sort();
        quick_sort(&mut v);
        prop_assert_eq!(v, expected);
    }

    #[test]
    fn many_duplicates(mut v in proptest::collection::vec(0u8..3, 0..300)) {
        let mut expected = v.clone();
        expected.sort_unstable();
        quick_sort(&mut v);
        prop_assert_eq!(v, expected);
    }

    #[test]
    fn descending_by_key(mut v in proptest::collection::vec((0u8..10, any::<u16>()), 0..100)) {
        quick_sort_by(&mut v, |a, b| a.0 > b.0);
        prop_assert!(v.windows(2).all(|w| w[0].0 >= w[1].0));
    }

    #[test]
    fn finite_floats(mut v in proptest::collection::vec(-1e6f64..1e6, 0..150)) {
        let mut expected = v.clone();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        quick_sort(&mut v);
        prop_assert_eq!(v, expected);
    }
}

#[test]
fn strings() {
    let mut words = vec!["pear", "apple", "fig", "banana", "apple"];
    quick_sort(&mut words);
    assert_eq!(words, vec!["apple", "apple", "banana", "fig", "pear"]);
}
