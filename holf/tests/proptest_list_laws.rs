use holf::{collect, expand, fold, map, partition, reduce, scan};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

proptest! {
    #![proptest_config(ProptestConfig {
        // Do not write `.proptest-regressions` files into the repo.
        failure_persistence: None,
        .. ProptestConfig::default()
    })]

    #[test]
    fn map_identity_law(s in prop::collection::vec(any::<i32>(), 0..64)) {
        prop_assert_eq!(map(s.clone(), |x| x), s);
    }

    #[test]
    fn map_composition_law(s in prop::collection::vec(any::<i16>(), 0..64)) {
        let f = |x: i16| i32::from(x) * 3;
        let g = |y: i32| y - 7;
        prop_assert_eq!(map(map(s.clone(), f), g), map(s, |x| g(f(x))));
    }

    #[test]
    fn fold_of_empty_is_init(init in any::<i64>()) {
        prop_assert_eq!(fold(Vec::<i64>::new(), init, |a, b| a.wrapping_mul(b)), init);
    }

    #[test]
    fn scan_last_matches_fold(
        s in prop::collection::vec(any::<i32>(), 0..64),
        init in any::<i32>(),
    ) {
        let step = |acc: i32, x: i32| acc.wrapping_add(x);
        let scanned: Vec<i32> = scan(s.clone(), init, step).collect();
        prop_assert_eq!(scanned.len(), s.len());
        prop_assert_eq!(scanned.last().copied().unwrap_or(init), fold(s, init, step));
    }

    #[test]
    fn reduce_agrees_with_max(s in prop::collection::vec(any::<i32>(), 1..64)) {
        prop_assert_eq!(reduce(s.clone(), i32::max).ok(), s.iter().copied().max());
    }

    #[test]
    fn partition_preserves_elements_and_order(
        s in prop::collection::vec(any::<u16>(), 0..64),
        buckets in 1u16..6,
    ) {
        let parts = partition(s.clone(), |x| x % buckets).unwrap();
        prop_assert!(parts.len() <= buckets as usize);
        for (index, bucket) in parts.iter().enumerate() {
            let expected: Vec<u16> = s
                .iter()
                .copied()
                .filter(|x| (x % buckets) as usize == index)
                .collect();
            prop_assert_eq!(bucket, &expected);
        }
        prop_assert_eq!(parts.iter().map(Vec::len).sum::<usize>(), s.len());
    }

    #[test]
    fn collect_of_singletons_is_identity(s in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(collect(s.clone(), |x| vec![x]), s);
    }

    #[test]
    fn expand_take_has_requested_length(n in 0usize..200, start in any::<u32>()) {
        let values: Vec<u32> = expand(start, |x| x.wrapping_add(1)).take(n).collect();
        prop_assert_eq!(values.len(), n);
        if n > 0 {
            prop_assert_eq!(values[0], start);
        }
    }
}
