mod histogram {
    use crate::core::histogram::Histogram;

    #[test]
    fn empty() {
        let h = Histogram::new();
        assert!(h.is_empty());
        assert_eq!(h.len(), 0);
        assert_eq!(h.total(), 0);
        assert_eq!(h.max_count(), 0);
        assert_eq!(h.min_key(), None);
        assert_eq!(h.max_key(), None);
    }

    #[test]
    fn record_keeps_keys_ordered_and_total_consistent() {
        let mut h = Histogram::new();
        for key in [5, 0, 5, u64::MAX, 1, 0, 5] {
            h.record(key);
        }

        let pairs: Vec<_> = h.iter().collect();
        assert_eq!(pairs, vec![(0, 2), (1, 1), (5, 3), (u64::MAX, 1)]);
        assert_eq!(h.total(), 7);
        assert_eq!(h.len(), 4);
        assert_eq!(h.max_count(), 3);
        assert_eq!(h.get(5), 3);
        assert_eq!(h.get(4), 0);
        assert_eq!(h.min_key(), Some(0));
        assert_eq!(h.max_key(), Some(u64::MAX));
    }

    #[test]
    fn collect_merges_duplicates_and_drops_zero_counts() {
        let h: Histogram = [(3, 10), (1, 0), (3, 5), (2, 1)].into_iter().collect();
        assert_eq!(h.iter().collect::<Vec<_>>(), vec![(2, 1), (3, 15)]);
        assert_eq!(h.total(), 16);
    }
}
