use super::{HybridMap, Mode, THRESHOLD};
use crate::error::HybridMapError;

use proptest::collection::{hash_set, vec};
use proptest::prelude::*;
use std::collections::HashMap;

fn distinct_pairs(max: usize) -> impl Strategy<Value = Vec<(u16, u32)>> {
    hash_set(any::<u16>(), 0..max)
        .prop_flat_map(|keys| {
            let keys: Vec<u16> = keys.into_iter().collect();
            let len = keys.len();
            (Just(keys), vec(any::<u32>(), len))
        })
        .prop_map(|(keys, values)| keys.into_iter().zip(values).collect())
        .prop_shuffle()
}

proptest! {
    #[test]
    fn agrees_with_hashmap_oracle(pairs in distinct_pairs(64), probes in vec(any::<u16>(), 0..32)) {
        let oracle: HashMap<u16, u32> = pairs.iter().copied().collect();
        let map = HybridMap::new(pairs.iter().copied()).unwrap();

        prop_assert_eq!(map.len(), oracle.len());
        for (k, v) in &oracle {
            prop_assert_eq!(map.get(k), Ok(v));
            prop_assert!(map.contains_key(k));
        }
        for probe in probes {
            prop_assert_eq!(map.try_get(&probe), oracle.get(&probe));
            if !oracle.contains_key(&probe) {
                prop_assert_eq!(map.get(&probe), Err(HybridMapError::KeyNotFound(probe)));
            }
        }
    }

    #[test]
    fn mode_follows_entry_count(pairs in distinct_pairs(32)) {
        let map = HybridMap::new(pairs.iter().copied()).unwrap();
        let expected = if pairs.len() <= THRESHOLD { Mode::Array } else { Mode::Hashed };
        prop_assert_eq!(map.mode(), expected);
    }

    #[test]
    fn array_mode_preserves_input_order(pairs in distinct_pairs(THRESHOLD + 1)) {
        prop_assume!(pairs.len() <= THRESHOLD);
        let map = HybridMap::new(pairs.iter().copied()).unwrap();
        let entries: Vec<(u16, u32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(entries, pairs);
    }

    #[test]
    fn repeated_key_is_rejected(pairs in distinct_pairs(32), pick in any::<prop::sample::Index>()) {
        prop_assume!(!pairs.is_empty());
        let (key, value) = pairs[pick.index(pairs.len())];

        let mut input = pairs.clone();
        input.push((key, value.wrapping_add(1)));

        let err = HybridMap::new(input).unwrap_err();
        prop_assert_eq!(err, HybridMapError::KeyConflict { key, index: pairs.len() });
    }
}
