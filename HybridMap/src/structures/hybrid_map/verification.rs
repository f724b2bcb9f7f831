//! Exercises every read operation over sizes below, at and above the
//! threshold, with keys `0..n` mapped to themselves.

use std::collections::HashSet;

use super::{HybridMap, Mode, THRESHOLD};
use crate::error::HybridMapError;

fn build(n: i32) -> HybridMap<i32, i32> {
    let pairs: Vec<(i32, i32)> = (0..n).map(|i| (i, i)).collect();
    HybridMap::try_from(pairs).unwrap()
}

fn verify(map: &HybridMap<i32, i32>, n: i32) {
    verify_count(map, n);
    verify_mode(map, n);
    verify_keys(map, n);
    verify_values(map, n);
    verify_get(map, n);
    verify_contains(map, n);
    verify_try_get(map, n);
    verify_iter(map, n);
}

fn verify_count(map: &HybridMap<i32, i32>, n: i32) {
    assert_eq!(map.len(), n as usize);
    assert_eq!(map.is_empty(), n == 0);
}

fn verify_mode(map: &HybridMap<i32, i32>, n: i32) {
    let expected = if n as usize <= THRESHOLD { Mode::Array } else { Mode::Hashed };
    assert_eq!(map.mode(), expected, "mode for {n} entries");
}

fn verify_keys(map: &HybridMap<i32, i32>, n: i32) {
    let first: Vec<i32> = map.keys().copied().collect();
    let second: Vec<i32> = map.keys().copied().collect();
    assert_eq!(first, second, "keys must be restartable");
    verify_sequence(map, n, first);
}

fn verify_values(map: &HybridMap<i32, i32>, n: i32) {
    let values: Vec<i32> = map.values().copied().collect();
    verify_sequence(map, n, values);
}

fn verify_get(map: &HybridMap<i32, i32>, n: i32) {
    for i in 0..n {
        assert_eq!(map.get(&i), Ok(&i));
        assert_eq!(map[&i], i);
    }
    assert_eq!(map.get(&-1), Err(HybridMapError::KeyNotFound(-1)));
}

fn verify_contains(map: &HybridMap<i32, i32>, n: i32) {
    for i in 0..n {
        assert!(map.contains_key(&i));
    }
    assert!(!map.contains_key(&-1));
}

fn verify_try_get(map: &HybridMap<i32, i32>, n: i32) {
    for i in 0..n {
        assert_eq!(map.try_get(&i), Some(&i));
    }
    assert_eq!(map.try_get(&-1), None);
    assert_eq!(map.try_get(&-1).copied().unwrap_or_default(), 0);
}

fn verify_iter(map: &HybridMap<i32, i32>, n: i32) {
    let pairs: Vec<(&i32, &i32)> = map.iter().collect();
    let zipped: Vec<(&i32, &i32)> = map.keys().zip(map.values()).collect();
    assert_eq!(pairs, zipped);

    let keys: Vec<i32> = pairs.iter().map(|(k, _)| **k).collect();
    let values: Vec<i32> = pairs.iter().map(|(_, v)| **v).collect();
    verify_sequence(map, n, keys);
    verify_sequence(map, n, values);

    let through_ref: Vec<(&i32, &i32)> = map.into_iter().collect();
    assert_eq!(through_ref, pairs);
}

/// Array mode must reproduce `0..n` exactly; hashed mode must hold the same
/// set in any order.
fn verify_sequence(map: &HybridMap<i32, i32>, n: i32, items: Vec<i32>) {
    assert_eq!(items.len(), n as usize);
    match map.mode() {
        Mode::Array => assert_eq!(items, (0..n).collect::<Vec<_>>()),
        Mode::Hashed => {
            let unique: HashSet<i32> = items.into_iter().collect();
            assert_eq!(unique, (0..n).collect::<HashSet<_>>());
        }
    }
}

#[test]
fn empty() {
    let map = build(0);
    verify(&map, 0);
    assert!(!map.contains_key(&0));
    assert_eq!(map.iter().count(), 0);
}

#[test]
fn small() {
    let map = build(3);
    verify(&map, 3);
    assert_eq!(map.get(&1), Ok(&1));
    assert_eq!(map.get(&5), Err(HybridMapError::KeyNotFound(5)));
}

#[test]
fn at_threshold() {
    let map = build(6);
    assert_eq!(map.mode(), Mode::Array);
    verify(&map, 6);
}

#[test]
fn one_past_threshold() {
    let map = build(7);
    assert_eq!(map.mode(), Mode::Hashed);
    verify(&map, 7);
}

#[test]
fn large() {
    let map = build(16);
    verify(&map, 16);

    let keys: HashSet<i32> = map.keys().copied().collect();
    let values: HashSet<i32> = map.values().copied().collect();
    let pairs: HashSet<(i32, i32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(keys.len(), 16);
    assert_eq!(values.len(), 16);
    assert_eq!(pairs, (0..16).map(|i| (i, i)).collect());
}

#[test]
fn every_size_up_to_forty() {
    for n in 0..40 {
        verify(&build(n), n);
    }
}
