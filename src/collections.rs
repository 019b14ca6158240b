//! Map pruning helpers.
//!
//! Emulator bookkeeping tables (pending DMA transfers, watchpoints, lock
//! waiters) get swept by predicate; callers usually want to know how many
//! entries a sweep removed, which `retain` alone does not report.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Remove every entry of `map` matching `pred`, returning the removed count.
pub fn prune_map<K, V, F>(map: &mut BTreeMap<K, V>, mut pred: F) -> usize
where
    K: Ord,
    F: FnMut(&K, &mut V) -> bool,
{
    let before = map.len();
    map.retain(|k, v| !pred(k, v));
    before - map.len()
}

/// [`prune_map`] for hash maps.
pub fn prune_hash_map<K, V, F>(map: &mut HashMap<K, V>, mut pred: F) -> usize
where
    K: Eq + Hash,
    F: FnMut(&K, &mut V) -> bool,
{
    let before = map.len();
    map.retain(|k, v| !pred(k, v));
    before - map.len()
}
