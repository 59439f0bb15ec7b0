//! Frequency aggregation over record collections.

use std::collections::HashMap;
use std::hash::Hash;

/// Returns the value of `key` that occurs most often across `records`.
///
/// Returns `None` for an empty input. When several values share the
/// highest count, the one encountered first wins.
pub fn most_common_by<'a, T, K, F>(records: impl IntoIterator<Item = &'a T>, key: F) -> Option<K>
where
    T: 'a,
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut counts: HashMap<K, usize> = HashMap::new();
    let mut first_seen: Vec<K> = Vec::new();

    for record in records {
        let value = key(record);
        let count = counts.entry(value.clone()).or_insert(0);
        if *count == 0 {
            first_seen.push(value);
        }
        *count += 1;
    }

    let mut best: Option<(K, usize)> = None;
    for value in first_seen {
        let count = counts.get(&value).copied().unwrap_or(0);
        match &best {
            Some((_, max)) if count <= *max => {}
            _ => best = Some((value, count)),
        }
    }

    best.map(|(value, _)| value)
}
