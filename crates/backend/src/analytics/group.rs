use std::collections::HashMap;
use std::hash::Hash;

/// Group `records` by `key_of`, folding every record of a group into an
/// accumulator created by `seed` from the group's first record.
///
/// Output order is the first-seen order of each key; downstream sorting is
/// opt-in. `seed` must return a zero-valued accumulator (it may capture
/// first-seen attributes such as a display name); `fold` is applied to every
/// record including the seeding one. Empty input yields an empty vector.
pub fn fold_groups<R, K, A>(
    records: &[R],
    mut key_of: impl FnMut(&R) -> K,
    mut seed: impl FnMut(&R) -> A,
    mut fold: impl FnMut(&mut A, &R),
) -> Vec<(K, A)>
where
    K: Eq + Hash + Clone,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, A)> = Vec::new();

    for record in records {
        let key = key_of(record);
        let slot = match index.get(&key) {
            Some(&i) => i,
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, seed(record)));
                groups.len() - 1
            }
        };
        fold(&mut groups[slot].1, record);
    }

    groups
}
