//! Locale merging.
//!
//! The unified table is the variant table with every primary entry laid over
//! it: entries only the variant has survive, and on a shared key the primary
//! entry wins. Inputs are never modified.

use std::collections::BTreeMap;

pub fn overlay<V: Clone>(
    primary: &BTreeMap<String, V>,
    variant: &BTreeMap<String, V>,
) -> BTreeMap<String, V> {
    let mut merged = variant.clone();
    merged.extend(primary.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}
