//! Merging the device scan with registry enrichment

use std::collections::{HashMap, HashSet};

use super::{normalize_key, sort_ports, Port, PortSource};

fn by_key(ports: Vec<Port>) -> HashMap<String, Port> {
    // Later records with the same key replace earlier ones
    ports.into_iter().map(|p| (normalize_key(&p.path), p)).collect()
}

/// Combine the base scan and the registry records into one sorted inventory.
///
/// Records are matched by [`normalize_key`]. A key found in both lists keeps the
/// registry record untouched apart from its source, relabelled
/// `SERIALCOMM+serial`. Keys found in one list pass through unchanged.
pub fn merge_ports(base: Vec<Port>, registry: Vec<Port>) -> Vec<Port> {
    let mut base = by_key(base);
    let mut registry = by_key(registry);

    let keys: HashSet<String> = base.keys().chain(registry.keys()).cloned().collect();

    let mut merged = Vec::with_capacity(keys.len());
    for key in keys {
        match (base.remove(&key), registry.remove(&key)) {
            (Some(_), Some(mut r)) => {
                r.source = PortSource::Combined;
                merged.push(r);
            }
            (None, Some(r)) => merged.push(r),
            (Some(b), None) => merged.push(b),
            (None, None) => {}
        }
    }

    sort_ports(&mut merged);
    merged
}
