//! Single-pass choice-label counting over a raw story source.

use std::collections::BTreeMap;

use serde_json::Value;

/// Count how often each choice label appears across all nodes of a
/// raw story source.
///
/// One pass over every node's `Choice` mapping, keys only. Every
/// occurrence counts, no matter which node it sits under, whether the
/// node is reachable, or where the choice leads. Nodes that are not
/// objects and nodes without a `Choice` field are skipped, as the
/// lenient source format allows.
///
/// The result is ordered by label, ready for chart rendering.
pub fn aggregate(source: &Value) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();

    let Some(nodes) = source.as_object() else {
        return counts;
    };

    for node in nodes.values() {
        let Some(choices) = node.get("Choice").and_then(Value::as_object) else {
            continue;
        };
        for label in choices.keys() {
            *counts.entry(label.clone()).or_insert(0) += 1;
        }
    }

    counts
}
