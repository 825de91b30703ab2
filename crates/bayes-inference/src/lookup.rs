//! CPT probability lookup for a node given a parent assignment.

use bayes_core::models::Cpt;
use bayes_core::Node;
use bayes_observability::events;

use crate::assignment::Assignment;

/// The CPT row key for `node` under `assignment`.
///
/// `None` when a parent has no value in the assignment.
pub fn cpt_key(node: &Node, assignment: &Assignment<'_>) -> Option<String> {
    let parent_values = node
        .parents
        .iter()
        .map(|parent| assignment.get(parent))
        .collect::<Option<Vec<&str>>>()?;
    Some(Cpt::key_for(parent_values))
}

/// The stored probability of `node = value` under `assignment`, if the
/// table has both the row and the value.
pub fn cpt_entry(node: &Node, value: &str, assignment: &Assignment<'_>) -> Option<f64> {
    let key = cpt_key(node, assignment)?;
    node.cpt.entry(&key, value)
}

/// P(`node = value` | parents as in `assignment`).
///
/// A missing row or value is probability 0, not an error.
pub fn lookup(node: &Node, value: &str, assignment: &Assignment<'_>) -> f64 {
    match cpt_entry(node, value, assignment) {
        Some(p) => p,
        None => {
            let key = cpt_key(node, assignment).unwrap_or_default();
            events::lookup_miss(&node.name, &key, value);
            0.0
        }
    }
}
