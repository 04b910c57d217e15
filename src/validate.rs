use ahash::AHashSet;
use itertools::Itertools;

use crate::error::ValidationError;
use crate::flow::{FlowEdge, FlowNode};

/// Checks a candidate graph against the structural flow invariants.
///
/// A saveable flow is mostly linear: at most one node without an incoming
/// connection (the single discoverable entry point) and at most one outgoing
/// connection per node. The rules run in that order and the first failure
/// wins, so exactly one error surfaces per call.
///
/// Graphs of zero or one node skip the entry-point rule. A lone node
/// qualifies trivially and must not need a self-edge to pass.
///
/// The check never mutates its inputs and holds no state between calls, so
/// it is safe to run speculatively at any point during editing.
pub fn validate(nodes: &[FlowNode], edges: &[FlowEdge]) -> Result<(), ValidationError> {
    if nodes.len() > 1 {
        let connected_targets: AHashSet<&str> = edges.iter().map(|e| e.target.as_str()).collect();
        let entry_candidates = nodes
            .iter()
            .filter(|n| !connected_targets.contains(n.id.as_str()))
            .count();
        if entry_candidates > 1 {
            return Err(ValidationError::MultipleEntryPoints {
                count: entry_candidates,
            });
        }
    }

    // Checked in node container order, so the first offender reported is
    // deterministic for a given graph.
    let outgoing = edges.iter().map(|e| e.source.as_str()).counts();
    for node in nodes {
        let count = outgoing.get(node.id.as_str()).copied().unwrap_or(0);
        if count > 1 {
            return Err(ValidationError::MultipleOutgoingEdges {
                node_id: node.id.clone(),
                count,
            });
        }
    }

    Ok(())
}
