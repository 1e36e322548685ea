//! Directed-graph traversal over canonical states.
//!
//! Both walks consume nodes and edges in canonical order, so the cycle
//! witness and the reachable set are deterministic for a given state.

use std::collections::{BTreeMap, HashSet};

use fv_graph::{GraphEdge, GraphState};

/// Finds the first directed cycle in canonical traversal order.
///
/// Returns the closed walk as node ids, starting and ending at the node the
/// back edge points to, e.g. `["a", "b", "a"]`. Adjacency covers only edges
/// whose `from` node exists; dangling edge targets are traversed inertly
/// and can never witness a cycle.
pub fn find_cycle(state: &GraphState) -> Option<Vec<String>> {
    let mut adjacency: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for node in &state.nodes {
        adjacency.insert(node.id.as_str(), Vec::new());
    }
    for edge in &state.edges {
        if let Some(children) = adjacency.get_mut(edge.from.as_str()) {
            children.push(edge.to.as_str());
        }
    }

    let mut visiting: HashSet<&str> = HashSet::new();
    let mut visited: HashSet<&str> = HashSet::new();

    for root in adjacency.keys().copied().collect::<Vec<_>>() {
        if visited.contains(root) {
            continue;
        }
        // Frame = (node, index of the next child to visit).
        let mut frames: Vec<(&str, usize)> = vec![(root, 0)];
        visiting.insert(root);

        while let Some(frame) = frames.last_mut() {
            let node = frame.0;
            let next = frame.1;
            frame.1 += 1;

            let child = adjacency
                .get(node)
                .and_then(|children| children.get(next))
                .copied();
            let Some(child) = child else {
                // Exhausted (or a dangling target with no adjacency entry).
                frames.pop();
                visiting.remove(node);
                visited.insert(node);
                continue;
            };

            if visited.contains(child) {
                continue;
            }
            if visiting.contains(child) {
                // Back edge: the stack from `child` onward, plus the closing
                // repeat, names the cycle.
                let mut walk: Vec<String> = frames
                    .iter()
                    .map(|&(id, _)| id)
                    .skip_while(|&id| id != child)
                    .map(str::to_string)
                    .collect();
                walk.push(child.to_string());
                return Some(walk);
            }
            visiting.insert(child);
            frames.push((child, 0));
        }
    }
    None
}

/// Node ids reachable from `start` by following edges forward.
///
/// Every edge participates, including edges whose endpoints do not exist;
/// the returned set may therefore contain ids with no backing node.
pub fn reachable_from<'a>(start: &'a str, edges: &'a [GraphEdge]) -> HashSet<&'a str> {
    let mut adjacency: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for edge in edges {
        adjacency
            .entry(edge.from.as_str())
            .or_default()
            .push(edge.to.as_str());
    }

    let mut seen = HashSet::new();
    let mut stack = vec![start];
    while let Some(current) = stack.pop() {
        if !seen.insert(current) {
            continue;
        }
        if let Some(children) = adjacency.get(current) {
            for &child in children {
                stack.push(child);
            }
        }
    }
    seen
}
