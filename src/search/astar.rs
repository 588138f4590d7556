use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use crate::grid::{Grid, Position};

use super::heuristic::manhattan;
use super::route::{Node, Route};

/// Frontier entry for one arena node, ordered by total cost `f`.
/// `BinaryHeap` is a max-heap, so `Ord` is reversed; equal costs fall back
/// to insertion order, which keeps expansion deterministic.
#[derive(Clone, Copy, PartialEq, Eq)]
struct OpenEntry {
    f: usize,
    seq: usize,
    node: usize,
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed comparison to make BinaryHeap a min-heap
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Counters for one search invocation.
#[derive(Debug, Default, Clone)]
pub struct Metrics {
    /// Cells finalized (popped and not stale).
    pub expanded: usize,
    /// Nodes pushed onto the frontier, the start node included.
    pub pushed: usize,
    /// Frontier entries discarded because their cell was already finalized.
    pub stale: usize,
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "Cells expanded: {}", self.expanded)?;
        writeln!(f, "Nodes pushed: {}", self.pushed)?;
        writeln!(f, "Stale entries skipped: {}", self.stale)?;
        Ok(())
    }
}

/// Finds the shortest route from `start` to `goal` using A*.
///
/// Cells are expanded in ascending order of `g + h` where `h` is the
/// Manhattan estimate. A cell may sit on the frontier several times, once
/// per discovering predecessor; only the first pop is honored and later
/// ones are discarded as stale, so the first time a cell is finalized its
/// cost is the true shortest distance from the start.
///
/// The engine does not validate its inputs: the caller is expected to hand
/// in an in-bounds, open start and a non-obstacle goal. An obstacle goal
/// simply exhausts the frontier and reports no route.
///
/// # Arguments
///
/// * `grid` - The populated grid; the search never mutates it.
/// * `start` - The starting position.
/// * `goal` - The goal position.
///
/// # Returns
///
/// The discovered [`Route`] (or `None` if the goal is unreachable) along
/// with the search [`Metrics`].
pub fn find_path(grid: &Grid, start: Position, goal: Position) -> (Option<Route>, Metrics) {
    let mut metrics = Metrics::default();
    let mut nodes: Vec<Node> = Vec::new();
    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    let mut visited = vec![false; grid.size * grid.size];
    let mut seq = 0;

    nodes.push(Node {
        pos: start,
        g: 0,
        parent: None,
    });
    open.push(OpenEntry {
        f: manhattan(start, goal),
        seq,
        node: 0,
    });
    seq += 1;
    metrics.pushed += 1;

    while let Some(entry) = open.pop() {
        let current = entry.node;
        let pos = nodes[current].pos;

        if visited[grid.index(pos)] {
            metrics.stale += 1;
            continue;
        }
        visited[grid.index(pos)] = true;
        metrics.expanded += 1;

        if pos == goal {
            return (
                Some(Route {
                    nodes,
                    terminal: current,
                }),
                metrics,
            );
        }

        let g = nodes[current].g + 1;
        for neighbor in grid.get_neighbors(pos) {
            if !grid.is_open(neighbor) || visited[grid.index(neighbor)] {
                continue;
            }
            // Always push; a cheaper entry for the same cell wins on pop.
            nodes.push(Node {
                pos: neighbor,
                g,
                parent: Some(current),
            });
            open.push(OpenEntry {
                f: g + manhattan(neighbor, goal),
                seq,
                node: nodes.len() - 1,
            });
            seq += 1;
            metrics.pushed += 1;
        }
    }

    (None, metrics)
}
