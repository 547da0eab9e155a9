use std::collections::{HashMap, VecDeque};

use itertools::Itertools;
use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;

use crate::cell::Cell;
use crate::location::Location;
use crate::step::Direction;

/// Shortest-route search over the open cells of one board state.
///
/// A router snapshots which cells are traversable (every empty cell, plus the
/// origin the moving ball is about to vacate) as an undirected graph, then
/// answers route queries against it. Costs and predecessors live in
/// per-search maps, so no state carries over from one search to the next.
pub(crate) struct Router {
    graph: UnGraphMap<Location, ()>,
}

impl Router {
    /// Build the traversable subgraph of `cells` for a move out of `origin`.
    pub(crate) fn over(cells: &Array2<Cell>, origin: Location) -> Self {
        let mut graph = UnGraphMap::with_capacity(
            // naively allocate for a fully open board, which early in a game isn't far off
            cells.len(),
            2 * cells.len(),
        );

        // insert nodes in row-major order so that edge order downstream (and
        // therefore the tie between equal-length routes) breaks the same way
        // on every run
        for (index, cell) in cells.indexed_iter() {
            let location = Location::from(index);
            if cell.is_empty() || location == origin {
                graph.add_node(location);
            }
        }

        // collect to avoid mutating the graph inside an iterator borrowing it
        let open = graph.nodes().collect_vec();
        for location in open {
            for (_, neighbor) in Direction::neighbors_of(location) {
                // attempted from both endpoints; the graph keeps a single edge
                if graph.contains_node(neighbor) {
                    graph.add_edge(location, neighbor, ());
                }
            }
        }

        Self { graph }
    }

    /// The shortest route from `from` to `to`, both endpoints included, or
    /// [`None`] if every route is blocked.
    pub(crate) fn route(&self, from: Location, to: Location) -> Option<Vec<Location>> {
        let mut costs = HashMap::with_capacity(self.graph.node_count());
        let mut parents = HashMap::with_capacity(self.graph.node_count());
        let mut frontier = VecDeque::new();

        costs.insert(from, 0usize);
        frontier.push_back(from);

        while let Some(current) = frontier.pop_front() {
            let through = costs[&current] + 1;

            for neighbor in self.graph.neighbors(current) {
                // breadth-first order over unit steps already reaches every
                // node cheapest-first; the strictly-shorter check stops revisits
                if costs.get(&neighbor).map_or(true, |&known| known > through) {
                    costs.insert(neighbor, through);
                    parents.insert(neighbor, current);
                    frontier.push_back(neighbor);
                }
            }
        }

        if !parents.contains_key(&to) {
            return None;
        }

        let mut path = vec![to];
        let mut cursor = to;
        while cursor != from {
            cursor = parents[&cursor];
            path.push(cursor);
        }
        path.reverse();

        Some(path)
    }
}
