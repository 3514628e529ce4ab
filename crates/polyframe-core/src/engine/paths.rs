use super::error::EngineError;
use super::subgraph::SubgraphIndex;
use crate::core::models::graph::MolecularGraph;
use std::collections::VecDeque;

/// The backbone of a unit: the unique path between its two end atoms,
/// ignoring side chains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackbonePath {
    /// The path atoms in order, `end1` first and `end2` last. Empty when no
    /// path exists.
    pub atoms: Vec<usize>,
    /// The bonds along the path, in the same order.
    pub bonds: Vec<(usize, usize)>,
}

impl BackbonePath {
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

fn is_forbidden(forbidden: &[(usize, usize)], a: usize, b: usize) -> bool {
    forbidden
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

/// Collects the backbone connecting `end1` to `end2` inside an atom subset.
///
/// Breadth-first traversal from `end1`, visiting only atoms in `members` and
/// never crossing a forbidden edge. Finding no path is not an error: the
/// result is simply empty and fold/shift for that unit is skipped.
///
/// # Arguments
///
/// * `graph` - The molecular graph.
/// * `members` - Atom indices the traversal may visit.
/// * `end1`, `end2` - Boundary atoms of the unit.
/// * `forbidden` - Edges (unordered pairs) the traversal must not cross.
pub fn collect_backbone(
    graph: &MolecularGraph,
    members: &[usize],
    end1: usize,
    end2: usize,
    forbidden: &[(usize, usize)],
) -> BackbonePath {
    let index = SubgraphIndex::new(members);
    let (Some(start), Some(goal)) = (index.local(end1), index.local(end2)) else {
        return BackbonePath::default();
    };
    if start == goal {
        return BackbonePath {
            atoms: vec![end1],
            bonds: Vec::new(),
        };
    }
    let mut parent: Vec<Option<usize>> = vec![None; index.len()];
    let mut seen = vec![false; index.len()];
    let mut queue = VecDeque::new();
    seen[start] = true;
    queue.push_back(start);
    while let Some(local) = queue.pop_front() {
        if local == goal {
            break;
        }
        let here = index.graph(local).expect("local index maps back");
        let next: Vec<usize> = index
            .local_neighbors(graph, local)
            .filter(|&n| !seen[n])
            .filter(|&n| {
                let there = index.graph(n).expect("local index maps back");
                !is_forbidden(forbidden, here, there)
            })
            .collect();
        for n in next {
            seen[n] = true;
            parent[n] = Some(local);
            queue.push_back(n);
        }
    }
    if !seen[goal] {
        return BackbonePath::default();
    }
    // walk the parent chain back from end2
    let mut locals = vec![goal];
    while let Some(&Some(p)) = parent.get(*locals.last().expect("nonempty")) {
        locals.push(p);
    }
    locals.reverse();
    let atoms: Vec<usize> = locals
        .iter()
        .map(|&l| index.graph(l).expect("local index maps back"))
        .collect();
    let bonds = atoms.windows(2).map(|w| (w[0], w[1])).collect();
    BackbonePath { atoms, bonds }
}

/// Collects every atom reachable from `start` without crossing a forbidden
/// edge.
///
/// Used to transitively extend a delete set over an entire side-chain
/// component, preventing orphaned stubs.
///
/// # Arguments
///
/// * `graph` - The molecular graph.
/// * `start` - Starting atom index.
/// * `forbidden` - Edges (unordered pairs) the traversal must not cross.
/// * `capacity` - Upper bound on the output size.
///
/// # Return
///
/// The visited atoms in breadth-first order, `start` included.
///
/// # Errors
///
/// Returns [`EngineError::CapacityExceeded`] if the reachable set is larger
/// than `capacity`.
pub fn collect_reachable(
    graph: &MolecularGraph,
    start: usize,
    forbidden: &[(usize, usize)],
    capacity: usize,
) -> Result<Vec<usize>, EngineError> {
    if graph.atom(start).is_none() {
        return Ok(Vec::new());
    }
    let mut seen = vec![false; graph.atom_count()];
    let mut out = Vec::new();
    let mut queue = VecDeque::new();
    seen[start] = true;
    queue.push_back(start);
    while let Some(here) = queue.pop_front() {
        if out.len() >= capacity {
            return Err(EngineError::CapacityExceeded {
                needed: out.len() + 1,
                capacity,
            });
        }
        out.push(here);
        let next: Vec<usize> = graph
            .neighbors(here)
            .filter(|&n| !seen[n] && !is_forbidden(forbidden, here, n))
            .collect();
        for n in next {
            seen[n] = true;
            queue.push_back(n);
        }
    }
    Ok(out)
}
