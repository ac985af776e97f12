use crate::tree::{OrbitNode, OrbitTree};

/// Depth of an object orbiting the root directly.
pub const DIRECT_ORBIT_DEPTH: u64 = 1;

/// Sum of depths of `node` and all its (in)direct orbiters, where `node` sits at `depth`.
pub fn orbits_to_root(node: &OrbitNode, depth: u64) -> u64 {
    let mut total = 0;
    let mut search = vec![(node, depth)];
    while let Some((node, depth)) = search.pop() {
        total += depth;
        search.extend(node.children().iter().map(|child| (child, depth + 1)));
    }

    total
}

pub fn total_orbits(tree: &OrbitTree, starting_depth: u64) -> u64 {
    tree.roots()
        .iter()
        .map(|node| orbits_to_root(node, starting_depth))
        .sum()
}
