use std::{
    collections::{HashMap, HashSet},
    fmt,
};

use tracing::{debug, warn};

use crate::{
    orbit::{Object, OrbitMap},
    Error,
};

/// What to do with orbits that can't be reached from the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrphanPolicy {
    #[default]
    Reject,
    Ignore,
}

pub struct OrbitNode {
    name: Object,
    children: Vec<OrbitNode>,
}

impl OrbitNode {
    pub fn new(name: &str, children: Vec<OrbitNode>) -> Self {
        Self {
            name: name.to_string(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[OrbitNode] {
        &self.children
    }
}

// Clone, compare, print and drop all walk the tree with work lists, so long orbit chains
// don't overflow the stack.
impl Clone for OrbitNode {
    fn clone(&self) -> Self {
        let mut preorder = Vec::new();
        let mut search: Vec<&OrbitNode> = self.children.iter().rev().collect();
        while let Some(node) = search.pop() {
            preorder.push(node);
            search.extend(node.children.iter().rev());
        }

        // Clones of the last child end up at the bottom, the first child on top.
        let mut cloned: Vec<OrbitNode> = Vec::with_capacity(preorder.len());
        for node in preorder.into_iter().rev() {
            let mut children = cloned.split_off(cloned.len() - node.children.len());
            children.reverse();
            cloned.push(OrbitNode::new(&node.name, children));
        }
        cloned.reverse();

        OrbitNode::new(&self.name, cloned)
    }
}

impl PartialEq for OrbitNode {
    fn eq(&self, other: &Self) -> bool {
        let mut search = vec![(self, other)];
        while let Some((left, right)) = search.pop() {
            if left.name != right.name || left.children.len() != right.children.len() {
                return false;
            }

            search.extend(left.children.iter().zip(right.children.iter()));
        }

        true
    }
}

impl Eq for OrbitNode {}

// Only names of the direct orbiters, a full dump would recurse.
impl fmt::Debug for OrbitNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrbitNode")
            .field("name", &self.name)
            .field(
                "children",
                &self.children.iter().map(|node| node.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Drop for OrbitNode {
    fn drop(&mut self) {
        let mut orphaned = std::mem::take(&mut self.children);
        while let Some(mut node) = orphaned.pop() {
            orphaned.append(&mut node.children);
        }
    }
}

/// Objects orbiting `root` directly, each owning its orbiters. The root itself has no node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrbitTree {
    root: Object,
    roots: Vec<OrbitNode>,
}

impl OrbitTree {
    pub fn build(map: &OrbitMap, root: &str, orphans: OrphanPolicy) -> Result<OrbitTree, Error> {
        let mut children_of: HashMap<&str, Vec<&str>> = HashMap::new();
        let mut parent_of: HashMap<&str, &str> = HashMap::new();
        for orbit in map {
            if let Some(orbited) = parent_of.insert(orbit.child(), orbit.parent()) {
                return Err(Error::DuplicateOrbiter(
                    orbit.child().to_string(),
                    orbited.to_string(),
                    orbit.parent().to_string(),
                ));
            }

            children_of
                .entry(orbit.parent())
                .or_default()
                .push(orbit.child());
        }

        // Parents are always discovered before their orbiters.
        let mut visited = HashSet::from([root]);
        let mut discovered = Vec::with_capacity(map.len());
        let mut search = vec![root];
        while let Some(name) = search.pop() {
            for &child in children_of.get(name).into_iter().flatten() {
                if !visited.insert(child) {
                    return Err(trace_up(&parent_of, child));
                }

                discovered.push(child);
                search.push(child);
            }
        }

        if discovered.len() < map.len() {
            // An orbit of the root itself is never reached either.
            let mut unreached = map
                .iter()
                .filter(|orbit| orbit.child() == root || !visited.contains(orbit.child()));
            match orphans {
                OrphanPolicy::Reject => {
                    if let Some(orbit) = unreached.next() {
                        return Err(trace_up(&parent_of, orbit.child()));
                    }
                }
                OrphanPolicy::Ignore => warn!(
                    root,
                    ignored = unreached.count(),
                    "ignore orbits unreachable from root"
                ),
            }
        }

        let mut built: HashMap<&str, OrbitNode> = HashMap::with_capacity(discovered.len());
        for &name in discovered.iter().rev() {
            let children = take_children(&children_of, &mut built, name);
            built.insert(name, OrbitNode::new(name, children));
        }
        let roots = take_children(&children_of, &mut built, root);

        debug!(root, bodies = discovered.len(), "built orbit tree");
        Ok(OrbitTree {
            root: root.to_string(),
            roots,
        })
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn roots(&self) -> &[OrbitNode] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn body_count(&self) -> usize {
        let mut count = 0;
        let mut search: Vec<&OrbitNode> = self.roots.iter().collect();
        while let Some(node) = search.pop() {
            count += 1;
            search.extend(node.children.iter());
        }

        count
    }

    /// Objects from the one orbiting the root down to `name`, both ends included.
    pub fn path_to(&self, name: &str) -> Option<Vec<&str>> {
        let mut path = Vec::new();
        let mut search: Vec<(&OrbitNode, usize)> =
            self.roots.iter().rev().map(|node| (node, 0)).collect();
        while let Some((node, level)) = search.pop() {
            path.truncate(level);
            path.push(node.name());
            if node.name() == name {
                return Some(path);
            }

            search.extend(node.children.iter().rev().map(|child| (child, level + 1)));
        }

        None
    }

    pub fn contains(&self, name: &str) -> bool {
        self.path_to(name).is_some()
    }

    pub fn depth_of(&self, name: &str) -> Option<u64> {
        self.path_to(name).map(|path| path.len() as u64)
    }

    /// Minimum number of orbital transfers from the object `from` orbits to the object `to` orbits.
    pub fn transfer_count(&self, from: &str, to: &str) -> Option<usize> {
        let from_path = self.path_to(from)?;
        let to_path = self.path_to(to)?;
        // Both paths are non-empty, the root is the implicit common head.
        let from_orbited = &from_path[..(from_path.len() - 1)];
        let to_orbited = &to_path[..(to_path.len() - 1)];
        let common_n = from_orbited
            .iter()
            .zip(to_orbited)
            .take_while(|(a, b)| a == b)
            .count();

        Some((from_orbited.len() - common_n) + (to_orbited.len() - common_n))
    }
}

fn take_children(
    children_of: &HashMap<&str, Vec<&str>>,
    built: &mut HashMap<&str, OrbitNode>,
    name: &str,
) -> Vec<OrbitNode> {
    children_of
        .get(name)
        .map(|children| {
            children
                .iter()
                .filter_map(|child| built.remove(*child))
                .collect()
        })
        .unwrap_or_default()
}

// Follow parents up from `start` until a body repeats (cycle) or has no parent (orphan).
fn trace_up<'a>(parent_of: &HashMap<&'a str, &'a str>, start: &'a str) -> Error {
    let mut path: Vec<&str> = Vec::new();
    let mut cur = start;
    loop {
        if let Some(ind) = path.iter().position(|&name| name == cur) {
            let mut cycle: Vec<Object> = path[ind..].iter().map(|name| name.to_string()).collect();
            cycle.push(cur.to_string());
            return Error::Cycle(cycle);
        }

        path.push(cur);
        match parent_of.get(cur) {
            Some(&parent) => cur = parent,
            None => return Error::Orphan(cur.to_string()),
        }
    }
}
