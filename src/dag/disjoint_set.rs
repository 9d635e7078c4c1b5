// src/dag/disjoint_set.rs

//! Union-find over task ids, used to split a dependency snapshot into
//! independent connected components.

use std::collections::HashMap;

use crate::types::TaskId;

/// Disjoint-set forest with path compression and union by rank.
///
/// Ids must be registered with [`DisjointSet::insert`] before they can be
/// found or unioned; looking up an unregistered id returns `None` rather
/// than silently inventing a group.
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    parent: HashMap<TaskId, TaskId>,
    rank: HashMap<TaskId, u32>,
}

impl DisjointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id` as its own singleton group.
    ///
    /// Idempotent: re-inserting a known id leaves its group untouched.
    /// Returns whether the id was newly registered.
    pub fn insert(&mut self, id: TaskId) -> bool {
        if self.parent.contains_key(&id) {
            return false;
        }
        self.parent.insert(id, id);
        self.rank.insert(id, 0);
        true
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.parent.contains_key(&id)
    }

    /// Number of registered ids.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the group containing `id`, or `None` if `id` was
    /// never registered.
    ///
    /// Applies full path compression: every id on the walked path is
    /// re-pointed directly at the root, so repeated lookups stay cheap.
    pub fn find(&mut self, id: TaskId) -> Option<TaskId> {
        if !self.parent.contains_key(&id) {
            return None;
        }

        let mut root = id;
        while let Some(&parent) = self.parent.get(&root) {
            if parent == root {
                break;
            }
            root = parent;
        }

        // Second pass: point everything on the walked path straight at the root.
        let mut current = id;
        while current != root {
            match self.parent.get_mut(&current) {
                Some(entry) => {
                    let next = *entry;
                    *entry = root;
                    current = next;
                }
                None => break,
            }
        }

        Some(root)
    }

    /// Merge the groups containing `a` and `b`, returning the surviving root.
    ///
    /// Union by rank: the shallower tree attaches below the deeper one; on a
    /// tie `a`'s root wins and its rank grows. Merging an id with itself or
    /// two ids already in the same group is a no-op. Returns `None` if either
    /// id is unregistered.
    pub fn union(&mut self, a: TaskId, b: TaskId) -> Option<TaskId> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;

        if root_a == root_b {
            return Some(root_a);
        }

        let rank_a = self.rank.get(&root_a).copied().unwrap_or(0);
        let rank_b = self.rank.get(&root_b).copied().unwrap_or(0);

        let (winner, loser) = if rank_a < rank_b {
            (root_b, root_a)
        } else {
            (root_a, root_b)
        };

        self.parent.insert(loser, winner);
        if rank_a == rank_b {
            self.rank.insert(winner, rank_a + 1);
        }

        Some(winner)
    }

    /// All groups as sorted member vectors, ordered by their smallest member.
    pub fn groups(&mut self) -> Vec<Vec<TaskId>> {
        let ids: Vec<TaskId> = self.parent.keys().copied().collect();

        let mut by_root: HashMap<TaskId, Vec<TaskId>> = HashMap::new();
        for id in ids {
            if let Some(root) = self.find(id) {
                by_root.entry(root).or_default().push(id);
            }
        }

        let mut groups: Vec<Vec<TaskId>> = by_root.into_values().collect();
        for group in groups.iter_mut() {
            group.sort_unstable();
        }
        groups.sort_by_key(|group| group.first().copied());
        groups
    }
}
