use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use crate::core::index::CatalogIndex;

/// Outgoing alias edges of one identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub primary: CatalogIndex,
    pub extra: Vec<CatalogIndex>,
}

impl AliasEntry {
    pub fn new(primary: CatalogIndex) -> Self {
        Self {
            primary,
            extra: Vec::new(),
        }
    }

    /// Primary alias first, then the extras in insertion order
    pub fn iter(&self) -> impl Iterator<Item = CatalogIndex> + '_ {
        std::iter::once(self.primary).chain(self.extra.iter().copied())
    }

    pub fn contains(&self, index: CatalogIndex) -> bool {
        self.primary == index || self.extra.contains(&index)
    }
}

/// Directed alias adjacency table.
///
/// Edges are not transitively closed; [`cross_indices`](Self::cross_indices)
/// computes the closure on demand.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    edges: HashMap<CatalogIndex, AliasEntry>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `from -> to`. Returns `false` for self-loops and edges that
    /// already exist.
    pub fn insert_edge(&mut self, from: CatalogIndex, to: CatalogIndex) -> bool {
        if from == to {
            return false;
        }
        match self.edges.get_mut(&from) {
            Some(entry) if entry.contains(to) => false,
            Some(entry) => {
                entry.extra.push(to);
                true
            }
            None => {
                self.edges.insert(from, AliasEntry::new(to));
                true
            }
        }
    }

    pub fn get(&self, index: CatalogIndex) -> Option<&AliasEntry> {
        self.edges.get(&index)
    }

    /// Every identifier reachable from `start`, excluding `start` itself
    pub fn cross_indices(&self, start: CatalogIndex) -> BTreeSet<CatalogIndex> {
        let mut visited: HashSet<CatalogIndex> = HashSet::from([start]);
        let mut worklist: VecDeque<CatalogIndex> = VecDeque::from([start]);
        let mut reachable = BTreeSet::new();

        while let Some(current) = worklist.pop_front() {
            let Some(entry) = self.edges.get(&current) else {
                continue;
            };
            for next in entry.iter() {
                if visited.insert(next) {
                    reachable.insert(next);
                    worklist.push_back(next);
                }
            }
        }

        reachable
    }

    pub fn keys(&self) -> impl Iterator<Item = CatalogIndex> + '_ {
        self.edges.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CatalogIndex, &AliasEntry)> {
        self.edges.iter().map(|(index, entry)| (*index, entry))
    }

    /// Number of identifiers with outgoing edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Total number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(|entry| 1 + entry.extra.len()).sum()
    }
}
