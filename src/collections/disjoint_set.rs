//! Disjoint set (union-find) keyed by arbitrary hashable elements.
//!
//! Elements are mapped to dense slots on `make_set`; parent pointers and
//! ranks live in parallel vectors. Path compression plus union by rank keep
//! `find` and `union` near constant time.

use std::collections::HashMap;
use std::hash::Hash;

/// Union-find over elements of type `T`.
#[derive(Debug, Clone)]
pub struct DisjointSet<T> {
    elements: Vec<T>,
    slots: HashMap<T, usize>,
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl<T: Hash + Eq + Clone> DisjointSet<T> {
    /// Creates an empty disjoint set.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            slots: HashMap::new(),
            parent: Vec::new(),
            rank: Vec::new(),
        }
    }

    /// Creates an empty disjoint set with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
            parent: Vec::with_capacity(capacity),
            rank: Vec::with_capacity(capacity),
        }
    }

    /// Puts `element` in a singleton set. Returns `false` if it was already known.
    pub fn make_set(&mut self, element: T) -> bool {
        if self.slots.contains_key(&element) {
            return false;
        }
        let slot = self.elements.len();
        self.slots.insert(element.clone(), slot);
        self.elements.push(element);
        self.parent.push(slot);
        self.rank.push(0);
        true
    }

    /// Whether `element` has been registered.
    pub fn contains(&self, element: &T) -> bool {
        self.slots.contains_key(element)
    }

    fn root(&mut self, slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Compress path
        let mut curr = slot;
        while curr != root {
            let next = self.parent[curr];
            self.parent[curr] = root;
            curr = next;
        }
        root
    }

    /// Representative of the set containing `element`, or `None` if unknown.
    pub fn find(&mut self, element: &T) -> Option<&T> {
        let slot = *self.slots.get(element)?;
        let root = self.root(slot);
        self.elements.get(root)
    }

    /// Whether both elements are known and share a set.
    pub fn same_set(&mut self, a: &T, b: &T) -> bool {
        match (self.slots.get(a).copied(), self.slots.get(b).copied()) {
            (Some(x), Some(y)) => self.root(x) == self.root(y),
            _ => false,
        }
    }

    /// Unites the sets containing `a` and `b`, registering either if unknown.
    /// Returns `true` if they were in different sets.
    pub fn union(&mut self, a: T, b: T) -> bool {
        self.make_set(a.clone());
        self.make_set(b.clone());
        let (Some(&x), Some(&y)) = (self.slots.get(&a), self.slots.get(&b)) else {
            return false;
        };
        let root1 = self.root(x);
        let root2 = self.root(y);
        if root1 == root2 {
            return false;
        }

        // Union by rank
        match self.rank[root1].cmp(&self.rank[root2]) {
            std::cmp::Ordering::Less => self.parent[root1] = root2,
            std::cmp::Ordering::Greater => self.parent[root2] = root1,
            std::cmp::Ordering::Equal => {
                self.parent[root2] = root1;
                self.rank[root1] = self.rank[root1].saturating_add(1);
            }
        }
        true
    }

    /// The current partition. Sets appear in order of their earliest
    /// registered element; members keep registration order.
    pub fn disjoint_sets(&mut self) -> Vec<Vec<T>> {
        let mut groups: Vec<Vec<T>> = Vec::new();
        let mut group_of_root: HashMap<usize, usize> = HashMap::new();
        for slot in 0..self.elements.len() {
            let root = self.root(slot);
            let group = *group_of_root.entry(root).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[group].push(self.elements[slot].clone());
        }
        groups
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<T: Hash + Eq + Clone> Default for DisjointSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
