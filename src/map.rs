//! The BST engine: [`TreeMap`], its nodes, and the recursive
//! search/insert/delete algorithms.
//!
//! # Examples
//!
//! ```
//! use treemap::TreeMap;
//!
//! let mut map = TreeMap::new();
//!
//! // Nothing in here yet.
//! assert_eq!(map.get(&1), None);
//!
//! map.add(1, 2);
//! assert_eq!(map.get(&1), Some(&2));
//!
//! // Write through a mutable handle.
//! *map.get_mut(&1).unwrap() = 3;
//! assert_eq!(map.get(&1), Some(&3));
//!
//! // Removing an absent key is a no-op.
//! map.remove(&42);
//! assert_eq!(map.len(), 1);
//! ```

use std::cmp::Ordering;
use std::fmt;

type Link<K, V> = Option<Box<Node<K, V>>>;

struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }
}

/// An ordered key-to-value map backed by an unbalanced Binary Search Tree.
///
/// Keys route by [`Ord`] comparison: strictly greater keys descend right,
/// everything else descends left. Nothing rebalances, so the shape (and the
/// cost of every operation) is determined by insertion order. Feeding the
/// map sorted keys produces a degenerate chain with `O(n)` operations.
///
/// The insert, lookup, and remove algorithms recurse along the root-to-target
/// path, so they consume call stack proportional to that path: `O(n)` frames
/// on a degenerate chain. Teardown ([`clear`][TreeMap::clear] and `Drop`) and
/// iteration use explicit worklists instead and are safe on any shape.
///
/// The map is single-threaded by design: no operation takes a lock, and
/// mutation requires `&mut self`, so Rust's borrow rules exclude concurrent
/// mutation at the type level.
pub struct TreeMap<K, V> {
    root: Link<K, V>,
    size: usize,
}

impl<K, V> Default for TreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> TreeMap<K, V> {
    /// Generates a new, empty `TreeMap`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Returns the number of nodes in the map.
    ///
    /// Every call to [`add`][TreeMap::add] grows this by one, including
    /// re-insertion of a key that is already present (see `add` for the
    /// shadow-node behavior).
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the map holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Inserts the given key and value into the map.
    ///
    /// Descent compares the incoming key against each node: strictly greater
    /// goes right, **less than or equal goes left**. The new node is created
    /// at the first empty slot reached.
    ///
    /// A consequence of the tie-goes-left rule: inserting a key that is
    /// already present does *not* update the stored value. It creates a
    /// second, shadow node to the left of the first occurrence. Lookups keep
    /// returning the earlier-inserted value, because the descent
    /// short-circuits on the first equal key, and [`len`][TreeMap::len]
    /// counts both nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.add(1, "first");
    /// map.add(1, "shadow");
    ///
    /// // The original value wins, but both nodes are in the tree.
    /// assert_eq!(map.get(&1), Some(&"first"));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn add(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        Self::add_into(&mut self.root, key, value);
        self.size += 1;
    }

    fn add_into(link: &mut Link<K, V>, key: K, value: V)
    where
        K: Ord,
    {
        match link {
            None => *link = Some(Box::new(Node::new(key, value))),
            Some(node) => match key.cmp(&node.key) {
                Ordering::Greater => Self::add_into(&mut node.right, key, value),
                // Ties route left.
                Ordering::Less | Ordering::Equal => Self::add_into(&mut node.left, key, value),
            },
        }
    }

    /// Returns `true` if the map contains the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.add(1, 2);
    ///
    /// assert!(map.contains(&1));
    /// assert!(!map.contains(&42));
    /// ```
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        Self::search(&self.root, key).is_some()
    }

    /// Potentially finds the value associated with the given key. If no node
    /// has the corresponding key, `None` is returned. Key absence is an
    /// ordinary result here, never an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.add(1, 2);
    ///
    /// assert_eq!(map.get(&1), Some(&2));
    /// assert_eq!(map.get(&42), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        Self::search(&self.root, key)
    }

    /// Like [`get`][TreeMap::get] but returns a mutable handle, enabling
    /// indexed-assignment-style updates.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.add(3, 9);
    ///
    /// if let Some(value) = map.get_mut(&3) {
    ///     *value = 81;
    /// }
    /// assert_eq!(map.get(&3), Some(&81));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V>
    where
        K: Ord,
    {
        Self::search_mut(&mut self.root, key)
    }

    fn search<'a>(link: &'a Link<K, V>, key: &K) -> Option<&'a V>
    where
        K: Ord,
    {
        let node = link.as_deref()?;
        match key.cmp(&node.key) {
            Ordering::Equal => Some(&node.value),
            Ordering::Greater => Self::search(&node.right, key),
            Ordering::Less => Self::search(&node.left, key),
        }
    }

    fn search_mut<'a>(link: &'a mut Link<K, V>, key: &K) -> Option<&'a mut V>
    where
        K: Ord,
    {
        let node = link.as_deref_mut()?;
        match key.cmp(&node.key) {
            Ordering::Equal => Some(&mut node.value),
            Ordering::Greater => Self::search_mut(&mut node.right, key),
            Ordering::Less => Self::search_mut(&mut node.left, key),
        }
    }

    /// Removes the node with the given key. If the map does not contain the
    /// key, nothing happens; removal is an idempotent no-op on absent keys.
    ///
    /// A node with two children is replaced by its in-order successor (the
    /// minimum of its right subtree): the successor's key and value move into
    /// the node and the successor is unlinked.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.add(1, 11);
    ///
    /// map.remove(&5);
    /// assert_eq!(map.len(), 1);
    ///
    /// map.remove(&1);
    /// assert!(map.is_empty());
    /// ```
    pub fn remove(&mut self, key: &K)
    where
        K: Ord,
    {
        if !self.contains(key) {
            return;
        }
        let root = self.root.take();
        self.root = Self::remove_from(root, key);
        self.size -= 1;
    }

    /// Removes `key` from the subtree rooted at `link`, returning the
    /// possibly-new subtree root so the parent's link can be reattached.
    fn remove_from(link: Link<K, V>, key: &K) -> Link<K, V>
    where
        K: Ord,
    {
        let mut node = link?;
        match key.cmp(&node.key) {
            Ordering::Less => {
                let left = node.left.take();
                node.left = Self::remove_from(left, key);
                Some(node)
            }
            Ordering::Greater => {
                let right = node.right.take();
                node.right = Self::remove_from(right, key);
                Some(node)
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, None) => None,
                (None, Some(right)) => Some(right),
                (Some(left), None) => Some(left),
                (Some(left), Some(right)) => {
                    let (rest, successor) = Self::detach_min(right);
                    let Node { key, value, .. } = *successor;
                    node.key = key;
                    node.value = value;
                    node.left = Some(left);
                    node.right = rest;
                    Some(node)
                }
            },
        }
    }

    /// Unlinks the minimum (leftmost) node of the subtree and returns the
    /// remaining subtree alongside the detached node.
    fn detach_min(mut node: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
        match node.left.take() {
            None => {
                let right = node.right.take();
                (right, node)
            }
            Some(left) => {
                let (rest, min) = Self::detach_min(left);
                node.left = rest;
                (Some(node), min)
            }
        }
    }

    /// Removes every node, leaving the map equivalent to a freshly
    /// constructed one.
    ///
    /// Nodes are released through an explicit worklist rather than by
    /// recursion, so clearing a degenerate chain of any length cannot
    /// overflow the call stack.
    pub fn clear(&mut self) {
        let mut worklist = Vec::new();
        worklist.extend(self.root.take());
        while let Some(mut node) = worklist.pop() {
            worklist.extend(node.left.take());
            worklist.extend(node.right.take());
        }
        self.size = 0;
    }

    /// Returns an iterator over the map's `(&key, &value)` pairs in
    /// ascending key order (in-order traversal).
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.add(2, "b");
    /// map.add(1, "a");
    /// map.add(3, "c");
    ///
    /// let pairs: Vec<_> = map.iter().collect();
    /// assert_eq!(pairs, vec![(&1, &"a"), (&2, &"b"), (&3, &"c")]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    /// Returns the keys in ascending order as an owned snapshot.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    /// Returns the values in ascending order of their keys as an owned
    /// snapshot.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().map(|(_, v)| v.clone()).collect()
    }
}

impl<K, V> Drop for TreeMap<K, V> {
    // Dropping `root` directly would recurse once per tree level, which on a
    // chain-shaped map means one stack frame per node.
    fn drop(&mut self) {
        self.clear();
    }
}

/// Copying rebuilds the map by re-inserting the source's pairs in ascending
/// key order through the normal insertion procedure. It does **not**
/// reproduce the source's shape: ascending insertion routes every node right
/// of the previous one, so the copy is always a maximally right-leaning
/// chain, and building it costs `O(n^2)` comparisons. The copy shares no
/// nodes with the source; mutating one never affects the other.
impl<K, V> Clone for TreeMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        for (key, value) in self {
            copy.add(key.clone(), value.clone());
        }
        copy
    }
}

/// Two maps are equal iff they have the same size and, for every key in the
/// left map, the right map associates an equal value with that key. Tree
/// shape is never compared, so maps built from the same pairs in different
/// insertion orders are equal.
impl<K, V> PartialEq for TreeMap<K, V>
where
    K: Ord,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K, V> fmt::Debug for TreeMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V> IntoIterator for &'a TreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowing in-order iterator over a [`TreeMap`].
///
/// Keeps the unvisited left spine on an explicit stack, so iteration depth is
/// bounded by the tree height without consuming call stack.
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn new(map: &'a TreeMap<K, V>) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: map.size,
        };
        iter.push_left_spine(map.root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<K, V>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}
