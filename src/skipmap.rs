use slab::Slab;

use crate::level_generator::{GeometricLevelGenerator, LevelGenerator};
use crate::node::{Link, Node};

/// Result of [`SkipMap::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The key was not present; a new entry was created.
    Inserted,
    /// The key was already present; the stored value was kept and the
    /// argument value dropped (first write wins).
    AlreadyExists,
}

/// Result of [`SkipMap::delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The entry was removed and its value dropped.
    Deleted,
    /// No entry with that key existed; nothing changed.
    NotFound,
}

/// An ordered map over `i64` keys, implemented as a skip list.
///
/// Nodes are stored in a [`Slab`] arena and linked by arena index, so
/// there is no shared ownership between nodes and teardown is linear.
/// The sentinel header is the `head` forward array owned by the map
/// itself rather than a node with a reserved key, which leaves the
/// whole `i64` range (including `i64::MIN`) usable as real keys.
///
/// The map owns its values: `insert` moves the value in, `delete`
/// drops it, and `search` hands out a shared borrow.
///
/// Single-threaded; expected `O(log n)` per operation, worst case
/// `O(n)`, with no rebalancing.
///
/// # Example
///
/// ```rust
/// use omap::{InsertOutcome, SkipMap};
///
/// let mut map: SkipMap<&str> = SkipMap::with_seed(12345);
///
/// assert_eq!(map.insert(7, "seven"), InsertOutcome::Inserted);
/// assert_eq!(map.insert(7, "again"), InsertOutcome::AlreadyExists);
/// assert_eq!(map.search(7), Some(&"seven"));
/// ```
#[derive(Debug)]
pub struct SkipMap<V, G = GeometricLevelGenerator>
where
    G: LevelGenerator,
{
    arena: Slab<Node<V>>,
    /// Sentinel forward links, one slot per level `0..=max_level`.
    head: Box<[Link]>,
    /// Highest level currently in use. Shrinks lazily on deletion.
    level: usize,
    len: usize,
    level_gen: G,
}

impl<V> SkipMap<V> {
    /// Create an empty map with the default configuration
    /// (`max_level = 5`, `p = 0.5`) and an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::with_level_generator(GeometricLevelGenerator::default())
    }

    /// Create an empty map with an explicit height cap and coin-toss
    /// bias, entropy-seeded.
    ///
    /// # Panics
    ///
    /// Panics if `p` is not in the open interval `(0, 1)`.
    pub fn with_config(max_level: usize, p: f64) -> Self {
        Self::with_level_generator(GeometricLevelGenerator::new(max_level, p))
    }

    /// Create an empty map with the default configuration and a
    /// deterministic RNG seed. Two maps built with the same seed see
    /// the same level sequence, making structural tests reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_level_generator(GeometricLevelGenerator::with_seed(
            crate::level_generator::DEFAULT_MAX_LEVEL,
            crate::level_generator::DEFAULT_PROBABILITY,
            seed,
        ))
    }
}

impl<V> Default for SkipMap<V> {
    fn default() -> Self {
        SkipMap::new()
    }
}

impl<V, G> SkipMap<V, G>
where
    G: LevelGenerator,
{
    /// Create an empty map driven by the given level generator.
    pub fn with_level_generator(level_gen: G) -> Self {
        let slots = level_gen.max_level() + 1;
        SkipMap {
            arena: Slab::new(),
            head: vec![None; slots].into_boxed_slice(),
            level: 0,
            len: 0,
            level_gen,
        }
    }

    /// Number of entries in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Highest level currently occupied by any node.
    #[inline]
    pub fn height(&self) -> usize {
        self.level
    }

    /// Hard cap on structural height, fixed at construction.
    #[inline]
    pub fn max_level(&self) -> usize {
        self.head.len() - 1
    }

    /// Returns `true` if the map contains the given key.
    #[inline]
    pub fn contains_key(&self, key: i64) -> bool {
        self.search(key).is_some()
    }

    /// Look up a key, returning a borrow of its value if present.
    pub fn search(&self, key: i64) -> Option<&V> {
        let mut current: Link = None;

        // Descend from the top active level, advancing at each level
        // while the next key is still below the target.
        for i in (0..=self.level).rev() {
            let mut next = self.forward_of(current, i);
            while let Some(idx) = next {
                let node = &self.arena[idx];
                if node.key >= key {
                    break;
                }
                current = next;
                next = node.forward[i];
            }
        }

        // After level 0 the immediate successor is the only candidate.
        match self.forward_of(current, 0) {
            Some(idx) if self.arena[idx].key == key => Some(&self.arena[idx].value),
            _ => None,
        }
    }

    /// Insert a key-value pair.
    ///
    /// If the key is already present the existing value is retained
    /// unchanged, `value` is dropped, and
    /// [`InsertOutcome::AlreadyExists`] is returned.
    pub fn insert(&mut self, key: i64, value: V) -> InsertOutcome {
        let mut update = vec![None; self.head.len()];
        if self.descend(key, &mut update).is_some() {
            return InsertOutcome::AlreadyExists;
        }

        let new_level = self.level_gen.random();
        if new_level > self.level {
            // The descent never visited levels above the old height.
            // Their update slots are still `None`, which already names
            // the head sentinel, the only predecessor up there.
            self.level = new_level;
        }

        let idx = self.arena.insert(Node::new(key, value, new_level));

        // Splice bottom-up, reading each predecessor's link before
        // overwriting it so the existing chain is never lost.
        for i in 0..=new_level {
            let next = self.forward_of(update[i], i);
            self.arena[idx].forward[i] = next;
            self.set_forward(update[i], i, Some(idx));
        }

        self.len += 1;
        InsertOutcome::Inserted
    }

    /// Remove a key, dropping its value.
    ///
    /// Returns [`DeleteOutcome::NotFound`] without mutating anything
    /// if the key is absent.
    pub fn delete(&mut self, key: i64) -> DeleteOutcome {
        let mut update = vec![None; self.head.len()];
        let Some(idx) = self.descend(key, &mut update) else {
            return DeleteOutcome::NotFound;
        };

        // Unlink bottom-up. The first predecessor that does not point
        // at the target marks the top of the node's own links; nothing
        // above it ever pointed here.
        for i in 0..=self.level {
            if self.forward_of(update[i], i) != Some(idx) {
                break;
            }
            let next = self.arena[idx].forward[i];
            self.set_forward(update[i], i, next);
        }

        self.arena.remove(idx);

        // Height shrinks lazily: drop top levels whose head link is
        // now empty so `level` never overstates the tallest node.
        while self.level > 0 && self.head[self.level].is_none() {
            self.level -= 1;
        }

        self.len -= 1;
        DeleteOutcome::Deleted
    }

    /// Remove every entry, resetting the map to its freshly
    /// constructed state.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head.fill(None);
        self.level = 0;
        self.len = 0;
    }

    /// Iterate over `(key, &value)` pairs in ascending key order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            arena: &self.arena,
            current: self.head[0],
        }
    }

    /// Diagnostic traversal: for each active level, the ordered
    /// sequence of keys reachable on that level's chain.
    ///
    /// Read-only; intended for inspection and tests.
    pub fn dump(&self) -> Vec<(usize, Vec<i64>)> {
        (0..=self.level)
            .map(|i| {
                let mut keys = Vec::new();
                let mut current = self.head[i];
                while let Some(idx) = current {
                    let node = &self.arena[idx];
                    keys.push(node.key);
                    current = node.forward[i];
                }
                (i, keys)
            })
            .collect()
    }

    /// Descend toward `key`, recording the last node visited at each
    /// level in `update` (`None` meaning the head sentinel). Returns
    /// the index of the node holding `key`, if present.
    fn descend(&self, key: i64, update: &mut [Link]) -> Link {
        let mut current: Link = None;

        for i in (0..=self.level).rev() {
            let mut next = self.forward_of(current, i);
            while let Some(idx) = next {
                let node = &self.arena[idx];
                if node.key >= key {
                    break;
                }
                current = next;
                next = node.forward[i];
            }
            update[i] = current;
        }

        match self.forward_of(current, 0) {
            found @ Some(idx) if self.arena[idx].key == key => found,
            _ => None,
        }
    }

    /// Forward link at `level` out of `at`, where `None` is the head.
    #[inline]
    fn forward_of(&self, at: Link, level: usize) -> Link {
        match at {
            None => self.head[level],
            Some(idx) => self.arena[idx].forward[level],
        }
    }

    #[inline]
    fn set_forward(&mut self, at: Link, level: usize, to: Link) {
        match at {
            None => self.head[level] = to,
            Some(idx) => self.arena[idx].forward[level] = to,
        }
    }
}

/// In-order iterator over the level-0 chain.
pub struct Iter<'a, V> {
    arena: &'a Slab<Node<V>>,
    current: Link,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (i64, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        let node = &self.arena[idx];
        self.current = node.forward[0];
        Some((node.key, &node.value))
    }
}
