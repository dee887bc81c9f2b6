//! Memo table shared by the top-down strategies.

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;

/// A memoization table from a problem-state key to its computed result.
///
/// The key type is whatever identifies one subproblem: a single index for
/// Fibonacci, a composite `(m, n)` tuple for LCS. Interior mutability lets
/// the recursive strategies consult and fill the table through `&self`.
///
/// A table belongs to one strategy instance and one measurement run.
/// Call [`Memo::clear`] (or build a fresh instance) before reusing a
/// strategy on different inputs or timing it again: stale entries would
/// corrupt both the result and the cost measurement.
#[derive(Debug)]
pub struct Memo<K, V> {
    entries: RefCell<HashMap<K, V>>,
}

impl<K: Eq + Hash, V: Copy> Memo<K, V> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// Returns the cached result for `key`, if one was stored.
    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.borrow().get(key).copied()
    }

    /// Stores the result for `key`.
    ///
    /// The strategies only insert on a cache miss, so a stored key is
    /// never overwritten within a run.
    pub fn insert(&self, key: K, value: V) {
        self.entries.borrow_mut().insert(key, value);
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    /// Number of distinct subproblems stored so far.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` if no subproblem has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<K: Eq + Hash, V: Copy> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
