//! Fixed-capacity hash table with separate chaining.
//!
//! Every operation computes one bucket index and then works on that bucket's
//! chain alone; buckets never interact. Ownership is tree-shaped: the table
//! owns each bucket slot, a slot owns its chain head, and each node owns its
//! successor, so dropping the table releases every node.

use std::error::Error;
use std::fmt;

use crate::hash::bucket_index;

/// Returned when a table is constructed with zero capacity.
///
/// Capacity is fixed for the table's lifetime and the hash function is
/// undefined for an empty bucket array, so misuse is rejected up front
/// instead of surfacing later inside a reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError;

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("table capacity must be at least 1")
    }
}

impl Error for CapacityError {}

/// One key/value pair plus ownership of the rest of its chain.
struct Node<V> {
    key: String,
    value: V,
    next: Option<Box<Node<V>>>,
}

/// Hash table mapping string keys to values of type `V`.
///
/// The bucket array is allocated once by [`ChainTable::new`] and never
/// resized; collisions extend the affected bucket's chain instead. Lookups
/// and removals therefore cost O(chain length) at the target bucket, an
/// accepted trade-off of fixed capacity.
///
/// The table performs no internal synchronization. Callers sharing one
/// across threads must guard all three operations with a single exclusive
/// lock, since each interleaves reads and writes of slot and chain links.
pub struct ChainTable<V> {
    buckets: Vec<Option<Box<Node<V>>>>,
    len: usize,
}

impl<V> ChainTable<V> {
    /// Creates an empty table with exactly `capacity` buckets.
    ///
    /// Rejects `capacity == 0`; there is no valid bucket for any key in an
    /// empty array.
    pub fn new(capacity: usize) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError);
        }
        let buckets = (0..capacity).map(|_| None).collect();
        Ok(Self { buckets, len: 0 })
    }

    /// Number of entries currently stored, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Inserts `key`/`value` at the tail of the key's chain.
    ///
    /// Duplicate keys are not coalesced: inserting a key twice stores two
    /// nodes and counts both in [`len`](Self::len), and `find`/`remove` only
    /// ever observe the earlier (head-ward) one while it is present.
    /// Removing the visible node unshadows the later duplicate.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        let index = bucket_index(&key, self.buckets.len());
        self.len += 1;

        let mut slot = &mut self.buckets[index];
        while let Some(node) = slot {
            slot = &mut node.next;
        }
        *slot = Some(Box::new(Node {
            key,
            value,
            next: None,
        }));
    }

    /// Returns the value of the first chain node matching `key`.
    ///
    /// `None` means the key is absent, a normal outcome rather than an
    /// error. A stored value that is itself `None`-like comes back as
    /// `Some(&value)`, so the two cases stay distinguishable.
    pub fn find(&self, key: &str) -> Option<&V> {
        let index = bucket_index(key, self.buckets.len());

        let mut node = self.buckets[index].as_deref();
        while let Some(n) = node {
            if n.key == key {
                return Some(&n.value);
            }
            node = n.next.as_deref();
        }
        None
    }

    /// Unlinks the first chain node matching `key` and returns its value.
    ///
    /// When the match is the chain head, the bucket slot takes ownership of
    /// the head's successor; the rest of the chain stays reachable. Absent
    /// keys return `None` and leave the table untouched.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = bucket_index(key, self.buckets.len());

        if self.buckets[index]
            .as_ref()
            .is_some_and(|node| node.key == key)
        {
            let head = self.buckets[index].take()?;
            self.buckets[index] = head.next;
            self.len -= 1;
            return Some(head.value);
        }

        let mut node = self.buckets[index].as_mut()?;
        while node.next.is_some() {
            if node.next.as_ref().is_some_and(|next| next.key == key) {
                let removed = node.next.take()?;
                node.next = removed.next;
                self.len -= 1;
                return Some(removed.value);
            }
            node = node.next.as_mut()?;
        }
        None
    }
}
