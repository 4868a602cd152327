//! Fixed-capacity hash table with separate chaining.
//!
//! The bucket array is sized once at construction and never reallocated;
//! colliding keys share a bucket through a singly linked chain of owned
//! nodes.
//!
//! ```text
//!  Buckets (Vec<Option<Box<Node>>>)      Chains
//! ┌──────────────┐
//! │ 0: None      │
//! ├──────────────┤
//! │ 1: Some ─────┼──► ("a", v) ──► ("q", v)
//! ├──────────────┤
//! │ 2: Some ─────┼──► ("b", v)
//! ├──────────────┤
//! │ ...          │
//! └──────────────┘
//! ```
//!
//! Bucket selection uses a positional exponential hash over the key's code
//! points ([`hash::bucket_index`]) whose indices are stable across
//! implementations, so data written against one implementation of the scheme
//! can be located by another.
pub mod hash;
pub mod table;

pub use table::{CapacityError, ChainTable};
