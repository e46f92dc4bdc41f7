//! Graph algorithms shared by the analyses.
//!
//! # Traversal
//!
//! - [`bfs`] - Breadth-first search, used to collect every node reachable from an entry
//! - [`ranked_bfs`] - Breadth-first search that does not follow edges into equal or lower
//!   ranks, used as the node order of the dominance passes
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | BFS | O(V + E) | Reachability, frontier union |
//! | Ranked BFS | O(V + E) | Dominance pass ordering |

mod traversal;

pub use traversal::{bfs, ranked_bfs, BfsIterator, RankedBfsIterator};
