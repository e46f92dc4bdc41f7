//! Shared building blocks for the analyses.
//!
//! - [`Sequence`] - Ordered container with constant-time access at both ends, used for
//!   statement blocks, version tables and worklists
//! - [`graph`] - Node identifiers, graph traits and traversal algorithms
//! - [`escape_dot`] - Label escaping for Graphviz output

mod dot;
pub mod graph;
mod sequence;

pub use dot::escape_dot;
pub use sequence::Sequence;
