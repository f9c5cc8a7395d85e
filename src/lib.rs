//! Three union-find variants and five comparison sorts.
//!
//! The union-find variants all implement [`DisjointSets`](trait.DisjointSets.html)
//! and trade off differently:
//!
//! |           | representation | find | union |
//! | :-------- | :------------- | :--- | :---- |
//! | [`QuickFind`](struct.QuickFind.html) | component id per site | O(1) | O(*N*) |
//! | [`QuickUnion`](struct.QuickUnion.html) | parent per site | tree height | tree height |
//! | [`WeightedQuickUnion`](struct.WeightedQuickUnion.html) | parent and tree size | O(log *N*) | O(log *N*) |
//!
//! A [`Strategy`](enum.Strategy.html) names a variant and builds a
//! [`UnionFinder`](enum.UnionFinder.html) that dispatches to it.
//!
//! The [`sort`](sort/index.html) module holds selection, insertion, shell,
//! merge and quick sort over any [`Sortable`](sort/trait.Sortable.html)
//! sequence.
//!
//! Input for both arrives through a [`TokenSource`](struct.TokenSource.html),
//! which streams whitespace-delimited tokens from a producer thread, and the
//! [`driver`](driver/index.html) module wires the pieces into the
//! `unionfind` and `sorting` programs.
//!
//! If configured with Cargo feature `"serde"`, every union-find variant
//! implements `Serialize` and `Deserialize`.
//!
//! # Examples
//!
//! Counting the connected components of a small graph with each variant:
//!
//! ```
//! use union_sort::{DisjointSets, Strategy};
//!
//! let edges = [(4, 3), (3, 8), (6, 5), (9, 4), (2, 1),
//!              (8, 9), (5, 0), (7, 2), (6, 1), (1, 0), (6, 7)];
//!
//! for &strategy in &Strategy::ALL {
//!     let mut uf = strategy.build(10).unwrap();
//!     for &(p, q) in &edges {
//!         uf.union(p, q).unwrap();
//!     }
//!
//!     assert_eq!(2, uf.count());
//!     assert!( uf.connected(3, 9).unwrap());
//!     assert!(!uf.connected(3, 7).unwrap());
//! }
//! ```

#![warn(missing_docs)]

mod error;
mod traits;
mod partition;
mod quick_find;
mod quick_union;
mod weighted;
mod strategy;
mod tokens;
pub mod sort;
pub mod driver;

pub use error::*;
pub use traits::*;
pub use partition::*;
pub use quick_find::*;
pub use quick_union::*;
pub use weighted::*;
pub use strategy::*;
pub use tokens::*;
pub use sort::{Algorithm, Sortable};
