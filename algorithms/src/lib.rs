//! # Drill Algorithms
//!
//! Classic textbook exercises, organized by category.
//!
//! ## Modules
//!
//! - `data_structures` – Treap with subtree sizes for rank queries
//! - `searching` – Binary search over ascending slices, chained hash index
//! - `sorting` – In-place quicksort with a hole-filling partition
//! - `graph` – Edge-consuming depth-first walk
//! - `registry` – Sorted unique-ID registry built on binary search
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use algorithms::searching::search;
//! use algorithms::sorting::quick_sort;
//!
//! let mut v = vec![9, 1, 7, 3, 11, 5];
//! quick_sort(&mut v);
//! assert_eq!(v, vec![1, 3, 5, 7, 9, 11]);
//! assert!(search(&v, &7));
//! assert!(!search(&v, &4));
//! ```

pub mod data_structures;
pub mod graph;
pub mod registry;
pub mod searching;
pub mod sorting;
