//! impact-core: Affiliation-name canonicalization and publication-count consolidation.
//!
//! Organization names in bibliographic records spell the same institution in
//! many ways ("University of Pennsylvania", "Univ of Pennsylvania Hospital").
//! This crate collapses such variants onto one canonical name per institution
//! and sums their publication counts:
//!
//! - **normalization**: lowercase names and strip institutional boilerplate
//! - **similarity**: token-order-insensitive fuzzy scoring on a 0-100 scale
//! - **canonicalization**: a single greedy forward pass that maps every raw
//!   name to a canonical representative
//! - **aggregation**: per-group count totals assigned to one representative
//!   raw name each
//! - **ingest**: CSV collaborator reading `(name, count)` rows
//!
//! # Example
//! ```
//! use impact_core::aggregation::consolidate;
//! use impact_core::ingest::NameCount;
//!
//! let entries = vec![
//!     NameCount::new("University of Pennsylvania", 100),
//!     NameCount::new("Univ of Pennsylvania Hospital", 90),
//!     NameCount::new("Stanford University", 50),
//! ];
//! let groups = consolidate(&entries, 90);
//! assert_eq!(groups.len(), 2);
//! assert_eq!(groups[0], NameCount::new("University of Pennsylvania", 190));
//! assert_eq!(groups[1], NameCount::new("Stanford University", 50));
//! ```

pub mod aggregation;
pub mod canonicalization;
pub mod ingest;
pub mod normalization;
pub mod similarity;

pub use aggregation::*;
pub use canonicalization::*;
pub use ingest::*;
pub use normalization::*;
pub use similarity::*;
