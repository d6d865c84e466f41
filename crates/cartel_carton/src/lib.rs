//! Carton - The artist's toolbox for Cartel.
//!
//! This crate provides the foundational utilities shared by the Cartel crates,
//! much like a carton (artist's portfolio case) holds all the essential tools and
//! materials an artist needs for their work.
//!
//! # Modules
//!
//! - **General**: Case conversion helpers bridging markup and script naming
//! - **DOM tag config**: Static HTML element and attribute tables
//!
//! # Example
//!
//! ```
//! use cartel_carton::{camelize, hyphenate};
//!
//! assert_eq!(hyphenate("UserCard"), "user-card");
//! assert_eq!(camelize("user-card"), "userCard");
//! ```

// Shared modules
pub mod dom_tag_config;
pub mod general;

// Re-export compact_str::CompactString for convenience
pub use compact_str::CompactString;

// Re-export smallvec for stack-optimized collections
pub use smallvec::{smallvec, SmallVec};

// Re-export bitflags for flag types
pub use bitflags::bitflags;

// Re-export rustc-hash for fast hash maps/sets
pub use rustc_hash::{FxHashMap, FxHashSet};

// Re-export phf for compile-time perfect hash functions
pub use phf::{phf_map, phf_set, Map as PhfMap, Set as PhfSet};

// Re-export shared utilities
pub use dom_tag_config::*;
pub use general::*;
