//! Collision-free display names for type definitions.
//!
//! Multiple definitions may legitimately share a short name (two `User`
//! interfaces in different files). This crate derives a stable display name
//! for each: identical to the short name when nothing collides, and a
//! deterministic path-derived name when peers do collide.
//!
//! The entire boundary is one pure function:
//!
//! ```
//! use tsgen_model::{DefKind, Definition, DefinitionStore};
//! use tsgen_naming::unambiguous_name;
//!
//! let store = DefinitionStore::new();
//! let a = store.register(Definition::new("User", DefKind::Interface, "src/models/User.ts"));
//! let b = store.register(Definition::new("User", DefKind::Interface, "src/dto/User.ts"));
//!
//! let name = unambiguous_name(&store, a, false, &[a, b]).unwrap();
//! assert_eq!(name, "models__User-User");
//! ```
//!
//! Each call is a pure function of its inputs: no shared mutable state, no
//! I/O, no ordering dependency between invocations.

// Longest-common-prefix scan over candidate source paths
mod prefix;

// The disambiguation decision sequence
pub mod resolve;
pub use resolve::{NamingError, unambiguous_name};
