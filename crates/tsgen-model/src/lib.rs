//! Type definition handles and storage for the tsgen naming workspace.
//!
//! This crate provides the shared definition model:
//! - Identity handles (`DefId`)
//! - Definition records (`Definition`, `TypeDescriptor`, `DefKind`)
//! - Concurrent definition storage (`DefinitionStore`)
//!
//! Definitions are compared by identity (`DefId` equality), never by value:
//! two definitions with identical names and source paths are still distinct
//! entries when registered separately.

// Definition handles, records, and storage
pub mod def;
pub use def::{DefId, DefKind, Definition, DefinitionStore, TypeDescriptor};
