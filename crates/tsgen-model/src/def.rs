//! Definition identifiers and storage.
//!
//! This module provides the identity handle (`DefId`) and the record types
//! that the naming core consumes:
//!
//! - **Identity**: a `DefId` is a stable integer id assigned at registration.
//!   Two registrations are always distinct entries, even when their contents
//!   are equal.
//! - **Storage**: `DefinitionStore` is a concurrent append-only arena.
//!   Registered definitions are never mutated or removed.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::trace;

// =============================================================================
// DefId - Definition Identity Handle
// =============================================================================

/// Stable identity handle for a registered definition.
///
/// Identity comparison between definitions is `DefId` equality. Handles are
/// only meaningful relative to the `DefinitionStore` that issued them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DefId(pub u32);

impl DefId {
    /// Sentinel value for invalid `DefId`.
    pub const INVALID: Self = Self(0);

    /// First valid `DefId`.
    pub const FIRST_VALID: u32 = 1;

    /// Check if this `DefId` is valid.
    pub const fn is_valid(self) -> bool {
        self.0 >= Self::FIRST_VALID
    }
}

// =============================================================================
// DefKind - Definition Kind
// =============================================================================

/// Kind of type definition.
///
/// Kinds split into *sourced* definitions, which originate from a single
/// source file, and *synthetic* (intermediate) definitions such as unions and
/// annotations, which have no single originating file and therefore carry no
/// source path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefKind {
    /// Interface declaration.
    /// `interface Point { x: number; y: number }`
    Interface,

    /// Class declaration.
    /// `class User { constructor(public name: string) {} }`
    Class,

    /// Enum declaration.
    /// `enum Direction { Up, Down, Left, Right }`
    Enum,

    /// Type alias declaration.
    /// `type Foo = number`
    TypeAlias,

    /// Union built during schema construction, not declared in any one file.
    Union,

    /// Intersection built during schema construction.
    Intersection,

    /// Annotation wrapper attached to another type.
    Annotation,
}

impl DefKind {
    /// Whether definitions of this kind are synthetic (intermediate) and thus
    /// never carry a source file path.
    pub const fn is_synthetic(self) -> bool {
        matches!(self, Self::Union | Self::Intersection | Self::Annotation)
    }
}

// =============================================================================
// TypeDescriptor - Source Metadata
// =============================================================================

/// Structural metadata attached to a definition.
///
/// The source file path, when present, is slash-delimited and ends in a
/// filename with an extension (e.g. `a/b/User.ts`). Synthetic kinds leave it
/// absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    kind: DefKind,
    src_file_name: Option<String>,
}

impl TypeDescriptor {
    /// Descriptor for a definition originating from a source file.
    pub fn sourced(kind: DefKind, src_file_name: impl Into<String>) -> Self {
        Self {
            kind,
            src_file_name: Some(src_file_name.into()),
        }
    }

    /// Descriptor for a synthetic definition with no originating file.
    pub const fn synthetic(kind: DefKind) -> Self {
        Self {
            kind,
            src_file_name: None,
        }
    }

    /// Kind of the described definition.
    pub const fn kind(&self) -> DefKind {
        self.kind
    }

    /// Source file path, or `None` for synthetic definitions.
    pub fn src_file_name(&self) -> Option<&str> {
        self.src_file_name.as_deref()
    }
}

// =============================================================================
// Definition - Named Type Entry
// =============================================================================

/// A named type entry that may need disambiguation.
///
/// The short `name` is not necessarily unique; the naming core derives a
/// collision-free display name from the descriptor's source path when peers
/// collide.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    name: String,
    descriptor: TypeDescriptor,
}

impl Definition {
    /// Create a definition originating from a source file.
    pub fn new(name: impl Into<String>, kind: DefKind, src_file_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            descriptor: TypeDescriptor::sourced(kind, src_file_name),
        }
    }

    /// Create a synthetic definition (union, intersection, annotation).
    pub fn synthetic(name: impl Into<String>, kind: DefKind) -> Self {
        Self {
            name: name.into(),
            descriptor: TypeDescriptor::synthetic(kind),
        }
    }

    /// Short display name (not necessarily unique among peers).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Structural metadata for this definition.
    pub const fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }
}

// =============================================================================
// DefinitionStore - Concurrent Definition Arena
// =============================================================================

/// Concurrent append-only storage for definitions.
///
/// Ids are allocated sequentially starting at `DefId::FIRST_VALID`. The store
/// never mutates or removes a registered definition, so lookups may run in
/// parallel with registrations without coordination.
#[derive(Debug)]
pub struct DefinitionStore {
    definitions: DashMap<DefId, Definition>,
    next_id: AtomicU32,
}

impl DefinitionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            definitions: DashMap::new(),
            next_id: AtomicU32::new(DefId::FIRST_VALID),
        }
    }

    /// Register a definition and return its identity handle.
    pub fn register(&self, definition: Definition) -> DefId {
        let id = DefId(self.next_id.fetch_add(1, Ordering::Relaxed));
        trace!(
            id = id.0,
            name = definition.name(),
            kind = ?definition.descriptor().kind(),
            "registered definition"
        );
        self.definitions.insert(id, definition);
        id
    }

    /// Look up a definition by id.
    pub fn get(&self, id: DefId) -> Option<dashmap::mapref::one::Ref<'_, DefId, Definition>> {
        self.definitions.get(&id)
    }

    /// Number of registered definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the store holds no definitions.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for DefinitionStore {
    fn default() -> Self {
        Self::new()
    }
}
