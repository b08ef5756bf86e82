//! The disambiguation decision sequence.
//!
//! `unambiguous_name` resolves one definition's display name against its
//! peer set:
//!
//! 1. Root definitions and singleton peer sets keep their short name.
//! 2. Synthetic subjects (unions, intersections, annotations) keep their
//!    short name; they have no source path to disambiguate by.
//! 3. If exactly one peer carries a source path, that peer's name wins.
//! 4. Otherwise the subject's path, minus the prefix shared by every
//!    path-bearing peer, is flattened into an identifier fragment and
//!    prepended to the short name.

use std::fmt;

use tracing::trace;
use tsgen_model::{DefId, DefinitionStore};

use crate::prefix::longest_common_prefix;

/// Failure modes of `unambiguous_name`.
///
/// All of these are caller-input violations, not transient conditions; none
/// of them should be retried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NamingError {
    /// The peer slice was empty. A definition cannot be disambiguated
    /// against zero peers.
    EmptyPeers,

    /// A `DefId` did not resolve in the supplied store.
    UnknownDefinition(DefId),

    /// The subject carries a source path but was not found (by identity)
    /// among the path-bearing peers. Inconsistent caller metadata.
    SubjectNotAmongPeers(DefId),
}

impl fmt::Display for NamingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPeers => {
                write!(f, "cannot disambiguate a definition against an empty peer set")
            }
            Self::UnknownDefinition(id) => {
                write!(f, "definition id {} is not registered in the store", id.0)
            }
            Self::SubjectNotAmongPeers(id) => write!(
                f,
                "subject definition id {} is missing from its own path-bearing peer set",
                id.0
            ),
        }
    }
}

impl std::error::Error for NamingError {}

/// Returns an unambiguous display name for the given definition.
///
/// If the definition's name doesn't cause conflicts within `peers`, this is
/// just its short name. Otherwise the name is derived from the definition's
/// source file path: the prefix shared by all competing peers is dropped
/// (it carries no disambiguating information), path separators become `__`,
/// the file extension is stripped, and the short name is appended after a
/// `-`. Any two peers with differing paths must differ somewhere after the
/// shared prefix, so the derived names are unique within the peer set.
///
/// `peers` is the complete collision universe for this call and must contain
/// `subject` itself; peers are matched against the subject by identity
/// (`DefId`), never by value. Calls are pure and idempotent.
pub fn unambiguous_name(
    store: &DefinitionStore,
    subject: DefId,
    is_root: bool,
    peers: &[DefId],
) -> Result<String, NamingError> {
    if peers.is_empty() {
        return Err(NamingError::EmptyPeers);
    }

    let subject_def = store
        .get(subject)
        .ok_or(NamingError::UnknownDefinition(subject))?;

    // Root definitions or unambiguous ones get to keep their name.
    if peers.len() == 1 || is_root {
        trace!(id = subject.0, name = subject_def.name(), "trivially unambiguous");
        return Ok(subject_def.name().to_string());
    }

    // Synthetic subjects have no path to disambiguate by.
    if subject_def.descriptor().src_file_name().is_none() {
        trace!(id = subject.0, name = subject_def.name(), "synthetic subject keeps its name");
        return Ok(subject_def.name().to_string());
    }

    // Filter to the peers that carry a source path; synthetic peers do not
    // participate in the collision computation.
    let mut subject_index = None;
    let mut sourced = Vec::with_capacity(peers.len());
    for &peer in peers {
        let def = store.get(peer).ok_or(NamingError::UnknownDefinition(peer))?;
        if def.descriptor().src_file_name().is_some() {
            if peer == subject {
                subject_index = Some(sourced.len());
            }
            sourced.push(def);
        }
    }

    // The sole path-bearing contender keeps its name, whichever peer it is.
    if sourced.len() == 1 {
        return Ok(sourced[0].name().to_string());
    }

    let index = subject_index.ok_or(NamingError::SubjectNotAmongPeers(subject))?;

    let paths: Vec<&str> = sourced
        .iter()
        .filter_map(|def| def.descriptor().src_file_name())
        .collect();

    // The shared prefix carries no disambiguating information; everything
    // after it does.
    let common_prefix_len = longest_common_prefix(&paths).len();
    let unique_path = strip_extension(&paths[index][common_prefix_len..].replace('/', "__"));

    let name = format!("{unique_path}-{}", subject_def.name());
    trace!(
        id = subject.0,
        short = subject_def.name(),
        resolved = name.as_str(),
        "disambiguated by source path"
    );
    Ok(name)
}

/// Strips the final extension: the last `.` plus one-or-more trailing
/// non-`.` characters. Internal dots stay untouched.
fn strip_extension(name: &str) -> String {
    match name.rfind('.') {
        Some(dot) if dot + 1 < name.len() => name[..dot].to_string(),
        _ => name.to_string(),
    }
}
