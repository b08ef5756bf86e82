//! End-to-end tests for the naming decision sequence.

use tsgen_model::{DefId, DefKind, Definition, DefinitionStore};
use tsgen_naming::{NamingError, unambiguous_name};

fn sourced(store: &DefinitionStore, name: &str, path: &str) -> DefId {
    store.register(Definition::new(name, DefKind::Interface, path))
}

#[test]
fn test_root_definitions_keep_their_name() {
    let store = DefinitionStore::new();
    let a = sourced(&store, "User", "src/models/User.ts");
    let b = sourced(&store, "User", "src/dto/User.ts");

    // Root-level definitions are addressed by context, never qualified.
    let name = unambiguous_name(&store, a, true, &[a, b]).unwrap();
    assert_eq!(name, "User");
}

#[test]
fn test_singleton_peer_set_keeps_the_name() {
    let store = DefinitionStore::new();
    let a = sourced(&store, "User", "src/models/User.ts");

    let name = unambiguous_name(&store, a, false, &[a]).unwrap();
    assert_eq!(name, "User");
}

#[test]
fn test_synthetic_subject_keeps_the_name() {
    let store = DefinitionStore::new();
    let union = store.register(Definition::synthetic("StringOrNumber", DefKind::Union));
    let a = sourced(&store, "StringOrNumber", "src/aliases.ts");

    let name = unambiguous_name(&store, union, false, &[union, a]).unwrap();
    assert_eq!(name, "StringOrNumber");
}

#[test]
fn test_sole_path_bearing_peer_wins() {
    let store = DefinitionStore::new();
    let real = sourced(&store, "Config", "src/Config.ts");
    let ann = store.register(Definition::synthetic("ConfigAnnotated", DefKind::Annotation));
    let alt = store.register(Definition::synthetic("ConfigUnion", DefKind::Union));

    // Whichever peer is the subject, the single path-bearing contender's
    // name is returned.
    let name = unambiguous_name(&store, real, false, &[ann, real, alt]).unwrap();
    assert_eq!(name, "Config");
}

#[test]
fn test_sibling_files_in_one_directory() {
    let store = DefinitionStore::new();
    let foo = sourced(&store, "Foo", "a/b/Foo.ts");
    let bar = sourced(&store, "Bar", "a/b/Bar.ts");

    // Common prefix "a/b/", suffix "Foo.ts", extension stripped.
    let name = unambiguous_name(&store, foo, false, &[foo, bar]).unwrap();
    assert_eq!(name, "Foo-Foo");
}

#[test]
fn test_nested_path_collapses_to_double_underscores() {
    let store = DefinitionStore::new();
    let models = sourced(&store, "User", "src/models/User.ts");
    let dto = sourced(&store, "User", "src/dto/User.ts");

    let name = unambiguous_name(&store, models, false, &[models, dto]).unwrap();
    assert_eq!(name, "models__User-User");

    let name = unambiguous_name(&store, dto, false, &[models, dto]).unwrap();
    assert_eq!(name, "dto__User-User");
}

#[test]
fn test_synthetic_peers_are_excluded_from_the_computation() {
    let store = DefinitionStore::new();
    let a = sourced(&store, "Shape", "geometry/flat/Shape.ts");
    let b = sourced(&store, "Shape", "geometry/solid/Shape.ts");
    let u = store.register(Definition::synthetic("Shape", DefKind::Union));

    // The union peer carries no path; the prefix is computed over the two
    // real files only.
    let name = unambiguous_name(&store, a, false, &[a, u, b]).unwrap();
    assert_eq!(name, "flat__Shape-Shape");
}

#[test]
fn test_internal_dots_survive_extension_stripping() {
    let store = DefinitionStore::new();
    let a = sourced(&store, "Event", "api/v1.2/Event.ts");
    let b = sourced(&store, "Event", "api/beta/Event.ts");

    let name = unambiguous_name(&store, a, false, &[a, b]).unwrap();
    assert_eq!(name, "v1.2__Event-Event");
}

#[test]
fn test_repeated_calls_are_identical() {
    let store = DefinitionStore::new();
    let a = sourced(&store, "User", "src/models/User.ts");
    let b = sourced(&store, "User", "src/dto/User.ts");

    let first = unambiguous_name(&store, a, false, &[a, b]).unwrap();
    let second = unambiguous_name(&store, a, false, &[a, b]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_peers_with_equal_names_get_distinct_results() {
    let store = DefinitionStore::new();
    let a = sourced(&store, "User", "src/models/User.ts");
    let b = sourced(&store, "User", "src/dto/User.ts");
    let c = sourced(&store, "User", "src/legacy/v2/User.ts");
    let peers = [a, b, c];

    let names: Vec<String> = peers
        .iter()
        .map(|&id| unambiguous_name(&store, id, false, &peers).unwrap())
        .collect();

    assert_eq!(names[0], "models__User-User");
    assert_eq!(names[1], "dto__User-User");
    assert_eq!(names[2], "legacy__v2__User-User");
    assert_ne!(names[0], names[1]);
    assert_ne!(names[1], names[2]);
}

#[test]
fn test_empty_peer_set_is_rejected() {
    let store = DefinitionStore::new();
    let a = sourced(&store, "User", "src/models/User.ts");

    let err = unambiguous_name(&store, a, false, &[]).unwrap_err();
    assert_eq!(err, NamingError::EmptyPeers);

    // The root flag does not rescue an empty peer set.
    let err = unambiguous_name(&store, a, true, &[]).unwrap_err();
    assert_eq!(err, NamingError::EmptyPeers);
}

#[test]
fn test_identity_not_value_equality() {
    let store = DefinitionStore::new();
    // Two registrations with identical contents are distinct entries.
    let a = sourced(&store, "User", "src/models/User.ts");
    let b = sourced(&store, "User", "src/models/User.ts");
    let other = sourced(&store, "User", "src/dto/User.ts");

    // Subject `a` is located by id among [a, b, other], not matched against
    // `b` by content.
    let name = unambiguous_name(&store, a, false, &[a, b, other]).unwrap();
    assert_eq!(name, "models__User-User");
}

#[test]
fn test_concurrent_resolution_needs_no_coordination() {
    let store = DefinitionStore::new();
    let a = sourced(&store, "User", "src/models/User.ts");
    let b = sourced(&store, "User", "src/dto/User.ts");

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    let name = unambiguous_name(&store, a, false, &[a, b]).unwrap();
                    assert_eq!(name, "models__User-User");
                }
            });
        }
    });
}
