use kbext_core::{
    ExtensionRef, KnowledgeBaseExtension, KnowledgeBaseExtensionRegistry, RegistryState,
    HIGHEST_PRECEDENCE, LOWEST_PRECEDENCE,
};
use std::sync::Arc;

struct OrderedExtension {
    id: &'static str,
    order: i32,
}

impl KnowledgeBaseExtension for OrderedExtension {
    fn bean_name(&self) -> &str {
        self.id
    }

    fn order(&self) -> i32 {
        self.order
    }
}

struct UnorderedExtension(&'static str);

impl KnowledgeBaseExtension for UnorderedExtension {
    fn bean_name(&self) -> &str {
        self.0
    }
}

fn ext(id: &'static str, order: i32) -> ExtensionRef {
    Arc::new(OrderedExtension { id, order })
}

fn same(left: &ExtensionRef, right: &ExtensionRef) -> bool {
    Arc::ptr_eq(left, right)
}

#[test]
fn orders_mixed_discovery_by_key_with_stable_ties() {
    let e1 = ext("a", 10);
    let e2 = ext("b", 5);
    let e3 = ext("c", 5);
    let registry = KnowledgeBaseExtensionRegistry::new();
    registry
        .initialize(Some(&[e1.clone(), e2.clone(), e3.clone()]))
        .expect("initialization");

    let listed = registry.list_extensions();
    assert_eq!(listed.len(), 3);
    assert!(same(&listed[0], &e2));
    assert!(same(&listed[1], &e3));
    assert!(same(&listed[2], &e1));

    let found = registry.find_extension(Some("c")).expect("c is registered");
    assert!(same(&found, &e3));
    assert!(registry.find_extension(Some("z")).is_none());
}

#[test]
fn equal_keys_keep_discovery_order_in_both_directions() {
    let registry = KnowledgeBaseExtensionRegistry::new();
    registry
        .initialize(Some(&[ext("first", 0), ext("second", 0)]))
        .expect("initialization");
    assert_eq!(registry.list_extensions().ids(), vec!["first", "second"]);

    registry
        .initialize(Some(&[ext("second", 0), ext("first", 0)]))
        .expect("reinitialization");
    assert_eq!(registry.list_extensions().ids(), vec!["second", "first"]);
}

#[test]
fn unordered_extensions_sort_last() {
    let registry = KnowledgeBaseExtensionRegistry::new();
    registry
        .initialize(Some(&[
            Arc::new(UnorderedExtension("plain")) as ExtensionRef,
            ext("ranked", LOWEST_PRECEDENCE - 1),
        ]))
        .expect("initialization");
    assert_eq!(registry.list_extensions().ids(), vec!["ranked", "plain"]);
}

#[test]
fn highest_precedence_sorts_ahead_of_every_other_key() {
    let registry = KnowledgeBaseExtensionRegistry::new();
    registry
        .initialize(Some(&[
            ext("near-min", i32::MIN + 1),
            ext("zero", 0),
            ext("top", HIGHEST_PRECEDENCE),
            Arc::new(UnorderedExtension("plain")) as ExtensionRef,
        ]))
        .expect("initialization");
    assert_eq!(
        registry.list_extensions().ids(),
        vec!["top", "near-min", "zero", "plain"]
    );
}

#[test]
fn absent_id_is_absent_in_every_state() {
    let registry = KnowledgeBaseExtensionRegistry::new();
    assert_eq!(registry.state(), RegistryState::Uninitialized);
    assert!(registry.find_extension(None).is_none());

    registry
        .initialize(Some(&[ext("a", 1)]))
        .expect("initialization");
    assert!(registry.find_extension(None).is_none());
}

#[test]
fn lookup_is_exact_string_match() {
    let registry = KnowledgeBaseExtensionRegistry::new();
    registry
        .initialize(Some(&[ext("wikidata", 1)]))
        .expect("initialization");

    assert!(registry.find_extension(Some("wikidata")).is_some());
    assert!(registry.find_extension(Some("WikiData")).is_none());
    assert!(registry.find_extension(Some("wiki")).is_none());
    assert!(registry.find_extension(Some(" wikidata")).is_none());
}

#[test]
fn lookup_on_empty_registry_is_absent() {
    let registry = KnowledgeBaseExtensionRegistry::new();
    registry.initialize(None).expect("empty initialization");
    assert!(registry.find_extension(Some("a")).is_none());
    assert!(registry.list_extensions().is_empty());
}

// Duplicate ids are accepted by default and lookup returns the earliest one in
// sort order, not in discovery order.
#[test]
fn duplicate_ids_resolve_to_earliest_in_sort_order() {
    let late = ext("dup", 20);
    let early = ext("dup", 1);
    let registry = KnowledgeBaseExtensionRegistry::new();
    registry
        .initialize(Some(&[late.clone(), early.clone()]))
        .expect("duplicates are accepted by default");

    let found = registry.find_extension(Some("dup")).expect("dup is registered");
    assert!(same(&found, &early));
    assert_eq!(registry.len(), 2);
}

#[test]
fn repeated_lookups_return_same_handle() {
    let registry = KnowledgeBaseExtensionRegistry::new();
    registry
        .initialize(Some(&[ext("a", 1), ext("b", 2)]))
        .expect("initialization");

    let first = registry.find_extension(Some("b")).expect("b");
    for _ in 0..3 {
        let again = registry.find_extension(Some("b")).expect("b");
        assert!(same(&first, &again));
    }
}

#[test]
fn reinitialization_replaces_instead_of_appending() {
    let registry = KnowledgeBaseExtensionRegistry::new();
    registry
        .initialize(Some(&[ext("a1", 3), ext("a2", 1)]))
        .expect("first set");
    registry
        .initialize(Some(&[ext("b1", 2), ext("b2", 0)]))
        .expect("second set");

    let reference = KnowledgeBaseExtensionRegistry::new();
    reference
        .initialize(Some(&[ext("b1", 2), ext("b2", 0)]))
        .expect("reference set");

    assert_eq!(registry.list_extensions().ids(), reference.list_extensions().ids());
    assert!(registry.find_extension(Some("a1")).is_none());

    registry.initialize(None).expect("empty set");
    assert!(registry.is_empty());
    assert_eq!(registry.state(), RegistryState::Ready);
}
