//! Key identity and constructor-argument handling.

use ioc_facade::{
    key_of_trait, key_of_type, ConstructorArgs, DependencyContainer, Key, Resolver, ResolverCore,
    SimpleContainer,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

trait Marker: Send + Sync {}

#[test]
fn test_type_keys_compare_by_type_identity() {
    assert_eq!(key_of_type::<String>(), key_of_type::<String>());
    assert_ne!(key_of_type::<String>(), key_of_type::<u32>());
}

#[test]
fn test_type_and_trait_keys_never_collide() {
    struct Plain;

    assert_ne!(key_of_type::<Plain>(), key_of_trait::<dyn Marker>());
    // Even a concrete key and a trait key over the same type differ.
    assert_ne!(key_of_type::<String>(), key_of_trait::<String>());
}

#[test]
fn test_keys_work_as_map_keys() {
    let mut map: HashMap<Key, u32> = HashMap::new();
    map.insert(key_of_type::<String>(), 1);
    map.insert(key_of_trait::<dyn Marker>(), 2);

    assert_eq!(map.get(&key_of_type::<String>()), Some(&1));
    assert_eq!(map.get(&key_of_trait::<dyn Marker>()), Some(&2));
    assert_eq!(map.get(&key_of_type::<u32>()), None);
}

#[test]
fn test_display_name_reflects_the_type() {
    assert!(key_of_type::<String>().display_name().contains("String"));
    assert!(key_of_trait::<dyn Marker>().display_name().contains("Marker"));
}

#[test]
fn test_args_keep_insertion_order() {
    let args = ConstructorArgs::new()
        .with("b", 2u32)
        .with("a", 1u32)
        .with("c", 3u32);

    let names: Vec<&str> = args.iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["b", "a", "c"]);
    assert_eq!(args.len(), 3);
    assert!(!args.is_empty());
}

#[test]
fn test_args_typed_lookup() {
    let args = ConstructorArgs::new()
        .with("port", 8080u16)
        .with("host", "localhost".to_string());

    assert_eq!(*args.get::<u16>("port").unwrap(), 8080);
    assert_eq!(*args.get::<String>("host").unwrap(), "localhost");
    assert!(args.get::<u16>("host").is_none());
    assert!(args.get::<u16>("missing").is_none());
}

#[test]
fn test_simple_container_reports_no_args_support() {
    let container = SimpleContainer::new();
    assert!(!container.get_resolver().supports_constructor_args());
}

#[test]
fn test_args_are_accepted_and_ignored() {
    struct Widget {
        value: u32,
    }

    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = calls.clone();

    let mut container = SimpleContainer::new();
    container.register_factory(move |_| {
        calls_clone.fetch_add(1, Ordering::SeqCst);
        Widget { value: 42 }
    });

    let resolver = container.get_resolver();
    let args = ConstructorArgs::new().with("value", 7u32);

    // resolve_with behaves exactly like resolve here.
    let with_args = resolver.resolve_with::<Widget>(&args).unwrap();
    let without = resolver.resolve::<Widget>().unwrap();
    assert_eq!(with_args.value, 42);
    assert_eq!(without.value, 42);
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    let all: Vec<u32> = resolver
        .resolve_all_with::<Widget>(&args)
        .map(|w| w.value)
        .collect();
    assert_eq!(all, vec![42]);
}

#[test]
fn test_trait_resolution_with_args_ignored() {
    struct Impl;
    impl Marker for Impl {}

    let mut container = SimpleContainer::new();
    container.register_trait_instance::<dyn Marker>(Arc::new(Impl));

    let resolver = container.get_resolver();
    let args = ConstructorArgs::new().with("unused", 1u8);

    assert!(resolver.resolve_trait_with::<dyn Marker>(&args).is_some());
    assert_eq!(resolver.resolve_all_trait_with::<dyn Marker>(&args).count(), 1);
}
