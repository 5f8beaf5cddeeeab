//! Resolution through trait-object keys.

use ioc_facade::{DependencyContainer, Resolver, SimpleContainer};
use std::sync::Arc;

trait Logger: Send + Sync {
    fn log(&self, message: &str) -> String;
}

struct ConsoleLogger;
impl Logger for ConsoleLogger {
    fn log(&self, message: &str) -> String {
        format!("[console] {}", message)
    }
}

struct PrefixLogger {
    prefix: String,
}
impl Logger for PrefixLogger {
    fn log(&self, message: &str) -> String {
        format!("[{}] {}", self.prefix, message)
    }
}

trait Repository: Send + Sync {
    fn find(&self, id: u32) -> Option<String>;
}

struct InMemoryRepository {
    logger: Arc<dyn Logger>,
}
impl Repository for InMemoryRepository {
    fn find(&self, id: u32) -> Option<String> {
        Some(self.logger.log(&format!("find {}", id)))
    }
}

#[test]
fn test_trait_instance_resolution() {
    let mut container = SimpleContainer::new();
    container.register_trait_instance::<dyn Logger>(Arc::new(ConsoleLogger));

    let resolver = container.get_resolver();
    let logger = resolver.resolve_trait::<dyn Logger>().unwrap();
    assert_eq!(logger.log("up"), "[console] up");
    assert!(resolver.is_registered_trait::<dyn Logger>());
}

#[test]
fn test_unregistered_trait_resolves_to_absence() {
    let container = SimpleContainer::new();
    let resolver = container.get_resolver();

    assert!(resolver.resolve_trait::<dyn Logger>().is_none());
    assert_eq!(resolver.resolve_all_trait::<dyn Logger>().count(), 0);
    assert!(!resolver.is_registered_trait::<dyn Logger>());
}

#[test]
fn test_trait_type_produces_fresh_instances() {
    let mut container = SimpleContainer::new();
    container.register_trait_type::<dyn Logger, _>(|| Arc::new(ConsoleLogger));

    let resolver = container.get_resolver();
    let a = resolver.resolve_trait::<dyn Logger>().unwrap();
    let b = resolver.resolve_trait::<dyn Logger>().unwrap();

    assert_eq!(a.log("x"), "[console] x");
    assert!(!Arc::ptr_eq(&a, &b));
}

#[test]
fn test_trait_factory_resolves_nested_dependencies() {
    let mut container = SimpleContainer::new();
    container.register_trait_instance::<dyn Logger>(Arc::new(PrefixLogger {
        prefix: "repo".to_string(),
    }));
    container.register_trait_factory::<dyn Repository, _>(|r| {
        Arc::new(InMemoryRepository {
            logger: r.resolve_trait::<dyn Logger>().unwrap(),
        })
    });

    let resolver = container.get_resolver();
    let repo = resolver.resolve_trait::<dyn Repository>().unwrap();
    assert_eq!(repo.find(7).unwrap(), "[repo] find 7");
}

#[test]
fn test_multiple_trait_bindings_keep_registration_order() {
    let mut container = SimpleContainer::new();
    container
        .register_trait_instance::<dyn Logger>(Arc::new(PrefixLogger {
            prefix: "a".to_string(),
        }))
        .register_trait_instance::<dyn Logger>(Arc::new(PrefixLogger {
            prefix: "b".to_string(),
        }))
        .register_trait_type::<dyn Logger, _>(|| {
            Arc::new(PrefixLogger {
                prefix: "c".to_string(),
            })
        });

    let resolver = container.get_resolver();
    let lines: Vec<String> = resolver
        .resolve_all_trait::<dyn Logger>()
        .map(|logger| logger.log("m"))
        .collect();
    assert_eq!(lines, vec!["[a] m", "[b] m", "[c] m"]);
}

#[test]
fn test_trait_singleton_shares_one_instance() {
    let mut container = SimpleContainer::new();
    container.register_trait_singleton::<dyn Logger, _>(|| Arc::new(ConsoleLogger));

    let resolver = container.get_resolver();
    let a = resolver.resolve_trait::<dyn Logger>().unwrap();
    let b = resolver.resolve_trait::<dyn Logger>().unwrap();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn test_concrete_and_trait_keys_are_independent() {
    let mut container = SimpleContainer::new();
    container.register_instance(ConsoleLogger);

    let resolver = container.get_resolver();
    // A concrete registration is not visible under the trait key.
    assert!(resolver.resolve::<ConsoleLogger>().is_some());
    assert!(resolver.resolve_trait::<dyn Logger>().is_none());

    let mut container = SimpleContainer::new();
    container.register_trait_instance::<dyn Logger>(Arc::new(ConsoleLogger));

    let resolver = container.get_resolver();
    // And the reverse: a trait registration is not a concrete one.
    assert!(resolver.resolve_trait::<dyn Logger>().is_some());
    assert!(resolver.resolve::<ConsoleLogger>().is_none());
}
