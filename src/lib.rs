//! # ioc-facade
//!
//! A thin abstraction layer over dependency-injection containers: one uniform
//! resolution trait ([`Resolver`]), one registration trait
//! ([`DependencyContainer`]), and a self-contained minimal container
//! ([`SimpleContainer`]) for when no external library is wanted. Adapters
//! over third-party containers implement the same two traits and translate
//! the wrapped library's "no binding found" signal into the absent (`None`)
//! representation used throughout.
//!
//! ## Features
//!
//! - **Multi-binding**: a key may carry any number of bindings; registration
//!   is append-only and order-preserving
//! - **Lazy factories**: factory bindings run only when a resolution sequence
//!   is advanced far enough to reach them, and their output is never cached
//! - **Absence, not errors**: resolving an unregistered key yields `None` or
//!   an empty sequence, never a failure
//! - **Phase separation by borrow**: registration takes `&mut`, resolution
//!   borrows, so the two phases cannot overlap
//!
//! ## Quick Start
//!
//! ```rust
//! use ioc_facade::{DependencyContainer, Resolver, SimpleContainer};
//! use std::sync::Arc;
//!
//! struct Database {
//!     connection_string: String,
//! }
//!
//! struct UserService {
//!     db: Arc<Database>,
//! }
//!
//! // Register bindings.
//! let mut container = SimpleContainer::new();
//! container.register_instance(Database {
//!     connection_string: "postgres://localhost".to_string(),
//! });
//! container.register_factory(|resolver| UserService {
//!     db: resolver.resolve::<Database>().unwrap(),
//! });
//!
//! // Obtain a resolver view and look things up.
//! let resolver = container.get_resolver();
//! let service = resolver.resolve::<UserService>().unwrap();
//! assert_eq!(service.db.connection_string, "postgres://localhost");
//!
//! // Unregistered keys resolve to absence, not an error.
//! assert!(resolver.resolve::<u64>().is_none());
//! ```
//!
//! ## Trait bindings
//!
//! ```rust
//! use ioc_facade::{DependencyContainer, Resolver, SimpleContainer};
//! use std::sync::Arc;
//!
//! trait Logger: Send + Sync {
//!     fn log(&self, message: &str) -> String;
//! }
//!
//! struct ConsoleLogger;
//! impl Logger for ConsoleLogger {
//!     fn log(&self, message: &str) -> String {
//!         format!("[LOG] {}", message)
//!     }
//! }
//!
//! let mut container = SimpleContainer::new();
//! container.register_trait_instance::<dyn Logger>(Arc::new(ConsoleLogger));
//!
//! let resolver = container.get_resolver();
//! let logger = resolver.resolve_trait::<dyn Logger>().unwrap();
//! assert_eq!(logger.log("Hello, World!"), "[LOG] Hello, World!");
//! ```
//!
//! ## Multiple bindings per key
//!
//! Instances always rank ahead of factories, and each registry keeps
//! registration order:
//!
//! ```rust
//! use ioc_facade::{DependencyContainer, Resolver, SimpleContainer};
//!
//! let mut container = SimpleContainer::new();
//! container
//!     .register_type(|| 3u32)        // factory: merged after instances
//!     .register_instance(1u32)
//!     .register_instance(2u32);
//!
//! let resolver = container.get_resolver();
//! let all: Vec<u32> = resolver.resolve_all::<u32>().map(|v| *v).collect();
//! assert_eq!(all, vec![1, 2, 3]);
//! ```

// Module declarations
pub mod args;
pub mod container;
pub mod descriptors;
pub mod key;
pub mod traits;

// Internal modules
mod registration;

// Re-export core types
pub use args::ConstructorArgs;
pub use container::{ContainerResolver, SimpleContainer};
pub use descriptors::{BindingDescriptor, BindingKind};
pub use key::{key_of_trait, key_of_type, Key};
pub use traits::{
    AnyArc, BindingIter, DependencyContainer, ResolvedIter, ResolvedTraitIter, Resolver,
    ResolverCore,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn instance_resolution() {
        let mut container = SimpleContainer::new();
        container.register_instance("hello".to_string());

        let resolver = container.get_resolver();
        assert_eq!(*resolver.resolve::<String>().unwrap(), "hello");
    }

    #[test]
    fn absence_is_none() {
        let container = SimpleContainer::new();
        let resolver = container.get_resolver();

        assert!(resolver.resolve::<String>().is_none());
        assert_eq!(resolver.resolve_all::<String>().count(), 0);
        assert!(!resolver.is_registered::<String>());
    }

    #[test]
    fn factory_runs_per_resolution() {
        let mut container = SimpleContainer::new();
        container.register_factory(|_| Arc::new(7u32));

        let resolver = container.get_resolver();
        let a = resolver.resolve::<Arc<u32>>().unwrap();
        let b = resolver.resolve::<Arc<u32>>().unwrap();

        assert_eq!(**a, 7);
        // No caching between calls: two resolutions, two allocations.
        assert!(!Arc::ptr_eq(&*a, &*b));
    }

    #[test]
    fn views_share_state() {
        let mut container = SimpleContainer::new();
        container.register_instance(5u8);

        let first = container.get_resolver();
        let second = container.get_resolver();
        assert_eq!(first.resolve::<u8>(), second.resolve::<u8>());
    }

    #[test]
    fn container_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SimpleContainer>();
        assert_send_sync::<ContainerResolver<'static>>();
    }
}
