//! The minimal built-in container and its resolver view.

use std::any::Any;
use std::sync::Arc;

use crate::args::ConstructorArgs;
use crate::descriptors::{BindingDescriptor, BindingKind};
use crate::key::{key_of_trait, key_of_type, Key};
use crate::registration::Registry;
use crate::traits::{AnyArc, BindingIter, DependencyContainer, ResolverCore};

/// Minimal dependency container.
///
/// `SimpleContainer` is a multi-map-backed service locator: it keeps two
/// append-only registries (pre-constructed instances and factories) keyed by
/// [`Key`], and resolves by merging them lazily, instances first. It has no
/// notion of lifetimes beyond that split: stored instances behave like
/// singletons, factory output is never cached.
///
/// Intended usage is a registration phase followed by a resolution phase.
/// Registration takes `&mut self`; resolution goes through the borrowed view
/// returned by [`get_resolver`](DependencyContainer::get_resolver), so the
/// borrow checker keeps the phases from overlapping. Resolution through
/// shared references is safe to run from several threads at once; the
/// container holds no interior mutability.
///
/// Constructor arguments are accepted by the resolver surface for interface
/// compatibility and ignored; [`supports_constructor_args`] reports `false`.
///
/// [`supports_constructor_args`]: ResolverCore::supports_constructor_args
///
/// # Examples
///
/// ```rust
/// use ioc_facade::{DependencyContainer, Resolver, SimpleContainer};
///
/// let mut container = SimpleContainer::new();
/// container.register_instance("hello".to_string());
///
/// let resolver = container.get_resolver();
/// assert_eq!(*resolver.resolve::<String>().unwrap(), "hello");
/// ```
///
/// Factories may resolve their own dependencies through the resolver they
/// receive:
///
/// ```rust
/// use ioc_facade::{DependencyContainer, Resolver, SimpleContainer};
/// use std::sync::Arc;
///
/// struct Config {
///     port: u16,
/// }
///
/// struct Server {
///     config: Arc<Config>,
/// }
///
/// let mut container = SimpleContainer::new();
/// container.register_instance(Config { port: 8080 });
/// container.register_factory(|r| Server {
///     config: r.resolve::<Config>().unwrap(),
/// });
///
/// let server = container.get_resolver().resolve::<Server>().unwrap();
/// assert_eq!(server.config.port, 8080);
/// ```
pub struct SimpleContainer {
    registry: Registry,
}

impl SimpleContainer {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self { registry: Registry::new() }
    }

    /// Number of bindings registered under `key`, across both registries.
    ///
    /// Unlike [`Resolver::is_registered`], this never invokes a factory.
    ///
    /// [`Resolver::is_registered`]: crate::Resolver::is_registered
    pub fn binding_count(&self, key: &Key) -> usize {
        self.registry.instances_of(key).len() + self.registry.factories_of(key).len()
    }

    /// Describes every registered binding without resolving anything.
    ///
    /// Within a key, instance descriptors precede factory descriptors and
    /// each group follows registration order; the order of keys relative to
    /// each other is unspecified.
    pub fn descriptors(&self) -> Vec<BindingDescriptor> {
        let mut out = Vec::new();
        for (key, list) in &self.registry.instances {
            for index in 0..list.len() {
                out.push(BindingDescriptor { key: *key, kind: BindingKind::Instance, index });
            }
        }
        for (key, list) in &self.registry.factories {
            for index in 0..list.len() {
                out.push(BindingDescriptor { key: *key, kind: BindingKind::Factory, index });
            }
        }
        out
    }

    /// Lazy merged lookup: stored instances first, then factory output, each
    /// in registration order. Factories run only as the iterator advances.
    fn lookup<'a>(&'a self, key: &Key) -> impl Iterator<Item = AnyArc> + 'a {
        let instances = self.registry.instances_of(key);
        let factories = self.registry.factories_of(key);
        let view = ContainerResolver { container: self };
        instances
            .iter()
            .cloned()
            .chain(factories.iter().map(move |factory| factory(&view)))
    }
}

impl Default for SimpleContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyContainer for SimpleContainer {
    type Resolver<'a> = ContainerResolver<'a>;

    fn register_instance<T: Any + Send + Sync>(&mut self, value: T) -> &mut Self {
        self.registry.push_instance(key_of_type::<T>(), Arc::new(value));
        self
    }

    fn register_trait_instance<T: ?Sized + 'static + Send + Sync>(
        &mut self,
        value: Arc<T>,
    ) -> &mut Self {
        // Stored as Arc<Arc<dyn T>> so the wide pointer survives erasure.
        self.registry.push_instance(key_of_trait::<T>(), Arc::new(value));
        self
    }

    fn register_factory<T, F>(&mut self, factory: F) -> &mut Self
    where
        T: Any + Send + Sync,
        F: Fn(&dyn ResolverCore) -> T + Send + Sync + 'static,
    {
        self.registry.push_factory(
            key_of_type::<T>(),
            Arc::new(move |r: &dyn ResolverCore| -> AnyArc { Arc::new(factory(r)) }),
        );
        self
    }

    fn register_trait_factory<T, F>(&mut self, factory: F) -> &mut Self
    where
        T: ?Sized + 'static + Send + Sync,
        F: Fn(&dyn ResolverCore) -> Arc<T> + Send + Sync + 'static,
    {
        self.registry.push_factory(
            key_of_trait::<T>(),
            Arc::new(move |r: &dyn ResolverCore| -> AnyArc { Arc::new(factory(r)) }),
        );
        self
    }

    fn register_keyed<F>(&mut self, key: Key, factory: F) -> &mut Self
    where
        F: Fn(&dyn ResolverCore) -> AnyArc + Send + Sync + 'static,
    {
        self.registry.push_factory(key, Arc::new(factory));
        self
    }

    fn get_resolver(&self) -> ContainerResolver<'_> {
        ContainerResolver { container: self }
    }
}

/// Borrowed resolver view over a [`SimpleContainer`].
///
/// The view holds nothing beyond a reference back to its container, so every
/// view obtained from the same container observes the same registries.
/// Factories invoked during resolution receive this view (as
/// `&dyn ResolverCore`) to resolve dependencies of dependencies.
#[derive(Clone, Copy)]
pub struct ContainerResolver<'c> {
    container: &'c SimpleContainer,
}

impl ResolverCore for ContainerResolver<'_> {
    fn resolve_any(&self, key: &Key, _args: Option<&ConstructorArgs>) -> Option<AnyArc> {
        self.container.lookup(key).next()
    }

    fn resolve_all_any<'a>(
        &'a self,
        key: &Key,
        _args: Option<&'a ConstructorArgs>,
    ) -> BindingIter<'a> {
        Box::new(self.container.lookup(key))
    }

    fn supports_constructor_args(&self) -> bool {
        false
    }
}
