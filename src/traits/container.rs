//! Container registration trait.

use std::any::Any;
use std::sync::Arc;

use crate::key::Key;
use crate::traits::resolver::{AnyArc, Resolver, ResolverCore};

/// Registration surface of a dependency container.
///
/// A container owns two append-only registries: pre-constructed instances and
/// factories, both keyed by [`Key`] and insertion-ordered per key. Nothing is
/// ever removed or replaced; registering a key twice adds a second binding.
/// Every registration method returns `&mut Self` so calls can be chained.
///
/// Registration takes `&mut self` while resolution goes through a borrowed
/// [`Resolver`] view, so the borrow checker serializes the two phases; the
/// container itself adds no synchronization.
///
/// Adapters over third-party container libraries implement the primitive
/// methods by forwarding to the wrapped library's registration API; the
/// `register_singleton`/`register_type` family has default implementations in
/// terms of those primitives.
///
/// # Examples
///
/// ```rust
/// use ioc_facade::{DependencyContainer, Resolver, SimpleContainer};
///
/// struct Widget {
///     value: u32,
/// }
///
/// let mut container = SimpleContainer::new();
/// container
///     .register_instance("hello".to_string())
///     .register_factory(|_| Widget { value: 42 });
///
/// let resolver = container.get_resolver();
/// assert_eq!(*resolver.resolve::<String>().unwrap(), "hello");
/// assert_eq!(resolver.resolve::<Widget>().unwrap().value, 42);
/// ```
pub trait DependencyContainer {
    /// Read-only resolver view over this container's registries.
    ///
    /// All views obtained from the same container observe the same underlying
    /// state.
    type Resolver<'a>: Resolver
    where
        Self: 'a;

    /// Appends a pre-constructed instance under the key of `T`.
    fn register_instance<T: Any + Send + Sync>(&mut self, value: T) -> &mut Self;

    /// Appends a pre-constructed instance under the trait key of `T`.
    ///
    /// This is how a concrete value is registered under an abstraction: the
    /// caller coerces to `Arc<dyn Trait>` and the binding is resolvable via
    /// [`Resolver::resolve_trait`].
    fn register_trait_instance<T: ?Sized + 'static + Send + Sync>(
        &mut self,
        value: Arc<T>,
    ) -> &mut Self;

    /// Eagerly constructs one instance and appends it under the key of `T`.
    ///
    /// The closure runs exactly once, at registration time; a panic inside it
    /// propagates to the caller. Every later resolution observes the same
    /// stored instance.
    fn register_singleton<T, F>(&mut self, construct: F) -> &mut Self
    where
        T: Any + Send + Sync,
        F: FnOnce() -> T,
    {
        self.register_instance(construct())
    }

    /// Eagerly constructs one instance and appends it under the trait key of
    /// `T`.
    fn register_trait_singleton<T, F>(&mut self, construct: F) -> &mut Self
    where
        T: ?Sized + 'static + Send + Sync,
        F: FnOnce() -> Arc<T>,
    {
        self.register_trait_instance(construct())
    }

    /// Appends a factory under the key of `T` that ignores the resolver.
    ///
    /// The closure runs on every resolution of the binding; its output is
    /// never cached. A binding registered this way is re-instantiated each
    /// time unless the caller stores the resolved instance itself.
    fn register_type<T, F>(&mut self, construct: F) -> &mut Self
    where
        T: Any + Send + Sync,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.register_factory::<T, _>(move |_| construct())
    }

    /// Appends a resolver-ignoring factory under the trait key of `T`.
    ///
    /// Resolving `T` afterwards yields an instance whose runtime type is
    /// whatever concrete type the closure produces.
    fn register_trait_type<T, F>(&mut self, construct: F) -> &mut Self
    where
        T: ?Sized + 'static + Send + Sync,
        F: Fn() -> Arc<T> + Send + Sync + 'static,
    {
        self.register_trait_factory::<T, _>(move |_| construct())
    }

    /// Appends a factory under the key of `T`.
    ///
    /// The factory receives the container's resolver so it can look up
    /// dependencies of the value it constructs. It runs lazily, on every
    /// resolution of the binding, on the calling thread; panics propagate
    /// unchanged.
    fn register_factory<T, F>(&mut self, factory: F) -> &mut Self
    where
        T: Any + Send + Sync,
        F: Fn(&dyn ResolverCore) -> T + Send + Sync + 'static;

    /// Appends a factory under the trait key of `T`.
    fn register_trait_factory<T, F>(&mut self, factory: F) -> &mut Self
    where
        T: ?Sized + 'static + Send + Sync,
        F: Fn(&dyn ResolverCore) -> Arc<T> + Send + Sync + 'static;

    /// Appends a type-erased factory under an explicit runtime key.
    ///
    /// This is the runtime-handle counterpart of [`register_type`]: the
    /// caller supplies both the key and a construction closure, since a bare
    /// key carries no way to construct a value. The closure must produce a
    /// value of the shape the key's typed accessors expect (`Arc<T>` for a
    /// [`Key::Type`], `Arc<Arc<dyn T>>` for a [`Key::Trait`]); mismatched
    /// output is skipped by the typed resolution surface.
    ///
    /// [`register_type`]: Self::register_type
    fn register_keyed<F>(&mut self, key: Key, factory: F) -> &mut Self
    where
        F: Fn(&dyn ResolverCore) -> AnyArc + Send + Sync + 'static;

    /// Returns a resolver view bound to this container's registries.
    fn get_resolver(&self) -> Self::Resolver<'_>;
}
