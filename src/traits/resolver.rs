//! Resolver traits for dependency lookup.

use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::args::ConstructorArgs;
use crate::key::{key_of_trait, key_of_type, Key};

/// Type-erased shared instance, as stored in the registries.
///
/// Concrete bindings hold `Arc<T>` behind this alias; trait bindings hold
/// `Arc<Arc<dyn T>>` so that the wide pointer survives the erasure.
pub type AnyArc = Arc<dyn Any + Send + Sync>;

/// Lazy, type-erased resolution sequence.
///
/// Advancing the iterator is what evaluates factories: a caller that stops
/// after the first element never runs the factories behind later elements.
pub type BindingIter<'a> = Box<dyn Iterator<Item = AnyArc> + 'a>;

/// Core resolver trait for object-safe dependency lookup.
///
/// This is the surface factories receive (as `&dyn ResolverCore`) and the
/// one adapters over third-party containers must implement. It deals in
/// [`Key`]s and type-erased values; most callers use the generic [`Resolver`]
/// methods layered on top, which every `ResolverCore` gets for free.
///
/// # Implementing an adapter
///
/// An adapter wrapping another container library maps these methods onto the
/// wrapped library's native lookup API. The library's "no binding found"
/// signal must become `None` / an empty iterator here; any other failure
/// (a genuine constructor panic, for instance) must propagate unchanged
/// rather than being swallowed.
pub trait ResolverCore: Send + Sync {
    /// Resolves the first binding registered under `key`, or `None` when the
    /// key has no bindings. Absence is a normal outcome, never an error.
    ///
    /// Implementations that do not support constructor arguments ignore
    /// `args`; callers can check [`supports_constructor_args`] to find out
    /// whether passing them is meaningful.
    ///
    /// [`supports_constructor_args`]: Self::supports_constructor_args
    fn resolve_any(&self, key: &Key, args: Option<&ConstructorArgs>) -> Option<AnyArc>;

    /// Resolves every binding registered under `key` as a lazy sequence.
    ///
    /// Pre-registered instances come first, then factory-produced instances,
    /// each group in registration order. Factories run one at a time as the
    /// iterator is advanced and their output is never cached between calls.
    /// An unregistered key yields an empty sequence.
    fn resolve_all_any<'a>(
        &'a self,
        key: &Key,
        args: Option<&'a ConstructorArgs>,
    ) -> BindingIter<'a>;

    /// Whether this resolver forwards [`ConstructorArgs`] to constructors.
    ///
    /// `false` for [`SimpleContainer`], which accepts arguments for interface
    /// compatibility and silently ignores them.
    ///
    /// [`SimpleContainer`]: crate::SimpleContainer
    fn supports_constructor_args(&self) -> bool;
}

/// High-level resolver interface with generic, type-safe lookup methods.
///
/// Blanket-implemented for every [`ResolverCore`], including trait objects,
/// so a factory receiving `&dyn ResolverCore` can call these methods directly
/// once the trait is in scope.
///
/// # Examples
///
/// ```rust
/// use ioc_facade::{DependencyContainer, Resolver, SimpleContainer};
///
/// struct Greeter {
///     greeting: String,
/// }
///
/// let mut container = SimpleContainer::new();
/// container.register_instance(Greeter { greeting: "hello".to_string() });
///
/// let resolver = container.get_resolver();
/// let greeter = resolver.resolve::<Greeter>().unwrap();
/// assert_eq!(greeter.greeting, "hello");
///
/// // Absence is a value, not an error.
/// assert!(resolver.resolve::<u64>().is_none());
/// ```
pub trait Resolver: ResolverCore {
    /// Resolves the first binding for the concrete type `T`.
    ///
    /// Equivalent to taking the first element of [`resolve_all`]; later
    /// factories are not evaluated. Returns `None` for an unregistered type.
    ///
    /// [`resolve_all`]: Self::resolve_all
    fn resolve<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.resolve_any(&key_of_type::<T>(), None)
            .and_then(|any| any.downcast::<T>().ok())
    }

    /// Like [`resolve`](Self::resolve), passing named constructor arguments.
    fn resolve_with<T: Any + Send + Sync>(&self, args: &ConstructorArgs) -> Option<Arc<T>> {
        self.resolve_any(&key_of_type::<T>(), Some(args))
            .and_then(|any| any.downcast::<T>().ok())
    }

    /// Resolves every binding for the concrete type `T`, lazily.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ioc_facade::{DependencyContainer, Resolver, SimpleContainer};
    ///
    /// let mut container = SimpleContainer::new();
    /// container.register_instance(1u32);
    /// container.register_instance(2u32);
    ///
    /// let resolver = container.get_resolver();
    /// let all: Vec<u32> = resolver.resolve_all::<u32>().map(|v| *v).collect();
    /// assert_eq!(all, vec![1, 2]);
    /// ```
    fn resolve_all<T: Any + Send + Sync>(&self) -> ResolvedIter<'_, T> {
        ResolvedIter::new(self.resolve_all_any(&key_of_type::<T>(), None))
    }

    /// Like [`resolve_all`](Self::resolve_all), passing named constructor
    /// arguments.
    fn resolve_all_with<'a, T: Any + Send + Sync>(
        &'a self,
        args: &'a ConstructorArgs,
    ) -> ResolvedIter<'a, T> {
        ResolvedIter::new(self.resolve_all_any(&key_of_type::<T>(), Some(args)))
    }

    /// Resolves the first binding for the trait object `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ioc_facade::{DependencyContainer, Resolver, SimpleContainer};
    /// use std::sync::Arc;
    ///
    /// trait Logger: Send + Sync {
    ///     fn log(&self, message: &str) -> String;
    /// }
    ///
    /// struct ConsoleLogger;
    /// impl Logger for ConsoleLogger {
    ///     fn log(&self, message: &str) -> String {
    ///         format!("[LOG] {}", message)
    ///     }
    /// }
    ///
    /// let mut container = SimpleContainer::new();
    /// container.register_trait_instance::<dyn Logger>(Arc::new(ConsoleLogger));
    ///
    /// let resolver = container.get_resolver();
    /// let logger = resolver.resolve_trait::<dyn Logger>().unwrap();
    /// assert_eq!(logger.log("ready"), "[LOG] ready");
    /// ```
    fn resolve_trait<T: ?Sized + 'static + Send + Sync>(&self) -> Option<Arc<T>>
    where
        Arc<T>: 'static,
    {
        self.resolve_any(&key_of_trait::<T>(), None)
            .and_then(|any| any.downcast::<Arc<T>>().ok())
            .map(|boxed| (*boxed).clone())
    }

    /// Like [`resolve_trait`](Self::resolve_trait), passing named constructor
    /// arguments.
    fn resolve_trait_with<T: ?Sized + 'static + Send + Sync>(
        &self,
        args: &ConstructorArgs,
    ) -> Option<Arc<T>>
    where
        Arc<T>: 'static,
    {
        self.resolve_any(&key_of_trait::<T>(), Some(args))
            .and_then(|any| any.downcast::<Arc<T>>().ok())
            .map(|boxed| (*boxed).clone())
    }

    /// Resolves every binding for the trait object `T`, lazily.
    fn resolve_all_trait<T: ?Sized + 'static + Send + Sync>(&self) -> ResolvedTraitIter<'_, T>
    where
        Arc<T>: 'static,
    {
        ResolvedTraitIter::new(self.resolve_all_any(&key_of_trait::<T>(), None))
    }

    /// Like [`resolve_all_trait`](Self::resolve_all_trait), passing named
    /// constructor arguments.
    fn resolve_all_trait_with<'a, T: ?Sized + 'static + Send + Sync>(
        &'a self,
        args: &'a ConstructorArgs,
    ) -> ResolvedTraitIter<'a, T>
    where
        Arc<T>: 'static,
    {
        ResolvedTraitIter::new(self.resolve_all_any(&key_of_trait::<T>(), Some(args)))
    }

    /// True iff [`resolve`](Self::resolve) would produce a value for `T`.
    ///
    /// Implemented by performing a resolution and checking for presence, so
    /// the check carries the same cost and side effects as a real lookup:
    /// a key backed only by factories has its first factory invoked.
    fn is_registered<T: Any + Send + Sync>(&self) -> bool {
        self.resolve_any(&key_of_type::<T>(), None).is_some()
    }

    /// True iff [`resolve_trait`](Self::resolve_trait) would produce a value.
    ///
    /// Carries the same factory-invocation cost as
    /// [`is_registered`](Self::is_registered).
    fn is_registered_trait<T: ?Sized + 'static + Send + Sync>(&self) -> bool {
        self.resolve_any(&key_of_trait::<T>(), None).is_some()
    }

    /// True iff the given key has at least one resolvable binding.
    ///
    /// Carries the same factory-invocation cost as
    /// [`is_registered`](Self::is_registered).
    fn is_registered_key(&self, key: &Key) -> bool {
        self.resolve_any(key, None).is_some()
    }
}

impl<R: ResolverCore + ?Sized> Resolver for R {}

/// Lazy typed view over a [`BindingIter`] for concrete bindings.
///
/// Yields each binding as `Arc<T>`; entries of another shape (possible only
/// through a mismatched [`register_keyed`] binding) are skipped.
///
/// [`register_keyed`]: crate::DependencyContainer::register_keyed
pub struct ResolvedIter<'a, T> {
    inner: BindingIter<'a>,
    _marker: PhantomData<fn() -> Arc<T>>,
}

impl<'a, T> ResolvedIter<'a, T> {
    fn new(inner: BindingIter<'a>) -> Self {
        Self { inner, _marker: PhantomData }
    }
}

impl<T: Any + Send + Sync> Iterator for ResolvedIter<'_, T> {
    type Item = Arc<T>;

    fn next(&mut self) -> Option<Self::Item> {
        for any in self.inner.by_ref() {
            if let Ok(value) = any.downcast::<T>() {
                return Some(value);
            }
        }
        None
    }
}

/// Lazy typed view over a [`BindingIter`] for trait-object bindings.
pub struct ResolvedTraitIter<'a, T: ?Sized> {
    inner: BindingIter<'a>,
    _marker: PhantomData<fn() -> Arc<T>>,
}

impl<'a, T: ?Sized> ResolvedTraitIter<'a, T> {
    fn new(inner: BindingIter<'a>) -> Self {
        Self { inner, _marker: PhantomData }
    }
}

impl<T: ?Sized + 'static + Send + Sync> Iterator for ResolvedTraitIter<'_, T>
where
    Arc<T>: 'static,
{
    type Item = Arc<T>;

    fn next(&mut self) -> Option<Self::Item> {
        for any in self.inner.by_ref() {
            if let Ok(boxed) = any.downcast::<Arc<T>>() {
                return Some((*boxed).clone());
            }
        }
        None
    }
}
