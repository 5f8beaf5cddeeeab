//! Named constructor arguments for resolution calls.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::traits::AnyArc;

/// An immutable, ordered bag of named construction parameters.
///
/// Resolvers accept a `ConstructorArgs` so that callers can pass values to
/// the constructor of the service being resolved. Whether the arguments have
/// any effect depends on the implementation: adapters over containers that
/// support constructor injection honor them, while [`SimpleContainer`]
/// ignores them entirely. Callers that need the arguments to matter should
/// check [`ResolverCore::supports_constructor_args`] first.
///
/// Entries keep insertion order and are never overwritten; the bag is built
/// once and passed by reference.
///
/// [`SimpleContainer`]: crate::SimpleContainer
/// [`ResolverCore::supports_constructor_args`]: crate::ResolverCore::supports_constructor_args
///
/// # Examples
///
/// ```rust
/// use ioc_facade::ConstructorArgs;
///
/// let args = ConstructorArgs::new()
///     .with("age", 42u32)
///     .with("name", "widget".to_string());
///
/// assert_eq!(args.len(), 2);
/// assert_eq!(*args.get::<u32>("age").unwrap(), 42);
/// assert_eq!(*args.get::<String>("name").unwrap(), "widget");
/// assert!(args.get::<u32>("missing").is_none());
/// // Wrong type for a present name is also absent, not an error.
/// assert!(args.get::<String>("age").is_none());
/// ```
#[derive(Clone, Default)]
pub struct ConstructorArgs {
    entries: Vec<(&'static str, AnyArc)>,
}

impl ConstructorArgs {
    /// Creates an empty argument bag.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Appends a named value, returning the bag for chaining.
    pub fn with<V: Any + Send + Sync>(mut self, name: &'static str, value: V) -> Self {
        self.entries.push((name, Arc::new(value)));
        self
    }

    /// Looks up the first entry with the given name and type.
    ///
    /// Returns `None` when the name is absent or the stored value has a
    /// different type.
    pub fn get<V: Any + Send + Sync>(&self, name: &str) -> Option<Arc<V>> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, v)| v.clone().downcast::<V>().ok())
    }

    /// Iterates entries in insertion order as `(name, type-erased value)`.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &AnyArc)> {
        self.entries.iter().map(|(n, v)| (*n, v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the bag holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ConstructorArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(n, _)| n))
            .finish()
    }
}
