//! Binding storage for the minimal container.

use crate::key::Key;
use crate::traits::{AnyArc, ResolverCore};
use std::sync::Arc;

#[cfg(feature = "ahash")]
pub(crate) type KeyMap<V> = ahash::AHashMap<Key, V>;
#[cfg(not(feature = "ahash"))]
pub(crate) type KeyMap<V> = std::collections::HashMap<Key, V>;

// Most keys carry one or two bindings; keep them inline when smallvec is on.
#[cfg(feature = "smallvec")]
pub(crate) type BindingList<T> = smallvec::SmallVec<[T; 2]>;
#[cfg(not(feature = "smallvec"))]
pub(crate) type BindingList<T> = Vec<T>;

/// Stored factory: type-erased, resolver-aware construction closure.
pub(crate) type FactoryFn = Arc<dyn Fn(&dyn ResolverCore) -> AnyArc + Send + Sync>;

/// The two parallel ordered multi-maps backing [`SimpleContainer`].
///
/// Both maps are append-only; per-key insertion order is the resolution
/// priority order, and instances always rank ahead of factories at lookup.
///
/// [`SimpleContainer`]: crate::SimpleContainer
pub(crate) struct Registry {
    pub(crate) instances: KeyMap<BindingList<AnyArc>>,
    pub(crate) factories: KeyMap<BindingList<FactoryFn>>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self {
            instances: KeyMap::default(),
            factories: KeyMap::default(),
        }
    }

    pub(crate) fn push_instance(&mut self, key: Key, value: AnyArc) {
        self.instances.entry(key).or_default().push(value);
    }

    pub(crate) fn push_factory(&mut self, key: Key, factory: FactoryFn) {
        self.factories.entry(key).or_default().push(factory);
    }

    pub(crate) fn instances_of(&self, key: &Key) -> &[AnyArc] {
        self.instances.get(key).map(|list| &list[..]).unwrap_or(&[])
    }

    pub(crate) fn factories_of(&self, key: &Key) -> &[FactoryFn] {
        self.factories.get(key).map(|list| &list[..]).unwrap_or(&[])
    }
}
