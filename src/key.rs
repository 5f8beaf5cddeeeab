//! Binding key types for the container registries.

use std::any::TypeId;

/// Key for binding storage and lookup.
///
/// Keys identify the abstraction a caller asks for. Concrete types and trait
/// objects live in separate namespaces because they are stored differently:
/// a concrete binding holds `Arc<T>` behind the type-erased slot, while a
/// trait binding holds `Arc<Arc<dyn T>>`. Keeping the namespaces apart means
/// a lookup can never downcast a binding of the wrong shape.
///
/// # Examples
///
/// ```rust
/// use ioc_facade::{key_of_trait, key_of_type};
///
/// trait Logger: Send + Sync {}
///
/// let string_key = key_of_type::<String>();
/// let logger_key = key_of_trait::<dyn Logger>();
///
/// assert_eq!(string_key, key_of_type::<String>());
/// assert_ne!(string_key, key_of_type::<u32>());
/// assert_ne!(string_key, logger_key);
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Key {
    /// Concrete type key with TypeId and type name for diagnostics.
    Type(TypeId, &'static str),
    /// Trait object key, identified by the trait's fully qualified name.
    Trait(&'static str),
}

impl Key {
    /// Get the type or trait name for display.
    ///
    /// This is the `std::any::type_name` result, intended for debugging
    /// output rather than programmatic comparison.
    pub fn display_name(&self) -> &'static str {
        match self {
            Key::Type(_, name) => name,
            Key::Trait(name) => name,
        }
    }
}

// Equality compares the stable handle only; the type name rides along for
// diagnostics and is ignored for `Type` keys.
impl PartialEq for Key {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Key::Type(a, _), Key::Type(b, _)) => a == b,
            (Key::Trait(a), Key::Trait(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Key {}

impl std::hash::Hash for Key {
    #[inline(always)]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            Key::Type(id, _) => {
                0u8.hash(state);
                id.hash(state);
            }
            Key::Trait(name) => {
                1u8.hash(state);
                name.hash(state);
            }
        }
    }
}

/// Builds the binding key for a concrete type.
#[inline(always)]
pub fn key_of_type<T: 'static>() -> Key {
    Key::Type(TypeId::of::<T>(), std::any::type_name::<T>())
}

/// Builds the binding key for a trait object.
#[inline(always)]
pub fn key_of_trait<T: ?Sized + 'static>() -> Key {
    Key::Trait(std::any::type_name::<T>())
}
