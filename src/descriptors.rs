//! Binding descriptors for introspection and diagnostics.

use crate::key::Key;

/// Which registry a binding lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// A pre-constructed instance, resolved ahead of any factory.
    Instance,
    /// A factory, invoked anew on every resolution.
    Factory,
}

/// Metadata about one registered binding.
///
/// Descriptors are produced by [`SimpleContainer::descriptors`] and describe
/// the registry contents without resolving anything: unlike
/// [`Resolver::is_registered`], inspecting descriptors never invokes a
/// factory.
///
/// [`SimpleContainer::descriptors`]: crate::SimpleContainer::descriptors
/// [`Resolver::is_registered`]: crate::Resolver::is_registered
///
/// # Examples
///
/// ```rust
/// use ioc_facade::{BindingKind, DependencyContainer, SimpleContainer};
///
/// struct Widget;
///
/// let mut container = SimpleContainer::new();
/// container.register_instance(7u32);
/// container.register_factory(|_| Widget);
///
/// let descriptors = container.descriptors();
/// assert_eq!(descriptors.len(), 2);
///
/// let widget = descriptors
///     .iter()
///     .find(|d| d.type_name().contains("Widget"))
///     .unwrap();
/// assert_eq!(widget.kind, BindingKind::Factory);
/// ```
#[derive(Debug, Clone)]
pub struct BindingDescriptor {
    /// The binding key.
    pub key: Key,
    /// Which registry holds the binding.
    pub kind: BindingKind,
    /// Position within the key's registration order for its registry.
    pub index: usize,
}

impl BindingDescriptor {
    /// The type or trait name behind the key.
    pub fn type_name(&self) -> &'static str {
        self.key.display_name()
    }
}
