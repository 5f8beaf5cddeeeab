//! Trait definitions for the resolution and registration surfaces.

mod container;
mod resolver;

pub use container::DependencyContainer;
pub use resolver::{AnyArc, BindingIter, ResolvedIter, ResolvedTraitIter, Resolver, ResolverCore};
