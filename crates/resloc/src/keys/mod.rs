//! Resource keys: descriptor tables, key construction and member references.

mod builder;
mod descriptor;
mod reference;
mod registry;

pub use builder::{KeyBuilder, compute_suggestions};
pub use descriptor::{
    EnumDescriptor, EnumVariant, LocalizedEnum, LocalizedResource, MemberDescriptor, MemberKind,
    MemberVisitor, ResourceCollection, ResourceDescriptor, StaticMember,
};
pub use reference::MemberRef;
pub use registry::{DiscoveredResource, TypeRegistry};

pub(crate) use registry::MAX_DEPTH;
