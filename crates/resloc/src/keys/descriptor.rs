//! Static descriptor tables for localizable types.
//!
//! `#[derive(LocalizedResource)]` and `#[derive(LocalizedEnum)]` generate one
//! table per type. The key builder and the graph translator only ever read
//! these tables; nothing is discovered by runtime introspection.

use std::collections::VecDeque;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::iter::once;

use resloc_keys::{SEGMENT_SEPARATOR, module_segments, unraw};

/// How a member participates in the resource graph.
#[derive(Clone, Copy)]
pub enum MemberKind {
    /// A text leaf: produces exactly one key.
    Scalar,
    /// A nested resource: contributes a key segment and recurses.
    Nested(fn() -> &'static ResourceDescriptor),
    /// A sequence of nested resources sharing one key prefix.
    Collection(fn() -> &'static ResourceDescriptor),
}

impl MemberKind {
    /// The descriptor of the nested type, for nested and collection members.
    pub fn child(&self) -> Option<&'static ResourceDescriptor> {
        match self {
            MemberKind::Scalar => None,
            MemberKind::Nested(child) | MemberKind::Collection(child) => Some(child()),
        }
    }
}

impl Debug for MemberKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            MemberKind::Scalar => f.write_str("Scalar"),
            MemberKind::Nested(child) => write!(f, "Nested({})", child().type_name),
            MemberKind::Collection(child) => write!(f, "Collection({})", child().type_name),
        }
    }
}

/// One declared member of a resource type.
#[derive(Debug, Clone, Copy)]
pub struct MemberDescriptor {
    /// The Rust field name.
    pub name: &'static str,
    /// The key segment this member contributes (the field name unless renamed).
    pub segment: &'static str,
    pub kind: MemberKind,
    /// Excluded from localization: never visited, never keyed.
    pub hidden: bool,
    /// Untranslated default text, if declared.
    pub default_text: Option<&'static str>,
}

/// A read-only informational member with no storage on the instance.
///
/// Included when a whole type is translated to a dictionary, never
/// written back during reconstruction.
#[derive(Debug, Clone, Copy)]
pub struct StaticMember {
    pub segment: &'static str,
    pub default_text: Option<&'static str>,
}

/// The descriptor table of one localizable struct.
#[derive(Debug)]
pub struct ResourceDescriptor {
    pub type_name: &'static str,
    /// `module_path!()` of the declaring module.
    pub module_path: &'static str,
    /// Replaces the module path and type name in keys when set.
    pub key_prefix: Option<&'static str>,
    pub members: &'static [MemberDescriptor],
    pub static_members: &'static [StaticMember],
}

impl ResourceDescriptor {
    /// The owner path every key of this type starts with.
    pub fn owner_path(&self) -> Vec<&'static str> {
        owner_path(self.key_prefix, self.module_path, self.type_name)
    }

    /// Find a member by Rust field name, or by key segment when no field has
    /// that name.
    pub fn member(&self, name: &str) -> Option<&'static MemberDescriptor> {
        let name = unraw(name);
        self.members
            .iter()
            .find(|m| m.name == name)
            .or_else(|| self.members.iter().find(|m| m.segment == name))
    }

    /// Find a static member by key segment.
    pub fn static_member(&self, name: &str) -> Option<&'static StaticMember> {
        self.static_members.iter().find(|m| m.segment == name)
    }

    /// Names a reference could have meant, for "did you mean" suggestions.
    pub(crate) fn candidate_names(&self) -> Vec<String> {
        self.members
            .iter()
            .filter(|m| !m.hidden)
            .map(|m| m.name.to_string())
            .chain(self.static_members.iter().map(|m| m.segment.to_string()))
            .collect()
    }
}

/// One declared value of a localizable enum.
#[derive(Debug, Clone, Copy)]
pub struct EnumVariant {
    /// The Rust variant name.
    pub name: &'static str,
    /// The key segment (the variant name unless renamed).
    pub segment: &'static str,
    pub default_text: Option<&'static str>,
}

/// The descriptor table of one localizable enum.
#[derive(Debug)]
pub struct EnumDescriptor {
    pub type_name: &'static str,
    pub module_path: &'static str,
    pub key_prefix: Option<&'static str>,
    pub variants: &'static [EnumVariant],
}

impl EnumDescriptor {
    /// The owner path every key of this enum starts with.
    pub fn owner_path(&self) -> Vec<&'static str> {
        owner_path(self.key_prefix, self.module_path, self.type_name)
    }
}

fn owner_path(
    key_prefix: Option<&'static str>,
    module_path: &'static str,
    type_name: &'static str,
) -> Vec<&'static str> {
    match key_prefix {
        Some(prefix) => prefix.split(SEGMENT_SEPARATOR).collect(),
        None => module_segments(module_path)
            .chain(once(type_name))
            .collect(),
    }
}

/// A struct whose fields are localizable text.
///
/// Implement with `#[derive(LocalizedResource)]`:
///
/// ```
/// use resloc::LocalizedResource;
///
/// #[derive(Default, LocalizedResource)]
/// #[resource(key_prefix = "Pages.Home")]
/// struct HomePage {
///     #[resource(default = "Welcome")]
///     title: String,
///     #[resource(hidden)]
///     visits: u32,
/// }
///
/// let descriptor = HomePage::descriptor();
/// assert_eq!(descriptor.owner_path(), vec!["Pages", "Home"]);
/// assert_eq!(descriptor.members.len(), 2);
/// ```
pub trait LocalizedResource {
    /// The static descriptor table of this type.
    fn descriptor() -> &'static ResourceDescriptor
    where
        Self: Sized;

    /// Visit every non-hidden member with mutable access to its storage.
    fn accept(&mut self, visitor: &mut dyn MemberVisitor);
}

/// Receives the members of a resource instance, in declaration order.
pub trait MemberVisitor {
    /// A text leaf.
    fn scalar(&mut self, member: &'static MemberDescriptor, slot: &mut String);

    /// A nested resource, or one element of a collection member.
    fn nested(&mut self, member: &'static MemberDescriptor, node: &mut dyn LocalizedResource);
}

/// A container of nested resources usable as a collection member.
pub trait ResourceCollection {
    type Element: LocalizedResource;

    /// Call `f` once per element, in order.
    fn for_each_element(&mut self, f: &mut dyn FnMut(&mut Self::Element));
}

impl<T: LocalizedResource> ResourceCollection for Vec<T> {
    type Element = T;

    fn for_each_element(&mut self, f: &mut dyn FnMut(&mut T)) {
        for element in self.iter_mut() {
            f(element);
        }
    }
}

impl<T: LocalizedResource> ResourceCollection for VecDeque<T> {
    type Element = T;

    fn for_each_element(&mut self, f: &mut dyn FnMut(&mut T)) {
        for element in self.iter_mut() {
            f(element);
        }
    }
}

impl<T: LocalizedResource, const N: usize> ResourceCollection for [T; N] {
    type Element = T;

    fn for_each_element(&mut self, f: &mut dyn FnMut(&mut T)) {
        for element in self.iter_mut() {
            f(element);
        }
    }
}

impl<T: LocalizedResource> ResourceCollection for Option<T> {
    type Element = T;

    fn for_each_element(&mut self, f: &mut dyn FnMut(&mut T)) {
        for element in self.iter_mut() {
            f(element);
        }
    }
}

/// An enum whose values are localizable text.
///
/// Implement with `#[derive(LocalizedEnum)]`. The key of a value is the
/// enum's owner path plus the variant name, never its discriminant.
pub trait LocalizedEnum {
    /// The static descriptor table of this enum.
    fn descriptor() -> &'static EnumDescriptor
    where
        Self: Sized;

    /// The descriptor entry for this value.
    fn variant(&self) -> &'static EnumVariant;
}
