//! Registry of localizable types known to the application.

use std::collections::BTreeMap;

use tracing::warn;

use crate::keys::builder::KeyBuilder;
use crate::keys::descriptor::{
    EnumDescriptor, LocalizedEnum, LocalizedResource, MemberKind, ResourceDescriptor,
};
use crate::types::ResourceKey;

/// Maximum nesting depth followed when listing keys of recursive types.
pub(crate) const MAX_DEPTH: usize = 32;

/// A key discovered from a registered type, with its declared default text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredResource {
    pub key: ResourceKey,
    pub default_text: Option<&'static str>,
}

/// An explicit registry of resource types and enums.
///
/// Built once during startup and handed to whatever needs the full key
/// set (seeding a store, coverage reports). Registering the same type twice
/// is a no-op.
///
/// # Example
///
/// ```
/// use resloc::{LocalizedResource, TypeRegistry};
///
/// #[derive(Default, LocalizedResource)]
/// #[resource(key_prefix = "Nav")]
/// struct Nav {
///     #[resource(default = "Home")]
///     home: String,
/// }
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Nav>();
/// registry.register::<Nav>();
///
/// let discovered = registry.discovered();
/// assert_eq!(discovered.len(), 1);
/// assert_eq!(discovered[0].key.as_str(), "Nav.home");
/// assert_eq!(discovered[0].default_text, Some("Home"));
/// ```
#[derive(Debug, Default)]
pub struct TypeRegistry {
    resources: BTreeMap<String, &'static ResourceDescriptor>,
    enums: BTreeMap<String, &'static EnumDescriptor>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource type. Returns false if it was already registered.
    pub fn register<T: LocalizedResource>(&mut self) -> bool {
        self.register_descriptor(T::descriptor())
    }

    /// Register a resource descriptor directly.
    pub fn register_descriptor(&mut self, descriptor: &'static ResourceDescriptor) -> bool {
        let id = qualified_name(descriptor.module_path, descriptor.type_name);
        if self.resources.contains_key(&id) {
            return false;
        }
        self.resources.insert(id, descriptor);
        true
    }

    /// Register a localizable enum. Returns false if it was already registered.
    pub fn register_enum<E: LocalizedEnum>(&mut self) -> bool {
        let descriptor = E::descriptor();
        let id = qualified_name(descriptor.module_path, descriptor.type_name);
        if self.enums.contains_key(&id) {
            return false;
        }
        self.enums.insert(id, descriptor);
        true
    }

    /// Returns true if a type with this module path and name is registered.
    pub fn contains(&self, module_path: &str, type_name: &str) -> bool {
        let id = qualified_name(module_path, type_name);
        self.resources.contains_key(&id) || self.enums.contains_key(&id)
    }

    /// Registered resource descriptors, ordered by qualified name.
    pub fn resources(&self) -> impl Iterator<Item = &'static ResourceDescriptor> + '_ {
        self.resources.values().copied()
    }

    /// Every key produced by the registered types, in registration-name order.
    ///
    /// Collection members contribute their element keys once. Keys that
    /// fail to build are skipped with a warning.
    pub fn discovered(&self) -> Vec<DiscoveredResource> {
        let mut found = Vec::new();
        for descriptor in self.resources.values().copied() {
            collect_resource(descriptor, descriptor.owner_path(), 0, &mut found);
        }
        for descriptor in self.enums.values() {
            let owner_path = descriptor.owner_path();
            for variant in descriptor.variants {
                push_key(&owner_path, variant.segment, variant.default_text, &mut found);
            }
        }
        found
    }
}

fn qualified_name(module_path: &str, type_name: &str) -> String {
    format!("{module_path}::{type_name}")
}

fn collect_resource(
    descriptor: &'static ResourceDescriptor,
    owner_path: Vec<&'static str>,
    depth: usize,
    found: &mut Vec<DiscoveredResource>,
) {
    if depth > MAX_DEPTH {
        warn!(
            type_name = descriptor.type_name,
            "resource nesting exceeds maximum depth, not descending further"
        );
        return;
    }

    for member in descriptor.members.iter().filter(|m| !m.hidden) {
        match member.kind {
            MemberKind::Scalar => {
                push_key(&owner_path, member.segment, member.default_text, found);
            }
            MemberKind::Nested(child) | MemberKind::Collection(child) => {
                let mut child_path = owner_path.clone();
                child_path.push(member.segment);
                collect_resource(child(), child_path, depth + 1, found);
            }
        }
    }

    for member in descriptor.static_members {
        push_key(&owner_path, member.segment, member.default_text, found);
    }
}

fn push_key(
    owner_path: &[&str],
    segment: &str,
    default_text: Option<&'static str>,
    found: &mut Vec<DiscoveredResource>,
) {
    match KeyBuilder::build_key(owner_path, segment) {
        Ok(key) => found.push(DiscoveredResource { key, default_text }),
        Err(error) => warn!(%error, segment, "skipping member with an invalid key"),
    }
}
