//! Resource graph translation: whole types to dictionaries, and instances
//! filled in place.
//!
//! Both walks go depth-first over the descriptor tables. Every leaf gets its
//! key from [`KeyBuilder::build_key`], so keys match the ones produced for
//! member references. A leaf that fails (bad key, no translation) never
//! aborts the walk; it is resolved by the [`MissingTranslationPolicy`].

use std::collections::BTreeMap;

use tracing::{trace, warn};

use crate::config::{ConfigurationContext, MissingTranslationPolicy};
use crate::diagnostics::Diagnostic;
use crate::format::MessageFormatter;
use crate::keys::{
    KeyBuilder, LocalizedResource, MAX_DEPTH, MemberDescriptor, MemberKind, MemberVisitor,
    ResourceDescriptor,
};
use crate::store::{TranslationLookup, TranslationStore};
use crate::types::{LanguageTag, ResourceKey};

/// Translates resource types and instances for one configuration and store.
#[derive(Clone, Copy)]
pub struct ResourceGraphTranslator<'a> {
    config: &'a ConfigurationContext,
    store: Option<&'a dyn TranslationStore>,
}

impl<'a> ResourceGraphTranslator<'a> {
    pub fn new(config: &'a ConfigurationContext, store: Option<&'a dyn TranslationStore>) -> Self {
        Self { config, store }
    }

    /// Translate every leaf of a resource type.
    ///
    /// Returns member path (key segments below the owner, joined with `.`)
    /// to text. Static members are included. Collection members contribute
    /// their element type's members once.
    pub fn translate_type(
        &self,
        descriptor: &'static ResourceDescriptor,
        language: &LanguageTag,
    ) -> BTreeMap<String, String> {
        let leaves = self.leaves(language);
        let mut dictionary = BTreeMap::new();
        let mut walk = TypeWalk {
            leaves: &leaves,
            owner_path: descriptor.owner_path(),
            member_path: Vec::new(),
            dictionary: &mut dictionary,
        };
        walk.descriptor(descriptor);
        dictionary
    }

    /// Fill the localizable fields of `target` in place.
    ///
    /// Fields without a translation are set according to the missing
    /// translation policy; omitted fields keep their current value. Static
    /// members are not written.
    pub fn translate_instance<T: LocalizedResource>(&self, target: &mut T, language: &LanguageTag) {
        self.translate_node(target, T::descriptor(), language);
    }

    /// Fill `target`, whose descriptor is given explicitly.
    pub fn translate_node(
        &self,
        target: &mut dyn LocalizedResource,
        descriptor: &'static ResourceDescriptor,
        language: &LanguageTag,
    ) {
        let leaves = self.leaves(language);
        let mut walk = InstanceWalk {
            leaves: &leaves,
            owner_path: descriptor.owner_path(),
            depth: 0,
        };
        target.accept(&mut walk);
    }

    /// Build a fresh instance of `T` translated into `language`.
    pub fn translate<T: LocalizedResource + Default>(&self, language: &LanguageTag) -> T {
        let mut target = T::default();
        self.translate_instance(&mut target, language);
        target
    }

    fn leaves(&self, language: &LanguageTag) -> LeafResolver<'a> {
        if self.store.is_none() {
            self.config.diagnostics().emit(&Diagnostic::MissingStore);
        }
        LeafResolver {
            config: self.config,
            lookup: self.store.map(TranslationLookup::new),
            probe_order: self.config.probe_order(language),
            formatter: MessageFormatter::new(self.config.diagnostics().clone()),
        }
    }
}

/// Resolves single leaves against the probe order of one walk.
struct LeafResolver<'a> {
    config: &'a ConfigurationContext,
    lookup: Option<TranslationLookup<'a>>,
    probe_order: Vec<LanguageTag>,
    formatter: MessageFormatter,
}

impl LeafResolver<'_> {
    fn resolve(&self, owner_path: &[&str], segment: &str, default_text: Option<&str>) -> Option<String> {
        let key = match KeyBuilder::build_key(owner_path, segment) {
            Ok(key) => key,
            Err(error) => {
                warn!(%error, segment, "leaf has an invalid key");
                return self.unresolved(default_text);
            }
        };

        if let Some(text) = self.lookup(&key) {
            return Some(self.formatter.format(&text, &[]));
        }

        self.config
            .diagnostics()
            .emit(&Diagnostic::MissingTranslation {
                key: key.clone(),
                probed: self.probe_order.clone(),
            });

        self.unresolved(default_text)
    }

    /// Text for a leaf with no usable translation.
    fn unresolved(&self, default_text: Option<&str>) -> Option<String> {
        match self.config.missing_translation_policy() {
            MissingTranslationPolicy::DefaultText => default_text.map(ToString::to_string),
            MissingTranslationPolicy::Omit => None,
        }
    }

    fn lookup(&self, key: &ResourceKey) -> Option<String> {
        self.lookup
            .as_ref()
            .and_then(|lookup| lookup.lookup(key, &self.probe_order))
    }

    fn depth_exceeded(&self, owner_path: &[&str], depth: usize) -> bool {
        if depth < MAX_DEPTH {
            return false;
        }
        self.config.diagnostics().emit(&Diagnostic::DepthLimit {
            path: owner_path.join("."),
            limit: MAX_DEPTH,
        });
        true
    }
}

// =========================================================================
// Type walk
// =========================================================================

struct TypeWalk<'w, 'a> {
    leaves: &'w LeafResolver<'a>,
    owner_path: Vec<&'static str>,
    member_path: Vec<&'static str>,
    dictionary: &'w mut BTreeMap<String, String>,
}

impl TypeWalk<'_, '_> {
    fn descriptor(&mut self, descriptor: &'static ResourceDescriptor) {
        for member in descriptor.members.iter().filter(|m| !m.hidden) {
            match member.kind {
                MemberKind::Scalar => self.leaf(member.segment, member.default_text),
                MemberKind::Nested(child) | MemberKind::Collection(child) => {
                    let depth = self.member_path.len() + 1;
                    if !self.leaves.depth_exceeded(&self.owner_path, depth) {
                        self.owner_path.push(member.segment);
                        self.member_path.push(member.segment);
                        self.descriptor(child());
                        self.member_path.pop();
                        self.owner_path.pop();
                    }
                }
            }
        }

        for member in descriptor.static_members {
            self.leaf(member.segment, member.default_text);
        }
    }

    fn leaf(&mut self, segment: &'static str, default_text: Option<&str>) {
        let Some(text) = self.leaves.resolve(&self.owner_path, segment, default_text) else {
            return;
        };
        let mut path = self.member_path.clone();
        path.push(segment);
        self.dictionary.insert(path.join("."), text);
    }
}

// =========================================================================
// Instance walk
// =========================================================================

struct InstanceWalk<'w, 'a> {
    leaves: &'w LeafResolver<'a>,
    owner_path: Vec<&'static str>,
    depth: usize,
}

impl MemberVisitor for InstanceWalk<'_, '_> {
    fn scalar(&mut self, member: &'static MemberDescriptor, slot: &mut String) {
        if member.hidden {
            return;
        }
        if let Some(text) = self
            .leaves
            .resolve(&self.owner_path, member.segment, member.default_text)
        {
            trace!(member = member.name, "leaf translated");
            *slot = text;
        }
    }

    fn nested(&mut self, member: &'static MemberDescriptor, node: &mut dyn LocalizedResource) {
        if member.hidden || self.leaves.depth_exceeded(&self.owner_path, self.depth + 1) {
            return;
        }
        self.owner_path.push(member.segment);
        self.depth += 1;
        node.accept(self);
        self.depth -= 1;
        self.owner_path.pop();
    }
}
