//! Fallback chain registry and its append-only builder.

use std::collections::BTreeMap;

use crate::types::LanguageTag;

/// Configured fallback chains: one default chain and scoped chains keyed by
/// the exact requested language that triggers them.
///
/// Built once with [`FallbackChainRegistry::builder`] and frozen afterwards;
/// there is no mutation API, so a registry can be shared across threads
/// without locking.
///
/// # Example
///
/// ```
/// use resloc::{FallbackChainRegistry, LanguageTag};
///
/// let tag = |s: &str| LanguageTag::parse(s).unwrap();
///
/// let mut builder = FallbackChainRegistry::builder();
/// builder.try_first(tag("sv")).then(tag("no")).then(tag("en"));
/// builder.when(tag("fr-BE")).try_first(tag("fr")).then(tag("en"));
/// let registry = builder.build();
///
/// assert_eq!(registry.chain_for(&tag("de")), &[tag("sv"), tag("no"), tag("en")]);
/// assert_eq!(registry.chain_for(&tag("fr-BE")), &[tag("fr"), tag("en")]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FallbackChainRegistry {
    default_chain: Vec<LanguageTag>,
    scoped: BTreeMap<LanguageTag, Vec<LanguageTag>>,
}

impl FallbackChainRegistry {
    /// Start configuring a registry.
    pub fn builder() -> FallbackChainRegistryBuilder {
        FallbackChainRegistryBuilder::default()
    }

    /// A registry with no chains at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The chain to probe for `requested`.
    ///
    /// The scoped chain when `requested` exactly matches a trigger, else the
    /// default chain (which may be empty).
    pub fn chain_for(&self, requested: &LanguageTag) -> &[LanguageTag] {
        self.scoped
            .get(requested)
            .map_or(self.default_chain.as_slice(), Vec::as_slice)
    }

    /// The scoped chain triggered by exactly `requested`, if one exists.
    pub fn scoped_chain(&self, requested: &LanguageTag) -> Option<&[LanguageTag]> {
        self.scoped.get(requested).map(Vec::as_slice)
    }

    /// The default chain.
    pub fn default_chain(&self) -> &[LanguageTag] {
        &self.default_chain
    }

    /// All scoped chains, ordered by trigger tag.
    pub fn scoped_chains(&self) -> impl Iterator<Item = (&LanguageTag, &[LanguageTag])> {
        self.scoped
            .iter()
            .map(|(trigger, chain)| (trigger, chain.as_slice()))
    }

    /// Returns true if no chain is configured.
    pub fn is_empty(&self) -> bool {
        self.default_chain.is_empty() && self.scoped.is_empty()
    }
}

/// Mutable configuration phase of a [`FallbackChainRegistry`].
#[derive(Debug, Default)]
pub struct FallbackChainRegistryBuilder {
    default_chain: Vec<LanguageTag>,
    scoped: BTreeMap<LanguageTag, Vec<LanguageTag>>,
}

impl FallbackChainRegistryBuilder {
    /// Declare the default chain, starting with `language`.
    ///
    /// Declaring the default chain again replaces the earlier declaration.
    pub fn try_first(&mut self, language: LanguageTag) -> ChainBuilder<'_> {
        self.default_chain.clear();
        ChainBuilder::start(&mut self.default_chain, language)
    }

    /// Declare a chain used only when the requested language is exactly `trigger`.
    pub fn when(&mut self, trigger: LanguageTag) -> ScopedChainBuilder<'_> {
        ScopedChainBuilder {
            scoped: &mut self.scoped,
            trigger,
        }
    }

    /// Freeze the configuration.
    pub fn build(self) -> FallbackChainRegistry {
        FallbackChainRegistry {
            default_chain: self.default_chain,
            scoped: self.scoped,
        }
    }
}

/// Pending scoped chain declaration returned by [`FallbackChainRegistryBuilder::when`].
#[derive(Debug)]
pub struct ScopedChainBuilder<'a> {
    scoped: &'a mut BTreeMap<LanguageTag, Vec<LanguageTag>>,
    trigger: LanguageTag,
}

impl<'a> ScopedChainBuilder<'a> {
    /// Start the scoped chain with `language`, replacing any earlier chain
    /// for the same trigger.
    pub fn try_first(self, language: LanguageTag) -> ChainBuilder<'a> {
        let chain = self.scoped.entry(self.trigger).or_default();
        chain.clear();
        ChainBuilder::start(chain, language)
    }
}

/// Appends languages to a chain being declared.
#[derive(Debug)]
pub struct ChainBuilder<'a> {
    chain: &'a mut Vec<LanguageTag>,
}

impl<'a> ChainBuilder<'a> {
    fn start(chain: &'a mut Vec<LanguageTag>, language: LanguageTag) -> Self {
        let mut builder = Self { chain };
        builder.push(language);
        builder
    }

    /// Append the next language to probe.
    pub fn then(mut self, language: LanguageTag) -> Self {
        self.push(language);
        self
    }

    /// Languages already present are ignored; a chain lists each language once.
    fn push(&mut self, language: LanguageTag) {
        if !self.chain.contains(&language) {
            self.chain.push(language);
        }
    }
}
