//! Provider configuration.

use std::collections::BTreeSet;

use bon::Builder;

use crate::diagnostics::DiagnosticHook;
use crate::fallback::{FallbackChainRegistry, FallbackResolver};
use crate::keys::KeyBuilder;
use crate::types::LanguageTag;

/// What a graph walk does with a leaf that has no translation in any probed
/// language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingTranslationPolicy {
    /// Use the member's declared default text; omit the leaf if it has none.
    #[default]
    DefaultText,

    /// Always omit the leaf.
    Omit,
}

/// Immutable configuration shared by every lookup.
///
/// Built once at startup and shared read-only afterwards.
///
/// # Example
///
/// ```
/// use resloc::{ConfigurationContext, FallbackChainRegistry, LanguageTag};
///
/// let tag = |s: &str| LanguageTag::parse(s).unwrap();
/// let mut chains = FallbackChainRegistry::builder();
/// chains.try_first(tag("sv")).then(tag("en"));
///
/// let config = ConfigurationContext::builder()
///     .fallback(chains.build())
///     .enable_invariant_fallback(true)
///     .custom_key_variants(["Description".to_string()])
///     .build();
///
/// assert_eq!(
///     config.probe_order(&tag("sv")),
///     vec![tag("sv"), tag("en"), LanguageTag::invariant()]
/// );
/// ```
#[derive(Debug, Clone, Default, Builder)]
pub struct ConfigurationContext {
    /// Language fallback chains.
    #[builder(default)]
    fallback: FallbackChainRegistry,

    /// Probe the invariant language after every configured chain.
    #[builder(default)]
    enable_invariant_fallback: bool,

    #[builder(default)]
    missing_translation_policy: MissingTranslationPolicy,

    /// Custom key variants accepted by [`KeyBuilder::variant_key`].
    #[builder(default, into)]
    custom_key_variants: BTreeSet<String>,

    #[builder(default)]
    diagnostics: DiagnosticHook,
}

impl ConfigurationContext {
    pub fn fallback(&self) -> &FallbackChainRegistry {
        &self.fallback
    }

    pub fn invariant_fallback_enabled(&self) -> bool {
        self.enable_invariant_fallback
    }

    pub fn missing_translation_policy(&self) -> MissingTranslationPolicy {
        self.missing_translation_policy
    }

    pub fn diagnostics(&self) -> &DiagnosticHook {
        &self.diagnostics
    }

    /// A key builder accepting the configured custom key variants.
    pub fn key_builder(&self) -> KeyBuilder {
        KeyBuilder::new(self.custom_key_variants.iter().cloned())
    }

    /// Languages to probe for `requested`, honoring the invariant switch.
    pub fn probe_order(&self, requested: &LanguageTag) -> Vec<LanguageTag> {
        self.probe_order_with(requested, self.enable_invariant_fallback)
    }

    /// Languages to probe for `requested`, with the invariant tag appended
    /// when `with_invariant` is set or enabled globally.
    pub fn probe_order_with(&self, requested: &LanguageTag, with_invariant: bool) -> Vec<LanguageTag> {
        let resolver = FallbackResolver::new(&self.fallback);
        if with_invariant || self.enable_invariant_fallback {
            resolver.resolve_with_invariant(requested)
        } else {
            resolver.resolve(requested)
        }
    }
}
