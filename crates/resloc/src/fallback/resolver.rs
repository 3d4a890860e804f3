//! Probe order computation.

use crate::fallback::chain::FallbackChainRegistry;
use crate::types::LanguageTag;

/// Computes the ordered list of languages to probe for a request.
///
/// Probe order, each language at most once:
/// 1. the requested tag itself;
/// 2. its neutral form (`fr` for `fr-BE`), unless a scoped chain exists
///    for the exact tag, in which case the scoped chain takes this place;
/// 3. the registry chain for the requested tag;
/// 4. the invariant tag, only when invariant fallback is requested.
///
/// # Example
///
/// ```
/// use resloc::{FallbackChainRegistry, FallbackResolver, LanguageTag};
///
/// let tag = |s: &str| LanguageTag::parse(s).unwrap();
/// let mut builder = FallbackChainRegistry::builder();
/// builder.try_first(tag("en"));
/// let registry = builder.build();
///
/// let order = FallbackResolver::new(&registry).resolve(&tag("lv-LV"));
/// assert_eq!(order, vec![tag("lv-LV"), tag("lv"), tag("en")]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FallbackResolver<'a> {
    registry: &'a FallbackChainRegistry,
}

impl<'a> FallbackResolver<'a> {
    pub fn new(registry: &'a FallbackChainRegistry) -> Self {
        Self { registry }
    }

    /// Probe order for `requested`, without the invariant tag.
    pub fn resolve(&self, requested: &LanguageTag) -> Vec<LanguageTag> {
        let mut order = ProbeOrder::default();
        order.push(requested.clone());

        match self.registry.scoped_chain(requested) {
            Some(scoped) => order.extend(scoped),
            None => {
                if let Some(neutral) = requested.neutral() {
                    order.push(neutral);
                }
            }
        }

        order.extend(self.registry.chain_for(requested));
        order.into_vec()
    }

    /// Probe order for `requested`, ending with the invariant tag.
    pub fn resolve_with_invariant(&self, requested: &LanguageTag) -> Vec<LanguageTag> {
        let mut order = self.resolve(requested);
        let invariant = LanguageTag::invariant();
        if !order.contains(&invariant) {
            order.push(invariant);
        }
        order
    }
}

/// An insertion-ordered, deduplicated list of languages.
#[derive(Default)]
struct ProbeOrder {
    languages: Vec<LanguageTag>,
}

impl ProbeOrder {
    fn push(&mut self, language: LanguageTag) {
        if !self.languages.contains(&language) {
            self.languages.push(language);
        }
    }

    fn extend(&mut self, languages: &[LanguageTag]) {
        for language in languages {
            self.push(language.clone());
        }
    }

    fn into_vec(self) -> Vec<LanguageTag> {
        self.languages
    }
}
