//! The public lookup facade.

use std::collections::BTreeMap;
use std::sync::Arc;

use bon::Builder;

use crate::config::ConfigurationContext;
use crate::diagnostics::Diagnostic;
use crate::error::LocalizationError;
use crate::format::MessageFormatter;
use crate::graph::ResourceGraphTranslator;
use crate::keys::{KeyBuilder, LocalizedEnum, LocalizedResource, MemberRef, ResourceDescriptor};
use crate::store::{TranslationLookup, TranslationStore};
use crate::types::{Arg, LanguageTag, ResourceKey};

/// Looks up, formats and assembles translations.
///
/// A missing translation is `Ok(None)`, never an error. Errors are reserved
/// for invalid input: blank keys, unresolvable member references and
/// unregistered key variants.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use resloc::{InMemoryStore, LanguageTag, LocalizationProvider, ResourceKey};
///
/// let tag = |s: &str| LanguageTag::parse(s).unwrap();
/// let store = InMemoryStore::new().with(
///     ResourceKey::parse("Greeting").unwrap(),
///     tag("en"),
///     "Hello, {0}!",
/// );
///
/// let provider = LocalizationProvider::builder()
///     .store(Arc::new(store))
///     .build();
///
/// let text = provider
///     .get_string_formatted("Greeting", &tag("en"), &["Ada".into()])
///     .unwrap();
/// assert_eq!(text.as_deref(), Some("Hello, Ada!"));
/// ```
#[derive(Clone, Builder)]
pub struct LocalizationProvider {
    #[builder(default, into)]
    config: Arc<ConfigurationContext>,

    store: Option<Arc<dyn TranslationStore>>,
}

impl LocalizationProvider {
    pub fn config(&self) -> &ConfigurationContext {
        &self.config
    }

    pub fn store(&self) -> Option<&dyn TranslationStore> {
        self.store.as_deref()
    }

    /// A graph translator over this provider's configuration and store.
    pub fn graph(&self) -> ResourceGraphTranslator<'_> {
        ResourceGraphTranslator::new(&self.config, self.store())
    }

    /// The translation stored under `key`, following the fallback chains.
    pub fn get_string(
        &self,
        key: &str,
        language: &LanguageTag,
    ) -> Result<Option<String>, LocalizationError> {
        self.get_string_formatted(key, language, &[])
    }

    /// Like [`get_string`](Self::get_string), formatting the text with `args`.
    pub fn get_string_formatted(
        &self,
        key: &str,
        language: &LanguageTag,
        args: &[Arg<'_>],
    ) -> Result<Option<String>, LocalizationError> {
        let key = ResourceKey::parse(key)?;
        Ok(self.lookup(&key, language, args, false))
    }

    /// The translation of a member reference.
    pub fn get_member_string(
        &self,
        member: &MemberRef,
        language: &LanguageTag,
        args: &[Arg<'_>],
    ) -> Result<Option<String>, LocalizationError> {
        let key = member.key()?;
        Ok(self.lookup(&key, language, args, false))
    }

    /// Like [`get_member_string`](Self::get_member_string), probing the
    /// invariant language last whatever the configuration says.
    pub fn get_member_string_with_invariant_fallback(
        &self,
        member: &MemberRef,
        language: &LanguageTag,
        args: &[Arg<'_>],
    ) -> Result<Option<String>, LocalizationError> {
        let key = member.key()?;
        Ok(self.lookup(&key, language, args, true))
    }

    /// The translation of a registered custom variant of a member
    /// (`Title` -> `Title-Description`).
    pub fn get_variant_string(
        &self,
        member: &MemberRef,
        variant: &str,
        language: &LanguageTag,
        args: &[Arg<'_>],
    ) -> Result<Option<String>, LocalizationError> {
        let key = self.config.key_builder().variant_key(&member.key()?, variant)?;
        Ok(self.lookup(&key, language, args, false))
    }

    /// The translation of an enum value.
    pub fn translate_enum<E: LocalizedEnum>(
        &self,
        value: &E,
        language: &LanguageTag,
        args: &[Arg<'_>],
    ) -> Result<Option<String>, LocalizationError> {
        let key = KeyBuilder::enum_key(value)?;
        Ok(self.lookup(&key, language, args, false))
    }

    /// A new instance of `T` with every localizable field translated.
    pub fn translate<T: LocalizedResource + Default>(&self, language: &LanguageTag) -> T {
        self.graph().translate(language)
    }

    /// Translate the localizable fields of an existing instance in place.
    pub fn translate_into<T: LocalizedResource>(&self, target: &mut T, language: &LanguageTag) {
        self.graph().translate_instance(target, language);
    }

    /// Member path to translated text for every leaf of `T`.
    pub fn to_dictionary<T: LocalizedResource>(
        &self,
        language: &LanguageTag,
    ) -> BTreeMap<String, String> {
        self.to_dictionary_for(T::descriptor(), language)
    }

    /// [`to_dictionary`](Self::to_dictionary) for a descriptor known only at runtime.
    pub fn to_dictionary_for(
        &self,
        descriptor: &'static ResourceDescriptor,
        language: &LanguageTag,
    ) -> BTreeMap<String, String> {
        self.graph().translate_type(descriptor, language)
    }

    /// Every stored resource resolved for `language`, probing the fallback
    /// chains and then the invariant language.
    ///
    /// Resources with no usable translation are left out.
    pub fn strings_by_language(&self, language: &LanguageTag) -> BTreeMap<ResourceKey, String> {
        let Some(store) = self.store() else {
            self.config.diagnostics().emit(&Diagnostic::MissingStore);
            return BTreeMap::new();
        };

        let probe_order = self.config.probe_order_with(language, true);
        store
            .all_resources()
            .into_iter()
            .filter_map(|resource| {
                let text = resource
                    .first_available(&probe_order)
                    .map(|(_, text)| text.to_string())?;
                Some((resource.key, text))
            })
            .collect()
    }

    fn lookup(
        &self,
        key: &ResourceKey,
        language: &LanguageTag,
        args: &[Arg<'_>],
        with_invariant: bool,
    ) -> Option<String> {
        let Some(store) = self.store() else {
            self.config.diagnostics().emit(&Diagnostic::MissingStore);
            return None;
        };

        let probe_order = self.config.probe_order_with(language, with_invariant);
        let Some(text) = TranslationLookup::new(store).lookup(key, &probe_order) else {
            self.config
                .diagnostics()
                .emit(&Diagnostic::MissingTranslation {
                    key: key.clone(),
                    probed: probe_order,
                });
            return None;
        };

        Some(MessageFormatter::new(self.config.diagnostics().clone()).format(&text, args))
    }
}
