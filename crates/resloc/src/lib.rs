//! Strongly-typed resource localization.
//!
//! Localizable text lives on plain structs and enums. Each member gets a
//! stable dotted key derived from its owner type and name, translations
//! are looked up through configurable language fallback chains, and whole
//! resource graphs can be translated in one call.
//!
//! ```
//! use std::sync::Arc;
//! use resloc::{
//!     FallbackChainRegistry, InMemoryStore, LanguageTag, LocalizationProvider,
//!     LocalizedResource, ConfigurationContext, ResourceKey, member,
//! };
//!
//! #[derive(Default, LocalizedResource)]
//! #[resource(key_prefix = "Shop.Cart")]
//! struct Cart {
//!     #[resource(default = "Your cart")]
//!     title: String,
//! }
//!
//! let tag = |s: &str| LanguageTag::parse(s).unwrap();
//! let store = InMemoryStore::new()
//!     .with(ResourceKey::parse("Shop.Cart.title").unwrap(), tag("en"), "Your cart");
//!
//! let mut chains = FallbackChainRegistry::builder();
//! chains.try_first(tag("en"));
//!
//! let provider = LocalizationProvider::builder()
//!     .config(ConfigurationContext::builder().fallback(chains.build()).build())
//!     .store(Arc::new(store))
//!     .build();
//!
//! let cart: Cart = provider.translate(&tag("de"));
//! assert_eq!(cart.title, "Your cart");
//!
//! let title = provider.get_member_string(&member!(Cart, title), &tag("en"), &[]).unwrap();
//! assert_eq!(title.as_deref(), Some("Your cart"));
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fallback;
pub mod format;
pub mod graph;
pub mod keys;
pub mod provider;
pub mod store;
pub mod types;

pub use config::{ConfigurationContext, MissingTranslationPolicy};
pub use diagnostics::{Diagnostic, DiagnosticHook};
pub use error::{LoadError, LocalizationError};
pub use fallback::{
    ChainBuilder, FallbackChainRegistry, FallbackChainRegistryBuilder, FallbackConfig,
    FallbackResolver, ScopedChainBuilder,
};
pub use format::{FormatError, MessageFormatter, format, try_format};
pub use graph::ResourceGraphTranslator;
pub use keys::{
    DiscoveredResource, EnumDescriptor, EnumVariant, KeyBuilder, LocalizedEnum, LocalizedResource,
    MemberDescriptor, MemberKind, MemberRef, MemberVisitor, ResourceCollection,
    ResourceDescriptor, StaticMember, TypeRegistry, compute_suggestions,
};
pub use provider::LocalizationProvider;
pub use store::{InMemoryStore, TranslationLookup, TranslationStore};
pub use types::{
    Arg, LanguageTag, Placeholders, ResourceKey, TranslatedResource, Translation, Value,
};

pub use resloc_macros::{LocalizedEnum, LocalizedResource, Placeholders};

/// Creates a `HashMap<String, Value>` usable as a named-placeholder source.
///
/// Values are converted via `Into<Value>`.
///
/// # Example
///
/// ```
/// use resloc::{Arg, format, placeholders};
///
/// let model = placeholders! { "Name" => "Ada", "Count" => 3 };
/// assert_eq!(
///     format("{Name} has {Count} items", &[Arg::object(&model)]),
///     "Ada has 3 items"
/// );
/// ```
#[macro_export]
macro_rules! placeholders {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
