mod key;
mod language;
mod translation;
mod value;

pub use key::ResourceKey;
pub use language::LanguageTag;
pub use translation::{TranslatedResource, Translation};
pub use value::{Arg, Placeholders, Value};
