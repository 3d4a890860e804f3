//! Resource key construction.

use std::collections::BTreeSet;
use std::iter::once;

use resloc_keys::{is_valid_segment, join_segments};
use strsim::levenshtein;

use crate::error::LocalizationError;
use crate::keys::descriptor::{LocalizedEnum, MemberKind, ResourceDescriptor};
use crate::types::ResourceKey;

/// Builds canonical dotted resource keys.
///
/// Every key in the system goes through [`KeyBuilder::build_key`]: the graph
/// translator when it walks a descriptor table, member references when they
/// are resolved, and enum values. That single path is what guarantees a
/// member gets the same key no matter how it is asked for.
///
/// The builder also owns the set of registered custom key variants
/// (`Title-Description` style keys).
#[derive(Debug, Clone, Default)]
pub struct KeyBuilder {
    custom_variants: BTreeSet<String>,
}

impl KeyBuilder {
    /// Create a builder accepting the given custom key variants.
    pub fn new(custom_variants: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            custom_variants: custom_variants.into_iter().map(Into::into).collect(),
        }
    }

    /// Join an owner path and a member name into a key.
    ///
    /// Every segment must be an identifier.
    ///
    /// # Example
    ///
    /// ```
    /// use resloc::KeyBuilder;
    ///
    /// let key = KeyBuilder::build_key(&["App", "PageResources", "Header"], "HelloMessage").unwrap();
    /// assert_eq!(key.as_str(), "App.PageResources.Header.HelloMessage");
    /// ```
    pub fn build_key<S: AsRef<str>>(
        owner_path: &[S],
        member_name: &str,
    ) -> Result<ResourceKey, LocalizationError> {
        if member_name.trim().is_empty() {
            return Err(LocalizationError::invalid_argument(
                "member_name",
                "member name must not be blank",
            ));
        }

        let segments: Vec<&str> = owner_path
            .iter()
            .map(AsRef::as_ref)
            .chain(once(member_name))
            .collect();

        if let Some(bad) = segments.iter().find(|s| !is_valid_segment(s)) {
            return Err(LocalizationError::invalid_argument(
                "owner_path",
                format!("'{bad}' is not a valid key segment"),
            ));
        }

        Ok(ResourceKey::from_built(join_segments(segments)))
    }

    /// Resolve a member path on a resource type to its key.
    ///
    /// `path` names members from the outermost type inward; nested and
    /// collection members descend into their element type. The last segment
    /// may also name a static member. Hidden members do not resolve.
    pub fn member_key(
        descriptor: &'static ResourceDescriptor,
        path: &[&str],
    ) -> Result<ResourceKey, LocalizationError> {
        let (last, parents) = path.split_last().ok_or_else(|| {
            LocalizationError::invalid_argument("member", "member path must not be empty")
        })?;

        let mut owner_path = descriptor.owner_path();
        let mut current = descriptor;
        for name in parents {
            let member = current
                .member(name)
                .filter(|m| !m.hidden)
                .ok_or_else(|| invalid_reference(descriptor, path, current, name))?;
            match member.kind {
                MemberKind::Nested(child) | MemberKind::Collection(child) => {
                    owner_path.push(member.segment);
                    current = child();
                }
                MemberKind::Scalar => {
                    return Err(LocalizationError::InvalidReference {
                        owner: descriptor.type_name.to_string(),
                        path: path.join("."),
                        suggestions: Vec::new(),
                    });
                }
            }
        }

        if let Some(member) = current.member(last).filter(|m| !m.hidden) {
            return Self::build_key(&owner_path, member.segment);
        }
        if let Some(member) = current.static_member(last) {
            return Self::build_key(&owner_path, member.segment);
        }
        Err(invalid_reference(descriptor, path, current, last))
    }

    /// The key of an enum value: the enum's owner path plus the variant name.
    pub fn enum_key<E: LocalizedEnum>(value: &E) -> Result<ResourceKey, LocalizationError> {
        let descriptor = E::descriptor();
        Self::build_key(&descriptor.owner_path(), value.variant().segment)
    }

    /// Append a registered custom variant to a key (`Title` -> `Title-Description`).
    pub fn variant_key(
        &self,
        key: &ResourceKey,
        variant: &str,
    ) -> Result<ResourceKey, LocalizationError> {
        if !self.custom_variants.contains(variant) {
            return Err(LocalizationError::MissingCustomHandler {
                key: key.to_string(),
                variant: variant.to_string(),
            });
        }
        Ok(ResourceKey::from_built(resloc_keys::variant_key(
            key.as_str(),
            variant,
        )))
    }

    /// The registered custom variants.
    pub fn custom_variants(&self) -> impl Iterator<Item = &str> {
        self.custom_variants.iter().map(String::as_str)
    }
}

fn invalid_reference(
    root: &ResourceDescriptor,
    path: &[&str],
    scope: &ResourceDescriptor,
    missing: &str,
) -> LocalizationError {
    LocalizationError::InvalidReference {
        owner: root.type_name.to_string(),
        path: path.join("."),
        suggestions: compute_suggestions(missing, &scope.candidate_names()),
    }
}

/// Names within edit distance of `name`, closest first, at most three.
pub fn compute_suggestions(name: &str, available: &[String]) -> Vec<String> {
    let max_distance = if name.len() > 3 { 2 } else { 1 };
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (levenshtein(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort();
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
