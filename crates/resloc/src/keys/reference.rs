use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::error::LocalizationError;
use crate::keys::builder::KeyBuilder;
use crate::keys::descriptor::{LocalizedResource, ResourceDescriptor};
use crate::types::ResourceKey;

/// A typed handle to one member of a resource type.
///
/// Usually created with [`member!`](crate::member), which checks the field
/// path at compile time. Resolution to a key goes through the same
/// descriptor table the graph translator walks, so both always agree.
///
/// # Example
///
/// ```
/// use resloc::{LocalizedResource, member};
///
/// #[derive(Default, LocalizedResource)]
/// #[resource(key_prefix = "Checkout")]
/// struct Checkout {
///     pay_button: String,
/// }
///
/// let key = member!(Checkout, pay_button).key().unwrap();
/// assert_eq!(key.as_str(), "Checkout.pay_button");
/// ```
#[derive(Clone, Copy)]
pub struct MemberRef {
    owner: fn() -> &'static ResourceDescriptor,
    path: &'static [&'static str],
}

impl MemberRef {
    /// Create a reference from an owner descriptor and a member path.
    pub const fn new(
        owner: fn() -> &'static ResourceDescriptor,
        path: &'static [&'static str],
    ) -> Self {
        Self { owner, path }
    }

    /// Create an unchecked reference to a member of `T`.
    ///
    /// Needed for paths that cannot be written as field accesses, such as
    /// members of collection elements or static members.
    pub fn of<T: LocalizedResource>(path: &'static [&'static str]) -> Self {
        Self::new(T::descriptor, path)
    }

    /// The descriptor of the owning type.
    pub fn owner(&self) -> &'static ResourceDescriptor {
        (self.owner)()
    }

    /// The member path, outermost first.
    pub fn path(&self) -> &'static [&'static str] {
        self.path
    }

    /// Resolve this reference to its resource key.
    pub fn key(&self) -> Result<ResourceKey, LocalizationError> {
        KeyBuilder::member_key(self.owner(), self.path)
    }
}

impl Debug for MemberRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "MemberRef({}::{})", self.owner().type_name, self.path.join("."))
    }
}

/// Create a [`MemberRef`] to a field of a resource type.
///
/// The field path is type-checked as a field access on the owner, so a
/// renamed or removed field is a compile error rather than a silent miss.
///
/// ```ignore
/// let reference = member!(PageResources, header.hello_message);
/// ```
#[macro_export]
macro_rules! member {
    ($owner:ty, $($segment:ident).+) => {{
        let _ = |resource: &$owner| {
            let _ = &resource.$($segment).+;
        };
        $crate::MemberRef::new(
            <$owner as $crate::LocalizedResource>::descriptor,
            &[$(stringify!($segment)),+],
        )
    }};
}
