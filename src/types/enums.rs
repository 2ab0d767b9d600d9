//! Enum type contract: validity checks and the mapping between runtime
//! values and declared names.

use arcstr::ArcStr;
use derive_more::with_trait::{Display, Error};

use crate::{
    schema::meta::{EnumMeta, EnumValue},
    types::base::TypeKind,
    value::ScalarValue,
};

/// Enum declared by a Rust type.
///
/// Used to populate an [`EnumMeta`] when no explicit configuration is given,
/// see [`EnumMeta::from_declaration()`].
pub trait EnumDeclaration<S> {
    /// Name of the enum type.
    const NAME: &'static str;

    /// Description of the enum type, if any.
    const DESCRIPTION: Option<&'static str> = None;

    /// Ordered table of the declared values.
    fn values() -> Vec<EnumValue<S>>;
}

/// Value which doesn't belong to the value table of an enum.
///
/// Reported to the caller as is; surfacing it as a user-visible error is the
/// execution engine's job.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
#[display("Invalid value {value} for enum \"{enum_name}\"")]
pub struct InvalidEnumValue {
    /// Name of the enum type.
    pub enum_name: ArcStr,
    /// Rendering of the rejected runtime value.
    pub value: String,
}

/// Enum type whose value table is the single source of truth for both
/// validity and name resolution.
pub trait GraphQLEnum<S: ScalarValue> {
    /// Name of the enum type.
    fn name(&self) -> &str;

    /// Ordered table of the declared values.
    fn values(&self) -> &[EnumValue<S>];

    /// Kind of this type, always [`TypeKind::Enum`].
    fn kind(&self) -> TypeKind {
        TypeKind::Enum
    }

    /// Checks whether `value` is the runtime value of some declared entry.
    ///
    /// Names are never compared.
    fn is_valid_value(&self, value: &S) -> bool {
        self.values().iter().any(|v| v.value == *value)
    }

    /// Returns the name of the first declared entry whose runtime value
    /// equals `value`.
    ///
    /// Declaration order breaks ties between aliased values.
    fn resolve(&self, value: &S) -> Option<&str> {
        self.values()
            .iter()
            .find(|v| v.value == *value)
            .map(|v| v.name.as_str())
    }

    /// Like [`GraphQLEnum::resolve()`], but reports an unknown value as an
    /// [`InvalidEnumValue`].
    fn validate(&self, value: &S) -> Result<&str, InvalidEnumValue> {
        self.resolve(value).ok_or_else(|| InvalidEnumValue {
            enum_name: self.name().into(),
            value: value.to_string(),
        })
    }
}

impl<S: ScalarValue> GraphQLEnum<S> for EnumMeta<S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn values(&self) -> &[EnumValue<S>] {
        &self.values
    }
}
