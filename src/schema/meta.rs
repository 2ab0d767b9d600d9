//! Types used to describe a `GraphQL` schema

use std::fmt;

use arcstr::ArcStr;

use crate::{
    ast::{DeclarationId, Type},
    types::{base::TypeKind, enums::EnumDeclaration},
    value::{DefaultScalarValue, Value},
};

/// Names of the meta-fields attached to the query type.
///
/// They're answered by the introspection layer itself and never listed as
/// fields of any type.
pub const META_FIELD_NAMES: [&str; 2] = ["__type", "__schema"];

/// Whether an item is deprecated, with context.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum DeprecationStatus {
    /// The field/variant is not deprecated.
    Current,
    /// The field/variant is deprecated, with an optional reason
    Deprecated(Option<ArcStr>),
}

impl DeprecationStatus {
    /// If this deprecation status indicates the item is deprecated.
    pub fn is_deprecated(&self) -> bool {
        match self {
            DeprecationStatus::Current => false,
            DeprecationStatus::Deprecated(_) => true,
        }
    }

    /// An optional reason for the deprecation, or none if `Current`.
    pub fn reason(&self) -> Option<&str> {
        match self {
            DeprecationStatus::Current => None,
            DeprecationStatus::Deprecated(rsn) => rsn.as_deref(),
        }
    }
}

/// Scalar type metadata
#[derive(Debug)]
pub struct ScalarMeta {
    #[doc(hidden)]
    pub id: DeclarationId,
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub specified_by_url: Option<ArcStr>,
}

/// Object type metadata
#[derive(Debug)]
pub struct ObjectMeta<S> {
    #[doc(hidden)]
    pub id: DeclarationId,
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub fields: Vec<Field<S>>,
    #[doc(hidden)]
    pub interfaces: Vec<DeclarationId>,
}

/// Enum type metadata
pub struct EnumMeta<S> {
    #[doc(hidden)]
    pub id: DeclarationId,
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub values: Vec<EnumValue<S>>,
}

/// Interface type metadata
#[derive(Debug)]
pub struct InterfaceMeta<S> {
    #[doc(hidden)]
    pub id: DeclarationId,
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub fields: Vec<Field<S>>,
}

/// Union type metadata
#[derive(Debug)]
pub struct UnionMeta {
    #[doc(hidden)]
    pub id: DeclarationId,
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub of_types: Vec<DeclarationId>,
}

/// Input object metadata
#[derive(Debug)]
pub struct InputObjectMeta<S> {
    #[doc(hidden)]
    pub id: DeclarationId,
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub input_fields: Vec<Argument<S>>,
}

/// Generic type metadata
///
/// One variant per named kind. List and non-null kinds are structural: they
/// only ever appear as wrappers, see [`TypeType`].
///
/// [`TypeType`]: crate::TypeType
#[derive(Debug)]
pub enum MetaType<S = DefaultScalarValue> {
    #[doc(hidden)]
    Scalar(ScalarMeta),
    #[doc(hidden)]
    Object(ObjectMeta<S>),
    #[doc(hidden)]
    Enum(EnumMeta<S>),
    #[doc(hidden)]
    Interface(InterfaceMeta<S>),
    #[doc(hidden)]
    Union(UnionMeta),
    #[doc(hidden)]
    InputObject(InputObjectMeta<S>),
}

/// Metadata for a field
#[derive(Debug, Clone)]
pub struct Field<S> {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub arguments: Option<Vec<Argument<S>>>,
    #[doc(hidden)]
    pub field_type: Type,
    #[doc(hidden)]
    pub deprecation_status: DeprecationStatus,
}

impl<S> Field<S> {
    /// Returns true if this is one of the `__type`/`__schema` meta-fields.
    pub fn is_meta_field(&self) -> bool {
        META_FIELD_NAMES.contains(&self.name.as_str())
    }
}

/// Metadata for an argument to a field, or for a field of an input object
#[derive(Debug, Clone)]
pub struct Argument<S> {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub arg_type: Type,
    #[doc(hidden)]
    pub default_value: Option<Value<S>>,
}

/// Metadata for a single value in an enum
#[derive(Debug, Clone)]
pub struct EnumValue<S> {
    /// The name of the enum value
    ///
    /// This is the string literal representation of the enum in responses.
    pub name: ArcStr,
    /// The runtime value this name stands for.
    ///
    /// Validity checks and name resolution compare against this, never
    /// against the name.
    pub value: S,
    /// The optional description of the enum value.
    ///
    /// Note: this is not the description of the enum itself; it's the
    /// description of this enum _value_.
    pub description: Option<ArcStr>,
    /// Whether the field is deprecated or not, with an optional reason.
    pub deprecation_status: DeprecationStatus,
}

impl<S> MetaType<S> {
    /// Accesses the declaration identity of the type.
    pub fn id(&self) -> DeclarationId {
        match self {
            MetaType::Scalar(ScalarMeta { id, .. })
            | MetaType::Object(ObjectMeta { id, .. })
            | MetaType::Enum(EnumMeta { id, .. })
            | MetaType::Interface(InterfaceMeta { id, .. })
            | MetaType::Union(UnionMeta { id, .. })
            | MetaType::InputObject(InputObjectMeta { id, .. }) => *id,
        }
    }

    /// Accesses the name of the type.
    pub fn name(&self) -> &str {
        match self {
            MetaType::Scalar(ScalarMeta { name, .. })
            | MetaType::Object(ObjectMeta { name, .. })
            | MetaType::Enum(EnumMeta { name, .. })
            | MetaType::Interface(InterfaceMeta { name, .. })
            | MetaType::Union(UnionMeta { name, .. })
            | MetaType::InputObject(InputObjectMeta { name, .. }) => name.as_str(),
        }
    }

    /// Accesses the description of the type, if any.
    pub fn description(&self) -> Option<&ArcStr> {
        match self {
            MetaType::Scalar(ScalarMeta { description, .. })
            | MetaType::Object(ObjectMeta { description, .. })
            | MetaType::Enum(EnumMeta { description, .. })
            | MetaType::Interface(InterfaceMeta { description, .. })
            | MetaType::Union(UnionMeta { description, .. })
            | MetaType::InputObject(InputObjectMeta { description, .. }) => description.as_ref(),
        }
    }

    /// Accesses the [specification URL][0], if applicable.
    ///
    /// Only custom GraphQL scalars can have a [specification URL][0].
    ///
    /// [0]: https://spec.graphql.org/October2021#sec--specifiedBy
    pub fn specified_by_url(&self) -> Option<&ArcStr> {
        match self {
            Self::Scalar(ScalarMeta {
                specified_by_url, ..
            }) => specified_by_url.as_ref(),
            _ => None,
        }
    }

    /// Constructs a [`TypeKind`] for this type.
    pub fn type_kind(&self) -> TypeKind {
        match self {
            MetaType::Scalar(_) => TypeKind::Scalar,
            MetaType::Object(_) => TypeKind::Object,
            MetaType::Enum(_) => TypeKind::Enum,
            MetaType::Interface(_) => TypeKind::Interface,
            MetaType::Union(_) => TypeKind::Union,
            MetaType::InputObject(_) => TypeKind::InputObject,
        }
    }

    /// Accesses a field's metadata given its name.
    ///
    /// Only objects and interfaces have fields. This method always returns
    /// `None` for other types.
    pub fn field_by_name(&self, name: &str) -> Option<&Field<S>> {
        match self {
            MetaType::Object(ObjectMeta { fields, .. })
            | MetaType::Interface(InterfaceMeta { fields, .. }) => {
                fields.iter().find(|f| f.name == name)
            }
            _ => None,
        }
    }

    /// Constructs a nullable [`Type`] literal referring to this declaration.
    pub fn as_type(&self) -> Type {
        Type::Named(self.id())
    }
}

impl ScalarMeta {
    /// Builds a new [`ScalarMeta`] type for the given declaration.
    pub fn new(id: DeclarationId, name: ArcStr) -> Self {
        Self {
            id,
            name,
            description: None,
            specified_by_url: None,
        }
    }

    /// Sets the `description` of this [`ScalarMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the [specification URL][0] for this [`ScalarMeta`] type.
    ///
    /// Overwrites any previously set [specification URL][0].
    ///
    /// [0]: https://spec.graphql.org/October2021#sec--specifiedBy
    #[must_use]
    pub fn specified_by_url(mut self, url: impl Into<ArcStr>) -> Self {
        self.specified_by_url = Some(url.into());
        self
    }

    /// Wraps this [`ScalarMeta`] type into a generic [`MetaType`].
    pub fn into_meta<S>(self) -> MetaType<S> {
        MetaType::Scalar(self)
    }
}

impl<S> ObjectMeta<S> {
    /// Build a new [`ObjectMeta`] type with the specified `name` and `fields`.
    pub fn new(id: DeclarationId, name: ArcStr, fields: &[Field<S>]) -> Self
    where
        S: Clone,
    {
        Self {
            id,
            name,
            description: None,
            fields: fields.to_vec(),
            interfaces: vec![],
        }
    }

    /// Sets the `description` of this [`ObjectMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the `interfaces` this [`ObjectMeta`] type implements.
    ///
    /// Overwrites any previously set list of interfaces.
    #[must_use]
    pub fn interfaces(mut self, interfaces: &[Type]) -> Self {
        self.interfaces = interfaces.iter().map(Type::innermost_id).collect();
        self
    }

    /// Wraps this [`ObjectMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType<S> {
        MetaType::Object(self)
    }
}

impl<S> EnumMeta<S> {
    /// Build a new [`EnumMeta`] type with the specified `name` and possible
    /// `values`.
    ///
    /// The value table is fixed from here on.
    pub fn new(id: DeclarationId, name: ArcStr, values: &[EnumValue<S>]) -> Self
    where
        S: Clone,
    {
        Self {
            id,
            name,
            description: None,
            values: values.to_vec(),
        }
    }

    /// Builds a new [`EnumMeta`] type populated from the given
    /// [`EnumDeclaration`], for enums without explicit configuration.
    pub fn from_declaration<T>(id: DeclarationId) -> Self
    where
        T: EnumDeclaration<S> + ?Sized,
    {
        Self {
            id,
            name: T::NAME.into(),
            description: T::DESCRIPTION.map(Into::into),
            values: T::values(),
        }
    }

    /// Sets the `description` of this [`EnumMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Wraps this [`EnumMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType<S> {
        MetaType::Enum(self)
    }
}

impl<S> InterfaceMeta<S> {
    /// Builds a new [`InterfaceMeta`] type with the specified `name` and
    /// `fields`.
    pub fn new(id: DeclarationId, name: ArcStr, fields: &[Field<S>]) -> Self
    where
        S: Clone,
    {
        Self {
            id,
            name,
            description: None,
            fields: fields.to_vec(),
        }
    }

    /// Sets the `description` of this [`InterfaceMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Wraps this [`InterfaceMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType<S> {
        MetaType::Interface(self)
    }
}

impl UnionMeta {
    /// Build a new [`UnionMeta`] type with the specified `name` and possible
    /// [`Type`]s.
    pub fn new(id: DeclarationId, name: ArcStr, of_types: &[Type]) -> Self {
        Self {
            id,
            name,
            description: None,
            of_types: of_types.iter().map(Type::innermost_id).collect(),
        }
    }

    /// Sets the `description` of this [`UnionMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Wraps this [`UnionMeta`] type into a generic [`MetaType`].
    pub fn into_meta<S>(self) -> MetaType<S> {
        MetaType::Union(self)
    }
}

impl<S> InputObjectMeta<S> {
    /// Builds a new [`InputObjectMeta`] type with the specified `name` and
    /// `input_fields`.
    pub fn new(id: DeclarationId, name: ArcStr, input_fields: &[Argument<S>]) -> Self
    where
        S: Clone,
    {
        Self {
            id,
            name,
            description: None,
            input_fields: input_fields.to_vec(),
        }
    }

    /// Set the `description` of this [`InputObjectMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Wraps this [`InputObjectMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType<S> {
        MetaType::InputObject(self)
    }
}

impl<S> Field<S> {
    /// Builds a new [`Field`] of the given [`Type`] with the given `name`.
    pub fn new(name: impl Into<ArcStr>, field_type: Type) -> Self {
        Self {
            name: name.into(),
            description: None,
            arguments: None,
            field_type,
            deprecation_status: DeprecationStatus::Current,
        }
    }

    /// Set the `description` of this [`Field`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds an `argument` to this [`Field`].
    ///
    /// Arguments are unordered and can't contain duplicates by name.
    #[must_use]
    pub fn argument(mut self, argument: Argument<S>) -> Self {
        match self.arguments {
            None => {
                self.arguments = Some(vec![argument]);
            }
            Some(ref mut args) => {
                args.push(argument);
            }
        };
        self
    }

    /// Sets this [`Field`] as deprecated with an optional `reason`.
    ///
    /// Overwrites any previously set deprecation reason.
    #[must_use]
    pub fn deprecated(mut self, reason: Option<&str>) -> Self {
        self.deprecation_status = DeprecationStatus::Deprecated(reason.map(Into::into));
        self
    }
}

impl<S> Argument<S> {
    /// Builds a new [`Argument`] of the given [`Type`] with the given `name`.
    pub fn new(name: impl Into<ArcStr>, arg_type: Type) -> Self {
        Self {
            name: name.into(),
            description: None,
            arg_type,
            default_value: None,
        }
    }

    /// Sets the `description` of this [`Argument`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the default value of this [`Argument`].
    ///
    /// Overwrites any previously set default value.
    #[must_use]
    pub fn default_value(mut self, val: impl Into<Value<S>>) -> Self {
        self.default_value = Some(val.into());
        self
    }
}

impl<S> EnumValue<S> {
    /// Constructs a new [`EnumValue`] with the provided `name`, standing for
    /// the given runtime `value`.
    pub fn new(name: impl Into<ArcStr>, value: impl Into<S>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            description: None,
            deprecation_status: DeprecationStatus::Current,
        }
    }

    /// Sets the `description` of this [`EnumValue`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets this [`EnumValue`] as deprecated with an optional `reason`.
    ///
    /// Overwrites any previously set deprecation reason.
    #[must_use]
    pub fn deprecated(mut self, reason: Option<&str>) -> Self {
        self.deprecation_status = DeprecationStatus::Deprecated(reason.map(Into::into));
        self
    }
}

impl<S: fmt::Debug> fmt::Debug for EnumMeta<S> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("EnumMeta")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("description", &self.description)
            .field("values", &self.values)
            .finish()
    }
}
