//! Kind-specific projections of a type value.
//!
//! Every projection answers `None` for kinds it doesn't apply to. That's the
//! normal outcome for, e.g., asking an enum for its fields, not an error.

use crate::{
    introspection::collector::collect_schema_types,
    schema::{
        meta::{
            Argument, EnumValue, Field, InputObjectMeta, InterfaceMeta, MetaType, ObjectMeta,
            UnionMeta,
        },
        model::{SchemaType, TypeType},
    },
    types::enums::GraphQLEnum as _,
    value::ScalarValue,
};

/// Enum value descriptor as exposed by introspection.
///
/// Optional parts of the declaration are defaulted: an empty `description`,
/// `is_deprecated: false` and an empty `deprecation_reason`. The declaration
/// itself is only borrowed.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedEnumValue<'a, S> {
    /// Declared name.
    pub name: &'a str,
    /// Runtime value the name stands for.
    pub value: &'a S,
    /// Description, empty if none was declared.
    pub description: &'a str,
    /// Whether the value is deprecated.
    pub is_deprecated: bool,
    /// Deprecation reason, empty if none was declared.
    pub deprecation_reason: &'a str,
}

impl<'a, S> From<&'a EnumValue<S>> for ResolvedEnumValue<'a, S> {
    fn from(v: &'a EnumValue<S>) -> Self {
        Self {
            name: v.name.as_str(),
            value: &v.value,
            description: v.description.as_deref().unwrap_or_default(),
            is_deprecated: v.deprecation_status.is_deprecated(),
            deprecation_reason: v.deprecation_status.reason().unwrap_or_default(),
        }
    }
}

/// Returns the type wrapped by a list or non-null type.
pub fn resolve_of_type<'t, 'a, S>(t: &'t TypeType<'a, S>) -> Option<&'t TypeType<'a, S>> {
    match t {
        TypeType::List(inner) | TypeType::NonNull(inner) => Some(&**inner),
        TypeType::Concrete(_) => None,
    }
}

/// Returns the fields of an input object type.
pub fn resolve_input_fields<'a, S>(t: &TypeType<'a, S>) -> Option<&'a [Argument<S>]> {
    match t.to_concrete()? {
        MetaType::InputObject(InputObjectMeta { input_fields, .. }) => {
            Some(input_fields.as_slice())
        }
        MetaType::Scalar(_)
        | MetaType::Object(_)
        | MetaType::Enum(_)
        | MetaType::Interface(_)
        | MetaType::Union(_) => None,
    }
}

/// Returns the value table of an enum type, in declaration order.
pub fn resolve_enum_values<'a, S>(t: &TypeType<'a, S>) -> Option<Vec<ResolvedEnumValue<'a, S>>>
where
    S: ScalarValue,
{
    match t.to_concrete()? {
        MetaType::Enum(meta) => Some(meta.values().iter().map(ResolvedEnumValue::from).collect()),
        MetaType::Scalar(_)
        | MetaType::Object(_)
        | MetaType::Interface(_)
        | MetaType::Union(_)
        | MetaType::InputObject(_) => None,
    }
}

/// Returns the fields of an object or interface type, without the
/// `__type`/`__schema` meta-fields.
pub fn resolve_fields<'a, S>(t: &TypeType<'a, S>) -> Option<Vec<&'a Field<S>>> {
    match t.to_concrete()? {
        MetaType::Object(ObjectMeta { fields, .. })
        | MetaType::Interface(InterfaceMeta { fields, .. }) => {
            Some(fields.iter().filter(|f| !f.is_meta_field()).collect())
        }
        MetaType::Scalar(_) | MetaType::Enum(_) | MetaType::Union(_) | MetaType::InputObject(_) => {
            None
        }
    }
}

/// Returns the interfaces an object type declares, possibly none.
pub fn resolve_interfaces<'a, S>(
    t: &TypeType<'a, S>,
    schema: &'a SchemaType<S>,
) -> Option<Vec<TypeType<'a, S>>> {
    match t.to_concrete()? {
        MetaType::Object(ObjectMeta { interfaces, .. }) => Some(
            interfaces
                .iter()
                .filter_map(|id| schema.type_by_id(*id))
                .collect(),
        ),
        MetaType::Scalar(_)
        | MetaType::Enum(_)
        | MetaType::Interface(_)
        | MetaType::Union(_)
        | MetaType::InputObject(_) => None,
    }
}

/// Returns the concrete types an interface or union type can resolve to.
///
/// A union answers with its declared members. An interface answers with every
/// object type reachable from the schema roots that declares it, matched by
/// declaration identity. The reachable set is walked afresh on every call.
pub fn resolve_possible_types<'a, S>(
    t: &TypeType<'a, S>,
    schema: &'a SchemaType<S>,
) -> Option<Vec<TypeType<'a, S>>> {
    match t.to_concrete()? {
        MetaType::Union(UnionMeta { of_types, .. }) => Some(
            of_types
                .iter()
                .filter_map(|id| schema.type_by_id(*id))
                .collect(),
        ),
        MetaType::Interface(InterfaceMeta { id, .. }) => {
            let possible = collect_schema_types(schema)
                .iter()
                .filter(|c| match c {
                    MetaType::Object(ObjectMeta { interfaces, .. }) => interfaces.contains(id),
                    MetaType::Scalar(_)
                    | MetaType::Enum(_)
                    | MetaType::Interface(_)
                    | MetaType::Union(_)
                    | MetaType::InputObject(_) => false,
                })
                .map(TypeType::Concrete)
                .collect::<Vec<_>>();
            crate::__introspection_trace!("{} possible types of {t}", possible.len());
            Some(possible)
        }
        MetaType::Scalar(_) | MetaType::Object(_) | MetaType::Enum(_) | MetaType::InputObject(_) => {
            None
        }
    }
}
