//! Reflection of a schema's own structure.
//!
//! [`TypeCollector`] gathers the named types reachable from a root, the
//! `resolve_*` projections answer kind-specific questions about a single type
//! value, and [`introspect()`] runs the canonical introspection query.

mod collector;
mod query;
mod resolve;

use crate::{executor::ExecutionResult, schema::model::SchemaType, value::ScalarValue};

pub use self::{
    collector::{TypeCollector, TypeSet, collect_schema_types, collect_types},
    resolve::{
        ResolvedEnumValue, resolve_enum_values, resolve_fields, resolve_input_fields,
        resolve_interfaces, resolve_of_type, resolve_possible_types,
    },
};

/// The desired GraphQL introspection format for the canonical query
/// (<https://github.com/graphql/graphql-js/blob/8c96dc8276f2de27b8af9ffbd71a4597d483523f/src/utilities/introspectionQuery.js#L21>)
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum IntrospectionFormat {
    /// The canonical GraphQL introspection query.
    #[default]
    All,
    /// The canonical GraphQL introspection query without descriptions.
    WithoutDescriptions,
}

/// Runs the canonical introspection query against the `schema`.
///
/// The result has the shape of the `data` entry of a GraphQL response, and
/// serializes to the JSON that client tooling expects.
pub fn introspect<S: ScalarValue>(
    schema: &SchemaType<S>,
    format: IntrospectionFormat,
) -> ExecutionResult<S> {
    let selection_set = query::introspection_selection(format);
    schema.resolve_root(&selection_set)
}
