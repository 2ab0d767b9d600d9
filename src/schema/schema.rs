use itertools::Itertools as _;

use crate::{
    executor::{ExecutionResult, Executor, FieldError},
    introspection::{
        ResolvedEnumValue, collect_schema_types, resolve_enum_values, resolve_fields,
        resolve_input_fields, resolve_interfaces, resolve_of_type, resolve_possible_types,
    },
    schema::{
        meta::{Argument, EnumMeta, Field, MetaType},
        model::{SchemaType, TypeType},
        registry::Registry,
    },
    types::{
        base::{Arguments, GraphQLValue, TypeKind},
        enums::GraphQLEnum as _,
    },
    value::{ScalarValue, Value},
};

/// Declares the introspection meta types in the `registry`, returning the
/// `__schema` and `__type` meta-fields to attach to the query type.
pub(crate) fn register_meta_types<S: ScalarValue>(registry: &mut Registry<S>) -> Vec<Field<S>> {
    let string = registry.get_type("String");
    let boolean = registry.get_type("Boolean");
    let schema = registry.get_type("__Schema");
    let type_ = registry.get_type("__Type");
    let field = registry.get_type("__Field");
    let input_value = registry.get_type("__InputValue");
    let enum_value = registry.get_type("__EnumValue");

    let meta = registry.build_enum_type_from::<TypeKind>().into_meta();
    let type_kind = meta.as_type();
    registry.define(meta);

    let include_deprecated = Argument::new("includeDeprecated", boolean.clone()).default_value(false);

    let meta = registry
        .build_object_type(
            "__Schema",
            &[
                Field::new("types", type_.clone().non_null().list().non_null())
                    .description("A list of all types supported by this server."),
                Field::new("queryType", type_.clone().non_null())
                    .description("The type that query operations will be rooted at."),
                Field::new("mutationType", type_.clone()).description(
                    "If this server supports mutation, the type that mutation operations \
                     will be rooted at.",
                ),
            ],
        )
        .description(
            "A GraphQL Schema defines the capabilities of a GraphQL server. It exposes all \
             available types on the server, as well as the entry points for query and \
             mutation operations.",
        )
        .into_meta();
    registry.define(meta);

    let meta = registry
        .build_object_type(
            "__Type",
            &[
                Field::new("name", string.clone()),
                Field::new("kind", type_kind.non_null()),
                Field::new("description", string.clone()),
                Field::new("specifiedByURL", string.clone()),
                Field::new("fields", field.clone().non_null().list())
                    .argument(include_deprecated.clone()),
                Field::new("interfaces", type_.clone().non_null().list()),
                Field::new("possibleTypes", type_.clone().non_null().list()),
                Field::new("enumValues", enum_value.clone().non_null().list())
                    .argument(include_deprecated),
                Field::new("inputFields", input_value.clone().non_null().list()),
                Field::new("ofType", type_.clone()),
            ],
        )
        .description(
            "The fundamental unit of any GraphQL Schema is the type. There are many kinds of \
             types in GraphQL as represented by the `__TypeKind` enum.",
        )
        .into_meta();
    registry.define(meta);

    let meta = registry
        .build_object_type(
            "__Field",
            &[
                Field::new("name", string.clone().non_null()),
                Field::new("description", string.clone()),
                Field::new("args", input_value.clone().non_null().list().non_null()),
                Field::new("type", type_.clone().non_null()),
                Field::new("isDeprecated", boolean.clone().non_null()),
                Field::new("deprecationReason", string.clone()),
            ],
        )
        .description(
            "Object and Interface types are described by a list of Fields, each of which has \
             a name, potentially a list of arguments, and a return type.",
        )
        .into_meta();
    registry.define(meta);

    let meta = registry
        .build_object_type(
            "__InputValue",
            &[
                Field::new("name", string.clone().non_null()),
                Field::new("description", string.clone()),
                Field::new("type", type_.clone().non_null()),
                Field::new("defaultValue", string.clone()).description(
                    "A GraphQL-formatted string representing the default value for this input \
                     value.",
                ),
            ],
        )
        .description(
            "Arguments provided to Fields or Directives and the input fields of an \
             InputObject are represented as Input Values which describe their type and \
             optionally a default value.",
        )
        .into_meta();
    registry.define(meta);

    let meta = registry
        .build_object_type(
            "__EnumValue",
            &[
                Field::new("name", string.clone().non_null()),
                Field::new("description", string.clone()),
                Field::new("isDeprecated", boolean.non_null()),
                Field::new("deprecationReason", string.clone()),
            ],
        )
        .description(
            "One possible value for a given Enum. Enum values are unique values, not a \
             placeholder for a string or numeric value.",
        )
        .into_meta();
    registry.define(meta);

    vec![
        Field::new("__schema", schema.non_null())
            .description("Access the current type schema of this server."),
        Field::new("__type", type_)
            .argument(Argument::new("name", string.non_null()))
            .description("Request the type information of a single type."),
    ]
}

/// Query root answering the `__schema` and `__type` meta-fields.
pub(crate) struct IntrospectionRoot<'a, S>(&'a SchemaType<S>);

impl<'a, S> IntrospectionRoot<'a, S> {
    pub(crate) fn new(schema: &'a SchemaType<S>) -> Self {
        Self(schema)
    }
}

impl<S: ScalarValue> GraphQLValue<S> for IntrospectionRoot<'_, S> {
    fn type_name(&self) -> Option<&str> {
        Some(self.0.concrete_query_type().name())
    }

    fn resolve_field(
        &self,
        field_name: &str,
        arguments: &Arguments<S>,
        executor: &Executor<S>,
    ) -> ExecutionResult<S> {
        match field_name {
            "__schema" => executor.resolve(self.0),
            "__type" => {
                let name = arguments.get::<String>("name").ok_or_else(|| {
                    FieldError::InvalidArgument {
                        field_name: field_name.into(),
                        argument: "name".into(),
                    }
                })?;
                executor.resolve(&self.0.type_by_name(&name))
            }
            _ => Err(unknown_field(self.0.concrete_query_type().name(), field_name)),
        }
    }
}

impl<S: ScalarValue> GraphQLValue<S> for SchemaType<S> {
    fn type_name(&self) -> Option<&str> {
        Some("__Schema")
    }

    fn resolve_field(
        &self,
        field_name: &str,
        _: &Arguments<S>,
        executor: &Executor<S>,
    ) -> ExecutionResult<S> {
        match field_name {
            "types" => executor.resolve(&collect_schema_types(self).into_types()),
            "queryType" => executor.resolve(&self.query_type()),
            "mutationType" => executor.resolve(&self.mutation_type()),
            _ => Err(unknown_field("__Schema", field_name)),
        }
    }
}

impl<S: ScalarValue> GraphQLValue<S> for TypeType<'_, S> {
    fn type_name(&self) -> Option<&str> {
        Some("__Type")
    }

    fn resolve_field(
        &self,
        field_name: &str,
        arguments: &Arguments<S>,
        executor: &Executor<S>,
    ) -> ExecutionResult<S> {
        let schema = executor.schema();
        let include_deprecated = || arguments.get("includeDeprecated").unwrap_or(false);

        match field_name {
            "name" => executor.resolve(&self.name()),
            "description" => executor.resolve(&self.description()),
            "kind" => {
                let kind = self.kind();
                let Some(kinds) = schema.type_kind_enum() else {
                    return Ok(Value::scalar(kind.to_string()));
                };
                let name = kinds.validate(&kind.discriminant().into())?;
                Ok(Value::scalar(name.to_owned()))
            }
            "specifiedByURL" => {
                executor.resolve(&self.to_concrete().and_then(MetaType::specified_by_url))
            }
            "ofType" => executor.resolve(&resolve_of_type(self)),
            "inputFields" => executor.resolve(&resolve_input_fields(self)),
            "enumValues" => {
                let include_deprecated = include_deprecated();
                executor.resolve(&resolve_enum_values(self).map(|values| {
                    values
                        .into_iter()
                        .filter(|v| include_deprecated || !v.is_deprecated)
                        .collect::<Vec<_>>()
                }))
            }
            "fields" => {
                let include_deprecated = include_deprecated();
                executor.resolve(&resolve_fields(self).map(|fields| {
                    fields
                        .into_iter()
                        .filter(|f| include_deprecated || !f.deprecation_status.is_deprecated())
                        .collect::<Vec<_>>()
                }))
            }
            "interfaces" => executor.resolve(&resolve_interfaces(self, schema)),
            "possibleTypes" => executor.resolve(&resolve_possible_types(self, schema)),
            _ => Err(unknown_field("__Type", field_name)),
        }
    }
}

impl<S: ScalarValue> GraphQLValue<S> for Field<S> {
    fn type_name(&self) -> Option<&str> {
        Some("__Field")
    }

    fn resolve_field(
        &self,
        field_name: &str,
        _: &Arguments<S>,
        executor: &Executor<S>,
    ) -> ExecutionResult<S> {
        match field_name {
            "name" => executor.resolve(&self.name),
            "description" => executor.resolve(&self.description),
            "args" => executor.resolve(self.arguments.as_deref().unwrap_or_default()),
            "type" => executor.resolve(&executor.schema().make_type(&self.field_type)),
            "isDeprecated" => executor.resolve(&self.deprecation_status.is_deprecated()),
            "deprecationReason" => executor.resolve(&self.deprecation_status.reason()),
            _ => Err(unknown_field("__Field", field_name)),
        }
    }
}

impl<S: ScalarValue> GraphQLValue<S> for Argument<S> {
    fn type_name(&self) -> Option<&str> {
        Some("__InputValue")
    }

    fn resolve_field(
        &self,
        field_name: &str,
        _: &Arguments<S>,
        executor: &Executor<S>,
    ) -> ExecutionResult<S> {
        match field_name {
            "name" => executor.resolve(&self.name),
            "description" => executor.resolve(&self.description),
            "type" => executor.resolve(&executor.schema().make_type(&self.arg_type)),
            "defaultValue" => {
                let literal = self.default_value.as_ref().map(|v| {
                    match executor.schema().concrete_type_by_id(self.arg_type.innermost_id()) {
                        Some(MetaType::Enum(meta)) => enum_literal(v, meta),
                        _ => v.to_string(),
                    }
                });
                executor.resolve(&literal)
            }
            _ => Err(unknown_field("__InputValue", field_name)),
        }
    }
}

impl<S: ScalarValue> GraphQLValue<S> for ResolvedEnumValue<'_, S> {
    fn type_name(&self) -> Option<&str> {
        Some("__EnumValue")
    }

    fn resolve_field(
        &self,
        field_name: &str,
        _: &Arguments<S>,
        executor: &Executor<S>,
    ) -> ExecutionResult<S> {
        match field_name {
            "name" => executor.resolve(self.name),
            "description" => executor.resolve(self.description),
            "isDeprecated" => executor.resolve(&self.is_deprecated),
            "deprecationReason" => executor.resolve(self.deprecation_reason),
            _ => Err(unknown_field("__EnumValue", field_name)),
        }
    }
}

/// Renders a default value of an enum-typed input with declared names in
/// place of runtime values.
fn enum_literal<S: ScalarValue>(value: &Value<S>, meta: &EnumMeta<S>) -> String {
    match value {
        Value::Scalar(s) => meta
            .resolve(s)
            .map_or_else(|| value.to_string(), str::to_owned),
        Value::List(list) => format!(
            "[{}]",
            list.iter().map(|v| enum_literal(v, meta)).format(", "),
        ),
        Value::Null | Value::Object(_) => value.to_string(),
    }
}

fn unknown_field(type_name: &str, field_name: &str) -> FieldError {
    FieldError::UnknownField {
        type_name: type_name.into(),
        field_name: field_name.into(),
    }
}
