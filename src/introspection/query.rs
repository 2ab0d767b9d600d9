//! The canonical introspection query, expressed as a selection tree.
//!
//! Follows graphql-js' `getIntrospectionQuery()` minus the parts this crate
//! doesn't model: `subscriptionType` and `directives` are not selected, since
//! schemas here have no subscription root and declare no directives.

use crate::{ast::Selection, introspection::IntrospectionFormat, value::ScalarValue};

/// Levels of `ofType` a type reference is unwrapped to.
const OF_TYPE_DEPTH: usize = 7;

pub(crate) fn introspection_selection<S: ScalarValue>(
    format: IntrospectionFormat,
) -> Vec<Selection<S>> {
    vec![Selection::field("__schema").select([
        Selection::field("queryType").select([Selection::field("name")]),
        Selection::field("mutationType").select([Selection::field("name")]),
        Selection::field("types").select(full_type(format)),
    ])]
}

fn full_type<S: ScalarValue>(format: IntrospectionFormat) -> Vec<Selection<S>> {
    let mut fields = vec![Selection::field("kind"), Selection::field("name")];
    fields.extend(description(format));
    fields.push(Selection::field("specifiedByURL"));

    let mut field = vec![Selection::field("name")];
    field.extend(description(format));
    field.extend([
        Selection::field("args").select(input_value(format)),
        Selection::field("type").select(type_ref()),
        Selection::field("isDeprecated"),
        Selection::field("deprecationReason"),
    ]);

    let mut enum_value = vec![Selection::field("name")];
    enum_value.extend(description(format));
    enum_value.extend([
        Selection::field("isDeprecated"),
        Selection::field("deprecationReason"),
    ]);

    fields.extend([
        Selection::field("fields")
            .argument("includeDeprecated", true)
            .select(field),
        Selection::field("inputFields").select(input_value(format)),
        Selection::field("interfaces").select(type_ref()),
        Selection::field("enumValues")
            .argument("includeDeprecated", true)
            .select(enum_value),
        Selection::field("possibleTypes").select(type_ref()),
    ]);
    fields
}

fn input_value<S: ScalarValue>(format: IntrospectionFormat) -> Vec<Selection<S>> {
    let mut fields = vec![Selection::field("name")];
    fields.extend(description(format));
    fields.extend([
        Selection::field("type").select(type_ref()),
        Selection::field("defaultValue"),
    ]);
    fields
}

fn type_ref<S: ScalarValue>() -> Vec<Selection<S>> {
    let mut fields = vec![Selection::field("kind"), Selection::field("name")];
    for _ in 0..OF_TYPE_DEPTH {
        fields = vec![
            Selection::field("kind"),
            Selection::field("name"),
            Selection::field("ofType").select(fields),
        ];
    }
    fields
}

fn description<S>(format: IntrospectionFormat) -> Option<Selection<S>> {
    match format {
        IntrospectionFormat::All => Some(Selection::field("description")),
        IntrospectionFormat::WithoutDescriptions => None,
    }
}
