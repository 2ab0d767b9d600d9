use pretty_assertions::assert_eq;
use serde_json::{Value as Json, json, to_value};

use crate::{
    DefaultScalarValue, FieldError, IntrospectionFormat, Registry, Selection, Value, introspect,
    meta::{Argument, EnumValue, Field},
    tests::fixtures::blog_schema,
};

type S = Selection<DefaultScalarValue>;

fn run(selection_set: &[S]) -> Result<Json, FieldError> {
    let schema = blog_schema();
    let value = schema.resolve_root(selection_set)?;
    Ok(to_value(&value).expect("serializable"))
}

fn type_ref() -> Vec<S> {
    vec![
        S::field("kind"),
        S::field("name"),
        S::field("ofType").select([
            S::field("kind"),
            S::field("name"),
            S::field("ofType").select([S::field("kind"), S::field("name")]),
        ]),
    ]
}

#[test]
fn query_type_name() {
    let data = run(&[S::field("__schema")
        .select([S::field("queryType").select([S::field("name")])])])
    .expect("resolvable");

    assert_eq!(data, json!({"__schema": {"queryType": {"name": "Query"}}}));
}

#[test]
fn type_by_name_and_kind() {
    let data = run(&[
        S::field("__type")
            .argument("name", "User")
            .select([S::field("name"), S::field("kind")]),
        S::field("__type")
            .alias("missing")
            .argument("name", "Nope")
            .select([S::field("name")]),
        S::field("__typename"),
    ])
    .expect("resolvable");

    assert_eq!(
        data,
        json!({
            "__type": {"name": "User", "kind": "OBJECT"},
            "missing": null,
            "__typename": "Query",
        }),
    );
}

#[test]
fn object_fields_and_interfaces() {
    let data = run(&[S::field("__type").argument("name", "Post").select([
        S::field("fields").select([S::field("name"), S::field("type").select(type_ref())]),
        S::field("interfaces").select([S::field("name")]),
        S::field("possibleTypes").select([S::field("name")]),
        S::field("enumValues").select([S::field("name")]),
        S::field("ofType").select([S::field("name")]),
    ])])
    .expect("resolvable");

    assert_eq!(
        data,
        json!({
            "__type": {
                "fields": [
                    {"name": "id", "type": {
                        "kind": "NON_NULL", "name": null,
                        "ofType": {"kind": "SCALAR", "name": "ID", "ofType": null},
                    }},
                    {"name": "title", "type": {
                        "kind": "NON_NULL", "name": null,
                        "ofType": {"kind": "SCALAR", "name": "String", "ofType": null},
                    }},
                    {"name": "tags", "type": {
                        "kind": "NON_NULL", "name": null,
                        "ofType": {
                            "kind": "LIST", "name": null,
                            "ofType": {"kind": "NON_NULL", "name": null},
                        },
                    }},
                    {"name": "author", "type": {
                        "kind": "NON_NULL", "name": null,
                        "ofType": {"kind": "OBJECT", "name": "User", "ofType": null},
                    }},
                    {"name": "color", "type": {
                        "kind": "ENUM", "name": "Color", "ofType": null,
                    }},
                    {"name": "createdAt", "type": {
                        "kind": "NON_NULL", "name": null,
                        "ofType": {"kind": "SCALAR", "name": "DateTime", "ofType": null},
                    }},
                ],
                "interfaces": [{"name": "Node"}],
                "possibleTypes": null,
                "enumValues": null,
                "ofType": null,
            },
        }),
    );
}

#[test]
fn include_deprecated_defaults_to_false() {
    let select = |include: Option<bool>| {
        let mut fields = S::field("fields");
        let mut values = S::field("enumValues");
        if let Some(include) = include {
            fields = fields.argument("includeDeprecated", include);
            values = values.argument("includeDeprecated", include);
        }
        [
            S::field("__type")
                .alias("post")
                .argument("name", "Post")
                .select([fields.select([S::field("name"), S::field("isDeprecated")])]),
            S::field("__type")
                .alias("color")
                .argument("name", "Color")
                .select([values.select([S::field("name"), S::field("deprecationReason")])]),
        ]
    };

    let data = run(&select(None)).expect("resolvable");
    assert_eq!(data.pointer("/post/fields").and_then(Json::as_array).map(Vec::len), Some(6));
    assert_eq!(
        data.pointer("/color/enumValues"),
        Some(&json!([
            {"name": "RED", "deprecationReason": ""},
            {"name": "BLUE", "deprecationReason": ""},
        ])),
    );

    let data = run(&select(Some(true))).expect("resolvable");
    assert_eq!(
        data.pointer("/post/fields/6"),
        Some(&json!({"name": "legacyId", "isDeprecated": true})),
    );
    assert_eq!(
        data.pointer("/color/enumValues/2/name"),
        Some(&json!("CRIMSON")),
    );
}

#[test]
fn abstract_types_and_input_values() {
    let data = run(&[
        S::field("__type")
            .alias("node")
            .argument("name", "Node")
            .select([
                S::field("kind"),
                S::field("possibleTypes").select([S::field("name")]),
                S::field("interfaces").select([S::field("name")]),
            ]),
        S::field("__type")
            .alias("filter")
            .argument("name", "PostFilter")
            .select([
                S::field("kind"),
                S::field("fields").select([S::field("name")]),
                S::field("inputFields").select([
                    S::field("name"),
                    S::field("type").select(type_ref()),
                    S::field("defaultValue"),
                ]),
            ]),
        S::field("__type")
            .alias("dateTime")
            .argument("name", "DateTime")
            .select([S::field("kind"), S::field("specifiedByURL")]),
    ])
    .expect("resolvable");

    assert_eq!(
        data,
        json!({
            "node": {
                "kind": "INTERFACE",
                "possibleTypes": [{"name": "User"}, {"name": "Post"}],
                "interfaces": null,
            },
            "filter": {
                "kind": "INPUT_OBJECT",
                "fields": null,
                "inputFields": [
                    {
                        "name": "tags",
                        "type": {
                            "kind": "LIST", "name": null,
                            "ofType": {
                                "kind": "NON_NULL", "name": null,
                                "ofType": {"kind": "SCALAR", "name": "String"},
                            },
                        },
                        "defaultValue": null,
                    },
                    {
                        "name": "first",
                        "type": {"kind": "SCALAR", "name": "Int", "ofType": null},
                        "defaultValue": "10",
                    },
                ],
            },
            "dateTime": {
                "kind": "SCALAR",
                "specifiedByURL": "https://tools.ietf.org/html/rfc3339",
            },
        }),
    );
}

#[test]
fn field_arguments() {
    let data = run(&[S::field("__type").argument("name", "Query").select([S::field("fields")
        .select([
            S::field("name"),
            S::field("args").select([S::field("name"), S::field("description")]),
        ])])])
    .expect("resolvable");

    assert_eq!(
        data,
        json!({
            "__type": {
                "fields": [
                    {"name": "node", "args": [{"name": "id", "description": null}]},
                    {"name": "me", "args": []},
                    {"name": "search", "args": [{"name": "term", "description": null}]},
                    {"name": "posts", "args": [{"name": "filter", "description": null}]},
                ],
            },
        }),
    );
}

#[test]
fn enum_defaults_are_reported_by_name() {
    let mut registry = Registry::<DefaultScalarValue>::new();
    let color = registry.get_type("Color");
    let int = registry.get_type("Int");
    let meta = registry
        .build_enum_type(
            "Color",
            &[EnumValue::new("RED", 1), EnumValue::new("BLUE", 2)],
        )
        .into_meta();
    registry.define(meta);
    let meta = registry
        .build_object_type(
            "Query",
            &[Field::new("paint", int.clone())
                .argument(Argument::new("color", color.clone()).default_value(2))
                .argument(
                    Argument::new("palette", color.list())
                        .default_value(Value::list(vec![Value::scalar(1), Value::scalar(2)])),
                )
                .argument(Argument::new("times", int).default_value(2))],
        )
        .into_meta();
    registry.define(meta);
    let schema = registry.finish("Query", None).expect("valid schema");

    let data = schema
        .resolve_root(&[S::field("__type").argument("name", "Query").select([
            S::field("fields").select([S::field("args").select([
                S::field("name"),
                S::field("defaultValue"),
            ])]),
        ])])
        .expect("resolvable");

    assert_eq!(
        to_value(&data).expect("serializable"),
        json!({
            "__type": {
                "fields": [{"args": [
                    {"name": "color", "defaultValue": "BLUE"},
                    {"name": "palette", "defaultValue": "[RED, BLUE]"},
                    {"name": "times", "defaultValue": "2"},
                ]}],
            },
        }),
    );
}

#[test]
fn errors_are_reported() {
    assert_eq!(
        run(&[S::field("__type")
            .argument("name", "User")
            .select([S::field("color")])]),
        Err(FieldError::UnknownField {
            type_name: "__Type".into(),
            field_name: "color".into(),
        }),
    );
    assert_eq!(
        run(&[S::field("__type").select([S::field("name")])]),
        Err(FieldError::InvalidArgument {
            field_name: "__type".into(),
            argument: "name".into(),
        }),
    );
    assert_eq!(
        run(&[S::field("__schema")]),
        Err(FieldError::MissingSelectionSet {
            type_name: "__Schema".into(),
        }),
    );
    assert_eq!(
        run(&[S::field("me").select([S::field("name")])]),
        Err(FieldError::UnknownField {
            type_name: "Query".into(),
            field_name: "me".into(),
        }),
    );
}

#[test]
fn canonical_query_lists_reachable_types() {
    let schema = blog_schema();
    let data = introspect(&schema, IntrospectionFormat::default()).expect("resolvable");
    let json = to_value(&data).expect("serializable");

    assert_eq!(
        json.pointer("/__schema/mutationType"),
        Some(&json!({"name": "Mutation"})),
    );

    let types = json
        .pointer("/__schema/types")
        .and_then(Json::as_array)
        .expect("`types` is a list");
    let names = types
        .iter()
        .filter_map(|t| t.get("name").and_then(Json::as_str))
        .collect::<Vec<_>>();
    assert!(names.contains(&"__TypeKind"));
    assert!(names.contains(&"SearchResult"));
    assert!(!names.contains(&"Orphan"));

    let type_kind = types
        .iter()
        .find(|t| t.get("name") == Some(&json!("__TypeKind")))
        .expect("`__TypeKind` is listed");
    assert_eq!(type_kind.get("kind"), Some(&json!("ENUM")));
    assert_eq!(
        type_kind
            .get("enumValues")
            .and_then(Json::as_array)
            .map(|values| values
                .iter()
                .filter_map(|v| v.get("name").and_then(Json::as_str))
                .collect::<Vec<_>>()),
        Some(vec![
            "SCALAR",
            "OBJECT",
            "INTERFACE",
            "UNION",
            "ENUM",
            "INPUT_OBJECT",
            "LIST",
            "NON_NULL",
        ]),
    );
}

#[test]
fn canonical_query_without_descriptions() {
    let schema = blog_schema();

    let all = introspect(&schema, IntrospectionFormat::All).expect("resolvable");
    let bare = introspect(&schema, IntrospectionFormat::WithoutDescriptions).expect("resolvable");
    let describe = |v: &Value<DefaultScalarValue>| to_value(v).expect("serializable").to_string();

    assert!(describe(&all).contains(r#""description":"An object with an ID""#));
    assert!(!describe(&bare).contains(r#""description":"#));
}
