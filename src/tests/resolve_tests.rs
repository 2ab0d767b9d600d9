use pretty_assertions::assert_eq;

use crate::{
    DefaultScalarValue, Registry, SchemaType, TypeKind, TypeType,
    introspection::{
        ResolvedEnumValue, resolve_enum_values, resolve_fields, resolve_input_fields,
        resolve_interfaces, resolve_of_type, resolve_possible_types,
    },
    meta::Field,
    tests::fixtures::blog_schema,
};

fn named<'a>(schema: &'a SchemaType, name: &str) -> TypeType<'a, DefaultScalarValue> {
    schema
        .type_by_name(name)
        .unwrap_or_else(|| panic!("`{name}` is defined"))
}

fn sorted_names(types: Option<Vec<TypeType<'_, DefaultScalarValue>>>) -> Option<Vec<String>> {
    types.map(|types| {
        let mut names = types.iter().map(ToString::to_string).collect::<Vec<_>>();
        names.sort();
        names
    })
}

#[test]
fn projections_apply_only_to_their_kinds() {
    let schema = blog_schema();

    let cases = [
        ("DateTime", TypeKind::Scalar),
        ("User", TypeKind::Object),
        ("Node", TypeKind::Interface),
        ("SearchResult", TypeKind::Union),
        ("Color", TypeKind::Enum),
        ("PostFilter", TypeKind::InputObject),
    ];
    for (name, kind) in cases {
        let t = named(&schema, name);
        assert_eq!(t.kind(), kind);

        assert!(resolve_of_type(&t).is_none(), "{name}.ofType");
        assert_eq!(
            resolve_input_fields(&t).is_some(),
            kind == TypeKind::InputObject,
            "{name}.inputFields",
        );
        assert_eq!(
            resolve_enum_values(&t).is_some(),
            kind == TypeKind::Enum,
            "{name}.enumValues",
        );
        assert_eq!(
            resolve_fields(&t).is_some(),
            matches!(kind, TypeKind::Object | TypeKind::Interface),
            "{name}.fields",
        );
        assert_eq!(
            resolve_interfaces(&t, &schema).is_some(),
            kind == TypeKind::Object,
            "{name}.interfaces",
        );
        assert_eq!(
            resolve_possible_types(&t, &schema).is_some(),
            matches!(kind, TypeKind::Interface | TypeKind::Union),
            "{name}.possibleTypes",
        );
    }
}

#[test]
fn wrappers_expose_only_of_type() {
    let schema = blog_schema();
    let user = named(&schema, "User");
    let list = TypeType::List(Box::new(user.clone()));
    let non_null = TypeType::NonNull(Box::new(list.clone()));

    assert_eq!(non_null.kind(), TypeKind::NonNull);
    assert_eq!(resolve_of_type(&non_null), Some(&list));
    assert_eq!(resolve_of_type(&list), Some(&user));
    assert_eq!(resolve_of_type(&user), None);

    assert!(resolve_fields(&non_null).is_none());
    assert!(resolve_input_fields(&list).is_none());
    assert!(resolve_enum_values(&list).is_none());
    assert!(resolve_interfaces(&list, &schema).is_none());
    assert!(resolve_possible_types(&list, &schema).is_none());
}

#[test]
fn meta_fields_are_never_listed() {
    let schema = blog_schema();

    for name in ["Query", "User"] {
        let fields = resolve_fields(&named(&schema, name)).expect("object type");
        assert!(
            fields.iter().all(|f| f.name != "__type" && f.name != "__schema"),
            "`{name}` lists a meta-field",
        );
    }

    let user = named(&schema, "User");
    let fields = resolve_fields(&user).expect("object type");
    assert_eq!(
        fields.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(),
        ["id", "name", "friends", "bestFriend", "posts"],
    );
    // The declaration itself is untouched.
    assert!(user.to_concrete().and_then(|t| t.field_by_name("__type")).is_some());
}

#[test]
fn deprecated_fields_are_all_projected() {
    let schema = blog_schema();
    let fields = resolve_fields(&named(&schema, "Post")).expect("object type");

    let legacy = fields
        .iter()
        .find(|f| f.name == "legacyId")
        .expect("deprecated fields are kept");
    assert_eq!(legacy.deprecation_status.reason(), Some("Use `id`"));
}

#[test]
fn input_fields_keep_declaration_order() {
    let schema = blog_schema();
    let fields = resolve_input_fields(&named(&schema, "PostFilter")).expect("input object");

    assert_eq!(
        fields.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(),
        ["tags", "first"],
    );
    assert_eq!(
        fields[1].default_value.as_ref().map(ToString::to_string),
        Some("10".into()),
    );
}

#[test]
fn enum_values_are_defaulted() {
    let schema = blog_schema();
    let values = resolve_enum_values(&named(&schema, "Color")).expect("enum type");

    assert_eq!(
        values,
        [
            ResolvedEnumValue {
                name: "RED",
                value: &DefaultScalarValue::from(1),
                description: "The color red",
                is_deprecated: false,
                deprecation_reason: "",
            },
            ResolvedEnumValue {
                name: "BLUE",
                value: &DefaultScalarValue::from(2),
                description: "",
                is_deprecated: false,
                deprecation_reason: "",
            },
            ResolvedEnumValue {
                name: "CRIMSON",
                value: &DefaultScalarValue::from(1),
                description: "",
                is_deprecated: true,
                deprecation_reason: "",
            },
        ],
    );

    let Some(crate::meta::MetaType::Enum(color)) = schema.concrete_type_by_name("Color") else {
        panic!("Color is an enum");
    };
    assert_eq!(color.values[1].description, None);
}

#[test]
fn interfaces_default_to_empty() {
    let schema = blog_schema();

    assert_eq!(
        sorted_names(resolve_interfaces(&named(&schema, "Post"), &schema)),
        Some(vec!["Node".into()]),
    );
    assert_eq!(
        sorted_names(resolve_interfaces(&named(&schema, "Query"), &schema)),
        Some(vec![]),
    );
}

#[test]
fn interface_possible_types_are_reachable_implementors() {
    let schema = blog_schema();
    let node = named(&schema, "Node");

    let possible = resolve_possible_types(&node, &schema).expect("interface type");
    assert!(possible.iter().all(|t| t.kind() == TypeKind::Object));
    assert!(possible.iter().all(|t| {
        resolve_interfaces(t, &schema).is_some_and(|ifaces| ifaces.contains(&node))
    }));
    assert_eq!(
        sorted_names(Some(possible)),
        Some(vec!["Post".into(), "User".into()]),
    );
}

#[test]
fn interface_without_implementors_has_no_possible_types() {
    let mut registry = Registry::<DefaultScalarValue>::new();
    let id = registry.get_type("ID").non_null();
    let named_iface = registry.get_type("Named");
    let meta = registry
        .build_interface_type("Named", &[Field::new("id", id)])
        .into_meta();
    registry.define(meta);
    let meta = registry
        .build_object_type("Query", &[Field::new("named", named_iface)])
        .into_meta();
    registry.define(meta);
    let schema = registry.finish("Query", None).expect("valid schema");

    assert_eq!(
        resolve_possible_types(&named(&schema, "Named"), &schema),
        Some(vec![]),
    );
}

#[test]
fn union_possible_types_are_its_members() {
    let schema = blog_schema();

    let members = resolve_possible_types(&named(&schema, "SearchResult"), &schema)
        .expect("union type");
    assert_eq!(
        members.iter().map(ToString::to_string).collect::<Vec<_>>(),
        ["User", "Post"],
    );
}

#[test]
fn union_members_need_not_be_reachable_otherwise() {
    let mut registry = Registry::<DefaultScalarValue>::new();
    let int = registry.get_type("Int");
    let lonely = registry.get_type("Lonely");
    let meta = registry
        .build_object_type("Lonely", &[Field::new("n", int.clone())])
        .into_meta();
    registry.define(meta);
    let meta = registry.build_union_type("Anything", &[lonely]).into_meta();
    registry.define(meta);
    let meta = registry
        .build_object_type("Query", &[Field::new("n", int)])
        .into_meta();
    registry.define(meta);
    let schema = registry.finish("Query", None).expect("valid schema");

    assert_eq!(
        sorted_names(resolve_possible_types(&named(&schema, "Anything"), &schema)),
        Some(vec!["Lonely".into()]),
    );
}
