use arcstr::ArcStr;
use derive_more::with_trait::Display;
use indexmap::IndexMap;

use crate::{
    ast::Selection,
    executor::{ExecutionResult, Executor, FieldError},
    schema::meta::{Argument, EnumValue},
    types::enums::EnumDeclaration,
    value::{Object, ScalarValue, Value},
};

/// GraphQL type kind
///
/// The GraphQL specification defines a number of type kinds - the meta type
/// of a type.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum TypeKind {
    /// ## Scalar types
    ///
    /// Scalar types appear as the leaf nodes of GraphQL queries. Strings,
    /// numbers, and booleans are the built in types, and while it's possible
    /// to define your own, it's relatively uncommon.
    #[display("SCALAR")]
    Scalar,

    /// ## Object types
    ///
    /// The most common type to be implemented by users. Objects have fields
    /// and can implement interfaces.
    #[display("OBJECT")]
    Object,

    /// ## Interface types
    ///
    /// Interface types are used to represent overlapping fields between
    /// multiple types, and can be queried for their concrete type.
    #[display("INTERFACE")]
    Interface,

    /// ## Union types
    ///
    /// Unions are similar to interfaces but can not contain any fields on
    /// their own.
    #[display("UNION")]
    Union,

    /// ## Enum types
    ///
    /// Like scalars, enum types appear as the leaf nodes of GraphQL queries.
    #[display("ENUM")]
    Enum,

    /// ## Input objects
    ///
    /// Represents complex values provided in queries _into_ the system.
    #[display("INPUT_OBJECT")]
    InputObject,

    /// ## List types
    ///
    /// Represent lists of other types.
    #[display("LIST")]
    List,

    /// ## Non-null types
    ///
    /// In GraphQL, nullable types are the default. By putting a `!` after a
    /// type, it becomes non-nullable.
    #[display("NON_NULL")]
    NonNull,
}

impl TypeKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Scalar,
        Self::Object,
        Self::Interface,
        Self::Union,
        Self::Enum,
        Self::InputObject,
        Self::List,
        Self::NonNull,
    ];

    /// Returns the runtime value `__TypeKind` maps this kind's name to.
    pub fn discriminant(self) -> i32 {
        match self {
            Self::Scalar => 0,
            Self::Object => 1,
            Self::Interface => 2,
            Self::Union => 3,
            Self::Enum => 4,
            Self::InputObject => 5,
            Self::List => 6,
            Self::NonNull => 7,
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Scalar => "Indicates this type is a scalar.",
            Self::Object => {
                "Indicates this type is an object. `fields` and `interfaces` are valid fields."
            }
            Self::Interface => {
                "Indicates this type is an interface. `fields` and `possibleTypes` are valid fields."
            }
            Self::Union => "Indicates this type is a union. `possibleTypes` is a valid field.",
            Self::Enum => "Indicates this type is an enum. `enumValues` is a valid field.",
            Self::InputObject => {
                "Indicates this type is an input object. `inputFields` is a valid field."
            }
            Self::List => "Indicates this type is a list. `ofType` is a valid field.",
            Self::NonNull => "Indicates this type is a non-null. `ofType` is a valid field.",
        }
    }
}

impl<S: ScalarValue> EnumDeclaration<S> for TypeKind {
    const NAME: &'static str = "__TypeKind";
    const DESCRIPTION: Option<&'static str> =
        Some("An enum describing what kind of type a given `__Type` is.");

    fn values() -> Vec<EnumValue<S>> {
        Self::ALL
            .iter()
            .map(|k| EnumValue::new(k.to_string(), k.discriminant()).description(k.description()))
            .collect()
    }
}

/// Conversion of literal argument values into Rust values.
pub trait FromInputValue<S>: Sized {
    /// Performs the conversion, returning `None` if the value has the wrong
    /// shape.
    fn from_input_value(v: &Value<S>) -> Option<Self>;
}

impl<S: ScalarValue> FromInputValue<S> for bool {
    fn from_input_value(v: &Value<S>) -> Option<Self> {
        v.as_scalar().and_then(ScalarValue::as_bool)
    }
}

impl<S: ScalarValue> FromInputValue<S> for i32 {
    fn from_input_value(v: &Value<S>) -> Option<Self> {
        v.as_scalar().and_then(ScalarValue::as_int)
    }
}

impl<S: ScalarValue> FromInputValue<S> for String {
    fn from_input_value(v: &Value<S>) -> Option<Self> {
        v.as_string_value().map(str::to_owned)
    }
}

/// Field argument container
#[derive(Debug)]
pub struct Arguments<'a, S> {
    args: IndexMap<&'a str, Value<S>>,
}

impl<'a, S: Clone> Arguments<'a, S> {
    #[doc(hidden)]
    pub fn new(
        args: &'a IndexMap<ArcStr, Value<S>>,
        meta_args: Option<&'a [Argument<S>]>,
    ) -> Self {
        let mut args = args
            .iter()
            .map(|(k, v)| (k.as_str(), v.clone()))
            .collect::<IndexMap<_, _>>();

        for arg in meta_args.unwrap_or_default() {
            if args.get(arg.name.as_str()).is_none_or(Value::is_null) {
                args.insert(
                    arg.name.as_str(),
                    arg.default_value.clone().unwrap_or(Value::Null),
                );
            }
        }

        Self { args }
    }

    /// Gets and converts an argument into the desired type.
    ///
    /// If the argument is found, or a default argument has been provided,
    /// the value will be converted into the type `T`.
    ///
    /// Returns `Some` if the argument is present _and_ type conversion
    /// succeeds.
    pub fn get<T>(&self, key: &str) -> Option<T>
    where
        T: FromInputValue<S>,
    {
        self.args.get(key).and_then(T::from_input_value)
    }
}

/// Primary trait used to resolve values against a selection set.
///
/// The meta types (`__Schema`, `__Type`, `__Field`, `__InputValue`,
/// `__EnumValue`) implement [`GraphQLValue::resolve_field`]; containers and
/// scalars override [`GraphQLValue::resolve`] instead.
pub trait GraphQLValue<S: ScalarValue> {
    /// Returns the name of the GraphQL type this value is an instance of.
    ///
    /// Required for values resolved with a selection set.
    fn type_name(&self) -> Option<&str> {
        None
    }

    /// Resolves the value of a single field on this type.
    ///
    /// The default implementation reports the field as unknown.
    fn resolve_field(
        &self,
        field_name: &str,
        _arguments: &Arguments<S>,
        _executor: &Executor<S>,
    ) -> ExecutionResult<S> {
        Err(FieldError::UnknownField {
            type_name: self.type_name().unwrap_or_default().into(),
            field_name: field_name.into(),
        })
    }

    /// Resolves the provided selection set against this value.
    ///
    /// The default implementation resolves each selected field in order
    /// into an [`Object`]. Composite values can't be resolved without a
    /// selection set.
    fn resolve(
        &self,
        selection_set: Option<&[Selection<S>]>,
        executor: &Executor<S>,
    ) -> ExecutionResult<S> {
        let Some(selection_set) = selection_set else {
            return Err(FieldError::MissingSelectionSet {
                type_name: self.type_name().unwrap_or_default().into(),
            });
        };
        let mut result = Object::with_capacity(selection_set.len());
        resolve_selection_set_into(self, selection_set, executor, &mut result)?;
        Ok(Value::Object(result))
    }
}

/// Resolves every selection against `instance`, adding the results to
/// `result` under their response keys.
pub(crate) fn resolve_selection_set_into<T, S>(
    instance: &T,
    selection_set: &[Selection<S>],
    executor: &Executor<S>,
    result: &mut Object<S>,
) -> Result<(), FieldError>
where
    T: GraphQLValue<S> + ?Sized,
    S: ScalarValue,
{
    let type_name = instance.type_name().unwrap_or_default();
    let meta_type = executor.schema().concrete_type_by_name(type_name);

    for selection in selection_set {
        let response_name = selection.response_key();

        if selection.name == "__typename" {
            result.add_field(response_name, Value::scalar(type_name.to_owned()));
            continue;
        }

        let meta_field = meta_type
            .and_then(|t| t.field_by_name(&selection.name))
            .ok_or_else(|| FieldError::UnknownField {
                type_name: type_name.into(),
                field_name: selection.name.clone(),
            })?;

        let args = Arguments::new(&selection.arguments, meta_field.arguments.as_deref());
        let sub_exec = executor.field_sub_executor(selection.selection_set.as_deref());
        let value = instance.resolve_field(&selection.name, &args, &sub_exec)?;

        result.add_field(response_name, value);
    }

    Ok(())
}
