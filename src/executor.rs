//! Resolution of introspection selections against a schema.
//!
//! This is deliberately small: the meta types need a way to walk a selection
//! set, and that is all this module provides. Query parsing, validation and
//! the execution of application fields belong to the execution engine.

use arcstr::ArcStr;
use derive_more::with_trait::{Display, Error, From};

use crate::{
    ast::Selection,
    schema::model::SchemaType,
    types::{base::GraphQLValue, enums::InvalidEnumValue},
    value::{ScalarValue, Value},
};

/// Error raised while resolving an introspection selection.
#[derive(Clone, Debug, Display, Eq, Error, From, PartialEq)]
pub enum FieldError {
    /// The selection names a field that the type doesn't declare.
    #[display("Unknown field \"{field_name}\" on type \"{type_name}\"")]
    #[from(ignore)]
    UnknownField {
        /// Name of the type the field was selected on.
        type_name: ArcStr,
        /// Name of the selected field.
        field_name: ArcStr,
    },

    /// A field of a composite type was selected without subselections.
    #[display("Field of type \"{type_name}\" must have a selection of subfields")]
    #[from(ignore)]
    MissingSelectionSet {
        /// Name of the composite type.
        type_name: ArcStr,
    },

    /// A required argument is absent or has the wrong shape.
    #[display("Argument \"{argument}\" of field \"{field_name}\" is missing or invalid")]
    #[from(ignore)]
    InvalidArgument {
        /// Name of the field.
        field_name: ArcStr,
        /// Name of the argument.
        argument: ArcStr,
    },

    /// An enum value couldn't be mapped back to a declared name.
    #[display("{_0}")]
    InvalidEnumValue(InvalidEnumValue),
}

/// The result of resolving the value of a field.
pub type ExecutionResult<S> = Result<Value<S>, FieldError>;

/// Query resolution engine
///
/// Carries the schema and the selection set of the field being resolved.
pub struct Executor<'r, S> {
    schema: &'r SchemaType<S>,
    current_selection_set: Option<&'r [Selection<S>]>,
}

impl<'r, S> Executor<'r, S>
where
    S: ScalarValue,
{
    /// Creates an executor resolving `selection_set` against `schema`.
    pub fn new(schema: &'r SchemaType<S>, selection_set: Option<&'r [Selection<S>]>) -> Self {
        Self {
            schema,
            current_selection_set: selection_set,
        }
    }

    /// Resolves a single value into a [`Value`], using the current
    /// selection set.
    pub fn resolve<T>(&self, value: &T) -> ExecutionResult<S>
    where
        T: GraphQLValue<S> + ?Sized,
    {
        value.resolve(self.current_selection_set, self)
    }

    /// Returns the schema this executor resolves against.
    pub fn schema(&self) -> &'r SchemaType<S> {
        self.schema
    }

    #[doc(hidden)]
    pub fn field_sub_executor<'s>(
        &self,
        selection_set: Option<&'s [Selection<S>]>,
    ) -> Executor<'s, S>
    where
        'r: 's,
    {
        Executor {
            schema: self.schema,
            current_selection_set: selection_set,
        }
    }
}
