use std::fmt;

use arcstr::ArcStr;
use fnv::FnvHashMap;
use indexmap::IndexMap;

use crate::{
    ast::{DeclarationId, Selection, Type},
    executor::{ExecutionResult, Executor},
    schema::{
        meta::{EnumMeta, MetaType},
        schema::IntrospectionRoot,
    },
    types::base::TypeKind,
    value::{DefaultScalarValue, ScalarValue},
};

/// Metadata for a schema
///
/// An immutable graph of type declarations, indexed by [`DeclarationId`] and
/// by name, plus the query and mutation roots.
#[derive(Debug)]
pub struct SchemaType<S = DefaultScalarValue> {
    types: IndexMap<DeclarationId, MetaType<S>>,
    names: FnvHashMap<ArcStr, DeclarationId>,
    query_type: DeclarationId,
    mutation_type: Option<DeclarationId>,
}

static_assertions::assert_impl_all!(SchemaType<DefaultScalarValue>: Send, Sync);

/// A type value: a named declaration, possibly under list and non-null
/// wrappers.
#[derive(Clone, Debug)]
pub enum TypeType<'a, S: 'a> {
    /// A named declaration.
    Concrete(&'a MetaType<S>),
    /// A non-null wrapper.
    NonNull(Box<TypeType<'a, S>>),
    /// A list wrapper.
    List(Box<TypeType<'a, S>>),
}

impl<S> SchemaType<S> {
    pub(crate) fn new(
        types: IndexMap<DeclarationId, MetaType<S>>,
        names: FnvHashMap<ArcStr, DeclarationId>,
        query_type: DeclarationId,
        mutation_type: Option<DeclarationId>,
    ) -> Self {
        Self {
            types,
            names,
            query_type,
            mutation_type,
        }
    }

    /// Looks up a named type by its declaration identity.
    pub fn type_by_id(&self, id: DeclarationId) -> Option<TypeType<'_, S>> {
        self.concrete_type_by_id(id).map(TypeType::Concrete)
    }

    /// Looks up a declaration by its identity.
    pub fn concrete_type_by_id(&self, id: DeclarationId) -> Option<&MetaType<S>> {
        self.types.get(&id)
    }

    /// Looks up a named type by its name.
    pub fn type_by_name(&self, name: &str) -> Option<TypeType<'_, S>> {
        self.concrete_type_by_name(name).map(TypeType::Concrete)
    }

    /// Looks up a declaration by its name.
    pub fn concrete_type_by_name(&self, name: &str) -> Option<&MetaType<S>> {
        self.names
            .get(name)
            .and_then(|id| self.concrete_type_by_id(*id))
    }

    /// Returns the query root.
    pub fn query_type(&self) -> TypeType<'_, S> {
        TypeType::Concrete(self.concrete_query_type())
    }

    /// Returns the declaration of the query root.
    pub fn concrete_query_type(&self) -> &MetaType<S> {
        // `Registry::finish` refuses to build a schema without it.
        &self.types[&self.query_type]
    }

    /// Returns the mutation root, if the schema has one.
    pub fn mutation_type(&self) -> Option<TypeType<'_, S>> {
        self.concrete_mutation_type().map(TypeType::Concrete)
    }

    /// Returns the declaration of the mutation root, if the schema has one.
    pub fn concrete_mutation_type(&self) -> Option<&MetaType<S>> {
        self.mutation_type.and_then(|id| self.concrete_type_by_id(id))
    }

    /// Resolves a type literal into a type value.
    ///
    /// Returns `None` if the literal refers to a declaration this schema
    /// doesn't contain.
    pub fn make_type(&self, t: &Type) -> Option<TypeType<'_, S>> {
        Some(match t {
            Type::Named(id) => self.type_by_id(*id)?,
            Type::List(inner) => TypeType::List(Box::new(self.make_type(inner)?)),
            Type::NonNull(inner) => TypeType::NonNull(Box::new(self.make_type(inner)?)),
        })
    }

    /// Returns the `__TypeKind` enum the `kind` field of `__Type` is
    /// resolved through.
    pub(crate) fn type_kind_enum(&self) -> Option<&EnumMeta<S>> {
        match self.concrete_type_by_name("__TypeKind") {
            Some(MetaType::Enum(meta)) => Some(meta),
            _ => None,
        }
    }
}

impl<S: ScalarValue> SchemaType<S> {
    /// Resolves a selection set made of `__schema`, `__type(name:)` and
    /// `__typename` selections against this schema.
    ///
    /// Application fields of the query type belong to the execution engine
    /// and are reported as unknown.
    pub fn resolve_root(&self, selection_set: &[Selection<S>]) -> ExecutionResult<S> {
        let executor = Executor::new(self, Some(selection_set));
        executor.resolve(&IntrospectionRoot::new(self))
    }
}

impl<'a, S> TypeType<'a, S> {
    /// Returns the declaration if this isn't a wrapper.
    pub fn to_concrete(&self) -> Option<&'a MetaType<S>> {
        match self {
            Self::Concrete(t) => Some(*t),
            Self::List(_) | Self::NonNull(_) => None,
        }
    }

    /// Returns the declaration identity if this isn't a wrapper.
    pub fn id(&self) -> Option<DeclarationId> {
        self.to_concrete().map(MetaType::id)
    }

    /// Returns the kind of this type.
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Concrete(t) => t.type_kind(),
            Self::List(_) => TypeKind::List,
            Self::NonNull(_) => TypeKind::NonNull,
        }
    }

    /// Returns the name of this type. Wrappers are unnamed.
    pub fn name(&self) -> Option<&'a str> {
        self.to_concrete().map(MetaType::name)
    }

    /// Returns the description of this type. Wrappers have none.
    pub fn description(&self) -> Option<&'a ArcStr> {
        self.to_concrete().and_then(MetaType::description)
    }
}

/// Compares by declaration identity through the same wrappers.
impl<S> PartialEq for TypeType<'_, S> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Concrete(a), Self::Concrete(b)) => a.id() == b.id(),
            (Self::List(a), Self::List(b)) | (Self::NonNull(a), Self::NonNull(b)) => a == b,
            _ => false,
        }
    }
}

impl<S> Eq for TypeType<'_, S> {}

impl<S> fmt::Display for TypeType<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Concrete(t) => f.write_str(t.name()),
            Self::List(i) => write!(f, "[{i}]"),
            Self::NonNull(i) => write!(f, "{i}!"),
        }
    }
}
