use std::fmt;

use arcstr::ArcStr;
use derive_more::with_trait::Display;
use indexmap::IndexMap;

use crate::value::{DefaultScalarValue, Value};

/// Identity of a named type declaration.
///
/// Issued by a [`Registry`] the first time a name is declared. Two references
/// to the same declaration always carry the same id, so sets of types are
/// keyed by it rather than by reference. An id is only meaningful inside the
/// schema whose registry issued it.
///
/// [`Registry`]: crate::Registry
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[display("#{_0}")]
pub struct DeclarationId(u32);

impl DeclarationId {
    pub(crate) fn new(index: usize) -> Self {
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A type literal referring to a declaration.
///
/// Field, argument and input field types are written with these. A literal
/// carries no semantic information and might refer to a declaration that was
/// never defined; [`SchemaType::make_type`] resolves it.
///
/// [`SchemaType::make_type`]: crate::SchemaType::make_type
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Type {
    /// A nullable named type, e.g. `String`.
    Named(DeclarationId),
    /// A nullable list type, e.g. `[String]`.
    ///
    /// The list itself is what's nullable, the containing type might be non-null.
    List(Box<Type>),
    /// A non-null wrapper, e.g. `String!` or `[String]!`.
    NonNull(Box<Type>),
}

impl Type {
    /// Wraps this type into a list.
    #[must_use]
    pub fn list(self) -> Self {
        Self::List(Box::new(self))
    }

    /// Wraps this type into a non-null wrapper.
    ///
    /// Already non-null types are returned as is.
    #[must_use]
    pub fn non_null(self) -> Self {
        match self {
            t @ Self::NonNull(_) => t,
            t => Self::NonNull(Box::new(t)),
        }
    }

    /// Returns the declaration at the core of this type, under all the
    /// wrappers.
    pub fn innermost_id(&self) -> DeclarationId {
        match self {
            Self::Named(id) => *id,
            Self::List(inner) | Self::NonNull(inner) => inner.innermost_id(),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(id) => write!(f, "{id}"),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

/// A single field selection, as the execution engine hands it over.
///
/// Only the fields of the meta types are resolved by this crate, so
/// selections are built directly instead of being parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection<S = DefaultScalarValue> {
    /// Name of the selected field.
    pub name: ArcStr,
    /// Response key to use instead of the field name.
    pub alias: Option<ArcStr>,
    /// Literal argument values.
    pub arguments: IndexMap<ArcStr, Value<S>>,
    /// Nested selections, for fields of composite types.
    pub selection_set: Option<Vec<Selection<S>>>,
}

impl<S> Selection<S> {
    /// Selects the field with the given `name`.
    pub fn field(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            arguments: IndexMap::new(),
            selection_set: None,
        }
    }

    /// Sets the `alias` of this [`Selection`].
    #[must_use]
    pub fn alias(mut self, alias: impl Into<ArcStr>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Adds a literal argument to this [`Selection`].
    #[must_use]
    pub fn argument(mut self, name: impl Into<ArcStr>, value: impl Into<Value<S>>) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    /// Sets the nested selections of this [`Selection`].
    ///
    /// Overwrites any previously set selections.
    #[must_use]
    pub fn select(mut self, selection_set: impl IntoIterator<Item = Selection<S>>) -> Self {
        self.selection_set = Some(selection_set.into_iter().collect());
        self
    }

    /// Returns the key under which this selection's value appears in the
    /// response.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name.as_str())
    }
}
