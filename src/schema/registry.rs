use arcstr::ArcStr;
use derive_more::with_trait::{Display, Error};
use fnv::FnvHashMap;
use indexmap::IndexMap;

use crate::{
    ast::{DeclarationId, Type},
    schema::{
        meta::{
            Argument, EnumMeta, EnumValue, Field, InputObjectMeta, InterfaceMeta, META_FIELD_NAMES,
            MetaType, ObjectMeta, ScalarMeta, UnionMeta,
        },
        model::SchemaType,
        schema::register_meta_types,
    },
    types::enums::EnumDeclaration,
    value::ScalarValue,
};

/// Error preventing a [`Registry`] from turning into a [`SchemaType`].
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum SchemaError {
    /// A type was declared (or referenced) but never defined.
    #[display("Type \"{name}\" is declared but never defined")]
    UndefinedType {
        /// Name of the type.
        name: ArcStr,
    },

    /// The query root isn't an object type.
    #[display("Query type \"{name}\" is not an object type")]
    QueryTypeNotObject {
        /// Name of the type.
        name: ArcStr,
    },

    /// The mutation root isn't an object type.
    #[display("Mutation type \"{name}\" is not an object type")]
    MutationTypeNotObject {
        /// Name of the type.
        name: ArcStr,
    },
}

struct Declaration<S> {
    name: ArcStr,
    meta: Option<MetaType<S>>,
}

/// A type registry used while building a schema.
///
/// Every named type gets a [`DeclarationId`] the first time its name is
/// mentioned, so types can reference each other (or themselves) before they
/// are defined.
pub struct Registry<S = crate::DefaultScalarValue> {
    names: FnvHashMap<ArcStr, DeclarationId>,
    declarations: Vec<Declaration<S>>,
}

impl<S: ScalarValue> Default for Registry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ScalarValue> Registry<S> {
    /// Constructs a new [`Registry`] with the built-in scalars already
    /// defined.
    pub fn new() -> Self {
        let mut registry = Self {
            names: FnvHashMap::default(),
            declarations: Vec::new(),
        };

        for (name, description) in [
            (
                "String",
                "The `String` scalar type represents textual data, represented as UTF-8 \
                 character sequences.",
            ),
            (
                "Int",
                "The `Int` scalar type represents non-fractional signed whole numeric values.",
            ),
            (
                "Float",
                "The `Float` scalar type represents signed double-precision fractional values.",
            ),
            ("Boolean", "The `Boolean` scalar type represents `true` or `false`."),
            (
                "ID",
                "The `ID` scalar type represents a unique identifier, serialized as a string.",
            ),
        ] {
            let meta = registry
                .build_scalar_type(name)
                .description(description)
                .into_meta();
            registry.define(meta);
        }

        registry
    }

    /// Declares a type by name, returning its identity.
    ///
    /// Declaring the same name again yields the same id.
    pub fn declare(&mut self, name: &str) -> DeclarationId {
        if let Some(id) = self.names.get(name) {
            return *id;
        }
        let id = DeclarationId::new(self.declarations.len());
        let name = ArcStr::from(name);
        self.names.insert(name.clone(), id);
        self.declarations.push(Declaration { name, meta: None });
        id
    }

    /// Returns a nullable [`Type`] literal referring to the named type,
    /// declaring it if necessary.
    pub fn get_type(&mut self, name: &str) -> Type {
        Type::Named(self.declare(name))
    }

    /// Stores a finished declaration, replacing its placeholder or any
    /// earlier definition.
    pub fn define(&mut self, meta: MetaType<S>) -> DeclarationId {
        let id = meta.id();
        if let Some(decl) = self.declaration_mut(id) {
            decl.meta = Some(meta);
        }
        id
    }

    /// Looks up the definition of the named type, if it has one yet.
    pub fn defined(&self, name: &str) -> Option<&MetaType<S>> {
        self.names
            .get(name)
            .and_then(|id| self.declaration(*id))
            .and_then(|d| d.meta.as_ref())
    }

    /// Creates a [`ScalarMeta`] type for the named declaration.
    pub fn build_scalar_type(&mut self, name: &str) -> ScalarMeta {
        let id = self.declare(name);
        ScalarMeta::new(id, self.name_of(id))
    }

    /// Creates an [`ObjectMeta`] type with the given `fields`.
    pub fn build_object_type(&mut self, name: &str, fields: &[Field<S>]) -> ObjectMeta<S> {
        let id = self.declare(name);
        ObjectMeta::new(id, self.name_of(id), fields)
    }

    /// Creates an [`InterfaceMeta`] type with the given `fields`.
    pub fn build_interface_type(&mut self, name: &str, fields: &[Field<S>]) -> InterfaceMeta<S> {
        let id = self.declare(name);
        InterfaceMeta::new(id, self.name_of(id), fields)
    }

    /// Creates a [`UnionMeta`] type of the given `types`.
    pub fn build_union_type(&mut self, name: &str, types: &[Type]) -> UnionMeta {
        let id = self.declare(name);
        UnionMeta::new(id, self.name_of(id), types)
    }

    /// Creates an [`EnumMeta`] type with an explicit value table.
    pub fn build_enum_type(&mut self, name: &str, values: &[EnumValue<S>]) -> EnumMeta<S> {
        let id = self.declare(name);
        EnumMeta::new(id, self.name_of(id), values)
    }

    /// Creates an [`EnumMeta`] type from the name and value table of an
    /// [`EnumDeclaration`].
    pub fn build_enum_type_from<T>(&mut self) -> EnumMeta<S>
    where
        T: EnumDeclaration<S> + ?Sized,
    {
        let id = self.declare(T::NAME);
        EnumMeta::from_declaration::<T>(id)
    }

    /// Creates an [`InputObjectMeta`] type with the given `input_fields`.
    pub fn build_input_object_type(
        &mut self,
        name: &str,
        input_fields: &[Argument<S>],
    ) -> InputObjectMeta<S> {
        let id = self.declare(name);
        InputObjectMeta::new(id, self.name_of(id), input_fields)
    }

    /// Finishes the schema rooted at the `query` type (and optional
    /// `mutation` type).
    ///
    /// Registers the introspection meta types and attaches the `__schema`
    /// and `__type` meta-fields to the query type. Fails if any declared
    /// type lacks a definition or if a root isn't an object type.
    pub fn finish(
        mut self,
        query: &str,
        mutation: Option<&str>,
    ) -> Result<SchemaType<S>, SchemaError> {
        let meta_fields = register_meta_types(&mut self);

        let query_type = self.declare(query);
        match self.declaration_mut(query_type).and_then(|d| d.meta.as_mut()) {
            Some(MetaType::Object(ObjectMeta { fields, .. })) => {
                fields.retain(|f| !META_FIELD_NAMES.contains(&f.name.as_str()));
                fields.extend(meta_fields);
            }
            Some(_) => {
                return Err(SchemaError::QueryTypeNotObject { name: query.into() });
            }
            None => {}
        }

        let mutation_type = mutation.map(|name| self.declare(name));
        if let Some(id) = mutation_type {
            if let Some(meta) = self.declaration(id).and_then(|d| d.meta.as_ref()) {
                if !matches!(meta, MetaType::Object(_)) {
                    return Err(SchemaError::MutationTypeNotObject {
                        name: meta.name().into(),
                    });
                }
            }
        }

        let mut types = IndexMap::with_capacity(self.declarations.len());
        for decl in self.declarations {
            let Some(meta) = decl.meta else {
                return Err(SchemaError::UndefinedType { name: decl.name });
            };
            types.insert(meta.id(), meta);
        }

        crate::__introspection_trace_debug!("finished schema with {} types", types.len());

        Ok(SchemaType::new(types, self.names, query_type, mutation_type))
    }

    fn name_of(&self, id: DeclarationId) -> ArcStr {
        self.declaration(id)
            .map(|d| d.name.clone())
            .unwrap_or_default()
    }

    fn declaration(&self, id: DeclarationId) -> Option<&Declaration<S>> {
        self.declarations.get(id.index())
    }

    fn declaration_mut(&mut self, id: DeclarationId) -> Option<&mut Declaration<S>> {
        self.declarations.get_mut(id.index())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        DefaultScalarValue, Registry, SchemaError,
        meta::{Field, MetaType},
    };

    #[test]
    fn declare_is_idempotent_by_name() {
        let mut registry = Registry::<DefaultScalarValue>::new();
        let a = registry.declare("User");
        let b = registry.declare("User");
        let c = registry.declare("Post");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn undefined_forward_declaration_is_rejected() {
        let mut registry = Registry::<DefaultScalarValue>::new();
        let ghost = registry.get_type("Ghost");
        let meta = registry
            .build_object_type("Query", &[Field::new("ghost", ghost)])
            .into_meta();
        registry.define(meta);

        assert_eq!(
            registry.finish("Query", None).err(),
            Some(SchemaError::UndefinedType {
                name: "Ghost".into(),
            }),
        );
    }

    #[test]
    fn missing_query_type_is_rejected() {
        let registry = Registry::<DefaultScalarValue>::new();

        assert_eq!(
            registry.finish("Query", None).err(),
            Some(SchemaError::UndefinedType {
                name: "Query".into(),
            }),
        );
    }

    #[test]
    fn non_object_roots_are_rejected() {
        let registry = Registry::<DefaultScalarValue>::new();
        assert_eq!(
            registry.finish("String", None).err(),
            Some(SchemaError::QueryTypeNotObject {
                name: "String".into(),
            }),
        );

        let mut registry = Registry::<DefaultScalarValue>::new();
        let int = registry.get_type("Int");
        let meta = registry
            .build_object_type("Query", &[Field::new("count", int)])
            .into_meta();
        registry.define(meta);
        assert_eq!(
            registry.finish("Query", Some("Boolean")).err(),
            Some(SchemaError::MutationTypeNotObject {
                name: "Boolean".into(),
            }),
        );
    }

    #[test]
    fn finish_attaches_meta_fields_once() {
        let mut registry = Registry::<DefaultScalarValue>::new();
        let int = registry.get_type("Int");
        let meta = registry
            .build_object_type(
                "Query",
                &[
                    Field::new("count", int.clone()),
                    Field::new("__type", int),
                ],
            )
            .into_meta();
        registry.define(meta);

        let schema = registry.finish("Query", None).expect("valid schema");
        let Some(MetaType::Object(query)) = schema.concrete_type_by_name("Query") else {
            panic!("query type is an object");
        };
        let names = query.fields.iter().map(|f| f.name.as_str()).collect::<Vec<_>>();

        assert_eq!(names, ["count", "__schema", "__type"]);
    }
}
