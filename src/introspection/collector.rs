use indexmap::IndexMap;

use crate::{
    ast::{DeclarationId, Type},
    schema::{
        meta::{Field, InputObjectMeta, InterfaceMeta, MetaType, ObjectMeta, UnionMeta},
        model::{SchemaType, TypeType},
    },
};

/// Set of named types keyed by declaration identity.
///
/// Iterates in discovery order, which is stable for a fixed schema.
#[derive(Debug)]
pub struct TypeSet<'a, S>(IndexMap<DeclarationId, &'a MetaType<S>>);

impl<S> Default for TypeSet<'_, S> {
    fn default() -> Self {
        Self(IndexMap::new())
    }
}

impl<'a, S> TypeSet<'a, S> {
    /// Returns the number of types in this set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks whether this set contains no types.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks whether the declaration with the given `id` is in this set.
    pub fn contains(&self, id: DeclarationId) -> bool {
        self.0.contains_key(&id)
    }

    /// Iterates over the types of this set.
    pub fn iter(&self) -> impl Iterator<Item = &'a MetaType<S>> + '_ {
        self.0.values().copied()
    }

    /// Converts this set into type values.
    pub fn into_types(self) -> Vec<TypeType<'a, S>> {
        self.0.into_values().map(TypeType::Concrete).collect()
    }

    fn insert(&mut self, meta: &'a MetaType<S>) -> bool {
        self.0.insert(meta.id(), meta).is_none()
    }
}

/// Walks a type graph, gathering every named type reachable from the types
/// it's pointed at.
///
/// The collected set doubles as the visited set, so every type is walked at
/// most once and cycles terminate. A collector is owned by a single walk and
/// never shared.
pub struct TypeCollector<'a, S> {
    schema: &'a SchemaType<S>,
    types: TypeSet<'a, S>,
}

impl<'a, S> TypeCollector<'a, S> {
    /// Creates an empty collector over the given `schema`.
    pub fn new(schema: &'a SchemaType<S>) -> Self {
        Self {
            schema,
            types: TypeSet::default(),
        }
    }

    /// Adds `root` and everything reachable from it.
    ///
    /// Wrappers are looked through: the named type they wrap is collected.
    pub fn collect(&mut self, root: &TypeType<'a, S>) {
        match root {
            TypeType::Concrete(meta) => self.collect_meta(*meta),
            TypeType::List(inner) | TypeType::NonNull(inner) => self.collect(inner),
        }
    }

    /// Returns the collected set.
    pub fn finish(self) -> TypeSet<'a, S> {
        crate::__introspection_trace!("collected {} reachable types", self.types.len());
        self.types
    }

    fn collect_meta(&mut self, meta: &'a MetaType<S>) {
        if !self.types.insert(meta) {
            return;
        }

        match meta {
            MetaType::Object(ObjectMeta {
                fields, interfaces, ..
            }) => {
                for f in fields {
                    self.collect_field(f);
                }
                for id in interfaces {
                    self.collect_id(*id);
                }
            }
            MetaType::Interface(InterfaceMeta { fields, .. }) => {
                for f in fields {
                    self.collect_field(f);
                }
            }
            MetaType::Union(UnionMeta { of_types, .. }) => {
                for id in of_types {
                    self.collect_id(*id);
                }
            }
            MetaType::InputObject(InputObjectMeta { input_fields, .. }) => {
                for f in input_fields {
                    self.collect_literal(&f.arg_type);
                }
            }
            MetaType::Scalar(_) | MetaType::Enum(_) => {}
        }
    }

    fn collect_field(&mut self, field: &Field<S>) {
        self.collect_literal(&field.field_type);
        for arg in field.arguments.iter().flatten() {
            self.collect_literal(&arg.arg_type);
        }
    }

    fn collect_literal(&mut self, t: &Type) {
        self.collect_id(t.innermost_id());
    }

    fn collect_id(&mut self, id: DeclarationId) {
        let schema = self.schema;
        // Dangling ids are skipped rather than reported.
        if let Some(meta) = schema.concrete_type_by_id(id) {
            self.collect_meta(meta);
        }
    }
}

/// Collects every named type reachable from `root`.
///
/// The root itself is part of the result. Returns an empty set if there is no
/// root.
pub fn collect_types<'a, S>(
    schema: &'a SchemaType<S>,
    root: Option<&TypeType<'a, S>>,
) -> TypeSet<'a, S> {
    let mut collector = TypeCollector::new(schema);
    if let Some(root) = root {
        collector.collect(root);
    }
    collector.finish()
}

/// Collects every named type reachable from the query and mutation roots of
/// the `schema`.
pub fn collect_schema_types<S>(schema: &SchemaType<S>) -> TypeSet<'_, S> {
    let mut collector = TypeCollector::new(schema);
    collector.collect(&schema.query_type());
    if let Some(mutation) = schema.mutation_type() {
        collector.collect(&mutation);
    }
    collector.finish()
}
