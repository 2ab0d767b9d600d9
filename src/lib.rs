/*!

# GraphQL introspection

[GraphQL][1] schemas are introspective: a client can ask a server about the
server's own types through the `__schema` and `__type` meta-fields. This
library implements that reflection layer over an arbitrary, possibly cyclic,
graph of type declarations.

A schema is assembled with a [`Registry`], which hands out a stable
[`DeclarationId`] for every named type. Types can be declared before they are
defined, so self-referential and mutually recursive graphs need no special
treatment:

```rust
use juniper_introspection::{
    Registry,
    meta::{Field, ObjectMeta},
};

let mut registry = Registry::<juniper_introspection::DefaultScalarValue>::new();

let user = registry.get_type("User");
let name = registry.get_type("String").non_null();

let meta = registry
    .build_object_type("User", &[
        Field::new("name", name),
        Field::new("friends", user.list()),
    ])
    .into_meta();
registry.define(meta);

let schema = registry.finish("User", None).expect("schema is complete");
assert_eq!(schema.query_type().name(), Some("User"));
```

Once built, a [`SchemaType`] is immutable. Every introspection projection in
[`introspection`] reads it without locking, and every operation that needs
whole-graph knowledge takes the schema as an explicit argument.

[1]: http://graphql.org

*/
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

#[cfg(feature = "tracing")]
#[doc(hidden)]
pub use tracing;

#[doc(hidden)]
#[macro_use]
pub mod macros;
mod ast;
pub mod executor;
pub mod introspection;
pub(crate) mod schema;
mod types;
mod value;
pub mod integrations;

#[cfg(test)]
mod tests;

pub use crate::{
    ast::{DeclarationId, Selection, Type},
    executor::{ExecutionResult, Executor, FieldError},
    introspection::{IntrospectionFormat, TypeCollector, TypeSet, introspect},
    schema::{
        meta,
        model::{SchemaType, TypeType},
        registry::{Registry, SchemaError},
    },
    types::{
        base::{Arguments, FromInputValue, GraphQLValue, TypeKind},
        enums::{EnumDeclaration, GraphQLEnum, InvalidEnumValue},
    },
    value::{DefaultScalarValue, Object, ScalarValue, Value},
};
