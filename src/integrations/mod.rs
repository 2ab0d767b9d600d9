//! Serialization support for introspection results.

#[doc(hidden)]
pub mod serde;
