//! Declarative helper macros.

#[doc(hidden)]
#[macro_use]
pub mod tracing;
