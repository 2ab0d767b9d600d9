//! Library tests and fixtures

mod introspection_tests;
mod resolve_tests;
