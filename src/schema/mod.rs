pub mod meta;
pub mod model;
pub mod registry;
#[expect(clippy::module_inception, reason = "mirrors the `__Schema` meta type")]
pub mod schema;
