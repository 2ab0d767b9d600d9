pub mod base;
pub mod containers;
pub mod enums;
pub mod pointers;
pub mod scalars;
