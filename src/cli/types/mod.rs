//! Type-safe wrappers and enums for Sleeper roster data.

pub mod filters;
pub mod position;

pub use filters::{DefenseMode, FieldSet, Placeholder, StatusMatch};
pub use position::Position;
