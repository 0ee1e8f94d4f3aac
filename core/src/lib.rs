//! Scenaria Core Types
//!
//! This crate provides the document model the test case generator consumes
//! from the specification compiler:
//! - Values and value types (the Value enum with scalar, date/time and list values)
//! - Steps with their recognized entities and source locations
//! - UI elements, their properties and "otherwise" clauses, constants
//! - Documents and the specification-wide resolver
//! - The keyword dictionary used to render steps in a scenario's language
//! - A minimal sentence recognizer for the reference syntax used in steps

mod case;
mod dictionary;
mod element;
mod recognizer;
mod spec;
mod step;
pub mod symbols;
mod value;

pub use case::*;
pub use dictionary::*;
pub use element::*;
pub use recognizer::*;
pub use spec::*;
pub use step::*;
pub use value::*;
