//! Data-model boilerplate generation from a CSV description
//!
//! A spreadsheet describes the system's data models one row at a time:
//! a row naming a template starts a new group, and the rows below it add
//! attributes (or nested schema-field sub-entries) until the next named
//! row. Each group renders to a TypeDataModel class body and a matching
//! Handlebars form fragment, ready to paste into the system package.

pub mod reader;
pub mod render;

pub use reader::{read_templates, AttrKind, Attribute, SubField, Template};
pub use render::render;
