//! Graph construction from student records.
//!
//! This module turns the frontend's ordered student batch into a directed
//! friend graph backed by petgraph, with the mutual flag derived per edge.
//! Node slots follow input order so positions computed downstream join back
//! to students by index as well as by name.

mod relations;
mod student;

pub use relations::RelationGraph;
pub use student::Student;
