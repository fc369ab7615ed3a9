//! Table rows for each view: the filters a view exposes, its sortable
//! columns, and the filter-then-sort composition that produces the rows.

pub mod catalog;
pub mod gpa;
pub mod medical;
pub mod results;
