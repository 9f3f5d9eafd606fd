//! Core data models for the org chart.
//!
//! This module contains the leaf and composite node types and the variant
//! that ties them together.

mod department;
mod employee;
mod node;

pub use department::Department;
pub use employee::{Employee, SALARY_DISPLAY_PLACES};
pub use node::OrgNode;
