//! Department model.
//!
//! A department is the composite node of an org chart. It owns an ordered,
//! append-only list of children, each of which is either an employee or
//! another department.

use std::fmt;

use tracing::{debug, trace};

use crate::display::Displayable;

use super::OrgNode;

/// A department with its own descriptive attributes and ordered children.
///
/// Children are owned by value, so a department can never contain itself.
///
/// # Example
///
/// ```
/// use org_chart::display::Displayable;
/// use org_chart::models::{Department, Employee};
///
/// let mut design = Department::new("Comunicação Visual", "CV", "Departamento de Design");
/// design.add_child(Employee::new("Carlos", "Designer", 2000, "01/01/2012"));
///
/// let rendered = design.detail().to_string();
/// assert_eq!(rendered.lines().count(), 4);
/// assert!(rendered.starts_with("Departamento: Comunicação Visual\n"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    name: String,
    code: String,
    description: String,
    children: Vec<OrgNode>,
}

impl Department {
    /// Creates a department with no children.
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            description: description.into(),
            children: Vec::new(),
        }
    }

    /// Appends a child after all existing children.
    ///
    /// Accepts an [`super::Employee`], another `Department`, or an
    /// [`OrgNode`]. No duplicate check is made.
    pub fn add_child(&mut self, child: impl Into<OrgNode>) {
        let child = child.into();
        let kind = child.kind();
        self.children.push(child);
        debug!(
            department = %self.code,
            child_kind = kind,
            child_count = self.children.len(),
            "Attached child to department"
        );
    }

    /// Returns the department name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the short code (acronym).
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the children in insertion order.
    pub fn children(&self) -> &[OrgNode] {
        &self.children
    }
}

impl Displayable for Department {
    fn write_detail(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        trace!(
            department = %self.code,
            child_count = self.children.len(),
            "Rendering department"
        );

        writeln!(out, "Departamento: {}", self.name)?;
        writeln!(out, "Sigla: {}", self.code)?;
        writeln!(out, "Descrição: {}", self.description)?;

        for child in &self.children {
            child.write_detail(out)?;
        }

        Ok(())
    }
}
