//! The node type stored as a department's child.

use std::fmt;

use crate::display::Displayable;

use super::{Department, Employee};

/// Any node of an org chart: a leaf employee or a nested department.
///
/// `OrgNode` renders by delegating to whichever variant it holds, so code
/// that walks a chart never needs to match on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrgNode {
    /// A leaf node.
    Employee(Employee),
    /// A composite node with its own children.
    Department(Department),
}

impl OrgNode {
    /// Returns a short name for the variant, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            OrgNode::Employee(_) => "employee",
            OrgNode::Department(_) => "department",
        }
    }
}

impl Displayable for OrgNode {
    fn write_detail(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        match self {
            OrgNode::Employee(employee) => employee.write_detail(out),
            OrgNode::Department(department) => department.write_detail(out),
        }
    }
}

impl From<Employee> for OrgNode {
    fn from(employee: Employee) -> Self {
        OrgNode::Employee(employee)
    }
}

impl From<Department> for OrgNode {
    fn from(department: Department) -> Self {
        OrgNode::Department(department)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_variant() {
        let employee = OrgNode::from(Employee::new("Ana", "Analista", 1, "01/01/2010"));
        let department = OrgNode::from(Department::new("Empresa Falsa", "EF", "Empresa"));
        assert_eq!(employee.kind(), "employee");
        assert_eq!(department.kind(), "department");
    }

    #[test]
    fn test_node_renders_like_its_variant() {
        let employee = Employee::new("Bruno", "Desenvolvedor", 3500, "01/01/2015");
        let mut department = Department::new("Tecnologia Da Informação", "TI", "Departamento de TI");
        department.add_child(employee.clone());

        assert_eq!(
            OrgNode::from(employee.clone()).detail().to_string(),
            employee.detail().to_string()
        );
        assert_eq!(
            OrgNode::from(department.clone()).detail().to_string(),
            department.detail().to_string()
        );
    }

    #[test]
    fn test_mixed_nodes_render_without_matching() {
        let nodes = vec![
            OrgNode::from(Department::new("Comunicação Visual", "CV", "Departamento de Design")),
            OrgNode::from(Employee::new("Carlos", "Designer", 2000, "01/01/2012")),
        ];

        let mut out = Vec::new();
        for node in &nodes {
            node.render_detail(&mut out).unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 4);
    }
}
