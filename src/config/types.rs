//! Configuration types for org-chart documents.
//!
//! This module contains the strongly-typed structures that are deserialized
//! from YAML org-chart documents.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{Department, Employee, OrgNode};

/// Metadata about the org chart.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartMetadata {
    /// A human-readable title for the chart.
    pub title: String,
    /// Where the chart's data came from, if recorded.
    #[serde(default)]
    pub source: Option<String>,
}

/// An employee entry.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeConfig {
    /// The employee's name.
    pub name: String,
    /// The employee's role or title.
    pub role: String,
    /// The employee's salary.
    pub salary: Decimal,
    /// The admission date, kept as free text.
    pub admission_date: String,
}

/// A department entry and its children, in document order.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentConfig {
    /// The department name.
    pub name: String,
    /// The short code (acronym).
    pub code: String,
    /// The department description.
    pub description: String,
    /// Child nodes in the order they should render.
    #[serde(default)]
    pub children: Vec<NodeConfig>,
}

/// A child entry, tagged by `kind`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeConfig {
    /// An employee child.
    Employee(EmployeeConfig),
    /// A nested department child.
    Department(DepartmentConfig),
}

/// A complete org-chart document.
#[derive(Debug, Clone, Deserialize)]
pub struct OrgChartConfig {
    /// Chart metadata.
    pub metadata: ChartMetadata,
    /// The top-level department.
    pub root: DepartmentConfig,
}

impl EmployeeConfig {
    /// Creates the employee this entry describes.
    pub fn build(&self) -> Employee {
        Employee::new(
            self.name.as_str(),
            self.role.as_str(),
            self.salary,
            self.admission_date.as_str(),
        )
    }
}

impl DepartmentConfig {
    /// Creates the department this entry describes, with every child
    /// attached in document order.
    pub fn build(&self) -> Department {
        let mut department = Department::new(
            self.name.as_str(),
            self.code.as_str(),
            self.description.as_str(),
        );
        for child in &self.children {
            department.add_child(child.build());
        }
        department
    }
}

impl NodeConfig {
    /// Creates the node this entry describes.
    pub fn build(&self) -> OrgNode {
        match self {
            NodeConfig::Employee(employee) => employee.build().into(),
            NodeConfig::Department(department) => department.build().into(),
        }
    }
}
