//! Org-chart documents.
//!
//! This module provides functionality to describe an org chart as a YAML
//! document and build the equivalent department tree from it.
//!
//! # Example
//!
//! ```
//! use org_chart::config::OrgChartLoader;
//! use org_chart::display::Displayable;
//!
//! let yaml = r#"
//! metadata:
//!   title: Pequena
//! root:
//!   name: Pequena
//!   code: PQ
//!   description: Empresa pequena
//!   children:
//!     - kind: employee
//!       name: Ana
//!       role: Analista de Sistemas
//!       salary: "1500"
//!       admission_date: 01/01/2010
//! "#;
//!
//! let chart = OrgChartLoader::parse("inline", yaml)?.build();
//! assert_eq!(chart.detail().to_string().lines().count(), 4);
//! # Ok::<(), org_chart::error::OrgError>(())
//! ```

mod loader;
mod types;

pub use loader::{OrgChartLoader, SAMPLE_CHART};
pub use types::{ChartMetadata, DepartmentConfig, EmployeeConfig, NodeConfig, OrgChartConfig};
