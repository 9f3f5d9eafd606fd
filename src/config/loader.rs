//! Org-chart document loading.
//!
//! This module provides the [`OrgChartLoader`] type for turning a YAML
//! org-chart document into a [`Department`] tree.

use tracing::{info, warn};

use crate::error::{OrgError, OrgResult};
use crate::models::Department;

use super::types::{ChartMetadata, OrgChartConfig};

/// The sample company, compiled into the crate.
pub const SAMPLE_CHART: &str = include_str!("../../config/empresa_falsa.yaml");

const SAMPLE_ORIGIN: &str = "config/empresa_falsa.yaml";

/// Parses org-chart documents and builds department trees from them.
///
/// The loader works on text it is handed; it does not read files.
///
/// # Document Structure
///
/// ```text
/// metadata:
///   title: Empresa Falsa
/// root:
///   name: Empresa Falsa
///   code: EF
///   description: Empresa não existente
///   children:
///     - kind: department
///       name: ...
///       children:
///         - kind: employee
///           name: ...
/// ```
///
/// # Example
///
/// ```
/// use org_chart::config::OrgChartLoader;
///
/// let loader = OrgChartLoader::sample()?;
/// let company = loader.build();
/// assert_eq!(company.code(), "EF");
/// # Ok::<(), org_chart::error::OrgError>(())
/// ```
#[derive(Debug, Clone)]
pub struct OrgChartLoader {
    config: OrgChartConfig,
}

impl OrgChartLoader {
    /// Parses an org-chart document.
    ///
    /// # Arguments
    ///
    /// * `origin` - A name for the document, used in error messages
    /// * `source` - The YAML text
    ///
    /// # Returns
    ///
    /// Returns `ConfigParseError` if the text is not valid YAML or is missing
    /// a required field. Field values are not otherwise checked.
    pub fn parse(origin: &str, source: &str) -> OrgResult<Self> {
        let config: OrgChartConfig = serde_yaml::from_str(source).map_err(|e| {
            warn!(origin, error = %e, "Org chart document failed to parse");
            OrgError::ConfigParseError {
                origin: origin.to_string(),
                message: e.to_string(),
            }
        })?;

        info!(
            origin,
            title = %config.metadata.title,
            "Loaded org chart document"
        );

        Ok(Self { config })
    }

    /// Parses the embedded sample company.
    pub fn sample() -> OrgResult<Self> {
        Self::parse(SAMPLE_ORIGIN, SAMPLE_CHART)
    }

    /// Returns the parsed document.
    pub fn config(&self) -> &OrgChartConfig {
        &self.config
    }

    /// Returns the chart metadata.
    pub fn metadata(&self) -> &ChartMetadata {
        &self.config.metadata
    }

    /// Builds the department tree described by the document.
    ///
    /// Each call produces a fresh, independently owned tree.
    pub fn build(&self) -> Department {
        self.config.root.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Displayable;

    #[test]
    fn test_sample_parses() {
        let loader = OrgChartLoader::sample().unwrap();
        assert_eq!(loader.metadata().title, "Empresa Falsa");
        assert_eq!(loader.config().root.children.len(), 2);
    }

    #[test]
    fn test_sample_builds_three_levels() {
        let company = OrgChartLoader::sample().unwrap().build();
        assert_eq!(company.name(), "Empresa Falsa");
        assert_eq!(company.children().len(), 2);
        assert_eq!(company.detail().to_string().lines().count(), 12);
    }

    #[test]
    fn test_parse_reports_origin_on_invalid_yaml() {
        let result = OrgChartLoader::parse("broken.yaml", "metadata: [unclosed");
        match result {
            Err(OrgError::ConfigParseError { origin, message }) => {
                assert_eq!(origin, "broken.yaml");
                assert!(!message.is_empty());
            }
            other => panic!("expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_reports_missing_root() {
        let result = OrgChartLoader::parse("no-root.yaml", "metadata:\n  title: Vazio\n");
        match result {
            Err(OrgError::ConfigParseError { message, .. }) => {
                assert!(message.contains("root"), "unexpected message: {message}");
            }
            other => panic!("expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_build_returns_independent_trees() {
        let loader = OrgChartLoader::sample().unwrap();
        let mut first = loader.build();
        let second = loader.build();

        first.add_child(crate::models::Employee::new("Dora", "Gerente", 5000, "01/01/2020"));
        assert_eq!(first.children().len(), 3);
        assert_eq!(second.children().len(), 2);
    }
}
