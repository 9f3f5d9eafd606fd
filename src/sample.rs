//! The sample company rendered by the `org-chart` binary.

use crate::models::{Department, Employee};

/// Builds the sample company, bottom-up.
///
/// Three employees are spread over two departments, and both departments
/// sit under the company's root department.
///
/// # Example
///
/// ```
/// use org_chart::display::Displayable;
/// use org_chart::sample::empresa_falsa;
///
/// let rendered = empresa_falsa().detail().to_string();
/// assert!(rendered.starts_with("Departamento: Empresa Falsa\n"));
/// ```
pub fn empresa_falsa() -> Department {
    let ana = Employee::new("Ana", "Analista de Sistemas", 1500, "01/01/2010");
    let bruno = Employee::new("Bruno", "Desenvolvedor", 3500, "01/01/2015");
    let carlos = Employee::new("Carlos", "Designer", 2000, "01/01/2012");

    let mut ti = Department::new("Tecnologia Da Informação", "TI", "Departamento de TI");
    ti.add_child(ana);
    ti.add_child(bruno);

    let mut design = Department::new("Comunicação Visual", "CV", "Departamento de Design");
    design.add_child(carlos);

    let mut company = Department::new("Empresa Falsa", "EF", "Empresa não existente");
    company.add_child(ti);
    company.add_child(design);

    company
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Displayable;

    #[test]
    fn test_sample_renders_full_company() {
        let rendered = empresa_falsa().detail().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Departamento: Empresa Falsa",
                "Sigla: EF",
                "Descrição: Empresa não existente",
                "Departamento: Tecnologia Da Informação",
                "Sigla: TI",
                "Descrição: Departamento de TI",
                "Nome: Ana, Cargo: Analista de Sistemas, Salário: 1500.00, Data de Admissão: 01/01/2010",
                "Nome: Bruno, Cargo: Desenvolvedor, Salário: 3500.00, Data de Admissão: 01/01/2015",
                "Departamento: Comunicação Visual",
                "Sigla: CV",
                "Descrição: Departamento de Design",
                "Nome: Carlos, Cargo: Designer, Salário: 2000.00, Data de Admissão: 01/01/2012",
            ]
        );
    }

    #[test]
    fn test_sample_matches_embedded_document() {
        let embedded = crate::config::OrgChartLoader::sample().unwrap().build();
        assert_eq!(embedded, empresa_falsa());
    }
}
