//! Employee model.
//!
//! Employees are the leaves of an org chart: they hold scalar attributes and
//! never have children.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::display::Displayable;

/// Number of decimal places a salary is rendered with.
pub const SALARY_DISPLAY_PLACES: u32 = 2;

/// Represents a single employee in an org chart.
///
/// Fields are set once at construction and never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    name: String,
    role: String,
    salary: Decimal,
    admission_date: String,
}

impl Employee {
    /// Creates a new employee from the given attributes.
    ///
    /// Values are stored as given; the admission date is free text.
    ///
    /// `salary` takes anything that converts into a [`Decimal`] without loss,
    /// which covers integers but not `f32`/`f64`. Fractional amounts go
    /// through [`Decimal::new`] or `Decimal::from_str`.
    ///
    /// # Examples
    ///
    /// ```
    /// use org_chart::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let bruno = Employee::new("Bruno", "Desenvolvedor", 3500, "01/01/2015");
    /// assert_eq!(bruno.salary(), Decimal::from(3500));
    /// ```
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        salary: impl Into<Decimal>,
        admission_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            salary: salary.into(),
            admission_date: admission_date.into(),
        }
    }

    /// Returns the employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the employee's role or title.
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns the salary exactly as it was given.
    pub fn salary(&self) -> Decimal {
        self.salary
    }

    /// Returns the admission date text.
    pub fn admission_date(&self) -> &str {
        &self.admission_date
    }

    /// Returns the salary rounded for display, half away from zero.
    ///
    /// A negative amount that rounds to zero renders as `0.00`, without a
    /// sign.
    ///
    /// # Examples
    ///
    /// ```
    /// use org_chart::models::Employee;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let carlos = Employee::new("Carlos", "Designer", Decimal::from_str("1234.565").unwrap(), "01/01/2012");
    /// assert_eq!(carlos.display_salary().to_string(), "1234.57");
    /// ```
    pub fn display_salary(&self) -> Decimal {
        self.salary
            .round_dp_with_strategy(SALARY_DISPLAY_PLACES, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl Displayable for Employee {
    fn write_detail(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(
            out,
            "Nome: {}, Cargo: {}, Salário: {:.places$}, Data de Admissão: {}",
            self.name,
            self.role,
            self.display_salary(),
            self.admission_date,
            places = SALARY_DISPLAY_PLACES as usize,
        )
    }
}
