//! The rendering capability shared by every node of an org chart.
//!
//! Employees and departments both implement [`Displayable`], so a caller
//! holding any node renders it the same way without knowing its kind.

use std::fmt;
use std::io;

/// A node that can render a human-readable description of itself.
///
/// Implementors only provide [`Displayable::write_detail`]; rendering to an
/// I/O sink or to a `String` comes for free.
///
/// # Example
///
/// ```
/// use org_chart::display::Displayable;
/// use org_chart::models::Employee;
///
/// let ana = Employee::new("Ana", "Analista de Sistemas", 1500, "01/01/2010");
///
/// let mut out = Vec::new();
/// ana.render_detail(&mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), ana.detail().to_string());
/// ```
pub trait Displayable {
    /// Writes this node's detail lines, each terminated by `\n`.
    fn write_detail(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Writes this node's detail lines to `out`.
    ///
    /// Rendering itself cannot fail; an error here always comes from the
    /// sink.
    fn render_detail(&self, out: &mut dyn io::Write) -> io::Result<()> {
        write!(out, "{}", Detail(self))
    }

    /// Returns a [`fmt::Display`] adapter over this node's detail lines.
    fn detail(&self) -> Detail<'_, Self>
    where
        Self: Sized,
    {
        Detail(self)
    }
}

/// Formats a [`Displayable`] node through [`fmt::Display`].
///
/// Created by [`Displayable::detail`].
pub struct Detail<'a, T: ?Sized>(&'a T);

impl<T: Displayable + ?Sized> fmt::Display for Detail<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_detail(f)
    }
}
