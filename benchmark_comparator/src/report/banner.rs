//!
//! The section banner.
//!

/// The report line width.
pub const WIDTH: usize = 80;

///
/// A section title framed by double rules.
///
pub struct Banner<'a>(pub &'a str);

impl std::fmt::Display for Banner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = "=".repeat(WIDTH);
        writeln!(f, "{rule}")?;
        writeln!(f, "{}", format!("{:^width$}", self.0, width = WIDTH).trim_end())?;
        writeln!(f, "{rule}")
    }
}
