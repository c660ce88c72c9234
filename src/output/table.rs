//! Table formatting for CLI output.
//!
//! Columns are sized by display width, so CJK text lines up with ASCII.

use unicode_width::UnicodeWidthStr;

/// A simple table formatter.
#[derive(Debug, Default)]
pub struct TableFormatter {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableFormatter {
    /// Create a new table formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column headers.
    pub fn headers<I, S>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    /// Add a row to the table.
    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Calculate column widths based on content.
    fn calculate_widths(&self) -> Vec<usize> {
        let num_cols = self
            .headers
            .len()
            .max(self.rows.iter().map(Vec::len).max().unwrap_or(0));

        let mut widths = vec![0usize; num_cols];
        for row in std::iter::once(&self.headers).chain(&self.rows) {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
            }
        }

        widths
    }

    /// Print the table to stdout.
    pub fn print(&self) {
        print!("{}", self.render());
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let widths = self.calculate_widths();
        let mut output = String::new();

        if !self.headers.is_empty() {
            output.push_str(&row_to_string(&self.headers, &widths));
            output.push('\n');
            // Separator
            let sep: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            output.push_str(&sep.join("  "));
            output.push('\n');
        }

        for row in &self.rows {
            output.push_str(&row_to_string(row, &widths));
            output.push('\n');
        }

        output
    }
}

fn row_to_string(cells: &[String], widths: &[usize]) -> String {
    let parts: Vec<String> = cells
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let width = widths.get(i).copied().unwrap_or(0);
            let padding = width.saturating_sub(UnicodeWidthStr::width(cell.as_str()));
            format!("{}{}", cell, " ".repeat(padding))
        })
        .collect();

    parts.join("  ").trim_end().to_string()
}
