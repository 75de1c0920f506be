/*!
 * Text Tables
 * Bordered plain-text tables for terminal output
 */

use crate::instance::Instance;
use crate::process::Runnable;

/// Minimal bordered table: a header row, a separator, then data rows
#[derive(Debug, Clone, Default)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; short rows are padded with empty cells
    pub fn add_row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let mut row: Vec<String> = cells.into_iter().map(|c| c.to_string()).collect();
        row.resize(self.headers.len().max(row.len()), String::new());
        self.rows.push(row);
        self
    }

    pub fn draw(&self) -> String {
        let columns = self
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0);

        let mut widths = vec![0usize; columns];
        for row in std::iter::once(&self.headers).chain(self.rows.iter()) {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let border = |fill: char| {
            let mut line = String::from("+");
            for width in &widths {
                line.extend(std::iter::repeat(fill).take(width + 2));
                line.push('+');
            }
            line
        };
        let render_row = |row: &[String]| {
            let mut line = String::from("|");
            for (i, width) in widths.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                let pad = width - cell.chars().count();
                line.push(' ');
                line.push_str(cell);
                line.extend(std::iter::repeat(' ').take(pad + 1));
                line.push('|');
            }
            line
        };

        let mut out = vec![border('-'), render_row(&self.headers), border('=')];
        for row in &self.rows {
            out.push(render_row(row));
        }
        out.push(border('-'));
        out.join("\n")
    }
}

/// Table of a freshly loaded instance, using the file's own headers
pub fn render_instance_table<T>(instance: &Instance<T>) -> String {
    let mut table = TextTable::new(instance.headers().iter().map(|h| h.as_str()));
    for process in instance.processes() {
        let mut cells = vec![
            process.pid().to_string(),
            process.burst().to_string(),
            process.arrival_time().to_string(),
        ];
        if instance.has_priorities() {
            cells.push(
                process
                    .priority()
                    .map(|p| p.to_string())
                    .unwrap_or_default(),
            );
        }
        table.add_row(cells);
    }
    table.draw()
}
