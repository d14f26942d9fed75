//! Plain-text table model and renderer.
//!
//! Cells carry a style tag instead of terminal escape codes; the renderer
//! pads on the raw text and hands each padded cell to a `paint` callback, so
//! colouring never disturbs the column alignment.

use dca_core::case::{Priority, RecoveryStatus};

const COLUMN_GAP: &str = "  ";

/// How a cell should be highlighted by a front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Plain,
    Header,
    Priority(Priority),
    Status(RecoveryStatus),
    /// Placeholder and loading text.
    Muted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub style: CellStyle,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: CellStyle::Plain,
        }
    }

    pub fn styled(text: impl Into<String>, style: CellStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// A table with a fixed header row.
///
/// With no rows the table renders a single full-width, centred placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<Cell>>,
    placeholder: &'static str,
}

impl Table {
    pub fn new(headers: Vec<&'static str>, placeholder: &'static str) -> Self {
        Self {
            headers,
            rows: Vec::new(),
            placeholder,
        }
    }

    /// Appends a row. Missing trailing cells render empty; extra cells are ignored.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[&'static str] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i).map(Cell::width))
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Renders one line per row, header first, then a rule.
    pub fn render_with<F>(&self, paint: F) -> Vec<String>
    where
        F: Fn(CellStyle, &str) -> String,
    {
        let widths = self.column_widths();
        let total = widths.iter().sum::<usize>() + COLUMN_GAP.len() * widths.len().saturating_sub(1);

        let mut lines = Vec::with_capacity(self.rows.len().max(1) + 2);
        let header: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| paint(CellStyle::Header, &pad(h, *w)))
            .collect();
        lines.push(header.join(COLUMN_GAP).trim_end().to_string());
        lines.push("-".repeat(total));

        if self.rows.is_empty() {
            lines.push(paint(CellStyle::Muted, &center(self.placeholder, total)));
            return lines;
        }

        for row in &self.rows {
            let cells: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| match row.get(i) {
                    Some(cell) => paint(cell.style, &pad(&cell.text, *w)),
                    None => pad("", *w),
                })
                .collect();
            lines.push(cells.join(COLUMN_GAP).trim_end().to_string());
        }
        lines
    }

    /// Renders without any highlighting.
    pub fn render_plain(&self) -> Vec<String> {
        self.render_with(|_, text| text.to_string())
    }
}

fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

fn center(text: &str, width: usize) -> String {
    format!("{:^width$}", text, width = width)
}
