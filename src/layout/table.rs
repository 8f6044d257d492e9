//! Two-pass tabular formatter.
//!
//! Rows are collected first, every column's width is measured over the whole
//! set, and only then are rows padded and emitted. The formatter knows
//! nothing about files; callers hand it already-styled cells.

use crate::style::StyledText;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A padded column and the number of spaces that follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub align: Align,
    pub gap: usize,
}

impl Column {
    pub const fn left(gap: usize) -> Self {
        Self {
            align: Align::Left,
            gap,
        }
    }

    pub const fn right(gap: usize) -> Self {
        Self {
            align: Align::Right,
            gap,
        }
    }
}

#[derive(Debug)]
enum Row {
    /// One cell per column plus an unpadded trailing cell.
    Cells {
        cells: Vec<StyledText>,
        trailing: StyledText,
    },
    /// Emitted verbatim and left out of width measurement.
    Raw(StyledText),
}

#[derive(Debug)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a row. Missing cells render as empty; extra cells are ignored.
    pub fn push_row(&mut self, cells: Vec<StyledText>, trailing: StyledText) {
        self.rows.push(Row::Cells { cells, trailing });
    }

    /// Add a line that bypasses alignment (error markers and the like).
    pub fn push_raw(&mut self, line: StyledText) {
        self.rows.push(Row::Raw(line));
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Maximum visual width of every column over all aligned rows.
    pub fn widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.columns.len()];
        for row in &self.rows {
            if let Row::Cells { cells, .. } = row {
                for (w, cell) in widths.iter_mut().zip(cells) {
                    *w = (*w).max(cell.width());
                }
            }
        }
        widths
    }

    /// Pad every row to the measured widths.
    pub fn render(self) -> Vec<StyledText> {
        let widths = self.widths();
        let empty = StyledText::new();

        self.rows
            .into_iter()
            .map(|row| match row {
                Row::Raw(line) => line,
                Row::Cells { cells, trailing } => {
                    let mut line = StyledText::new();
                    for (i, (column, width)) in self.columns.iter().zip(&widths).enumerate() {
                        let cell = cells.get(i).unwrap_or(&empty);
                        let pad = width.saturating_sub(cell.width());
                        match column.align {
                            Align::Left => {
                                line.append(cell.clone());
                                line.push(" ".repeat(pad + column.gap), None);
                            }
                            Align::Right => {
                                line.push(" ".repeat(pad), None);
                                line.append(cell.clone());
                                line.push(" ".repeat(column.gap), None);
                            }
                        }
                    }
                    line.append(trailing);
                    line
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::Color;

    fn cell(s: &str) -> StyledText {
        StyledText::plain(s)
    }

    #[test]
    fn widths_are_maximum_over_all_rows() {
        let mut t = Table::new(vec![Column::left(1), Column::right(1)]);
        t.push_row(vec![cell("a"), cell("1")], cell("x"));
        t.push_row(vec![cell("abcd"), cell("12345")], cell("y"));
        t.push_raw(cell("this raw line is very long and not measured"));
        assert_eq!(t.widths(), vec![4, 5]);
    }

    #[test]
    fn left_and_right_alignment() {
        let mut t = Table::new(vec![Column::left(2), Column::right(1)]);
        t.push_row(vec![cell("ab"), cell("7")], cell("one"));
        t.push_row(vec![cell("abcd"), cell("123")], cell("two"));
        let lines: Vec<String> = t.render().iter().map(StyledText::plain_text).collect();
        assert_eq!(lines, vec!["ab      7 one", "abcd  123 two"]);
    }

    #[test]
    fn color_does_not_affect_padding() {
        let mut t = Table::new(vec![Column::left(1)]);
        t.push_row(vec![StyledText::colored("red", Some(Color::Red))], cell("a"));
        t.push_row(vec![cell("plain!")], cell("b"));
        let lines = t.render();
        assert_eq!(lines[0].plain_text(), "red    a");
        assert_eq!(lines[0].width(), lines[1].width());
    }

    #[test]
    fn missing_cells_render_empty() {
        let mut t = Table::new(vec![Column::left(1), Column::left(1)]);
        t.push_row(vec![cell("only")], cell("end"));
        t.push_row(vec![cell("a"), cell("bb")], cell("end"));
        let lines: Vec<String> = t.render().iter().map(StyledText::plain_text).collect();
        assert_eq!(lines, vec!["only    end", "a    bb end"]);
    }
}
