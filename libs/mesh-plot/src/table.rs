//! # Results Table
//!
//! Comma-separated solver output: one header row, then data rows. The
//! plotted fields sit at fixed column positions:
//!
//! | Column | Field |
//! |---|---|
//! | 3 | `p` |
//! | 4 | `sqrt(u^2+v^2)` |
//! | 5 | `u` |
//! | 6 | `v` |

use std::path::{Path, PathBuf};

use crate::PlotError;

/// Field names and their 0-based columns.
pub const FIELD_COLUMNS: [(&str, usize); 4] = [("p", 3), ("sqrt(u^2+v^2)", 4), ("u", 5), ("v", 6)];

#[derive(Debug, Clone, PartialEq)]
struct Row {
    /// 1-based line in the source file
    line: usize,
    cells: Vec<String>,
}

/// A table with named columns.
///
/// Cells are kept as text and only parsed as numbers when their column is
/// requested, so label columns do not need to be numeric. Empty cells read
/// as NaN.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsTable {
    path: PathBuf,
    header: Vec<String>,
    rows: Vec<Row>,
}

impl ResultsTable {
    /// Reads a CSV file whose first line is the header.
    pub fn read_csv(path: impl AsRef<Path>) -> Result<Self, PlotError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| PlotError::file(path, e))?;
        Self::parse(&text, path)
    }

    fn parse(text: &str, path: &Path) -> Result<Self, PlotError> {
        let mut lines = text
            .lines()
            .enumerate()
            .filter(|(_, l)| !l.trim().is_empty());

        let header = match lines.next() {
            Some((i, line)) => split_record(line, path, i + 1)?,
            None => return Err(PlotError::parse(path, 1, "empty table")),
        };

        let mut rows = Vec::new();
        for (i, line) in lines {
            rows.push(Row {
                line: i + 1,
                cells: split_record(line, path, i + 1)?,
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            header,
            rows,
        })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Smallest row width; the header does not count.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.cells.len())
            .min()
            .unwrap_or(self.header.len())
    }

    /// Values of one 0-based column.
    pub fn column(&self, index: usize) -> Result<Vec<f64>, PlotError> {
        let available = self.column_count();
        if index >= available {
            return Err(PlotError::MissingColumn {
                column: index,
                available,
            });
        }
        self.rows
            .iter()
            .map(|row| {
                let cell = row.cells[index].as_str();
                if cell.is_empty() {
                    return Ok(f64::NAN);
                }
                cell.parse::<f64>().map_err(|_| {
                    PlotError::parse(&self.path, row.line, format!("'{}' is not a number", cell))
                })
            })
            .collect()
    }

    /// The four plotted fields, named, in column order.
    pub fn fields(&self) -> Result<Vec<(&'static str, Vec<f64>)>, PlotError> {
        FIELD_COLUMNS
            .iter()
            .map(|&(name, column)| Ok((name, self.column(column)?)))
            .collect()
    }
}

/// Splits one CSV record. Quoted cells may hold commas, and `""` inside
/// quotes is a literal quote. Unquoted cells are trimmed.
fn split_record(line: &str, path: &Path, line_no: usize) -> Result<Vec<String>, PlotError> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut quoted = false;
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    cell.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if cell.trim().is_empty() && !quoted => {
                cell.clear();
                quoted = true;
                in_quotes = true;
            }
            ',' if !in_quotes => {
                cells.push(finish_cell(&mut cell, quoted));
                quoted = false;
            }
            c => cell.push(c),
        }
    }
    if in_quotes {
        return Err(PlotError::parse(path, line_no, "unterminated quoted field"));
    }
    cells.push(finish_cell(&mut cell, quoted));
    Ok(cells)
}

fn finish_cell(cell: &mut String, quoted: bool) -> String {
    let text = std::mem::take(cell);
    if quoted {
        // Only whitespace may follow the closing quote
        text.trim_end().to_string()
    } else {
        text.trim().to_string()
    }
}
