use std::fmt;

/// One spreadsheet cell as read from a source, before schema typing.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    /// True for empty cells and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(text) => text.trim().is_empty(),
            Cell::Number(_) | Cell::Bool(_) => false,
        }
    }

    /// Trimmed textual form; integral numbers drop their fractional part.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Cell::Number(value) => Some(format_number(*value)),
            Cell::Bool(value) => Some(value.to_string()),
        }
    }

    /// Numeric value; text accepts either `.` or `,` as the decimal separator.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(value) if value.is_finite() => Some(*value),
            Cell::Text(text) => parse_decimal(text),
            _ => None,
        }
    }

    /// Calendar year stored either as an integral number or as integer text.
    pub fn as_year(&self) -> Option<i32> {
        match self {
            Cell::Number(value) if value.fract() == 0.0 => i32::try_from(*value as i64).ok(),
            Cell::Text(text) => {
                let trimmed = text.trim();
                trimmed.parse::<i32>().ok().or_else(|| {
                    let value = trimmed.parse::<f64>().ok()?;
                    if value.fract() != 0.0 {
                        return None;
                    }
                    i32::try_from(value as i64).ok()
                })
            }
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(text) => f.write_str(text),
            Cell::Number(value) => f.write_str(&format_number(*value)),
            Cell::Bool(value) => write!(f, "{value}"),
        }
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed = trimmed
        .parse::<f64>()
        .ok()
        .or_else(|| trimmed.replace(',', ".").parse::<f64>().ok())?;
    parsed.is_finite().then_some(parsed)
}

/// A sheet snapshot: the first row as headers, the rest as records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawTable {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl RawTable {
    /// Build a table from row-major cells.
    ///
    /// Short rows are padded so every record is as wide as the header row.
    /// Blank rows are kept so record indices still map to sheet rows.
    pub fn from_grid(name: impl Into<String>, grid: impl IntoIterator<Item = Vec<Cell>>) -> Self {
        let mut grid = grid.into_iter();
        let headers: Vec<String> = grid
            .next()
            .map(|row| row.iter().map(|cell| cell.to_string().trim().to_string()).collect())
            .unwrap_or_default();
        let width = headers.len();
        let rows = grid
            .map(|mut row| {
                if row.len() < width {
                    row.resize(width, Cell::Empty);
                }
                row
            })
            .collect();
        Self {
            name: name.into(),
            headers,
            rows,
        }
    }

    /// Convenience constructor for literal tables in tests and benches.
    pub fn from_text_rows(name: &str, headers: &[&str], rows: &[&[&str]]) -> Self {
        let grid = std::iter::once(headers.iter().map(|h| Cell::Text(h.to_string())).collect())
            .chain(rows.iter().map(|row| {
                row.iter()
                    .map(|value| {
                        if value.is_empty() {
                            Cell::Empty
                        } else {
                            Cell::Text(value.to_string())
                        }
                    })
                    .collect()
            }));
        Self::from_grid(name, grid)
    }

    /// True when no record holds a non-blank cell.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.iter().all(Cell::is_blank))
    }

    /// 1-based sheet row of the record at `index`, counting the header row.
    pub fn sheet_row(index: usize) -> usize {
        index + 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_render_without_trailing_zero() {
        assert_eq!(Cell::Number(2020.0).as_text().as_deref(), Some("2020"));
        assert_eq!(Cell::Number(1.25).as_text().as_deref(), Some("1.25"));
        assert_eq!(Cell::Text("  Bali ".into()).as_text().as_deref(), Some("Bali"));
        assert_eq!(Cell::Text("   ".into()).as_text(), None);
    }

    #[test]
    fn decimal_text_accepts_comma_separator() {
        assert_eq!(Cell::Text("0,75".into()).as_f64(), Some(0.75));
        assert_eq!(Cell::Text("1.5".into()).as_f64(), Some(1.5));
        assert_eq!(Cell::Text("n/a".into()).as_f64(), None);
        assert_eq!(Cell::Number(f64::NAN).as_f64(), None);
    }

    #[test]
    fn years_parse_from_numbers_and_text() {
        assert_eq!(Cell::Number(2019.0).as_year(), Some(2019));
        assert_eq!(Cell::Text("2021".into()).as_year(), Some(2021));
        assert_eq!(Cell::Text("2021.0".into()).as_year(), Some(2021));
        assert_eq!(Cell::Number(2019.5).as_year(), None);
        assert_eq!(Cell::Bool(true).as_year(), None);
        assert_eq!(Cell::Text("1e12".into()).as_year(), None);
        assert_eq!(Cell::Number(1e12).as_year(), None);
    }

    #[test]
    fn grid_pads_short_rows_and_keeps_blank_ones() {
        let table = RawTable::from_grid(
            "keu_prov",
            vec![
                vec![Cell::Text(" Pemda ".into()), Cell::Text("Tahun".into())],
                vec![Cell::Empty, Cell::Text(" ".into())],
                vec![Cell::Text("Bali".into())],
            ],
        );
        assert_eq!(table.headers, vec!["Pemda", "Tahun"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec![Cell::Text("Bali".into()), Cell::Empty]);
        assert!(!table.is_empty());
        assert_eq!(RawTable::sheet_row(1), 3);
    }
}
