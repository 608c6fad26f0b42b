use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

const MISSING_MARKERS: [&str; 3] = ["", "NA", "None"];

/// Cell storage for one named column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Numeric(Vec<f64>),
    Text(Vec<String>),
}

impl ColumnData {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(values) => values.len(),
            Self::Text(values) => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cell_label(&self, row: usize) -> String {
        match self {
            Self::Numeric(values) => format!("{}", values[row]),
            Self::Text(values) => values[row].clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    #[must_use]
    pub fn numeric(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Numeric(values),
        }
    }

    #[must_use]
    pub fn text<S: Into<String>>(name: impl Into<String>, values: Vec<S>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Text(values.into_iter().map(Into::into).collect()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self.data, ColumnData::Numeric(_))
    }
}

/// Which values name the individual charts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LabelSource {
    /// Charts are drawn without labels.
    None,
    /// Row index of the table, or `0..n` when the table has none.
    #[default]
    Index,
    /// Values of the named column; the column is removed from the data.
    Column(String),
}

/// Raw caller input: rectangular, uniquely named columns, optional row index.
///
/// Columns may hold text; `prepare` turns the table into a `NumericTable`.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    index: Option<Vec<String>>,
    row_count: usize,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> ChartResult<Self> {
        let Some(first) = columns.first() else {
            return Err(ChartError::DataShape("table must have at least one column".to_owned()));
        };
        let row_count = first.data.len();

        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if column.name.is_empty() {
                return Err(ChartError::DataShape("column names must not be empty".to_owned()));
            }
            if !seen.insert(column.name.as_str()) {
                return Err(ChartError::DataShape(format!(
                    "duplicate column name `{}`",
                    column.name
                )));
            }
            if column.data.len() != row_count {
                return Err(ChartError::DataShape(format!(
                    "column `{}` has {} rows, expected {row_count}",
                    column.name,
                    column.data.len()
                )));
            }
        }

        Ok(Self {
            columns,
            index: None,
            row_count,
        })
    }

    /// Builds an all-numeric table from labelled rows.
    pub fn from_numeric_rows<C, L>(
        column_names: &[C],
        rows: Vec<(L, Vec<f64>)>,
    ) -> ChartResult<Self>
    where
        C: AsRef<str>,
        L: Into<String>,
    {
        let mut index = Vec::with_capacity(rows.len());
        let mut values = vec![Vec::with_capacity(rows.len()); column_names.len()];
        for (row_number, (label, row)) in rows.into_iter().enumerate() {
            if row.len() != column_names.len() {
                return Err(ChartError::DataShape(format!(
                    "row {row_number} has {} values, expected {}",
                    row.len(),
                    column_names.len()
                )));
            }
            index.push(label.into());
            for (column, value) in values.iter_mut().zip(row) {
                column.push(value);
            }
        }

        let columns = column_names
            .iter()
            .zip(values)
            .map(|(name, values)| Column::numeric(name.as_ref(), values))
            .collect();
        Self::new(columns)?.with_index(index)
    }

    /// Parses delimited text with a header line.
    ///
    /// Fields are trimmed and may be quoted to contain the delimiter. A column
    /// becomes numeric when every cell parses as a float; `NA`, `None` and
    /// empty cells count as missing (NaN). `index_column` promotes that field
    /// to the row index.
    pub fn from_delimited(
        text: &str,
        delimiter: char,
        index_column: Option<usize>,
    ) -> ChartResult<Self> {
        if !delimiter.is_ascii() {
            return Err(ChartError::invalid_value(
                "delimiter",
                format!("`{delimiter}` is not an ASCII character"),
            ));
        }
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter as u8)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let header: Vec<String> = reader
            .headers()
            .map_err(malformed_text)?
            .iter()
            .map(str::to_owned)
            .collect();
        if header.is_empty() {
            return Err(ChartError::DataShape("delimited text has no header line".to_owned()));
        }
        if let Some(index_column) = index_column {
            if index_column >= header.len() {
                return Err(ChartError::DataShape(format!(
                    "index column {index_column} out of range for {} fields",
                    header.len()
                )));
            }
        }

        let mut cells: Vec<Vec<String>> = vec![Vec::new(); header.len()];
        for record in reader.records() {
            let record = record.map_err(malformed_text)?;
            for (column, field) in cells.iter_mut().zip(record.iter()) {
                column.push(field.to_owned());
            }
        }

        let mut index = None;
        let mut columns = Vec::with_capacity(header.len());
        for (position, (name, column)) in header.iter().zip(cells).enumerate() {
            if Some(position) == index_column {
                index = Some(column);
                continue;
            }
            columns.push(infer_column(name, column));
        }

        let table = Self::new(columns)?;
        match index {
            Some(index) => table.with_index(index),
            None => Ok(table),
        }
    }

    pub fn with_index(mut self, index: Vec<String>) -> ChartResult<Self> {
        if index.len() != self.row_count {
            return Err(ChartError::DataShape(format!(
                "index has {} entries, expected {}",
                index.len(),
                self.row_count
            )));
        }
        self.index = Some(index);
        Ok(self)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    #[must_use]
    pub fn index(&self) -> Option<&[String]> {
        self.index.as_deref()
    }

    /// Resolves labels and drops or rejects non-numeric columns.
    pub fn prepare(
        &self,
        label_source: &LabelSource,
        numeric_only: bool,
    ) -> ChartResult<NumericTable> {
        if self.row_count == 0 {
            return Err(ChartError::DataShape("table has no rows".to_owned()));
        }

        let mut remaining: Vec<&Column> = self.columns.iter().collect();
        let labels = match label_source {
            LabelSource::None => None,
            LabelSource::Index => Some(self.index.clone().unwrap_or_else(|| {
                (0..self.row_count).map(|row| row.to_string()).collect()
            })),
            LabelSource::Column(name) => {
                let Some(position) = remaining.iter().position(|column| &column.name == name)
                else {
                    return Err(ChartError::DataShape(format!(
                        "label column `{name}` is not a column of the table"
                    )));
                };
                let column = remaining.remove(position);
                Some((0..self.row_count).map(|row| column.data.cell_label(row)).collect())
            }
        };

        let non_numeric: Vec<&str> = remaining
            .iter()
            .filter(|column| !column.is_numeric())
            .map(|column| column.name.as_str())
            .collect();
        if !non_numeric.is_empty() && !numeric_only {
            let after = match label_source {
                LabelSource::Column(name) => format!(" after using `{name}` for labels"),
                _ => String::new(),
            };
            return Err(ChartError::DataShape(format!(
                "non-numeric columns found{after}: {}; set numeric_only to drop them or pick \
                 one of them as label column",
                non_numeric.join(", ")
            )));
        }

        let mut names = Vec::with_capacity(remaining.len());
        let mut numeric_columns = Vec::with_capacity(remaining.len());
        for column in remaining {
            if let ColumnData::Numeric(values) = &column.data {
                names.push(column.name.clone());
                numeric_columns.push(values);
            }
        }
        if names.is_empty() {
            return Err(ChartError::DataShape(
                "no numeric columns left in the table".to_owned(),
            ));
        }

        let rows = (0..self.row_count)
            .map(|row| numeric_columns.iter().map(|values| values[row]).collect())
            .collect();
        NumericTable::new(names, labels, rows)
    }
}

fn malformed_text(err: csv::Error) -> ChartError {
    ChartError::DataShape(format!("malformed delimited text: {err}"))
}

fn infer_column(name: &str, cells: Vec<String>) -> Column {
    let parsed: Option<Vec<f64>> = cells
        .iter()
        .map(|cell| {
            if MISSING_MARKERS.contains(&cell.as_str()) {
                Some(f64::NAN)
            } else {
                cell.parse::<f64>().ok()
            }
        })
        .collect();
    match parsed {
        Some(values) => Column::numeric(name, values),
        None => Column::text(name, cells),
    }
}

/// Rectangular numeric data ready for scaling and geometry.
///
/// Rows are entities (one chart each), columns are variables (one segment each).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericTable {
    columns: Vec<String>,
    labels: Option<Vec<String>>,
    pub(crate) rows: Vec<Vec<f64>>,
}

impl NumericTable {
    pub fn new(
        columns: Vec<String>,
        labels: Option<Vec<String>>,
        rows: Vec<Vec<f64>>,
    ) -> ChartResult<Self> {
        if columns.is_empty() {
            return Err(ChartError::DataShape("table must have at least one column".to_owned()));
        }
        if rows.is_empty() {
            return Err(ChartError::DataShape("table has no rows".to_owned()));
        }
        if let Some(position) = rows.iter().position(|row| row.len() != columns.len()) {
            return Err(ChartError::DataShape(format!(
                "row {position} has {} values, expected {}",
                rows[position].len(),
                columns.len()
            )));
        }
        if let Some(labels) = &labels {
            if labels.len() != rows.len() {
                return Err(ChartError::DataShape(format!(
                    "{} labels for {} rows",
                    labels.len(),
                    rows.len()
                )));
            }
        }
        Ok(Self {
            columns,
            labels,
            rows,
        })
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    #[must_use]
    pub fn label(&self, row: usize) -> Option<&str> {
        self.labels.as_ref()?.get(row).map(String::as_str)
    }

    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        &self.rows[row]
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    #[must_use]
    pub fn column_values(&self, column: usize) -> Vec<f64> {
        self.rows.iter().map(|row| row[column]).collect()
    }

    /// Largest value across the whole table, ignoring NaN.
    ///
    /// Returns NaN when every value is NaN.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.rows
            .iter()
            .flatten()
            .copied()
            .fold(f64::NAN, f64::max)
    }
}

impl fmt::Display for NumericTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.columns.join("\t"))?;
        for (row_index, row) in self.rows.iter().enumerate() {
            writeln!(f)?;
            if let Some(label) = self.label(row_index) {
                write!(f, "{label}\t")?;
            }
            let cells: Vec<String> = row.iter().map(|value| format!("{value:.3}")).collect();
            write!(f, "{}", cells.join("\t"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Column, ColumnData, infer_column};

    #[test]
    fn missing_markers_keep_column_numeric() {
        let column = infer_column("mpg", vec!["21.0".to_owned(), "NA".to_owned(), String::new()]);
        let ColumnData::Numeric(values) = column.data() else {
            panic!("expected numeric column");
        };
        assert_eq!(values[0], 21.0);
        assert!(values[1].is_nan());
        assert!(values[2].is_nan());
    }

    #[test]
    fn any_unparsable_cell_makes_column_text() {
        let column = infer_column("name", vec!["1".to_owned(), "Widget".to_owned()]);
        assert_eq!(column, Column::text("name", vec!["1", "Widget"]));
    }
}
