//! Small datasets shipped with the crate for examples and documentation.
//!
//! ```
//! use polar_chart::demo_data::{available_datasets, load_demo_dataset};
//!
//! let names: Vec<String> = available_datasets()?.into_iter().map(|info| info.name).collect();
//! assert!(names.contains(&"mtcars".to_owned()));
//!
//! let mtcars = load_demo_dataset("mtcars")?;
//! assert_eq!(mtcars.row_count(), 10);
//! # Ok::<(), polar_chart::ChartError>(())
//! ```

use tracing::debug;

use crate::core::{ColumnData, Table};
use crate::error::{ChartError, ChartResult};

const CATALOG_NAME: &str = "available_demodata.csv";
const CATALOG: &str = include_str!("../data/available_demodata.csv");

fn bundled_file(file: &str) -> Option<&'static str> {
    match file {
        "mtcars.csv" => Some(include_str!("../data/mtcars.csv")),
        "reto.csv" => Some(include_str!("../data/reto.csv")),
        "widgets.csv" => Some(include_str!("../data/widgets.csv")),
        _ => None,
    }
}

/// One entry of the dataset catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetInfo {
    pub name: String,
    pub description: String,
    pub file: String,
    /// Field promoted to the row index, if any.
    pub index_column: Option<usize>,
}

/// Lists all bundled datasets.
pub fn available_datasets() -> ChartResult<Vec<DatasetInfo>> {
    let catalog = Table::from_delimited(CATALOG, ',', Some(0))
        .map_err(|err| load_error(CATALOG_NAME, err))?;
    let names = catalog.index().unwrap_or_default();

    let descriptions = text_column(&catalog, "description")?;
    let files = text_column(&catalog, "file")?;
    let index_columns = match catalog.column("index_col").map(|column| column.data()) {
        Some(ColumnData::Numeric(values)) => values,
        _ => {
            return Err(ChartError::DataLoad {
                dataset: CATALOG_NAME.to_owned(),
                reason: "catalog column `index_col` missing or not numeric".to_owned(),
            });
        }
    };

    Ok(names
        .iter()
        .zip(descriptions)
        .zip(files)
        .zip(index_columns)
        .map(|(((name, description), file), index_column)| DatasetInfo {
            name: name.clone(),
            description: description.clone(),
            file: file.clone(),
            index_column: index_column.is_finite().then_some(*index_column as usize),
        })
        .collect())
}

/// Loads a bundled dataset by name.
///
/// Unknown names fail with `InvalidArgumentValue` listing the choices; a file
/// that cannot be parsed fails with `DataLoad` and yields no table at all.
pub fn load_demo_dataset(name: &str) -> ChartResult<Table> {
    let datasets = available_datasets()?;
    let Some(info) = datasets.iter().find(|info| info.name == name) else {
        let choices: Vec<String> = datasets
            .iter()
            .map(|info| format!("\"{}\"", info.name))
            .collect();
        return Err(ChartError::invalid_value(
            "name",
            format!("dataset must be one of {}", choices.join(", ")),
        ));
    };

    let text = bundled_file(&info.file).ok_or_else(|| ChartError::DataLoad {
        dataset: info.file.clone(),
        reason: "file is not bundled with this build".to_owned(),
    })?;
    let table = Table::from_delimited(text, ',', info.index_column)
        .map_err(|err| load_error(&info.file, err))?;

    debug!(
        dataset = name,
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded demo dataset"
    );
    Ok(table)
}

fn text_column<'a>(catalog: &'a Table, name: &str) -> ChartResult<&'a [String]> {
    match catalog.column(name).map(|column| column.data()) {
        Some(ColumnData::Text(values)) => Ok(values),
        _ => Err(ChartError::DataLoad {
            dataset: CATALOG_NAME.to_owned(),
            reason: format!("catalog column `{name}` missing or not text"),
        }),
    }
}

fn load_error(dataset: &str, err: ChartError) -> ChartError {
    ChartError::DataLoad {
        dataset: dataset.to_owned(),
        reason: err.to_string(),
    }
}
