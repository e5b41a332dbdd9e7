use std::fs::File;
use std::io::Read;

use crate::manager::managererror::ManagerError;

/// Reads a sample grid from headerless CSV, one grid row per record.
///
/// Records of differing length are passed through as-is; rectangularity is
/// checked by the integrator.
pub fn read_grid_from<R>(reader: R) -> Result<Vec<Vec<f64>>, ManagerError> where
    R: Read {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut grid = Vec::new();
    for record in csv_reader.deserialize::<Vec<f64>>() {
        grid.push(record?);
    }
    log::debug!("read {} grid row(s)", grid.len());
    Ok(grid)
}

pub fn read_grid(file_path: String) -> Result<Vec<Vec<f64>>, ManagerError> {
    let file = File::open(file_path)?;
    read_grid_from(file)
}
