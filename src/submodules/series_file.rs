use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use ndarray::Array2;
use tracing::{debug, warn};

use super::{errors::{PlotError, Result}, number_format::DtFormat, type_lib::{Integrator, NumericData, SeriesData}};

const COLUMNS: usize = 2;

/// `optimalDeltaT{integrator}Energy{dt}.txt`
pub fn series_filename(integrator: Integrator, time_step: NumericData, dt_format: DtFormat) -> String {
    format!("optimalDeltaT{}Energy{}.txt", integrator.to_str(), dt_format.format(time_step))
}

pub fn series_path(data_dir: &Path, integrator: Integrator, time_step: NumericData, dt_format: DtFormat) -> PathBuf {
    data_dir.join(series_filename(integrator, time_step, dt_format))
}

/// Reads the energy-error table of one (integrator, time step) run.
pub fn load_series(data_dir: &Path, integrator: Integrator, time_step: NumericData, dt_format: DtFormat) -> Result<SeriesData> {
    let path = series_path(data_dir, integrator, time_step, dt_format);
    let series = read_table(&path)?;
    if series.is_empty() {
        warn!("{} holds no rows, its curve will be empty", path.display());
    } else {
        debug!("Read {} rows from {}", series.len(), path.display());
    }
    Ok(series)
}

pub fn read_table(path: &Path) -> Result<SeriesData> {
    let data = std::fs::read(path).map_err(|source| PlotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table(&data, path)
}

/// Parses comma separated `time, relative error` rows.
///
/// Blank lines and `#` comments are skipped. `path` only labels errors;
/// reported lines are where the csv reader starts the offending record.
pub fn parse_table(data: &[u8], path: &Path) -> Result<SeriesData> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .flexible(true)
        .from_reader(data);

    let mut values: Vec<NumericData> = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| PlotError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let line = record.position().map_or(0, |pos| pos.line() as usize);
        if record.len() != COLUMNS {
            return Err(PlotError::ColumnCount {
                path: path.to_path_buf(),
                line,
                found: record.len(),
            });
        }
        for field in record.iter() {
            let value = field.parse::<NumericData>().map_err(|_| PlotError::Parse {
                path: path.to_path_buf(),
                line,
                token: field.to_string(),
            })?;
            values.push(value);
        }
    }

    let rows = values.len() / COLUMNS;
    let table = Array2::from_shape_vec((rows, COLUMNS), values)?;
    Ok(SeriesData { table })
}
