use std::fmt;

use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

pub type NumericData = f64;

/// Time-integration scheme whose energy error is being plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Integrator {
    Verlet,
    Beeman,
    Gear,
}

impl Integrator {
    pub fn to_str(&self) -> &str {
        match self {
            Integrator::Verlet => "Verlet",
            Integrator::Beeman => "Beeman",
            Integrator::Gear => "Gear",
        }
    }
}

impl fmt::Display for Integrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// One (time, relative error) table as read from disk, shape `(rows, 2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesData {
    pub table: Array2<NumericData>,
}

impl SeriesData {
    pub fn empty() -> Self {
        SeriesData { table: Array2::zeros((0, 2)) }
    }

    pub fn time(&self) -> ArrayView1<'_, NumericData> {
        self.table.column(0)
    }

    pub fn relative_error(&self) -> ArrayView1<'_, NumericData> {
        self.table.column(1)
    }

    /// `(time, relative error)` pairs in file order.
    pub fn points(&self) -> impl Iterator<Item = (NumericData, NumericData)> + '_ {
        self.table.rows().into_iter().map(|row| (row[0], row[1]))
    }

    pub fn len(&self) -> usize {
        self.table.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.table.nrows() == 0
    }
}
