use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::{input_params::PlotParams, type_lib::{Integrator, NumericData, SeriesData}};

const DEFAULT_X: Range<NumericData> = 0.0..1.0;
const DEFAULT_Y: Range<NumericData> = 1e-16..1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    Linear,
    #[default]
    Log,
}

/// One time step's error history.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub time_step: NumericData,
    pub label: String,
    pub points: Vec<(NumericData, NumericData)>,
}

impl AxisScale {
    /// Whether `y` has a place on this axis. Log axes drop zero, negative
    /// and subnormal values.
    pub fn shows(&self, y: NumericData) -> bool {
        match self {
            AxisScale::Linear => y.is_finite(),
            AxisScale::Log => y.is_normal() && y > 0.0,
        }
    }
}

impl Curve {
    fn drawable(y_scale: AxisScale, (x, y): (NumericData, NumericData)) -> bool {
        x.is_finite() && y_scale.shows(y)
    }

    /// Points an axis of the given scale can show.
    pub fn drawable_points(&self, y_scale: AxisScale) -> impl Iterator<Item = (NumericData, NumericData)> + '_ {
        self.points.iter().copied().filter(move |&point| Self::drawable(y_scale, point))
    }

    /// Stretches of consecutive drawable points; the line breaks at every
    /// masked point instead of bridging it.
    pub fn drawable_runs(&self, y_scale: AxisScale) -> Vec<Vec<(NumericData, NumericData)>> {
        let mut runs = Vec::new();
        let mut current = Vec::new();
        for &point in self.points.iter() {
            if Self::drawable(y_scale, point) {
                current.push(point);
            } else if !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }
        runs
    }

    pub fn masked_count(&self, y_scale: AxisScale) -> usize {
        self.points.len() - self.drawable_points(y_scale).count()
    }
}

/// Backend independent description of one figure.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub integrator: Integrator,
    pub title: Option<String>,
    pub x_label: String,
    pub y_label: String,
    pub y_scale: AxisScale,
    pub curves: Vec<Curve>,
}

impl ChartSpec {
    /// Maps loaded series onto curves, in the order given.
    pub fn build(params: &PlotParams, integrator: Integrator, series: Vec<(NumericData, SeriesData)>) -> Self {
        let curves = series
            .into_iter()
            .map(|(time_step, data)| Curve {
                time_step,
                label: params.legend_label(time_step),
                points: data.points().collect(),
            })
            .collect();
        ChartSpec {
            integrator,
            title: params.title(integrator),
            x_label: params.x_label.clone(),
            y_label: params.y_label.clone(),
            y_scale: params.y_scale,
            curves,
        }
    }

    pub fn x_range(&self) -> Range<NumericData> {
        let xs = self.curves.iter().flat_map(|curve| curve.drawable_points(self.y_scale)).map(|(x, _)| x);
        match min_max(xs) {
            Some((lo, hi)) if lo == hi => lo..hi + 1.0,
            Some((lo, hi)) => lo..hi,
            None => DEFAULT_X,
        }
    }

    pub fn y_range(&self) -> Range<NumericData> {
        let ys = self.curves.iter().flat_map(|curve| curve.drawable_points(self.y_scale)).map(|(_, y)| y);
        match (min_max(ys), self.y_scale) {
            (Some((lo, hi)), AxisScale::Log) if lo == hi => (lo / 10.0).max(NumericData::MIN_POSITIVE)..(hi * 10.0).min(NumericData::MAX),
            (Some((lo, hi)), AxisScale::Linear) if lo == hi => lo - 1.0..hi + 1.0,
            (Some((lo, hi)), _) => lo..hi,
            (None, _) => DEFAULT_Y,
        }
    }
}

fn min_max(values: impl Iterator<Item = NumericData>) -> Option<(NumericData, NumericData)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
