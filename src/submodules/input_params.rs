use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scripts::fine_sweep;

use super::{chart_spec::AxisScale, errors::{PlotError, Result}, number_format::{DtFormat, LabelStyle}, type_lib::{Integrator, NumericData}};

/// Everything a sweep needs besides the input and output directories.
///
/// Keys missing from a parameter file keep the values of the fine sweep.
///
/// ```toml
/// integrators = ["Gear", "Beeman", "Verlet"]
/// time_steps = [10.0, 5.0, 1.0]
/// legend_style = { kind = "plain" }
/// legend_template = "Δt = {dt}"
/// title_template = "Integrador {integrator}"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotParams {
    pub integrators: Vec<Integrator>,
    pub time_steps: Vec<NumericData>,
    pub dt_format: DtFormat,
    pub legend_style: LabelStyle,
    /// `{dt}` is replaced by the formatted time step.
    pub legend_template: String,
    /// `{integrator}` is replaced by the integrator name.
    pub title_template: Option<String>,
    pub x_label: String,
    pub y_label: String,
    pub y_scale: AxisScale,
    pub figure_prefix: String,
    pub width: u32,
    pub height: u32,
}

impl Default for PlotParams {
    fn default() -> Self {
        fine_sweep::params()
    }
}

impl PlotParams {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| PlotError::Config(format!("{}: {}", path.display(), e)))?;
        let params = Self::from_toml(&text).map_err(|e| match e {
            PlotError::Config(msg) => PlotError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })?;
        debug!("Loaded plot parameters from {}", path.display());
        Ok(params)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let params: PlotParams = toml::from_str(text).map_err(|e| PlotError::Config(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(dt) = self.time_steps.iter().find(|dt| !(dt.is_finite() && **dt > 0.0)) {
            return Err(PlotError::Config(format!("time step {} is not a positive number", dt)));
        }
        if self.width == 0 || self.height == 0 {
            return Err(PlotError::Config(format!("figure size {}x{} is empty", self.width, self.height)));
        }
        Ok(())
    }

    pub fn legend_label(&self, time_step: NumericData) -> String {
        self.legend_template.replace("{dt}", &self.legend_style.format(time_step))
    }

    pub fn title(&self, integrator: Integrator) -> Option<String> {
        self.title_template
            .as_ref()
            .map(|template| template.replace("{integrator}", integrator.to_str()))
    }
}
