use crate::submodules::{chart_spec::AxisScale, input_params::PlotParams, number_format::{DtFormat, LabelStyle}, type_lib::Integrator};

pub fn params() -> PlotParams {
    PlotParams {
        integrators: vec![Integrator::Verlet, Integrator::Beeman, Integrator::Gear],
        time_steps: vec![0.1, 0.01, 0.001, 0.0001],
        dt_format: DtFormat::Python,
        legend_style: LabelStyle::Scientific { precision: 0 },
        legend_template: "Δt = {dt}s".to_string(),
        title_template: None,
        x_label: "Tiempo (s)".to_string(),
        y_label: "Error relativo".to_string(),
        y_scale: AxisScale::Log,
        figure_prefix: "optimalDeltaT".to_string(),
        // 8x5 in at 100 dpi
        width: 800,
        height: 500,
    }
}
