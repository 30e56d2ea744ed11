use crate::submodules::{chart_spec::AxisScale, input_params::PlotParams, number_format::{DtFormat, LabelStyle}, type_lib::Integrator};

pub fn params() -> PlotParams {
    PlotParams {
        integrators: vec![Integrator::Gear, Integrator::Beeman, Integrator::Verlet],
        time_steps: vec![10.0, 5.0, 1.0, 0.5, 0.1],
        dt_format: DtFormat::Python,
        legend_style: LabelStyle::Plain,
        legend_template: "Δt = {dt}".to_string(),
        title_template: Some("Integrador {integrator}".to_string()),
        x_label: "Tiempo".to_string(),
        y_label: "Error relativo de la energía".to_string(),
        y_scale: AxisScale::Log,
        figure_prefix: "optimalDeltaTCoarse".to_string(),
        width: 800,
        height: 500,
    }
}
