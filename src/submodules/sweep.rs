use std::path::{Path, PathBuf};

use tracing::info;

use super::{chart_spec::ChartSpec, errors::Result, figure_sink::{FigureSink, FigureSinkTrait}, input_params::PlotParams, series_file::load_series, type_lib::Integrator};

/// Loads every time step of one integrator and builds its chart.
pub fn build_chart(params: &PlotParams, data_dir: &Path, integrator: Integrator) -> Result<ChartSpec> {
    let mut series = Vec::with_capacity(params.time_steps.len());
    for &time_step in params.time_steps.iter() {
        series.push((time_step, load_series(data_dir, integrator, time_step, params.dt_format)?));
    }
    Ok(ChartSpec::build(params, integrator, series))
}

/// One figure per integrator, in configured order.
///
/// Each figure is written before the next integrator's files are read, so
/// a failure leaves the earlier figures on disk and stops the sweep.
pub fn run_sweep(params: &PlotParams, data_dir: &Path, sink: &FigureSink) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(params.integrators.len());
    for &integrator in params.integrators.iter() {
        info!("Plotting {} over {} time steps", integrator, params.time_steps.len());
        let chart = build_chart(params, data_dir, integrator)?;
        let stem = format!("{}{}", params.figure_prefix, integrator);
        let path = sink.present(&chart, &stem)?;
        info!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::submodules::{errors::PlotError, figure_sink::OutputFormat, series_file::series_filename};
    use crate::scripts::{coarse_sweep, fine_sweep};

    fn write_series(dir: &Path, params: &PlotParams, integrator: Integrator, body: &str) {
        for &dt in params.time_steps.iter() {
            fs::write(dir.join(series_filename(integrator, dt, params.dt_format)), body).unwrap();
        }
    }

    #[test]
    fn chart_holds_every_time_step_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let params = fine_sweep::params();
        write_series(dir.path(), &params, Integrator::Beeman, "0.0,1e-3\n1.0,2e-3\n");

        let chart = build_chart(&params, dir.path(), Integrator::Beeman).unwrap();
        let steps = chart.curves.iter().map(|c| c.time_step).collect::<Vec<_>>();
        assert_eq!(steps, params.time_steps);
        assert!(chart.curves.iter().all(|c| c.points == vec![(0.0, 1e-3), (1.0, 2e-3)]));
    }

    #[test]
    fn gear_coarse_subset_gives_three_labelled_curves() {
        let dir = tempfile::tempdir().unwrap();
        let mut params = coarse_sweep::params();
        params.time_steps = vec![10.0, 5.0, 1.0];
        write_series(dir.path(), &params, Integrator::Gear, "0.0,0.1\n");

        let chart = build_chart(&params, dir.path(), Integrator::Gear).unwrap();
        assert_eq!(chart.curves.len(), 3);
        assert_eq!(chart.curves[0].label, "Δt = 10.0");
    }

    #[test]
    fn empty_time_step_list_builds_empty_chart() {
        let dir = tempfile::tempdir().unwrap();
        let mut params = fine_sweep::params();
        params.time_steps.clear();
        let chart = build_chart(&params, dir.path(), Integrator::Verlet).unwrap();
        assert!(chart.curves.is_empty());
    }

    fn write_all_series(dir: &Path, params: &PlotParams, body: &str) {
        for &integrator in params.integrators.iter() {
            write_series(dir, params, integrator, body);
        }
    }

    fn figure_names(dir: &Path) -> Vec<String> {
        let mut names = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect::<Vec<_>>();
        names.sort();
        names
    }

    #[test]
    fn fine_sweep_writes_one_svg_per_integrator() {
        let data = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let params = fine_sweep::params();
        write_all_series(data.path(), &params, "0.0,1e-3\n0.5,4e-4\n1.0,2e-3\n");

        let sink = FigureSink::new(OutputFormat::Svg, out.path(), (params.width, params.height));
        let written = run_sweep(&params, data.path(), &sink).unwrap();

        assert_eq!(written.len(), 3);
        assert_eq!(
            figure_names(out.path()),
            ["optimalDeltaTBeeman.svg", "optimalDeltaTGear.svg", "optimalDeltaTVerlet.svg"]
        );
        let svg = fs::read_to_string(out.path().join("optimalDeltaTVerlet.svg")).unwrap();
        assert!(svg.contains("Δt = 1e-04s"));
    }

    #[test]
    fn coarse_sweep_writes_one_png_per_integrator() {
        let data = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let params = coarse_sweep::params();
        write_all_series(data.path(), &params, "0.0,0.1\n10.0,0.2\n");

        let sink = FigureSink::new(OutputFormat::Png, out.path(), (params.width, params.height));
        let written = run_sweep(&params, data.path(), &sink).unwrap();

        assert_eq!(written, vec![
            out.path().join("optimalDeltaTCoarseGear.png"),
            out.path().join("optimalDeltaTCoarseBeeman.png"),
            out.path().join("optimalDeltaTCoarseVerlet.png"),
        ]);
        assert!(written.iter().all(|path| path.is_file()));
    }

    #[test]
    fn empty_input_files_still_give_figures() {
        let data = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let params = fine_sweep::params();
        write_all_series(data.path(), &params, "");

        let sink = FigureSink::new(OutputFormat::Svg, out.path(), (params.width, params.height));
        assert_eq!(run_sweep(&params, data.path(), &sink).unwrap().len(), 3);
    }

    #[test]
    fn zero_time_steps_still_give_figures() {
        let data = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let mut params = fine_sweep::params();
        params.time_steps.clear();

        let sink = FigureSink::new(OutputFormat::Svg, out.path(), (params.width, params.height));
        assert_eq!(run_sweep(&params, data.path(), &sink).unwrap().len(), 3);
    }

    #[test]
    fn subnormal_errors_do_not_stall_rendering() {
        let data = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let mut params = fine_sweep::params();
        params.integrators = vec![Integrator::Gear];
        params.time_steps = vec![0.1, 0.01];
        fs::write(data.path().join(series_filename(Integrator::Gear, 0.1, params.dt_format)), "0.0,5e-324\n").unwrap();
        fs::write(data.path().join(series_filename(Integrator::Gear, 0.01, params.dt_format)), "0.0,1e-310\n1.0,0.5\n").unwrap();

        let sink = FigureSink::new(OutputFormat::Svg, out.path(), (params.width, params.height));
        assert_eq!(run_sweep(&params, data.path(), &sink).unwrap().len(), 1);
    }

    #[test]
    fn malformed_file_stops_before_any_figure() {
        let data = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let params = fine_sweep::params();
        write_series(data.path(), &params, Integrator::Verlet, "0.0,1.0\n1.0,nan?\n");

        let sink = FigureSink::new(OutputFormat::Svg, out.path(), (params.width, params.height));
        let err = run_sweep(&params, data.path(), &sink).unwrap_err();
        assert!(matches!(err, PlotError::Parse { line: 2, .. }));
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[test]
    fn missing_file_stops_the_sweep() {
        let data = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let params = fine_sweep::params();

        let sink = FigureSink::new(OutputFormat::Png, out.path(), (params.width, params.height));
        let err = run_sweep(&params, data.path(), &sink).unwrap_err();
        assert!(matches!(err, PlotError::Io { .. }));
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }
}
