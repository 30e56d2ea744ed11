//! Energy-error charts for the Verlet, Beeman and Gear integrators.
//!
//! Reads `optimalDeltaT{integrator}Energy{dt}.txt` tables (time, relative
//! energy error) and writes one log-scale figure per integrator with a
//! curve per time step.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use scripts::Preset;
use submodules::{figure_sink::{FigureSink, OutputFormat}, input_params::PlotParams, sweep::run_sweep};
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

mod scripts;
mod submodules;

#[derive(Parser, Debug)]
#[command(name = "optimal-dt-plot")]
#[command(version)]
#[command(about = "Plot relative energy error against time for each integrator and time step")]
struct Args {
    /// Built-in parameter set, ignored when --config is given.
    #[arg(long, value_enum, default_value_t = Preset::Fine)]
    preset: Preset,

    /// TOML parameter file; missing keys take fine sweep values.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding the input tables.
    #[arg(long, value_name = "DIR", default_value = ".")]
    data_dir: PathBuf,

    /// Directory the figures are written to.
    #[arg(long, value_name = "DIR", default_value = "plots")]
    output_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Png)]
    format: OutputFormat,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format.
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    setup_tracing(&args);

    if let Err(e) = run(&args) {
        error!("{e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let params = match &args.config {
        Some(path) => PlotParams::load(path)?,
        None => {
            let params = args.preset.params();
            params.validate()?;
            params
        }
    };
    info!(
        "{} integrators x {} time steps from {}",
        params.integrators.len(),
        params.time_steps.len(),
        args.data_dir.display()
    );

    let sink = FigureSink::new(args.format, &args.output_dir, (params.width, params.height));
    let written = run_sweep(&params, &args.data_dir, &sink)?;
    info!("{} figures in {}", written.len(), args.output_dir.display());
    Ok(())
}

fn setup_tracing(args: &Args) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .init();
    }
}
