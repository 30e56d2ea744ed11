use clap::ValueEnum;

use crate::submodules::input_params::PlotParams;

pub mod coarse_sweep;
pub mod fine_sweep;

/// Built-in parameter sets, one per plotting variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Δt from 0.1 down to 0.0001, scientific legend, no title.
    Fine,
    /// Δt from 10 down to 0.1, plain legend, titled figures.
    Coarse,
}

impl Preset {
    pub fn params(&self) -> PlotParams {
        match self {
            Preset::Fine => fine_sweep::params(),
            Preset::Coarse => coarse_sweep::params(),
        }
    }
}
