pub mod chart_spec;
pub mod errors;
pub mod figure_sink;
pub mod input_params;
pub mod number_format;
pub mod series_file;
pub mod sweep;
pub mod type_lib;
