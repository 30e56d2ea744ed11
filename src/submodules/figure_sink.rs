use std::path::{Path, PathBuf};

use clap::ValueEnum;
use enum_dispatch::enum_dispatch;
use plotters::{coord::{cartesian::Cartesian2d, ranged1d::Ranged, types::RangedCoordf64, Shift}, prelude::*};
use tracing::debug;

use super::{chart_spec::{AxisScale, ChartSpec}, errors::{PlotError, Result}, type_lib::NumericData};

const LEGEND_WIDTH: i32 = 170;
const LEGEND_ROW: i32 = 22;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
}

/// Where a finished chart goes.
#[enum_dispatch]
pub trait FigureSinkTrait {
    fn extension(&self) -> &str;
    /// Draws `chart` into `{stem}.{extension}` and returns the written path.
    fn present(&self, chart: &ChartSpec, stem: &str) -> Result<PathBuf>;
}

pub struct PngSink {
    pub out_dir: PathBuf,
    pub size: (u32, u32),
}

impl FigureSinkTrait for PngSink {
    fn extension(&self) -> &str {
        "png"
    }

    fn present(&self, chart: &ChartSpec, stem: &str) -> Result<PathBuf> {
        let path = figure_path(&self.out_dir, stem, self.extension())?;
        {
            let root = BitMapBackend::new(&path, self.size).into_drawing_area();
            draw_chart(&root, chart)?;
            root.present().map_err(render_error)?;
        }
        Ok(path)
    }
}

pub struct SvgSink {
    pub out_dir: PathBuf,
    pub size: (u32, u32),
}

impl FigureSinkTrait for SvgSink {
    fn extension(&self) -> &str {
        "svg"
    }

    fn present(&self, chart: &ChartSpec, stem: &str) -> Result<PathBuf> {
        let path = figure_path(&self.out_dir, stem, self.extension())?;
        {
            let root = SVGBackend::new(&path, self.size).into_drawing_area();
            draw_chart(&root, chart)?;
            root.present().map_err(render_error)?;
        }
        Ok(path)
    }
}

#[enum_dispatch(FigureSinkTrait)]
pub enum FigureSink {
    PngSink,
    SvgSink,
}

impl FigureSink {
    pub fn new(format: OutputFormat, out_dir: &Path, size: (u32, u32)) -> Self {
        let out_dir = out_dir.to_path_buf();
        match format {
            OutputFormat::Png => PngSink { out_dir, size }.into(),
            OutputFormat::Svg => SvgSink { out_dir, size }.into(),
        }
    }
}

fn figure_path(out_dir: &Path, stem: &str, extension: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(out_dir).map_err(|source| PlotError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;
    Ok(out_dir.join(format!("{}.{}", stem, extension)))
}

fn render_error<E: std::fmt::Display>(e: E) -> PlotError {
    PlotError::Render(e.to_string())
}

fn curve_color(index: usize) -> RGBAColor {
    Palette99::pick(index).to_rgba()
}

/// Axes on the left, legend in a strip on the right at mid height.
fn draw_chart<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, chart: &ChartSpec) -> Result<()> {
    root.fill(&WHITE).map_err(render_error)?;

    let titled;
    let area = match &chart.title {
        Some(title) => {
            titled = root.titled(title, ("sans-serif", 28).into_font()).map_err(render_error)?;
            &titled
        }
        None => root,
    };
    let split = (area.dim_in_pixel().0 as i32 - LEGEND_WIDTH).max(0);
    let (plot_area, legend_area) = area.split_horizontally(split);

    let mut builder = ChartBuilder::on(&plot_area);
    builder.margin(15).x_label_area_size(45).y_label_area_size(75);

    match chart.y_scale {
        AxisScale::Log => {
            let mut ctx = builder
                .build_cartesian_2d(chart.x_range(), chart.y_range().log_scale())
                .map_err(render_error)?;
            ctx.configure_mesh()
                .x_desc(chart.x_label.as_str())
                .y_desc(chart.y_label.as_str())
                .y_label_formatter(&|y: &NumericData| format!("{:.0e}", y))
                .draw()
                .map_err(render_error)?;
            draw_curves(&mut ctx, chart)?;
        }
        AxisScale::Linear => {
            let mut ctx = builder
                .build_cartesian_2d(chart.x_range(), chart.y_range())
                .map_err(render_error)?;
            ctx.configure_mesh()
                .x_desc(chart.x_label.as_str())
                .y_desc(chart.y_label.as_str())
                .draw()
                .map_err(render_error)?;
            draw_curves(&mut ctx, chart)?;
        }
    }

    draw_legend(&legend_area, chart)
}

fn draw_curves<'a, DB, Y>(ctx: &mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, Y>>, chart: &ChartSpec) -> Result<()>
where
    DB: DrawingBackend + 'a,
    Y: Ranged<ValueType = NumericData>,
{
    for (index, curve) in chart.curves.iter().enumerate() {
        debug!("{} Δt = {}: {} points", chart.integrator, curve.time_step, curve.points.len());
        let masked = curve.masked_count(chart.y_scale);
        if masked > 0 {
            debug!("{}: {} points outside the axis domain not drawn", curve.label, masked);
        }
        for run in curve.drawable_runs(chart.y_scale) {
            ctx.draw_series(LineSeries::new(run, curve_color(index).stroke_width(2)))
                .map_err(render_error)?;
        }
    }
    Ok(())
}

fn draw_legend<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, chart: &ChartSpec) -> Result<()> {
    if chart.curves.is_empty() {
        return Ok(());
    }
    let (width, height) = area.dim_in_pixel();
    let rows = chart.curves.len() as i32;
    let top = (height as i32 - rows * LEGEND_ROW) / 2;
    let frame = [(4, top - 6), (width as i32 - 8, top + rows * LEGEND_ROW + 2)];

    area.draw(&Rectangle::new(frame, WHITE.mix(0.8).filled()))
        .map_err(render_error)?;
    area.draw(&Rectangle::new(frame, BLACK.stroke_width(1)))
        .map_err(render_error)?;
    for (index, curve) in chart.curves.iter().enumerate() {
        let y = top + index as i32 * LEGEND_ROW + LEGEND_ROW / 2 - 2;
        area.draw(&PathElement::new(vec![(12, y), (36, y)], curve_color(index).stroke_width(2)))
            .map_err(render_error)?;
        area.draw(&Text::new(curve.label.clone(), (42, y - 7), ("sans-serif", 15).into_font()))
            .map_err(render_error)?;
    }
    Ok(())
}
