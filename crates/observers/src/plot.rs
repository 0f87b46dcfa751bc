//! Interactive plots of solver runs, drawn with egui.
//!
//! A [`PlotObserver`] gathers `(x, y)` points for a fixed number of named
//! traces, either live as a solver observer or after the fact from a finished
//! [`newton::Solution`]. The collected traces become a [`Panel`], and
//! [`show_panels`] opens one window holding every panel.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use tangent_core::Observer;
use tangent_solvers::equation::newton;

/// Display options for one panel.
///
/// ```ignore
/// let config = ShowConfig::new().title("Convergence").axes("iteration", "error").log_y();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    legend: bool,
    log_y: bool,
}

impl ShowConfig {
    /// Untitled, unlabeled, no legend, linear y-axis.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Heading drawn above the plot.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the axis labels.
    #[must_use]
    pub fn axes(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = Some(x.into());
        self.y_label = Some(y.into());
        self
    }

    /// Shows the trace names in a legend.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Plots log₁₀ of each y value. Points with `y <= 0` are dropped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }
}

/// How a trace is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Points joined by a line.
    #[default]
    Line,
    /// Unconnected markers.
    Points,
    /// A line with a marker at every point.
    LinePoints,
}

/// Maps a solver event to one point per trace.
///
/// Events with no x value are ignored; a `None` y value leaves that trace
/// without a point for the event.
///
/// [`newton::Event`] implements `Plottable<2>`: step events plot `|f(x_n)|`
/// and the step size against the iteration number, and failure events are
/// ignored. Fed with a log-scale [`ShowConfig`], that is a convergence plot:
///
/// ```ignore
/// let mut obs = PlotObserver::<2>::new(["|f(x_n)|", "|x_(n+1) - x_n|"]);
/// newton::solve(&f, &df, x0, &config, &mut obs)?;
/// obs.show(ShowConfig::new().legend().log_y())?;
/// ```
pub trait Plottable<const N: usize> {
    fn x(&self) -> Option<f64>;

    fn traces(&self) -> [Option<f64>; N];
}

impl Plottable<2> for newton::Event<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn x(&self) -> Option<f64> {
        self.record().map(|r| r.iter() as f64)
    }

    fn traces(&self) -> [Option<f64>; 2] {
        match self.record() {
            Some(r) => [Some(r.value().abs()), Some(r.error())],
            None => [None, None],
        }
    }
}

/// Named traces of `(x, y)` points for `N` series.
///
/// As an [`Observer`] it records every [`Plottable`] event it sees; pass
/// `&mut obs` to keep ownership for showing afterwards. Points can also be
/// added by hand with [`record`](Self::record), which is how the
/// `newton_plots` helpers build plots from a finished run.
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    styles: [Style; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates an empty observer; every trace starts as [`Style::Line`].
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            styles: [Style::Line; N],
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Sets how the trace at index `trace` is drawn.
    ///
    /// # Panics
    ///
    /// Panics if `trace >= N`.
    #[must_use]
    pub fn with_style(mut self, trace: usize, style: Style) -> Self {
        self.styles[trace] = style;
        self
    }

    /// Adds a point at `x` to every trace whose slot is `Some`.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Returns the points recorded for the trace at index `trace`.
    ///
    /// # Panics
    ///
    /// Panics if `trace >= N`.
    #[must_use]
    pub fn points(&self, trace: usize) -> &[[f64; 2]] {
        &self.data[trace]
    }

    /// Returns the trace names.
    #[must_use]
    pub fn names(&self) -> &[String; N] {
        &self.names
    }

    /// Packages the collected traces with a display configuration.
    #[must_use]
    pub fn into_panel(self, config: ShowConfig) -> Panel {
        let traces = self
            .names
            .into_iter()
            .zip(self.styles)
            .zip(self.data)
            .map(|((name, style), points)| Trace {
                name,
                style,
                points,
            })
            .collect();
        Panel { config, traces }
    }

    /// Shows this observer alone in a window and blocks until it is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let title = config.title.clone().unwrap_or_default();
        show_panels(&title, vec![self.into_panel(config)])
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

struct Trace {
    name: String,
    style: Style,
    points: Vec<[f64; 2]>,
}

/// One plot of a window: its traces and how to display them.
pub struct Panel {
    config: ShowConfig,
    traces: Vec<Trace>,
}

/// Opens a blocking egui window with the given panels stacked vertically.
///
/// Only one native window can be opened per process on some platforms, so
/// show related plots together rather than calling [`PlotObserver::show`]
/// repeatedly.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show_panels(title: &str, panels: Vec<Panel>) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| Ok(Box::new(PlotApp { panels }))),
    )
}

struct PlotApp {
    panels: Vec<Panel>,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            #[allow(clippy::cast_precision_loss)]
            let height = ui.available_height() / self.panels.len().max(1) as f32;
            for (i, panel) in self.panels.iter().enumerate() {
                ui.vertical(|ui| draw_panel(ui, i, panel, height));
            }
        });
    }
}

fn draw_panel(ui: &mut egui::Ui, index: usize, panel: &Panel, height: f32) {
    let config = &panel.config;
    let mut plot_height = height;
    if let Some(title) = &config.title {
        plot_height -= ui.heading(title).rect.height();
    }

    let mut plot = Plot::new(("plot_panel", index)).height(plot_height.max(50.0));
    if config.legend {
        plot = plot.legend(Legend::default());
    }
    if let Some(x_label) = &config.x_label {
        plot = plot.x_axis_label(x_label.clone());
    }
    match (&config.y_label, config.log_y) {
        (Some(y_label), true) => plot = plot.y_axis_label(format!("{y_label} (log₁₀)")),
        (Some(y_label), false) => plot = plot.y_axis_label(y_label.clone()),
        (None, true) => plot = plot.y_axis_label("log₁₀"),
        (None, false) => {}
    }

    plot.show(ui, |plot_ui| {
        for trace in &panel.traces {
            let points = scaled(&trace.points, config.log_y);

            if matches!(trace.style, Style::Line | Style::LinePoints) {
                let line: PlotPoints = points.iter().copied().collect();
                plot_ui.line(Line::new(line).name(&trace.name));
            }
            if matches!(trace.style, Style::Points | Style::LinePoints) {
                let markers: PlotPoints = points.iter().copied().collect();
                plot_ui.points(Points::new(markers).radius(3.0).name(&trace.name));
            }
        }
    });
}

fn scaled(points: &[[f64; 2]], log_y: bool) -> Vec<[f64; 2]> {
    if log_y {
        points
            .iter()
            .filter(|[_, y]| *y > 0.0)
            .map(|&[x, y]| [x, y.log10()])
            .collect()
    } else {
        points.to_vec()
    }
}
