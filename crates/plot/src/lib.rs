//! Plotting surface for pendulum trajectories.
//!
//! [`PlotApp`] collects named panels of `[t, θ]` series and renders them in
//! one native window, panels laid out side by side so two results can be
//! compared visually. Rendering is a separate, blocking call that consumes
//! data the numerical core already produced — computing a trajectory never
//! opens a window as a side effect.
//!
//! # Example
//!
//! ```ignore
//! PlotApp::new()
//!     .add_panel(Panel::new("Forward Euler").series("θ (rad)", &euler.points()))
//!     .add_panel(Panel::new("Small angle").series("θ (rad)", &reference.points()))
//!     .run(ShowConfig::new().title("Pendulum").legend())?;
//! ```

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

/// Configuration for rendering a [`PlotApp`].
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
}

impl ShowConfig {
    /// Creates a `ShowConfig` with defaults: no title, no legend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each series by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

struct Series {
    name: String,
    points: Vec<[f64; 2]>,
}

/// One plot in the window: a name and the series drawn inside it.
pub struct Panel {
    name: String,
    series: Vec<Series>,
}

impl Panel {
    /// Creates an empty panel with the given heading.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            series: Vec::new(),
        }
    }

    /// Adds a named line series of `[x, y]` points.
    #[must_use]
    pub fn series(mut self, name: &str, points: &[[f64; 2]]) -> Self {
        self.series.push(Series {
            name: name.to_owned(),
            points: points.to_vec(),
        });
        self
    }
}

/// A runnable egui application that shows panels side by side.
#[derive(Default)]
pub struct PlotApp {
    panels: Vec<Panel>,
}

impl PlotApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a panel; panels are laid out left to right in call order.
    #[must_use]
    pub fn add_panel(mut self, panel: Panel) -> Self {
        self.panels.push(panel);
        self
    }

    /// Opens a blocking native window displaying all panels.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn run(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let title = config.title.unwrap_or_default();
        let window = PlotWindow {
            panels: self.panels,
            legend: config.legend,
        };

        eframe::run_native(
            &title,
            eframe::NativeOptions::default(),
            Box::new(move |_cc| Ok(Box::new(window))),
        )
    }
}

/// The [`eframe::App`] that renders the collected panels.
struct PlotWindow {
    panels: Vec<Panel>,
    legend: bool,
}

impl eframe::App for PlotWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let count = self.panels.len().max(1);
            ui.columns(count, |columns| {
                for (i, panel) in self.panels.iter().enumerate() {
                    let column = &mut columns[i];
                    column.heading(&panel.name);

                    let mut plot = Plot::new(format!("panel-{i}"));
                    if self.legend {
                        plot = plot.legend(Legend::default());
                    }
                    plot.show(column, |plot_ui| {
                        for series in &panel.series {
                            let points: PlotPoints = series.points.iter().copied().collect();
                            plot_ui.line(Line::new(points).name(&series.name));
                        }
                    });
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panels_keep_insertion_order() {
        let app = PlotApp::new()
            .add_panel(Panel::new("left"))
            .add_panel(Panel::new("right"));

        let names: Vec<_> = app.panels.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["left", "right"]);
    }

    #[test]
    fn series_points_are_stored_unchanged() {
        let points = [[0.0, 1.0], [0.5, 0.8], [1.0, 0.3]];

        let panel = Panel::new("angle").series("θ", &points);

        assert_eq!(panel.series.len(), 1);
        assert_eq!(panel.series[0].name, "θ");
        assert_eq!(panel.series[0].points, points);
    }

    #[test]
    fn a_panel_can_overlay_multiple_series() {
        let panel = Panel::new("comparison")
            .series("euler", &[[0.0, 0.1]])
            .series("reference", &[[0.0, 0.2]]);

        let names: Vec<_> = panel.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["euler", "reference"]);
    }

    #[test]
    fn show_config_builder_sets_fields() {
        let config = ShowConfig::new().title("pendulum").legend();

        assert_eq!(config.title.as_deref(), Some("pendulum"));
        assert!(config.legend);
    }
}
