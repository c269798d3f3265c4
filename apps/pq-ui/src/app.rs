use crate::views::{ChartView, ControlsView, NumericsView};
use egui_file_dialog::FileDialog;
use pq_app::ControlSession;
use pq_project::{ConfigWarning, LoadedConfig, load_config};
use std::path::PathBuf;

pub struct PqTeachApp {
    session: ControlSession,
    config_path: Option<PathBuf>,
    config_warnings: Vec<ConfigWarning>,
    file_dialog: FileDialog,
    controls_view: ControlsView,
    chart_view: ChartView,
    numerics_view: NumericsView,
    last_error: Option<String>,
}

impl PqTeachApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let LoadedConfig { config, warnings } = load_config(None);

        Self {
            session: ControlSession::new(config),
            config_path: None,
            config_warnings: warnings,
            file_dialog: FileDialog::new(),
            controls_view: ControlsView,
            chart_view: ChartView,
            numerics_view: NumericsView,
            last_error: None,
        }
    }

    fn open_config(&mut self, path: PathBuf) {
        let LoadedConfig { config, warnings } = load_config(Some(path.as_path()));
        tracing::info!(path = %path.display(), warnings = warnings.len(), "configuration loaded");
        self.session.set_config(config);
        self.config_warnings = warnings;
        self.config_path = Some(path);
        self.last_error = None;
    }
}

impl eframe::App for PqTeachApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("title").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("PQ Teach");
                ui.separator();
                match &self.config_path {
                    Some(path) => ui.label(format!("Config: {}", path.display())),
                    None => ui.label("Config: defaults / environment"),
                };
                if let Some(error) = &self.last_error {
                    ui.separator();
                    ui.colored_label(egui::Color32::RED, error.as_str());
                }
            });
        });

        let mut open_config = false;
        egui::SidePanel::left("controls")
            .default_width(320.0)
            .show(ctx, |ui| {
                match self.controls_view.show(ui, &mut self.session) {
                    Ok(actions) => open_config = actions.open_config,
                    Err(e) => self.last_error = Some(e.to_string()),
                }
            });

        if open_config {
            self.file_dialog.select_file();
        }
        self.file_dialog.update(ctx);
        if let Some(path) = self.file_dialog.take_selected() {
            self.open_config(path.to_path_buf());
        }

        // Recompute after every control change; the session holds no derived state.
        let eval = self.session.evaluate();

        egui::TopBottomPanel::bottom("numerics")
            .resizable(true)
            .default_height(220.0)
            .show(ctx, |ui| {
                self.numerics_view.show(ui, &eval, &self.config_warnings);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_view
                .show(ui, &eval, &self.session.config().labels);
        });
    }
}
