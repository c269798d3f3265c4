use egui::Color32;
use pq_app::{Evaluation, HINTS};
use pq_project::ConfigWarning;

const CLAMP_COLOR: Color32 = Color32::from_rgb(250, 204, 21);
const CONFIG_ERROR_COLOR: Color32 = Color32::from_rgb(220, 60, 60);

#[derive(Default)]
pub struct NumericsView;

impl NumericsView {
    pub fn show(&mut self, ui: &mut egui::Ui, eval: &Evaluation, config_warnings: &[ConfigWarning]) {
        ui.columns(2, |columns| {
            let hints_ui = &mut columns[0];
            hints_ui.heading("Education hints");
            for hint in HINTS {
                hints_ui.label(format!("• {hint}"));
            }
            for message in eval.messages() {
                hints_ui.colored_label(CLAMP_COLOR, format!("⚠ {message}"));
            }
            for warning in config_warnings {
                hints_ui.colored_label(CONFIG_ERROR_COLOR, warning.to_string());
            }

            let metrics_ui = &mut columns[1];
            metrics_ui.heading("Numerics");
            Self::show_table(metrics_ui, eval);
        });
    }

    fn show_table(ui: &mut egui::Ui, eval: &Evaluation) {
        use egui_extras::{Column, TableBuilder};

        let rows = eval.readout.rows();
        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(140.0).at_least(100.0))
            .column(Column::initial(100.0).at_least(80.0))
            .header(22.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Quantity");
                });
                header.col(|ui| {
                    ui.strong("Value");
                });
            })
            .body(|mut body| {
                for (quantity, value) in rows {
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            ui.label(quantity);
                        });
                        row.col(|ui| {
                            ui.monospace(value);
                        });
                    });
                }
            });
    }
}
