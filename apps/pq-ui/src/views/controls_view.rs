use pq_app::{AppResult, ControlSession, RATING_RANGE_MVA};

/// Requests from the controls panel that the app has to carry out.
#[derive(Default)]
pub struct ControlsActions {
    pub open_config: bool,
}

#[derive(Default)]
pub struct ControlsView;

impl ControlsView {
    pub fn show(&mut self, ui: &mut egui::Ui, session: &mut ControlSession) -> AppResult<ControlsActions> {
        let mut actions = ControlsActions::default();

        ui.heading("Controls");
        ui.separator();

        let mut rating = session.rating_mva;
        let (min_rating, max_rating) = RATING_RANGE_MVA;
        let response = ui
            .add(
                egui::Slider::new(&mut rating, min_rating..=max_rating)
                    .step_by(1.0)
                    .text("Machine rating S (MVA)"),
            )
            .on_hover_text("Adjust machine apparent power rating to compare different generators.");
        if response.changed() {
            session.set_rating(rating)?;
        }

        ui.add_space(8.0);

        let scenarios = session.scenarios();
        let current = session.selected_preset().map(str::to_string);
        let mut choice = current.clone();
        egui::ComboBox::from_label("Presets")
            .selected_text(choice.as_deref().unwrap_or("None"))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut choice, None, "None");
                for scenario in &scenarios {
                    ui.selectable_value(
                        &mut choice,
                        Some(scenario.name.clone()),
                        scenario.name.as_str(),
                    );
                }
            })
            .response
            .on_hover_text("Apply a guided scenario as a starting point.");
        if choice != current {
            session.select_preset(choice.as_deref())?;
        }

        ui.add_space(8.0);

        ui.add(
            egui::Slider::new(&mut session.position.governor_percent, 0.0..=100.0)
                .text("Governor %"),
        )
        .on_hover_text("Governor controls mechanical power input → vertical move (P).");
        ui.add(
            egui::Slider::new(&mut session.position.excitation_percent, 0.0..=100.0)
                .text("Excitation %"),
        )
        .on_hover_text("Excitation controls field current → horizontal move (Q).");

        if let Some(scenario) = session.selected_scenario() {
            ui.add_space(8.0);
            ui.label(egui::RichText::new(scenario.description).italics());
        }

        ui.add_space(16.0);
        ui.separator();
        if ui.button("Open config…").clicked() {
            actions.open_config = true;
        }

        Ok(actions)
    }
}
