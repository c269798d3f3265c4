use egui::Color32;
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};
use pq_app::{Evaluation, SIGN_CONVENTION};
use pq_project::AxisLabels;

const HALF_CIRCLE_COLOR: Color32 = Color32::from_rgb(0x38, 0xbd, 0xf8);
const PF_RAY_COLOR: Color32 = Color32::from_rgb(0xf9, 0x73, 0x16);
const PF_TEXT_COLOR: Color32 = Color32::from_rgb(0xba, 0xe6, 0xfd);
const OPERATING_POINT_COLOR: Color32 = Color32::from_rgb(0xfb, 0x71, 0x85);
const ORIGIN_COLOR: Color32 = Color32::from_rgb(0x94, 0xa3, 0xb8);
const LAG_REGION_COLOR: Color32 = Color32::from_rgba_premultiplied(0x02, 0x0a, 0x05, 0x1a);
const LEAD_REGION_COLOR: Color32 = Color32::from_rgba_premultiplied(0x03, 0x07, 0x17, 0x1a);

const OPERATING_POINT_NAME: &str = "Operating point";

#[derive(Default)]
pub struct ChartView;

impl ChartView {
    pub fn show(&mut self, ui: &mut egui::Ui, eval: &Evaluation, labels: &AxisLabels) {
        ui.heading("Operating Space");

        let chart = eval.chart();
        let (q_min, q_max, p_min, p_max) = chart.bounds();
        let tooltip = eval.readout.tooltip();

        Plot::new("pq_chart")
            .legend(Legend::default())
            .data_aspect(1.0)
            .x_axis_label(labels.x.clone())
            .y_axis_label(labels.y.clone())
            .include_x(q_min)
            .include_x(q_max)
            .include_y(p_min)
            .include_y(p_max)
            .height((ui.available_height() - 24.0).max(240.0))
            .label_formatter(move |name, _value| {
                if name == OPERATING_POINT_NAME {
                    tooltip.clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(chart.lagging_region.to_vec()))
                        .fill_color(LAG_REGION_COLOR)
                        .stroke(egui::Stroke::NONE)
                        .name("Lagging (+Q)"),
                );
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(chart.leading_region.to_vec()))
                        .fill_color(LEAD_REGION_COLOR)
                        .stroke(egui::Stroke::NONE)
                        .name("Leading (-Q)"),
                );

                plot_ui.line(
                    Line::new(PlotPoints::from(chart.arc.clone()))
                        .color(HALF_CIRCLE_COLOR)
                        .width(2.4)
                        .name("Rating"),
                );

                for ray in &chart.pf_rays {
                    plot_ui.line(
                        Line::new(PlotPoints::from(vec![[0.0, 0.0], ray.end]))
                            .color(PF_TEXT_COLOR)
                            .style(LineStyle::dotted_dense())
                            .width(0.9),
                    );
                    let [x, y] = ray.label_anchor();
                    plot_ui.text(
                        Text::new(PlotPoint::new(x, y), ray.label.as_str()).color(PF_TEXT_COLOR),
                    );
                }

                plot_ui.points(
                    Points::new(PlotPoints::from(vec![[0.0, 0.0]]))
                        .color(ORIGIN_COLOR)
                        .radius(3.0),
                );
                plot_ui.line(
                    Line::new(PlotPoints::from(chart.operating_ray.to_vec()))
                        .color(PF_RAY_COLOR)
                        .width(2.2)
                        .name("Power factor"),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(vec![chart.operating_point]))
                        .color(OPERATING_POINT_COLOR)
                        .radius(7.0)
                        .name(OPERATING_POINT_NAME),
                );
            });

        ui.label(
            egui::RichText::new(format!(
                "{SIGN_CONVENTION} — hover the marker for (P, Q, S, PF, ϕ) details"
            ))
            .small(),
        );
    }
}
