pub mod chart_view;
pub mod controls_view;
pub mod numerics_view;

pub use chart_view::ChartView;
pub use controls_view::{ControlsActions, ControlsView};
pub use numerics_view::NumericsView;
