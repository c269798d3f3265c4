use pq_app::*;
use pq_controls::{p_to_governor, q_to_excitation};
use pq_core::LimitViolation;
use pq_project::AppConfig;

#[test]
fn default_session_sits_at_half_power_unity_excitation() {
    let eval = ControlSession::default().evaluate();
    assert_eq!(eval.point.as_tuple(), (25.0, 0.0));
    assert!(eval.violations.is_empty());
    assert_eq!(eval.readout.pf_text(), "+1.000");
    assert!((eval.readout.stator_current_pu - 0.5).abs() < 1e-12);
}

#[test]
fn saturated_controls_report_messages() {
    let mut session = ControlSession::default();
    session.position.governor_percent = 120.0;
    session.position.excitation_percent = 120.0;

    let eval = session.evaluate();
    assert_eq!(eval.violations, vec![LimitViolation::ApparentPower]);
    assert_eq!(
        eval.messages(),
        vec!["operating point exceeds apparent-power rating; clamped to boundary."]
    );
    assert!(eval.point.p_mw <= 50.0);
    assert!(eval.point.q_mvar.abs() <= 35.0);
}

#[test]
fn selecting_preset_moves_controls() {
    let mut session = ControlSession::default();
    let moved = session.select_preset(Some("Nominal PF 0.85 lag")).unwrap();
    assert!(moved);
    assert_eq!(session.selected_preset(), Some("Nominal PF 0.85 lag"));

    let limits = session.limits();
    let target = nominal_pf_085_lag(&limits).operating_point;
    assert_eq!(session.position.governor_percent, p_to_governor(target.p_mw, &limits));
    assert_eq!(session.position.excitation_percent, q_to_excitation(target.q_mvar, &limits));

    let eval = session.evaluate();
    assert!((eval.point.p_mw - target.p_mw).abs() < 1e-9);
    assert!((eval.point.q_mvar - target.q_mvar).abs() < 1e-9);
    assert!(eval.violations.is_empty());
}

#[test]
fn reselecting_preset_keeps_manual_adjustment() {
    let mut session = ControlSession::default();
    session.select_preset(Some("Voltage support (+Q)")).unwrap();
    session.position.governor_percent = 10.0;

    let moved = session.select_preset(Some("Voltage support (+Q)")).unwrap();
    assert!(!moved);
    assert_eq!(session.position.governor_percent, 10.0);
}

#[test]
fn clearing_preset_keeps_controls() {
    let mut session = ControlSession::default();
    session.select_preset(Some("Capacitive compensation (-Q)")).unwrap();
    let position = session.position;

    assert!(!session.select_preset(None).unwrap());
    assert_eq!(session.selected_preset(), None);
    assert_eq!(session.position, position);
    assert!(session.selected_scenario().is_none());
}

#[test]
fn unknown_preset_leaves_session_untouched() {
    let mut session = ControlSession::default();
    assert!(session.select_preset(Some("Black start")).is_err());
    assert_eq!(session.selected_preset(), None);
    assert_eq!(session.position.governor_percent, 50.0);
}

#[test]
fn rating_change_tightens_circle() {
    let mut session = ControlSession::default();
    session.set_rating(20.0).unwrap();
    session.position.governor_percent = 100.0;

    let eval = session.evaluate();
    assert_eq!(eval.limits.s_rated_mva, 20.0);
    assert!((eval.point.apparent_power() - 20.0).abs() < 1e-9);
    assert_eq!(eval.chart().bounds(), (-20.0, 20.0, 0.0, 20.0));
    assert!(matches!(session.set_rating(0.0), Err(AppError::Limits(_))));
}

#[test]
fn new_config_resets_rating_and_preset() {
    let mut session = ControlSession::default();
    session.select_preset(Some("Nominal PF 0.85 lag")).unwrap();
    session.set_config(AppConfig {
        s_rated_mva: 80.0,
        ..AppConfig::default()
    });
    assert_eq!(session.rating_mva, 80.0);
    assert_eq!(session.selected_preset(), None);
}
