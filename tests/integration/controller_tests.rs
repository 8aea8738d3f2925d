//! Integration tests for the full activation flow: host activation →
//! command dispatch → gate/scheduler mutation → status surface.

use crate::mock_host::MockHost;
use autohelm::app::activation::Activation;
use autohelm::app::ports::CAP_TEXT_SURFACE;
use autohelm::app::service::Controller;
use autohelm::scheduler::{Cadence, SchedState};

fn initialized(host: &mut MockHost) -> Controller {
    let mut controller = Controller::new();
    controller.activate(Activation::Initialize, host);
    controller
}

// ── Fresh start ───────────────────────────────────────────────

#[test]
fn fresh_start_loads_defaults_and_auto_starts() {
    let mut host = MockHost::new();
    let controller = initialized(&mut host);

    assert!(controller.is_config_loaded());
    assert_eq!(controller.language(), "en");
    assert_eq!(controller.sched_state(), SchedState::RunningBoth);
    assert_eq!(controller.status_message(), "Execution Started.");
}

#[test]
fn first_save_round_trips_the_default_document() {
    let mut host = MockHost::new();
    let mut controller = initialized(&mut host);

    controller.activate(Activation::Command("save"), &mut host);
    assert_eq!(host.field_writes, 1);
    let first = host.field.clone();
    assert!(first.contains("version=1.0"));
    assert!(first.contains("language=en"));

    // Reload what we saved, save again: the field text is unchanged.
    controller.activate(Activation::Command("load"), &mut host);
    controller.activate(Activation::Command("save"), &mut host);
    assert_eq!(host.field, first);
}

#[test]
fn auto_start_can_be_disabled() {
    let mut host = MockHost::new();
    let mut controller = Controller::new();
    controller.set_auto_start(false);
    controller.activate(Activation::Initialize, &mut host);

    assert!(controller.is_config_loaded());
    assert_eq!(controller.sched_state(), SchedState::Idle);
}

#[test]
fn initialize_runs_only_once() {
    let mut host = MockHost::new();
    let mut controller = initialized(&mut host);

    controller.activate(Activation::Command("stop"), &mut host);
    controller.activate(Activation::Initialize, &mut host);
    // A repeated initialize must not re-load or re-arm.
    assert_eq!(controller.sched_state(), SchedState::Stopped);
}

// ── Version conflict ──────────────────────────────────────────

#[test]
fn newer_stored_version_aborts_load_and_halts() {
    let mut host = MockHost::with_field("[Script Settings]\nversion=2.0\nlanguage=de\n");
    let controller = initialized(&mut host);

    assert!(!controller.is_config_loaded());
    assert_eq!(controller.sched_state(), SchedState::Stopped);
    assert_eq!(controller.language(), "en");
    assert!(controller.status_message().contains("2"));
    assert!(controller.status_message().contains("1"));
}

#[test]
fn operator_can_restart_after_resolving_the_conflict() {
    let mut host = MockHost::with_field("[Script Settings]\nversion=2.0\n");
    let mut controller = initialized(&mut host);
    assert_eq!(controller.sched_state(), SchedState::Stopped);

    // Operator fixes the field by hand, reloads, restarts.
    host.field = "[Script Settings]\nversion=1.0\n".to_string();
    controller.activate(Activation::Command("load"), &mut host);
    controller.activate(Activation::Command("run"), &mut host);

    assert!(controller.is_config_loaded());
    assert_eq!(controller.sched_state(), SchedState::RunningBoth);
}

// ── Start / stop ──────────────────────────────────────────────

#[test]
fn run_and_stop_toggle_both_cadences() {
    let mut host = MockHost::new();
    let mut controller = Controller::new();
    controller.set_auto_start(false);
    controller.activate(Activation::Initialize, &mut host);

    controller.activate(Activation::Command("run"), &mut host);
    assert!(controller.armed().contains(Cadence::Fast));
    assert!(controller.armed().contains(Cadence::Slow));

    controller.activate(Activation::Command("STOP"), &mut host);
    assert!(controller.armed().is_empty());
    assert_eq!(controller.sched_state(), SchedState::Stopped);
    assert_eq!(controller.status_message(), "Execution Halted.");
}

#[test]
fn start_alias_and_sub_mode_argument() {
    let mut host = MockHost::new();
    let mut controller = Controller::new();
    controller.set_auto_start(false);
    controller.activate(Activation::Initialize, &mut host);

    // The quoted argument is tokenized as one token and (zero-arg binding
    // winning) ignored.
    controller.activate(Activation::Command("start \"charge mode\""), &mut host);
    assert_eq!(controller.sched_state(), SchedState::RunningBoth);
}

// ── Command edge cases ────────────────────────────────────────

#[test]
fn unrecognized_command_changes_nothing() {
    let mut host = MockHost::new();
    let mut controller = initialized(&mut host);
    let state = controller.sched_state();
    let message = controller.status_message().to_string();

    controller.activate(Activation::Command("selfdestruct now"), &mut host);

    assert_eq!(controller.sched_state(), state);
    assert_eq!(controller.status_message(), message);
    assert_eq!(host.field_writes, 0);
}

#[test]
fn blank_and_unterminated_input_is_ignored() {
    let mut host = MockHost::new();
    let mut controller = initialized(&mut host);

    controller.activate(Activation::Command(""), &mut host);
    controller.activate(Activation::Command("   "), &mut host);
    // An unterminated quote fails tokenization, so this never reaches the
    // `stop` handler.
    controller.activate(Activation::Command("stop \"broken"), &mut host);

    assert_eq!(controller.sched_state(), SchedState::RunningBoth);
}

// ── Status surface ────────────────────────────────────────────

#[test]
fn status_renders_only_on_the_x100_cadence() {
    let mut host = MockHost::new();
    let mut controller = initialized(&mut host);

    controller.activate(Activation::FastTick, &mut host);
    controller.activate(Activation::SlowTick10, &mut host);
    assert!(host.presented.is_empty());

    controller.activate(Activation::SlowTick100, &mut host);
    assert_eq!(host.presented.len(), 1);
    let shown = host.last_presented().unwrap();
    assert!(shown.text.starts_with("Execution Started.\n"));
}

#[test]
fn activity_glyph_wraps_with_period_five() {
    let mut host = MockHost::new();
    let mut controller = initialized(&mut host);

    for _ in 0..6 {
        controller.activate(Activation::SlowTick100, &mut host);
    }

    let glyphs: Vec<String> = host
        .presented
        .iter()
        .map(|p| p.text.rsplit('\n').next().unwrap_or("").to_string())
        .collect();

    // Five distinct glyphs, the sixth repeats the first.
    for (i, a) in glyphs[..5].iter().enumerate() {
        for b in &glyphs[i + 1..5] {
            assert_ne!(a, b);
        }
    }
    assert_eq!(glyphs[5], glyphs[0]);
}

#[test]
fn status_targets_the_resolved_display_device() {
    let mut host = MockHost::new()
        .with_device(7, "Bridge LCD", CAP_TEXT_SURFACE)
        .with_device(8, "Spare LCD", CAP_TEXT_SURFACE);
    let mut controller = initialized(&mut host);

    controller.activate(Activation::SlowTick100, &mut host);
    assert_eq!(
        host.last_presented().unwrap().target.as_deref(),
        Some("Bridge LCD")
    );
}

// ── Localization through the full flow ────────────────────────

#[test]
fn adopted_language_marks_untranslated_status_text() {
    let mut host = MockHost::with_field("[Script Settings]\nversion=1.0\nlanguage=de\n");
    let mut controller = initialized(&mut host);
    assert_eq!(controller.language(), "de");

    controller.activate(Activation::Command("save"), &mut host);
    let message = controller.status_message();
    assert!(message.contains("Untranslated Key"));
    assert!(message.contains("[de]"));
    assert!(message.contains("Configuration Saved."));
}

#[test]
fn report_reflects_the_running_state() {
    let mut host = MockHost::new();
    let mut controller = initialized(&mut host);
    controller.activate(Activation::Command("stop"), &mut host);

    let report = controller.report();
    assert_eq!(report.sched_state, "Stopped");
    assert!(report.config_loaded);
    assert!(!report.fast_armed);
    assert!(!report.slow_armed);
    assert!(report.activations >= 2);
}
