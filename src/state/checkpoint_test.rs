use super::*;

// =============================================================
// Mode
// =============================================================

#[test]
fn default_mode_is_device_code_with_code_field() {
    let form = CheckpointForm::new("T1");
    assert_eq!(form.mode, CheckpointMode::DeviceCode);
    assert_eq!(form.mode.field_name(), "code");
    assert_eq!(form.active_field(), CheckpointField::Code);
    assert!(!form.mode.is_missing_device());
    assert!(!form.submitting);
}

#[test]
fn mode_labels_follow_mode() {
    assert_eq!(CheckpointMode::DeviceCode.title(), "Login Code");
    assert_eq!(CheckpointMode::RecoveryCode.title(), "Recovery Code");
    assert_eq!(CheckpointMode::DeviceCode.toggle_label(), "I've Lost My Device");
    assert_eq!(CheckpointMode::RecoveryCode.toggle_label(), "I Have My Device");
}

#[test]
fn toggle_switches_to_recovery_field_and_clears_values() {
    let mut form = CheckpointForm::new("T1");
    form.set_field(CheckpointField::Code, "123456");
    form.set_field(CheckpointField::RecoveryCode, "stale");

    form.toggle_missing_device();

    assert_eq!(form.mode, CheckpointMode::RecoveryCode);
    assert_eq!(form.mode.field_name(), "recoveryCode");
    assert!(form.mode.is_missing_device());
    assert_eq!(form.values, CheckpointValues::default());
}

#[test]
fn toggle_back_restores_device_field_cleared() {
    let mut form = CheckpointForm::new("T1");
    form.toggle_missing_device();
    form.set_active_value("abcd-efgh");
    assert_eq!(form.values.recovery_code, "abcd-efgh");

    form.toggle_missing_device();

    assert_eq!(form.mode, CheckpointMode::DeviceCode);
    assert_eq!(form.active_field(), CheckpointField::Code);
    assert_eq!(form.active_value(), "");
    assert_eq!(form.values.recovery_code, "");
}

// =============================================================
// Submission
// =============================================================

#[test]
fn begin_submit_carries_exact_values() {
    let mut form = CheckpointForm::new("T1");
    form.set_active_value("123456");

    let request = form.begin_submit().unwrap();

    assert_eq!(
        request,
        CheckpointRequest { token: "T1".to_owned(), code: "123456".to_owned(), recovery_code: String::new() }
    );
    assert!(form.submitting);
}

#[test]
fn begin_submit_refuses_while_in_flight() {
    let mut form = CheckpointForm::new("T1");
    assert!(form.begin_submit().is_some());
    assert!(form.begin_submit().is_none());
}

#[test]
fn finish_incomplete_rearms_form() {
    let mut form = CheckpointForm::new("T1");
    form.begin_submit();
    form.finish(&SubmitOutcome::Incomplete);
    assert!(!form.submitting);
    assert!(form.begin_submit().is_some());
}

#[test]
fn finish_failed_rearms_form() {
    let mut form = CheckpointForm::new("T1");
    form.begin_submit();
    form.finish(&SubmitOutcome::Failed);
    assert!(!form.submitting);
}

#[test]
fn finish_redirected_keeps_form_disabled() {
    let mut form = CheckpointForm::new("T1");
    form.begin_submit();
    form.finish(&SubmitOutcome::Redirected("/".to_owned()));
    assert!(form.submitting);
}

// =============================================================
// NavigationState
// =============================================================

#[test]
fn required_token_missing_or_empty_is_none() {
    assert_eq!(NavigationState::default().required_token(), None);
    assert_eq!(NavigationState { token: Some(String::new()) }.required_token(), None);
}

#[test]
fn required_token_present() {
    let nav = NavigationState { token: Some("T1".to_owned()) };
    assert_eq!(nav.required_token(), Some("T1"));
}
