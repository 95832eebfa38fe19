use super::*;

#[test]
fn badge_class_marks_done_active_and_todo() {
    let current = WizardStep::Appearance;
    assert_eq!(
        step_badge_class(current, WizardStep::BasicInfo),
        "stepper__badge stepper__badge--done"
    );
    assert_eq!(
        step_badge_class(current, WizardStep::Appearance),
        "stepper__badge stepper__badge--active"
    );
    assert_eq!(step_badge_class(current, WizardStep::Confirm), "stepper__badge");
}

#[test]
fn connector_fills_only_behind_the_current_step() {
    assert_eq!(
        connector_class(WizardStep::Appearance, WizardStep::BasicInfo),
        "stepper__connector stepper__connector--done"
    );
    assert_eq!(
        connector_class(WizardStep::Appearance, WizardStep::Configuration),
        "stepper__connector"
    );
    assert_eq!(
        connector_class(WizardStep::BasicInfo, WizardStep::BasicInfo),
        "stepper__connector"
    );
}
