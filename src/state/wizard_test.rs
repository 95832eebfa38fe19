use super::*;

// =============================================================
// Step transitions
// =============================================================

#[test]
fn initial_step_is_basic_info() {
    assert_eq!(WizardState::default().step, WizardStep::BasicInfo);
}

#[test]
fn next_walks_all_four_steps_in_order() {
    let mut wizard = WizardState::default();
    assert_eq!(wizard.step, WizardStep::BasicInfo);
    wizard.next();
    assert_eq!(wizard.step, WizardStep::Configuration);
    wizard.next();
    assert_eq!(wizard.step, WizardStep::Appearance);
    wizard.next();
    assert_eq!(wizard.step, WizardStep::Confirm);
}

#[test]
fn next_is_a_no_op_on_confirm() {
    let mut wizard = WizardState { step: WizardStep::Confirm, ..WizardState::default() };
    wizard.next();
    assert_eq!(wizard.step, WizardStep::Confirm);
}

#[test]
fn back_is_a_no_op_on_basic_info() {
    let mut wizard = WizardState::default();
    wizard.back();
    assert_eq!(wizard.step, WizardStep::BasicInfo);
}

#[test]
fn arbitrary_next_back_sequences_stay_in_range() {
    // Pseudo-random walk; step number must always stay within 1..=4.
    let mut wizard = WizardState::default();
    let mut seed: u64 = 0x5eed;
    for _ in 0..1000 {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        if seed & 1 == 0 {
            wizard.next();
        } else {
            wizard.back();
        }
        let number = wizard.step.number();
        assert!((1..=WizardStep::COUNT).contains(&number));
    }
}

#[test]
fn step_numbers_match_stepper_order() {
    for (index, step) in WizardStep::ALL.iter().enumerate() {
        assert_eq!(step.number(), index + 1);
    }
}

// =============================================================
// Field edits
// =============================================================

#[test]
fn apply_edit_updates_named_fields() {
    let mut wizard = WizardState::default();
    wizard.apply_edit("name", "E-Commerce Store");
    wizard.apply_edit("url", "https://store.example.com");
    wizard.apply_edit("chat_title", "Need a hand?");
    wizard.apply_edit("position", "left");

    assert_eq!(wizard.fields.name, "E-Commerce Store");
    assert_eq!(wizard.fields.url, "https://store.example.com");
    assert_eq!(wizard.fields.chat_title, "Need a hand?");
    assert_eq!(wizard.fields.position, WidgetPosition::Left);
}

#[test]
fn apply_edit_ignores_unknown_field_and_bad_position() {
    let mut wizard = WizardState::default();
    wizard.apply_edit("favorite_color", "mauve");
    wizard.apply_edit("position", "top");
    assert_eq!(wizard.fields, WebsiteDraft::default());
}

#[test]
fn apply_edit_never_moves_the_step() {
    let mut wizard = WizardState::default();
    wizard.next();
    wizard.apply_edit("welcome_message", "Hi there!");
    assert_eq!(wizard.step, WizardStep::Configuration);
}

#[test]
fn fields_survive_back_and_next_navigation() {
    let mut wizard = WizardState::default();
    wizard.apply_edit("name", "Company Blog");
    wizard.next();
    wizard.apply_edit("chat_title", "Ask us anything");
    wizard.back();
    wizard.next();
    wizard.next();

    assert_eq!(wizard.fields.name, "Company Blog");
    assert_eq!(wizard.fields.chat_title, "Ask us anything");
}

#[test]
fn draft_defaults_match_the_form() {
    let draft = WebsiteDraft::default();
    assert_eq!(draft.primary_color, "#2563eb");
    assert_eq!(draft.position, WidgetPosition::Right);
    assert!(draft.name.is_empty());
}

#[test]
fn next_allows_empty_fields() {
    // Advancing with nothing filled in is deliberate; all review happens at
    // the Confirm step.
    let mut wizard = WizardState::default();
    wizard.next();
    assert_eq!(wizard.step, WizardStep::Configuration);
    assert!(wizard.fields.name.is_empty());
}

// =============================================================
// Submit
// =============================================================

#[test]
fn creation_payload_only_available_on_confirm() {
    let mut wizard = WizardState::default();
    assert!(wizard.creation_payload().is_none());
    wizard.next();
    assert!(wizard.creation_payload().is_none());
    wizard.next();
    assert!(wizard.creation_payload().is_none());
    wizard.next();
    assert!(wizard.creation_payload().is_some());
}

#[test]
fn creation_payload_carries_the_draft() {
    let mut wizard = WizardState::default();
    wizard.apply_edit("name", "Support Portal");
    wizard.apply_edit("position", "left");
    wizard.next();
    wizard.next();
    wizard.next();

    let payload = wizard.creation_payload().unwrap();
    assert_eq!(payload.name, "Support Portal");
    assert_eq!(payload.position, WidgetPosition::Left);
}

#[test]
fn position_serializes_lowercase() {
    let json = serde_json::to_string(&WidgetPosition::Right).unwrap();
    assert_eq!(json, "\"right\"");
}
