//! Website-creation wizard: a four-step linear state machine.
//!
//! DESIGN
//! ======
//! Steps are an explicit enum rather than a clamped integer, so "advance past
//! Confirm" and "retreat before Basic Info" are unrepresentable instead of
//! defensively clamped. Field edits accumulate in a single draft that
//! survives Back/Next navigation; nothing validates a step before advancing.
//! Deferring all checks to the final review is the product behavior, not an
//! oversight.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use serde::Serialize;

/// The wizard's four steps, in order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    BasicInfo,
    Configuration,
    Appearance,
    Confirm,
}

impl WizardStep {
    pub const COUNT: usize = 4;

    /// All steps in order, for rendering the stepper.
    pub const ALL: [WizardStep; Self::COUNT] =
        [Self::BasicInfo, Self::Configuration, Self::Appearance, Self::Confirm];

    /// 1-based position shown in the step indicator.
    pub fn number(self) -> usize {
        match self {
            Self::BasicInfo => 1,
            Self::Configuration => 2,
            Self::Appearance => 3,
            Self::Confirm => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Info",
            Self::Configuration => "Configuration",
            Self::Appearance => "Appearance",
            Self::Confirm => "Confirm",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::BasicInfo => "Website details and URL",
            Self::Configuration => "Chat widget settings",
            Self::Appearance => "Customize the look",
            Self::Confirm => "Review and create",
        }
    }

    /// The following step, or `None` from `Confirm`.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::BasicInfo => Some(Self::Configuration),
            Self::Configuration => Some(Self::Appearance),
            Self::Appearance => Some(Self::Confirm),
            Self::Confirm => None,
        }
    }

    /// The preceding step, or `None` from `BasicInfo`.
    pub fn back(self) -> Option<Self> {
        match self {
            Self::BasicInfo => None,
            Self::Configuration => Some(Self::BasicInfo),
            Self::Appearance => Some(Self::Configuration),
            Self::Confirm => Some(Self::Appearance),
        }
    }
}

/// Corner of the page the chat widget docks to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetPosition {
    Left,
    #[default]
    Right,
}

impl WidgetPosition {
    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "Bottom Left",
            Self::Right => "Bottom Right",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Draft fields accumulated across all wizard steps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WebsiteDraft {
    pub name: String,
    pub url: String,
    pub description: String,
    pub chat_title: String,
    pub welcome_message: String,
    pub primary_color: String,
    pub position: WidgetPosition,
}

impl Default for WebsiteDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            url: String::new(),
            description: String::new(),
            chat_title: String::new(),
            welcome_message: String::new(),
            primary_color: "#2563eb".to_owned(),
            position: WidgetPosition::Right,
        }
    }
}

/// Creation payload handed to the website collaborator on submit.
pub type WebsiteCreate = WebsiteDraft;

/// Wizard state: current step plus the draft.
///
/// Discarded on navigation away or after submit; drafts are not persisted
/// across visits.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WizardState {
    pub step: WizardStep,
    pub fields: WebsiteDraft,
}

impl WizardState {
    /// Advance one step. No-op in `Confirm`; fields are untouched either way.
    pub fn next(&mut self) {
        if let Some(step) = self.step.next() {
            self.step = step;
        }
    }

    /// Retreat one step. No-op in `BasicInfo`; never clears fields.
    pub fn back(&mut self) {
        if let Some(step) = self.step.back() {
            self.step = step;
        }
    }

    /// Apply a single field edit by name, mirroring the form inputs.
    /// Unknown names and unparseable enum values are ignored. Allowed in any
    /// step and never changes the current step.
    pub fn apply_edit(&mut self, name: &str, value: &str) {
        match name {
            "name" => self.fields.name = value.to_owned(),
            "url" => self.fields.url = value.to_owned(),
            "description" => self.fields.description = value.to_owned(),
            "chat_title" => self.fields.chat_title = value.to_owned(),
            "welcome_message" => self.fields.welcome_message = value.to_owned(),
            "primary_color" => self.fields.primary_color = value.to_owned(),
            "position" => {
                if let Some(position) = WidgetPosition::parse(value) {
                    self.fields.position = position;
                }
            }
            _ => {}
        }
    }

    /// The creation payload, available only on the final review step.
    pub fn creation_payload(&self) -> Option<WebsiteCreate> {
        (self.step == WizardStep::Confirm).then(|| self.fields.clone())
    }
}
