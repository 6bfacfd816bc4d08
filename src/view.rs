//! Display-ready projection of the application state.

use crate::app::{App, LoadState, Panel};
use crate::model::Step;
use crate::navigator::{StepNavigator, NEXT_LABEL, PREVIOUS_LABEL};
use crate::normalize::DEFAULT_TITLE;

pub const NO_STEPS_MESSAGE: &str =
    "Aucune étape trouvée. Ajoutez un tableau \"etapes\" avec des instructions.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepContent<'a> {
    Step(&'a Step),
    Message(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepPanelView<'a> {
    pub content: StepContent<'a>,
    /// `"2 / 5"`, empty when no step is shown.
    pub counter: String,
    pub previous_label: &'static str,
    pub previous_enabled: bool,
    pub next_label: &'static str,
    pub next_enabled: bool,
}

impl<'a> StepPanelView<'a> {
    fn from_navigator(navigator: &'a StepNavigator) -> Self {
        match navigator.current() {
            Some(current) => StepPanelView {
                content: StepContent::Step(current.step),
                counter: current.counter(),
                previous_label: PREVIOUS_LABEL,
                previous_enabled: navigator.can_go_back(),
                next_label: current.forward_label(),
                next_enabled: navigator.can_go_forward(),
            },
            None => StepPanelView::disabled(NO_STEPS_MESSAGE),
        }
    }

    fn disabled(message: &'a str) -> Self {
        StepPanelView {
            content: StepContent::Message(message),
            counter: String::new(),
            previous_label: PREVIOUS_LABEL,
            previous_enabled: false,
            next_label: NEXT_LABEL,
            next_enabled: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppView<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub ingredients: Vec<&'a str>,
    pub full_text: &'a str,
    pub steps: StepPanelView<'a>,
    pub active_panel: Panel,
}

impl<'a> AppView<'a> {
    pub fn build(app: &'a App) -> Self {
        match app.load_state() {
            LoadState::Loaded(navigator) => {
                let recipe = navigator.recipe();
                AppView {
                    title: recipe.title(),
                    description: recipe.description(),
                    ingredients: recipe.ingredients().iter().map(String::as_str).collect(),
                    full_text: recipe.full_text(),
                    steps: StepPanelView::from_navigator(navigator),
                    active_panel: app.active_panel(),
                }
            }
            // Every panel shows the same remediation message
            LoadState::Failed(message) => {
                let message: &'a str = message;
                AppView {
                    title: DEFAULT_TITLE,
                    description: message,
                    ingredients: vec![message],
                    full_text: message,
                    steps: StepPanelView::disabled(message),
                    active_panel: app.active_panel(),
                }
            }
        }
    }
}
