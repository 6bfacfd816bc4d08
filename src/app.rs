//! Application state: the loaded recipe, its step cursor and the active panel.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use log::{debug, error};

use crate::error::RecipeError;
use crate::model::Recipe;
use crate::navigator::{StepNavigator, Transition};
use crate::view::AppView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Intro,
    Ingredients,
    FullText,
    Steps,
}

impl Panel {
    pub const ALL: [Panel; 4] = [Panel::Intro, Panel::Ingredients, Panel::FullText, Panel::Steps];

    /// Identifier used by navigation buttons to target the panel.
    pub fn id(self) -> &'static str {
        match self {
            Panel::Intro => "intro",
            Panel::Ingredients => "ingredients",
            Panel::FullText => "recette",
            Panel::Steps => "etapes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Intro => "Présentation",
            Panel::Ingredients => "Ingrédients",
            Panel::FullText => "Recette complète",
            Panel::Steps => "Étapes",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPanel(pub String);

impl fmt::Display for UnknownPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown panel \"{}\"", self.0)
    }
}

impl std::error::Error for UnknownPanel {}

impl FromStr for Panel {
    type Err = UnknownPanel;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Panel::ALL
            .into_iter()
            .find(|panel| panel.id() == id)
            .ok_or_else(|| UnknownPanel(id.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ShowPanel(Panel),
    PreviousStep,
    NextStep,
}

/// Result of the last load attempt.
#[derive(Debug, Clone)]
pub enum LoadState {
    Loaded(StepNavigator),
    /// Holds the remediation message shown in place of the recipe.
    Failed(&'static str),
}

#[derive(Debug, Clone)]
pub struct App {
    load: LoadState,
    active_panel: Panel,
}

impl App {
    pub fn with_recipe(recipe: Recipe) -> Self {
        App {
            load: LoadState::Loaded(StepNavigator::new(Arc::new(recipe))),
            active_panel: Panel::default(),
        }
    }

    pub fn with_failure(err: &RecipeError) -> Self {
        error!("Loading the recipe failed: {}", err);
        App {
            load: LoadState::Failed(err.remediation_message()),
            active_panel: Panel::default(),
        }
    }

    pub fn from_result(result: Result<Recipe, RecipeError>) -> Self {
        match result {
            Ok(recipe) => App::with_recipe(recipe),
            Err(err) => App::with_failure(&err),
        }
    }

    /// Replaces the whole state with the outcome of a new load.
    pub fn load(&mut self, result: Result<Recipe, RecipeError>) {
        *self = App::from_result(result);
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        match &self.load {
            LoadState::Loaded(navigator) => Some(navigator.recipe().as_ref()),
            LoadState::Failed(_) => None,
        }
    }

    pub fn navigator(&self) -> Option<&StepNavigator> {
        match &self.load {
            LoadState::Loaded(navigator) => Some(navigator),
            LoadState::Failed(_) => None,
        }
    }

    pub fn active_panel(&self) -> Panel {
        self.active_panel
    }

    pub fn handle(&mut self, command: Command) -> Transition {
        debug!("Handling {:?}", command);
        match command {
            Command::ShowPanel(panel) => {
                self.active_panel = panel;
                Transition::Ignored
            }
            Command::PreviousStep => match &mut self.load {
                LoadState::Loaded(navigator) => navigator.previous(),
                LoadState::Failed(_) => Transition::Ignored,
            },
            Command::NextStep => {
                let transition = match &mut self.load {
                    LoadState::Loaded(navigator) => navigator.next(),
                    LoadState::Failed(_) => Transition::Ignored,
                };
                if transition == Transition::Wrapped {
                    self.active_panel = Panel::Intro;
                }
                transition
            }
        }
    }

    pub fn view(&self) -> AppView<'_> {
        AppView::build(self)
    }
}
