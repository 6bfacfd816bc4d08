//! Cursor over a recipe's steps.

use std::sync::Arc;

use log::debug;

use crate::model::{Recipe, Step};

pub const NEXT_LABEL: &str = "Suivant";
pub const FINISH_LABEL: &str = "Terminer";
pub const PREVIOUS_LABEL: &str = "Précédent";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigatorState {
    Empty,
    AtIndex(usize),
}

/// Outcome of a navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Out of range or no steps; state unchanged.
    Ignored,
    Moved,
    /// Went from the last step back to the first. This is the completion signal.
    Wrapped,
}

/// Snapshot of the current step and its place in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentStep<'a> {
    pub step: &'a Step,
    /// 1-based.
    pub position: usize,
    pub total: usize,
    pub is_first: bool,
    pub is_last: bool,
}

impl CurrentStep<'_> {
    pub fn forward_label(&self) -> &'static str {
        if self.is_last {
            FINISH_LABEL
        } else {
            NEXT_LABEL
        }
    }

    /// `"2 / 5"`
    pub fn counter(&self) -> String {
        format!("{} / {}", self.position, self.total)
    }
}

#[derive(Debug, Clone)]
pub struct StepNavigator {
    recipe: Arc<Recipe>,
    state: NavigatorState,
}

impl StepNavigator {
    pub fn new(recipe: Arc<Recipe>) -> Self {
        let state = initial_state(&recipe);
        StepNavigator { recipe, state }
    }

    pub fn state(&self) -> NavigatorState {
        self.state
    }

    pub fn recipe(&self) -> &Arc<Recipe> {
        &self.recipe
    }

    /// Back to the first step.
    pub fn reset(&mut self) {
        self.state = initial_state(&self.recipe);
    }

    pub fn current(&self) -> Option<CurrentStep<'_>> {
        let NavigatorState::AtIndex(index) = self.state else {
            return None;
        };
        let steps = self.recipe.steps();
        let total = steps.len();
        Some(CurrentStep {
            step: &steps[index],
            position: index + 1,
            total,
            is_first: index == 0,
            is_last: index + 1 == total,
        })
    }

    pub fn previous(&mut self) -> Transition {
        match self.state {
            NavigatorState::AtIndex(index) if index > 0 => {
                self.state = NavigatorState::AtIndex(index - 1);
                debug!("Moved back to step {}", index);
                Transition::Moved
            }
            _ => Transition::Ignored,
        }
    }

    pub fn next(&mut self) -> Transition {
        let NavigatorState::AtIndex(index) = self.state else {
            return Transition::Ignored;
        };
        if index + 1 < self.recipe.steps().len() {
            self.state = NavigatorState::AtIndex(index + 1);
            debug!("Advanced to step {}", index + 2);
            Transition::Moved
        } else {
            self.state = NavigatorState::AtIndex(0);
            debug!("Finished the last step, wrapping to step 1");
            Transition::Wrapped
        }
    }

    /// The previous control is disabled on the first step and when there are no steps.
    pub fn can_go_back(&self) -> bool {
        self.current().is_some_and(|current| !current.is_first)
    }

    /// The forward control turns into "finish" on the last step instead of
    /// being disabled, so it is only disabled when there are no steps.
    pub fn can_go_forward(&self) -> bool {
        self.state != NavigatorState::Empty
    }
}

fn initial_state(recipe: &Recipe) -> NavigatorState {
    if recipe.steps().is_empty() {
        NavigatorState::Empty
    } else {
        NavigatorState::AtIndex(0)
    }
}
