use std::fmt::Write;

use crate::app::Panel;
use crate::view::{AppView, StepContent};

/// Header, active panel and navigation bar, as shown after every command.
pub fn render_screen(view: &AppView<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", view.title);

    let tabs = Panel::ALL
        .iter()
        .map(|panel| {
            if *panel == view.active_panel {
                format!("[{}]", panel.label())
            } else {
                panel.label().to_string()
            }
        })
        .collect::<Vec<String>>()
        .join(" | ");
    let _ = writeln!(out, "{tabs}");
    out.push('\n');

    out.push_str(&render_panel(view, view.active_panel));
    out
}

pub fn render_panel(view: &AppView<'_>, panel: Panel) -> String {
    let mut out = String::new();
    match panel {
        Panel::Intro => {
            let _ = writeln!(out, "{}", view.description);
        }
        Panel::Ingredients => {
            for ingredient in &view.ingredients {
                let _ = writeln!(out, "- {ingredient}");
            }
        }
        Panel::FullText => {
            let _ = writeln!(out, "{}", view.full_text);
        }
        Panel::Steps => {
            let steps = &view.steps;
            match steps.content {
                StepContent::Step(step) => {
                    let _ = writeln!(out, "{}", step.title());
                    let _ = writeln!(out, "{}", step.instructions());
                }
                StepContent::Message(message) => {
                    let _ = writeln!(out, "{message}");
                }
            }
            out.push('\n');
            let _ = writeln!(
                out,
                "{}  {}  {}",
                control(steps.previous_label, steps.previous_enabled),
                steps.counter,
                control(steps.next_label, steps.next_enabled)
            );
        }
    }
    out
}

/// Disabled controls are shown in parentheses.
fn control(label: &str, enabled: bool) -> String {
    if enabled {
        format!("<{label}>")
    } else {
        format!("({label})")
    }
}
