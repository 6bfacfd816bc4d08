use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::app::Panel;
use crate::view::{AppView, StepContent};

/// Renders the whole page, every panel included, with the active one marked.
pub fn render_page(view: &AppView<'_>) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", encode_text(view.title));
    out.push_str("</head>\n<body>\n");
    let _ = writeln!(out, "<h1 id=\"app-title\">{}</h1>", encode_text(view.title));

    out.push_str("<nav>\n");
    for panel in Panel::ALL {
        let _ = writeln!(
            out,
            "<button class=\"{}\" data-target=\"{}\">{}</button>",
            active_class("nav-button", panel == view.active_panel),
            encode_double_quoted_attribute(panel.id()),
            encode_text(panel.label())
        );
    }
    out.push_str("</nav>\n");

    for panel in Panel::ALL {
        let _ = writeln!(
            out,
            "<section id=\"{}\" class=\"{}\">",
            encode_double_quoted_attribute(panel.id()),
            active_class("panel", panel == view.active_panel)
        );
        out.push_str(&panel_body(view, panel));
        out.push_str("</section>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn panel_body(view: &AppView<'_>, panel: Panel) -> String {
    let mut out = String::new();
    match panel {
        Panel::Intro => {
            let _ = writeln!(
                out,
                "<p id=\"recette-description\">{}</p>",
                encode_text(view.description)
            );
        }
        Panel::Ingredients => {
            out.push_str("<ul id=\"ingredients-list\">\n");
            for ingredient in &view.ingredients {
                let _ = writeln!(out, "<li>{}</li>", encode_text(ingredient));
            }
            out.push_str("</ul>\n");
        }
        Panel::FullText => {
            // Parsers drop a line break right after <pre>, so always emit one
            let _ = writeln!(
                out,
                "<pre id=\"recette-complete\">\n{}</pre>",
                encode_text(view.full_text)
            );
        }
        Panel::Steps => {
            let steps = &view.steps;
            out.push_str("<div id=\"etape-contenu\">\n");
            match steps.content {
                StepContent::Step(step) => {
                    let _ = writeln!(
                        out,
                        "<h3 class=\"etape-titre\">{}</h3>",
                        encode_text(step.title())
                    );
                    let _ = writeln!(out, "<p>{}</p>", encode_text(step.instructions()));
                }
                StepContent::Message(message) => {
                    let _ = writeln!(out, "<p>{}</p>", encode_text(message));
                }
            }
            out.push_str("</div>\n");
            let _ = writeln!(
                out,
                "<button id=\"precedent\"{}>{}</button>",
                disabled_attr(steps.previous_enabled),
                encode_text(steps.previous_label)
            );
            let _ = writeln!(
                out,
                "<span id=\"etape-compteur\">{}</span>",
                encode_text(&steps.counter)
            );
            let _ = writeln!(
                out,
                "<button id=\"suivant\"{}>{}</button>",
                disabled_attr(steps.next_enabled),
                encode_text(steps.next_label)
            );
        }
    }
    out
}

fn active_class(base: &str, active: bool) -> String {
    if active {
        format!("{base} active")
    } else {
        base.to_string()
    }
}

fn disabled_attr(enabled: bool) -> &'static str {
    if enabled {
        ""
    } else {
        " disabled"
    }
}
