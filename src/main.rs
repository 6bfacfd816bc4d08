use std::env;
use std::fs;
use std::io::{self, BufRead, Write};

use daily_recipe::render::{render_page, render_screen};
use daily_recipe::{fetch_recipe_with_config, App, AppConfig, Command, Panel, RecipeError};
use env_logger::Env;
use log::debug;

const HELP: &str = "Commandes : s (suivant), p (précédent), intro | ingredients | recette | etapes, aide, q (quitter)";

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    location: Option<String>,
    json: bool,
    export_html: Option<String>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--json" {
            parsed.json = true;
        } else if arg == "--export-html" {
            let path = args.next().ok_or("--export-html needs a file path")?;
            parsed.export_html = Some(path);
        } else if arg.starts_with("--") {
            return Err(format!("Unknown option {arg}"));
        } else if parsed.location.is_none() {
            parsed.location = Some(arg);
        } else {
            return Err(format!("Unexpected argument {arg}"));
        }
    }
    Ok(parsed)
}

enum Input {
    Command(Command),
    Help,
    Quit,
}

fn parse_input(line: &str) -> Option<Input> {
    let input = match line.trim() {
        "s" | "suivant" | "n" | "next" => Input::Command(Command::NextStep),
        "p" | "precedent" | "précédent" | "previous" => Input::Command(Command::PreviousStep),
        "aide" | "help" | "?" => Input::Help,
        "q" | "quitter" | "quit" => Input::Quit,
        id => Input::Command(Command::ShowPanel(id.parse::<Panel>().ok()?)),
    };
    Some(input)
}

fn run_interactive(app: &mut App) -> Result<(), RecipeError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", render_screen(&app.view()))?;
    writeln!(stdout, "{HELP}")?;

    for line in stdin.lock().lines() {
        match parse_input(&line?) {
            Some(Input::Command(command)) => {
                let transition = app.handle(command);
                debug!("{:?} -> {:?}", command, transition);
                writeln!(stdout, "{}", render_screen(&app.view()))?;
            }
            Some(Input::Help) => writeln!(stdout, "{HELP}")?,
            Some(Input::Quit) => break,
            None => writeln!(stdout, "Commande inconnue. {HELP}")?,
        }
        stdout.flush()?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = parse_args(env::args().skip(1))?;

    let mut config = AppConfig::load()?;
    if let Some(location) = args.location {
        config.location = location;
    }

    let result = fetch_recipe_with_config(&config).await;

    if args.json {
        let recipe = result?;
        println!("{}", serde_json::to_string_pretty(&recipe)?);
        return Ok(());
    }

    let mut app = App::from_result(result);

    if let Some(path) = args.export_html {
        fs::write(&path, render_page(&app.view()))?;
        println!("Page written to {path}");
        return Ok(());
    }

    run_interactive(&mut app)?;
    Ok(())
}
