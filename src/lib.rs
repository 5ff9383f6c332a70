pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod report;

#[cfg(test)]
pub(crate) mod test_support;

use anyhow::{Context, Result};
use app::{
    events::AppEvent,
    input::{Command, HELP_TEXT, parse_command, suggestions},
    state::{AppMode, AppState, EventOutcome},
    store::{JsonFileStore, Preferences, store_path},
};
use cli::Cli;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};
use tracing::info;

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;
    let mut app = AppState::new(&cli, open_preferences(&cli));
    let (tx, rx) = mpsc::channel::<AppEvent>(32);

    let city = app.initial_city(&cli);
    app.start_search(&tx, city);

    if cli.interactive {
        run_interactive(&mut app, &tx, rx).await
    } else {
        run_once(&mut app, &cli, rx).await
    }
}

pub fn open_preferences(cli: &Cli) -> Preferences {
    if cli.no_persist {
        return Preferences::default();
    }
    match store_path() {
        Some(path) => {
            info!(path = %path.display(), "using preferences store");
            Preferences::new(Box::new(JsonFileStore::open(path)))
        }
        None => Preferences::default(),
    }
}

async fn run_once(app: &mut AppState, cli: &Cli, mut rx: mpsc::Receiver<AppEvent>) -> Result<()> {
    while let Some(event) = rx.recv().await {
        match app.handle_event(event) {
            EventOutcome::Discarded => continue,
            EventOutcome::Failed => {
                let message = app.last_error.clone().unwrap_or_default();
                anyhow::bail!(message);
            }
            EventOutcome::Displayed => break,
        }
    }

    let record = app
        .weather
        .as_ref()
        .context("search finished without a weather record")?;
    if cli.json {
        println!("{}", report::render_json(record)?);
    } else {
        print!("{}", report::render_text(record, app.units));
    }

    if cli.save {
        announce_save(app);
    }
    Ok(())
}

async fn run_interactive(
    app: &mut AppState,
    tx: &mpsc::Sender<AppEvent>,
    mut rx: mpsc::Receiver<AppEvent>,
) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    println!("{HELP_TEXT}");

    // After stdin closes, stay around until the latest search has landed.
    while app.running && (stdin_open || app.mode == AppMode::Loading) {
        tokio::select! {
            line = lines.next_line(), if stdin_open => {
                match line.context("reading stdin failed")? {
                    Some(line) => handle_command(app, tx, parse_command(&line)),
                    None => stdin_open = false,
                }
            }
            Some(event) = rx.recv() => {
                let outcome = app.handle_event(event);
                present(app, outcome);
            }
        }

        if app.mode == AppMode::Quit {
            app.running = false;
        }
    }

    Ok(())
}

fn handle_command(app: &mut AppState, tx: &mpsc::Sender<AppEvent>, command: Command) {
    match command {
        Command::Search(city) => {
            app.start_search(tx, city);
        }
        Command::ToggleSave => announce_save(app),
        Command::ShowSaved => print_list("Saved locations", &app.preferences.saved_locations()),
        Command::ShowHistory => print_list("Recent searches", &app.preferences.history()),
        Command::SetUnits(units) => {
            app.units = units;
            if let Some(record) = &app.weather {
                print!("{}", report::render_text(record, units));
            }
        }
        Command::Suggest(prefix) => print_list("Suggestions", &suggestions(&prefix)),
        Command::Help => println!("{HELP_TEXT}"),
        Command::Quit => app.mode = AppMode::Quit,
        Command::Unknown(other) => eprintln!("Unknown command :{other}"),
        Command::Empty => {}
    }
}

fn present(app: &AppState, outcome: EventOutcome) {
    match outcome {
        EventOutcome::Displayed => {
            if let Some(record) = &app.weather {
                print!("{}", report::render_text(record, app.units));
            }
        }
        EventOutcome::Failed => {
            if let Some(message) = &app.last_error {
                eprintln!("Error: {message}");
            }
            if let Some(city) = &app.unresolved_city {
                let similar = suggestions(city);
                if !similar.is_empty() {
                    eprintln!("Did you mean: {}", similar.join(", "));
                }
            }
        }
        EventOutcome::Discarded => {}
    }
}

fn announce_save(app: &mut AppState) {
    let Some(city) = app.current_city.clone() else {
        eprintln!("Nothing to save yet");
        return;
    };
    match app.toggle_save_current() {
        Some(true) => eprintln!("{city} has been added to saved locations"),
        Some(false) => eprintln!("{city} has been removed from saved locations"),
        None => eprintln!("Could not update saved locations"),
    }
}

fn print_list<S: AsRef<str>>(title: &str, items: &[S]) {
    if items.is_empty() {
        println!("{title}: none");
    } else {
        let items: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
        println!("{title}: {}", items.join(", "));
    }
}
