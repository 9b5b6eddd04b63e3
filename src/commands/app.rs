//! Interactive notes app: login, browse a day, add/edit/delete notes.

use anyhow::Result;
use calnotes_core::HttpClient;
use calnotes_core::date::{parse_day, today};
use calnotes_core::screens::home::LOADING;
use calnotes_core::screens::{Route, Shell};
use dialoguer::{Confirm, Input, Password, Select};
use owo_colors::OwoColorize;

use crate::render::{Render, note_choice};
use crate::utils::tui;

const HOME_ACTIONS: &[&str] = &[
    "Pick date",
    "Add note",
    "Edit note",
    "Delete note",
    "Refresh",
    "Logout",
    "Quit",
];

enum Flow {
    Continue,
    Quit,
}

pub async fn run(client: &HttpClient) -> Result<()> {
    let mut shell = Shell::new(today());

    loop {
        let flow = match shell.route() {
            Route::Login => login(&mut shell, client).await?,
            Route::Home => home(&mut shell, client).await?,
            Route::Editor(_) => editor(&mut shell, client).await?,
        };

        if let Flow::Quit = flow {
            return Ok(());
        }
    }
}

async fn login(shell: &mut Shell, client: &HttpClient) -> Result<Flow> {
    println!("{}", Route::Login.title().bold());
    println!("{}", "Plan • Organize • Achieve".dimmed());

    let email: String = Input::new()
        .with_prompt("  Email address")
        .allow_empty(true)
        .interact_text()?;
    let password = Password::new()
        .with_prompt("  Password")
        .allow_empty_password(true)
        .interact()?;

    let form = shell.login_mut();
    form.email = email;
    form.password = password;

    let result = tui::with_spinner(LOADING, shell.submit_login(client)).await;
    if let Err(e) = result {
        eprintln!("  {}", e.to_string().red());
    }

    Ok(Flow::Continue)
}

async fn home(shell: &mut Shell, client: &HttpClient) -> Result<Flow> {
    println!();
    println!("{}", shell.home().render());
    println!();

    let action = Select::new()
        .with_prompt(Route::Home.title())
        .items(HOME_ACTIONS)
        .default(0)
        .interact()?;

    match HOME_ACTIONS[action] {
        "Pick date" => {
            let date = prompt_day(shell.home().selected_date().to_string())?;
            tui::with_spinner(LOADING, shell.home_mut().select_date(date, client)).await;
        }
        "Add note" => {
            let params = shell.home().add_params();
            shell.open_editor(params);
        }
        "Edit note" => {
            if let Some(index) = pick_note(shell, "Edit which note?")? {
                let note = shell.home().notes()[index].clone();
                let params = shell.home().edit_params(&note);
                shell.open_editor(params);
            }
        }
        "Delete note" => {
            if let Some(index) = pick_note(shell, "Delete which note?")? {
                let note = shell.home().notes()[index].clone();
                let confirmed = Confirm::new()
                    .with_prompt(format!("Delete \"{}\"?", note.title))
                    .default(false)
                    .interact()?;
                if confirmed {
                    tui::with_spinner("Deleting...", shell.home_mut().delete(&note.id, client))
                        .await;
                }
            }
        }
        "Refresh" => {
            tui::with_spinner(LOADING, shell.home_mut().refresh(client)).await;
        }
        "Logout" => shell.logout(),
        _ => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

async fn editor(shell: &mut Shell, client: &HttpClient) -> Result<Flow> {
    let Some(form) = shell.editor_mut() else {
        shell.go_back(client).await;
        return Ok(Flow::Continue);
    };

    println!();
    println!(
        "{} {}",
        form.screen_title().bold(),
        form.selected_date().to_string().dimmed()
    );

    form.title = Input::new()
        .with_prompt("  Title")
        .with_initial_text(form.title.clone())
        .allow_empty(true)
        .interact_text()?;
    form.description = Input::new()
        .with_prompt("  Description")
        .with_initial_text(form.description.clone())
        .allow_empty(true)
        .interact_text()?;

    let choices = [form.submit_label(), "Cancel"];
    let choice = Select::new().items(&choices).default(0).interact()?;
    if choice == 1 {
        shell.go_back(client).await;
        return Ok(Flow::Continue);
    }

    let pending = form.pending_label();
    match tui::with_spinner(pending, shell.submit_editor(client)).await {
        Ok(note) => println!("{}", format!("  Saved: {}", note.title).green()),
        Err(e) => eprintln!("  {}", e.to_string().red()),
    }

    Ok(Flow::Continue)
}

/// Ask for a day until it parses.
fn prompt_day(current: String) -> Result<chrono::NaiveDate> {
    loop {
        let input: String = Input::new()
            .with_prompt("  Which day? (YYYY-MM-DD, today, tomorrow, yesterday)")
            .with_initial_text(current.clone())
            .interact_text()?;
        match parse_day(&input, today()) {
            Ok(date) => return Ok(date),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}

/// Let the user pick one of the listed notes. `None` when there are none.
fn pick_note(shell: &Shell, prompt: &str) -> Result<Option<usize>> {
    let notes = shell.home().notes();
    if notes.is_empty() || shell.home().error().is_some() {
        println!("  {}", "No notes to choose from".dimmed());
        return Ok(None);
    }

    let items: Vec<String> = notes.iter().map(note_choice).collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(index)
}
