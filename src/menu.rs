//! Terminal front end of the profile screen: one-shot commands and the
//! interactive menu.

use anyhow::{Context, Result};
use dialoguer::console::Term;
use dialoguer::{Input, Select};
use tracing::debug;

use crate::config::Command;
use crate::domain::ProfileForm;
use crate::profile::{ActionOutcome, ProfileScreen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    EditProfile,
    ChangePassword,
    DeleteAccount,
    Reload,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 5] = [
        MenuItem::EditProfile,
        MenuItem::ChangePassword,
        MenuItem::DeleteAccount,
        MenuItem::Reload,
        MenuItem::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuItem::EditProfile => "Edit name and email",
            MenuItem::ChangePassword => "Change password",
            MenuItem::DeleteAccount => "Delete account",
            MenuItem::Reload => "Reload profile",
            MenuItem::Quit => "Quit",
        }
    }
}

/// Loads the profile, then runs a single command against it.
pub async fn run_command(screen: &mut ProfileScreen, command: Command) -> ActionOutcome {
    let loaded = screen.load().await;
    if loaded != ActionOutcome::Completed {
        return loaded;
    }

    match command {
        Command::Show => {
            print_profile(screen);
            ActionOutcome::Completed
        }
        Command::Update { name, email } => {
            apply_fields(screen.form_mut(), name, email);
            screen.save().await
        }
        Command::Password => screen.change_password().await,
        Command::Delete => screen.delete_account().await,
    }
}

/// Overwrites only the form fields that were given.
pub fn apply_fields(form: &mut ProfileForm, name: Option<String>, email: Option<String>) {
    if let Some(name) = name {
        form.name = name;
    }
    if let Some(email) = email {
        form.email = email;
    }
}

/// Loops over the menu until the user quits or closes it.
pub async fn run_interactive(screen: &mut ProfileScreen) -> Result<()> {
    screen.load().await;

    loop {
        print_profile(screen);

        let Some(item) = prompt_menu().await? else {
            break;
        };
        debug!(?item, "Menu selection");

        let outcome = match item {
            MenuItem::EditProfile => {
                let edited = prompt_form(screen.form().clone()).await?;
                *screen.form_mut() = edited;
                screen.save().await
            }
            MenuItem::ChangePassword => screen.change_password().await,
            MenuItem::DeleteAccount => screen.delete_account().await,
            MenuItem::Reload => screen.load().await,
            MenuItem::Quit => break,
        };
        debug!(?outcome, "Action finished");
    }

    Ok(())
}

fn print_profile(screen: &ProfileScreen) {
    match screen.user() {
        Some(user) => {
            println!();
            println!("  Id:    {}", user.id);
            println!("  Name:  {}", user.name);
            println!("  Email: {}", user.email);
            println!();
        }
        None => println!("\n  (profile not loaded)\n"),
    }
}

async fn prompt_menu() -> Result<Option<MenuItem>> {
    let choice = tokio::task::spawn_blocking(|| {
        let labels: Vec<&str> = MenuItem::ALL.iter().map(|item| item.label()).collect();
        Select::new()
            .with_prompt("My info (use arrows/enter, esc to quit)")
            .items(&labels)
            .default(0)
            .interact_on_opt(&Term::stderr())
    })
    .await
    .context("menu task failed")?
    .context("menu prompt failed")?;

    Ok(choice.map(|index| MenuItem::ALL[index]))
}

async fn prompt_form(current: ProfileForm) -> Result<ProfileForm> {
    tokio::task::spawn_blocking(move || -> Result<ProfileForm> {
        let term = Term::stderr();
        let name = Input::<String>::new()
            .with_prompt("Name")
            .default(current.name)
            .interact_text_on(&term)?;
        let email = Input::<String>::new()
            .with_prompt("Email")
            .default(current.email)
            .interact_text_on(&term)?;
        Ok(ProfileForm { name, email })
    })
    .await
    .context("form task failed")?
}
