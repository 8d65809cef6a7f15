use std::io;

use async_trait::async_trait;
use dialoguer::console::{style, StyledObject, Term};
use dialoguer::{Input, Password, Select};
use tracing::{debug, instrument};

use crate::error::DialogError;
use super::{Dialog, DialogOptions, DialogResult, DismissReason, Icon, InputKind};

/// Dialog facility drawn on the terminal with `dialoguer` prompts.
///
/// Buttons become a two-item selection, escape closes the dialog, and timed
/// notices are printed and then held on screen for their timer.
#[derive(Debug, Clone)]
pub struct TerminalDialog {
    term: Term,
}

impl TerminalDialog {
    pub fn new() -> Self {
        Self { term: Term::stderr() }
    }
}

impl Default for TerminalDialog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Dialog for TerminalDialog {
    #[instrument(skip(self, options), fields(title = %options.title))]
    async fn fire(&self, options: DialogOptions) -> Result<DialogResult, DialogError> {
        let term = self.term.clone();
        let timer = options.timer;
        debug!(prompt = options.is_prompt(), "Showing dialog");

        let result = tokio::task::spawn_blocking(move || render(&term, &options))
            .await
            .map_err(|e| DialogError::Io(io::Error::other(e)))??;

        if let (None, Some(after)) = (&result, timer) {
            tokio::time::sleep(after).await;
            debug!("Notice dismissed by timer");
            return Ok(DialogResult::dismissed(DismissReason::Timer));
        }

        Ok(result.unwrap_or_else(|| DialogResult::dismissed(DismissReason::Close)))
    }
}

/// Draws the dialog. `None` means it was only a notice and needs no answer.
fn render(term: &Term, options: &DialogOptions) -> Result<Option<DialogResult>, DialogError> {
    term.write_line("")?;
    term.write_line(&headline(options).to_string())?;
    if let Some(text) = &options.text {
        term.write_line(&format!("  {text}"))?;
    }

    let value = match options.input {
        Some(kind) => Some(read_input(term, options, kind)?),
        None => None,
    };

    if options.show_cancel_button {
        let buttons = [&options.confirm_button_text, &options.cancel_button_text];
        let choice = Select::new()
            .items(&buttons)
            .default(0)
            .interact_on_opt(term)?;
        return Ok(Some(match choice {
            Some(0) => DialogResult::confirmed(value),
            Some(_) => DialogResult::dismissed(DismissReason::Cancel),
            None => DialogResult::dismissed(DismissReason::Close),
        }));
    }

    if options.show_confirm_button {
        if value.is_none() {
            term.write_line(&format!("  [{}]", options.confirm_button_text))?;
            term.read_line()?;
        }
        return Ok(Some(DialogResult::confirmed(value)));
    }

    Ok(None)
}

fn read_input(
    term: &Term,
    options: &DialogOptions,
    kind: InputKind,
) -> Result<String, DialogError> {
    let label = options.input_label.as_deref().unwrap_or("Value");
    let prompt = match &options.input_placeholder {
        Some(hint) => format!("{label} ({hint})"),
        None => label.to_string(),
    };

    let value = match kind {
        InputKind::Password => Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact_on(term)?,
        InputKind::Text => Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(term)?,
    };
    Ok(value)
}

fn headline(options: &DialogOptions) -> StyledObject<String> {
    let title = options.title.clone();
    match options.icon {
        Some(Icon::Success) => style(format!("✔ {title}")).green().bold(),
        Some(Icon::Error) => style(format!("✖ {title}")).red().bold(),
        Some(Icon::Warning) => style(format!("! {title}")).yellow().bold(),
        Some(Icon::Info) => style(format!("i {title}")).cyan().bold(),
        Some(Icon::Question) => style(format!("? {title}")).blue().bold(),
        None => style(title).bold(),
    }
}
