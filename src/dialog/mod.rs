//! Modal prompts and timed notices shown to the user.
//!
//! A [`Dialog`] takes a [`DialogOptions`] description (title, text, icon,
//! optional input, buttons, optional auto-dismiss timer) and reports what
//! the user did as a [`DialogResult`].

pub mod terminal;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::DialogError;

pub use terminal::TerminalDialog;

/// Severity shown next to the dialog title.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Info,
    Question,
}

/// Kind of single value a dialog may collect.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Password,
}

/// Why a dialog closed without confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Cancel,
    Timer,
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogOptions {
    pub title: String,
    pub text: Option<String>,
    pub icon: Option<Icon>,
    pub input: Option<InputKind>,
    pub input_label: Option<String>,
    pub input_placeholder: Option<String>,
    pub show_confirm_button: bool,
    pub show_cancel_button: bool,
    pub confirm_button_text: String,
    pub cancel_button_text: String,
    pub confirm_button_color: Option<String>,
    pub cancel_button_color: Option<String>,
    pub timer: Option<Duration>,
}

impl DialogOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: None,
            icon: None,
            input: None,
            input_label: None,
            input_placeholder: None,
            show_confirm_button: true,
            show_cancel_button: false,
            confirm_button_text: "OK".to_string(),
            cancel_button_text: "Cancel".to_string(),
            confirm_button_color: None,
            cancel_button_color: None,
            timer: None,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn input(
        mut self,
        kind: InputKind,
        label: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        self.input = Some(kind);
        self.input_label = Some(label.into());
        self.input_placeholder = Some(placeholder.into());
        self
    }

    pub fn confirm_button(mut self, text: impl Into<String>) -> Self {
        self.show_confirm_button = true;
        self.confirm_button_text = text.into();
        self
    }

    pub fn cancel_button(mut self, text: impl Into<String>) -> Self {
        self.show_cancel_button = true;
        self.cancel_button_text = text.into();
        self
    }

    pub fn button_colors(mut self, confirm: impl Into<String>, cancel: impl Into<String>) -> Self {
        self.confirm_button_color = Some(confirm.into());
        self.cancel_button_color = Some(cancel.into());
        self
    }

    /// Notice that closes by itself after `after` and offers no buttons.
    pub fn auto_dismiss(mut self, after: Duration) -> Self {
        self.show_confirm_button = false;
        self.show_cancel_button = false;
        self.timer = Some(after);
        self
    }

    /// True when the user is expected to answer rather than just read.
    pub fn is_prompt(&self) -> bool {
        self.input.is_some() || self.show_cancel_button
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogResult {
    pub is_confirmed: bool,
    pub dismiss: Option<DismissReason>,
    pub value: Option<String>,
}

impl DialogResult {
    pub fn confirmed(value: Option<String>) -> Self {
        Self { is_confirmed: true, dismiss: None, value }
    }

    pub fn dismissed(reason: DismissReason) -> Self {
        Self { is_confirmed: false, dismiss: Some(reason), value: None }
    }

    /// The collected value, when confirmed and non-empty.
    pub fn accepted_value(&self) -> Option<&str> {
        if !self.is_confirmed {
            return None;
        }
        self.value.as_deref().filter(|v| !v.is_empty())
    }
}

#[async_trait]
pub trait Dialog: Send + Sync {
    async fn fire(&self, options: DialogOptions) -> Result<DialogResult, DialogError>;
}
