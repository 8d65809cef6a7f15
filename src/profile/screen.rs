use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};

use crate::clients::UserInfoService;
use crate::dialog::{Dialog, DialogOptions, DialogResult, DismissReason};
use crate::domain::{ProfileForm, User};
use super::Notices;

/// Which branch an action took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The backend accepted the call.
    Completed,
    /// The backend call failed and an error notice was shown.
    Failed,
    /// The user declined the prompt; nothing was sent.
    Cancelled,
    /// No profile is loaded yet; nothing was shown or sent.
    Skipped,
}

/// The "my info" screen: shows the signed-in user's profile and runs the
/// edit, password change and delete actions against a [`UserInfoService`].
///
/// Every backend failure ends in exactly one error notice. Local state only
/// changes after the backend acknowledges a call.
pub struct ProfileScreen {
    service: Arc<dyn UserInfoService>,
    dialog: Arc<dyn Dialog>,
    notices: Notices,
    user: Option<User>,
    form: ProfileForm,
}

impl ProfileScreen {
    pub fn new(
        service: Arc<dyn UserInfoService>,
        dialog: Arc<dyn Dialog>,
        notices: Notices,
    ) -> Self {
        Self {
            service,
            dialog,
            notices,
            user: None,
            form: ProfileForm::default(),
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProfileForm {
        &mut self.form
    }

    /// Fetches the profile and fills the form from it.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> ActionOutcome {
        match self.service.get_user_info().await {
            Ok(user) => {
                debug!(user_id = %user.id, "User info received");
                self.form.patch_from(&user);
                self.user = Some(user);
                ActionOutcome::Completed
            }
            Err(e) => {
                error!(error = %e, "Error fetching user info");
                self.notify(self.notices.load_failed()).await;
                ActionOutcome::Failed
            }
        }
    }

    /// Sends the loaded user with the form values laid over it.
    #[instrument(skip(self))]
    pub async fn save(&mut self) -> ActionOutcome {
        let Some(user) = &self.user else {
            debug!("No user loaded, skipping save");
            return ActionOutcome::Skipped;
        };

        let updated = user.merged_with(&self.form);
        match self.service.update_user_info(&updated).await {
            Ok(response) => {
                info!(user_id = %response.id, "User info updated");
                self.user = Some(response);
                self.notify(self.notices.update_succeeded()).await;
                ActionOutcome::Completed
            }
            Err(e) => {
                error!(error = %e, "Error updating user info");
                self.notify(self.notices.update_failed()).await;
                ActionOutcome::Failed
            }
        }
    }

    /// Deletes the account once the user confirms. The local copy is kept.
    #[instrument(skip(self))]
    pub async fn delete_account(&mut self) -> ActionOutcome {
        if self.user.is_none() {
            debug!("No user loaded, skipping delete");
            return ActionOutcome::Skipped;
        }

        if !self.ask(self.notices.confirm_delete()).await.is_confirmed {
            debug!("Delete cancelled");
            return ActionOutcome::Cancelled;
        }

        match self.service.delete_user().await {
            Ok(()) => {
                info!("User deleted");
                self.notify(self.notices.delete_succeeded()).await;
                ActionOutcome::Completed
            }
            Err(e) => {
                error!(error = %e, "Error deleting user");
                self.notify(self.notices.delete_failed()).await;
                ActionOutcome::Failed
            }
        }
    }

    /// Asks for a new password and sends it with a copy of the loaded user.
    /// Neither the local user nor the form changes.
    #[instrument(skip(self))]
    pub async fn change_password(&mut self) -> ActionOutcome {
        let Some(user) = &self.user else {
            debug!("No user loaded, skipping password change");
            return ActionOutcome::Skipped;
        };
        let user = user.clone();

        let answer = self.ask(self.notices.password_prompt()).await;
        let Some(password) = answer.accepted_value() else {
            debug!("Password change cancelled");
            return ActionOutcome::Cancelled;
        };

        match self.service.update_user_info(&user.with_password(password)).await {
            Ok(_) => {
                info!(user_id = %user.id, "Password updated");
                self.notify(self.notices.password_succeeded()).await;
                ActionOutcome::Completed
            }
            Err(e) => {
                error!(error = %e, "Error updating password");
                self.notify(self.notices.password_failed()).await;
                ActionOutcome::Failed
            }
        }
    }

    /// Shows a prompt. A broken dialog counts as the user closing it.
    async fn ask(&self, options: DialogOptions) -> DialogResult {
        match self.dialog.fire(options).await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "Dialog failed");
                DialogResult::dismissed(DismissReason::Close)
            }
        }
    }

    async fn notify(&self, options: DialogOptions) {
        if let Err(e) = self.dialog.fire(options).await {
            warn!(error = %e, "Could not show notice");
        }
    }
}
