//! # Mock Framework
//!
//! Utilities for testing the screen and clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver, then helpers
//! like [`expect_get`] or [`expect_update`] to assert what reached the actor.
//! [`ScriptedDialog`] stands in for the terminal: it answers prompts from a
//! script and records every dialog it was asked to show.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use crate::dialog::{Dialog, DialogOptions, DialogResult, DismissReason};
use crate::error::DialogError;

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// Instead of spinning up a `ResourceActor`, the client sends into a channel
/// the test owns. The test inspects each request and answers it, which
/// simulates success, failure and ordering deterministically.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Patch, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update { id, patch, respond_to }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<(), FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Dialog double: prompts get the next scripted answer, timed notices are
/// dismissed by their timer straight away.
#[derive(Default)]
pub struct ScriptedDialog {
    answers: Mutex<VecDeque<DialogResult>>,
    shown: Mutex<Vec<DialogOptions>>,
}

impl ScriptedDialog {
    pub fn new(answers: impl IntoIterator<Item = DialogResult>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            shown: Mutex::new(Vec::new()),
        }
    }

    /// Every dialog fired so far, in order.
    pub fn shown(&self) -> Vec<DialogOptions> {
        self.shown.lock().unwrap().clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.shown().into_iter().map(|o| o.title).collect()
    }
}

#[async_trait]
impl Dialog for ScriptedDialog {
    async fn fire(&self, options: DialogOptions) -> Result<DialogResult, DialogError> {
        let is_notice = !options.is_prompt() && options.timer.is_some();
        self.shown.lock().unwrap().push(options);

        if is_notice {
            return Ok(DialogResult::dismissed(DismissReason::Timer));
        }
        Ok(self
            .answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| DialogResult::dismissed(DismissReason::Close)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{User, UserCreate};
    use crate::profile::Notices;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<User>(10);

        let create_task = tokio::spawn(async move {
            let user = UserCreate {
                name: "Test".to_string(),
                email: "test@example.com".to_string(),
                password: None,
            };
            client.create(user).await
        });

        let (payload, responder) = match receiver.recv().await {
            Some(ResourceRequest::Create { payload, respond_to }) => (payload, respond_to),
            other => panic!("Expected Create request, got {other:?}"),
        };
        assert_eq!(payload.name, "Test");
        responder.send(Ok("user_1".to_string())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok("user_1".to_string()));
    }

    #[tokio::test]
    async fn test_scripted_dialog_consumes_answers_for_prompts_only() {
        let notices = Notices::default();
        let dialog = ScriptedDialog::new([DialogResult::confirmed(None)]);

        let notice = dialog.fire(notices.update_succeeded()).await.unwrap();
        assert_eq!(notice.dismiss, Some(DismissReason::Timer));

        let answer = dialog.fire(notices.confirm_delete()).await.unwrap();
        assert!(answer.is_confirmed);

        let exhausted = dialog.fire(notices.confirm_delete()).await.unwrap();
        assert_eq!(exhausted.dismiss, Some(DismissReason::Close));
        assert_eq!(dialog.shown().len(), 3);
    }
}
