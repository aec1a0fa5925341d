//! Interactive yes/no confirmation, injected into page containers.

use async_trait::async_trait;
use std::fmt;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

use crate::ui::core::actions::{Action, DialogType};

/// Asks the user to confirm a destructive action.
#[async_trait]
pub trait Confirm: Send + Sync {
    /// Resolves to `true` only when the user explicitly agrees.
    async fn confirm(&self, prompt: &str) -> bool;
}

/// One-shot answer channel carried by a confirmation dialog.
///
/// Cloning shares the same channel; the first answer wins and later ones are
/// ignored. Dropping every clone unanswered resolves the prompt as "no".
#[derive(Clone)]
pub struct ConfirmReply(Arc<Mutex<Option<oneshot::Sender<bool>>>>);

impl ConfirmReply {
    pub fn new(sender: oneshot::Sender<bool>) -> Self {
        Self(Arc::new(Mutex::new(Some(sender))))
    }

    pub fn answer(&self, confirmed: bool) {
        if let Ok(mut slot) = self.0.lock() {
            if let Some(sender) = slot.take() {
                let _ = sender.send(confirmed);
            }
        }
    }
}

impl fmt::Debug for ConfirmReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ConfirmReply")
    }
}

/// Confirmation through the app's dialog layer: sends a
/// [`DialogType::Confirm`] over the action channel and waits for the answer.
pub struct DialogConfirm {
    action_sender: mpsc::UnboundedSender<Action>,
}

impl DialogConfirm {
    pub fn new(action_sender: mpsc::UnboundedSender<Action>) -> Self {
        Self { action_sender }
    }
}

#[async_trait]
impl Confirm for DialogConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        let (tx, rx) = oneshot::channel();
        let dialog = DialogType::Confirm {
            prompt: prompt.to_string(),
            reply: ConfirmReply::new(tx),
        };

        if self.action_sender.send(Action::ShowDialog(dialog)).is_err() {
            log::warn!("Confirm: UI is gone, treating '{}' as declined", prompt);
            return false;
        }

        rx.await.unwrap_or(false)
    }
}
