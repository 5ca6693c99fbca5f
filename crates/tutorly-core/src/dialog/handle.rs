//! Channel-based call surface for async callers.
//!
//! Workflows run as tasks and never touch the controller directly. They send
//! `DialogCommand`s to the task that owns it (the TUI runtime drains them
//! each frame and calls `DialogController::apply`).

use tokio::sync::{mpsc, oneshot};

use super::{Confirmation, DialogKind};

/// A dialog request sent to the host that owns the controller.
#[derive(Debug)]
pub enum DialogCommand {
    Alert {
        title: String,
        message: String,
        kind: DialogKind,
    },
    Confirm {
        title: String,
        message: String,
        reply: oneshot::Sender<bool>,
    },
}

pub type DialogReceiver = mpsc::UnboundedReceiver<DialogCommand>;

/// Creates a handle and the receiver the host drains.
pub fn channel() -> (DialogHandle, DialogReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (DialogHandle { tx }, rx)
}

/// Cloneable sender side of the dialog channel.
#[derive(Debug, Clone)]
pub struct DialogHandle {
    tx: mpsc::UnboundedSender<DialogCommand>,
}

impl DialogHandle {
    /// Requests an alert. Fire-and-forget.
    pub fn show_alert(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: DialogKind,
    ) {
        let command = DialogCommand::Alert {
            title: title.into(),
            message: message.into(),
            kind,
        };
        if self.tx.send(command).is_err() {
            tracing::warn!("dialog host closed; alert dropped");
        }
    }

    /// Requests a confirmation and returns its pending result.
    ///
    /// If the host is gone the reply sender is dropped with the command and
    /// the confirmation resolves to `false`.
    pub fn show_confirm(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Confirmation {
        let (reply, confirmation) = Confirmation::channel();
        let command = DialogCommand::Confirm {
            title: title.into(),
            message: message.into(),
            reply,
        };
        if self.tx.send(command).is_err() {
            tracing::warn!("dialog host closed; confirmation declined");
        }
        confirmation
    }
}
