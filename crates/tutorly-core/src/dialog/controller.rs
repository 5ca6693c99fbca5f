//! Dialog controller state machine.
//!
//! ```text
//!            show_alert / show_confirm
//!   Hidden ───────────────────────────▶ Visible { request, pending }
//!     ▲                                   │   │
//!     │      activate(control)            │   │ show_* (replace content,
//!     └───────────────────────────────────┘   │ settle old pending = false)
//!                                             ▼
//!                                   Visible { request', pending' }
//! ```
//!
//! A pending confirmation is always taken out of the state before it is
//! settled, so it can never fire twice.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

use super::{
    Control, DialogCommand, DialogKind, DialogLabels, DialogMode, DialogRequest, Surface,
    render_view,
};

/// Current state of the shared dialog.
#[derive(Debug, Default)]
pub enum DialogState {
    #[default]
    Hidden,
    Visible {
        request: DialogRequest,
        /// Outstanding confirmation result. Only set in confirm mode.
        pending: Option<oneshot::Sender<bool>>,
    },
}

impl DialogState {
    pub fn is_visible(&self) -> bool {
        matches!(self, DialogState::Visible { .. })
    }
}

/// Single-shot result of a confirm dialog.
///
/// Resolves to `true` when the affirmative control closes the dialog and to
/// `false` when the negative control closes it. A confirmation that is
/// superseded by another dialog, or whose controller is dropped, resolves to
/// `false`.
#[derive(Debug)]
pub struct Confirmation {
    rx: oneshot::Receiver<bool>,
    resolved: Option<bool>,
}

impl Confirmation {
    /// Creates a linked reply sender and confirmation.
    pub fn channel() -> (oneshot::Sender<bool>, Self) {
        let (tx, rx) = oneshot::channel();
        (tx, Self { rx, resolved: None })
    }

    /// Returns the decision without waiting, or `None` while still pending.
    pub fn try_result(&mut self) -> Option<bool> {
        if self.resolved.is_none() {
            self.resolved = match self.rx.try_recv() {
                Ok(decision) => Some(decision),
                Err(TryRecvError::Closed) => Some(false),
                Err(TryRecvError::Empty) => None,
            };
        }
        self.resolved
    }
}

impl Future for Confirmation {
    type Output = bool;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        if let Some(decision) = self.resolved {
            return Poll::Ready(decision);
        }
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(result) => {
                let decision = result.unwrap_or(false);
                self.resolved = Some(decision);
                Poll::Ready(decision)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Owns the dialog state and drives a [`Surface`].
#[derive(Debug)]
pub struct DialogController<S: Surface> {
    surface: S,
    labels: DialogLabels,
    state: DialogState,
}

impl<S: Surface> DialogController<S> {
    pub fn new(surface: S, labels: DialogLabels) -> Self {
        Self {
            surface,
            labels,
            state: DialogState::Hidden,
        }
    }

    /// Shows a one-button alert. Never fails.
    pub fn show_alert(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: DialogKind,
    ) {
        self.open(DialogRequest::alert(title, message, kind), None);
    }

    /// Shows a two-button confirmation and returns its pending result.
    pub fn show_confirm(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Confirmation {
        let (reply, confirmation) = Confirmation::channel();
        self.open(DialogRequest::confirm(title, message), Some(reply));
        confirmation
    }

    /// Executes a command received through a [`super::DialogHandle`].
    pub fn apply(&mut self, command: DialogCommand) {
        match command {
            DialogCommand::Alert {
                title,
                message,
                kind,
            } => self.show_alert(title, message, kind),
            DialogCommand::Confirm {
                title,
                message,
                reply,
            } => self.open(DialogRequest::confirm(title, message), Some(reply)),
        }
    }

    /// Close handler for both controls.
    ///
    /// Hides the surface and settles a pending confirmation with the
    /// control's decision. Returns the request that was closed, or `None`
    /// if the dialog was already hidden.
    pub fn activate(&mut self, control: Control) -> Option<DialogRequest> {
        let DialogState::Visible { request, pending } =
            std::mem::take(&mut self.state)
        else {
            return None;
        };

        self.surface.hide();

        if let Some(reply) = pending {
            let decision = control.decision();
            tracing::debug!(title = %request.title, decision, "dialog.settled");
            let _ = reply.send(decision);
        } else {
            tracing::debug!(title = %request.title, "dialog.acknowledged");
        }

        Some(request)
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// Whether a confirmation is waiting for the user.
    pub fn has_pending(&self) -> bool {
        matches!(
            self.state,
            DialogState::Visible {
                pending: Some(_),
                ..
            }
        )
    }

    /// The request currently shown, if any.
    pub fn request(&self) -> Option<&DialogRequest> {
        match &self.state {
            DialogState::Visible { request, .. } => Some(request),
            DialogState::Hidden => None,
        }
    }

    pub fn mode(&self) -> Option<DialogMode> {
        self.request().map(|request| request.mode)
    }

    pub fn labels(&self) -> &DialogLabels {
        &self.labels
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn open(&mut self, request: DialogRequest, pending: Option<oneshot::Sender<bool>>) {
        self.settle_superseded();

        let view = render_view(&request, &self.labels);
        self.surface.present(&view);
        tracing::debug!(
            title = %request.title,
            confirm = request.is_confirm(),
            "dialog.shown"
        );

        self.state = DialogState::Visible { request, pending };
    }

    /// Resolves a still-pending confirmation to `false` before it is replaced.
    fn settle_superseded(&mut self) {
        if let DialogState::Visible { request, pending } = &mut self.state
            && let Some(reply) = pending.take()
        {
            tracing::debug!(title = %request.title, "dialog.superseded");
            let _ = reply.send(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::{RecordingSurface, SurfaceEvent};

    fn controller() -> DialogController<RecordingSurface> {
        DialogController::new(RecordingSurface::new(), DialogLabels::default())
    }

    #[test]
    fn test_starts_hidden() {
        let dialog = controller();
        assert!(!dialog.is_visible());
        assert!(!dialog.surface().is_visible());
        assert_eq!(dialog.request(), None);
    }

    #[test]
    fn test_login_success_alert() {
        let mut dialog = controller();
        dialog.show_alert("Login Bem-Sucedido!", "Bem-vindo, Ana!", DialogKind::Success);

        let view = dialog.surface().current().unwrap();
        assert!(dialog.is_visible());
        assert_eq!(view.title, "Login Bem-Sucedido!");
        assert_eq!(view.message, "Bem-vindo, Ana!");
        assert_eq!(view.variant, Some(DialogKind::Success));
        assert_eq!(view.controls(), vec![Control::Affirmative]);
        assert!(!dialog.has_pending());
    }

    #[test]
    fn test_alerts_never_show_negative_control() {
        let mut dialog = controller();
        for kind in [DialogKind::Info, DialogKind::Success, DialogKind::Error] {
            dialog.show_alert("t", "m", kind);
            let view = dialog.surface().current().unwrap();
            assert_eq!(view.negative, None);
            assert_eq!(view.controls().len(), 1);
        }
    }

    #[test]
    fn test_variant_replaced_not_accumulated() {
        let mut dialog = controller();
        dialog.show_alert("Sucesso!", "ok", DialogKind::Success);
        dialog.show_alert("Erro", "falhou", DialogKind::Error);

        let view = dialog.surface().current().unwrap();
        assert_eq!(view.variant, Some(DialogKind::Error));
    }

    #[test]
    fn test_acknowledge_hides_alert() {
        let mut dialog = controller();
        dialog.show_alert("Aviso", "Nenhuma alteração.", DialogKind::Info);

        let closed = dialog.activate(Control::Affirmative).unwrap();
        assert_eq!(closed.title, "Aviso");
        assert!(!dialog.is_visible());
        assert!(!dialog.surface().is_visible());
    }

    #[test]
    fn test_activate_while_hidden_is_noop() {
        let mut dialog = controller();
        assert!(dialog.activate(Control::Affirmative).is_none());
        assert!(dialog.surface().history().is_empty());
    }

    #[test]
    fn test_confirm_shows_both_controls_until_activated() {
        let mut dialog = controller();
        let mut confirmation = dialog.show_confirm("Cancelar Agendamento", "Tem certeza?");

        let view = dialog.surface().current().unwrap();
        assert_eq!(view.variant, None);
        assert_eq!(
            view.controls(),
            vec![Control::Affirmative, Control::Negative]
        );
        assert!(dialog.has_pending());
        assert_eq!(confirmation.try_result(), None);
    }

    #[tokio::test]
    async fn test_affirmative_resolves_true() {
        let mut dialog = controller();
        let confirmation = dialog.show_confirm("Cancelar Agendamento", "Tem certeza?");

        dialog.activate(Control::Affirmative);

        assert!(confirmation.await);
        assert!(!dialog.is_visible());
        assert!(!dialog.surface().is_visible());
    }

    #[tokio::test]
    async fn test_negative_resolves_false() {
        let mut dialog = controller();
        let confirmation = dialog.show_confirm("Cancelar Agendamento", "Tem certeza?");

        dialog.activate(Control::Negative);

        assert!(!confirmation.await);
        assert!(!dialog.is_visible());
        assert!(matches!(
            dialog.surface().history(),
            [SurfaceEvent::Presented(_), SurfaceEvent::Hidden]
        ));
    }

    #[test]
    fn test_resolves_exactly_once() {
        let mut dialog = controller();
        let mut confirmation = dialog.show_confirm("t", "m");

        dialog.activate(Control::Negative);
        // Second activation finds the dialog hidden and cannot re-settle.
        assert!(dialog.activate(Control::Affirmative).is_none());

        assert_eq!(confirmation.try_result(), Some(false));
        assert_eq!(confirmation.try_result(), Some(false));
    }

    #[test]
    fn test_alert_supersedes_pending_confirm_with_false() {
        let mut dialog = controller();
        let mut confirmation = dialog.show_confirm("Rejeitar Agendamento", "Deseja rejeitar?");

        dialog.show_alert("Erro", "Sessão expirada.", DialogKind::Error);

        assert_eq!(confirmation.try_result(), Some(false));
        assert!(dialog.is_visible());
        assert!(!dialog.has_pending());
        let view = dialog.surface().current().unwrap();
        assert_eq!(view.title, "Erro");
        assert_eq!(view.negative, None);
    }

    #[test]
    fn test_confirm_supersedes_confirm_and_rebinds() {
        let mut dialog = controller();
        let mut first = dialog.show_confirm("Primeira", "?");
        let mut second = dialog.show_confirm("Segunda", "?");

        assert_eq!(first.try_result(), Some(false));
        assert_eq!(second.try_result(), None);

        dialog.activate(Control::Affirmative);
        assert_eq!(second.try_result(), Some(true));
        assert_eq!(first.try_result(), Some(false));
    }

    #[test]
    fn test_replacement_has_no_intermediate_hide() {
        let mut dialog = controller();
        let _confirmation = dialog.show_confirm("Primeira", "?");
        dialog.show_alert("Segunda", "!", DialogKind::Info);
        dialog.show_alert("Terceira", "!", DialogKind::Error);

        assert!(dialog.surface().is_visible());
        let history = dialog.surface().history();
        assert_eq!(history.len(), 3);
        assert!(!history.contains(&SurfaceEvent::Hidden));
        let titles: Vec<&str> = dialog
            .surface()
            .presented()
            .map(|view| view.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Primeira", "Segunda", "Terceira"]);

        dialog.activate(Control::Affirmative);
        assert_eq!(dialog.surface().history().last(), Some(&SurfaceEvent::Hidden));
    }

    #[test]
    fn test_dropping_controller_resolves_false() {
        let mut dialog = controller();
        let mut confirmation = dialog.show_confirm("t", "m");
        drop(dialog);
        assert_eq!(confirmation.try_result(), Some(false));
    }

    #[test]
    fn test_negative_on_alert_acknowledges() {
        let mut dialog = controller();
        dialog.show_alert("t", "m", DialogKind::Info);
        assert!(dialog.activate(Control::Negative).is_some());
        assert!(!dialog.is_visible());
    }
}
