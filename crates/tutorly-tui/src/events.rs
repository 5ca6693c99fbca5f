//! UI events consumed by the reducer.

use crossterm::event::Event;
use tutorly_core::dialog::DialogCommand;
use tutorly_core::workflows::WorkflowOutcome;

use crate::pages::Page;

#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick (spinner animation, render cadence).
    Tick,
    /// Raw terminal input.
    Terminal(Event),
    /// A workflow asked for a dialog.
    Dialog(DialogCommand),
    /// A page workflow ran to completion.
    WorkflowFinished { page: Page, outcome: WorkflowOutcome },
}
