//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only; the reducer itself never
//! touches the backend or spawns tasks.

use crate::pages::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Spawn the workflow behind a page.
    RunPage(Page),

    /// Switch the simulated backend on or off.
    SetOffline(bool),
}
