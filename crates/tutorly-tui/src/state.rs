//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState            (page menu, activity log, flags)
//! └── dialog: DialogController (shared modal, draws into ModalSurface)
//! ```
//!
//! The dialog lives beside `TuiState` rather than inside it so the reducer
//! can borrow both mutably at once.

use std::collections::VecDeque;

use tutorly_core::dialog::{DialogController, DialogLabels};

use crate::overlays::ModalSurface;
use crate::pages::{MenuItem, Page};

/// Maximum activity entries kept for display.
pub const ACTIVITY_CAPACITY: usize = 100;

pub struct AppState {
    pub tui: TuiState,
    pub dialog: DialogController<ModalSurface>,
}

impl AppState {
    pub fn new(labels: DialogLabels, offline: bool) -> Self {
        Self {
            tui: TuiState::new(offline),
            dialog: DialogController::new(ModalSurface::default(), labels),
        }
    }
}

/// Non-dialog UI state.
#[derive(Debug)]
pub struct TuiState {
    /// Selected menu row.
    pub selected: usize,
    /// Page workflow in flight, if any.
    pub running: Option<Page>,
    /// Whether the simulated backend is unreachable.
    pub offline: bool,
    pub activity: VecDeque<String>,
    pub spinner_frame: usize,
    pub should_quit: bool,
}

impl TuiState {
    pub fn new(offline: bool) -> Self {
        Self {
            selected: 0,
            running: None,
            offline,
            activity: VecDeque::new(),
            spinner_frame: 0,
            should_quit: false,
        }
    }

    pub fn selected_item(&self) -> MenuItem {
        let items = MenuItem::all();
        items[self.selected.min(items.len() - 1)]
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < MenuItem::all().len() {
            self.selected += 1;
        }
    }

    /// Appends to the activity log, dropping the oldest entry when full.
    pub fn log(&mut self, entry: impl Into<String>) {
        if self.activity.len() == ACTIVITY_CAPACITY {
            self.activity.pop_front();
        }
        self.activity.push_back(entry.into());
    }
}
