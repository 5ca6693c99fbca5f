//! Shared modal dialog.
//!
//! One modal surface is reused for two modes:
//! - **Alert**: a single acknowledgement control, styled by [`DialogKind`].
//! - **Confirm**: affirmative + negative controls; the caller awaits a
//!   [`Confirmation`] that resolves to the user's choice.
//!
//! ## Module Structure
//!
//! - `controller.rs`: `DialogController` state machine and `Confirmation`
//! - `view.rs`: pure request -> `SurfaceView` render function
//! - `surface.rs`: `Surface` render target trait and `RecordingSurface`
//! - `handle.rs`: channel-based `DialogHandle` for async callers

mod controller;
mod handle;
mod surface;
mod view;

use std::fmt;

pub use controller::{Confirmation, DialogController, DialogState};
pub use handle::{DialogCommand, DialogHandle, DialogReceiver, channel};
use serde::{Deserialize, Serialize};
pub use surface::{RecordingSurface, Surface, SurfaceEvent};
pub use view::{DialogLabels, SurfaceView, render_view};

/// Presentational variant of an alert.
///
/// Purely visual: the kind never changes how the dialog closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogKind {
    #[default]
    Info,
    Success,
    Error,
}

impl DialogKind {
    /// Parses a kind name, falling back to `Info` for anything unrecognized.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "success" => DialogKind::Success,
            "error" => DialogKind::Error,
            _ => DialogKind::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DialogKind::Info => "info",
            DialogKind::Success => "success",
            DialogKind::Error => "error",
        }
    }
}

impl fmt::Display for DialogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Behavioral mode of a dialog invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Alert { kind: DialogKind },
    Confirm,
}

/// Content and mode of a single dialog invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    pub title: String,
    pub message: String,
    pub mode: DialogMode,
}

impl DialogRequest {
    pub fn alert(title: impl Into<String>, message: impl Into<String>, kind: DialogKind) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            mode: DialogMode::Alert { kind },
        }
    }

    pub fn confirm(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            mode: DialogMode::Confirm,
        }
    }

    pub fn is_confirm(&self) -> bool {
        matches!(self.mode, DialogMode::Confirm)
    }
}

/// One of the two controls on the surface.
///
/// In alert mode the affirmative control is the acknowledgement button and
/// the negative control is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Affirmative,
    Negative,
}

impl Control {
    /// The value a pending confirmation settles with when this control closes it.
    pub fn decision(self) -> bool {
        matches!(self, Control::Affirmative)
    }
}
