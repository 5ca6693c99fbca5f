use serde::{Deserialize, Serialize};

use super::{Control, DialogKind, DialogMode, DialogRequest};

/// Button labels for the shared surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogLabels {
    /// Label of the single control in alert mode.
    pub acknowledge_label: String,
    /// Label of the affirmative control in confirm mode.
    pub affirmative_label: String,
    /// Label of the negative control in confirm mode.
    pub negative_label: String,
}

impl Default for DialogLabels {
    fn default() -> Self {
        Self {
            acknowledge_label: "OK".to_string(),
            affirmative_label: "Confirmar".to_string(),
            negative_label: "Cancelar".to_string(),
        }
    }
}

/// Everything a surface needs to draw one dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceView {
    pub title: String,
    pub message: String,
    /// Visual variant. `Some` for alerts, `None` for confirmations.
    pub variant: Option<DialogKind>,
    pub affirmative: String,
    /// Negative control label; `None` means the control is hidden.
    pub negative: Option<String>,
}

impl SurfaceView {
    /// Controls shown on the surface, in display order.
    pub fn controls(&self) -> Vec<Control> {
        if self.negative.is_some() {
            vec![Control::Affirmative, Control::Negative]
        } else {
            vec![Control::Affirmative]
        }
    }

    pub fn label(&self, control: Control) -> Option<&str> {
        match control {
            Control::Affirmative => Some(&self.affirmative),
            Control::Negative => self.negative.as_deref(),
        }
    }

    pub fn is_confirm(&self) -> bool {
        self.negative.is_some()
    }
}

/// Maps a request to the view the surface should display.
pub fn render_view(request: &DialogRequest, labels: &DialogLabels) -> SurfaceView {
    match request.mode {
        DialogMode::Alert { kind } => SurfaceView {
            title: request.title.clone(),
            message: request.message.clone(),
            variant: Some(kind),
            affirmative: labels.acknowledge_label.clone(),
            negative: None,
        },
        DialogMode::Confirm => SurfaceView {
            title: request.title.clone(),
            message: request.message.clone(),
            variant: None,
            affirmative: labels.affirmative_label.clone(),
            negative: Some(labels.negative_label.clone()),
        },
    }
}
