use super::SurfaceView;

/// Render target owned by the host.
///
/// The controller decides what to show; the surface only draws it.
pub trait Surface {
    /// Shows `view`, replacing whatever the surface displayed before.
    fn present(&mut self, view: &SurfaceView);

    /// Hides the surface.
    fn hide(&mut self);
}

/// One call the controller made on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Presented(SurfaceView),
    Hidden,
}

/// Surface that keeps the current view and every call made on it.
///
/// Used for headless hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    current: Option<SurfaceView>,
    history: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The view currently shown, if the surface is visible.
    pub fn current(&self) -> Option<&SurfaceView> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Every present and hide so far, oldest first.
    pub fn history(&self) -> &[SurfaceEvent] {
        &self.history
    }

    /// Views presented so far, oldest first.
    pub fn presented(&self) -> impl Iterator<Item = &SurfaceView> {
        self.history.iter().filter_map(|event| match event {
            SurfaceEvent::Presented(view) => Some(view),
            SurfaceEvent::Hidden => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn present(&mut self, view: &SurfaceView) {
        self.current = Some(view.clone());
        self.history.push(SurfaceEvent::Presented(view.clone()));
    }

    fn hide(&mut self) {
        self.current = None;
        self.history.push(SurfaceEvent::Hidden);
    }
}
