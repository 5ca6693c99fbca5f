//! Off-screen rendering of a dialog view.
//!
//! Draws the modal into a `TestBackend` buffer and returns it as plain text,
//! so a view can be printed without taking over the terminal.

use anyhow::{Context, Result};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use tutorly_core::dialog::{Surface, SurfaceView};

use crate::overlays::ModalSurface;

/// Renders `view` centered in a `width` x `height` canvas.
///
/// Rows are joined with newlines; trailing blanks on each row are trimmed.
pub fn render_view_to_string(view: &SurfaceView, width: u16, height: u16) -> Result<String> {
    let mut surface = ModalSurface::default();
    surface.present(view);

    let mut terminal = Terminal::new(TestBackend::new(width, height))
        .context("Failed to create off-screen terminal")?;
    terminal
        .draw(|frame| surface.render(frame, frame.area()))
        .context("Failed to draw dialog")?;

    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let row: String = (area.left()..area.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect();
        out.push_str(row.trim_end());
        out.push('\n');
    }
    Ok(out)
}
