//! Headless dialog rendering.
//!
//! Builds the same surface view the TUI would show and prints it as text.

use anyhow::Result;
use tutorly_core::config::Config;
use tutorly_core::dialog::{DialogKind, DialogRequest, render_view};

/// Canvas size for a headless render.
#[derive(Debug, Clone, Copy)]
pub struct Canvas {
    pub width: u16,
    pub height: u16,
}

pub fn alert(config: &Config, title: &str, message: &str, kind: &str, canvas: Canvas) -> Result<()> {
    let request = DialogRequest::alert(title, message, DialogKind::parse_lenient(kind));
    print_request(config, &request, canvas)
}

pub fn confirm(config: &Config, title: &str, message: &str, canvas: Canvas) -> Result<()> {
    let request = DialogRequest::confirm(title, message);
    print_request(config, &request, canvas)
}

fn print_request(config: &Config, request: &DialogRequest, canvas: Canvas) -> Result<()> {
    let view = render_view(request, &config.dialog);
    let text = tutorly_tui::render_view_to_string(&view, canvas.width, canvas.height)?;
    print!("{text}");
    Ok(())
}
