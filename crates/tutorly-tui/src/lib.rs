//! Full-screen TUI for Tutorly.

pub mod effects;
pub mod events;
pub mod headless;
pub mod overlays;
pub mod pages;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
pub use headless::render_view_to_string;
pub use runtime::TuiRuntime;
use tutorly_core::config::Config;

/// Runs the interactive page demo until the user quits.
pub async fn run_demo(config: &Config) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The demo requires a terminal.\n\
             Use `tutorly alert` or `tutorly confirm` for non-interactive output."
        );
    }

    {
        let mut runtime = TuiRuntime::new(config)?;
        runtime.run()?;
    }

    // Print goodbye after TUI exits (terminal restored)
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}
