//! Overlay modules for the TUI.
//!
//! The only overlay is the shared dialog. While it is visible it takes over
//! keyboard input; the page menu behind it receives nothing.
//!
//! ## Module Structure
//!
//! - `dialog.rs`: `ModalSurface`, the terminal render target of the dialog
//! - `render_utils.rs`: Shared rendering utilities for overlays

pub mod dialog;
pub mod render_utils;

pub use dialog::ModalSurface;
