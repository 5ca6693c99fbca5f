//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! - Workflow tasks send `UiEvent`s to `inbox_tx` when they finish
//! - Workflow dialog requests arrive on `dialog_rx` via `DialogHandle`
//! - The runtime drains both each frame, before polling the terminal
//!
//! Structure:
//! - `mod.rs`: Core runtime (TuiRuntime, event loop, effect dispatch)
//! - `handlers.rs`: Page workflow handlers run as tasks

mod handlers;

use std::future::Future;
use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tutorly_core::config::Config;
use tutorly_core::dialog::{self, DialogHandle, DialogReceiver};
use tutorly_core::interrupt;
use tutorly_core::workflows::InMemoryApi;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Interval between Tick events (spinner cadence).
pub const TICK_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal, the state, and the dialog channel. Terminal state is
/// restored on drop, panic, or a second Ctrl+C.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
    /// Cloned into every workflow task.
    dialogs: DialogHandle,
    dialog_rx: DialogReceiver,
    api: Arc<InMemoryApi>,
    last_tick: Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime.
    pub fn new(config: &Config) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        interrupt::set_restore_hook(|| {
            let _ = terminal::restore_terminal();
        });
        interrupt::reset();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let api = Arc::new(InMemoryApi::seeded(config.demo.latency()));
        api.set_offline(config.demo.offline);

        let state = AppState::new(config.dialog.clone(), config.demo.offline);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        let (dialogs, dialog_rx) = dialog::channel();

        Ok(Self {
            terminal,
            state,
            inbox_tx,
            inbox_rx,
            dialogs,
            dialog_rx,
            api,
            last_tick: Instant::now(),
        })
    }

    /// Runs the main event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("tui started");
        let mut dirty = true;

        while !self.state.tui.should_quit {
            if interrupt::is_interrupted() {
                self.state.tui.should_quit = true;
                break;
            }

            let events = self.collect_events()?;
            if !events.is_empty() {
                dirty = true;
            }

            for event in events {
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        tracing::info!("tui stopped");
        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        while let Ok(command) = self.dialog_rx.try_recv() {
            events.push(UiEvent::Dialog(command));
        }
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Don't block on the terminal if there is already work to process.
        let poll_duration = if events.is_empty() {
            TICK_DURATION.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= TICK_DURATION {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async effect and sends its result event to the inbox.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f().await);
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }
            UiEffect::SetOffline(offline) => {
                tracing::info!(offline, "backend availability changed");
                self.api.set_offline(offline);
            }
            UiEffect::RunPage(page) => {
                let dialogs = self.dialogs.clone();
                let api = Arc::clone(&self.api);
                self.spawn_effect(move || handlers::run_page(page, dialogs, api));
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
