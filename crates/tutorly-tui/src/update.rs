//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tutorly_core::dialog::{DialogCommand, DialogMode};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::pages::MenuItem;
use crate::state::AppState;

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(Event::Key(key)) if key.kind == KeyEventKind::Press => {
            handle_key(app, key)
        }
        UiEvent::Terminal(_) => vec![],
        UiEvent::Dialog(command) => {
            handle_dialog_command(app, command);
            vec![]
        }
        UiEvent::WorkflowFinished { page, outcome } => {
            app.tui.running = None;
            app.tui
                .log(format!("{} finished: {}", page.label(), outcome.as_str()));
            vec![]
        }
    }
}

fn handle_dialog_command(app: &mut AppState, command: DialogCommand) {
    if app.dialog.has_pending() {
        app.tui.log("Pending confirmation superseded (declined)");
    }
    let entry = match &command {
        DialogCommand::Alert { title, kind, .. } => format!("Alert [{kind}]: {title}"),
        DialogCommand::Confirm { title, .. } => format!("Confirm: {title}"),
    };
    app.tui.log(entry);
    app.dialog.apply(command);
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    if app.dialog.is_visible() {
        handle_dialog_key(app, key);
        return vec![];
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.tui.select_previous();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.tui.select_next();
            vec![]
        }
        KeyCode::Esc | KeyCode::Char('q') => vec![UiEffect::Quit],
        KeyCode::Enter => activate_menu_item(app),
        _ => vec![],
    }
}

/// Routes a key to the dialog; the page behind never sees it.
fn handle_dialog_key(app: &mut AppState, key: KeyEvent) {
    let Some(control) = app.dialog.surface_mut().handle_key(key) else {
        return;
    };
    let label = app
        .dialog
        .surface()
        .view()
        .and_then(|view| view.label(control))
        .unwrap_or_default()
        .to_string();

    if let Some(request) = app.dialog.activate(control) {
        let verb = match request.mode {
            DialogMode::Alert { .. } => "acknowledged",
            DialogMode::Confirm => "answered",
        };
        app.tui
            .log(format!("{} {verb} with \"{label}\"", request.title));
    }
}

fn activate_menu_item(app: &mut AppState) -> Vec<UiEffect> {
    match app.tui.selected_item() {
        MenuItem::Run(page) => {
            if let Some(running) = app.tui.running {
                app.tui
                    .log(format!("Busy: {} is still running", running.label()));
                return vec![];
            }
            app.tui.running = Some(page);
            app.tui.log(format!("{} started", page.label()));
            vec![UiEffect::RunPage(page)]
        }
        MenuItem::ToggleBackend => {
            app.tui.offline = !app.tui.offline;
            let status = if app.tui.offline { "offline" } else { "online" };
            app.tui.log(format!("Backend {status}"));
            vec![UiEffect::SetOffline(app.tui.offline)]
        }
        MenuItem::Quit => vec![UiEffect::Quit],
    }
}
