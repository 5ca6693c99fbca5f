//! Modal dialog overlay.
//!
//! `ModalSurface` is the terminal render target of the shared dialog. It
//! holds whatever the controller last presented plus the keyboard focus, maps
//! keys to controls, and draws the centered modal.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use tutorly_core::dialog::{Control, DialogKind, Surface, SurfaceView};
use unicode_width::UnicodeWidthStr;

use super::render_utils::{InputHint, OverlayConfig, render_overlay};

const DIALOG_WIDTH: u16 = 60;
/// Borders (2) + blank line + buttons row + hints row.
const DIALOG_CHROME_HEIGHT: u16 = 5;
/// Blank separator + buttons row at the bottom of the body.
const BUTTON_ROWS: u16 = 2;

/// Terminal surface for the shared dialog.
#[derive(Debug, Clone)]
pub struct ModalSurface {
    view: Option<SurfaceView>,
    focus: Control,
}

impl Default for ModalSurface {
    fn default() -> Self {
        Self {
            view: None,
            focus: Control::Affirmative,
        }
    }
}

impl Surface for ModalSurface {
    fn present(&mut self, view: &SurfaceView) {
        self.view = Some(view.clone());
        self.focus = Control::Affirmative;
    }

    fn hide(&mut self) {
        self.view = None;
    }
}

impl ModalSurface {
    pub fn view(&self) -> Option<&SurfaceView> {
        self.view.as_ref()
    }

    pub fn focus(&self) -> Control {
        self.focus
    }

    /// Maps a key press to the control it activates.
    ///
    /// Focus movement returns `None`. In alert mode every dismiss key maps to
    /// the acknowledgement control, since it is the only one shown.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Control> {
        let confirm = self.view.as_ref()?.is_confirm();

        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(self.focus),
            KeyCode::Char('y' | 'Y') => Some(Control::Affirmative),
            KeyCode::Esc | KeyCode::Char('n' | 'N') => Some(if confirm {
                Control::Negative
            } else {
                Control::Affirmative
            }),
            KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Char('h' | 'l')
                if confirm =>
            {
                self.focus = match self.focus {
                    Control::Affirmative => Control::Negative,
                    Control::Negative => Control::Affirmative,
                };
                None
            }
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if let Some(view) = &self.view {
            render_dialog(frame, view, self.focus, area);
        }
    }
}

/// Border color for a view's variant.
pub fn variant_color(variant: Option<DialogKind>) -> Color {
    match variant {
        Some(DialogKind::Info) => Color::Blue,
        Some(DialogKind::Success) => Color::Green,
        Some(DialogKind::Error) => Color::Red,
        None => Color::Yellow,
    }
}

/// Number of rows `text` occupies when wrapped to `width` columns.
fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows = text
        .lines()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum::<usize>()
        .max(1);
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn render_dialog(frame: &mut Frame, view: &SurfaceView, focus: Control, area: Rect) {
    let color = variant_color(view.variant);
    let width = DIALOG_WIDTH.min(area.width.saturating_sub(4));
    // Tall messages are clipped so the buttons stay on screen.
    let max_message_height = area.height.saturating_sub(DIALOG_CHROME_HEIGHT).max(1);
    let message_height =
        wrapped_height(&view.message, width.saturating_sub(2)).min(max_message_height);
    let height = message_height.saturating_add(DIALOG_CHROME_HEIGHT);

    let hints: Vec<InputHint> = if view.is_confirm() {
        vec![
            InputHint::new("Enter", "select"),
            InputHint::new("Tab", "switch"),
            InputHint::new("Esc", "cancel"),
        ]
    } else {
        vec![InputHint::new("Enter", "close")]
    };

    let layout = render_overlay(
        frame,
        area,
        &OverlayConfig {
            title: &view.title,
            border_color: color,
            width,
            height,
            hints: &hints,
        },
    );

    let message_area = Rect::new(
        layout.body.x,
        layout.body.y,
        layout.body.width,
        message_height.min(layout.body.height.saturating_sub(BUTTON_ROWS)),
    );
    let message = Paragraph::new(view.message.as_str()).wrap(Wrap { trim: false });
    frame.render_widget(message, message_area);

    let buttons_y = layout.body.y + layout.body.height.saturating_sub(1);
    let buttons_area = Rect::new(layout.body.x, buttons_y, layout.body.width, 1);
    let buttons = Paragraph::new(button_line(view, focus, color)).alignment(Alignment::Center);
    frame.render_widget(buttons, buttons_area);
}

fn button_line(view: &SurfaceView, focus: Control, color: Color) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, control) in view.controls().into_iter().enumerate() {
        let Some(label) = view.label(control) else {
            continue;
        };
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        let style = if control == focus {
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };
        spans.push(Span::styled(format!("[ {label} ]"), style));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use tutorly_core::dialog::{DialogLabels, DialogRequest, render_view};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn confirm_surface() -> ModalSurface {
        let mut surface = ModalSurface::default();
        let view = render_view(
            &DialogRequest::confirm("Cancelar Agendamento", "Tem certeza?"),
            &DialogLabels::default(),
        );
        surface.present(&view);
        surface
    }

    fn alert_surface(kind: DialogKind) -> ModalSurface {
        let mut surface = ModalSurface::default();
        let view = render_view(
            &DialogRequest::alert("Login Bem-Sucedido!", "Bem-vindo, Ana!", kind),
            &DialogLabels::default(),
        );
        surface.present(&view);
        surface
    }

    fn screen(surface: &ModalSurface) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 14)).unwrap();
        terminal
            .draw(|frame| surface.render(frame, frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_hidden_surface_ignores_keys() {
        let mut surface = ModalSurface::default();
        assert_eq!(surface.handle_key(key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_confirm_keys() {
        let mut surface = confirm_surface();
        assert_eq!(surface.handle_key(key(KeyCode::Char('y'))), Some(Control::Affirmative));
        assert_eq!(surface.handle_key(key(KeyCode::Char('n'))), Some(Control::Negative));
        assert_eq!(surface.handle_key(key(KeyCode::Esc)), Some(Control::Negative));
        assert_eq!(surface.handle_key(key(KeyCode::Enter)), Some(Control::Affirmative));
    }

    #[test]
    fn test_tab_moves_focus_in_confirm() {
        let mut surface = confirm_surface();
        assert_eq!(surface.handle_key(key(KeyCode::Tab)), None);
        assert_eq!(surface.focus(), Control::Negative);
        assert_eq!(surface.handle_key(key(KeyCode::Enter)), Some(Control::Negative));
    }

    #[test]
    fn test_alert_dismiss_keys_acknowledge() {
        let mut surface = alert_surface(DialogKind::Info);
        assert_eq!(surface.handle_key(key(KeyCode::Tab)), None);
        assert_eq!(surface.focus(), Control::Affirmative);
        assert_eq!(surface.handle_key(key(KeyCode::Esc)), Some(Control::Affirmative));
        assert_eq!(surface.handle_key(key(KeyCode::Char('n'))), Some(Control::Affirmative));
    }

    #[test]
    fn test_present_resets_focus() {
        let mut surface = confirm_surface();
        surface.handle_key(key(KeyCode::Tab));
        let view = surface.view().unwrap().clone();
        surface.present(&view);
        assert_eq!(surface.focus(), Control::Affirmative);
    }

    #[test]
    fn test_render_alert_shows_only_acknowledgement() {
        let text = screen(&alert_surface(DialogKind::Success));
        assert!(text.contains("Login Bem-Sucedido!"));
        assert!(text.contains("Bem-vindo, Ana!"));
        assert!(text.contains("[ OK ]"));
        assert!(!text.contains("Cancelar"));
    }

    #[test]
    fn test_render_confirm_shows_both_controls() {
        let text = screen(&confirm_surface());
        assert!(text.contains("[ Confirmar ]"));
        assert!(text.contains("[ Cancelar ]"));
    }

    #[test]
    fn test_render_hidden_draws_nothing() {
        let text = screen(&ModalSurface::default());
        assert!(text.trim().is_empty());
    }

    #[test]
    fn test_variant_colors_are_distinct() {
        assert_eq!(variant_color(Some(DialogKind::Success)), Color::Green);
        assert_eq!(variant_color(Some(DialogKind::Error)), Color::Red);
        assert_ne!(variant_color(None), variant_color(Some(DialogKind::Info)));
    }

    #[test]
    fn test_tall_message_keeps_buttons_visible() {
        let mut surface = ModalSurface::default();
        let request = DialogRequest::alert("Aviso", "linha\n".repeat(70_000), DialogKind::Info);
        surface.present(&render_view(&request, &DialogLabels::default()));

        let text = screen(&surface);

        assert!(text.contains("Aviso"));
        assert!(text.contains("[ OK ]"));
    }

    #[test]
    fn test_wrapped_height() {
        assert_eq!(wrapped_height("", 10), 1);
        assert_eq!(wrapped_height("abcdefghij", 10), 1);
        assert_eq!(wrapped_height("abcdefghijk", 10), 2);
        assert_eq!(wrapped_height("a\nb", 10), 2);
        assert_eq!(wrapped_height(&"\n".repeat(70_000), 10), u16::MAX);
    }
}
