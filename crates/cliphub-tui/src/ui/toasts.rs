use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use super::Component;
use crate::app::{AppState, Severity};
use crate::theme::Palette;

/// At most this many notifications stack on screen.
const MAX_VISIBLE: usize = 4;

pub(crate) struct ToastsComponent;

impl Component for ToastsComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState, palette: &Palette) {
        if state.toasts.is_empty() || area.width < 12 || area.height < 3 {
            return;
        }

        let newest_first = state.toasts.iter().rev().take(MAX_VISIBLE);
        for (slot, toast) in newest_first.enumerate() {
            let y = area.y + 1 + slot as u16;
            if y >= area.y + area.height - 1 {
                break;
            }

            let (badge, color) = match toast.severity {
                Severity::Success => ("✔", palette.success),
                Severity::Error => ("✖", palette.danger),
                Severity::Neutral => ("•", palette.accent),
            };

            // A closing toast dims out instead of vanishing mid-frame.
            let style = if toast.closing_since.is_some() {
                Style::default().fg(palette.dim)
            } else {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            };

            let text = format!(" {} {} ", badge, toast.message);
            let width = (text.chars().count() as u16).min(area.width.saturating_sub(2));
            let rect = Rect {
                x: area.x + area.width - width - 1,
                y,
                width,
                height: 1,
            };

            f.render_widget(Clear, rect);
            f.render_widget(
                Paragraph::new(Line::from(Span::styled(text, style))),
                rect,
            );
        }
    }
}
