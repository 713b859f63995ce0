use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::app::{AppState, InputMode};
use crate::theme::Palette;

pub(crate) struct FooterComponent;

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState, palette: &Palette) {
        let bindings: &[(&str, &str)] = match state.input_mode() {
            InputMode::Compose => &[
                ("Ctrl+Enter", "save"),
                ("Ctrl+U", "clear"),
                ("Tab", "next pane"),
            ],
            InputMode::Search => &[("Tab", "next pane"), ("Esc", "to list")],
            InputMode::Edit => &[("Ctrl+S", "save"), ("Esc", "cancel")],
            InputMode::List => &[
                ("j/k", "move"),
                ("c", "copy"),
                ("e", "edit"),
                ("d", "delete"),
                ("r", "refresh"),
                ("a", "auto-sync"),
                ("s", "sort"),
                ("t", "theme"),
                ("/", "search"),
                ("q", "quit"),
            ],
        };

        let mut spans = Vec::new();
        for (i, (keys, action)) in bindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", Style::default().fg(palette.dim)));
            }
            spans.push(Span::styled(
                format!("[{}]", keys),
                Style::default().fg(palette.warn),
            ));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(palette.dim),
            ));
        }

        let footer = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(palette.border)),
        );
        f.render_widget(footer, area);
    }
}
